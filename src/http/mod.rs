//! HTTP client module
//!
//! A thin layer over reqwest that every request in the crate goes through.
//!
//! # Features
//!
//! - **URL joining**: relative endpoint paths are resolved against the
//!   configured Horizon URL; absolute URLs pass through unchanged
//! - **Error classification**: non-2xx responses become `Error::Server` with
//!   the problem document attached, connection failures stay `Error::Http`
//! - **Streaming**: long-lived `text/event-stream` connections without an
//!   overall request timeout

mod client;

pub use client::HttpClient;
