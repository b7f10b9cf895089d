// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::needless_pass_by_value)]

//! # Horizon Client
//!
//! A paginated and streaming client for Horizon hypermedia REST resources.
//!
//! ## Features
//!
//! - **Canonical URLs**: request descriptors serialize to one URL per logical request
//! - **Cursor Pagination**: next/prev pages derived from record paging tokens
//! - **Streaming**: cancellable server-sent event subscriptions with in-order delivery
//! - **Typed Errors**: invalid parameters, exhausted pages, server problems and
//!   transport failures are distinct kinds
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use horizon_client::{Client, ClientConfig, Ledger, LedgerRequest, Order, Result};
//! use tokio_util::sync::CancellationToken;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let client = Client::new(ClientConfig::testnet())?;
//!
//!     // One page, then the next one
//!     let request = LedgerRequest::new().order(Order::Descending).limit(10);
//!     let page = client.ledgers(&request).await?;
//!     let older = client.next_page(&page, &request).await?;
//!     println!("{} ledgers", older.len());
//!
//!     // New ledgers as they close
//!     let cancel = CancellationToken::new();
//!     client
//!         .stream_ledgers(&cancel, &LedgerRequest::new(), |ledger: Ledger| {
//!             println!("ledger {}", ledger.sequence);
//!         })
//!         .await
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────────┐
//! │                            Client                             │
//! │  fetch_one()  fetch_page()  next_page()/prev_page()  stream() │
//! └───────────────────────────────────────────────────────────────┘
//!                                │
//! ┌────────────┬─────────────┬───┴─────────┬───────────┬──────────┐
//! │  Request   │  Resource   │ Pagination  │  Stream   │   HTTP   │
//! ├────────────┼─────────────┼─────────────┼───────────┼──────────┤
//! │ build_url  │ Page        │ Direction   │ SSE frames│ reqwest  │
//! │ Collection │ Ledger      │ page_request│ subscribe │ status → │
//! │ Params     │ Problem     │             │ handler   │ Problem  │
//! └────────────┴─────────────┴─────────────┴───────────┴──────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the client
pub mod error;

/// Common types and type aliases
pub mod types;

/// Client configuration
pub mod config;

/// HTTP transport
pub mod http;

/// Request descriptors
pub mod request;

/// Response envelopes, records and problem documents
pub mod resource;

/// Cursor pagination
pub mod pagination;

/// Server-sent event subscriptions
pub mod stream;

/// Client facade
pub mod client;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use client::Client;
pub use config::ClientConfig;
pub use error::{Error, ErrorKind, Result};
pub use pagination::Direction;
pub use request::{CollectionParams, CollectionRequest, LedgerRequest, ResourceRequest};
pub use resource::{Ledger, Link, Page, Problem, Record};
pub use stream::RecordHandler;
pub use types::{Order, CURSOR_NOW};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
