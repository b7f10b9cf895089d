//! Request module
//!
//! Request descriptors know how to serialize themselves into a canonical
//! endpoint path plus query string.
//!
//! # Overview
//!
//! - Instance lookups (`ledgers/{sequence}`) are never paginated; collection
//!   parameters set alongside an instance identifier are dropped.
//! - Collection parameters are emitted in a fixed order (`cursor`, `order`,
//!   `limit`) and only when set, so one logical request always serializes to
//!   the same URL.

mod ledger;
mod types;

pub use ledger::LedgerRequest;
pub use types::{collection_url, CollectionParams, CollectionRequest, ResourceRequest};
