//! Resource module
//!
//! Deserialized response shapes: the collection envelope ([`Page`]), the
//! records it carries, and the problem document returned on failures.
//!
//! # Overview
//!
//! Every record exposes a `paging_token` through the [`Record`] trait. That
//! token is the only legitimate source of a cursor for follow-up pagination
//! or for resuming a stream.

mod ledger;
mod problem;
mod types;

pub use ledger::Ledger;
pub use problem::{Problem, ProblemExtras, ResultCodes};
pub use types::{Link, Page, Record};
