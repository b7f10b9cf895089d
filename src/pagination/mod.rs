//! Pagination module
//!
//! Cursor-based forward/backward paging over a collection.
//!
//! # Overview
//!
//! The cursor for a follow-up request is never supplied by the caller: it is
//! the `paging_token` of the last record (for `next`) or the first record
//! (for `prev`) of a page the caller already holds. Deriving the follow-up
//! request is a pure function; [`Client::next_page`](crate::Client::next_page)
//! and [`Client::prev_page`](crate::Client::prev_page) issue it.

mod cursor;

pub use cursor::{page_request, Direction};
