//! Cursor derivation from a fetched page

use crate::error::{Error, Result};
use crate::request::{CollectionParams, CollectionRequest};
use crate::resource::{Page, Record};
use crate::types::Order;
use std::fmt;

/// Direction of travel through a collection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Records after the last record of the page
    Next,
    /// Records before the first record of the page
    Prev,
}

impl Direction {
    /// Order the follow-up request is issued with
    pub fn order(self) -> Order {
        match self {
            Direction::Next => Order::Ascending,
            Direction::Prev => Order::Descending,
        }
    }

    /// Relation name of the matching navigation link
    pub fn rel(self) -> &'static str {
        match self {
            Direction::Next => "next",
            Direction::Prev => "prev",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.rel())
    }
}

/// Derive the request for the page after (or before) `page`.
///
/// The new request uses the boundary record's paging token as cursor, the
/// direction's order, and the original request's limit.
pub fn page_request<Q: CollectionRequest>(
    page: &Page<Q::Record>,
    request: &Q,
    direction: Direction,
) -> Result<Q> {
    if request.is_instance() {
        return Err(Error::invalid_parameter(
            "sequence",
            "instance lookups are not paginated",
        ));
    }

    let boundary = match direction {
        Direction::Next => page.last(),
        Direction::Prev => page.first(),
    };
    let Some(record) = boundary else {
        return Err(Error::NoMoreResults { direction });
    };

    let params = CollectionParams {
        cursor: Some(record.paging_token().to_string()),
        order: Some(direction.order()),
        limit: request.params().limit,
    };
    Ok(request.with_params(params))
}
