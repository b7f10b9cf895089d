//! Request descriptor types and traits

use crate::error::{Error, Result};
use crate::resource::Record;
use crate::types::Order;
use url::form_urlencoded;

/// Optional cursor/order/limit parameters of a collection request
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CollectionParams {
    /// Paging token to start from, or `"now"`
    pub cursor: Option<String>,
    /// Sort order
    pub order: Option<Order>,
    /// Page size
    pub limit: Option<u32>,
}

impl CollectionParams {
    /// Create empty parameters
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the cursor
    #[must_use]
    pub fn cursor(mut self, cursor: impl Into<String>) -> Self {
        self.cursor = Some(cursor.into());
        self
    }

    /// Set the order
    #[must_use]
    pub fn order(mut self, order: Order) -> Self {
        self.order = Some(order);
        self
    }

    /// Set the page size
    #[must_use]
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// The cursor, treating an empty string as unset
    pub fn effective_cursor(&self) -> Option<&str> {
        self.cursor.as_deref().filter(|c| !c.is_empty())
    }

    /// Serialize into a query string (without the leading `?`).
    ///
    /// Parameters appear as `cursor`, `order`, `limit`; unset ones are omitted.
    pub fn query_string(&self) -> Result<String> {
        let mut query = form_urlencoded::Serializer::new(String::new());

        if let Some(cursor) = self.effective_cursor() {
            query.append_pair("cursor", cursor);
        }
        if let Some(order) = self.order {
            query.append_pair("order", order.as_str());
        }
        if let Some(limit) = self.limit {
            if limit == 0 {
                return Err(Error::invalid_parameter(
                    "limit",
                    "must be a positive integer",
                ));
            }
            query.append_pair("limit", &limit.to_string());
        }

        Ok(query.finish())
    }
}

/// Build `resource` or `resource?query` from collection parameters
pub fn collection_url(resource: &str, params: &CollectionParams) -> Result<String> {
    let query = params.query_string()?;
    if query.is_empty() {
        Ok(resource.to_string())
    } else {
        Ok(format!("{resource}?{query}"))
    }
}

/// A request for one resource endpoint
pub trait ResourceRequest {
    /// Record type the endpoint returns
    type Record: Record;

    /// Endpoint path plus query string, relative to the server root
    fn build_url(&self) -> Result<String>;

    /// Whether this request targets a single instance rather than a collection
    fn is_instance(&self) -> bool {
        false
    }
}

/// A request for a paginated, streamable collection
pub trait CollectionRequest: ResourceRequest + Clone {
    /// Current collection parameters
    fn params(&self) -> &CollectionParams;

    /// Copy of this request with the collection parameters replaced
    #[must_use]
    fn with_params(&self, params: CollectionParams) -> Self;
}
