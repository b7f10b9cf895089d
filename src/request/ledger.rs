//! Ledger request descriptor

use super::types::{collection_url, CollectionParams, CollectionRequest, ResourceRequest};
use crate::error::{Error, Result};
use crate::resource::Ledger;
use crate::types::Order;

const LEDGERS: &str = "ledgers";

/// Request for the `ledgers` collection or one ledger by sequence
///
/// ```
/// use horizon_client::{LedgerRequest, Order, ResourceRequest};
///
/// let request = LedgerRequest::new().cursor("now").order(Order::Descending);
/// assert_eq!(request.build_url().unwrap(), "ledgers?cursor=now&order=desc");
///
/// let request = LedgerRequest::for_sequence(123).cursor("now");
/// assert_eq!(request.build_url().unwrap(), "ledgers/123");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LedgerRequest {
    /// Ledger sequence for an instance lookup
    pub sequence: Option<u32>,
    /// Collection parameters; ignored when `sequence` is set
    pub params: CollectionParams,
}

impl LedgerRequest {
    /// Request for the whole collection
    pub fn new() -> Self {
        Self::default()
    }

    /// Request for a single ledger
    pub fn for_sequence(sequence: u32) -> Self {
        Self {
            sequence: Some(sequence),
            params: CollectionParams::default(),
        }
    }

    /// Set the cursor
    #[must_use]
    pub fn cursor(mut self, cursor: impl Into<String>) -> Self {
        self.params.cursor = Some(cursor.into());
        self
    }

    /// Set the order
    #[must_use]
    pub fn order(mut self, order: Order) -> Self {
        self.params.order = Some(order);
        self
    }

    /// Set the page size
    #[must_use]
    pub fn limit(mut self, limit: u32) -> Self {
        self.params.limit = Some(limit);
        self
    }
}

impl ResourceRequest for LedgerRequest {
    type Record = Ledger;

    fn build_url(&self) -> Result<String> {
        match self.sequence {
            Some(0) => Err(Error::invalid_parameter(
                "sequence",
                "Invalid sequence number provided",
            )),
            Some(sequence) => Ok(format!("{LEDGERS}/{sequence}")),
            None => collection_url(LEDGERS, &self.params),
        }
    }

    fn is_instance(&self) -> bool {
        self.sequence.is_some()
    }
}

impl CollectionRequest for LedgerRequest {
    fn params(&self) -> &CollectionParams {
        &self.params
    }

    fn with_params(&self, params: CollectionParams) -> Self {
        Self {
            sequence: self.sequence,
            params,
        }
    }
}
