//! Collection envelope and record abstractions

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A record of a paginated collection
pub trait Record: DeserializeOwned + Send {
    /// Cursor value the server attached to this record
    fn paging_token(&self) -> &str;
}

/// A hypermedia link
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Link {
    /// Target URL (absolute, or a URI template when `templated`)
    pub href: String,
    /// Whether `href` is a URI template
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub templated: bool,
}

/// One page of a collection, as returned by the server
///
/// Pages are immutable once parsed. Follow-up requests derive a new request
/// from a page instead of mutating it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<R> {
    #[serde(rename = "_links", default)]
    links: HashMap<String, Link>,
    #[serde(rename = "_embedded")]
    embedded: Embedded<R>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct Embedded<R> {
    #[serde(default = "Vec::new")]
    records: Vec<R>,
}

impl<R> Page<R> {
    /// Build a page from records and links
    pub fn new(records: Vec<R>, links: HashMap<String, Link>) -> Self {
        Self {
            links,
            embedded: Embedded { records },
        }
    }

    /// Records in server order
    pub fn records(&self) -> &[R] {
        &self.embedded.records
    }

    /// Consume the page, returning its records
    pub fn into_records(self) -> Vec<R> {
        self.embedded.records
    }

    /// Number of records on this page
    pub fn len(&self) -> usize {
        self.embedded.records.len()
    }

    /// Check if this page has no records
    pub fn is_empty(&self) -> bool {
        self.embedded.records.is_empty()
    }

    /// All navigation links keyed by relation name
    pub fn links(&self) -> &HashMap<String, Link> {
        &self.links
    }

    /// Look up a navigation link by relation name (`self`, `next`, `prev`)
    pub fn link(&self, rel: &str) -> Option<&Link> {
        self.links.get(rel)
    }

    /// First record on the page
    pub fn first(&self) -> Option<&R> {
        self.embedded.records.first()
    }

    /// Last record on the page
    pub fn last(&self) -> Option<&R> {
        self.embedded.records.last()
    }
}
