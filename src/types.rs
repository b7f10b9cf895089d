//! Common types used throughout the Horizon client
//!
//! This module contains shared type definitions and type aliases
//! used across multiple modules.

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Type Aliases
// ============================================================================

/// JSON value type (re-exported from serde_json)
pub type JsonValue = serde_json::Value;

/// JSON object type
pub type JsonObject = serde_json::Map<String, JsonValue>;

// ============================================================================
// Cursor Sentinel
// ============================================================================

/// Cursor sentinel meaning "start at the tail of the collection"
pub const CURSOR_NOW: &str = "now";

// ============================================================================
// Sort Order
// ============================================================================

/// Sort order of a collection request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Order {
    /// Oldest first (`asc`)
    #[serde(rename = "asc")]
    Ascending,
    /// Newest first (`desc`)
    #[serde(rename = "desc")]
    Descending,
}

impl Order {
    /// Wire representation used in query strings
    pub fn as_str(&self) -> &'static str {
        match self {
            Order::Ascending => "asc",
            Order::Descending => "desc",
        }
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Order {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(Order::Ascending),
            "desc" | "descending" => Ok(Order::Descending),
            other => Err(Error::invalid_parameter(
                "order",
                format!("expected 'asc' or 'desc', got '{other}'"),
            )),
        }
    }
}
