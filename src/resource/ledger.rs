//! Ledger resource

use super::types::{Link, Record};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A closed ledger as reported by Horizon
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ledger {
    #[serde(rename = "_links", default)]
    pub links: HashMap<String, Link>,
    pub id: String,
    pub paging_token: String,
    pub hash: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prev_hash: Option<String>,
    pub sequence: i32,
    pub successful_transaction_count: i32,
    /// Absent on servers that predate failed transaction tracking
    #[serde(default)]
    pub failed_transaction_count: Option<i32>,
    pub operation_count: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tx_set_operation_count: Option<i32>,
    pub closed_at: DateTime<Utc>,
    pub total_coins: String,
    pub fee_pool: String,
    pub base_fee_in_stroops: i32,
    pub base_reserve_in_stroops: i32,
    pub max_tx_set_size: i32,
    pub protocol_version: i32,
    pub header_xdr: String,
}

impl Record for Ledger {
    fn paging_token(&self) -> &str {
        &self.paging_token
    }
}
