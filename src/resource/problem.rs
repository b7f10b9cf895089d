//! Problem documents returned on non-2xx responses
//!
//! The fields are exposed exactly as the server sent them. The only helper
//! that touches a value is [`ProblemExtras::result_xdr_bytes`], which undoes
//! the base64 transport encoding without interpreting the bytes.

use crate::error::Result;
use crate::types::JsonObject;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

/// Structured error document (RFC 7807 style)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Problem {
    #[serde(rename = "type", default)]
    pub problem_type: String,
    #[serde(default)]
    pub title: String,
    /// Status as sent in the document (0 if absent); the HTTP status lives on the error
    #[serde(default)]
    pub status: u16,
    #[serde(default)]
    pub detail: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instance: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extras: Option<ProblemExtras>,
}

/// Domain-specific problem fields
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ProblemExtras {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hash: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub envelope_xdr: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result_codes: Option<ResultCodes>,
    /// Base64-encoded result blob
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result_xdr: Option<String>,
    /// Any extras this client does not model
    #[serde(flatten)]
    pub other: JsonObject,
}

/// Transaction and per-operation result codes
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ResultCodes {
    #[serde(default)]
    pub transaction: String,
    #[serde(default)]
    pub operations: Vec<String>,
}

impl Problem {
    /// Synthesize a problem for a response whose body was not a problem document
    pub fn from_status(status: u16, body: &str) -> Self {
        let title = StatusCode::from_u16(status)
            .ok()
            .and_then(|s| s.canonical_reason())
            .unwrap_or("Unknown Status")
            .to_string();

        Self {
            problem_type: "about:blank".to_string(),
            title,
            status,
            detail: body.trim().to_string(),
            instance: None,
            extras: None,
        }
    }

    /// Parse a response body, falling back to [`Problem::from_status`].
    ///
    /// A parsed document is returned as sent, including a missing `status`.
    pub fn from_body(status: u16, body: &str) -> Self {
        match serde_json::from_str::<Problem>(body) {
            Ok(problem) if !problem.title.is_empty() || !problem.problem_type.is_empty() => problem,
            _ => Self::from_status(status, body),
        }
    }

    /// Result codes, if the server attached any
    pub fn result_codes(&self) -> Option<&ResultCodes> {
        self.extras.as_ref().and_then(|e| e.result_codes.as_ref())
    }
}

impl ProblemExtras {
    /// Decode the base64 result blob
    pub fn result_xdr_bytes(&self) -> Result<Option<Vec<u8>>> {
        match &self.result_xdr {
            Some(encoded) => Ok(Some(STANDARD.decode(encoded)?)),
            None => Ok(None),
        }
    }
}
