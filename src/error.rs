//! Error types for the Horizon client
//!
//! This module defines the error hierarchy for the whole crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.
//!
//! Callers branch on [`Error::kind`] rather than on individual variants when
//! they only care about the broad class of failure (e.g. "should I reconnect?").

use crate::pagination::Direction;
use crate::resource::Problem;
use thiserror::Error;

/// The main error type for the Horizon client
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Request Errors
    // ============================================================================
    #[error("Invalid parameter '{parameter}': {message}")]
    InvalidParameter {
        parameter: &'static str,
        message: String,
    },

    // ============================================================================
    // Pagination Errors
    // ============================================================================
    #[error("No more results: cannot page {direction} from an empty record set")]
    NoMoreResults { direction: Direction },

    // ============================================================================
    // Server Errors
    // ============================================================================
    #[error("Horizon error: {status} {}", .problem.title)]
    Server { status: u16, problem: Box<Problem> },

    // ============================================================================
    // Transport Errors
    // ============================================================================
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Stream error: {message}")]
    Stream { message: String },

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("Failed to decode base64: {0}")]
    Base64(#[from] base64::DecodeError),
}

/// Broad classification of an [`Error`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed or contradictory request descriptor; never retried
    InvalidParameter,
    /// Pagination past the available window
    NoMoreResults,
    /// Non-2xx response or error frame carrying a problem document
    Server,
    /// Connection-level failure: refused, reset, timeout, malformed frame
    Transport,
    /// Local configuration or decoding failure
    Config,
}

impl Error {
    /// Create an invalid parameter error
    pub fn invalid_parameter(parameter: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            parameter,
            message: message.into(),
        }
    }

    /// Create a server error from a problem document
    pub fn server(status: u16, problem: Problem) -> Self {
        Self::Server {
            status,
            problem: Box::new(problem),
        }
    }

    /// Create a stream error
    pub fn stream(message: impl Into<String>) -> Self {
        Self::Stream {
            message: message.into(),
        }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Classify this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::InvalidParameter { .. } => ErrorKind::InvalidParameter,
            Error::NoMoreResults { .. } => ErrorKind::NoMoreResults,
            Error::Server { .. } => ErrorKind::Server,
            Error::Http(_) | Error::Stream { .. } | Error::JsonParse(_) => ErrorKind::Transport,
            Error::Config { .. }
            | Error::InvalidUrl(_)
            | Error::YamlParse(_)
            | Error::Base64(_) => ErrorKind::Config,
        }
    }

    /// Check if this is a connection-level failure
    pub fn is_transport(&self) -> bool {
        self.kind() == ErrorKind::Transport
    }

    /// Check if the server reported this failure
    pub fn is_server_error(&self) -> bool {
        self.kind() == ErrorKind::Server
    }

    /// The problem document attached to a server error
    pub fn problem(&self) -> Option<&Problem> {
        match self {
            Error::Server { problem, .. } => Some(&**problem),
            _ => None,
        }
    }

    /// HTTP status of a server error (or of the underlying reqwest error)
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Server { status, .. } => Some(*status),
            Error::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Check if a caller could reasonably try again.
    ///
    /// This is a hint only; the client itself never retries.
    pub fn is_retryable(&self) -> bool {
        match self.kind() {
            ErrorKind::Transport => !matches!(self, Error::JsonParse(_)),
            ErrorKind::Server => self.status().is_some_and(is_retryable_status),
            _ => false,
        }
    }
}

/// Check if an HTTP status code is retryable
fn is_retryable_status(status: u16) -> bool {
    matches!(status, 429 | 500 | 502 | 503 | 504)
}

/// Result type alias for the Horizon client
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::invalid_parameter("sequence", "must be greater than zero");
        assert_eq!(
            err.to_string(),
            "Invalid parameter 'sequence': must be greater than zero"
        );

        let err = Error::NoMoreResults {
            direction: Direction::Next,
        };
        assert_eq!(
            err.to_string(),
            "No more results: cannot page next from an empty record set"
        );

        let err = Error::server(404, Problem::from_status(404, ""));
        assert_eq!(err.to_string(), "Horizon error: 404 Not Found");
    }

    #[test]
    fn test_error_kind() {
        assert_eq!(
            Error::invalid_parameter("limit", "zero").kind(),
            ErrorKind::InvalidParameter
        );
        assert_eq!(
            Error::NoMoreResults {
                direction: Direction::Prev
            }
            .kind(),
            ErrorKind::NoMoreResults
        );
        assert_eq!(
            Error::server(500, Problem::from_status(500, "")).kind(),
            ErrorKind::Server
        );
        assert_eq!(Error::stream("closed").kind(), ErrorKind::Transport);
        assert_eq!(Error::config("bad").kind(), ErrorKind::Config);

        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert_eq!(Error::from(json_err).kind(), ErrorKind::Transport);
    }

    #[test]
    fn test_problem_accessor() {
        let err = Error::server(404, Problem::from_status(404, "gone"));
        assert!(err.is_server_error());
        assert!(!err.is_transport());
        assert_eq!(err.status(), Some(404));
        assert_eq!(err.problem().map(|p| p.detail.as_str()), Some("gone"));

        assert!(Error::stream("reset").problem().is_none());
    }

    #[test]
    fn test_is_retryable() {
        assert!(Error::stream("connection reset").is_retryable());
        assert!(Error::server(429, Problem::from_status(429, "")).is_retryable());
        assert!(Error::server(503, Problem::from_status(503, "")).is_retryable());

        assert!(!Error::server(400, Problem::from_status(400, "")).is_retryable());
        assert!(!Error::server(404, Problem::from_status(404, "")).is_retryable());
        assert!(!Error::invalid_parameter("sequence", "zero").is_retryable());
        assert!(!Error::config("test").is_retryable());
    }
}
