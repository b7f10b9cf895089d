//! Client configuration
//!
//! A [`ClientConfig`] is an explicit value constructed by the caller and handed
//! to [`Client::new`](crate::Client::new). There is no process-wide default
//! client; the named constructors below are conveniences, not global state.
//!
//! Configs can be built in code or loaded from YAML:
//!
//! ```yaml
//! horizon_url: https://horizon-testnet.stellar.org
//! request_timeout_ms: 30000
//! headers:
//!   X-Client-Name: my-app
//! ```

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;
use url::Url;

/// Public SDF test network Horizon instance
pub const TESTNET_URL: &str = "https://horizon-testnet.stellar.org";

/// Public SDF main network Horizon instance
pub const PUBNET_URL: &str = "https://horizon.stellar.org";

// ============================================================================
// Client Config
// ============================================================================

/// Configuration for a [`Client`](crate::Client)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the Horizon server
    pub horizon_url: String,

    /// Timeout for one-shot requests in milliseconds (streams are never timed out)
    #[serde(default = "default_request_timeout_ms")]
    pub request_timeout_ms: u64,

    /// Timeout for establishing a connection in milliseconds
    #[serde(default = "default_connect_timeout_ms")]
    pub connect_timeout_ms: u64,

    /// User agent string
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Default headers for all requests
    #[serde(default)]
    pub headers: HashMap<String, String>,
}

fn default_request_timeout_ms() -> u64 {
    30_000
}

fn default_connect_timeout_ms() -> u64 {
    10_000
}

fn default_user_agent() -> String {
    format!("horizon-client/{}", env!("CARGO_PKG_VERSION"))
}

impl ClientConfig {
    /// Create a config for the given Horizon URL with default settings
    pub fn new(horizon_url: impl Into<String>) -> Self {
        Self {
            horizon_url: horizon_url.into(),
            request_timeout_ms: default_request_timeout_ms(),
            connect_timeout_ms: default_connect_timeout_ms(),
            user_agent: default_user_agent(),
            headers: HashMap::new(),
        }
    }

    /// Config pointing at the public test network
    pub fn testnet() -> Self {
        Self::new(TESTNET_URL)
    }

    /// Config pointing at the public main network
    pub fn pubnet() -> Self {
        Self::new(PUBNET_URL)
    }

    /// Create a new config builder
    pub fn builder(horizon_url: impl Into<String>) -> ClientConfigBuilder {
        ClientConfigBuilder {
            config: Self::new(horizon_url),
        }
    }

    /// Parse a config from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config from a YAML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            Error::config(format!("failed to read {}: {e}", path.display()))
        })?;
        Self::from_yaml_str(&contents)
    }

    /// Check that the config describes a usable Horizon endpoint
    pub fn validate(&self) -> Result<()> {
        let url = Url::parse(&self.horizon_url)?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(Error::config(format!(
                "horizon_url must use http or https, got '{}'",
                url.scheme()
            )));
        }
        if url.query().is_some() {
            return Err(Error::config("horizon_url must not carry a query string"));
        }
        if self.request_timeout_ms == 0 {
            return Err(Error::config("request_timeout_ms must be greater than zero"));
        }
        if self.connect_timeout_ms == 0 {
            return Err(Error::config("connect_timeout_ms must be greater than zero"));
        }
        Ok(())
    }

    /// Timeout for one-shot requests
    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }

    /// Timeout for establishing a connection
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_millis(self.connect_timeout_ms)
    }
}

/// Builder for [`ClientConfig`]
#[derive(Debug)]
pub struct ClientConfigBuilder {
    config: ClientConfig,
}

impl ClientConfigBuilder {
    /// Set the one-shot request timeout
    pub fn request_timeout(mut self, timeout: Duration) -> Self {
        self.config.request_timeout_ms = millis(timeout);
        self
    }

    /// Set the connect timeout
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.config.connect_timeout_ms = millis(timeout);
        self
    }

    /// Add a default header
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.config.headers.insert(key.into(), value.into());
        self
    }

    /// Set user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = agent.into();
        self
    }

    /// Build the config
    pub fn build(self) -> ClientConfig {
        self.config
    }
}

/// Whole milliseconds, rounding a non-zero sub-millisecond duration up to 1
fn millis(timeout: Duration) -> u64 {
    let ms = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX);
    if ms == 0 && !timeout.is_zero() {
        1
    } else {
        ms
    }
}
