//! HTTP client with status classification
//!
//! Handles:
//! - Base URL joining
//! - Default headers and user agent
//! - Separate timeouts for one-shot requests and streams
//! - Turning non-2xx responses into problem documents

use crate::config::ClientConfig;
use crate::error::{Error, Result};
use crate::resource::Problem;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

const EVENT_STREAM: &str = "text/event-stream";

/// HTTP client bound to one Horizon server
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
    request_timeout: Duration,
}

impl HttpClient {
    /// Create a new HTTP client from a validated config
    pub fn new(config: &ClientConfig) -> Result<Self> {
        config.validate()?;

        let mut headers = HeaderMap::new();
        for (key, value) in &config.headers {
            let name = HeaderName::from_bytes(key.as_bytes())
                .map_err(|e| Error::config(format!("invalid header name '{key}': {e}")))?;
            let value = HeaderValue::from_str(value)
                .map_err(|e| Error::config(format!("invalid value for header '{key}': {e}")))?;
            headers.insert(name, value);
        }

        let client = Client::builder()
            .connect_timeout(config.connect_timeout())
            .user_agent(&config.user_agent)
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            base_url: config.horizon_url.trim_end_matches('/').to_string(),
            request_timeout: config.request_timeout(),
        })
    }

    /// Base URL without a trailing slash
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Make a one-shot GET request
    pub async fn get(&self, path: &str) -> Result<Response> {
        let url = self.build_url(path);
        debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .timeout(self.request_timeout)
            .send()
            .await?;
        check_status(response, self.request_timeout).await
    }

    /// Make a one-shot GET request and parse the JSON response
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let response = self.get(path).await?;
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Open a long-lived server-sent events connection
    pub async fn open_stream(&self, path: &str) -> Result<Response> {
        let url = self.build_url(path);
        debug!("GET {} (stream)", url);

        let response = self
            .client
            .get(&url)
            .header(ACCEPT, EVENT_STREAM)
            .send()
            .await?;
        check_status(response, self.request_timeout).await
    }

    /// Build full URL from path
    pub fn build_url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }

        let path = path.trim_start_matches('/');
        format!("{}/{path}", self.base_url)
    }
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("base_url", &self.base_url)
            .field("request_timeout", &self.request_timeout)
            .finish_non_exhaustive()
    }
}

/// Pass 2xx responses through; turn anything else into `Error::Server`.
///
/// The error body is read within `body_timeout`, so a stream answering
/// non-2xx with an endless body still fails.
async fn check_status(response: Response, body_timeout: Duration) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let code = status.as_u16();
    let body = match tokio::time::timeout(body_timeout, response.text()).await {
        Ok(Ok(body)) => body,
        Ok(Err(e)) => {
            debug!(status = code, "failed to read error body: {e}");
            String::new()
        }
        Err(_) => {
            debug!(status = code, "timed out reading error body after {:?}", body_timeout);
            String::new()
        }
    };
    Err(Error::server(code, Problem::from_body(code, &body)))
}
