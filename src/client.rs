//! Horizon client
//!
//! [`Client`] ties request descriptors, the HTTP layer, pagination and
//! streaming together. It holds no mutable state, so one client can serve
//! any number of concurrent fetches and subscriptions.

use crate::config::ClientConfig;
use crate::error::{Error, Result};
use crate::http::HttpClient;
use crate::pagination::{page_request, Direction};
use crate::request::{CollectionParams, CollectionRequest, LedgerRequest, ResourceRequest};
use crate::resource::{Ledger, Page, Record};
use crate::stream::{subscribe, RecordHandler};
use crate::types::CURSOR_NOW;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

/// Client for one Horizon server
#[derive(Debug, Clone)]
pub struct Client {
    http: HttpClient,
}

impl Client {
    /// Create a client from an explicit configuration
    pub fn new(config: ClientConfig) -> Result<Self> {
        Ok(Self {
            http: HttpClient::new(&config)?,
        })
    }

    /// Base URL of the server this client talks to
    pub fn horizon_url(&self) -> &str {
        self.http.base_url()
    }

    // ========================================================================
    // One-shot requests
    // ========================================================================

    /// Fetch a single resource instance
    pub async fn fetch_one<Q: ResourceRequest>(&self, request: &Q) -> Result<Q::Record> {
        if !request.is_instance() {
            return Err(Error::invalid_parameter(
                "sequence",
                "collection requests return a page, not a single record",
            ));
        }
        let path = request.build_url()?;
        self.http.get_json(&path).await
    }

    /// Fetch one page of a collection
    pub async fn fetch_page<Q: CollectionRequest>(
        &self,
        request: &Q,
    ) -> Result<Page<Q::Record>> {
        if request.is_instance() {
            return Err(Error::invalid_parameter(
                "sequence",
                "instance lookups return a single record, not a page",
            ));
        }
        let path = request.build_url()?;
        self.http.get_json(&path).await
    }

    /// Fetch one page of ledgers
    pub async fn ledgers(&self, request: &LedgerRequest) -> Result<Page<Ledger>> {
        self.fetch_page(request).await
    }

    /// Fetch one ledger by sequence
    pub async fn ledger_detail(&self, sequence: u32) -> Result<Ledger> {
        self.fetch_one(&LedgerRequest::for_sequence(sequence)).await
    }

    // ========================================================================
    // Pagination
    // ========================================================================

    /// Fetch the page following `page`, which was fetched with `request`
    pub async fn next_page<Q: CollectionRequest>(
        &self,
        page: &Page<Q::Record>,
        request: &Q,
    ) -> Result<Page<Q::Record>> {
        let next = page_request(page, request, Direction::Next)?;
        self.fetch_page(&next).await
    }

    /// Fetch the page preceding `page`, which was fetched with `request`
    pub async fn prev_page<Q: CollectionRequest>(
        &self,
        page: &Page<Q::Record>,
        request: &Q,
    ) -> Result<Page<Q::Record>> {
        let prev = page_request(page, request, Direction::Prev)?;
        self.fetch_page(&prev).await
    }

    /// Fetch the page a navigation link of `page` points at
    pub async fn follow_link<R: Record>(
        &self,
        page: &Page<R>,
        direction: Direction,
    ) -> Result<Page<R>> {
        let Some(link) = page.link(direction.rel()) else {
            return Err(Error::NoMoreResults { direction });
        };
        self.http.get_json(&link.href).await
    }

    // ========================================================================
    // Streaming
    // ========================================================================

    /// Stream a collection, handing each record to `handler` in arrival order.
    ///
    /// An unset cursor starts at `"now"`: only records produced after the
    /// connection opens are delivered. Returns `Ok(())` once `cancel` fires;
    /// any other exit is an error. Nothing is retried.
    pub async fn stream<Q, H>(
        &self,
        cancel: &CancellationToken,
        request: &Q,
        mut handler: H,
    ) -> Result<()>
    where
        Q: CollectionRequest,
        H: RecordHandler<Q::Record>,
    {
        if request.is_instance() {
            return Err(Error::invalid_parameter(
                "sequence",
                "only collections can be streamed",
            ));
        }

        let request = with_default_cursor(request);
        let path = request.build_url()?;

        let result = subscribe::<Q::Record, H>(&self.http, &path, cancel, &mut handler).await;
        match &result {
            Ok(()) => debug!(path = %path, "stream finished"),
            Err(e) => warn!(path = %path, kind = ?e.kind(), "stream failed: {e}"),
        }
        result
    }

    /// Stream ledgers as they close
    pub async fn stream_ledgers<H>(
        &self,
        cancel: &CancellationToken,
        request: &LedgerRequest,
        handler: H,
    ) -> Result<()>
    where
        H: RecordHandler<Ledger>,
    {
        self.stream(cancel, request, handler).await
    }
}

/// Replace an unset cursor with `"now"`
fn with_default_cursor<Q: CollectionRequest>(request: &Q) -> Q {
    let params = request.params();
    if params.effective_cursor().is_some() {
        return request.clone();
    }
    request.with_params(CollectionParams {
        cursor: Some(CURSOR_NOW.to_string()),
        ..params.clone()
    })
}
