//! Subscription loop
//!
//! `Connecting → Streaming → {Cancelled | Failed}`. There is no natural end:
//! the server closing the connection is a failure like any other transport
//! error. The connection is owned by the loop and dropped on every exit path.

use super::frame::{Frame, FrameStream};
use crate::error::{Error, Result};
use crate::http::HttpClient;
use crate::resource::{Problem, Record};
use futures::StreamExt;
use std::pin::pin;
use tokio_util::sync::CancellationToken;
use tracing::{debug, trace};

/// Receives records from a subscription, one at a time, in arrival order.
///
/// The handler runs inline: the next frame is not read until it returns, so a
/// slow handler slows the subscription down instead of growing a buffer.
pub trait RecordHandler<R> {
    /// Handle one record
    fn handle(&mut self, record: R);
}

impl<R, F> RecordHandler<R> for F
where
    F: FnMut(R),
{
    fn handle(&mut self, record: R) {
        self(record);
    }
}

/// Run one subscription against `path` until cancelled or failed.
///
/// Cancellation is checked before connecting and at every frame boundary and
/// returns `Ok(())`.
pub async fn subscribe<R, H>(
    http: &HttpClient,
    path: &str,
    cancel: &CancellationToken,
    handler: &mut H,
) -> Result<()>
where
    R: Record,
    H: RecordHandler<R> + ?Sized,
{
    debug!(path, "stream connecting");
    let response = tokio::select! {
        biased;
        () = cancel.cancelled() => {
            debug!(path, "stream cancelled before connecting");
            return Ok(());
        }
        response = http.open_stream(path) => response?,
    };

    debug!(path, status = response.status().as_u16(), "stream open");
    let mut frames = pin!(FrameStream::new(response.bytes_stream()));
    let mut last_token: Option<String> = None;

    loop {
        let next = tokio::select! {
            biased;
            () = cancel.cancelled() => {
                debug!(path, cursor = ?last_token, "stream cancelled");
                return Ok(());
            }
            next = frames.next() => next,
        };

        let Some(frame) = next else {
            return Err(Error::stream(format!(
                "connection closed by server (last cursor: {})",
                last_token.as_deref().unwrap_or("none")
            )));
        };

        let Some(record) = decode_frame::<R>(frame?)? else {
            continue;
        };
        last_token = Some(record.paging_token().to_string());
        handler.handle(record);
    }
}

/// Turn one frame into a record, `None` for frames that carry no record
pub(super) fn decode_frame<R: Record>(frame: Frame) -> Result<Option<R>> {
    match frame.event.as_str() {
        "message" if !frame.data.trim().is_empty() => Ok(Some(serde_json::from_str(&frame.data)?)),
        "error" => Err(error_frame(&frame.data)),
        "close" => Err(Error::stream(format!(
            "server closed the stream: {}",
            frame.data
        ))),
        other => {
            trace!(event = other, "skipping frame");
            Ok(None)
        }
    }
}

/// An error frame carrying a problem document is a server error
fn error_frame(data: &str) -> Error {
    match serde_json::from_str::<Problem>(data) {
        Ok(problem) if problem.status != 0 => Error::server(problem.status, problem),
        _ => Error::stream(format!("error frame: {data}")),
    }
}
