//! Server-sent events framing
//!
//! Lines end in LF, CRLF or a bare CR. A frame is dispatched at a blank line, or at end
//! of input if the final frame was not terminated. Frames without any `data`
//! field (retry hints, comments, keep-alives) are never dispatched.

use crate::error::{Error, Result};
use bytes::BytesMut;
use futures::{ready, Stream};
use pin_project_lite::pin_project;
use std::pin::Pin;
use std::task::{Context, Poll};

const DEFAULT_EVENT: &str = "message";

/// One dispatched server-sent event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// Event name (`message` when the server sent none)
    pub event: String,
    /// Data lines joined with `\n`
    pub data: String,
    /// Event id, if sent
    pub id: Option<String>,
    /// Reconnection hint in milliseconds, if sent
    pub retry: Option<u64>,
}

#[derive(Debug, Default)]
struct PendingFrame {
    event: Option<String>,
    data: String,
    data_lines: usize,
    id: Option<String>,
    retry: Option<u64>,
}

impl PendingFrame {
    fn push_data(&mut self, value: &str) {
        if self.data_lines > 0 {
            self.data.push('\n');
        }
        self.data.push_str(value);
        self.data_lines += 1;
    }

    fn take(&mut self) -> Option<Frame> {
        let pending = std::mem::take(self);
        if pending.data_lines == 0 {
            return None;
        }
        Some(Frame {
            event: pending.event.unwrap_or_else(|| DEFAULT_EVENT.to_string()),
            data: pending.data,
            id: pending.id,
            retry: pending.retry,
        })
    }

    fn apply_line(&mut self, line: &[u8]) -> Result<Option<Frame>> {
        let line = std::str::from_utf8(line)
            .map_err(|e| Error::stream(format!("frame is not valid UTF-8: {e}")))?;

        if line.is_empty() {
            return Ok(self.take());
        }
        if line.starts_with(':') {
            return Ok(None);
        }

        let (field, value) = match line.split_once(':') {
            Some((field, value)) => (field, value.strip_prefix(' ').unwrap_or(value)),
            None => (line, ""),
        };

        match field {
            "event" if value.is_empty() => self.event = None,
            "event" => self.event = Some(value.to_string()),
            "data" => self.push_data(value),
            "id" => self.id = Some(value.to_string()),
            "retry" => self.retry = value.parse().ok(),
            _ => {}
        }
        Ok(None)
    }
}

/// Split one line off the front of `buffer`, without its line ending.
///
/// A CR as the last buffered byte is held back until the next chunk shows
/// whether an LF follows, unless the input has ended.
fn next_line(buffer: &mut BytesMut, at_eof: bool) -> Option<BytesMut> {
    let pos = buffer.iter().position(|b| *b == b'\n' || *b == b'\r')?;
    let ending = match (buffer[pos], buffer.get(pos + 1)) {
        (b'\r', Some(b'\n')) => 2,
        (b'\r', None) if !at_eof => return None,
        _ => 1,
    };
    let mut line = buffer.split_to(pos + ending);
    line.truncate(pos);
    Some(line)
}

pin_project! {
    /// Decodes a stream of byte chunks into [`Frame`]s
    pub struct FrameStream<S> {
        #[pin]
        inner: S,
        buffer: BytesMut,
        pending: PendingFrame,
        done: bool,
    }
}

impl<S> FrameStream<S> {
    /// Wrap a byte stream
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            buffer: BytesMut::new(),
            pending: PendingFrame::default(),
            done: false,
        }
    }
}

impl<S, B, E> Stream for FrameStream<S>
where
    S: Stream<Item = std::result::Result<B, E>>,
    B: AsRef<[u8]>,
    E: Into<Error>,
{
    type Item = Result<Frame>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let mut this = self.project();

        loop {
            while let Some(line) = next_line(this.buffer, *this.done) {
                match this.pending.apply_line(&line) {
                    Ok(Some(frame)) => return Poll::Ready(Some(Ok(frame))),
                    Ok(None) => {}
                    Err(e) => return Poll::Ready(Some(Err(e))),
                }
            }

            if *this.done {
                if !this.buffer.is_empty() {
                    let line = this.buffer.split();
                    if let Err(e) = this.pending.apply_line(&line) {
                        return Poll::Ready(Some(Err(e)));
                    }
                }
                return Poll::Ready(this.pending.take().map(Ok));
            }

            match ready!(this.inner.as_mut().poll_next(cx)) {
                Some(Ok(chunk)) => this.buffer.extend_from_slice(chunk.as_ref()),
                Some(Err(e)) => return Poll::Ready(Some(Err(e.into()))),
                None => *this.done = true,
            }
        }
    }
}
