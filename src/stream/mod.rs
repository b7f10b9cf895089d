//! Streaming module
//!
//! Long-lived subscriptions to a collection over server-sent events.
//!
//! # Overview
//!
//! - [`FrameStream`] turns a chunked byte stream into SSE frames, tolerating
//!   frames split across arbitrary read boundaries
//! - [`subscribe`] drives one subscription: connect, decode, hand each record
//!   to a [`RecordHandler`] in arrival order, stop on cancellation or failure
//!
//! A subscription never reconnects by itself. To resume, call it again with
//! the last delivered record's paging token as cursor.

mod frame;
mod subscriber;

pub use frame::{Frame, FrameStream};
pub use subscriber::{subscribe, RecordHandler};

#[cfg(test)]
mod tests;
