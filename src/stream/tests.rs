//! Tests for the streaming module

use super::subscriber::decode_frame;
use super::*;
use crate::config::ClientConfig;
use crate::error::{Error, ErrorKind, Result};
use crate::http::HttpClient;
use crate::resource::Ledger;
use bytes::Bytes;
use futures::StreamExt;
use pretty_assertions::assert_eq;
use tokio_util::sync::CancellationToken;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const LEDGER_STREAM: &str = include_str!("../../tests/fixtures/ledger_stream.txt");

async fn decode(chunks: Vec<&'static str>) -> Vec<Result<Frame>> {
    let chunks = chunks
        .into_iter()
        .map(|c| Ok::<_, Error>(Bytes::from_static(c.as_bytes())));
    FrameStream::new(futures::stream::iter(chunks))
        .collect()
        .await
}

fn message(data: &str) -> Frame {
    Frame {
        event: "message".to_string(),
        data: data.to_string(),
        id: None,
        retry: None,
    }
}

// ============================================================================
// Framing Tests
// ============================================================================

#[tokio::test]
async fn test_single_frame() {
    let frames = decode(vec!["data: hello\n\n"]).await;
    assert_eq!(frames.len(), 1);
    assert_eq!(frames[0].as_ref().unwrap(), &message("hello"));
}

#[tokio::test]
async fn test_frame_split_across_chunks() {
    let frames = decode(vec!["da", "ta: {\"a\"", ":1}\n", "\ndata: two\n\n"]).await;
    let frames: Vec<Frame> = frames.into_iter().map(|f| f.unwrap()).collect();
    assert_eq!(frames, vec![message("{\"a\":1}"), message("two")]);
}

#[tokio::test]
async fn test_all_fields_and_crlf() {
    let frames = decode(vec![
        "retry: 1000\r\nevent: open\r\nid: 42\r\ndata: \"hello\"\r\n\r\n",
    ])
    .await;
    let frame = frames[0].as_ref().unwrap();
    assert_eq!(frame.event, "open");
    assert_eq!(frame.id.as_deref(), Some("42"));
    assert_eq!(frame.retry, Some(1000));
    assert_eq!(frame.data, "\"hello\"");
}

#[tokio::test]
async fn test_bare_cr_line_endings() {
    let frames = decode(vec!["event: open\rdata: a\r", "\rdata: b\r\n", "\r\n"]).await;
    let frames: Vec<Frame> = frames.into_iter().map(|f| f.unwrap()).collect();
    assert_eq!(frames.len(), 2);
    assert_eq!(frames[0].event, "open");
    assert_eq!(frames[0].data, "a");
    assert_eq!(frames[1], message("b"));
}

#[tokio::test]
async fn test_cr_at_end_of_input() {
    let frames = decode(vec!["data: last\r"]).await;
    assert_eq!(frames.len(), 1);
    assert_eq!(frames[0].as_ref().unwrap(), &message("last"));
}

#[tokio::test]
async fn test_empty_event_name_is_message() {
    let frames = decode(vec!["event:\ndata: x\n\nevent: open\nevent:\ndata: y\n\n"]).await;
    let frames: Vec<Frame> = frames.into_iter().map(|f| f.unwrap()).collect();
    assert_eq!(frames, vec![message("x"), message("y")]);
}

#[tokio::test]
async fn test_multiline_data_and_comments() {
    let frames = decode(vec![": keep-alive\n\ndata: line one\ndata:line two\n\n"]).await;
    assert_eq!(frames.len(), 1);
    assert_eq!(frames[0].as_ref().unwrap().data, "line one\nline two");
}

#[tokio::test]
async fn test_frames_without_data_are_not_dispatched() {
    let frames = decode(vec!["retry: 10\n\nevent: ping\n\n"]).await;
    assert!(frames.is_empty());
}

#[tokio::test]
async fn test_unterminated_trailing_frame_is_dispatched() {
    let frames = decode(vec!["data: first\n\ndata: last"]).await;
    let frames: Vec<Frame> = frames.into_iter().map(|f| f.unwrap()).collect();
    assert_eq!(frames, vec![message("first"), message("last")]);
}

#[tokio::test]
async fn test_invalid_utf8_is_stream_error() {
    let chunks = vec![Ok::<_, Error>(Bytes::from_static(b"data: \xff\xfe\n\n"))];
    let frames: Vec<_> = FrameStream::new(futures::stream::iter(chunks)).collect().await;
    let err = frames[0].as_ref().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Transport);
}

#[tokio::test]
async fn test_inner_error_is_propagated() {
    let chunks = vec![
        Ok(Bytes::from_static(b"data: a\n\n")),
        Err(Error::stream("connection reset")),
    ];
    let frames: Vec<_> = FrameStream::new(futures::stream::iter(chunks)).collect().await;
    assert_eq!(frames.len(), 2);
    assert!(frames[0].is_ok());
    assert!(frames[1].as_ref().unwrap_err().to_string().contains("reset"));
}

// ============================================================================
// Frame Decoding Tests
// ============================================================================

#[test]
fn test_decode_message_frame() {
    let data = LEDGER_STREAM.trim().strip_prefix("data: ").unwrap();
    let ledger: Ledger = decode_frame(message(data)).unwrap().unwrap();
    assert_eq!(ledger.sequence, 560339);
    assert_eq!(ledger.paging_token, "2406637679673344");
}

#[test]
fn test_decode_skips_open_and_unknown_frames() {
    let open = Frame {
        event: "open".to_string(),
        ..message("\"hello\"")
    };
    assert!(decode_frame::<Ledger>(open).unwrap().is_none());
    assert!(decode_frame::<Ledger>(message("  ")).unwrap().is_none());
}

#[test]
fn test_decode_malformed_record() {
    let err = decode_frame::<Ledger>(message("{\"sequence\":")).unwrap_err();
    assert!(matches!(err, Error::JsonParse(_)));
    assert!(err.is_transport());
}

#[test]
fn test_decode_error_frames() {
    let with_problem = Frame {
        event: "error".to_string(),
        ..message(r#"{"type":"x","title":"Stale History","status":503}"#)
    };
    let err = decode_frame::<Ledger>(with_problem).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Server);
    assert_eq!(err.status(), Some(503));

    let plain = Frame {
        event: "error".to_string(),
        ..message("boom")
    };
    assert_eq!(
        decode_frame::<Ledger>(plain).unwrap_err().kind(),
        ErrorKind::Transport
    );

    let close = Frame {
        event: "close".to_string(),
        ..message("byebye")
    };
    assert!(decode_frame::<Ledger>(close).unwrap_err().is_transport());
}

// ============================================================================
// Subscription Tests
// ============================================================================

async fn mount_stream(server: &MockServer, cursor: &str, status: u16, body: &str) {
    Mock::given(method("GET"))
        .and(path("/ledgers"))
        .and(query_param("cursor", cursor))
        .respond_with(ResponseTemplate::new(status).set_body_raw(body.to_string(), "text/event-stream"))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_subscribe_delivers_then_cancels() {
    let server = MockServer::start().await;
    mount_stream(&server, "1", 200, LEDGER_STREAM).await;

    let http = HttpClient::new(&ClientConfig::new(server.uri())).unwrap();
    let cancel = CancellationToken::new();
    let mut seen = Vec::new();

    let result = subscribe(&http, "ledgers?cursor=1", &cancel, &mut |ledger: Ledger| {
        seen.push(ledger.sequence);
        cancel.cancel();
    })
    .await;

    assert!(result.is_ok());
    assert_eq!(seen, vec![560339]);
}

#[tokio::test]
async fn test_subscribe_server_close_is_transport_error() {
    let server = MockServer::start().await;
    mount_stream(&server, "1", 200, LEDGER_STREAM).await;

    let http = HttpClient::new(&ClientConfig::new(server.uri())).unwrap();
    let cancel = CancellationToken::new();
    let mut count = 0;

    let err = subscribe(&http, "ledgers?cursor=1", &cancel, &mut |_: Ledger| count += 1)
        .await
        .unwrap_err();

    assert_eq!(count, 1);
    assert_eq!(err.kind(), ErrorKind::Transport);
    assert!(err.to_string().contains("2406637679673344"));
}

#[tokio::test]
async fn test_subscribe_bad_status_skips_handler() {
    let server = MockServer::start().await;
    mount_stream(&server, "now", 500, LEDGER_STREAM).await;

    let http = HttpClient::new(&ClientConfig::new(server.uri())).unwrap();
    let cancel = CancellationToken::new();
    let mut called = false;

    let err = subscribe(&http, "ledgers?cursor=now", &cancel, &mut |_: Ledger| called = true)
        .await
        .unwrap_err();

    assert!(!called);
    assert_eq!(err.kind(), ErrorKind::Server);
    assert_eq!(err.status(), Some(500));
}

#[tokio::test]
async fn test_subscribe_precancelled_issues_no_request() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let http = HttpClient::new(&ClientConfig::new(server.uri())).unwrap();
    let cancel = CancellationToken::new();
    cancel.cancel();

    let result = subscribe(&http, "ledgers?cursor=now", &cancel, &mut |_: Ledger| {
        panic!("handler must not run")
    })
    .await;
    assert!(result.is_ok());
}
