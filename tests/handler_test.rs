use axum::http::header::CONTENT_LENGTH;
use axum::http::{HeaderMap, HeaderValue, StatusCode};
use axum::extract::State;
use axum::response::IntoResponse;
use axum_test::TestServer;
use bytes::Bytes;
use rask_relay::app::main_router;
use rask_relay::app::state::AppState;
use rask_relay::handler::ingest::ingest_handler;
use rask_relay::stats::{RelayStats, RelayStatsSnapshot};
use rask_relay::test_support::MockForwarder;
use std::sync::Arc;

const MAX_BODY: usize = 1024;

fn create_test_server(forwarder: Arc<MockForwarder>) -> (TestServer, Arc<RelayStats>) {
    let stats = Arc::new(RelayStats::new());
    let state = AppState::new(forwarder, stats.clone());
    let server = TestServer::new(main_router(state, MAX_BODY)).unwrap();
    (server, stats)
}

fn content_length(body: &[u8]) -> HeaderValue {
    HeaderValue::from(body.len())
}

#[tokio::test]
async fn test_health_endpoint_returns_healthy() {
    let (server, _) = create_test_server(Arc::new(MockForwarder::new()));

    let response = server.get("/v1/health").await;

    response.assert_status_ok();
    response.assert_text("Healthy");
}

#[tokio::test]
async fn test_batch_forwarded_in_order_and_answered_ok() {
    let mock = Arc::new(MockForwarder::new());
    let (server, _) = create_test_server(mock.clone());
    let body: &[u8] = b"foo\0bar\0\0  \0baz";

    let response = server
        .post("/")
        .add_header(CONTENT_LENGTH, content_length(body))
        .bytes(Bytes::from_static(body))
        .await;

    response.assert_status_ok();
    response.assert_text("OK\n");
    assert_eq!(mock.forwarded(), vec!["foo", "bar", "baz"]);
}

#[tokio::test]
async fn test_any_path_accepts_batches() {
    let mock = Arc::new(MockForwarder::new());
    let (server, _) = create_test_server(mock.clone());
    let body: &[u8] = b"one\0two";

    for path in ["/events", "/deeply/nested/path", "/v1/health"] {
        server
            .post(path)
            .add_header(CONTENT_LENGTH, content_length(body))
            .bytes(Bytes::from_static(body))
            .await
            .assert_status_ok();
    }

    assert_eq!(mock.forwarded().len(), 6);
}

#[tokio::test]
async fn test_multi_line_event_is_normalized() {
    let mock = Arc::new(MockForwarder::new());
    let (server, _) = create_test_server(mock.clone());
    let body: &[u8] = b"<msg>\r\n  <to>ops</to>\r\n</msg>\0";

    server
        .post("/")
        .add_header(CONTENT_LENGTH, content_length(body))
        .bytes(Bytes::from_static(body))
        .await
        .assert_status_ok();

    assert_eq!(mock.forwarded(), vec!["<msg> <to>ops</to> </msg>"]);
}

#[tokio::test]
async fn test_zero_content_length_is_rejected() {
    let mock = Arc::new(MockForwarder::new());
    let (server, stats) = create_test_server(mock.clone());

    let response = server
        .post("/")
        .add_header(CONTENT_LENGTH, HeaderValue::from_static("0"))
        .bytes(Bytes::new())
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    response.assert_text("No body\n");
    assert!(mock.forwarded().is_empty());
    assert_eq!(stats.snapshot().batches_rejected, 1);
}

#[tokio::test]
async fn test_missing_content_length_is_rejected() {
    let mock = Arc::new(MockForwarder::new());
    let stats = Arc::new(RelayStats::new());
    let state = AppState::new(mock.clone(), stats);

    let response = ingest_handler(
        State(state),
        HeaderMap::new(),
        Bytes::from_static(b"foo\0bar"),
    )
    .await
    .into_response();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(mock.forwarded().is_empty());
}

#[tokio::test]
async fn test_partial_failure_still_answers_ok() {
    let mock = Arc::new(MockForwarder::failing_on([1]));
    let (server, _) = create_test_server(mock.clone());
    let body: &[u8] = b"first\0second\0third";

    let response = server
        .post("/")
        .add_header(CONTENT_LENGTH, content_length(body))
        .bytes(Bytes::from_static(body))
        .await;

    response.assert_status_ok();
    response.assert_text("OK\n");
    assert_eq!(mock.forwarded(), vec!["first", "second", "third"]);
}

#[tokio::test]
async fn test_batch_of_only_blanks_answers_ok() {
    let mock = Arc::new(MockForwarder::new());
    let (server, stats) = create_test_server(mock.clone());
    let body: &[u8] = b"\0  \0\n\0";

    server
        .post("/")
        .add_header(CONTENT_LENGTH, content_length(body))
        .bytes(Bytes::from_static(body))
        .await
        .assert_status_ok();

    assert!(mock.forwarded().is_empty());
    assert_eq!(stats.snapshot().batches_accepted, 1);
    assert_eq!(stats.snapshot().events_received, 0);
}

#[tokio::test]
async fn test_unexpected_failure_answers_error() {
    let mock = Arc::new(MockForwarder::panicking_on("boom"));
    let (server, _) = create_test_server(mock);
    let body: &[u8] = b"fine\0boom";

    let response = server
        .post("/")
        .add_header(CONTENT_LENGTH, content_length(body))
        .bytes(Bytes::from_static(body))
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    response.assert_text("Error\n");
}

#[tokio::test]
async fn test_oversized_body_is_refused() {
    let mock = Arc::new(MockForwarder::new());
    let (server, _) = create_test_server(mock.clone());
    let body = vec![b'x'; MAX_BODY * 2];

    let response = server
        .post("/")
        .add_header(CONTENT_LENGTH, content_length(&body))
        .bytes(Bytes::from(body))
        .await;

    response.assert_status(StatusCode::PAYLOAD_TOO_LARGE);
    assert!(mock.forwarded().is_empty());
}

#[tokio::test]
async fn test_get_on_ingest_path_not_allowed() {
    let (server, _) = create_test_server(Arc::new(MockForwarder::new()));

    let response = server.get("/events").await;

    response.assert_status(StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_stats_endpoint_reports_counters() {
    let mock = Arc::new(MockForwarder::new());
    let (server, _) = create_test_server(mock);
    let body: &[u8] = b"a\0b\0";

    server
        .post("/")
        .add_header(CONTENT_LENGTH, content_length(body))
        .bytes(Bytes::from_static(body))
        .await
        .assert_status_ok();
    server
        .post("/")
        .add_header(CONTENT_LENGTH, HeaderValue::from_static("0"))
        .bytes(Bytes::new())
        .await
        .assert_status(StatusCode::BAD_REQUEST);

    let response = server.get("/v1/stats").await;
    response.assert_status_ok();
    let snapshot: RelayStatsSnapshot = response.json();
    assert_eq!(snapshot.batches_accepted, 1);
    assert_eq!(snapshot.batches_rejected, 1);
    assert_eq!(snapshot.events_received, 2);

    let raw: serde_json::Value = response.json();
    assert!(raw.get("bytes_forwarded").is_some());
}
