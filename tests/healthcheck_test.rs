use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use rask_relay::app::main_router;
use rask_relay::app::state::AppState;
use rask_relay::healthcheck::HealthcheckError;
use rask_relay::stats::RelayStats;
use rask_relay::test_support::MockForwarder;
use std::sync::Arc;

async fn serve_on_ephemeral_port(app: Router) -> (u16, tokio::task::JoinHandle<()>) {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    let handle = tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (port, handle)
}

#[tokio::test]
async fn test_probe_passes_against_relay_router() {
    let state = AppState::new(Arc::new(MockForwarder::new()), Arc::new(RelayStats::new()));
    let (port, server) = serve_on_ephemeral_port(main_router(state, 1024)).await;

    rask_relay::healthcheck_with_port(port)
        .await
        .expect("relay router should report healthy");

    server.abort();
}

#[tokio::test]
async fn test_probe_fails_without_listener() {
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };

    let err = rask_relay::healthcheck_with_port(port).await.unwrap_err();
    assert!(matches!(err, HealthcheckError::Request { .. }));
}

#[tokio::test]
async fn test_probe_fails_on_unavailable_status() {
    let app = Router::new().route(
        "/v1/health",
        get(|| async { (StatusCode::SERVICE_UNAVAILABLE, "Draining") }),
    );
    let (port, server) = serve_on_ephemeral_port(app).await;

    let err = rask_relay::healthcheck_with_port(port).await.unwrap_err();
    assert!(matches!(
        err,
        HealthcheckError::Status(StatusCode::SERVICE_UNAVAILABLE)
    ));

    server.abort();
}

#[tokio::test]
async fn test_probe_fails_on_foreign_service() {
    // Something else answering 200 on the port is not the relay
    let app = Router::new().route("/v1/health", get(|| async { "ok from elsewhere" }));
    let (port, server) = serve_on_ephemeral_port(app).await;

    let err = rask_relay::healthcheck_with_port(port).await.unwrap_err();
    assert!(matches!(err, HealthcheckError::Body(_)));

    server.abort();
}
