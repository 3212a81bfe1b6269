use axum::http::{StatusCode, header};
use axum::response::IntoResponse;
use tracing::debug;

/// `GET /v1/health`. Liveness only; the TCP destination is not probed.
pub async fn health_handler() -> impl IntoResponse {
    debug!("Health probe");
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        "Healthy",
    )
}
