use crate::app::state::AppState;
use crate::handler::health::health_handler;
use crate::handler::ingest::ingest_handler;
use crate::handler::stats::stats_handler;
use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};

/// Build the relay router.
///
/// `POST` on any path is an ingest request, including the paths that also
/// serve `GET` endpoints.
pub fn main_router(state: AppState, max_body_bytes: usize) -> Router {
    Router::new()
        .route("/v1/health", get(health_handler).post(ingest_handler))
        .route("/v1/stats", get(stats_handler).post(ingest_handler))
        .route("/", post(ingest_handler))
        .route("/{*path}", post(ingest_handler))
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .with_state(state)
}
