use crate::app::state::AppState;
use crate::domain::Batch;
use crate::pipeline::relay_batch;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Response};
use bytes::Bytes;
use tracing::{Instrument, Span, error, info, instrument, warn};

/// Content-Length as the client declared it, if present and numeric.
pub fn declared_content_length(headers: &HeaderMap) -> Option<i64> {
    headers
        .get(header::CONTENT_LENGTH)?
        .to_str()
        .ok()?
        .trim()
        .parse()
        .ok()
}

/// Handler for POST on any path: a null-delimited batch of events.
///
/// Answers `200 OK` once every event is either delivered or exhausted,
/// whatever the individual outcomes were. The batch runs in its own task so
/// a client disconnect does not cut forwarding short.
#[instrument(skip_all, fields(body_size = body.len()))]
pub async fn ingest_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let batch = match Batch::decode(&body, declared_content_length(&headers)) {
        Ok(batch) => batch,
        Err(e) => {
            warn!("Rejected request: {e}");
            state.stats.record_batch_rejected();
            return plain_text(StatusCode::BAD_REQUEST, "No body\n");
        }
    };
    state.stats.record_batch_accepted();

    let task = tokio::spawn(
        relay_batch(state.forwarder.clone(), state.stats.clone(), batch)
            .instrument(Span::current()),
    );

    match task.await {
        Ok(summary) => {
            info!(
                events = summary.events,
                delivered = summary.delivered,
                exhausted = summary.exhausted,
                skipped = summary.skipped,
                "Processed batch"
            );
            plain_text(StatusCode::OK, "OK\n")
        }
        Err(e) => {
            error!("Error handling request: {e}");
            plain_text(StatusCode::INTERNAL_SERVER_ERROR, "Error\n")
        }
    }
}

fn plain_text(status: StatusCode, body: &'static str) -> Response {
    (status, [(header::CONTENT_TYPE, "text/plain")], body).into_response()
}
