use crate::app::state::AppState;
use crate::stats::RelayStatsSnapshot;
use axum::Json;
use axum::extract::State;

/// Handler for GET /v1/stats
pub async fn stats_handler(State(state): State<AppState>) -> Json<RelayStatsSnapshot> {
    Json(state.stats.snapshot())
}
