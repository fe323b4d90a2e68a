//! Metrics handlers

use crate::{models::request::ApiResponse, AppState};
use axum::{extract::State, response::IntoResponse, Json};
use tracing::debug;

pub async fn handle_metrics(State(state): State<AppState>) -> impl IntoResponse {
    debug!("GET /api/metrics");
    Json(ApiResponse::success(state.metrics.get_snapshot()))
}
