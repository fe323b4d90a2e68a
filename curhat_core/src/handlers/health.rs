//! Health check handlers

use crate::{error::AppError, models::request::ApiResponse, AppState};
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tracing::{info, warn};

pub async fn handle_health(State(state): State<AppState>) -> impl IntoResponse {
    Json(ApiResponse::success(serde_json::json!({
        "status": "healthy",
        "app": state.app_name,
        "version": state.version,
        "model": state.model,
        "generation_configured": state.generation_configured,
        "timestamp": chrono::Utc::now().timestamp(),
        "uptime_seconds": chrono::Utc::now()
            .signed_duration_since(state.metrics.start_time)
            .num_seconds(),
    })))
}

/// Ready once a credential for the generation service is configured.
/// Without one every visitor would only ever see the fallback reply.
pub async fn handle_readiness(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    info!("GET /ready - Readiness probe");

    if !state.generation_configured {
        warn!("Readiness failed: generation service credential missing");
        return Err(AppError::ServiceUnavailable(
            "Service not ready: generation_credential_missing".to_string(),
        ));
    }

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success(serde_json::json!({
            "status": "ready",
            "timestamp": chrono::Utc::now().timestamp()
        }))),
    ))
}

pub async fn handle_liveness() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(ApiResponse::success(serde_json::json!({
            "status": "alive",
            "timestamp": chrono::Utc::now().timestamp()
        }))),
    )
}
