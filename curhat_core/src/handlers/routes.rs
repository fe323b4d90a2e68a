//! Route table

use super::{curhat, health, metrics};
use crate::{error::AppError, AppState};
use axum::{
    http::Uri,
    routing::{get, post},
    Router,
};

pub fn create_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(curhat::handle_landing))
        .route("/curhat", post(curhat::handle_curhat_form))
        .route("/api/curhat", post(curhat::handle_curhat_api))
        .route("/health", get(health::handle_health))
        .route("/live", get(health::handle_liveness))
        .route("/ready", get(health::handle_readiness))
        .route("/api/metrics", get(metrics::handle_metrics))
        .fallback(handle_not_found)
}

async fn handle_not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {}", uri.path()))
}
