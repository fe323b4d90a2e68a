//! Landing page and curhat submission handlers

use crate::{
    extractors::{ApiForm, ApiJson},
    models::request::{ApiResponse, CurhatPayload, CurhatReply},
    render::landing_page,
    support::CurhatSession,
    AppState,
};
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use maud::Markup;
use tracing::{debug, info};

pub async fn handle_landing() -> Markup {
    landing_page(&CurhatSession::default())
}

/// Plain form post from the landing page. Re-renders the page with the reply.
pub async fn handle_curhat_form(
    State(state): State<AppState>,
    ApiForm(mut session): ApiForm<CurhatSession>,
) -> Markup {
    let handler = state.support_handler();

    match session.submit(&handler).await {
        Some(source) => {
            info!(source = ?source, "POST /curhat - reply rendered");
            state.metrics.record_reply(source);
        }
        None => {
            debug!("POST /curhat - blank story ignored");
            state.metrics.record_ignored_submission();
        }
    }

    landing_page(&session)
}

/// JSON variant of the form. A blank message sends nothing and answers 204.
pub async fn handle_curhat_api(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<CurhatPayload>,
) -> Response {
    let handler = state.support_handler();
    let pseudonym = payload.pseudonym.unwrap_or_default();

    match handler.handle(&pseudonym, &payload.message).await {
        Some(response) => {
            info!(source = ?response.source, "POST /api/curhat - reply ready");
            state.metrics.record_reply(response.source);
            Json(ApiResponse::success(CurhatReply::from(response))).into_response()
        }
        None => {
            debug!("POST /api/curhat - blank message ignored");
            state.metrics.record_ignored_submission();
            StatusCode::NO_CONTENT.into_response()
        }
    }
}
