//! Request logging middleware configuration

use axum::body::Body;
use http::{Request, Response};
use std::time::Duration;
use tower_http::classify::{ServerErrorsAsFailures, ServerErrorsFailureClass, SharedClassifier};
use tower_http::trace::{
    DefaultOnBodyChunk, DefaultOnEos, MakeSpan, OnFailure, OnRequest, OnResponse, TraceLayer,
};
use tracing::info_span;

pub fn logging_layer() -> TraceLayer<
    SharedClassifier<ServerErrorsAsFailures>,
    impl MakeSpan<Body> + Clone,
    impl OnRequest<Body> + Clone,
    impl OnResponse<Body> + Clone,
    DefaultOnBodyChunk,
    DefaultOnEos,
    impl OnFailure<ServerErrorsFailureClass> + Clone,
> {
    TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            info_span!(
                "http_request",
                method = %request.method(),
                path = %request.uri().path(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &tracing::Span| {
            tracing::debug!(
                "started processing request {} {}",
                request.method(),
                request.uri().path()
            );
        })
        .on_response(|response: &Response<Body>, latency: Duration, _span: &tracing::Span| {
            let status = response.status();
            let latency_ms = latency.as_millis();

            if status.is_success() || status.is_redirection() {
                tracing::info!(
                    status = status.as_u16(),
                    latency_ms = latency_ms,
                    "request completed successfully"
                );
            } else if status.is_client_error() {
                tracing::warn!(
                    status = status.as_u16(),
                    latency_ms = latency_ms,
                    "client error response"
                );
            } else {
                tracing::error!(
                    status = status.as_u16(),
                    latency_ms = latency_ms,
                    "server error response"
                );
            }
        })
        .on_failure(
            |error: ServerErrorsFailureClass,
             latency: Duration,
             _span: &tracing::Span| {
                tracing::error!(
                    latency_ms = latency.as_millis(),
                    error = ?error,
                    "request failed"
                );
            },
        )
}
