//! Core library for the Rekan Curhat site: the support request handler,
//! the generation client, page rendering and the HTTP routes.

pub mod config;
pub mod error;
pub mod extractors;
pub mod genai;
pub mod handlers;
pub mod metrics;
pub mod middleware;
pub mod models;
pub mod render;
pub mod support;

pub use config::AppConfig;
pub use error::{AppError, Result};
pub use genai::{GeminiClient, GenerationError, TextGenerator};
pub use handlers::routes::create_routes;
pub use metrics::MetricsCollector;
pub use middleware::cors::{cors_layer_from_config, cors_layer_permissive};
pub use support::{CurhatSession, ResponseSource, SupportRequest, SupportRequestHandler, SupportResponse};

use axum::{
    body::Body,
    extract::{MatchedPath, State},
    http::Request,
    middleware::{self as axum_middleware, Next},
    response::Response,
    Router,
};
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing::info;

/// Metrics key for requests that did not match any route.
pub const UNMATCHED_ENDPOINT: &str = "<unmatched>";

#[derive(Clone)]
pub struct AppState {
    pub app_name: String,
    pub version: String,
    pub generator: Arc<dyn TextGenerator>,
    pub model: String,
    pub generation_configured: bool,
    pub metrics: MetricsCollector,
}

impl AppState {
    pub fn new(generator: Arc<dyn TextGenerator>, model: impl Into<String>) -> Self {
        Self {
            app_name: "Rekan Curhat".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            generator,
            model: model.into(),
            generation_configured: true,
            metrics: MetricsCollector::new(),
        }
    }

    /// State backed by the Gemini client described in `config`.
    pub fn from_config(config: &AppConfig) -> std::result::Result<Self, GenerationError> {
        let client = GeminiClient::from_config(&config.genai)?;
        let configured = client.has_credential();

        Ok(Self::new(Arc::new(client), config.genai.model.clone())
            .with_generation_configured(configured))
    }

    pub fn with_generation_configured(mut self, configured: bool) -> Self {
        self.generation_configured = configured;
        self
    }

    /// A fresh handler per submission, so each visitor gets their own
    /// in-progress flag.
    pub fn support_handler(&self) -> SupportRequestHandler {
        SupportRequestHandler::new(self.generator.clone(), self.model.clone())
    }
}

pub fn create_app_with_config(state: AppState, config: AppConfig) -> Router {
    let mut router = Router::new().merge(create_routes());

    router = router.layer(middleware::cors::cors_layer_from_config(&config.cors));

    router = router.layer(axum_middleware::from_fn_with_state(
        state.clone(),
        metrics_middleware,
    ));

    router = router.layer(middleware::logging::logging_layer());

    router.with_state(state)
}

async fn metrics_middleware(
    State(state): State<AppState>,
    request: Request<Body>,
    next: Next,
) -> Response {
    let path = endpoint_label(&request);
    let start = std::time::Instant::now();

    state.metrics.record_request(&path);

    let response = next.run(request).await;

    state
        .metrics
        .record_response(&path, start.elapsed().as_millis(), response.status().as_u16());

    response
}

/// Route template for matched requests. Everything the fallback answers
/// shares one label so arbitrary paths cannot grow the endpoint table.
fn endpoint_label(request: &Request<Body>) -> String {
    request
        .extensions()
        .get::<MatchedPath>()
        .map(|matched| matched.as_str().to_string())
        .unwrap_or_else(|| UNMATCHED_ENDPOINT.to_string())
}

pub async fn run_server(app: Router, addr: SocketAddr) -> Result<()> {
    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, starting graceful shutdown");
        },
        _ = terminate => {
            info!("Received SIGTERM, starting graceful shutdown");
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::genai::mock::MockGenerator;
    use axum::http::StatusCode;
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_unknown_paths_share_one_metrics_entry() {
        let state = AppState::new(Arc::new(MockGenerator::replying("x")), "m");
        let app = create_app_with_config(state.clone(), AppConfig::default());

        for i in 0..200 {
            let request = Request::builder()
                .uri(format!("/nope/{}", i))
                .body(Body::empty())
                .unwrap();
            let response = app.clone().oneshot(request).await.unwrap();
            assert_eq!(response.status(), StatusCode::NOT_FOUND);
        }

        let request = Request::builder().uri("/health").body(Body::empty()).unwrap();
        app.oneshot(request).await.unwrap();

        let endpoints = state.metrics.requests_by_endpoint.read();
        assert_eq!(endpoints.len(), 2);
        assert_eq!(endpoints.get(UNMATCHED_ENDPOINT), Some(&200));
        assert_eq!(endpoints.get("/health"), Some(&1));
        assert_eq!(state.metrics.total_requests.load(std::sync::atomic::Ordering::Relaxed), 201);
    }
}
