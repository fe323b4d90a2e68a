//! HTTP client for the generation service

use super::models::{GenerateContentRequest, GenerateContentResponse};
use crate::config::GenAiConfig;
use async_trait::async_trait;
use reqwest::StatusCode;
use thiserror::Error;
use tracing::{debug, warn};

/// Every way the generation service can fail. Callers treat all of them
/// as "service unavailable".
#[derive(Error, Debug)]
pub enum GenerationError {
    #[error("generation service credential is not configured")]
    MissingCredential,

    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("generation service returned {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("malformed response: {0}")]
    Decode(String),
}

#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Returns the generated text, or `None` when the service answered
    /// successfully without any text.
    async fn generate(
        &self,
        model: &str,
        prompt: &str,
        system_instruction: &str,
    ) -> Result<Option<String>, GenerationError>;
}

#[derive(Clone)]
pub struct GeminiClient {
    http: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl GeminiClient {
    pub fn new(base_url: impl Into<String>, api_key: Option<String>) -> Result<Self, GenerationError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("rekan-curhat/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.filter(|key| !key.trim().is_empty()),
        })
    }

    pub fn from_config(config: &GenAiConfig) -> Result<Self, GenerationError> {
        Self::new(config.base_url.clone(), config.api_key.clone())
    }

    pub fn has_credential(&self) -> bool {
        self.api_key.is_some()
    }

    fn endpoint(&self, model: &str) -> String {
        format!("{}/v1beta/models/{}:generateContent", self.base_url, model)
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(
        &self,
        model: &str,
        prompt: &str,
        system_instruction: &str,
    ) -> Result<Option<String>, GenerationError> {
        let api_key = self.api_key.as_deref().ok_or(GenerationError::MissingCredential)?;
        let body = GenerateContentRequest::new(prompt, system_instruction);

        debug!(model = %model, "sending generateContent request");

        let response = self
            .http
            .post(self.endpoint(model))
            .header("x-goog-api-key", api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GenerationError::Status { status, body });
        }

        let bytes = response.bytes().await?;
        let parsed: GenerateContentResponse = serde_json::from_slice(&bytes)
            .map_err(|e| GenerationError::Decode(e.to_string()))?;

        debug!(model_version = ?parsed.model_version, "generateContent answered");

        let text = parsed.text();
        if text.is_none() {
            warn!(
                finish_reason = parsed.finish_reason().unwrap_or("none"),
                candidates = parsed.candidates.len(),
                "generation service answered without text"
            );
        }

        Ok(text)
    }
}
