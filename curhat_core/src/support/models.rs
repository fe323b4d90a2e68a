use crate::genai::prompt::{compose_prompt, display_pseudonym};
use serde::{Deserialize, Serialize};

/// Shown when the service answers without any text.
pub const DEFAULT_REPLY: &str = "Terima kasih sudah bercerita. Aku di sini mendengarkanmu.";

/// Shown when the service cannot be reached or answers with an error.
pub const FALLBACK_REPLY: &str =
    "Maaf, sepertinya aku sedang kesulitan terhubung. Tapi ketahuilah bahwa ceritamu berharga.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupportRequest {
    pseudonym: String,
    message: String,
}

impl SupportRequest {
    /// `None` when the message is blank after trimming.
    pub fn new(pseudonym: impl Into<String>, message: impl Into<String>) -> Option<Self> {
        let message = message.into();
        if message.trim().is_empty() {
            return None;
        }

        Some(Self {
            pseudonym: pseudonym.into(),
            message,
        })
    }

    pub fn pseudonym(&self) -> &str {
        display_pseudonym(&self.pseudonym)
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn prompt(&self) -> String {
        compose_prompt(&self.pseudonym, &self.message)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseSource {
    Generated,
    Default,
    Fallback,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupportResponse {
    pub text: String,
    pub source: ResponseSource,
}

impl SupportResponse {
    /// Maps a successful service answer, substituting the default reply for empty text.
    pub fn from_generated(text: Option<String>) -> Self {
        match text {
            Some(text) if !text.is_empty() => Self {
                text,
                source: ResponseSource::Generated,
            },
            _ => Self {
                text: DEFAULT_REPLY.to_string(),
                source: ResponseSource::Default,
            },
        }
    }

    pub fn fallback() -> Self {
        Self {
            text: FALLBACK_REPLY.to_string(),
            source: ResponseSource::Fallback,
        }
    }
}
