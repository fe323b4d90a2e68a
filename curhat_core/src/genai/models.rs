//! Wire types for the `generateContent` endpoint

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thought: Option<bool>,
}

impl Part {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            thought: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub parts: Vec<Part>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    pub system_instruction: Content,
}

impl GenerateContentRequest {
    /// Single user turn plus the persona instruction.
    pub fn new(prompt: &str, system_instruction: &str) -> Self {
        Self {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part::text(prompt)],
            }],
            system_instruction: Content {
                role: None,
                parts: vec![Part::text(system_instruction)],
            },
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<Content>,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    #[serde(default)]
    pub model_version: Option<String>,
}

impl GenerateContentResponse {
    /// Why the first candidate stopped, e.g. `STOP` or `SAFETY`.
    pub fn finish_reason(&self) -> Option<&str> {
        self.candidates.first()?.finish_reason.as_deref()
    }

    /// Concatenated text of the first candidate, skipping thought parts.
    /// `None` when the model produced no text at all.
    pub fn text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;

        let mut text = String::new();
        let mut found = false;
        for part in &content.parts {
            if part.thought == Some(true) {
                continue;
            }
            if let Some(chunk) = &part.text {
                text.push_str(chunk);
                found = true;
            }
        }

        found.then_some(text)
    }
}
