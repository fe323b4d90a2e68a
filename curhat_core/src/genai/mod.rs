//! Text generation against the Google Generative Language API

pub mod client;
pub mod models;
pub mod prompt;

pub use client::{GeminiClient, GenerationError, TextGenerator};
pub use models::{GenerateContentRequest, GenerateContentResponse};
pub use prompt::{compose_prompt, DEFAULT_PSEUDONYM, SYSTEM_INSTRUCTION};

#[cfg(test)]
pub(crate) mod mock;
