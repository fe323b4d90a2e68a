//! Scripted generator for unit tests

use super::client::{GenerationError, TextGenerator};
use async_trait::async_trait;
use parking_lot::Mutex;
use std::sync::Arc;
use tokio::sync::Notify;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall {
    pub model: String,
    pub prompt: String,
    pub system_instruction: String,
}

#[derive(Clone)]
enum Outcome {
    Reply(Option<String>),
    Fail,
}

pub struct MockGenerator {
    outcome: Outcome,
    gate: Option<Arc<Notify>>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl MockGenerator {
    pub fn replying(text: &str) -> Self {
        Self::with_outcome(Outcome::Reply(Some(text.to_string())))
    }

    pub fn empty() -> Self {
        Self::with_outcome(Outcome::Reply(None))
    }

    pub fn failing() -> Self {
        Self::with_outcome(Outcome::Fail)
    }

    fn with_outcome(outcome: Outcome) -> Self {
        Self {
            outcome,
            gate: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Holds every call until the gate is notified.
    pub fn gated(mut self, gate: Arc<Notify>) -> Self {
        self.gate = Some(gate);
        self
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().len()
    }
}

#[async_trait]
impl TextGenerator for MockGenerator {
    async fn generate(
        &self,
        model: &str,
        prompt: &str,
        system_instruction: &str,
    ) -> Result<Option<String>, GenerationError> {
        self.calls.lock().push(RecordedCall {
            model: model.to_string(),
            prompt: prompt.to_string(),
            system_instruction: system_instruction.to_string(),
        });

        if let Some(gate) = &self.gate {
            gate.notified().await;
        }

        match &self.outcome {
            Outcome::Reply(text) => Ok(text.clone()),
            Outcome::Fail => Err(GenerationError::Decode("scripted failure".to_string())),
        }
    }
}
