//! Sends a visitor's story to the generation service and always comes back
//! with something kind to show.

use super::models::{SupportRequest, SupportResponse};
use crate::genai::{TextGenerator, SYSTEM_INSTRUCTION};
use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};
use tracing::{error, info, info_span, Instrument};
use uuid::Uuid;

#[derive(Clone)]
pub struct SupportRequestHandler {
    generator: Arc<dyn TextGenerator>,
    model: String,
    in_progress: Arc<AtomicBool>,
}

impl SupportRequestHandler {
    pub fn new(generator: Arc<dyn TextGenerator>, model: impl Into<String>) -> Self {
        Self {
            generator,
            model: model.into(),
            in_progress: Arc::new(AtomicBool::new(false)),
        }
    }

    /// True while a call is waiting on the generation service.
    /// Clones of a handler share the flag.
    pub fn is_in_progress(&self) -> bool {
        self.in_progress.load(Ordering::SeqCst)
    }

    /// Returns `None` without contacting the service when the message is blank.
    pub async fn handle(&self, pseudonym: &str, message: &str) -> Option<SupportResponse> {
        let request = SupportRequest::new(pseudonym, message)?;
        Some(self.handle_request(&request).await)
    }

    pub async fn handle_request(&self, request: &SupportRequest) -> SupportResponse {
        let submission_id = Uuid::new_v4();
        let span = info_span!(
            "support_request",
            %submission_id,
            model = %self.model,
            message_len = request.message().chars().count(),
        );

        async move {
            let _guard = InProgressGuard::enter(&self.in_progress);
            let prompt = request.prompt();

            match self
                .generator
                .generate(&self.model, &prompt, SYSTEM_INSTRUCTION)
                .await
            {
                Ok(text) => {
                    let response = SupportResponse::from_generated(text);
                    info!(source = ?response.source, "support reply ready");
                    response
                }
                Err(e) => {
                    error!(error = %e, "generation service unavailable, using fallback reply");
                    SupportResponse::fallback()
                }
            }
        }
        .instrument(span)
        .await
    }
}

/// Clears the flag on drop so a cancelled call does not leave it stuck.
struct InProgressGuard<'a>(&'a AtomicBool);

impl<'a> InProgressGuard<'a> {
    fn enter(flag: &'a AtomicBool) -> Self {
        flag.store(true, Ordering::SeqCst);
        Self(flag)
    }
}

impl Drop for InProgressGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::genai::mock::MockGenerator;
    use crate::support::models::{ResponseSource, DEFAULT_REPLY, FALLBACK_REPLY};
    use tokio::sync::Notify;

    const MODEL: &str = "gemini-3-flash-preview";

    fn handler_with(generator: Arc<MockGenerator>) -> SupportRequestHandler {
        SupportRequestHandler::new(generator, MODEL)
    }

    #[tokio::test]
    async fn test_anonymous_story_reaches_service() {
        let generator = Arc::new(MockGenerator::replying("Kamu tidak sendirian."));
        let handler = handler_with(generator.clone());

        let response = handler.handle("", "Aku capek banget hari ini").await.unwrap();

        assert_eq!(response.text, "Kamu tidak sendirian.");
        assert_eq!(response.source, ResponseSource::Generated);

        let calls = generator.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].model, MODEL);
        assert!(calls[0].prompt.contains("Anonim"));
        assert!(calls[0].prompt.contains("Aku capek banget hari ini"));
        assert_eq!(calls[0].system_instruction, SYSTEM_INSTRUCTION);
    }

    #[tokio::test]
    async fn test_pseudonym_is_used_when_given() {
        let generator = Arc::new(MockGenerator::replying("ok"));
        let handler = handler_with(generator.clone());

        handler.handle("Senja Di Desa", "hari ini berat").await.unwrap();

        let prompt = &generator.calls()[0].prompt;
        assert!(prompt.contains("Senja Di Desa"));
        assert!(!prompt.contains("Anonim"));
    }

    #[tokio::test]
    async fn test_pseudonym_is_sent_untrimmed() {
        let generator = Arc::new(MockGenerator::replying("ok"));
        let handler = handler_with(generator.clone());

        handler.handle("   ", "halo").await.unwrap();
        handler.handle(" Senja ", "halo").await.unwrap();

        let calls = generator.calls();
        assert_eq!(calls[0].prompt, "User (Pseudonym:    ) says: halo");
        assert_eq!(calls[1].prompt, "User (Pseudonym:  Senja ) says: halo");
    }

    #[tokio::test]
    async fn test_blank_message_is_a_no_op() {
        let generator = Arc::new(MockGenerator::replying("tidak dipakai"));
        let handler = handler_with(generator.clone());

        for message in ["", "   ", "\n\t"] {
            assert!(handler.handle("Senja", message).await.is_none());
        }

        assert_eq!(generator.call_count(), 0);
        assert!(!handler.is_in_progress());
    }

    #[tokio::test]
    async fn test_empty_reply_uses_default() {
        let handler = handler_with(Arc::new(MockGenerator::empty()));

        let response = handler.handle("", "halo").await.unwrap();

        assert_eq!(response.text, DEFAULT_REPLY);
        assert_eq!(response.source, ResponseSource::Default);
    }

    #[tokio::test]
    async fn test_failure_returns_fallback() {
        let generator = Arc::new(MockGenerator::failing());
        let handler = handler_with(generator.clone());

        let response = handler.handle("", "halo").await.unwrap();

        assert_eq!(response.text, FALLBACK_REPLY);
        assert_eq!(response.source, ResponseSource::Fallback);
        assert_eq!(generator.call_count(), 1);
        assert!(!handler.is_in_progress());
    }

    #[tokio::test]
    async fn test_in_progress_spans_the_call() {
        let gate = Arc::new(Notify::new());
        let generator = Arc::new(MockGenerator::replying("sudah").gated(gate.clone()));
        let handler = handler_with(generator.clone());

        assert!(!handler.is_in_progress());

        let task = {
            let handler = handler.clone();
            tokio::spawn(async move { handler.handle("", "tunggu ya").await })
        };

        while generator.call_count() == 0 {
            tokio::task::yield_now().await;
        }
        assert!(handler.is_in_progress());

        gate.notify_one();
        let response = task.await.unwrap().unwrap();

        assert_eq!(response.text, "sudah");
        assert!(!handler.is_in_progress());
    }

    #[tokio::test]
    async fn test_cancelled_call_clears_flag() {
        let gate = Arc::new(Notify::new());
        let generator = Arc::new(MockGenerator::replying("tidak sampai").gated(gate));
        let handler = handler_with(generator.clone());

        let task = {
            let handler = handler.clone();
            tokio::spawn(async move { handler.handle("", "batal").await })
        };

        while generator.call_count() == 0 {
            tokio::task::yield_now().await;
        }
        assert!(handler.is_in_progress());

        task.abort();
        let _ = task.await;

        assert!(!handler.is_in_progress());
    }
}
