use super::handler::SupportRequestHandler;
use super::models::ResponseSource;
use serde::Deserialize;

/// What the curhat form shows for one visitor: the inputs, the last reply
/// and whether a reply is still on its way.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CurhatSession {
    #[serde(default)]
    pub pseudonym: String,
    #[serde(default)]
    pub story: String,
    #[serde(skip)]
    pub response: Option<String>,
    #[serde(skip)]
    pub loading: bool,
}

impl CurhatSession {
    pub fn new(pseudonym: impl Into<String>, story: impl Into<String>) -> Self {
        Self {
            pseudonym: pseudonym.into(),
            story: story.into(),
            ..Default::default()
        }
    }

    /// Returns where the new reply came from, or `None` when nothing was sent.
    /// A blank story leaves the session as it was.
    pub async fn submit(&mut self, handler: &SupportRequestHandler) -> Option<ResponseSource> {
        if self.story.trim().is_empty() {
            return None;
        }

        self.loading = true;
        self.response = None;

        let reply = handler.handle(&self.pseudonym, &self.story).await;
        let source = reply.as_ref().map(|r| r.source);

        self.response = reply.map(|r| r.text);
        self.loading = false;
        source
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::genai::mock::MockGenerator;
    use crate::support::models::FALLBACK_REPLY;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_submit_stores_reply() {
        let generator = Arc::new(MockGenerator::replying("Aku mendengarkan."));
        let handler = SupportRequestHandler::new(generator, "m");
        let mut session = CurhatSession::new("", "hari ini berat");

        assert_eq!(session.submit(&handler).await, Some(ResponseSource::Generated));

        assert_eq!(session.response.as_deref(), Some("Aku mendengarkan."));
        assert!(!session.loading);
    }

    #[tokio::test]
    async fn test_blank_story_keeps_previous_reply() {
        let generator = Arc::new(MockGenerator::replying("baru"));
        let handler = SupportRequestHandler::new(generator.clone(), "m");
        let mut session = CurhatSession::new("Senja", "   ");
        session.response = Some("lama".to_string());

        assert_eq!(session.submit(&handler).await, None);

        assert_eq!(session.response.as_deref(), Some("lama"));
        assert_eq!(generator.call_count(), 0);
    }

    #[tokio::test]
    async fn test_second_submission_replaces_reply() {
        let handler = SupportRequestHandler::new(Arc::new(MockGenerator::failing()), "m");
        let mut session = CurhatSession::new("", "pertama");
        session.response = Some("balasan sebelumnya".to_string());

        assert_eq!(session.submit(&handler).await, Some(ResponseSource::Fallback));

        assert_eq!(session.response.as_deref(), Some(FALLBACK_REPLY));
    }
}
