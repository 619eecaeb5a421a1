//! Mock LLM Provider for testing
//!
//! Replies are chosen by the first rule whose needle occurs in the prompt
//! text, then by the response queue, then by the default reply. Every request
//! is recorded so tests can inspect exactly what the caller sent.

use crate::completion::{CompletionRequest, CompletionResponse};
use crate::error::{Error, Result};
use crate::provider::LlmProvider;

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// A scripted reply for prompts containing `needle`.
#[derive(Debug, Clone)]
pub struct MockRule {
    /// Substring matched against the concatenated prompt text
    pub needle: String,
    /// Reply returned on match
    pub reply: Result<String>,
    /// Artificial latency before replying
    pub delay: Option<Duration>,
}

impl MockRule {
    /// Reply with `content` when the prompt contains `needle`
    #[must_use]
    pub fn reply(needle: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            needle: needle.into(),
            reply: Ok(content.into()),
            delay: None,
        }
    }

    /// Fail with `error` when the prompt contains `needle`
    #[must_use]
    pub fn fail(needle: impl Into<String>, error: Error) -> Self {
        Self {
            needle: needle.into(),
            reply: Err(error),
            delay: None,
        }
    }

    /// Add latency to this rule
    #[must_use]
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }
}

#[derive(Debug, Default)]
struct MockState {
    rules: Vec<MockRule>,
    queue: VecDeque<Result<String>>,
    failure: Option<Error>,
    requests: Vec<CompletionRequest>,
}

/// A mock LLM provider that returns scripted responses.
#[derive(Debug, Clone)]
pub struct MockProvider {
    state: Arc<Mutex<MockState>>,
    default_reply: String,
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl MockProvider {
    /// Create a new mock provider replying "mock response".
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(MockState::default())),
            default_reply: "mock response".to_string(),
        }
    }

    /// Provider whose every call fails with `error`.
    #[must_use]
    pub fn failing(error: Error) -> Self {
        let provider = Self::new();
        provider.lock().failure = Some(error);
        provider
    }

    /// Set the reply used when no rule or queued response applies.
    #[must_use]
    pub fn with_default_reply(mut self, reply: impl Into<String>) -> Self {
        self.default_reply = reply.into();
        self
    }

    /// Add a rule; rules are checked in insertion order.
    #[must_use]
    pub fn with_rule(self, rule: MockRule) -> Self {
        self.lock().rules.push(rule);
        self
    }

    /// Add a response to the queue.
    pub fn push_response(&self, content: impl Into<String>) {
        self.lock().queue.push_back(Ok(content.into()));
    }

    /// Queue a failure.
    pub fn push_error(&self, error: Error) {
        self.lock().queue.push_back(Err(error));
    }

    /// Snapshot of every request received so far.
    #[must_use]
    pub fn requests(&self) -> Vec<CompletionRequest> {
        self.lock().requests.clone()
    }

    /// Number of requests received so far.
    #[must_use]
    pub fn call_count(&self) -> usize {
        self.lock().requests.len()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, MockState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn pick_reply(&self, request: &CompletionRequest) -> (Result<String>, Option<Duration>) {
        let prompt = request.prompt_text();
        let mut state = self.lock();
        state.requests.push(request.clone());

        if let Some(error) = &state.failure {
            return (Err(error.clone()), None);
        }

        if let Some(rule) = state.rules.iter().find(|r| prompt.contains(&r.needle)) {
            return (rule.reply.clone(), rule.delay);
        }

        match state.queue.pop_front() {
            Some(reply) => (reply, None),
            None => (Ok(self.default_reply.clone()), None),
        }
    }
}

#[async_trait::async_trait]
impl LlmProvider for MockProvider {
    fn name(&self) -> &str {
        "mock"
    }

    fn available_models(&self) -> Vec<String> {
        vec!["mock-model".to_string()]
    }

    fn default_model(&self) -> &str {
        "mock-model"
    }

    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse> {
        let (reply, delay) = self.pick_reply(&request);
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        reply.map(|content| CompletionResponse {
            content,
            usage: None,
            finish_reason: Some("stop".to_string()),
            model: "mock-model".to_string(),
        })
    }

    async fn health_check(&self) -> bool {
        self.lock().failure.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::Message;

    fn request(text: &str) -> CompletionRequest {
        CompletionRequest::new("").with_message(Message::user(text))
    }

    #[tokio::test]
    async fn test_default_reply() {
        let mock = MockProvider::new();
        let response = mock.complete(request("hello")).await.unwrap();
        assert_eq!(response.content, "mock response");
        assert_eq!(mock.call_count(), 1);
    }

    #[tokio::test]
    async fn test_rules_take_precedence_over_queue() {
        let mock = MockProvider::new().with_rule(MockRule::reply("Socrates", "{\"a\":1}"));
        mock.push_response("queued");

        let first = mock.complete(request("You are Socrates")).await.unwrap();
        assert_eq!(first.content, "{\"a\":1}");

        let second = mock.complete(request("someone else")).await.unwrap();
        assert_eq!(second.content, "queued");

        let third = mock.complete(request("someone else")).await.unwrap();
        assert_eq!(third.content, "mock response");
    }

    #[tokio::test]
    async fn test_failing_provider_records_requests() {
        let mock = MockProvider::failing(Error::Network("connection refused".into()));
        let err = mock.complete(request("anything")).await.unwrap_err();
        assert!(err.is_unavailable());
        assert_eq!(mock.requests().len(), 1);
        assert!(!mock.health_check().await);
    }

    #[tokio::test]
    async fn test_rule_failure() {
        let mock =
            MockProvider::new().with_rule(MockRule::fail("boom", Error::Api("bad".into())));
        assert!(mock.complete(request("boom")).await.is_err());
        assert!(mock.complete(request("fine")).await.is_ok());
    }
}
