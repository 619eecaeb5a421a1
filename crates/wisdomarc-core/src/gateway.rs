//! Model Gateway
//!
//! The single chat-completion capability every stage uses. Each call is
//! bounded by a timeout and its failure is classified as either
//! [`Error::ModelUnavailable`] or [`Error::ModelError`].

use crate::error::{Error, Result};
use crate::utils::{retry_with_backoff, RetryConfig};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, instrument, warn};
use wisdomarc_llm::{CompletionRequest, LlmProvider, Message};

/// Default per-call timeout
pub const DEFAULT_CALL_TIMEOUT: Duration = Duration::from_secs(120);

/// Gateway settings
#[derive(Debug, Clone, PartialEq)]
pub struct GatewayConfig {
    /// Model identifier; `None` uses the provider default
    pub model: Option<String>,
    /// Upper bound for a single completion
    pub call_timeout: Duration,
    /// Retry policy applied to unavailable-backend failures
    pub retry: RetryConfig,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            model: None,
            call_timeout: DEFAULT_CALL_TIMEOUT,
            retry: RetryConfig::default(),
        }
    }
}

impl GatewayConfig {
    /// Create default settings
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pin the model identifier
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Set the per-call timeout
    #[must_use]
    pub fn with_call_timeout(mut self, timeout: Duration) -> Self {
        self.call_timeout = timeout;
        self
    }

    /// Set the retry policy
    #[must_use]
    pub fn with_retry(mut self, retry: RetryConfig) -> Self {
        self.retry = retry;
        self
    }
}

/// Sampling options for one kind of model call
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct StageSettings {
    /// Sampling temperature
    pub temperature: f32,
    /// Output token budget
    pub max_tokens: u32,
}

impl StageSettings {
    /// Create settings
    #[must_use]
    pub const fn new(temperature: f32, max_tokens: u32) -> Self {
        Self {
            temperature,
            max_tokens,
        }
    }
}

/// Handle to the chat-completion backend. Cheap to clone.
#[derive(Clone)]
pub struct ModelGateway {
    provider: Arc<dyn LlmProvider>,
    config: GatewayConfig,
}

impl std::fmt::Debug for ModelGateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModelGateway")
            .field("provider", &self.provider.name())
            .field("config", &self.config)
            .finish()
    }
}

impl ModelGateway {
    /// Create a gateway with default settings
    #[must_use]
    pub fn new(provider: Arc<dyn LlmProvider>) -> Self {
        Self::with_config(provider, GatewayConfig::default())
    }

    /// Create a gateway with explicit settings
    #[must_use]
    pub fn with_config(provider: Arc<dyn LlmProvider>, config: GatewayConfig) -> Self {
        Self { provider, config }
    }

    /// Backend name
    #[must_use]
    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }

    /// Model used for completions
    #[must_use]
    pub fn model(&self) -> &str {
        self.config
            .model
            .as_deref()
            .unwrap_or_else(|| self.provider.default_model())
    }

    /// Gateway settings
    #[must_use]
    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }

    /// Whether the backend answers its health probe
    pub async fn health_check(&self) -> bool {
        self.provider.health_check().await
    }

    /// [`complete`](Self::complete) with options taken from `settings`
    pub async fn complete_with(
        &self,
        messages: Vec<Message>,
        settings: StageSettings,
    ) -> Result<String> {
        self.complete(messages, settings.temperature, settings.max_tokens)
            .await
    }

    /// Run one chat completion and return the assistant text.
    #[instrument(skip(self, messages), fields(provider = %self.provider.name(), model = %self.model()))]
    pub async fn complete(
        &self,
        messages: Vec<Message>,
        temperature: f32,
        max_tokens: u32,
    ) -> Result<String> {
        let request = CompletionRequest::new(self.model())
            .with_messages(messages)
            .with_temperature(temperature)
            .with_max_tokens(max_tokens);

        debug!(prompt_chars = request.prompt_text().len(), "sending completion");

        retry_with_backoff(
            &self.config.retry,
            || self.complete_once(request.clone()),
            |e| matches!(e, Error::ModelUnavailable(_)),
        )
        .await
        .map_err(|e| e.last_error)
    }

    async fn complete_once(&self, request: CompletionRequest) -> Result<String> {
        let timeout = self.config.call_timeout;

        let response = match tokio::time::timeout(timeout, self.provider.complete(request)).await
        {
            Ok(Ok(response)) => response,
            Ok(Err(e)) => {
                warn!(error = %e, "completion failed");
                return Err(e.into());
            }
            Err(_) => {
                warn!(timeout_ms = timeout.as_millis() as u64, "completion timed out");
                return Err(Error::ModelUnavailable(format!(
                    "no response within {}ms",
                    timeout.as_millis()
                )));
            }
        };

        if response.content.trim().is_empty() {
            return Err(Error::ModelError("empty completion".to_string()));
        }

        Ok(response.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use mockall::mock;
    use wisdomarc_llm::{CompletionResponse, MockProvider, MockRule};

    mock! {
        pub Backend {}

        #[async_trait]
        impl LlmProvider for Backend {
            fn name(&self) -> &str;
            fn available_models(&self) -> Vec<String>;
            fn default_model(&self) -> &str;
            async fn complete(
                &self,
                request: CompletionRequest,
            ) -> wisdomarc_llm::Result<CompletionResponse>;
            async fn health_check(&self) -> bool;
        }
    }

    fn backend_returning(
        result: fn() -> wisdomarc_llm::Result<CompletionResponse>,
        times: usize,
    ) -> MockBackend {
        let mut backend = MockBackend::new();
        backend.expect_name().return_const("mock".to_string());
        backend
            .expect_default_model()
            .return_const("llama3".to_string());
        backend.expect_complete().times(times).returning(move |_| result());
        backend
    }

    fn text(content: &str) -> CompletionResponse {
        CompletionResponse {
            content: content.to_string(),
            usage: None,
            finish_reason: Some("stop".to_string()),
            model: "llama3".to_string(),
        }
    }

    #[tokio::test]
    async fn test_complete_returns_text() {
        let backend = backend_returning(|| Ok(text("Know thyself.")), 1);
        let gateway = ModelGateway::new(Arc::new(backend));

        let reply = gateway
            .complete(vec![Message::user("hello")], 0.8, 100)
            .await
            .unwrap();
        assert_eq!(reply, "Know thyself.");
    }

    #[tokio::test]
    async fn test_network_failure_is_unavailable() {
        let backend = backend_returning(
            || Err(wisdomarc_llm::Error::Network("connection refused".into())),
            1,
        );
        let gateway = ModelGateway::new(Arc::new(backend));

        let err = gateway
            .complete(vec![Message::user("hello")], 0.8, 100)
            .await
            .unwrap_err();
        assert!(matches!(err, Error::ModelUnavailable(_)));
    }

    #[tokio::test]
    async fn test_api_failure_is_model_error() {
        let backend = backend_returning(
            || Err(wisdomarc_llm::Error::Api("model not found".into())),
            1,
        );
        let gateway = ModelGateway::new(Arc::new(backend));

        let err = gateway
            .complete(vec![Message::user("hello")], 0.8, 100)
            .await
            .unwrap_err();
        assert!(matches!(err, Error::ModelError(_)));
    }

    #[tokio::test]
    async fn test_blank_completion_is_model_error() {
        let backend = backend_returning(|| Ok(text("   ")), 1);
        let gateway = ModelGateway::new(Arc::new(backend));

        let err = gateway
            .complete(vec![Message::user("hello")], 0.8, 100)
            .await
            .unwrap_err();
        assert!(matches!(err, Error::ModelError(_)));
    }

    #[tokio::test]
    async fn test_unavailable_is_retried() {
        let backend = backend_returning(|| Err(wisdomarc_llm::Error::Timeout(10)), 3);
        let config = GatewayConfig::new().with_retry(
            RetryConfig::new()
                .with_max_attempts(3)
                .with_initial_delay(Duration::from_millis(1)),
        );
        let gateway = ModelGateway::with_config(Arc::new(backend), config);

        let err = gateway
            .complete(vec![Message::user("hello")], 0.8, 100)
            .await
            .unwrap_err();
        assert!(matches!(err, Error::ModelUnavailable(_)));
    }

    #[tokio::test]
    async fn test_model_error_is_not_retried() {
        let backend = backend_returning(|| Err(wisdomarc_llm::Error::RateLimit), 1);
        let config = GatewayConfig::new().with_retry(RetryConfig::new().with_max_attempts(3));
        let gateway = ModelGateway::with_config(Arc::new(backend), config);

        let err = gateway
            .complete(vec![Message::user("hello")], 0.8, 100)
            .await
            .unwrap_err();
        assert!(matches!(err, Error::ModelError(_)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_slow_backend_times_out() {
        let provider = MockProvider::new()
            .with_rule(MockRule::reply("hello", "late").with_delay(Duration::from_secs(30)));
        let config = GatewayConfig::new().with_call_timeout(Duration::from_secs(5));
        let gateway = ModelGateway::with_config(Arc::new(provider), config);

        let err = gateway
            .complete(vec![Message::user("hello")], 0.8, 100)
            .await
            .unwrap_err();
        assert!(matches!(err, Error::ModelUnavailable(_)));
    }

    #[tokio::test]
    async fn test_request_carries_options() {
        let provider = MockProvider::new();
        let gateway = ModelGateway::with_config(
            Arc::new(provider.clone()),
            GatewayConfig::new().with_model("gemma3"),
        );

        gateway
            .complete(vec![Message::user("hello")], 0.3, 400)
            .await
            .unwrap();

        let requests = provider.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].model, "gemma3");
        assert_eq!(requests[0].temperature, Some(0.3));
        assert_eq!(requests[0].max_tokens, Some(400));
    }
}
