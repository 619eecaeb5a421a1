use super::config::OllamaConfig;
use super::wire::{ChatBody, ChatReply, Failure, Tags};
use crate::completion::{CompletionRequest, CompletionResponse};
use crate::error::{Error, Result};
use crate::provider::LlmProvider;
use reqwest::{Client, StatusCode};
use tracing::{debug, instrument, warn};

/// Upstream error text beyond this is cut before it reaches callers
const MAX_DETAIL_CHARS: usize = 300;

/// Chat completions served by a local Ollama daemon
pub struct OllamaProvider {
    http: Client,
    config: OllamaConfig,
}

impl OllamaProvider {
    /// Build the HTTP client for `config`
    pub fn new(config: OllamaConfig) -> Result<Self> {
        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| Error::NotConfigured(e.to_string()))?;
        Ok(Self { http, config })
    }

    /// Settings this provider runs with
    #[must_use]
    pub fn config(&self) -> &OllamaConfig {
        &self.config
    }

    /// Model tags the daemon has pulled
    pub async fn list_models(&self) -> Result<Vec<String>> {
        let response = self
            .http
            .get(self.config.endpoint("tags"))
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::Api(format!("tag listing returned {status}")));
        }
        let tags: Tags = response
            .json()
            .await
            .map_err(|e| Error::InvalidResponse(e.to_string()))?;
        Ok(tags.models.into_iter().map(|t| t.name).collect())
    }

    fn transport_error(&self, err: reqwest::Error) -> Error {
        if err.is_timeout() {
            Error::Timeout(self.config.timeout.as_millis() as u64)
        } else if err.is_connect() {
            Error::Network(format!("no Ollama daemon at {}", self.config.base_url))
        } else {
            Error::Network(err.to_string())
        }
    }
}

/// Turn a non-2xx chat reply into an error, keeping only the daemon's message
pub(super) fn rejection(status: StatusCode, body: &str) -> Error {
    if status == StatusCode::TOO_MANY_REQUESTS {
        return Error::RateLimit;
    }
    let detail = serde_json::from_str::<Failure>(body)
        .map(|f| f.error)
        .unwrap_or_else(|_| status.to_string());
    Error::Api(clip(&detail))
}

fn clip(text: &str) -> String {
    if text.chars().count() <= MAX_DETAIL_CHARS {
        return text.to_string();
    }
    let head: String = text.chars().take(MAX_DETAIL_CHARS).collect();
    format!("{head}...")
}

#[async_trait::async_trait]
impl LlmProvider for OllamaProvider {
    fn name(&self) -> &str {
        "ollama"
    }

    fn available_models(&self) -> Vec<String> {
        vec![self.config.default_model.clone()]
    }

    fn default_model(&self) -> &str {
        &self.config.default_model
    }

    #[instrument(skip_all, fields(model))]
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse> {
        let model = if request.model.is_empty() {
            self.config.default_model.as_str()
        } else {
            request.model.as_str()
        };
        tracing::Span::current().record("model", model);

        let body = ChatBody::new(model, &request);
        debug!(messages = body.messages.len(), "POST /api/chat");

        let response = self
            .http
            .post(self.config.endpoint("chat"))
            .json(&body)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;
        let status = response.status();
        let text = response.text().await.map_err(|e| self.transport_error(e))?;
        if !status.is_success() {
            return Err(rejection(status, &text));
        }

        let reply: ChatReply =
            serde_json::from_str(&text).map_err(|e| Error::InvalidResponse(e.to_string()))?;
        let usage = reply.usage();
        Ok(CompletionResponse {
            content: reply.message.content,
            usage,
            finish_reason: reply.done_reason,
            model: reply.model,
        })
    }

    async fn health_check(&self) -> bool {
        match self.list_models().await {
            Ok(models) => {
                let wanted = &self.config.default_model;
                if !models.iter().any(|m| m == wanted || m.starts_with(&format!("{wanted}:"))) {
                    warn!(model = %wanted, "Ollama is up but the model is not pulled");
                }
                true
            }
            Err(e) => {
                debug!(error = %e, "Ollama health probe failed");
                false
            }
        }
    }
}
