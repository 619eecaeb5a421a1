//! Provider trait
//!
//! Every chat-completion backend implements [`LlmProvider`]. Callers hold it
//! as `Arc<dyn LlmProvider>` and never depend on a concrete backend.

use crate::completion::{CompletionRequest, CompletionResponse};
use crate::error::Result;

/// Trait for LLM providers
#[async_trait::async_trait]
pub trait LlmProvider: Send + Sync {
    /// Get the provider name
    fn name(&self) -> &str;

    /// Get available models
    fn available_models(&self) -> Vec<String>;

    /// Get the default model
    fn default_model(&self) -> &str;

    /// Complete a conversation (text only)
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse>;

    /// Probe whether the backend is reachable.
    ///
    /// Providers without a cheap probe report `true`.
    async fn health_check(&self) -> bool {
        true
    }
}
