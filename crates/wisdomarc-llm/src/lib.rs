//! WisdomArc LLM - Chat Completion Provider Abstraction
//!
//! This crate provides the model backends used by the reasoning council:
//! - Provider: the `LlmProvider` trait every backend implements
//! - Ollama: local Ollama chat provider (the default backend)
//! - Mock: scriptable, recording provider for tests and offline runs

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod completion;
pub mod error;
pub mod message;
pub mod mock;
pub mod provider;
pub mod providers;

pub use completion::{CompletionRequest, CompletionResponse, TokenUsage};
pub use error::{Error, Result};
pub use message::{Message, MessageRole};
pub use mock::{MockProvider, MockRule};
pub use provider::LlmProvider;

// Re-export provider types
pub use providers::ollama::{OllamaConfig, OllamaProvider};
