//! Error types for wisdomarc-core
//!
//! This module provides the error taxonomy of the reasoning pipeline and
//! user-friendly error formatting.

use thiserror::Error;

/// Core error type
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// Query text was empty after trimming; rejected before any model call
    #[error("invalid query: {0}")]
    InvalidQuery(String),

    /// Backend unreachable or timed out
    #[error("model unavailable: {0}")]
    ModelUnavailable(String),

    /// Backend reachable but reported a failure or returned unusable output
    #[error("model error: {0}")]
    ModelError(String),

    /// One participant's reasoning step failed
    #[error("agent {agent} failed: {message}")]
    AgentFailure {
        /// Agent key
        agent: String,
        /// Failure description
        message: String,
    },

    /// Pipeline stopped before producing a final result
    #[error("pipeline error: {0}")]
    Pipeline(String),

    /// Invalid configuration
    #[error("invalid configuration: {field}")]
    InvalidConfig {
        /// Config field name
        field: String,
        /// Detailed message
        message: String,
    },

    /// Internal error (serialization, task join, etc.)
    #[error("internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Stable snake_case identifier for transports
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Error::InvalidQuery(_) => "invalid_query",
            Error::ModelUnavailable(_) => "model_unavailable",
            Error::ModelError(_) => "model_error",
            Error::AgentFailure { .. } => "agent_failure",
            Error::Pipeline(_) => "pipeline_error",
            Error::InvalidConfig { .. } => "invalid_config",
            Error::Internal(_) => "internal_error",
        }
    }
}

impl From<wisdomarc_llm::Error> for Error {
    fn from(err: wisdomarc_llm::Error) -> Self {
        if err.is_unavailable() {
            Error::ModelUnavailable(err.to_string())
        } else {
            Error::ModelError(err.to_string())
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Internal(err.to_string())
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Trait for user-friendly error messages
///
/// Provides human-readable error messages and suggestions for fixing.
pub trait UserFriendlyError {
    /// Get a user-friendly error message
    fn user_message(&self) -> String;

    /// Get a suggestion for how to fix the error
    fn suggestion(&self) -> Option<String>;
}

impl UserFriendlyError for Error {
    fn user_message(&self) -> String {
        match self {
            Error::InvalidQuery(_) => "Query text cannot be empty.".to_string(),
            Error::ModelUnavailable(_) => "The language model could not be reached.".to_string(),
            Error::ModelError(msg) => format!("The language model reported an error: {}", msg),
            Error::AgentFailure { agent, .. } => {
                format!("The {} agent could not complete its reasoning.", agent)
            }
            Error::Pipeline(msg) => format!("Wisdom processing error: {}", msg),
            Error::InvalidConfig { field, message } => {
                format!("Configuration error in '{}': {}", field, message)
            }
            Error::Internal(msg) => format!("Internal error: {}", msg),
        }
    }

    fn suggestion(&self) -> Option<String> {
        match self {
            Error::InvalidQuery(_) => Some("Ask a question or describe a situation.".to_string()),
            Error::ModelUnavailable(_) => Some(
                "Check that Ollama is running (ollama serve) and OLLAMA_HOST points to it."
                    .to_string(),
            ),
            Error::ModelError(_) => Some(
                "Make sure the configured model is pulled: ollama pull <model>".to_string(),
            ),
            Error::InvalidConfig { field, .. } => Some(format!(
                "Fix '{}' in config/local.toml or the matching WISDOMARC_ environment variable.",
                field
            )),
            Error::AgentFailure { .. } | Error::Pipeline(_) | Error::Internal(_) => None,
        }
    }
}

/// Format an error for display in the CLI
pub fn format_error_for_cli(error: &Error) -> String {
    let mut output = error.user_message();

    if let Some(suggestion) = error.suggestion() {
        output.push_str("\n\n");
        output.push_str(&suggestion);
    }

    output
}
