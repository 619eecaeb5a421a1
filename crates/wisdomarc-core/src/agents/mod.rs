//! Agents - one persona reasoning over the model gateway
//!
//! An [`Agent`] is a persona record plus the shared reasoning algorithm.
//! Both of its operations are total: model or parse failures produce
//! deterministic fallback content instead of errors.

mod agent;
mod insight;
mod prompts;

pub use agent::{Agent, AgentSettings, Exchange, DEFAULT_HISTORY_LIMIT};
pub use insight::{StructuredInsight, ValidationFeedback};

pub use crate::pantheon::ReasoningType;
