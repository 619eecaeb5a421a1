//! WisdomArc Core - Reasoning Council Orchestration
//!
//! This crate turns one user query into a synthesized answer drawn from
//! several philosophical personas:
//! - Gateway: timeout-bounded access to a chat-completion backend
//! - Pantheon: the four fixed personas and name normalization
//! - Agents: one persona reasoning step, peer validation, bounded memory
//! - Analysis: cognitive load scoring of the query
//! - Selection: which agents participate and under which pattern
//! - Orchestrator: parallel/sequential/hierarchical/dialectical execution
//! - Synthesis: merging the reasoning chain into one result
//! - Coordinator: the full pipeline as a lazy stream of progress events
//!
//! Every model-backed stage degrades to a deterministic fallback, so a
//! missing or misbehaving backend never aborts a request.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod agents;
pub mod analysis;
pub mod coordinator;
pub mod error;
pub mod extract;
pub mod gateway;
pub mod orchestrator;
pub mod pantheon;
pub mod selection;
pub mod synthesis;
pub mod utils;

/// Key/value context handed to every stage and agent call.
pub type Context = serde_json::Map<String, serde_json::Value>;

pub use agents::{Agent, AgentSettings, ReasoningType, StructuredInsight, ValidationFeedback};
pub use analysis::{CognitiveLoadAnalysis, CognitiveLoadAnalyzer, Pacing, RecommendedApproach};
pub use coordinator::{
    CoordinatorConfig, ErrorPayload, ProgressEvent, StepStatus, WisdomCoordinator, WisdomResult,
    WisdomStep,
};
pub use error::{format_error_for_cli, Error, Result, UserFriendlyError};
pub use gateway::{GatewayConfig, ModelGateway, StageSettings};
pub use orchestrator::{Orchestrator, ReasoningChain};
pub use pantheon::{Pantheon, Persona};
pub use selection::{
    keyword_selection, AgentSelection, AgentSelector, CollaborationPattern, QueryAnalysis,
    SelectionSource,
};
pub use synthesis::{Synthesis, SynthesisSource, Synthesizer};
pub use utils::{retry_with_backoff, RetryConfig, RetryError};
