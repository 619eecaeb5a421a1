//! Final result and error payloads

use crate::agents::StructuredInsight;
use crate::analysis::CognitiveLoadAnalysis;
use crate::error::Error;
use crate::selection::{AgentSelection, CollaborationPattern};
use crate::synthesis::Synthesis;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Label recorded on every result
pub const REASONING_QUALITY: &str = "advanced_llm_powered";

/// Everything produced for one query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WisdomResult {
    /// Request identifier
    pub request_id: Uuid,
    /// Query as processed (trimmed)
    pub query: String,
    /// Cognitive load analysis
    pub cognitive_analysis: CognitiveLoadAnalysis,
    /// Agent selection
    pub agent_selection: AgentSelection,
    /// Reasoning chain in pattern order
    pub reasoning_chain: Vec<StructuredInsight>,
    /// Synthesis
    pub synthesis: Synthesis,
    /// Persona keys in chain order
    pub philosophers_consulted: Vec<String>,
    /// Pattern that produced the chain
    pub collaboration_pattern: CollaborationPattern,
    /// Wall-clock processing time
    pub processing_time_ms: u64,
    /// Completion time
    pub timestamp: DateTime<Utc>,
    /// Always [`REASONING_QUALITY`]
    pub reasoning_quality: String,
}

/// Structured error body for transports
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorPayload {
    /// Stable error code
    pub error: String,
    /// Human-readable message
    pub message: String,
    /// When the error was reported
    pub timestamp: DateTime<Utc>,
}

impl From<&Error> for ErrorPayload {
    fn from(err: &Error) -> Self {
        Self {
            error: err.code().to_string(),
            message: err.to_string(),
            timestamp: Utc::now(),
        }
    }
}
