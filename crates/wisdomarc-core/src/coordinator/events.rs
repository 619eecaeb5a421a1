//! Progress events

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Pipeline step an event reports on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WisdomStep {
    /// Cognitive load analysis
    CognitiveAnalysis,
    /// Agent selection
    AgentSelection,
    /// Start of the reasoning chain
    ReasoningInitiation,
    /// One chain entry
    ReasoningStep,
    /// Synthesis
    Synthesis,
    /// Final result
    IntegrationComplete,
    /// Terminal failure
    Error,
}

impl WisdomStep {
    /// Wire label
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CognitiveAnalysis => "cognitive_analysis",
            Self::AgentSelection => "agent_selection",
            Self::ReasoningInitiation => "reasoning_initiation",
            Self::ReasoningStep => "reasoning_step",
            Self::Synthesis => "synthesis",
            Self::IntegrationComplete => "integration_complete",
            Self::Error => "error",
        }
    }
}

impl std::fmt::Display for WisdomStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Status of a step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepStatus {
    /// Work started
    Processing,
    /// Work finished
    Complete,
    /// Pipeline failed
    Error,
}

/// One entry of the progress sequence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressEvent {
    /// Step reported on
    pub step: WisdomStep,
    /// Its status
    pub status: StepStatus,
    /// Step output
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    /// Human-readable note
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// When the event was produced
    pub timestamp: DateTime<Utc>,
}

impl ProgressEvent {
    /// A step started
    #[must_use]
    pub fn processing(step: WisdomStep, message: impl Into<String>) -> Self {
        Self {
            step,
            status: StepStatus::Processing,
            data: None,
            message: Some(message.into()),
            timestamp: Utc::now(),
        }
    }

    /// A step finished with output
    #[must_use]
    pub fn complete(step: WisdomStep, data: Value) -> Self {
        Self {
            step,
            status: StepStatus::Complete,
            data: Some(data),
            message: None,
            timestamp: Utc::now(),
        }
    }

    /// Terminal failure
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            step: WisdomStep::Error,
            status: StepStatus::Error,
            data: None,
            message: Some(message.into()),
            timestamp: Utc::now(),
        }
    }

    /// Whether no event follows this one
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(
            self.step,
            WisdomStep::Error | WisdomStep::IntegrationComplete
        )
    }
}
