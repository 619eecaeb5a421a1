//! Coordinator settings

use crate::agents::{AgentSettings, DEFAULT_HISTORY_LIMIT};
use crate::gateway::StageSettings;
use serde::{Deserialize, Serialize};

/// Per-stage sampling options and agent memory size
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CoordinatorConfig {
    /// Agent reasoning steps
    pub agent: StageSettings,
    /// Peer validation
    pub validation: StageSettings,
    /// Cognitive load analysis
    pub analyzer: StageSettings,
    /// Agent selection
    pub selector: StageSettings,
    /// Synthesis
    pub synthesis: StageSettings,
    /// Remembered exchanges per agent
    pub history_limit: usize,
}

impl Default for CoordinatorConfig {
    fn default() -> Self {
        Self {
            agent: StageSettings::new(0.8, 800),
            validation: StageSettings::new(0.6, 500),
            analyzer: StageSettings::new(0.3, 400),
            selector: StageSettings::new(0.35, 400),
            synthesis: StageSettings::new(0.8, 1500),
            history_limit: DEFAULT_HISTORY_LIMIT,
        }
    }
}

impl CoordinatorConfig {
    /// Settings handed to every agent
    #[must_use]
    pub fn agent_settings(&self) -> AgentSettings {
        AgentSettings {
            reasoning: self.agent,
            validation: self.validation,
            history_limit: self.history_limit,
        }
    }
}
