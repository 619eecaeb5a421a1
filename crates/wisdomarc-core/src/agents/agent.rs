//! Agent implementation

use crate::extract::extract_json_object;
use crate::gateway::{ModelGateway, StageSettings};
use crate::pantheon::Persona;
use crate::Context;
use serde::Serialize;
use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard};
use tracing::{debug, warn};

use super::insight::{StructuredInsight, ValidationFeedback};
use super::prompts;

/// Default number of remembered exchanges per agent
pub const DEFAULT_HISTORY_LIMIT: usize = 20;

/// Sampling options and memory size for an agent
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AgentSettings {
    /// Options for reasoning steps
    pub reasoning: StageSettings,
    /// Options for peer validation
    pub validation: StageSettings,
    /// Maximum remembered exchanges
    pub history_limit: usize,
}

impl Default for AgentSettings {
    fn default() -> Self {
        Self {
            reasoning: StageSettings::new(0.8, 800),
            validation: StageSettings::new(0.6, 500),
            history_limit: DEFAULT_HISTORY_LIMIT,
        }
    }
}

/// One remembered exchange
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Exchange {
    /// The query the agent answered
    pub query: String,
    /// Its core insight
    pub core_insight: String,
}

/// A persona bound to the model gateway
#[derive(Debug)]
pub struct Agent {
    persona: &'static Persona,
    gateway: ModelGateway,
    settings: AgentSettings,
    history: Mutex<VecDeque<Exchange>>,
}

impl Agent {
    /// Create an agent with default settings
    #[must_use]
    pub fn new(persona: &'static Persona, gateway: ModelGateway) -> Self {
        Self::with_settings(persona, gateway, AgentSettings::default())
    }

    /// Create an agent with explicit settings
    #[must_use]
    pub fn with_settings(
        persona: &'static Persona,
        gateway: ModelGateway,
        settings: AgentSettings,
    ) -> Self {
        Self {
            persona,
            gateway,
            settings,
            history: Mutex::new(VecDeque::with_capacity(settings.history_limit)),
        }
    }

    /// Persona key
    #[must_use]
    pub fn key(&self) -> &'static str {
        self.persona.key
    }

    /// Persona display name
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.persona.name
    }

    /// The persona record
    #[must_use]
    pub fn persona(&self) -> &'static Persona {
        self.persona
    }

    /// Snapshot of remembered exchanges, oldest first
    #[must_use]
    pub fn history(&self) -> Vec<Exchange> {
        self.lock_history().iter().cloned().collect()
    }

    /// Produce one structured reasoning step. Never fails.
    pub async fn generate_reasoning_step(&self, query: &str, context: &Context) -> StructuredInsight {
        let messages = prompts::reasoning_messages(self.persona, query, context);

        let insight = match self.gateway.complete_with(messages, self.settings.reasoning).await {
            Ok(raw) => match extract_json_object(&raw)
                .as_ref()
                .and_then(|v| v.as_object())
                .and_then(|obj| StructuredInsight::from_model(self.persona, obj))
            {
                Some(insight) => insight,
                None => {
                    warn!(agent = self.key(), "unstructured reasoning output, using fallback");
                    StructuredInsight::fallback(self.persona, &raw)
                }
            },
            Err(e) => {
                warn!(agent = self.key(), error = %e, "reasoning call failed, using fallback");
                StructuredInsight::fallback(self.persona, "")
            }
        };

        self.remember(query, &insight.core_insight);
        debug!(agent = self.key(), reasoning_type = %insight.reasoning_type, "reasoning step done");
        insight
    }

    /// Critique a peer's insight. Never fails.
    pub async fn validate_peer_reasoning(&self, peer: &StructuredInsight) -> ValidationFeedback {
        let messages = prompts::validation_messages(self.persona, peer);

        match self.gateway.complete_with(messages, self.settings.validation).await {
            Ok(raw) => extract_json_object(&raw)
                .as_ref()
                .and_then(|v| v.as_object())
                .and_then(|obj| ValidationFeedback::from_model(self.persona, obj))
                .unwrap_or_else(|| {
                    warn!(agent = self.key(), peer = %peer.agent, "unstructured validation output, using fallback");
                    ValidationFeedback::fallback(self.persona)
                }),
            Err(e) => {
                warn!(agent = self.key(), peer = %peer.agent, error = %e, "validation call failed, using fallback");
                ValidationFeedback::fallback(self.persona)
            }
        }
    }

    fn remember(&self, query: &str, core_insight: &str) {
        let limit = self.settings.history_limit;
        if limit == 0 {
            return;
        }

        let mut history = self.lock_history();
        while history.len() >= limit {
            history.pop_front();
        }
        history.push_back(Exchange {
            query: query.to_string(),
            core_insight: core_insight.to_string(),
        });
    }

    fn lock_history(&self) -> MutexGuard<'_, VecDeque<Exchange>> {
        self.history.lock().unwrap_or_else(|e| e.into_inner())
    }
}
