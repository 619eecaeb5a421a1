//! Orchestrator - collaboration patterns over the selected agents
//!
//! Turns an [`AgentSelection`](crate::selection::AgentSelection) into a
//! [`ReasoningChain`]:
//! - parallel: every agent at once, chain in selection order
//! - sequential: one at a time, later agents see earlier insights
//! - hierarchical: primary first, then the rest concurrently with its insight
//! - dialectical: parallel round, then concurrent peer validation
//!
//! Each agent call runs in its own task. A task that fails contributes an
//! error-marker insight and never cancels its siblings.

mod batch;
mod context;
mod patterns;

use crate::agents::{Agent, AgentSettings, StructuredInsight};
use crate::gateway::ModelGateway;
use crate::pantheon::Pantheon;
use crate::selection::{AgentSelection, CollaborationPattern};
use crate::Context;
use std::sync::Arc;
use std::time::Instant;
use tracing::{info, warn};

/// Ordered per-agent insights for one query
pub type ReasoningChain = Vec<StructuredInsight>;

/// Runs collaboration patterns over the persona agents
#[derive(Debug, Clone)]
pub struct Orchestrator {
    agents: Vec<Arc<Agent>>,
}

impl Orchestrator {
    /// One agent per built-in persona, default settings
    #[must_use]
    pub fn new(gateway: ModelGateway) -> Self {
        Self::with_settings(gateway, AgentSettings::default())
    }

    /// One agent per built-in persona
    #[must_use]
    pub fn with_settings(gateway: ModelGateway, settings: AgentSettings) -> Self {
        let agents = Pantheon::builtin()
            .iter()
            .map(|persona| Arc::new(Agent::with_settings(persona, gateway.clone(), settings)))
            .collect();
        Self { agents }
    }

    /// Agent by persona key
    #[must_use]
    pub fn agent(&self, key: &str) -> Option<&Arc<Agent>> {
        self.agents.iter().find(|a| a.key() == key)
    }

    /// Keys of every available agent
    #[must_use]
    pub fn available_agents(&self) -> Vec<&'static str> {
        self.agents.iter().map(|a| a.key()).collect()
    }

    /// Run the selection's collaboration pattern and return the chain.
    pub async fn execute(
        &self,
        query: &str,
        context: &Context,
        selection: &AgentSelection,
    ) -> ReasoningChain {
        let start = Instant::now();
        let agents = self.resolve(selection);
        let base = context::base_context(context, selection);
        let query: Arc<str> = Arc::from(query);

        info!(
            agents = ?selection.selected_agents,
            pattern = %selection.collaboration_pattern,
            "starting reasoning"
        );

        let chain = match selection.collaboration_pattern {
            CollaborationPattern::Parallel => patterns::parallel(&agents, query, &base).await,
            CollaborationPattern::Sequential => patterns::sequential(&agents, query, &base).await,
            CollaborationPattern::Hierarchical => {
                patterns::hierarchical(&agents, query, &base).await
            }
            CollaborationPattern::Dialectical => patterns::dialectical(&agents, query, &base).await,
        };

        info!(
            pattern = %selection.collaboration_pattern,
            chain_len = chain.len(),
            failures = chain.iter().filter(|i| i.is_error).count(),
            duration_ms = start.elapsed().as_millis() as u64,
            "reasoning complete"
        );
        chain
    }

    fn resolve(&self, selection: &AgentSelection) -> Vec<Arc<Agent>> {
        selection
            .selected_agents
            .iter()
            .filter_map(|key| {
                let agent = self.agent(key).cloned();
                if agent.is_none() {
                    warn!(agent = %key, "selected agent is not registered, skipping");
                }
                agent
            })
            .collect()
    }
}
