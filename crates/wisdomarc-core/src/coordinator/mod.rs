//! Wisdom Coordinator - the full pipeline
//!
//! Sequences analysis, selection, reasoning and synthesis for one query.
//! [`WisdomCoordinator::stream_wisdom`] exposes the pipeline as a lazy,
//! single-pass stream of [`ProgressEvent`]s:
//!
//! ```text
//! cognitive_analysis   processing -> complete
//! agent_selection      processing -> complete
//! reasoning_initiation processing
//! reasoning_step       complete (one per chain entry)
//! synthesis            processing -> complete
//! integration_complete complete (final result)
//! ```
//!
//! A failure anywhere ends the stream with a single `error` event.
//! [`WisdomCoordinator::ask_wisdom`] drains the same sequence and returns the
//! final result.

mod config;
mod events;
mod result;
mod pipeline;

pub use config::CoordinatorConfig;
pub use events::{ProgressEvent, StepStatus, WisdomStep};
pub use result::{ErrorPayload, WisdomResult, REASONING_QUALITY};

pub use crate::gateway::StageSettings;

use crate::analysis::CognitiveLoadAnalyzer;
use crate::error::{Error, Result};
use crate::gateway::ModelGateway;
use crate::orchestrator::Orchestrator;
use crate::selection::AgentSelector;
use crate::synthesis::Synthesizer;
use crate::Context;
use futures::stream::{self, BoxStream, StreamExt};
use std::sync::Arc;
use pipeline::Pipeline;
use tracing::info;

pub(crate) struct Inner {
    gateway: ModelGateway,
    analyzer: CognitiveLoadAnalyzer,
    selector: AgentSelector,
    orchestrator: Orchestrator,
    synthesizer: Synthesizer,
    config: CoordinatorConfig,
}

/// Entry point for wisdom requests. Cheap to clone.
#[derive(Clone)]
pub struct WisdomCoordinator {
    inner: Arc<Inner>,
}

impl std::fmt::Debug for WisdomCoordinator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WisdomCoordinator")
            .field("gateway", &self.inner.gateway)
            .field("config", &self.inner.config)
            .finish()
    }
}

impl WisdomCoordinator {
    /// Create a coordinator with default settings
    #[must_use]
    pub fn new(gateway: ModelGateway) -> Self {
        Self::with_config(gateway, CoordinatorConfig::default())
    }

    /// Create a coordinator with explicit settings
    #[must_use]
    pub fn with_config(gateway: ModelGateway, config: CoordinatorConfig) -> Self {
        let inner = Inner {
            analyzer: CognitiveLoadAnalyzer::with_settings(gateway.clone(), config.analyzer),
            selector: AgentSelector::with_settings(gateway.clone(), config.selector),
            orchestrator: Orchestrator::with_settings(gateway.clone(), config.agent_settings()),
            synthesizer: Synthesizer::with_settings(gateway.clone(), config.synthesis),
            gateway,
            config,
        };
        Self {
            inner: Arc::new(inner),
        }
    }

    /// The model gateway
    #[must_use]
    pub fn gateway(&self) -> &ModelGateway {
        &self.inner.gateway
    }

    /// The orchestrator and its agents
    #[must_use]
    pub fn orchestrator(&self) -> &Orchestrator {
        &self.inner.orchestrator
    }

    /// Coordinator settings
    #[must_use]
    pub fn config(&self) -> &CoordinatorConfig {
        &self.inner.config
    }

    /// Progress stream for one query.
    ///
    /// Fails with [`Error::InvalidQuery`] before any model call when the
    /// trimmed query is empty. The returned stream does no work until polled.
    pub fn stream_wisdom(
        &self,
        query: &str,
        context: Context,
    ) -> Result<BoxStream<'static, ProgressEvent>> {
        let query = validate_query(query)?;
        info!(query_chars = query.chars().count(), "wisdom stream requested");

        let pipeline = Pipeline::new(self.inner.clone(), query, context);
        let events = stream::unfold(pipeline, |mut pipeline| async move {
            pipeline.next_event().await.map(|event| (event, pipeline))
        });
        Ok(events.fuse().boxed())
    }

    /// Run the whole pipeline and return the final result.
    pub async fn ask_wisdom(&self, query: &str, context: Context) -> Result<WisdomResult> {
        let query = validate_query(query)?;
        let mut pipeline = Pipeline::new(self.inner.clone(), query, context);

        while let Some(event) = pipeline.next_event().await {
            if event.step == WisdomStep::Error {
                let message = event
                    .message
                    .unwrap_or_else(|| "wisdom processing failed".to_string());
                return Err(Error::Pipeline(message));
            }
        }

        pipeline
            .take_result()
            .ok_or_else(|| Error::Pipeline("integration_complete was never reached".to_string()))
    }
}

fn validate_query(query: &str) -> Result<String> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        return Err(Error::InvalidQuery("query text cannot be empty".to_string()));
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests;
