//! Pipeline state machine behind the progress stream
//!
//! Each call to [`Pipeline::next_event`] performs at most one stage and
//! returns exactly one event, so nothing runs until the consumer pulls.

use super::events::{ProgressEvent, WisdomStep};
use super::result::{WisdomResult, REASONING_QUALITY};
use super::Inner;
use crate::agents::StructuredInsight;
use crate::analysis::CognitiveLoadAnalysis;
use crate::error::{Error, Result};
use crate::selection::AgentSelection;
use crate::synthesis::Synthesis;
use crate::Context;
use chrono::Utc;
use futures::FutureExt;
use serde_json::json;
use std::collections::VecDeque;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use std::time::Instant;
use tracing::{error, info};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    AnalysisStart,
    AnalysisRun,
    SelectionStart,
    SelectionRun,
    ReasoningStart,
    ReasoningRun,
    SynthesisStart,
    SynthesisRun,
    Integration,
    Done,
}

pub(crate) struct Pipeline {
    inner: Arc<Inner>,
    request_id: Uuid,
    query: String,
    context: Context,
    started: Instant,
    phase: Phase,
    pending: VecDeque<ProgressEvent>,
    analysis: Option<CognitiveLoadAnalysis>,
    selection: Option<AgentSelection>,
    chain: Option<Vec<StructuredInsight>>,
    synthesis: Option<Synthesis>,
    result: Option<WisdomResult>,
}

impl Pipeline {
    pub(crate) fn new(inner: Arc<Inner>, query: String, context: Context) -> Self {
        Self {
            inner,
            request_id: Uuid::new_v4(),
            query,
            context,
            started: Instant::now(),
            phase: Phase::AnalysisStart,
            pending: VecDeque::new(),
            analysis: None,
            selection: None,
            chain: None,
            synthesis: None,
            result: None,
        }
    }

    /// Final result, available once `integration_complete` was emitted
    pub(crate) fn take_result(&mut self) -> Option<WisdomResult> {
        self.result.take()
    }

    /// Next event, or `None` once the sequence has ended.
    ///
    /// Failures and panics inside a stage end the sequence with one
    /// `error` event.
    pub(crate) async fn next_event(&mut self) -> Option<ProgressEvent> {
        if let Some(event) = self.pending.pop_front() {
            return Some(event);
        }
        if self.phase == Phase::Done {
            return None;
        }

        let outcome = AssertUnwindSafe(self.advance()).catch_unwind().await;
        let failure = match outcome {
            Ok(Ok(event)) => return Some(event),
            Ok(Err(e)) => e.to_string(),
            Err(panic) => panic_message(panic.as_ref()),
        };

        error!(request_id = %self.request_id, error = %failure, "wisdom pipeline failed");
        self.phase = Phase::Done;
        self.pending.clear();
        self.result = None;
        Some(ProgressEvent::error(format!("Wisdom processing error: {failure}")))
    }

    async fn advance(&mut self) -> Result<ProgressEvent> {
        match self.phase {
            Phase::AnalysisStart => {
                self.phase = Phase::AnalysisRun;
                Ok(ProgressEvent::processing(
                    WisdomStep::CognitiveAnalysis,
                    "Analyzing cognitive load and emotional context",
                ))
            }
            Phase::AnalysisRun => {
                let analysis = self.inner.analyzer.analyze(&self.query, &self.context).await;
                let data = serde_json::to_value(&analysis)?;
                self.analysis = Some(analysis);
                self.phase = Phase::SelectionStart;
                Ok(ProgressEvent::complete(WisdomStep::CognitiveAnalysis, data))
            }
            Phase::SelectionStart => {
                self.phase = Phase::SelectionRun;
                Ok(ProgressEvent::processing(
                    WisdomStep::AgentSelection,
                    "Selecting philosophical perspectives",
                ))
            }
            Phase::SelectionRun => {
                let selection = self
                    .inner
                    .selector
                    .select(&self.query, &self.context, self.analysis.as_ref())
                    .await;
                let data = serde_json::to_value(&selection)?;
                self.selection = Some(selection);
                self.phase = Phase::ReasoningStart;
                Ok(ProgressEvent::complete(WisdomStep::AgentSelection, data))
            }
            Phase::ReasoningStart => {
                let selection = self.selection()?;
                let message = format!(
                    "Initiating {} reasoning with {}",
                    selection.collaboration_pattern,
                    selection.selected_agents.join(", ")
                );
                self.phase = Phase::ReasoningRun;
                Ok(ProgressEvent::processing(WisdomStep::ReasoningInitiation, message))
            }
            Phase::ReasoningRun => {
                let chain = self
                    .inner
                    .orchestrator
                    .execute(&self.query, &self.context, self.selection()?)
                    .await;

                let total = chain.len();
                for (index, insight) in chain.iter().enumerate() {
                    self.pending.push_back(ProgressEvent::complete(
                        WisdomStep::ReasoningStep,
                        json!({
                            "step_number": index + 1,
                            "total_steps": total,
                            "insight": serde_json::to_value(insight)?,
                        }),
                    ));
                }
                self.chain = Some(chain);

                match self.pending.pop_front() {
                    Some(event) => {
                        self.phase = Phase::SynthesisStart;
                        Ok(event)
                    }
                    None => {
                        self.phase = Phase::SynthesisRun;
                        Ok(synthesis_started())
                    }
                }
            }
            Phase::SynthesisStart => {
                self.phase = Phase::SynthesisRun;
                Ok(synthesis_started())
            }
            Phase::SynthesisRun => {
                let synthesis = self
                    .inner
                    .synthesizer
                    .synthesize(&self.query, self.chain()?, self.selection()?, self.analysis()?)
                    .await;
                let data = serde_json::to_value(&synthesis)?;
                self.synthesis = Some(synthesis);
                self.phase = Phase::Integration;
                Ok(ProgressEvent::complete(WisdomStep::Synthesis, data))
            }
            Phase::Integration => {
                let result = self.build_result()?;
                let data = serde_json::to_value(&result)?;
                info!(
                    request_id = %result.request_id,
                    philosophers = ?result.philosophers_consulted,
                    duration_ms = result.processing_time_ms,
                    "wisdom request complete"
                );
                self.result = Some(result);
                self.phase = Phase::Done;
                Ok(ProgressEvent::complete(WisdomStep::IntegrationComplete, data))
            }
            Phase::Done => Err(Error::Pipeline("pipeline already finished".to_string())),
        }
    }

    fn build_result(&mut self) -> Result<WisdomResult> {
        let missing = |what: &str| Error::Pipeline(format!("{what} missing at integration"));

        let cognitive_analysis = self.analysis.take().ok_or_else(|| missing("analysis"))?;
        let agent_selection = self.selection.take().ok_or_else(|| missing("selection"))?;
        let reasoning_chain = self.chain.take().ok_or_else(|| missing("reasoning chain"))?;
        let synthesis = self.synthesis.take().ok_or_else(|| missing("synthesis"))?;

        Ok(WisdomResult {
            request_id: self.request_id,
            query: self.query.clone(),
            philosophers_consulted: reasoning_chain.iter().map(|i| i.agent.clone()).collect(),
            collaboration_pattern: agent_selection.collaboration_pattern,
            cognitive_analysis,
            agent_selection,
            reasoning_chain,
            synthesis,
            processing_time_ms: self.started.elapsed().as_millis() as u64,
            timestamp: Utc::now(),
            reasoning_quality: REASONING_QUALITY.to_string(),
        })
    }

    fn analysis(&self) -> Result<&CognitiveLoadAnalysis> {
        self.analysis
            .as_ref()
            .ok_or_else(|| Error::Pipeline("cognitive analysis not available".to_string()))
    }

    fn selection(&self) -> Result<&AgentSelection> {
        self.selection
            .as_ref()
            .ok_or_else(|| Error::Pipeline("agent selection not available".to_string()))
    }

    fn chain(&self) -> Result<&[StructuredInsight]> {
        self.chain
            .as_deref()
            .ok_or_else(|| Error::Pipeline("reasoning chain not available".to_string()))
    }
}

fn synthesis_started() -> ProgressEvent {
    ProgressEvent::processing(
        WisdomStep::Synthesis,
        "Synthesizing philosophical perspectives",
    )
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unexpected panic".to_string()
    }
}
