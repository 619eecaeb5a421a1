//! Concurrent agent batches with per-task failure isolation

use crate::agents::{Agent, StructuredInsight, ValidationFeedback};
use crate::pantheon::Persona;
use crate::Context;
use std::sync::Arc;
use tokio::task::{AbortHandle, JoinHandle};
use tracing::error;

/// Spawn one reasoning step per `(agent, context)` and join them in input order.
pub(crate) async fn reasoning_batch(
    jobs: Vec<(Arc<Agent>, Context)>,
    query: Arc<str>,
) -> Vec<StructuredInsight> {
    let handles = jobs
        .into_iter()
        .map(|(agent, context)| {
            let persona = agent.persona();
            let query = query.clone();
            let handle =
                tokio::spawn(async move { agent.generate_reasoning_step(&query, &context).await });
            (persona, handle)
        })
        .collect();

    join_ordered(handles, StructuredInsight::error_marker).await
}

/// Spawn one peer validation per `(validator, peer insight)` and join in order.
pub(crate) async fn validation_batch(
    jobs: Vec<(Arc<Agent>, StructuredInsight)>,
) -> Vec<ValidationFeedback> {
    let handles = jobs
        .into_iter()
        .map(|(agent, peer)| {
            let persona = agent.persona();
            let handle = tokio::spawn(async move { agent.validate_peer_reasoning(&peer).await });
            (persona, handle)
        })
        .collect();

    join_ordered(handles, ValidationFeedback::fallback).await
}

/// Aborts the batch's tasks when the awaiting future is dropped early.
struct AbortOnDrop(Vec<AbortHandle>);

impl Drop for AbortOnDrop {
    fn drop(&mut self) {
        for handle in &self.0 {
            handle.abort();
        }
    }
}

/// Await every handle in order; a failed task yields `on_failure(persona)`.
///
/// Dropping the returned future cancels every task still running.
pub(crate) async fn join_ordered<T, F>(
    handles: Vec<(&'static Persona, JoinHandle<T>)>,
    on_failure: F,
) -> Vec<T>
where
    F: Fn(&'static Persona) -> T,
{
    let _guard = AbortOnDrop(handles.iter().map(|(_, h)| h.abort_handle()).collect());
    let mut results = Vec::with_capacity(handles.len());
    for (persona, handle) in handles {
        match handle.await {
            Ok(value) => results.push(value),
            Err(e) => {
                let failure = crate::error::Error::AgentFailure {
                    agent: persona.key.to_string(),
                    message: e.to_string(),
                };
                error!(error = %failure, "agent task failed");
                results.push(on_failure(persona));
            }
        }
    }
    results
}
