//! The four collaboration patterns

use super::batch::{reasoning_batch, validation_batch};
use super::context;
use super::ReasoningChain;
use crate::agents::Agent;
use crate::Context;
use std::sync::Arc;
use tracing::debug;

pub(crate) async fn parallel(
    agents: &[Arc<Agent>],
    query: Arc<str>,
    base: &Context,
) -> ReasoningChain {
    let keys: Vec<&str> = agents.iter().map(|a| a.key()).collect();
    let jobs = agents
        .iter()
        .map(|agent| (agent.clone(), context::with_peers(base, agent.key(), &keys)))
        .collect();

    reasoning_batch(jobs, query).await
}

pub(crate) async fn sequential(
    agents: &[Arc<Agent>],
    query: Arc<str>,
    base: &Context,
) -> ReasoningChain {
    let total = agents.len();
    let mut chain: ReasoningChain = Vec::with_capacity(total);

    for (index, agent) in agents.iter().enumerate() {
        let ctx = context::sequential(base, &chain, index + 1, total);
        debug!(agent = agent.key(), position = index + 1, total, "sequential step");

        // Spawned so a panicking step still yields an error marker.
        let mut step = reasoning_batch(vec![(agent.clone(), ctx)], query.clone()).await;
        chain.append(&mut step);
    }
    chain
}

pub(crate) async fn hierarchical(
    agents: &[Arc<Agent>],
    query: Arc<str>,
    base: &Context,
) -> ReasoningChain {
    let Some((primary, secondaries)) = agents.split_first() else {
        return Vec::new();
    };

    let mut chain =
        reasoning_batch(vec![(primary.clone(), context::primary(base))], query.clone()).await;
    let Some(primary_insight) = chain.first().cloned() else {
        return chain;
    };

    let jobs = secondaries
        .iter()
        .map(|agent| (agent.clone(), context::secondary(base, &primary_insight)))
        .collect();

    chain.extend(reasoning_batch(jobs, query).await);
    chain
}

pub(crate) async fn dialectical(
    agents: &[Arc<Agent>],
    query: Arc<str>,
    base: &Context,
) -> ReasoningChain {
    let initial = parallel(agents, query, base).await;
    if agents.len() < 2 {
        debug!("dialectical pattern needs two agents, keeping parallel result");
        return initial;
    }

    let jobs = agents
        .iter()
        .enumerate()
        .map(|(index, agent)| {
            let peer = if index == 0 { 1 } else { 0 };
            (agent.clone(), initial[peer].clone())
        })
        .collect();
    let feedback = validation_batch(jobs).await;

    initial
        .into_iter()
        .zip(feedback)
        .map(|(mut insight, validation)| {
            insight.dialectical_synthesis = Some(validation.synthesis_suggestion.clone());
            insight.peer_validation = Some(validation);
            insight
        })
        .collect()
}
