//! Per-agent context construction
//!
//! Every agent receives its own copy of the request context.

use crate::agents::StructuredInsight;
use crate::selection::AgentSelection;
use crate::Context;
use serde_json::{json, Value};

/// Request context plus the selection metadata every agent sees
pub(crate) fn base_context(context: &Context, selection: &AgentSelection) -> Context {
    let mut base = context.clone();
    base.insert(
        "collaboration_pattern".into(),
        json!(selection.collaboration_pattern),
    );
    base.insert(
        "selection_rationale".into(),
        json!(selection.selection_rationale),
    );
    base.insert("reasoning_depth".into(), json!(selection.reasoning_depth));
    base
}

pub(crate) fn with_peers(base: &Context, me: &str, all: &[&str]) -> Context {
    let mut ctx = base.clone();
    let others: Vec<&str> = all.iter().copied().filter(|k| *k != me).collect();
    ctx.insert("other_agents".into(), json!(others));
    ctx
}

pub(crate) fn sequential(
    base: &Context,
    prior: &[StructuredInsight],
    position: usize,
    total: usize,
) -> Context {
    let mut ctx = base.clone();
    for insight in prior {
        ctx.insert(
            format!("insight_from_{}", insight.agent),
            Value::String(insight.core_insight.clone()),
        );
    }
    ctx.insert("position".into(), json!(position));
    ctx.insert("total_agents".into(), json!(total));
    ctx
}

pub(crate) fn primary(base: &Context) -> Context {
    let mut ctx = base.clone();
    ctx.insert("role".into(), json!("primary"));
    ctx
}

pub(crate) fn secondary(base: &Context, primary: &StructuredInsight) -> Context {
    let mut ctx = base.clone();
    ctx.insert("role".into(), json!("secondary"));
    ctx.insert("primary_agent".into(), json!(primary.agent));
    ctx.insert(
        "primary_insight".into(),
        serde_json::to_value(primary).unwrap_or(Value::Null),
    );
    ctx
}
