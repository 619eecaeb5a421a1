//! Agent Selection
//!
//! Decides which personas take part in a request and how their calls are
//! scheduled. The model-backed path is preferred; a keyword heuristic over
//! the query is the deterministic fallback.

mod keywords;
mod selector;
mod types;

pub use keywords::keyword_selection;
pub use selector::AgentSelector;
pub use types::{AgentSelection, CollaborationPattern, QueryAnalysis, SelectionSource};

/// Maximum number of agents in one selection
pub const MAX_AGENTS: usize = 3;

#[cfg(test)]
mod tests;
