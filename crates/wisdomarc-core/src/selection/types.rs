//! Selection types

use serde::{Deserialize, Serialize};

/// Scheduling strategy for the selected agents
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CollaborationPattern {
    /// One agent at a time, each seeing earlier insights
    Sequential,
    /// All agents at once, independently
    #[default]
    Parallel,
    /// Primary agent first, then the rest given its insight
    Hierarchical,
    /// Parallel round followed by peer validation
    Dialectical,
}

impl CollaborationPattern {
    /// Every pattern, in documentation order
    pub const ALL: [Self; 4] = [
        Self::Sequential,
        Self::Parallel,
        Self::Hierarchical,
        Self::Dialectical,
    ];

    /// Wire label
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sequential => "sequential",
            Self::Parallel => "parallel",
            Self::Hierarchical => "hierarchical",
            Self::Dialectical => "dialectical",
        }
    }

    /// One-line description
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Sequential => "Agents build on each other's insights progressively",
            Self::Parallel => "Independent analysis for diverse perspectives",
            Self::Hierarchical => "Primary agent leads with supporting elaboration",
            Self::Dialectical => "Agents challenge and refine each other's reasoning",
        }
    }

    /// Parse a label; unknown labels yield `None`
    #[must_use]
    pub fn parse(label: &str) -> Option<Self> {
        let label = label.trim().to_lowercase();
        Self::ALL.into_iter().find(|p| p.as_str() == label)
    }
}

impl std::fmt::Display for CollaborationPattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where a selection came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionSource {
    /// Parsed from the model
    Model,
    /// Keyword heuristic
    Fallback,
}

/// Selector's reading of the query
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryAnalysis {
    /// Dominant emotional tone
    pub emotional_tone: String,
    /// Problem category
    pub problem_type: String,
    /// Main themes
    pub key_themes: Vec<String>,
}

impl Default for QueryAnalysis {
    fn default() -> Self {
        Self {
            emotional_tone: "neutral".to_string(),
            problem_type: "general".to_string(),
            key_themes: vec!["inquiry".to_string()],
        }
    }
}

/// Which agents take part and how
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentSelection {
    /// Persona keys in execution order (1 to 3, deduplicated)
    pub selected_agents: Vec<String>,
    /// Leading agent; always a member of `selected_agents`
    pub primary_agent: String,
    /// Scheduling strategy
    pub collaboration_pattern: CollaborationPattern,
    /// Requested depth of reasoning
    pub reasoning_depth: String,
    /// Why these agents
    pub selection_rationale: String,
    /// Expected complementarities
    pub expected_synergies: Vec<String>,
    /// Selector's reading of the query
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query_analysis: Option<QueryAnalysis>,
    /// Model or fallback
    pub source: SelectionSource,
}
