//! Persona definition

use serde::{Deserialize, Serialize};

/// Cognitive mode an insight (or persona) leans on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReasoningType {
    /// Step-by-step, explicit reasoning
    Analytical,
    /// Pattern- and metaphor-driven reasoning
    Intuitive,
    /// Moves between the two
    Bridging,
}

impl ReasoningType {
    /// Wire label
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Analytical => "analytical",
            Self::Intuitive => "intuitive",
            Self::Bridging => "bridging",
        }
    }

    /// Parse a model-provided label, case-insensitively.
    #[must_use]
    pub fn parse(label: &str) -> Option<Self> {
        match label.trim().to_lowercase().as_str() {
            "analytical" | "analytic" => Some(Self::Analytical),
            "intuitive" => Some(Self::Intuitive),
            "bridging" | "bridge" => Some(Self::Bridging),
            _ => None,
        }
    }
}

impl std::fmt::Display for ReasoningType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An immutable philosophical persona
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Persona {
    /// Registry key (`socrates`, `marcus`, `laotzu`, `aristotle`)
    pub key: &'static str,
    /// Display name
    pub name: &'static str,
    /// Role title
    pub title: &'static str,
    /// Ordered core principles
    pub core_principles: &'static [&'static str],
    /// Default reasoning mode
    pub reasoning_style: ReasoningType,
    /// Persona system prompt
    #[serde(skip)]
    pub system_prompt: &'static str,
    /// What the persona is best suited for; shown to the selector
    pub best_for: &'static str,
}

impl Persona {
    /// Principles as a numbered list for prompts
    #[must_use]
    pub fn principles_block(&self) -> String {
        self.core_principles
            .iter()
            .enumerate()
            .map(|(i, p)| format!("{}. {}", i + 1, p))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
