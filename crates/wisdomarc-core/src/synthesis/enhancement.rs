//! Static reflection material and deterministic chain metrics

use super::types::Synthesis;
use crate::agents::{ReasoningType, StructuredInsight};
use std::collections::HashSet;

/// Pool of reflection prompts; the first four are attached to every synthesis
pub const METACOGNITIVE_PROMPTS: [&str; 8] = [
    "Which perspective resonated most with you, and why do you think that is?",
    "What assumption were you holding before reading these perspectives?",
    "How might you combine these approaches in your own situation?",
    "What would you tell a friend facing the same situation?",
    "Which part of this felt uncomfortable, and what might that reveal?",
    "How has your understanding of the problem changed since you first asked?",
    "What small experiment could test one of these ideas this week?",
    "Where do these perspectives disagree, and what does that tension teach you?",
];

/// Counter-perspectives attached to every synthesis
pub const DIALECTICAL_CHALLENGES: [&str; 5] = [
    "What if the opposite approach were true?",
    "Which of these perspectives might be wrong in your particular case?",
    "What important consideration did none of the philosophers address?",
    "How would someone who disagrees with you see this situation?",
    "What would you lose by following this advice?",
];

const QUALITY_CHECK_WEIGHT: f64 = 0.2;

/// Sum of five 0.2-weighted checks, capped at 1.0
#[must_use]
pub fn quality_score(synthesis: &Synthesis, chain: &[StructuredInsight]) -> f64 {
    let checks = [
        !synthesis.integrated_wisdom.trim().is_empty(),
        synthesis.key_insights.len() >= 2,
        !synthesis.practical_steps.is_empty(),
        !synthesis.metacognitive_enhancement.trim().is_empty(),
        chain.len() >= 2,
    ];

    let score = checks.iter().filter(|passed| **passed).count() as f64 * QUALITY_CHECK_WEIGHT;
    score.min(1.0)
}

/// Tags describing the cognitive range of the chain
#[must_use]
pub fn enhancement_elements(chain: &[StructuredInsight]) -> Vec<String> {
    let mut elements = Vec::new();

    let has_type = |t: ReasoningType| chain.iter().any(|i| i.reasoning_type == t);
    if has_type(ReasoningType::Analytical) && has_type(ReasoningType::Intuitive) {
        elements.push("Intuitive-analytical integration".to_string());
    }

    let philosophers: HashSet<&str> = chain.iter().map(|i| i.philosopher.as_str()).collect();
    if philosophers.len() >= 3 {
        elements.push("Multi-tradition perspective synthesis".to_string());
    }

    if chain.iter().any(|i| !i.socratic_catalyst.trim().is_empty()) {
        elements.push("Socratic questioning catalysts".to_string());
    }

    if chain.iter().any(|i| !i.metacognitive_awareness.trim().is_empty()) {
        elements.push("Metacognitive awareness development".to_string());
    }

    elements
}

/// Append the static material and computed metrics to a base synthesis
pub(crate) fn enhance(mut synthesis: Synthesis, chain: &[StructuredInsight]) -> Synthesis {
    synthesis.metacognitive_prompts = METACOGNITIVE_PROMPTS[..4]
        .iter()
        .map(|p| p.to_string())
        .collect();
    synthesis.dialectical_challenges = DIALECTICAL_CHALLENGES
        .iter()
        .map(|c| c.to_string())
        .collect();
    synthesis.synthesis_quality_score = quality_score(&synthesis, chain);
    synthesis.cognitive_enhancement_elements = enhancement_elements(chain);
    synthesis
}
