//! Synthesis - merging the reasoning chain
//!
//! One model call produces the base synthesis (or a deterministic
//! fallback); static reflection material, a quality score and enhancement
//! tags are then appended unconditionally.

mod enhancement;
mod synthesizer;
mod types;

pub use enhancement::{
    enhancement_elements, quality_score, DIALECTICAL_CHALLENGES, METACOGNITIVE_PROMPTS,
};
pub use synthesizer::Synthesizer;
pub use types::{Synthesis, SynthesisSource};
