//! `wisdomarc agents` - list personas and collaboration patterns

use anyhow::Result;
use wisdomarc_core::{CollaborationPattern, Pantheon};

/// Print the persona roster and the collaboration patterns
pub fn run() -> Result<()> {
    println!("Philosophical agents:\n");
    for persona in Pantheon::builtin().iter() {
        println!("  {:<10} {} - {}", persona.key, persona.name, persona.title);
        println!("  {:<10} style: {}", "", persona.reasoning_style);
        println!("  {:<10} best for: {}", "", persona.best_for);
        for principle in persona.core_principles {
            println!("  {:<10}   * {}", "", principle);
        }
        println!();
    }

    println!("Collaboration patterns:\n");
    for pattern in CollaborationPattern::ALL {
        println!("  {:<13} {}", pattern.as_str(), pattern.description());
    }
    Ok(())
}
