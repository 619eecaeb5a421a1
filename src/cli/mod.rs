//! CLI module for WisdomArc
//!
//! Provides commands:
//! - `serve`: Start the HTTP and WebSocket server
//! - `ask`: Run one query and print the result or the live event stream
//! - `agents`: List personas and collaboration patterns

use clap::{Parser, Subcommand};

pub mod agents;
pub mod ask;

/// WisdomArc philosophical reasoning CLI
#[derive(Parser, Debug)]
#[command(name = "wisdomarc")]
#[command(about = "Multi-agent philosophical reasoning")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the server
    Serve,
    /// Ask a question
    Ask {
        /// The question or situation to reflect on
        query: String,
        /// Print each progress event as a JSON line
        #[arg(long)]
        stream: bool,
        /// Extra context entries (repeatable)
        #[arg(long = "context", value_name = "KEY=VALUE", value_parser = ask::parse_context_pair)]
        context: Vec<(String, String)>,
    },
    /// List available philosophical agents
    Agents,
}

/// Run the CLI command
pub async fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Some(Commands::Serve) => {
            let config = load_validated_config()?;
            crate::server::run(config).await
        }
        Some(Commands::Ask {
            query,
            stream,
            context,
        }) => {
            let config = load_validated_config()?;
            ask::run(&config, &query, stream, context).await
        }
        Some(Commands::Agents) => agents::run(),
        None => {
            let mut cmd = <Cli as clap::CommandFactory>::command();
            cmd.print_help()?;
            println!();
            Ok(())
        }
    }
}

fn load_validated_config() -> anyhow::Result<crate::server::config::AppConfig> {
    use anyhow::Context;

    let config = crate::server::load_config().context("Failed to load configuration")?;
    crate::server::validate_config(&config)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ask_with_context() {
        let cli = Cli::try_parse_from([
            "wisdomarc",
            "ask",
            "Why do I worry?",
            "--stream",
            "--context",
            "mood=anxious",
            "--context",
            "age=30",
        ])
        .unwrap();

        match cli.command {
            Some(Commands::Ask {
                query,
                stream,
                context,
            }) => {
                assert_eq!(query, "Why do I worry?");
                assert!(stream);
                assert_eq!(context.len(), 2);
                assert_eq!(context[0], ("mood".to_string(), "anxious".to_string()));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_rejects_malformed_context() {
        assert!(Cli::try_parse_from(["wisdomarc", "ask", "q", "--context", "novalue"]).is_err());
    }
}
