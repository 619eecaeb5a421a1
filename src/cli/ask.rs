//! `wisdomarc ask` - one query from the command line

use anyhow::{anyhow, Result};
use futures_util::StreamExt;
use serde_json::Value;
use wisdomarc_core::{format_error_for_cli, Context, WisdomStep};

use crate::server::{build_coordinator, config::AppConfig};

/// Parse one `KEY=VALUE` argument
pub fn parse_context_pair(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok((key.trim().to_string(), value.to_string()))
        }
        _ => Err(format!("expected KEY=VALUE, got '{raw}'")),
    }
}

/// Context map from parsed pairs; later duplicates win
pub fn build_context(pairs: Vec<(String, String)>) -> Context {
    pairs
        .into_iter()
        .map(|(key, value)| (key, Value::String(value)))
        .collect()
}

/// Run the query and print the result or event stream
pub async fn run(
    config: &AppConfig,
    query: &str,
    stream: bool,
    pairs: Vec<(String, String)>,
) -> Result<()> {
    let coordinator = build_coordinator(config)?;
    let context = build_context(pairs);

    if stream {
        let mut events = coordinator
            .stream_wisdom(query, context)
            .map_err(|e| anyhow!(format_error_for_cli(&e)))?;
        while let Some(event) = events.next().await {
            println!("{}", serde_json::to_string(&event)?);
            if event.step == WisdomStep::Error {
                return Err(anyhow!(event
                    .message
                    .unwrap_or_else(|| "wisdom processing failed".to_string())));
            }
        }
        return Ok(());
    }

    let result = coordinator
        .ask_wisdom(query, context)
        .await
        .map_err(|e| anyhow!(format_error_for_cli(&e)))?;
    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_context_pair() {
        assert_eq!(
            parse_context_pair("mood=calm").unwrap(),
            ("mood".to_string(), "calm".to_string())
        );
        assert_eq!(
            parse_context_pair("note=a=b").unwrap(),
            ("note".to_string(), "a=b".to_string())
        );
        assert!(parse_context_pair("=x").is_err());
        assert!(parse_context_pair("plain").is_err());
    }

    #[test]
    fn test_build_context_last_wins() {
        let context = build_context(vec![
            ("mood".to_string(), "calm".to_string()),
            ("mood".to_string(), "tense".to_string()),
        ]);
        assert_eq!(context.len(), 1);
        assert_eq!(context["mood"], "tense");
    }

    #[tokio::test]
    async fn test_blank_query_fails_before_any_call() {
        let mut config = AppConfig::default();
        config.llm.provider = "mock".to_string();

        let err = run(&config, "   ", false, Vec::new()).await.unwrap_err();
        assert!(!err.to_string().is_empty());
    }
}
