//! Configuration validation
//!
//! Rejects values that would make every request fail, and warns about
//! risky production settings.

use super::config::AppConfig;
use anyhow::{bail, Result};
use tracing::warn;
use wisdomarc_core::StageSettings;

/// Validate a loaded configuration
pub fn validate_config(config: &AppConfig) -> Result<()> {
    if config.server.port == 0 {
        bail!("server.port must be non-zero");
    }
    if config.llm.timeout_secs == 0 {
        bail!("llm.timeout_secs must be greater than zero");
    }
    if config.gateway.call_timeout_secs == 0 {
        bail!("gateway.call_timeout_secs must be greater than zero");
    }
    if !matches!(config.llm.provider.as_str(), "ollama" | "mock") {
        bail!(
            "llm.provider '{}' is not supported (expected 'ollama' or 'mock')",
            config.llm.provider
        );
    }

    let stages = &config.coordinator;
    check_stage("coordinator.agent", stages.agent)?;
    check_stage("coordinator.validation", stages.validation)?;
    check_stage("coordinator.analyzer", stages.analyzer)?;
    check_stage("coordinator.selector", stages.selector)?;
    check_stage("coordinator.synthesis", stages.synthesis)?;

    warn_production(config);
    Ok(())
}

fn check_stage(field: &str, stage: StageSettings) -> Result<()> {
    if !(0.0..=2.0).contains(&stage.temperature) {
        bail!(
            "{field}.temperature must be within [0, 2], got {}",
            stage.temperature
        );
    }
    if stage.max_tokens == 0 {
        bail!("{field}.max_tokens must be greater than zero");
    }
    Ok(())
}

fn warn_production(config: &AppConfig) {
    let is_production = std::env::var("WISDOMARC_ENV")
        .map(|v| v.eq_ignore_ascii_case("production"))
        .unwrap_or(false);

    if !is_production {
        return;
    }

    if config.server.host == "0.0.0.0" {
        warn!(
            "SECURITY WARNING: Server is binding to all interfaces (0.0.0.0) in production. \
             Consider binding to 127.0.0.1 and using a reverse proxy."
        );
    }
    if config.llm.provider == "mock" {
        warn!("llm.provider is 'mock' in production; every answer will be scripted");
    }
}
