//! LLM provider resolution
//!
//! Builds the configured backend and the coordinator that runs on it.

use super::config::{AppConfig, LlmConfig};
use anyhow::{bail, Context, Result};
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};
use wisdomarc_core::{ModelGateway, WisdomCoordinator};
use wisdomarc_llm::{LlmProvider, MockProvider, OllamaConfig, OllamaProvider};

/// Resolve the configured LLM provider
pub fn resolve_llm_provider(llm_config: &LlmConfig) -> Result<Arc<dyn LlmProvider>> {
    match llm_config.provider.as_str() {
        "ollama" => {
            let mut config = OllamaConfig::from_env()
                .with_timeout(Duration::from_secs(llm_config.timeout_secs));
            if let Some(base_url) = &llm_config.base_url {
                config = config.with_base_url(base_url.clone());
            }
            if let Some(model) = &llm_config.model {
                config = config.with_model(model.clone());
            }
            info!(
                base_url = %config.base_url,
                model = %config.default_model,
                "Registered Ollama provider"
            );
            let provider =
                OllamaProvider::new(config).context("Failed to create Ollama provider")?;
            Ok(Arc::new(provider))
        }
        "mock" => {
            warn!("Using mock LLM provider; every stage will fall back to its default output");
            Ok(Arc::new(MockProvider::new()))
        }
        other => bail!("Unknown LLM provider: {other}"),
    }
}

/// Build the coordinator for a loaded configuration
pub fn build_coordinator(config: &AppConfig) -> Result<WisdomCoordinator> {
    let provider = resolve_llm_provider(&config.llm)?;
    let gateway_config = config
        .gateway
        .to_gateway_config(config.llm.model.as_deref());
    let gateway = ModelGateway::with_config(provider, gateway_config);
    info!(
        provider = gateway.provider_name(),
        model = gateway.model(),
        "Model gateway ready"
    );
    Ok(WisdomCoordinator::with_config(gateway, config.coordinator))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_provider_resolves() {
        let config = LlmConfig {
            provider: "mock".to_string(),
            ..LlmConfig::default()
        };
        let provider = resolve_llm_provider(&config).unwrap();
        assert_eq!(provider.name(), "mock");
    }

    #[test]
    fn test_unknown_provider_is_rejected() {
        let config = LlmConfig {
            provider: "nope".to_string(),
            ..LlmConfig::default()
        };
        assert!(resolve_llm_provider(&config).is_err());
    }

    #[test]
    fn test_ollama_model_override() {
        let config = LlmConfig {
            provider: "ollama".to_string(),
            model: Some("gemma3".to_string()),
            ..LlmConfig::default()
        };
        let app = AppConfig {
            llm: config,
            ..AppConfig::default()
        };
        let coordinator = build_coordinator(&app).unwrap();
        assert_eq!(coordinator.gateway().model(), "gemma3");
        assert_eq!(coordinator.gateway().provider_name(), "ollama");
    }
}
