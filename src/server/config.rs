//! Server configuration types
//!
//! Mirrors `config/default.toml`. Every section is required there, so the
//! embedded defaults always deserialize.

use serde::{Deserialize, Serialize};
use std::time::Duration;
use wisdomarc_core::{CoordinatorConfig, GatewayConfig, RetryConfig};

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub llm: LlmConfig,
    #[serde(default)]
    pub gateway: GatewaySettings,
    #[serde(default)]
    pub coordinator: CoordinatorConfig,
}

/// HTTP listener
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8000,
        }
    }
}

/// Model backend selection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    /// `ollama` or `mock`
    pub provider: String,
    /// Overrides `OLLAMA_HOST` when set
    #[serde(default)]
    pub base_url: Option<String>,
    /// Overrides `OLLAMA_MODEL` when set
    #[serde(default)]
    pub model: Option<String>,
    /// HTTP client timeout
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            provider: "ollama".to_string(),
            base_url: None,
            model: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Per-call limits applied by the model gateway
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewaySettings {
    #[serde(default = "default_timeout_secs")]
    pub call_timeout_secs: u64,
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,
}

impl Default for GatewaySettings {
    fn default() -> Self {
        Self {
            call_timeout_secs: default_timeout_secs(),
            max_attempts: default_max_attempts(),
        }
    }
}

impl GatewaySettings {
    /// Gateway config for the resolved model
    pub fn to_gateway_config(&self, model: Option<&str>) -> GatewayConfig {
        let config = GatewayConfig::new()
            .with_call_timeout(Duration::from_secs(self.call_timeout_secs))
            .with_retry(RetryConfig::new().with_max_attempts(self.max_attempts));
        match model {
            Some(model) => config.with_model(model),
            None => config,
        }
    }
}

fn default_timeout_secs() -> u64 {
    120
}

fn default_max_attempts() -> u32 {
    1
}
