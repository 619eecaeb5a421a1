use std::time::Duration;

/// Daemon address used when neither config nor environment names one
pub const DEFAULT_BASE_URL: &str = "http://localhost:11434";

/// Model asked for when a request leaves `model` empty
pub const DEFAULT_MODEL: &str = "llama3";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(120);

/// Where the daemon lives and which model the council runs on
#[derive(Debug, Clone)]
pub struct OllamaConfig {
    /// Root URL of the daemon, without a trailing slash
    pub base_url: String,
    /// Model tag passed to `/api/chat`
    pub default_model: String,
    /// Whole-request HTTP timeout
    pub timeout: Duration,
}

impl Default for OllamaConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            default_model: DEFAULT_MODEL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl OllamaConfig {
    /// Defaults overridden by `OLLAMA_BASE_URL` (or `OLLAMA_HOST`) and
    /// `OLLAMA_MODEL` when set
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(host) = std::env::var("OLLAMA_BASE_URL").or_else(|_| std::env::var("OLLAMA_HOST")) {
            config = config.with_base_url(host);
        }
        if let Ok(model) = std::env::var("OLLAMA_MODEL") {
            config = config.with_model(model);
        }
        config
    }

    /// Point at another daemon
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Run on another model
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.default_model = model.into();
        self
    }

    /// Change the HTTP timeout
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub(super) fn endpoint(&self, path: &str) -> String {
        format!("{}/api/{path}", self.base_url)
    }
}
