//! Error types for wisdomarc-llm

use thiserror::Error;

/// LLM error type
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// Provider not configured
    #[error("provider not configured: {0}")]
    NotConfigured(String),

    /// API error
    #[error("api error: {0}")]
    Api(String),

    /// Rate limit exceeded
    #[error("rate limit exceeded")]
    RateLimit,

    /// Invalid response
    #[error("invalid response: {0}")]
    InvalidResponse(String),

    /// Network error
    #[error("network error: {0}")]
    Network(String),

    /// Timeout
    #[error("timeout after {0}ms")]
    Timeout(u64),
}

impl Error {
    /// Whether the backend could not be reached at all.
    ///
    /// Everything else means the backend answered, but with a failure.
    #[must_use]
    pub fn is_unavailable(&self) -> bool {
        matches!(
            self,
            Self::Network(_) | Self::Timeout(_) | Self::NotConfigured(_)
        )
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unavailable_classification() {
        assert!(Error::Network("refused".into()).is_unavailable());
        assert!(Error::Timeout(1000).is_unavailable());
        assert!(Error::NotConfigured("ollama".into()).is_unavailable());

        assert!(!Error::Api("boom".into()).is_unavailable());
        assert!(!Error::RateLimit.is_unavailable());
        assert!(!Error::InvalidResponse("bad json".into()).is_unavailable());
    }
}
