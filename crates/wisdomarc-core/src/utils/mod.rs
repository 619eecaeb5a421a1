//! Utility modules for wisdomarc-core
//!
//! - retry: bounded retries with exponential backoff for model calls

mod retry;

pub use retry::{retry_with_backoff, RetryConfig, RetryError};
