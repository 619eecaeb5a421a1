//! Server module for WisdomArc
//!
//! # Module Structure
//!
//! - `config`: Configuration structures
//! - `loader`: Configuration loading from files and environment
//! - `providers`: LLM provider resolution and coordinator construction
//! - `validation`: Configuration validation
//! - `init`: Server run loop

pub mod config;
mod init;
mod loader;
mod providers;
mod validation;

// Re-export public API
pub use init::run;
pub use loader::load_config;
pub use providers::build_coordinator;
pub use validation::validate_config;
