//! Pantheon - the persona registry
//!
//! Four fixed philosophical personas, defined as data and shared read-only
//! by every agent. There is no runtime discovery: the registry is built from
//! static definitions.
//!
//! # Example
//!
//! ```rust
//! use wisdomarc_core::pantheon::Pantheon;
//!
//! let pantheon = Pantheon::builtin();
//! assert_eq!(Pantheon::resolve_name("Marcus Aurelius"), Some("marcus"));
//! assert_eq!(pantheon.get("laotzu").map(|p| p.name), Some("Lao Tzu"));
//! ```

mod persona;
mod registry;

pub use persona::{Persona, ReasoningType};
pub use registry::Pantheon;
