//! Ollama chat backend
//!
//! The council talks to a local Ollama daemon through two endpoints:
//! `POST /api/chat` for every completion and `GET /api/tags` as the
//! liveness probe behind `/health`.

mod client;
mod config;
mod wire;

#[cfg(test)]
mod tests;

pub use client::OllamaProvider;
pub use config::{OllamaConfig, DEFAULT_BASE_URL, DEFAULT_MODEL};
