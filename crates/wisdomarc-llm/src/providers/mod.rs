//! Concrete chat-completion backends

pub mod ollama;
