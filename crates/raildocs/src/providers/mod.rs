//! External reasoning-service providers for decision rationales

mod llm;
mod ollama;

pub use llm::RationaleProvider;
pub use ollama::OllamaRationaler;
