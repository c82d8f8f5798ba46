//! Rationale provider trait

use async_trait::async_trait;

use crate::error::Result;
use crate::types::AvailabilityDecision;

/// Trait for producing a human-readable rationale for a decision
///
/// The provider is supplementary: it restates an already-made decision and
/// must never change the state. Any failure here is logged and the
/// rationale is simply omitted.
///
/// Implementations:
/// - `OllamaRationaler`: local Ollama server (phi3, llama3.2, etc.)
#[async_trait]
pub trait RationaleProvider: Send + Sync {
    /// Produce a short rationale for an already-made decision
    async fn explain(&self, decision: &AvailabilityDecision) -> Result<String>;

    /// Check if the provider is healthy and available
    async fn health_check(&self) -> Result<bool>;

    /// Provider name for logging
    fn name(&self) -> &str;

    /// The model being used
    fn model(&self) -> &str;
}
