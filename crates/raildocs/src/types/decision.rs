//! Availability decision types

use serde::{Deserialize, Serialize};

use super::fields::ExtractedFields;

/// The three availability states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Availability {
    /// Vehicle is available for operation
    Available,
    /// Vehicle is not available
    NotAvailable,
    /// Data is missing or inconclusive; a person must look
    NeedsReview,
}

impl std::fmt::Display for Availability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Availability::Available => write!(f, "Available"),
            Availability::NotAvailable => write!(f, "Not Available"),
            Availability::NeedsReview => write!(f, "Needs Review"),
        }
    }
}

/// A per-document availability decision
///
/// `state` is the authoritative output of the deterministic rule table;
/// `rationale` is supplementary text from the external reasoning service and
/// never overrides it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvailabilityDecision {
    /// Vehicle identifier from the document, or "unknown"; reporting only
    pub vehicle: String,
    /// Decision state
    pub state: Availability,
    /// The extracted-field snapshot the decision was made from
    pub evidence: ExtractedFields,
    /// Optional human-readable explanation from the external summarizer
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rationale: Option<String>,
}
