//! Prompt template for the external rationale service

use crate::types::{AvailabilityDecision, FieldKind};

/// Prompt builder for decision rationales
pub struct PromptBuilder;

impl PromptBuilder {
    /// Build the rationale prompt for an already-made decision
    ///
    /// The reduced field subset is serialized as JSON; the deterministic
    /// state is stated outright so the model explains rather than decides.
    pub fn build_rationale_prompt(decision: &AvailabilityDecision) -> String {
        let mut record = serde_json::Map::new();
        record.insert(
            FieldKind::VehicleId.label().to_string(),
            serde_json::json!(decision.vehicle),
        );
        for kind in [FieldKind::CertificateStatus, FieldKind::JobStatus] {
            record.insert(
                kind.label().to_string(),
                serde_json::json!(decision.evidence.first(kind).unwrap_or("missing")),
            );
        }
        let record = serde_json::Value::Object(record);

        format!(
            r#"You are reviewing maintenance and compliance records for metro rail vehicles.

Decision rules already applied:
- Fitness certificate Valid AND job card Completed -> the vehicle is available for operation.
- Fitness certificate Expired OR job card Pending -> the vehicle is not available.
- Missing data or any other combination -> the vehicle needs review.

Extracted record:
{record}

The decision is: {state}.

Explain the decision in one concise sentence. Do not change the decision."#,
            record = serde_json::to_string_pretty(&record).unwrap_or_else(|_| record.to_string()),
            state = decision.state
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decision::AvailabilityClassifier;
    use crate::types::ExtractedFields;

    #[test]
    fn test_prompt_carries_record_and_state() {
        let mut fields = ExtractedFields::empty();
        fields.push(FieldKind::VehicleId, "T101".to_string());
        fields.push(FieldKind::CertificateStatus, "Valid".to_string());
        fields.push(FieldKind::JobStatus, "Completed".to_string());

        let decision = AvailabilityClassifier::classify(&fields);
        let prompt = PromptBuilder::build_rationale_prompt(&decision);

        assert!(prompt.contains("T101"));
        assert!(prompt.contains("Valid"));
        assert!(prompt.contains("Completed"));
        assert!(prompt.contains("The decision is: Available"));
    }

    #[test]
    fn test_prompt_marks_missing_statuses() {
        let decision = AvailabilityClassifier::classify(&ExtractedFields::empty());
        let prompt = PromptBuilder::build_rationale_prompt(&decision);
        assert!(prompt.contains("missing"));
        assert!(prompt.contains("The decision is: Needs Review"));
    }
}
