//! Deterministic availability classification

use crate::types::{Availability, AvailabilityDecision, ExtractedFields, FieldKind};

/// Reduces an extracted-field bag to one of three availability states
///
/// Only three derived inputs matter: the first certificate-status match, the
/// first job-status match, and the first vehicle identifier (the latter for
/// reporting only). The table is total: every input combination reaches
/// exactly one state, and the external rationale never overrides it.
pub struct AvailabilityClassifier;

impl AvailabilityClassifier {
    /// Apply the decision table, first matching rule wins:
    ///
    /// 1. certificate missing OR job missing      -> NeedsReview
    /// 2. certificate Valid AND job Completed     -> Available
    /// 3. certificate Expired OR job Pending      -> NotAvailable
    /// 4. anything else                           -> NeedsReview
    pub fn classify(fields: &ExtractedFields) -> AvailabilityDecision {
        let vehicle = fields
            .first(FieldKind::VehicleId)
            .unwrap_or("unknown")
            .to_string();

        let state = match (
            fields.first(FieldKind::CertificateStatus),
            fields.first(FieldKind::JobStatus),
        ) {
            (None, _) | (_, None) => Availability::NeedsReview,
            (Some(certificate), Some(job))
                if certificate.eq_ignore_ascii_case("valid")
                    && job.eq_ignore_ascii_case("completed") =>
            {
                Availability::Available
            }
            (Some(certificate), Some(job))
                if certificate.eq_ignore_ascii_case("expired")
                    || job.eq_ignore_ascii_case("pending") =>
            {
                Availability::NotAvailable
            }
            _ => Availability::NeedsReview,
        };

        AvailabilityDecision {
            vehicle,
            state,
            evidence: fields.clone(),
            rationale: None,
        }
    }
}
