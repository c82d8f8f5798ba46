//! Field extractor: runs the battery over a document's text

use crate::config::ExtractionConfig;
use crate::types::{ExtractedFields, FieldKind};

use super::battery::{build_battery, FieldRule};

/// Runs the ordered pattern battery against document text
///
/// `extract` is a total function: a field with no matches is an empty
/// sequence, never an error, and identical text always yields identical
/// output.
pub struct FieldExtractor {
    rules: Vec<FieldRule>,
}

impl FieldExtractor {
    /// Build an extractor from configuration (patterns compile once here)
    pub fn new(config: &ExtractionConfig) -> Self {
        Self {
            rules: build_battery(config),
        }
    }

    /// Extract all fields from `text`
    pub fn extract(&self, text: &str) -> ExtractedFields {
        let mut fields = ExtractedFields::empty();
        for rule in &self.rules {
            for found in rule.matches(text) {
                fields.push(rule.kind(), found);
            }
        }
        fields
    }
}

impl Default for FieldExtractor {
    fn default() -> Self {
        Self::new(&ExtractionConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(text: &str) -> ExtractedFields {
        FieldExtractor::default().extract(text)
    }

    #[test]
    fn test_extract_is_deterministic() {
        let text = "Train: T101\nFitness Certificate: Valid\nInvoice No: INV-2024-001";
        let first = serde_json::to_string(&extract(text)).unwrap();
        let second = serde_json::to_string(&extract(text)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_no_matches_is_empty_not_absent() {
        let fields = extract("nothing of interest");
        for kind in FieldKind::ALL {
            assert!(fields.matches(kind).is_empty(), "{:?} should be empty", kind);
        }
    }

    #[test]
    fn test_invoice_and_job_card_ids() {
        let fields = extract("Invoice No: INV-2024-001\nJob Card ID- JC/22/109");
        assert_eq!(
            fields.matches(FieldKind::InvoiceId),
            ["INV-2024-001", "JC/22/109"]
        );
    }

    #[test]
    fn test_dates_numeric_before_textual() {
        let fields = extract("Inspected on 15/08/2024, follow-up on 20 August 2024.");
        assert_eq!(
            fields.matches(FieldKind::Date),
            ["15/08/2024", "20 August 2024"]
        );
    }

    #[test]
    fn test_amounts_with_currency_markers() {
        let fields = extract("Total ₹1,25,000.50 with advance Rs. 5000 plus INR 750");
        assert_eq!(
            fields.matches(FieldKind::Amount),
            ["₹1,25,000.50", "Rs. 5000", "INR 750"]
        );
    }

    #[test]
    fn test_email_ocr_whitespace_normalized() {
        let fields = extract("Contact: john @ example . com");
        assert_eq!(fields.matches(FieldKind::Email), ["john@example.com"]);
    }

    #[test]
    fn test_email_plain() {
        let fields = extract("Mail ops@kmrl.co.in for escalation");
        assert_eq!(fields.matches(FieldKind::Email), ["ops@kmrl.co.in"]);
    }

    #[test]
    fn test_phone_with_country_code() {
        let fields = extract("Call +91 9876543210 or 9123456780");
        assert_eq!(
            fields.matches(FieldKind::Phone),
            ["+91 9876543210", "9123456780"]
        );
    }

    #[test]
    fn test_gst_number_case_insensitive() {
        let upper = extract("GSTIN 32AABCK1234L1Z5 on record");
        assert_eq!(upper.matches(FieldKind::TaxId), ["32AABCK1234L1Z5"]);
        let lower = extract("gstin 32aabck1234l1z5 on record");
        assert_eq!(lower.matches(FieldKind::TaxId), ["32aabck1234l1z5"]);
    }

    #[test]
    fn test_certificate_status_case_insensitive() {
        for text in ["VALID", "valid", "Valid"] {
            let fields = extract(text);
            assert_eq!(fields.matches(FieldKind::CertificateStatus), [text]);
        }
    }

    #[test]
    fn test_job_status_words() {
        let fields = extract("Job Card: In Progress, previous one Completed");
        assert_eq!(
            fields.matches(FieldKind::JobStatus),
            ["In Progress", "Completed"]
        );
    }

    #[test]
    fn test_vendor_requires_suffix_when_strict() {
        let extractor = FieldExtractor::new(&ExtractionConfig {
            strict_vendor: true,
        });
        let with_suffix = extractor.extract("Vendor: Sree Krishna Enterprises");
        assert_eq!(
            with_suffix.matches(FieldKind::Vendor),
            ["Sree Krishna Enterprises"]
        );
        let without_suffix = extractor.extract("Vendor: Rajesh");
        assert!(without_suffix.matches(FieldKind::Vendor).is_empty());
    }

    #[test]
    fn test_vendor_relaxed_variant() {
        let extractor = FieldExtractor::new(&ExtractionConfig {
            strict_vendor: false,
        });
        let fields = extractor.extract("Vendor: Rajesh");
        assert_eq!(fields.matches(FieldKind::Vendor), ["Rajesh"]);
    }

    #[test]
    fn test_vehicle_identifier() {
        let fields = extract("Train: T101 coupled with Coach-C204");
        assert_eq!(fields.matches(FieldKind::VehicleId), ["T101", "C204"]);
    }

    #[test]
    fn test_expiry_also_counts_as_generic_date() {
        let fields = extract("Fitness Certificate Valid Till: 31/12/2024");
        // The same token lands in both fields: consumers need the raw
        // occurrence and the labeled one.
        assert_eq!(fields.matches(FieldKind::ExpiryDate), ["31/12/2024"]);
        assert_eq!(fields.matches(FieldKind::Date), ["31/12/2024"]);
    }

    #[test]
    fn test_location_stops_at_line_end() {
        let fields = extract("Depot: Muttom Yard\nStation: Aluva");
        assert_eq!(
            fields.matches(FieldKind::Location),
            ["Muttom Yard", "Aluva"]
        );
    }
}
