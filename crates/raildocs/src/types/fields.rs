//! Extracted-field bag: the typed output of the pattern battery

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The closed set of field names the battery can extract
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    /// Invoice or job-card identifier
    InvoiceId,
    /// Any date-shaped token (numeric or textual month form)
    Date,
    /// Currency-marked amount
    Amount,
    /// Email address
    Email,
    /// Phone number
    Phone,
    /// GST-shaped tax/registration identifier
    TaxId,
    /// Fitness certificate status word
    CertificateStatus,
    /// Job card status word
    JobStatus,
    /// Vendor or branding contractor name
    Vendor,
    /// Train or coach identifier
    VehicleId,
    /// Date following an expiry label
    ExpiryDate,
    /// Free-text location after a depot/station/workshop label
    Location,
}

impl FieldKind {
    /// Every field kind, in battery order
    pub const ALL: [FieldKind; 12] = [
        FieldKind::InvoiceId,
        FieldKind::Date,
        FieldKind::Amount,
        FieldKind::Email,
        FieldKind::Phone,
        FieldKind::TaxId,
        FieldKind::CertificateStatus,
        FieldKind::JobStatus,
        FieldKind::Vendor,
        FieldKind::VehicleId,
        FieldKind::ExpiryDate,
        FieldKind::Location,
    ];

    /// Human-readable label, used when serializing for the rationale prompt
    pub fn label(&self) -> &str {
        match self {
            Self::InvoiceId => "Invoice/Job Card ID",
            Self::Date => "Date",
            Self::Amount => "Amount",
            Self::Email => "Email",
            Self::Phone => "Phone",
            Self::TaxId => "GST/Tax ID",
            Self::CertificateStatus => "Fitness Certificate Status",
            Self::JobStatus => "Job Card Status",
            Self::Vendor => "Vendor",
            Self::VehicleId => "Train/Coach Number",
            Self::ExpiryDate => "Expiry Date",
            Self::Location => "Address/Location",
        }
    }
}

/// Mapping from field kind to the ordered matches found in a document
///
/// Every kind is always present; a field with no matches maps to an empty
/// sequence. The value is a pure function of the document text and the
/// battery configuration, so two extractions over the same text serialize
/// byte-identically (`BTreeMap` keeps key order fixed).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExtractedFields {
    map: BTreeMap<FieldKind, Vec<String>>,
}

impl ExtractedFields {
    /// Create a bag with every field kind present and empty
    pub fn empty() -> Self {
        let map = FieldKind::ALL.iter().map(|k| (*k, Vec::new())).collect();
        Self { map }
    }

    /// Append a match to a field, preserving left-to-right order
    pub fn push(&mut self, kind: FieldKind, value: String) {
        self.map.entry(kind).or_default().push(value);
    }

    /// All matches for a field, in document order
    pub fn matches(&self, kind: FieldKind) -> &[String] {
        self.map.get(&kind).map(Vec::as_slice).unwrap_or(&[])
    }

    /// First match for a field, if any
    pub fn first(&self, kind: FieldKind) -> Option<&str> {
        self.matches(kind).first().map(String::as_str)
    }

    /// Total number of matches across all fields
    pub fn total_matches(&self) -> usize {
        self.map.values().map(Vec::len).sum()
    }
}

impl Default for ExtractedFields {
    fn default() -> Self {
        Self::empty()
    }
}
