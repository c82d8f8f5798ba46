//! The field battery: one pattern rule per extractable field

use regex::Regex;

use crate::config::ExtractionConfig;
use crate::types::FieldKind;

/// Post-processing applied to each raw match before it is kept
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostProcess {
    /// Keep the match as found
    None,
    /// Remove all whitespace inside the token (OCR artifact repair)
    StripWhitespace,
    /// Trim surrounding whitespace
    TrimEnds,
}

impl PostProcess {
    fn apply(&self, raw: &str) -> String {
        match self {
            PostProcess::None => raw.to_string(),
            PostProcess::StripWhitespace => raw.chars().filter(|c| !c.is_whitespace()).collect(),
            PostProcess::TrimEnds => raw.trim().to_string(),
        }
    }
}

/// A single pattern rule in the battery
#[derive(Debug)]
pub struct FieldRule {
    kind: FieldKind,
    pattern: Regex,
    post: PostProcess,
}

impl FieldRule {
    fn new(kind: FieldKind, pattern: &str, post: PostProcess) -> Self {
        Self {
            kind,
            // Patterns are fixed at compile time; a failure here is a bug in
            // the battery table, not an input condition.
            pattern: Regex::new(pattern).expect("built-in field pattern must compile"),
            post,
        }
    }

    /// The field this rule feeds
    pub fn kind(&self) -> FieldKind {
        self.kind
    }

    /// Non-overlapping left-to-right matches in `text`, post-processed
    ///
    /// When the pattern has a capture group, the group is the token; the
    /// whole match otherwise.
    pub fn matches(&self, text: &str) -> Vec<String> {
        self.pattern
            .captures_iter(text)
            .map(|cap| {
                let m = match cap.get(1) {
                    Some(group) => group,
                    None => cap.get(0).expect("capture group 0 always exists"),
                };
                self.post.apply(m.as_str())
            })
            .collect()
    }
}

/// Build the ordered battery for a given configuration
///
/// Order matters only within a field: the numeric date rule precedes the
/// textual-month rule, so numeric matches come first in the Date sequence.
pub fn build_battery(config: &ExtractionConfig) -> Vec<FieldRule> {
    let vendor_pattern = if config.strict_vendor {
        // Label cue plus a capitalized phrase that ends in a business suffix
        r"(?i)(?:provider|contractor|vendor|company|services)[:,]?\s*([A-Z][A-Za-z0-9\s&.,\-]*(?:Pvt\.?\s*Ltd\.?|Ltd\.?|Contractors?|Enterprises?|Services|Industries?))"
    } else {
        r"(?i)(?:vendor|contractor|company|provider)[:,]?\s*([A-Z][\w\s&.,\-]+)"
    };

    vec![
        FieldRule::new(
            FieldKind::InvoiceId,
            r"(?i)(?:Invoice\s*No|Job\s*Card\s*ID)[:\-]?\s*([A-Za-z0-9/\-]+)",
            PostProcess::None,
        ),
        FieldRule::new(
            FieldKind::Date,
            r"\d{1,2}[/\-]\d{1,2}[/\-]\d{2,4}",
            PostProcess::None,
        ),
        FieldRule::new(
            FieldKind::Date,
            r"\d{1,2}\s+[A-Za-z]{3,9}\s+\d{2,4}",
            PostProcess::None,
        ),
        FieldRule::new(
            FieldKind::Amount,
            r"(?:₹|Rs\.?|INR)\s?[\d,]+\.?\d*",
            PostProcess::None,
        ),
        FieldRule::new(
            FieldKind::Email,
            // Whitespace tolerated around '@' and the TLD dot; stripped after
            r"[A-Za-z0-9._%+\-]+\s*@\s*[A-Za-z0-9.\-]+\s*\.\s*[a-z]{2,}",
            PostProcess::StripWhitespace,
        ),
        FieldRule::new(
            FieldKind::Phone,
            r"(?:\+91[\-\s]?)?\d{10}",
            PostProcess::None,
        ),
        FieldRule::new(
            FieldKind::TaxId,
            r"(?i)\b\d{2}[A-Z]{5}\d{4}[A-Z][A-Z\d]Z[A-Z\d]\b",
            PostProcess::None,
        ),
        FieldRule::new(
            FieldKind::CertificateStatus,
            r"(?i)\b(Valid|Expired|Pending)\b",
            PostProcess::None,
        ),
        FieldRule::new(
            FieldKind::JobStatus,
            r"(?i)\b(Completed|Pending|In Progress)\b",
            PostProcess::None,
        ),
        FieldRule::new(FieldKind::Vendor, vendor_pattern, PostProcess::TrimEnds),
        FieldRule::new(
            FieldKind::VehicleId,
            r"(?i)(?:Train|Coach)[:\-]?\s*([A-Za-z0-9\-]+)",
            PostProcess::None,
        ),
        FieldRule::new(
            FieldKind::ExpiryDate,
            r"(?i)(?:Expiry|Valid\s*Till|Expires)[:\-]?\s*(\d{1,2}[/\-]\d{1,2}[/\-]\d{2,4}|\d{1,2}\s+[A-Za-z]{3,9}\s+\d{2,4})",
            PostProcess::None,
        ),
        FieldRule::new(
            FieldKind::Location,
            // Remainder of the line only; [ \t] instead of \s keeps the
            // capture from running across line breaks
            r"(?i)(?:Depot|Station|Workshop|Vendor|Address)[:\-]?[ \t]*([A-Za-z0-9 \t,.\-]+)",
            PostProcess::TrimEnds,
        ),
    ]
}
