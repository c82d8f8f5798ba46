//! Core data types: source documents, extracted fields, and decisions

pub mod decision;
pub mod document;
pub mod fields;

pub use decision::{Availability, AvailabilityDecision};
pub use document::{DocumentFormat, SourceDocument};
pub use fields::{ExtractedFields, FieldKind};
