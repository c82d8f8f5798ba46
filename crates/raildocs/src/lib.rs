//! raildocs: rail-fleet compliance document pipeline
//!
//! This crate ingests heterogeneous maintenance and compliance documents
//! (plain text, PDF, Word, Markdown, scanned images) for a fleet of rail
//! vehicles, extracts structured facts with a fixed pattern battery, and
//! reduces each document to a per-vehicle availability decision. Scanned or
//! image-only PDFs fall back to OCR; an optional local LLM supplies a
//! human-readable rationale that never overrides the deterministic decision.

pub mod config;
pub mod decision;
pub mod error;
pub mod extraction;
pub mod ingestion;
pub mod pipeline;
pub mod providers;
pub mod types;

pub use config::PipelineConfig;
pub use error::{Error, Result};
pub use pipeline::{Pipeline, VehicleReport};
pub use types::{
    decision::{Availability, AvailabilityDecision},
    document::{DocumentFormat, SourceDocument},
    fields::{ExtractedFields, FieldKind},
};
