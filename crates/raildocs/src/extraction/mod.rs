//! Pattern-based field extraction
//!
//! The battery is a fixed, ordered table of named pattern rules applied
//! uniformly to every document's text. Rules are independent and
//! non-exclusive: a substring may satisfy several field patterns.

mod battery;
mod extractor;

pub use battery::{build_battery, FieldRule, PostProcess};
pub use extractor::FieldExtractor;
