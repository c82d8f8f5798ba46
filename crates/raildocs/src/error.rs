//! Error types for the document pipeline

use thiserror::Error;

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;

/// Pipeline error taxonomy
///
/// A single document failing to load is never fatal to a run; the loader
/// catches these per file and continues (see `ingestion::ContentLoader`).
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error reading a file or directory
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// File extension is not in the supported set
    #[error("unsupported file type: {0}")]
    UnsupportedFileType(String),

    /// Underlying format parser failed on a file
    #[error("failed to parse {path}: {reason}")]
    FileParse { path: String, reason: String },

    /// OCR engine invocation or rasterization failed
    #[error("OCR failed: {0}")]
    Ocr(String),

    /// Extraction produced only whitespace
    #[error("empty document: {0}")]
    EmptyDocument(String),

    /// External reasoning service (rationale) failed
    #[error("LLM request failed: {0}")]
    Llm(String),

    /// Configuration could not be read or parsed
    #[error("configuration error: {0}")]
    Config(String),

    /// Catch-all for internal errors
    #[error("{0}")]
    Internal(String),
}

impl Error {
    /// Create a file parse error with path context
    pub fn file_parse(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::FileParse {
            path: path.into(),
            reason: reason.into(),
        }
    }
}
