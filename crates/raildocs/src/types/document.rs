//! Source document type and format detection

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::path::{Path, PathBuf};

/// Supported document formats
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DocumentFormat {
    /// Plain text file
    Text,
    /// PDF document (embedded text, OCR fallback for scans)
    Pdf,
    /// Microsoft Word document (.docx)
    Word,
    /// Markdown file
    Markdown,
    /// Image (OCR only)
    Image,
    /// Unknown file type
    Unknown,
}

impl DocumentFormat {
    /// Detect format from a file extension, case-insensitive
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_lowercase().as_str() {
            "txt" => Self::Text,
            "pdf" => Self::Pdf,
            "docx" => Self::Word,
            "md" | "markdown" => Self::Markdown,
            "png" | "jpg" | "jpeg" => Self::Image,
            _ => Self::Unknown,
        }
    }

    /// Detect format from a file path
    pub fn from_path(path: &Path) -> Self {
        path.extension()
            .and_then(|e| e.to_str())
            .map(Self::from_extension)
            .unwrap_or(Self::Unknown)
    }

    /// Check if this is a supported format
    pub fn is_supported(&self) -> bool {
        !matches!(self, Self::Unknown)
    }

    /// Get display name
    pub fn display_name(&self) -> &str {
        match self {
            Self::Text => "Text File",
            Self::Pdf => "PDF",
            Self::Word => "Word Document (.docx)",
            Self::Markdown => "Markdown",
            Self::Image => "Image",
            Self::Unknown => "Unknown",
        }
    }
}

/// A document whose text has been loaded (or OCR'd)
///
/// Immutable once created; files that yield only whitespace never become a
/// `SourceDocument` in the first place.
#[derive(Debug, Clone, Serialize)]
pub struct SourceDocument {
    /// Source path, unique per run
    pub path: PathBuf,
    /// Detected format
    pub format: DocumentFormat,
    /// Extracted plain text
    pub raw_text: String,
    /// Content hash of the extracted text
    pub content_hash: String,
    /// Page count, when the format has pages
    pub pages: Option<u32>,
    /// Load timestamp
    pub loaded_at: chrono::DateTime<chrono::Utc>,
}

impl SourceDocument {
    /// Create a new document from extracted text
    pub fn new(path: PathBuf, format: DocumentFormat, raw_text: String) -> Self {
        let content_hash = hash_content(&raw_text);
        Self {
            path,
            format,
            raw_text,
            content_hash,
            pages: None,
            loaded_at: chrono::Utc::now(),
        }
    }
}

/// Hash content for deduplication and change reporting
pub fn hash_content(content: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    hex::encode(hasher.finalize())
}
