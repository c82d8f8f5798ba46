//! Configuration for the document pipeline
//!
//! All collaborator knobs (OCR binary paths, language packs, LLM endpoint)
//! are explicit configuration values handed to the components at
//! construction, never process-wide state, so tests can inject fakes.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Main pipeline configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// OCR engine configuration (tesseract + pdftoppm)
    #[serde(default)]
    pub ocr: OcrConfig,
    /// Ollama/LLM configuration for decision rationales
    #[serde(default)]
    pub llm: LlmConfig,
    /// Field extraction configuration
    #[serde(default)]
    pub extraction: ExtractionConfig,
    /// Per-document processing configuration
    #[serde(default)]
    pub processing: ProcessingConfig,
}

impl PipelineConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        toml::from_str(&raw).map_err(|e| Error::Config(e.to_string()))
    }
}

/// OCR engine configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OcrConfig {
    /// Path to the tesseract binary
    #[serde(default = "default_tesseract_path")]
    pub tesseract_path: PathBuf,
    /// Path to the pdftoppm binary (poppler-utils), used to rasterize PDFs
    #[serde(default = "default_pdftoppm_path")]
    pub pdftoppm_path: PathBuf,
    /// Tesseract language pack(s), e.g. "eng+mal" for English plus Malayalam
    #[serde(default = "default_ocr_languages")]
    pub languages: String,
    /// Rasterization resolution in DPI (minimum 300 for usable OCR)
    #[serde(default = "default_ocr_dpi")]
    pub dpi: u32,
    /// Timeout for OCR-ing a single document in seconds
    #[serde(default = "default_ocr_timeout")]
    pub timeout_secs: u64,
}

fn default_tesseract_path() -> PathBuf {
    PathBuf::from("tesseract")
}
fn default_pdftoppm_path() -> PathBuf {
    PathBuf::from("pdftoppm")
}
fn default_ocr_languages() -> String {
    "eng+mal".to_string()
}
fn default_ocr_dpi() -> u32 {
    300
}
fn default_ocr_timeout() -> u64 {
    120
}

impl Default for OcrConfig {
    fn default() -> Self {
        Self {
            tesseract_path: default_tesseract_path(),
            pdftoppm_path: default_pdftoppm_path(),
            languages: default_ocr_languages(),
            dpi: default_ocr_dpi(),
            timeout_secs: default_ocr_timeout(),
        }
    }
}

/// LLM (Ollama) configuration for the rationale provider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    /// Consult the rationale provider at all (the deterministic decision is
    /// always computed regardless)
    #[serde(default)]
    pub enabled: bool,
    /// Ollama base URL
    pub base_url: String,
    /// Generation model name
    pub model: String,
    /// Temperature for generation
    pub temperature: f32,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Number of retries for failed requests
    pub max_retries: u32,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            base_url: "http://localhost:11434".to_string(),
            model: "phi3".to_string(), // Fast 3.8B model for CPU
            temperature: 0.2,          // Lower for more factual rationales
            timeout_secs: 60,
            max_retries: 2,
        }
    }
}

/// Field extraction configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionConfig {
    /// Require vendor phrases to end in a business-suffix token
    /// (Pvt Ltd, Ltd, Contractors, Enterprises, Services, Industries)
    #[serde(default = "default_strict_vendor")]
    pub strict_vendor: bool,
}

fn default_strict_vendor() -> bool {
    true
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            strict_vendor: true,
        }
    }
}

/// Per-document processing configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessingConfig {
    /// Number of parallel document workers (default: CPU count, max 8)
    pub parallel_files: Option<usize>,
    /// Timeout for processing a single document in seconds
    #[serde(default = "default_file_timeout")]
    pub file_timeout_secs: u64,
}

fn default_file_timeout() -> u64 {
    120
}

impl Default for ProcessingConfig {
    fn default() -> Self {
        Self {
            parallel_files: None, // Auto-detect from CPU count
            file_timeout_secs: default_file_timeout(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PipelineConfig::default();
        assert_eq!(config.ocr.languages, "eng+mal");
        assert_eq!(config.ocr.dpi, 300);
        assert!(config.extraction.strict_vendor);
        assert!(!config.llm.enabled);
    }

    #[test]
    fn test_partial_toml() {
        let config: PipelineConfig = toml::from_str(
            r#"
            [ocr]
            languages = "eng"

            [llm]
            enabled = true
            base_url = "http://localhost:11434"
            model = "llama3.2:3b"
            temperature = 0.3
            timeout_secs = 30
            max_retries = 1
            "#,
        )
        .unwrap();
        assert_eq!(config.ocr.languages, "eng");
        assert_eq!(config.ocr.dpi, 300); // untouched default
        assert!(config.llm.enabled);
        assert_eq!(config.llm.model, "llama3.2:3b");
    }
}
