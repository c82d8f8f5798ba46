//! Directory walker and per-file dispatch with partial-failure tolerance

use std::future::Future;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::timeout;
use walkdir::WalkDir;

use crate::config::OcrConfig;
use crate::error::{Error, Result};
use crate::types::{DocumentFormat, SourceDocument};

use super::ocr::TextRecognizer;
use super::parser::FormatParser;

/// Walks a directory tree and turns each supported file into a
/// `SourceDocument`
///
/// One bad file never aborts the run: every per-file error is caught,
/// logged with its path and cause, and the walk continues. Files whose
/// extracted text is empty after trimming are excluded.
pub struct ContentLoader {
    recognizer: Arc<dyn TextRecognizer>,
    ocr_timeout: Duration,
}

impl ContentLoader {
    /// Create a loader with an injected OCR capability
    pub fn new(recognizer: Arc<dyn TextRecognizer>, config: &OcrConfig) -> Self {
        tracing::debug!("OCR recognizer: {}", recognizer.name());
        Self {
            recognizer,
            ocr_timeout: Duration::from_secs(config.timeout_secs),
        }
    }

    /// Load every supported file under `root`, recursively
    ///
    /// Entries are visited in file-name order so the output sequence is
    /// stable within a run.
    pub async fn load(&self, root: &Path) -> Vec<SourceDocument> {
        let mut documents = Vec::new();

        for entry in WalkDir::new(root).sort_by_file_name() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    tracing::warn!("cannot walk entry under {}: {}", root.display(), e);
                    continue;
                }
            };
            if !entry.file_type().is_file() {
                continue;
            }

            let path = entry.path();
            let format = DocumentFormat::from_path(path);
            if !format.is_supported() {
                tracing::info!("skipping unsupported file type: {}", path.display());
                continue;
            }

            match self.load_file(path, format).await {
                Ok(doc) => {
                    tracing::info!(
                        "loaded {} ({}, {} chars, hash: {}...)",
                        path.display(),
                        format.display_name(),
                        doc.raw_text.len(),
                        &doc.content_hash[..12.min(doc.content_hash.len())]
                    );
                    documents.push(doc);
                }
                Err(Error::EmptyDocument(_)) => {
                    tracing::warn!("only whitespace extracted from {}, excluded", path.display());
                }
                Err(e) => {
                    tracing::error!("failed to load {}: {}", path.display(), e);
                }
            }
        }

        documents
    }

    /// Load a single file; whitespace-only content is "no document"
    async fn load_file(&self, path: &Path, format: DocumentFormat) -> Result<SourceDocument> {
        let mut pages = None;
        let text = match format {
            DocumentFormat::Text => FormatParser::parse_text(&std::fs::read(path)?)?,
            DocumentFormat::Markdown => FormatParser::parse_markdown(&std::fs::read(path)?)?,
            DocumentFormat::Word => FormatParser::parse_docx(&std::fs::read(path)?)?,
            DocumentFormat::Pdf => {
                let data = std::fs::read(path)?;
                pages = FormatParser::pdf_page_count(&data);
                self.load_pdf(path, &data).await?
            }
            DocumentFormat::Image => {
                self.with_ocr_timeout(path, self.recognizer.recognize_image(path))
                    .await?
            }
            DocumentFormat::Unknown => {
                return Err(Error::UnsupportedFileType(path.display().to_string()))
            }
        };

        if text.trim().is_empty() {
            return Err(Error::EmptyDocument(path.display().to_string()));
        }

        let mut doc = SourceDocument::new(path.to_path_buf(), format, text);
        doc.pages = pages;
        Ok(doc)
    }

    /// Embedded-text extraction first; image-only or malformed PDFs fall
    /// back to rasterize-and-OCR, pages joined in page order
    async fn load_pdf(&self, path: &Path, data: &[u8]) -> Result<String> {
        match FormatParser::parse_pdf(data) {
            Ok(text) => Ok(text),
            Err(e) => {
                tracing::warn!("falling back to OCR for {}: {}", path.display(), e);
                let pages = self
                    .with_ocr_timeout(path, self.recognizer.recognize_pdf_pages(path))
                    .await?;
                Ok(pages.join("\n"))
            }
        }
    }

    async fn with_ocr_timeout<T>(
        &self,
        path: &Path,
        fut: impl Future<Output = Result<T>>,
    ) -> Result<T> {
        match timeout(self.ocr_timeout, fut).await {
            Ok(result) => result,
            Err(_) => Err(Error::Ocr(format!(
                "timeout after {}s for {}",
                self.ocr_timeout.as_secs(),
                path.display()
            ))),
        }
    }
}
