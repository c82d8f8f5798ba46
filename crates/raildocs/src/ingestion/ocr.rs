//! OCR collaborator: the injected text-recognition capability
//!
//! The loader never talks to an OCR engine directly; it goes through the
//! `TextRecognizer` trait so tests can substitute a deterministic stand-in.
//! The production implementation shells out to tesseract, with poppler's
//! pdftoppm doing PDF rasterization.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::config::OcrConfig;
use crate::error::{Error, Result};

/// Capability interface for optical character recognition
#[async_trait]
pub trait TextRecognizer: Send + Sync {
    /// OCR a single image file into plain text
    async fn recognize_image(&self, image: &Path) -> Result<String>;

    /// Rasterize a page-oriented document and OCR every page, in page order
    async fn recognize_pdf_pages(&self, pdf: &Path) -> Result<Vec<String>>;

    /// Engine name for logging
    fn name(&self) -> &str;
}

/// Tesseract-backed recognizer
pub struct TesseractOcr {
    config: OcrConfig,
}

impl TesseractOcr {
    /// Create a recognizer from OCR configuration
    pub fn new(config: OcrConfig) -> Self {
        Self { config }
    }

    fn run_tesseract(&self, image: &Path) -> Result<String> {
        let output = Command::new(&self.config.tesseract_path)
            .arg(image)
            .arg("stdout")
            .arg("-l")
            .arg(&self.config.languages)
            .output()
            .map_err(|e| Error::Ocr(format!("failed to run tesseract: {}", e)))?;

        if !output.status.success() {
            return Err(Error::Ocr(format!(
                "tesseract exited with {}: {}",
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            )));
        }

        Ok(String::from_utf8_lossy(&output.stdout).to_string())
    }

    /// Rasterize `pdf` into per-page PNGs under `out_dir`
    ///
    /// pdftoppm zero-pads page numbers, so a lexicographic sort restores
    /// page order.
    fn rasterize(&self, pdf: &Path, out_dir: &Path) -> Result<Vec<PathBuf>> {
        let prefix = out_dir.join("page");
        let output = Command::new(&self.config.pdftoppm_path)
            .arg("-png")
            .arg("-r")
            .arg(self.config.dpi.to_string())
            .arg(pdf)
            .arg(&prefix)
            .output()
            .map_err(|e| Error::Ocr(format!("failed to run pdftoppm: {}", e)))?;

        if !output.status.success() {
            return Err(Error::Ocr(format!(
                "pdftoppm exited with {}: {}",
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            )));
        }

        let mut pages: Vec<PathBuf> = std::fs::read_dir(out_dir)?
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|p| p.extension().map(|e| e == "png").unwrap_or(false))
            .collect();
        pages.sort();

        if pages.is_empty() {
            return Err(Error::Ocr(format!(
                "pdftoppm produced no pages for {}",
                pdf.display()
            )));
        }

        Ok(pages)
    }
}

#[async_trait]
impl TextRecognizer for TesseractOcr {
    async fn recognize_image(&self, image: &Path) -> Result<String> {
        self.run_tesseract(image)
    }

    async fn recognize_pdf_pages(&self, pdf: &Path) -> Result<Vec<String>> {
        let work_dir = tempfile::tempdir()
            .map_err(|e| Error::Ocr(format!("failed to create temp dir: {}", e)))?;

        let page_images = self.rasterize(pdf, work_dir.path())?;
        tracing::debug!(
            "rasterized {} into {} page(s) at {} dpi",
            pdf.display(),
            page_images.len(),
            self.config.dpi
        );

        let mut pages = Vec::with_capacity(page_images.len());
        for image in &page_images {
            pages.push(self.run_tesseract(image)?);
        }

        Ok(pages)
    }

    fn name(&self) -> &str {
        "tesseract"
    }
}
