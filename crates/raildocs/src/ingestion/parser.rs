//! Per-format text extraction

use pulldown_cmark::{Event, Parser, TagEnd};

use crate::error::{Error, Result};

/// Format-specific text extractors
///
/// Each returns the document's plain text or an error; the loader decides
/// what a failure means (skip, or OCR fallback for PDFs).
pub struct FormatParser;

impl FormatParser {
    /// Plain text read (lossy UTF-8, OCR'd scans often carry stray bytes)
    pub fn parse_text(data: &[u8]) -> Result<String> {
        Ok(String::from_utf8_lossy(data).to_string())
    }

    /// Extract embedded text from a PDF
    ///
    /// Errors when the PDF is malformed or carries no extractable text
    /// (image-only scan); the caller treats either as the OCR-fallback
    /// trigger.
    pub fn parse_pdf(data: &[u8]) -> Result<String> {
        let content = pdf_extract::extract_text_from_mem(data)
            .map_err(|e| Error::file_parse("document.pdf", e.to_string()))?;

        let content = content
            .replace('\0', "")
            .lines()
            .map(|l| l.trim())
            .filter(|l| !l.is_empty())
            .collect::<Vec<_>>()
            .join("\n");

        if content.trim().is_empty() {
            return Err(Error::file_parse(
                "document.pdf",
                "no text content could be extracted, PDF may be image-based",
            ));
        }

        Ok(content)
    }

    /// Count PDF pages without full parsing
    pub fn pdf_page_count(data: &[u8]) -> Option<u32> {
        lopdf::Document::load_mem(data)
            .ok()
            .map(|doc| doc.get_pages().len() as u32)
    }

    /// Extract text from a Word document (.docx)
    pub fn parse_docx(data: &[u8]) -> Result<String> {
        let doc = docx_rs::read_docx(data)
            .map_err(|e| Error::file_parse("document.docx", e.to_string()))?;

        let mut content = String::new();
        for child in doc.document.children {
            if let docx_rs::DocumentChild::Paragraph(p) = child {
                for child in p.children {
                    if let docx_rs::ParagraphChild::Run(run) = child {
                        for child in run.children {
                            if let docx_rs::RunChild::Text(t) = child {
                                content.push_str(&t.text);
                            }
                        }
                    }
                }
                content.push('\n');
            }
        }

        Ok(content)
    }

    /// Markdown-aware text extraction: renders to the visible text only
    pub fn parse_markdown(data: &[u8]) -> Result<String> {
        let raw = String::from_utf8_lossy(data);
        let mut content = String::new();

        for event in Parser::new(&raw) {
            match event {
                Event::Text(t) | Event::Code(t) => content.push_str(&t),
                Event::SoftBreak | Event::HardBreak => content.push('\n'),
                Event::End(TagEnd::Paragraph | TagEnd::Heading(_) | TagEnd::Item) => {
                    content.push('\n')
                }
                _ => {}
            }
        }

        Ok(content)
    }
}
