use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

/// Turns a document on disk into one text blob.
pub trait TextExtractor {
    fn extract_text(&self, path: &Path) -> Result<String>;
}

/// Reads plain-text documents directly and decodes everything else as PDF.
#[derive(Debug, Clone, Default)]
pub struct DocumentExtractor;

impl DocumentExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl TextExtractor for DocumentExtractor {
    fn extract_text(&self, path: &Path) -> Result<String> {
        if !path.exists() {
            return Err(Error::MissingInput(path.to_path_buf()));
        }
        if !path.is_file() {
            return Err(Error::Extraction(format!(
                "{} is not a regular file",
                path.display()
            )));
        }

        let text = match DocumentFormat::detect(path) {
            DocumentFormat::PlainText => {
                let bytes = fs::read(path)?;
                String::from_utf8(bytes).map_err(|e| {
                    Error::Extraction(format!("{} is not valid UTF-8: {}", path.display(), e))
                })?
            }
            DocumentFormat::Pdf => pdf_extract::extract_text(path)
                .map_err(|e| Error::Extraction(format!("{}: {}", path.display(), e)))?,
        };

        tracing::info!(
            "Extracted {} characters from {}",
            text.chars().count(),
            path.display()
        );
        Ok(text)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DocumentFormat {
    Pdf,
    PlainText,
}

impl DocumentFormat {
    fn detect(path: &Path) -> Self {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();
        match ext.as_str() {
            "txt" | "text" | "md" | "markdown" => DocumentFormat::PlainText,
            _ => DocumentFormat::Pdf,
        }
    }
}
