use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("PDF parse error: {0}")]
    PdfParse(String),

    #[error("Page {page} is out of range (document has {total} pages)")]
    PageOutOfRange { page: usize, total: usize },

    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    #[error("Could not read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("No text found in {0}")]
    EmptyDocument(String),
}

/// Position of an extracted page within its PDF.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageInfo {
    /// 0-indexed page number
    pub index: usize,
    pub total: usize,
}

/// Source text for one reading run, tagged with where it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedDocument {
    pub text: String,
    pub source: String,
    pub page: Option<PageInfo>,
}

impl LoadedDocument {
    /// Text entered directly by the user.
    pub fn typed(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            source: "text".to_string(),
            page: None,
        }
    }

    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    pub fn word_count(&self) -> usize {
        crate::reading::count_words(&self.text)
    }
}

pub fn is_pdf(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map_or(false, |ext| ext.eq_ignore_ascii_case("pdf"))
}

/// Loads `path` by extension: one page of a PDF, otherwise a UTF-8 text file.
pub fn load_path(path: &Path, page: usize) -> Result<LoadedDocument, LoadError> {
    if is_pdf(path) {
        pdf::load_page(path, page)
    } else {
        text::load(path)
    }
}

pub mod clipboard;
pub mod pdf;
pub mod text;
