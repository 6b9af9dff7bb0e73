use super::{LoadError, LoadedDocument, PageInfo};
use std::fs;
use std::path::Path;

/// Extracts the text of every page using pdf-extract.
fn read_pages(path: &Path) -> Result<Vec<String>, LoadError> {
    if !path.exists() {
        return Err(LoadError::FileNotFound(path.to_path_buf()));
    }

    let buffer = fs::read(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    pdf_extract::extract_text_from_mem_by_pages(&buffer)
        .map_err(|e| LoadError::PdfParse(e.to_string()))
}

/// Number of pages in the PDF at `path`.
pub fn page_count(path: &Path) -> Result<usize, LoadError> {
    read_pages(path).map(|pages| pages.len())
}

/// Loads one 0-indexed page as reading text.
///
/// Fails with `PageOutOfRange` when `page` is past the last page and with
/// `PdfParse` when the file is not a readable PDF.
pub fn load_page(path: &Path, page: usize) -> Result<LoadedDocument, LoadError> {
    let pages = read_pages(path)?;
    let total = pages.len();

    let text = pages
        .into_iter()
        .nth(page)
        .ok_or(LoadError::PageOutOfRange { page, total })?;

    tracing::info!(
        path = %path.display(),
        page,
        total,
        chars = text.len(),
        "extracted PDF page"
    );

    Ok(LoadedDocument {
        text,
        source: format!("pdf:{}#{}", path.display(), page),
        page: Some(PageInfo { index: page, total }),
    })
}

/// Text of one page, or `None` when the page is out of range or the file
/// cannot be parsed. Failures are logged, never raised.
pub fn extract_page(path: &Path, page: usize) -> Option<String> {
    match load_page(path, page) {
        Ok(doc) => Some(doc.text),
        Err(err) => {
            tracing::error!(path = %path.display(), page, %err, "PDF extraction failed");
            None
        }
    }
}
