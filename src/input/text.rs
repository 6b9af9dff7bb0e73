use super::{LoadError, LoadedDocument};
use std::io::Read;
use std::path::Path;

/// Loads a UTF-8 text file. Empty or whitespace-only files are rejected.
pub fn load(path: &Path) -> Result<LoadedDocument, LoadError> {
    if !path.exists() {
        return Err(LoadError::FileNotFound(path.to_path_buf()));
    }

    let text = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let source = format!("file:{}", path.display());
    if text.trim().is_empty() {
        return Err(LoadError::EmptyDocument(source));
    }

    tracing::info!(path = %path.display(), chars = text.len(), "loaded text file");
    Ok(LoadedDocument {
        text,
        source,
        page: None,
    })
}

/// Reads all of `reader` (typically stdin) as reading text.
pub fn from_reader<R: Read>(mut reader: R, label: &str) -> Result<LoadedDocument, LoadError> {
    let mut text = String::new();
    reader
        .read_to_string(&mut text)
        .map_err(|source| LoadError::Io {
            path: label.into(),
            source,
        })?;

    Ok(LoadedDocument {
        text,
        source: label.to_string(),
        page: None,
    })
}
