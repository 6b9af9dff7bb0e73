use super::{LoadError, LoadedDocument};

/// Reads the system clipboard as reading text.
pub fn load() -> Result<LoadedDocument, LoadError> {
    let mut clipboard =
        arboard::Clipboard::new().map_err(|e| LoadError::Clipboard(e.to_string()))?;
    let text = clipboard
        .get_text()
        .map_err(|e| LoadError::Clipboard(e.to_string()))?;

    if text.trim().is_empty() {
        return Err(LoadError::EmptyDocument("clipboard".to_string()));
    }

    tracing::info!(chars = text.len(), "loaded clipboard text");
    Ok(LoadedDocument {
        text,
        source: "clipboard".to_string(),
        page: None,
    })
}
