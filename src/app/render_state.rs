use crate::app::app::StatusMessage;
use crate::app::mode::AppMode;
use crate::engine::{DisplayStyle, ReadingConfig};
use crate::input::PageInfo;

/// Render state for UI components
#[derive(Debug, Clone)]
pub struct RenderState {
    pub mode: AppMode,
    /// Sliding window shown this step: previous chunk and current chunk.
    pub window: Option<String>,
    pub progress: (usize, usize),
    pub reading: ReadingConfig,
    /// Passed through to the display unchanged.
    pub style: DisplayStyle,
    pub source: Option<String>,
    pub page: Option<PageInfo>,
    /// Page requested for the next PDF load
    pub page_setting: usize,
    pub preview: Option<String>,
    pub word_count: usize,
    pub status: Option<StatusMessage>,
    pub show_help: bool,
}

impl RenderState {
    /// Create an empty render state for when no document is loaded
    pub fn empty(mode: AppMode, reading: ReadingConfig, style: DisplayStyle) -> Self {
        Self {
            mode,
            window: None,
            progress: (0, 0),
            reading,
            style,
            source: None,
            page: None,
            page_setting: 0,
            preview: None,
            word_count: 0,
            status: None,
            show_help: false,
        }
    }
}
