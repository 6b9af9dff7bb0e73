use crate::engine::{HexColor, SplitMode};

/// Application events
#[derive(Debug, PartialEq, Clone)]
pub enum AppEvent {
    LoadFile(String),
    LoadClipboard,
    SetText(String),
    SetPage(usize),
    SetWpm(u32),
    AdjustWpm(i32),
    SetChunkSize(usize),
    SetSplit(SplitMode),
    SetFontSize(u16),
    SetTextColor(HexColor),
    SetBackgroundColor(HexColor),
    StartReading,
    StopReading,
    Quit,
    Help,
    InvalidCommand(String),
    None,
}
