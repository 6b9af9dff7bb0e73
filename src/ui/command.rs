//! Command parsing for the TUI command deck
//!
//! Parses user input on the idle screen, supporting:
//! - `:q` or `:quit` → Quit
//! - `:h` or `:help` → Help
//! - `:s` or `:start` → Start reading
//! - `:wpm N`, `:chunk N`, `:font N`, `:page N` → numeric settings
//! - `:split words|sentences|paragraphs` → split mode
//! - `:fg #RRGGBB`, `:bg #RRGGBB` → colors
//! - `@path` → load a text or PDF file
//! - `@@` → load clipboard
//! - anything else → typed reading text

use crate::app::AppEvent;
use crate::engine::{HexColor, SplitMode};

/// Commands that can be parsed from command deck input
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Quit,
    Help,
    Start,
    Wpm(u32),
    Chunk(usize),
    Split(SplitMode),
    Font(u16),
    TextColor(HexColor),
    BackgroundColor(HexColor),
    Page(usize),
    LoadFile(String),
    LoadClipboard,
    Text(String),
    Unknown(String),
}

/// Parse command deck input string into a Command
pub fn parse_command(input: &str) -> Command {
    let input = input.trim();

    if input.is_empty() {
        return Command::Unknown(input.to_string());
    }

    if let Some(cmd) = input.strip_prefix(':') {
        let mut parts = cmd.split_whitespace();
        let name = parts.next().unwrap_or_default();
        let arg = parts.next();
        if parts.next().is_some() {
            return Command::Unknown(input.to_string());
        }

        let parsed = match (name, arg) {
            ("q" | "quit", None) => Some(Command::Quit),
            ("h" | "help", None) => Some(Command::Help),
            ("s" | "start", None) => Some(Command::Start),
            ("wpm", Some(v)) => v.parse().ok().map(Command::Wpm),
            ("chunk", Some(v)) => v.parse().ok().map(Command::Chunk),
            ("font", Some(v)) => v.parse().ok().map(Command::Font),
            ("page", Some(v)) => v.parse().ok().map(Command::Page),
            ("split", Some(v)) => v.parse().ok().map(Command::Split),
            ("fg", Some(v)) => v.parse().ok().map(Command::TextColor),
            ("bg", Some(v)) => v.parse().ok().map(Command::BackgroundColor),
            _ => None,
        };
        parsed.unwrap_or_else(|| Command::Unknown(input.to_string()))
    } else if let Some(rest) = input.strip_prefix('@') {
        let filename = rest.trim();
        if filename.is_empty() || filename == "@" {
            Command::LoadClipboard
        } else {
            Command::LoadFile(filename.to_string())
        }
    } else {
        Command::Text(input.to_string())
    }
}

/// Convert a parsed command into an AppEvent
///
/// This is the translation layer between command deck input and App core.
pub fn command_to_app_event(command: Command) -> AppEvent {
    match command {
        Command::Quit => AppEvent::Quit,
        Command::Help => AppEvent::Help,
        Command::Start => AppEvent::StartReading,
        Command::Wpm(wpm) => AppEvent::SetWpm(wpm),
        Command::Chunk(words) => AppEvent::SetChunkSize(words),
        Command::Split(split) => AppEvent::SetSplit(split),
        Command::Font(size) => AppEvent::SetFontSize(size),
        Command::TextColor(color) => AppEvent::SetTextColor(color),
        Command::BackgroundColor(color) => AppEvent::SetBackgroundColor(color),
        Command::Page(page) => AppEvent::SetPage(page),
        Command::LoadFile(path) => AppEvent::LoadFile(path),
        Command::LoadClipboard => AppEvent::LoadClipboard,
        Command::Text(text) => AppEvent::SetText(text),
        Command::Unknown(input) => AppEvent::InvalidCommand(input),
    }
}
