// Reader settings with the ranges exposed in the settings panel.
// Defaults: 300 WPM, 2 words per chunk, 30px font, black on white.

use super::error::ConfigError;
use crate::reading::PacingMode;
use serde::Deserialize;
use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

pub const WPM_RANGE: RangeInclusive<u32> = 100..=1000;
pub const WPM_STEP: u32 = 50;
pub const WORDS_PER_CHUNK_RANGE: RangeInclusive<usize> = 1..=5;
pub const FONT_SIZE_RANGE: RangeInclusive<u16> = 20..=60;

fn check_range(field: &'static str, value: u64, min: u64, max: u64) -> Result<(), ConfigError> {
    if value < min || value > max {
        return Err(ConfigError::OutOfRange {
            field,
            value,
            min,
            max,
        });
    }
    Ok(())
}

fn check_wpm(wpm: u32) -> Result<(), ConfigError> {
    check_range(
        "wpm",
        u64::from(wpm),
        u64::from(*WPM_RANGE.start()),
        u64::from(*WPM_RANGE.end()),
    )
}

fn check_words_per_chunk(words: usize) -> Result<(), ConfigError> {
    check_range(
        "words per chunk",
        words as u64,
        *WORDS_PER_CHUNK_RANGE.start() as u64,
        *WORDS_PER_CHUNK_RANGE.end() as u64,
    )
}

fn check_font_size(size: u16) -> Result<(), ConfigError> {
    check_range(
        "font size",
        u64::from(size),
        u64::from(*FONT_SIZE_RANGE.start()),
        u64::from(*FONT_SIZE_RANGE.end()),
    )
}

/// How source text is cut into chunks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SplitMode {
    #[default]
    Words,
    Sentences,
    Paragraphs,
}

impl SplitMode {
    pub const ALL: [SplitMode; 3] = [SplitMode::Words, SplitMode::Sentences, SplitMode::Paragraphs];

    pub fn separator(self) -> Option<&'static str> {
        match self {
            SplitMode::Words => None,
            SplitMode::Sentences => Some("."),
            SplitMode::Paragraphs => Some("\n"),
        }
    }

    pub fn pacing_mode(self) -> PacingMode {
        PacingMode::for_separator(self.separator())
    }

    pub fn label(self) -> &'static str {
        match self {
            SplitMode::Words => "Words",
            SplitMode::Sentences => "Sentences (.)",
            SplitMode::Paragraphs => "Paragraphs (\\n)",
        }
    }
}

impl fmt::Display for SplitMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SplitMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "words" | "word" | "none" => Ok(SplitMode::Words),
            "sentences" | "sentence" | "." => Ok(SplitMode::Sentences),
            "paragraphs" | "paragraph" | "newline" | "\\n" => Ok(SplitMode::Paragraphs),
            _ => Err(ConfigError::UnknownSplitMode(s.to_string())),
        }
    }
}

/// Chunking and pacing settings for one reading run.
#[derive(Debug, Clone, PartialEq)]
pub struct ReadingConfig {
    /// Words per minute (100..=1000)
    pub wpm: u32,

    /// Words per chunk in word mode, word budget per chunk in separator modes (1..=5)
    pub words_per_chunk: usize,

    pub split: SplitMode,
}

impl Default for ReadingConfig {
    fn default() -> Self {
        Self {
            wpm: 300,
            words_per_chunk: 2,
            split: SplitMode::Words,
        }
    }
}

impl ReadingConfig {
    pub fn set_wpm(&mut self, wpm: u32) -> Result<(), ConfigError> {
        check_wpm(wpm)?;
        self.wpm = wpm;
        Ok(())
    }

    pub fn set_words_per_chunk(&mut self, words: usize) -> Result<(), ConfigError> {
        check_words_per_chunk(words)?;
        self.words_per_chunk = words;
        Ok(())
    }

    /// Steps the pace by `delta` WPM, clamped to the allowed range.
    pub fn adjust_wpm(&mut self, delta: i32) {
        let new_wpm = self.wpm as i64 + i64::from(delta);
        self.wpm = new_wpm.clamp(
            i64::from(*WPM_RANGE.start()),
            i64::from(*WPM_RANGE.end()),
        ) as u32;
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        check_wpm(self.wpm)?;
        check_words_per_chunk(self.words_per_chunk)
    }
}

/// A `#RRGGBB` color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HexColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl HexColor {
    pub const BLACK: HexColor = HexColor { r: 0, g: 0, b: 0 };
    pub const WHITE: HexColor = HexColor {
        r: 0xFF,
        g: 0xFF,
        b: 0xFF,
    };
}

impl FromStr for HexColor {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ConfigError::InvalidColor(s.to_string());
        let hex = s.trim().strip_prefix('#').ok_or_else(invalid)?;
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
        Ok(HexColor {
            r: channel(0)?,
            g: channel(2)?,
            b: channel(4)?,
        })
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// Styling handed to the display unchanged. Not used by chunking or pacing.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayStyle {
    /// Font size in px (20..=60)
    pub font_size: u16,
    pub text_color: HexColor,
    pub background_color: HexColor,
}

impl Default for DisplayStyle {
    fn default() -> Self {
        Self {
            font_size: 30,
            text_color: HexColor::BLACK,
            background_color: HexColor::WHITE,
        }
    }
}

impl DisplayStyle {
    pub fn set_font_size(&mut self, size: u16) -> Result<(), ConfigError> {
        check_font_size(size)?;
        self.font_size = size;
        Ok(())
    }
}

/// Master configuration combining reading and display settings
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Config {
    pub reading: ReadingConfig,
    pub display: DisplayStyle,
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.reading.validate()?;
        check_font_size(self.display.font_size)
    }
}
