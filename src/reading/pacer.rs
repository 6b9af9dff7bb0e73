use super::chunk::Chunk;
use crate::engine::error::PaceError;
use std::time::Duration;

/// How the delay after a chunk is scaled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PacingMode {
    /// Every chunk waits for the configured chunk size, including a short
    /// final chunk.
    Word,
    /// Every chunk waits for its own word count.
    Separator,
}

impl PacingMode {
    pub fn for_separator(separator: Option<&str>) -> Self {
        match separator {
            Some(sep) if !sep.is_empty() => PacingMode::Separator,
            _ => PacingMode::Word,
        }
    }
}

/// Seconds spent on each word at the given pace.
pub fn seconds_per_word(wpm: u32) -> Result<f64, PaceError> {
    if wpm == 0 {
        return Err(PaceError::ZeroWpm);
    }
    Ok(60.0 / f64::from(wpm))
}

/// Milliseconds per word, rounded rather than truncated (165 WPM is 364ms).
pub fn wpm_to_milliseconds(wpm: u32) -> u64 {
    (60_000.0 / f64::from(wpm.max(1))).round() as u64
}

/// Delay before the chunk after `chunk` is shown.
pub fn chunk_delay(
    wpm: u32,
    chunk: &Chunk,
    mode: PacingMode,
    words_per_chunk: usize,
) -> Result<Duration, PaceError> {
    Ok(Pacer::new(wpm, mode, words_per_chunk)?.delay(chunk))
}

/// Pre-validated pacing parameters for one reading run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pacer {
    seconds_per_word: f64,
    mode: PacingMode,
    words_per_chunk: usize,
}

impl Pacer {
    pub fn new(wpm: u32, mode: PacingMode, words_per_chunk: usize) -> Result<Self, PaceError> {
        Ok(Self {
            seconds_per_word: seconds_per_word(wpm)?,
            mode,
            words_per_chunk,
        })
    }

    pub fn mode(&self) -> PacingMode {
        self.mode
    }

    pub fn delay(&self, chunk: &Chunk) -> Duration {
        let words = match self.mode {
            PacingMode::Word => self.words_per_chunk,
            PacingMode::Separator => chunk.word_count,
        };
        Duration::from_secs_f64(self.seconds_per_word * words as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_secs(actual: Duration, expected: f64) {
        assert!(
            (actual.as_secs_f64() - expected).abs() < 1e-6,
            "expected {}s, got {:?}",
            expected,
            actual
        );
    }

    #[test]
    fn test_seconds_per_word_300() {
        assert!((seconds_per_word(300).unwrap() - 0.2).abs() < 1e-12);
    }

    #[test]
    fn test_seconds_per_word_zero_rejected() {
        assert!(matches!(seconds_per_word(0), Err(PaceError::ZeroWpm)));
        let chunk = Chunk::from_text("hello");
        assert!(chunk_delay(0, &chunk, PacingMode::Word, 1).is_err());
    }

    #[test]
    fn test_wpm_to_milliseconds_rounds() {
        assert_eq!(wpm_to_milliseconds(300), 200);
        assert_eq!(wpm_to_milliseconds(350), 171);
        assert_eq!(wpm_to_milliseconds(165), 364);
    }

    #[test]
    fn test_word_mode_uses_configured_size() {
        let full = Chunk::from_text("the quick");
        let short = Chunk::from_text("jumps");
        assert_secs(chunk_delay(300, &full, PacingMode::Word, 2).unwrap(), 0.4);
        assert_secs(chunk_delay(300, &short, PacingMode::Word, 2).unwrap(), 0.4);
    }

    #[test]
    fn test_separator_mode_uses_actual_size() {
        let chunk = Chunk::from_text("three whole words");
        assert_secs(
            chunk_delay(300, &chunk, PacingMode::Separator, 2).unwrap(),
            0.6,
        );
    }

    #[test]
    fn test_separator_mode_counts_joined_units_as_one_word() {
        let chunk = Chunk::from_text("One.Two");
        assert_secs(
            chunk_delay(300, &chunk, PacingMode::Separator, 2).unwrap(),
            0.2,
        );
    }

    #[test]
    fn test_empty_chunk_has_zero_delay_in_separator_mode() {
        let chunk = Chunk::new("", 0);
        let pacer = Pacer::new(300, PacingMode::Separator, 3).unwrap();
        assert_eq!(pacer.delay(&chunk), Duration::ZERO);
    }

    #[test]
    fn test_pacing_mode_for_separator() {
        assert_eq!(PacingMode::for_separator(None), PacingMode::Word);
        assert_eq!(PacingMode::for_separator(Some("")), PacingMode::Word);
        assert_eq!(PacingMode::for_separator(Some(".")), PacingMode::Separator);
        assert_eq!(PacingMode::for_separator(Some("\n")), PacingMode::Separator);
    }
}
