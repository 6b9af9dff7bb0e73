use super::chunk::Chunk;
use super::chunker::chunk_text;
use super::pacer::{Pacer, PacingMode};
use crate::engine::config::ReadingConfig;
use crate::engine::error::ReadingError;
use std::time::Duration;

/// Chunk sequence for one "start reading" action plus the display cursor.
///
/// Each step shows a two-chunk sliding window: the previous chunk followed by
/// the current one (just the first chunk at step 0).
#[derive(Debug, Clone)]
pub struct ReadingSession {
    chunks: Vec<Chunk>,
    current_index: usize,
    pacer: Pacer,
    wpm: u32,
}

impl ReadingSession {
    pub fn new(chunks: Vec<Chunk>, config: &ReadingConfig) -> Result<Self, ReadingError> {
        let pacer = Pacer::new(
            config.wpm,
            config.split.pacing_mode(),
            config.words_per_chunk,
        )?;
        Ok(Self {
            chunks,
            current_index: 0,
            pacer,
            wpm: config.wpm,
        })
    }

    /// Chunks `text` with the configured split mode and prepares pacing.
    pub fn from_text(text: &str, config: &ReadingConfig) -> Result<Self, ReadingError> {
        let chunks = chunk_text(text, config.words_per_chunk, config.split.separator())?;
        Self::new(chunks, config)
    }

    pub fn chunks(&self) -> &[Chunk] {
        &self.chunks
    }

    pub fn chunk(&self, index: usize) -> Option<&Chunk> {
        self.chunks.get(index)
    }

    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn current_chunk(&self) -> Option<&Chunk> {
        self.chunks.get(self.current_index)
    }

    pub fn wpm(&self) -> u32 {
        self.wpm
    }

    pub fn pacing_mode(&self) -> PacingMode {
        self.pacer.mode()
    }

    /// Text displayed at step `index`.
    pub fn window_at(&self, index: usize) -> Option<String> {
        let current = self.chunks.get(index)?;
        match index.checked_sub(1).and_then(|prev| self.chunks.get(prev)) {
            Some(previous) => Some(format!("{} {}", previous.text, current.text)),
            None => Some(current.text.clone()),
        }
    }

    pub fn current_window(&self) -> Option<String> {
        self.window_at(self.current_index)
    }

    pub fn delay_at(&self, index: usize) -> Option<Duration> {
        self.chunks.get(index).map(|chunk| self.pacer.delay(chunk))
    }

    /// How long the current window stays up before the next step.
    pub fn current_delay(&self) -> Duration {
        self.delay_at(self.current_index).unwrap_or_default()
    }

    /// Total time the whole run takes.
    pub fn total_duration(&self) -> Duration {
        self.chunks.iter().map(|chunk| self.pacer.delay(chunk)).sum()
    }

    /// Moves to the next step. Returns false once the last chunk has been shown.
    pub fn advance(&mut self) -> bool {
        if self.current_index + 1 < self.chunks.len() {
            self.current_index += 1;
            true
        } else {
            false
        }
    }

    /// `(steps shown so far, total steps)`.
    pub fn progress(&self) -> (usize, usize) {
        if self.chunks.is_empty() {
            (0, 0)
        } else {
            (self.current_index + 1, self.chunks.len())
        }
    }

    pub fn is_last(&self) -> bool {
        self.current_index + 1 >= self.chunks.len()
    }
}
