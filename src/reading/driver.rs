use super::session::ReadingSession;
use std::io::{self, Write};
use std::time::Duration;

/// Line-oriented display loop: prints each sliding window on its own line and
/// blocks for the pacer delay before moving on.
pub struct PlainDriver<W, S = fn(Duration)> {
    out: W,
    sleep: S,
}

impl<W: Write> PlainDriver<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            sleep: std::thread::sleep,
        }
    }
}

impl<W: Write, S: FnMut(Duration)> PlainDriver<W, S> {
    /// Uses `sleep` instead of blocking the thread; handy for tests.
    pub fn with_sleeper(out: W, sleep: S) -> Self {
        Self { out, sleep }
    }

    /// Shows every remaining step of `session`. Returns the number of steps shown.
    pub fn run(&mut self, session: &mut ReadingSession) -> io::Result<usize> {
        if session.is_empty() {
            return Ok(0);
        }

        tracing::info!(
            chunks = session.len(),
            wpm = session.wpm(),
            total_ms = session.total_duration().as_millis() as u64,
            "starting plain reading run"
        );

        let mut shown = 0;
        loop {
            if let Some(window) = session.current_window() {
                writeln!(self.out, "{}", window)?;
                self.out.flush()?;
                shown += 1;
            }

            let delay = session.current_delay();
            tracing::debug!(step = session.current_index(), delay_ms = delay.as_millis() as u64, "step");
            (self.sleep)(delay);

            if !session.advance() {
                break;
            }
        }

        tracing::info!(steps = shown, "plain reading run finished");
        Ok(shown)
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::config::{ReadingConfig, SplitMode};

    #[test]
    fn test_run_prints_windows_and_sleeps() {
        let config = ReadingConfig {
            wpm: 300,
            words_per_chunk: 2,
            split: SplitMode::Words,
        };
        let mut session = ReadingSession::from_text("the quick brown fox jumps", &config).unwrap();

        let mut delays = Vec::new();
        let mut driver = PlainDriver::with_sleeper(Vec::<u8>::new(), |d: Duration| delays.push(d));
        let shown = driver.run(&mut session).unwrap();
        let output = String::from_utf8(driver.into_inner()).unwrap();

        assert_eq!(shown, 3);
        assert_eq!(
            output,
            "the quick\nthe quick brown fox\nbrown fox jumps\n"
        );
        assert_eq!(delays.len(), 3);
        assert!(delays.iter().all(|d| d.as_millis() == 400));
    }

    #[test]
    fn test_run_empty_session_shows_nothing() {
        let mut session = ReadingSession::from_text("", &ReadingConfig::default()).unwrap();
        let mut slept = false;
        let mut driver = PlainDriver::with_sleeper(Vec::<u8>::new(), |_| slept = true);
        assert_eq!(driver.run(&mut session).unwrap(), 0);
        assert!(driver.into_inner().is_empty());
        assert!(!slept);
    }
}
