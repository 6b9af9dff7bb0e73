use super::event::AppEvent;
use super::mode::AppMode;
use super::render_state::RenderState;
use crate::engine::{Config, ConfigError};
use crate::input::{self, LoadError, LoadedDocument};
use crate::reading::ReadingSession;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const EMPTY_TEXT_WARNING: &str = "Please enter some text or load a PDF file!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warning,
    Error,
}

/// One-line message shown under the command deck.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub level: StatusLevel,
    pub text: String,
}

impl StatusMessage {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            level: StatusLevel::Info,
            text: text.into(),
        }
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self {
            level: StatusLevel::Warning,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            level: StatusLevel::Error,
            text: text.into(),
        }
    }
}

pub struct App {
    mode: AppMode,
    config: Config,
    document: Option<LoadedDocument>,
    pdf_path: Option<PathBuf>,
    page: usize,
    session: Option<ReadingSession>,
    status: Option<StatusMessage>,
    show_help: bool,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    pub fn with_config(config: Config) -> Self {
        Self {
            mode: AppMode::Idle,
            config,
            document: None,
            pdf_path: None,
            page: 0,
            session: None,
            status: None,
            show_help: false,
        }
    }

    pub fn mode(&self) -> AppMode {
        self.mode
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn document(&self) -> Option<&LoadedDocument> {
        self.document.as_ref()
    }

    pub fn session(&self) -> Option<&ReadingSession> {
        self.session.as_ref()
    }

    pub fn status(&self) -> Option<&StatusMessage> {
        self.status.as_ref()
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn handle_event(&mut self, event: AppEvent) {
        if self.mode == AppMode::Running
            && !matches!(event, AppEvent::StopReading | AppEvent::Quit | AppEvent::None)
        {
            self.status = Some(StatusMessage::warning(
                "Settings cannot change while reading",
            ));
            return;
        }

        match event {
            AppEvent::LoadFile(path) => self.load_file(Path::new(&path)),
            AppEvent::LoadClipboard => {
                self.pdf_path = None;
                self.apply_load(input::clipboard::load());
            }
            AppEvent::SetText(text) => {
                self.pdf_path = None;
                self.set_document(LoadedDocument::typed(text));
            }
            AppEvent::SetPage(page) => self.set_page(page),
            AppEvent::SetWpm(wpm) => self.apply_setting(
                |c| c.reading.set_wpm(wpm),
                format!("Reading speed set to {} WPM", wpm),
            ),
            AppEvent::AdjustWpm(delta) => {
                self.config.reading.adjust_wpm(delta);
                self.status = Some(StatusMessage::info(format!(
                    "Reading speed set to {} WPM",
                    self.config.reading.wpm
                )));
            }
            AppEvent::SetChunkSize(words) => self.apply_setting(
                |c| c.reading.set_words_per_chunk(words),
                format!("Words per chunk set to {}", words),
            ),
            AppEvent::SetSplit(split) => self.apply_setting(
                |c| {
                    c.reading.split = split;
                    Ok(())
                },
                format!("Split by {}", split),
            ),
            AppEvent::SetFontSize(size) => self.apply_setting(
                |c| c.display.set_font_size(size),
                format!("Font size set to {}", size),
            ),
            AppEvent::SetTextColor(color) => self.apply_setting(
                |c| {
                    c.display.text_color = color;
                    Ok(())
                },
                format!("Text color set to {}", color),
            ),
            AppEvent::SetBackgroundColor(color) => self.apply_setting(
                |c| {
                    c.display.background_color = color;
                    Ok(())
                },
                format!("Background color set to {}", color),
            ),
            AppEvent::StartReading => self.start_reading(),
            AppEvent::StopReading => self.stop_reading(),
            AppEvent::Quit => {
                self.session = None;
                self.mode = AppMode::Quit;
            }
            AppEvent::Help => self.show_help = !self.show_help,
            AppEvent::InvalidCommand(input) => {
                if !input.is_empty() {
                    self.status = Some(StatusMessage::error(format!(
                        "Unknown command: {} (type :h for help)",
                        input
                    )));
                }
            }
            AppEvent::None => {}
        }
    }

    fn apply_setting<F>(&mut self, update: F, done: String)
    where
        F: FnOnce(&mut Config) -> Result<(), ConfigError>,
    {
        match update(&mut self.config) {
            Ok(()) => {
                tracing::debug!(setting = %done, "setting changed");
                self.status = Some(StatusMessage::info(done));
            }
            Err(err) => {
                tracing::warn!(%err, "rejected setting");
                self.status = Some(StatusMessage::error(err.to_string()));
            }
        }
    }

    fn load_file(&mut self, path: &Path) {
        self.pdf_path = input::is_pdf(path).then(|| path.to_path_buf());
        self.apply_load(input::load_path(path, self.page));
    }

    fn set_page(&mut self, page: usize) {
        self.page = page;
        match self.pdf_path.clone() {
            Some(path) => self.apply_load(input::pdf::load_page(&path, page)),
            None => {
                self.status = Some(StatusMessage::info(format!(
                    "Page {} will be used for the next PDF",
                    page
                )))
            }
        }
    }

    /// Installs a load result. A failed load leaves the app with no text.
    pub fn apply_load(&mut self, result: Result<LoadedDocument, LoadError>) {
        match result {
            Ok(doc) => self.set_document(doc),
            Err(err) => {
                tracing::warn!(%err, "load failed");
                self.document = None;
                self.status = Some(StatusMessage::error(err.to_string()));
            }
        }
    }

    pub fn set_document(&mut self, doc: LoadedDocument) {
        let words = doc.word_count();
        let message = match doc.page {
            Some(page) => format!(
                "Loaded page {} of {} from {} ({} words)",
                page.index + 1,
                page.total,
                doc.source,
                words
            ),
            None => format!("Loaded {} ({} words)", doc.source, words),
        };
        if let Some(page) = doc.page {
            self.page = page.index;
        }
        self.status = Some(StatusMessage::info(message));
        self.document = Some(doc);
    }

    pub fn start_reading(&mut self) {
        let Some(doc) = self.document.as_ref().filter(|d| !d.is_blank()) else {
            self.status = Some(StatusMessage::warning(EMPTY_TEXT_WARNING));
            return;
        };

        match ReadingSession::from_text(&doc.text, &self.config.reading) {
            Ok(session) if session.is_empty() => {
                self.status = Some(StatusMessage::warning(format!(
                    "Nothing to read when splitting by {}",
                    self.config.reading.split
                )));
            }
            Ok(session) => {
                tracing::info!(
                    source = %doc.source,
                    chunks = session.len(),
                    wpm = session.wpm(),
                    split = ?self.config.reading.split,
                    "reading started"
                );
                self.session = Some(session);
                self.status = None;
                self.show_help = false;
                self.mode = AppMode::Running;
            }
            Err(err) => {
                self.status = Some(StatusMessage::error(err.to_string()));
            }
        }
    }

    /// Moves the running session one step; ends the run after the last chunk.
    pub fn advance_reading(&mut self) {
        if self.mode != AppMode::Running {
            return;
        }
        let advanced = self.session.as_mut().map_or(false, |s| s.advance());
        if !advanced {
            self.finish_reading();
        }
    }

    fn finish_reading(&mut self) {
        if let Some(session) = self.session.take() {
            tracing::info!(chunks = session.len(), "reading finished");
            self.status = Some(StatusMessage::info(format!(
                "Finished {} chunks at {} WPM",
                session.len(),
                session.wpm()
            )));
        }
        self.mode = AppMode::Idle;
    }

    pub fn stop_reading(&mut self) {
        if self.mode != AppMode::Running {
            return;
        }
        if let Some(session) = self.session.take() {
            let (step, total) = session.progress();
            tracing::info!(step, total, "reading interrupted");
            self.status = Some(StatusMessage::info(format!(
                "Reading stopped at chunk {} of {}",
                step, total
            )));
        }
        self.mode = AppMode::Idle;
    }

    /// Delay for the window currently on screen, while a run is active.
    pub fn current_delay(&self) -> Option<Duration> {
        match self.mode {
            AppMode::Running => self.session.as_ref().map(|s| s.current_delay()),
            _ => None,
        }
    }

    pub fn get_render_state(&self) -> RenderState {
        let mut state = RenderState::empty(
            self.mode,
            self.config.reading.clone(),
            self.config.display.clone(),
        );
        state.page_setting = self.page;
        state.status = self.status.clone();
        state.show_help = self.show_help;

        if let Some(doc) = &self.document {
            state.source = Some(doc.source.clone());
            state.page = doc.page;
            state.preview = Some(doc.text.clone());
            state.word_count = doc.word_count();
        }

        if let Some(session) = &self.session {
            state.window = session.current_window();
            state.progress = session.progress();
        }

        state
    }
}
