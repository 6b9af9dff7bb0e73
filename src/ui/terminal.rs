use crate::app::{App, AppEvent, AppMode};
use crate::engine::config::WPM_STEP;
use crate::ui::command::{command_to_app_event, parse_command};
use crate::ui::terminal_guard::TerminalGuard;
use crate::ui::view;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::time::{Duration, Instant};

const IDLE_POLL: Duration = Duration::from_millis(250);

pub struct TuiManager {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    input: String,
    _guard: TerminalGuard,
}

impl TuiManager {
    pub fn new() -> Result<Self, io::Error> {
        let guard = TerminalGuard::new()?;
        let backend = CrosstermBackend::new(io::stdout());
        let terminal = Terminal::new(backend)?;

        Ok(TuiManager {
            terminal,
            input: String::new(),
            _guard: guard,
        })
    }

    /// Runs until the app quits. While reading, each window stays on screen
    /// for its pacer delay; keys other than Esc/Ctrl-C do not shorten it.
    pub fn run_event_loop(&mut self, app: &mut App) -> io::Result<()> {
        loop {
            match app.mode() {
                AppMode::Quit => return Ok(()),
                AppMode::Running => self.run_step(app)?,
                AppMode::Idle => self.idle_tick(app)?,
            }
        }
    }

    fn run_step(&mut self, app: &mut App) -> io::Result<()> {
        self.render_frame(app)?;

        let delay = app.current_delay().unwrap_or_default();
        let shown_at = Instant::now();

        loop {
            let remaining = delay.saturating_sub(shown_at.elapsed());
            if remaining.is_zero() {
                app.advance_reading();
                return Ok(());
            }
            if event::poll(remaining)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press && is_interrupt(&key) {
                        app.handle_event(AppEvent::StopReading);
                        return Ok(());
                    }
                }
            }
        }
    }

    fn idle_tick(&mut self, app: &mut App) -> io::Result<()> {
        self.render_frame(app)?;

        if !event::poll(IDLE_POLL)? {
            return Ok(());
        }
        let key = match event::read()? {
            Event::Paste(text) => {
                if let Some(event) = paste_into(&mut self.input, &text) {
                    app.handle_event(event);
                }
                return Ok(());
            }
            Event::Key(key) if key.kind == KeyEventKind::Press => key,
            _ => return Ok(()),
        };

        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                app.handle_event(AppEvent::Quit);
            }
            KeyCode::Char(c) => self.input.push(c),
            KeyCode::Up => app.handle_event(AppEvent::AdjustWpm(WPM_STEP as i32)),
            KeyCode::Down => app.handle_event(AppEvent::AdjustWpm(-(WPM_STEP as i32))),
            KeyCode::Backspace => {
                self.input.pop();
            }
            KeyCode::Esc => self.input.clear(),
            KeyCode::Enter => {
                let line = std::mem::take(&mut self.input);
                app.handle_event(submit_line(&line));
            }
            _ => {}
        }
        Ok(())
    }

    pub fn render_frame(&mut self, app: &App) -> io::Result<()> {
        let render_state = app.get_render_state();
        let input = self.input.as_str();
        self.terminal
            .draw(|frame| view::draw(frame, &render_state, input))?;
        Ok(())
    }
}

/// An empty line starts reading; anything else goes through the command parser.
pub fn submit_line(line: &str) -> AppEvent {
    if line.trim().is_empty() {
        AppEvent::StartReading
    } else {
        command_to_app_event(parse_command(line))
    }
}

/// Multi-line paste into an empty deck becomes the reading text as-is, so
/// paragraph breaks survive. Anything else is appended to the deck with line
/// breaks flattened to spaces.
pub fn paste_into(input: &mut String, pasted: &str) -> Option<AppEvent> {
    if input.is_empty() && pasted.contains('\n') {
        return Some(AppEvent::SetText(pasted.replace("\r\n", "\n")));
    }
    let flattened: String = pasted
        .chars()
        .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
        .collect();
    input.push_str(&flattened);
    None
}

fn is_interrupt(key: &KeyEvent) -> bool {
    match key.code {
        KeyCode::Esc => true,
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}
