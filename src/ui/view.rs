use crate::app::{AppMode, RenderState, StatusLevel, StatusMessage};
use crate::reading::wpm_to_milliseconds;
use crate::ui::theme::Theme;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

const PROGRESS_WIDTH: usize = 20;
const PREVIEW_CHARS: usize = 4_000;

const HELP_LINES: &[&str] = &[
    "Type text and press Enter to set what you want to read.",
    "Paste multi-line text into an empty deck to keep paragraphs.",
    "",
    "@path           load a text file or one page of a PDF",
    "@@              load the clipboard",
    ":page N         PDF page to read (0-based)",
    ":wpm N          reading speed, 100-1000",
    ":chunk N        words per chunk, 1-5",
    ":split MODE     words | sentences | paragraphs",
    ":font N         font size, 20-60",
    ":fg #RRGGBB     text color",
    ":bg #RRGGBB     background color",
    "Up / Down       speed +/- 50 WPM",
    ":s / Enter      start reading",
    ":h              toggle this help",
    ":q              quit",
    "",
    "While reading: Esc or Ctrl-C stops.",
];

/// The two-chunk window, vertically centered in the reading panel.
pub fn render_window(window: &str, theme: &Theme, height: u16) -> Paragraph<'static> {
    let top_padding = height.saturating_sub(3) / 2;
    let mut lines: Vec<Line<'static>> = (0..top_padding).map(|_| Line::default()).collect();
    lines.push(Line::styled(
        window.to_string(),
        Style::default()
            .fg(theme.reader_text)
            .add_modifier(Modifier::BOLD),
    ));

    Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.dimmed)),
        )
        .style(Style::default().bg(theme.reader_background))
}

pub fn render_progress_bar(progress: (usize, usize), theme: &Theme) -> Line<'static> {
    let (current, total) = progress;
    let filled_len = if total == 0 {
        0
    } else {
        (current.min(total) * PROGRESS_WIDTH) / total
    };
    let empty_len = PROGRESS_WIDTH - filled_len;

    Line::from(vec![
        Span::styled("─".repeat(filled_len), Style::default().fg(theme.accent)),
        Span::styled("─".repeat(empty_len), Style::default().fg(theme.dimmed)),
    ])
    .alignment(Alignment::Center)
}

pub fn render_settings(state: &RenderState, theme: &Theme) -> Paragraph<'static> {
    let label = Style::default().fg(theme.dimmed);
    let value = Style::default().fg(theme.text);
    let row = |name: &str, val: String| {
        Line::from(vec![
            Span::styled(format!("{:<10}", name), label),
            Span::styled(val, value),
        ])
    };

    let lines = vec![
        row(
            "Speed",
            format!(
                "{} WPM ({}ms/word)",
                state.reading.wpm,
                wpm_to_milliseconds(state.reading.wpm)
            ),
        ),
        row("Chunk", format!("{} words", state.reading.words_per_chunk)),
        row("Split by", state.reading.split.label().to_string()),
        row("Font", format!("{}px", state.style.font_size)),
        row("Text", state.style.text_color.to_string()),
        row("Background", state.style.background_color.to_string()),
        row("PDF page", state.page_setting.to_string()),
    ];

    Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Settings")
            .border_style(Style::default().fg(theme.dimmed)),
    )
}

pub fn render_preview(state: &RenderState, theme: &Theme) -> Paragraph<'static> {
    let title = match (&state.source, state.page) {
        (Some(source), Some(page)) => format!(
            "Text from page {} of {} · {} · {} words",
            page.index + 1,
            page.total,
            source,
            state.word_count
        ),
        (Some(source), None) => format!("{} · {} words", source, state.word_count),
        (None, _) => "No text loaded".to_string(),
    };

    let body = match &state.preview {
        Some(text) => text.chars().take(PREVIEW_CHARS).collect::<String>(),
        None => "Type text below, or load a file with @path. :h shows all commands.".to_string(),
    };

    Paragraph::new(body)
        .wrap(Wrap { trim: false })
        .style(Style::default().fg(theme.text))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .border_style(Style::default().fg(theme.dimmed)),
        )
}

pub fn render_help(theme: &Theme) -> Paragraph<'static> {
    let lines: Vec<Line<'static>> = HELP_LINES.iter().map(|l| Line::raw(*l)).collect();
    Paragraph::new(lines)
        .style(Style::default().fg(theme.text))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Help")
                .border_style(Style::default().fg(theme.accent)),
        )
}

pub fn render_status(status: Option<&StatusMessage>, theme: &Theme) -> Line<'static> {
    match status {
        Some(message) => {
            let color = match message.level {
                StatusLevel::Info => theme.text,
                StatusLevel::Warning => theme.warning,
                StatusLevel::Error => theme.error,
            };
            Line::styled(message.text.clone(), Style::default().fg(color))
        }
        None => Line::default(),
    }
}

pub fn render_command_deck(input: &str, theme: &Theme) -> Paragraph<'static> {
    Paragraph::new(Line::from(vec![
        Span::styled("> ", Style::default().fg(theme.accent)),
        Span::styled(input.to_string(), Style::default().fg(theme.text)),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.dimmed)),
    )
}

fn render_run_footer(state: &RenderState, theme: &Theme) -> Line<'static> {
    let (current, total) = state.progress;
    Line::styled(
        format!(
            "{} WPM · chunk {} of {} · Esc to stop",
            state.reading.wpm, current, total
        ),
        Style::default().fg(theme.dimmed),
    )
    .alignment(Alignment::Center)
}

/// Draws one full frame for `state`.
pub fn draw(frame: &mut Frame, state: &RenderState, input: &str) {
    let theme = Theme::from_style(&state.style);
    let area = frame.area();
    frame.render_widget(
        Block::default().style(Style::default().bg(theme.background)),
        area,
    );

    match state.mode {
        AppMode::Running => draw_running(frame, area, state, &theme),
        _ => draw_idle(frame, area, state, &theme, input),
    }
}

fn draw_running(frame: &mut Frame, area: Rect, state: &RenderState, theme: &Theme) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(area);

    let window = state.window.as_deref().unwrap_or_default();
    frame.render_widget(render_window(window, theme, rows[0].height), rows[0]);
    frame.render_widget(render_progress_bar(state.progress, theme), rows[1]);
    frame.render_widget(render_run_footer(state, theme), rows[2]);
}

fn draw_idle(frame: &mut Frame, area: Rect, state: &RenderState, theme: &Theme, input: &str) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(36), Constraint::Min(20)])
        .split(rows[0]);

    frame.render_widget(render_settings(state, theme), columns[0]);
    if state.show_help {
        frame.render_widget(render_help(theme), columns[1]);
    } else {
        frame.render_widget(render_preview(state, theme), columns[1]);
    }
    frame.render_widget(render_status(state.status.as_ref(), theme), rows[1]);
    frame.render_widget(render_command_deck(input, theme), rows[2]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{App, AppEvent};
    use ratatui::{backend::TestBackend, Terminal};

    fn render_to_text(state: &RenderState, input: &str) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 24)).unwrap();
        terminal.draw(|frame| draw(frame, state, input)).unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_progress_bar_zero_total() {
        let line = render_progress_bar((0, 0), &Theme::default());
        assert_eq!(line.spans[0].content, "");
        assert_eq!(line.spans[1].content.chars().count(), PROGRESS_WIDTH);
    }

    #[test]
    fn test_progress_bar_halfway() {
        let line = render_progress_bar((5, 10), &Theme::default());
        assert_eq!(line.spans[0].content.chars().count(), PROGRESS_WIDTH / 2);
    }

    #[test]
    fn test_progress_bar_complete() {
        let line = render_progress_bar((10, 10), &Theme::default());
        assert_eq!(line.spans[0].content.chars().count(), PROGRESS_WIDTH);
        assert_eq!(line.spans[1].content, "");
    }

    #[test]
    fn test_status_line_empty() {
        let line = render_status(None, &Theme::default());
        assert!(line.spans.is_empty());
    }

    #[test]
    fn test_idle_frame_shows_settings_and_input() {
        let app = App::new();
        let text = render_to_text(&app.get_render_state(), ":wpm 4");
        assert!(text.contains("300 WPM"));
        assert!(text.contains("No text loaded"));
        assert!(text.contains(":wpm 4"));
    }

    #[test]
    fn test_running_frame_shows_window() {
        let mut app = App::new();
        app.handle_event(AppEvent::SetText("the quick brown fox jumps".to_string()));
        app.handle_event(AppEvent::StartReading);
        app.advance_reading();

        let text = render_to_text(&app.get_render_state(), "");
        assert!(text.contains("the quick brown fox"));
        assert!(text.contains("chunk 2 of 3"));
    }

    #[test]
    fn test_help_frame() {
        let mut app = App::new();
        app.handle_event(AppEvent::Help);
        let text = render_to_text(&app.get_render_state(), "");
        assert!(text.contains("words | sentences | paragraphs"));
    }
}
