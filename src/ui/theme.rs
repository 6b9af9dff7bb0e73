use crate::engine::{DisplayStyle, HexColor};
use ratatui::style::Color;

pub fn to_color(color: HexColor) -> Color {
    Color::Rgb(color.r, color.g, color.b)
}

/// Colors for one frame: the reading panel uses the configured style, the
/// surrounding chrome stays on the midnight palette.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub reader_text: Color,
    pub reader_background: Color,
    pub background: Color,
    pub text: Color,
    pub accent: Color,
    pub dimmed: Color,
    pub warning: Color,
    pub error: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Theme::from_style(&DisplayStyle::default())
    }
}

impl Theme {
    pub fn from_style(style: &DisplayStyle) -> Self {
        Self {
            reader_text: to_color(style.text_color),
            reader_background: to_color(style.background_color),
            background: Color::Rgb(26, 27, 38), // #1A1B26 Stormy Dark
            text: Color::Rgb(169, 177, 214),    // #A9B1D6 Light Blue
            accent: Color::Rgb(247, 118, 142),  // #F7768E Coral Red
            dimmed: Color::Rgb(100, 110, 150),  // #646E96 Dimmed Blue
            warning: Color::Rgb(224, 175, 104), // #E0AF68
            error: Color::Rgb(247, 118, 142),
        }
    }
}
