// UI Styles
// Color schemes and styling for the TUI

use ratatui::style::{Color, Modifier, Style};

/// Application color scheme and styles
pub struct Styles;

impl Styles {
    // === Header / Footer ===

    pub fn header() -> Style {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    }

    pub fn footer() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    // === Content ===

    /// Border of the content pane, tinted with the tab bar's highlight
    pub fn content_border(highlight: Color) -> Style {
        Style::default().fg(highlight)
    }

    pub fn content_title() -> Style {
        Style::default().add_modifier(Modifier::BOLD)
    }

    pub fn content_text() -> Style {
        Style::default()
    }

    pub fn content_detail() -> Style {
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::ITALIC)
    }
}
