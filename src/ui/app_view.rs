// Application View
// Main application layout and rendering

use std::time::Instant;

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use tui_components::TabCatalog;

use super::Styles;
use crate::core::App;

/// Render the entire application for the animation frame at `now`
pub fn render_app(f: &mut Frame, app: &mut App, now: Instant) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Content + tab bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    let body = chunks[1];
    let bar_height = app.tab_bar.appearance().metrics.total_height().min(body.height);
    let content = Rect {
        height: body.height - bar_height,
        ..body
    };
    render_content(f, app, content);

    // Drawn last so the highlight can protrude over the content
    app.tab_bar.render(body, f.buffer_mut(), &app.active_tab, now);
}

/// Render the header bar
fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let header = Paragraph::new(app.title.as_str())
        .style(Styles::header())
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(header, area);
}

/// Render the selected tab's page
fn render_content(f: &mut Frame, app: &App, area: Rect) {
    if area.height == 0 {
        return;
    }
    let tab = app.current_tab();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Styles::content_border(app.tab_bar.highlight_color()))
        .title(Line::styled(format!(" {} ", tab.label()), Styles::content_title()));

    let lines = vec![
        Line::styled(format!("Tab = {tab}"), Styles::content_text()),
        Line::styled(format!("{} · {}", tab.symbol(), tab.label()), Styles::content_detail()),
        Line::default(),
        Line::styled("←/→ switch · 1-4 select · drag from the active tab · q quit", Styles::footer()),
    ];

    let page = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(block);
    f.render_widget(page, area);
}
