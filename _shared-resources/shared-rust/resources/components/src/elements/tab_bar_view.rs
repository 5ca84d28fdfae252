// Tab Bar View
// Renders the interactive tab bar and records each button's frame for hit testing
//
// Default metrics, search active (cells):
//
//              █████                                    <- highlight protrudes one row
//   ───────────██S██──────────────────────────────────  <- top rule
//        H     █████      N         G                   <- icon row
//       home   search  notification  setting            <- labels
//                                                       <- bottom inset

use std::time::Instant;

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Clear, StatefulWidget, Widget},
};

use super::tab_bar::{InteractiveTabBar, TabBarAppearance};
use crate::core::{TabBounds, TabCatalog};

/// Stateful widget for [`InteractiveTabBar`]
///
/// The bar is drawn along the bottom of the given area; rows above it are left to the
/// host, except where the active highlight protrudes into them.
pub struct TabBarView<'a, T: TabCatalog> {
    active: T,
    appearance: &'a TabBarAppearance,
    now: Instant,
}

impl<'a, T: TabCatalog> TabBarView<'a, T> {
    pub fn new(active: T, appearance: &'a TabBarAppearance) -> Self {
        Self {
            active,
            appearance,
            now: Instant::now(),
        }
    }

    /// Render the animation frame for a specific instant
    pub fn at(mut self, now: Instant) -> Self {
        self.now = now;
        self
    }

    /// Screen rect the bar occupies within `area`
    pub fn bar_area(&self, area: Rect) -> Rect {
        let height = self.appearance.metrics.total_height().min(area.height);
        Rect {
            x: area.x,
            y: area.bottom().saturating_sub(height),
            width: area.width,
            height,
        }
    }

    /// Button frames in screen cells, in tab order
    fn button_areas(&self, bar: Rect) -> Vec<Rect> {
        let metrics = &self.appearance.metrics;
        let inset = metrics.horizontal_inset.min(bar.width / 2);
        let row = Rect {
            x: bar.x + inset,
            y: bar.y,
            width: bar.width.saturating_sub(inset * 2),
            height: metrics.height.min(bar.height),
        };
        let count = T::all().len();
        if count == 0 {
            return Vec::new();
        }
        let constraints = vec![Constraint::Ratio(1, count as u32); count];
        Layout::horizontal(constraints).split(row).to_vec()
    }
}

/// Row of the icon inside a button; the label sits right below it
fn icon_row(button: Rect) -> u16 {
    button.y + button.height.saturating_sub(2) / 2
}

/// Highlight frame behind the active icon, in the bar's coordinate space
/// Bottom-aligned with the inactive icon frame, so it grows upwards
fn highlight_frame(button: TabBounds, icon_row: i32, width: u16, height: u16) -> TabBounds {
    let width = width as i32;
    let height = height as i32;
    TabBounds {
        x: button.x + (button.width - width) / 2,
        y: icon_row + 1 - height,
        width,
        height,
    }
}

impl<'a, T: TabCatalog> StatefulWidget for TabBarView<'a, T> {
    type State = InteractiveTabBar<T>;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let area = area.intersection(buf.area);
        let bar = self.bar_area(area);
        if bar.width == 0 || bar.height == 0 {
            return;
        }
        let colors = &self.appearance.colors;
        let metrics = &self.appearance.metrics;

        state.coordinate_space_mut().set_origin(bar.x, bar.y);
        let origin = state.coordinate_space().origin();

        // Background and top rule
        buf.set_style(bar, Style::default().bg(colors.background));
        Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(colors.border))
            .render(bar, buf);

        let buttons = self.button_areas(bar);
        for (tab, button) in T::all().iter().zip(buttons.iter()) {
            let frame = state.coordinate_space().frame_of(*button);
            state.record_frame(*tab, frame);
        }

        // Shared highlight, sliding between buttons
        let effective = state.dragging_preview().unwrap_or(self.active);
        if let Some(button) = buttons.get(effective.index()) {
            let local_button = state.coordinate_space().frame_of(*button);
            let local_icon_row = icon_row(*button) as i32 - origin.1 as i32;
            let target = highlight_frame(
                local_button,
                local_icon_row,
                metrics.active_icon.width,
                metrics.active_icon.height,
            );
            state.sync_highlight(effective, target, self.now);
        }
        if let Some(highlight) = state
            .highlight_bounds(self.now)
            .and_then(|bounds| bounds.to_screen(origin, area))
        {
            Clear.render(highlight, buf);
            buf.set_style(highlight, Style::default().bg(colors.highlight));
        }

        for (tab, button) in T::all().iter().zip(buttons.iter()) {
            let is_active = *tab == effective;
            let row = icon_row(*button);

            // Icon, raised to the middle of the highlight when active
            let glyph_row = if is_active {
                let lift = (metrics.active_icon.height.saturating_sub(1) / 2) as i32;
                row as i32 - lift
            } else {
                row as i32
            };
            let glyph_x = button.x + button.width.saturating_sub(1) / 2;
            if glyph_row >= area.y as i32 && button.width > 0 {
                let style = if is_active {
                    Style::default()
                        .fg(colors.active_icon)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(colors.inactive_icon)
                };
                buf.set_string(glyph_x, glyph_row as u16, tab.glyph(), style);
            }

            // Label
            let label_row = row + 1;
            if label_row < button.bottom() && button.width > 0 {
                let label = tab.label();
                let width = label.chars().count().min(button.width as usize);
                let text: String = label.chars().take(width).collect();
                let x = button.x + (button.width - width as u16) / 2;
                let style = Style::default().fg(if is_active {
                    colors.active_label
                } else {
                    colors.inactive_label
                });
                buf.set_string(x, label_row, text, style);
            }
        }
    }
}
