// Tab Bar Manager
// Provides YAML configuration helpers and an OOP-style wrapper that feeds terminal mouse input to the tab bar

use std::time::{Duration, Instant};

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::{buffer::Buffer, layout::Rect, style::Color, widgets::StatefulWidget};
use serde::Deserialize;
use tracing::debug;

use crate::core::{ActiveTab, ComponentError, TabCatalog};
use crate::elements::tab_bar::{
    AnimationTimings, IconSize, InteractiveTabBar, TabBarAppearance, TabBarColors, TabBarMetrics,
};
use crate::elements::tab_bar_view::TabBarView;
use crate::utilities::parse_color;

// ┌────────────────────────────────────────────────────────────────────────────────────────────────┐
// │                                    YAML Configuration Structures                               │
// └────────────────────────────────────────────────────────────────────────────────────────────────┘

/// Icon size from YAML
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct IconSizeYaml {
    pub width: u16,
    pub height: u16,
}

/// Tab bar colors from YAML (named colors or "#RRGGBB")
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TabBarColorsYaml {
    pub background: String,
    pub border: String,
    pub highlight: String,
    pub active_icon: String,
    pub inactive_icon: String,
    pub active_label: String,
    pub inactive_label: String,
}

impl Default for TabBarColorsYaml {
    fn default() -> Self {
        Self {
            background: "reset".to_string(),
            border: "dark_gray".to_string(),
            highlight: "blue".to_string(),
            active_icon: "white".to_string(),
            inactive_icon: "gray".to_string(),
            active_label: "blue".to_string(),
            inactive_label: "dark_gray".to_string(),
        }
    }
}

/// Highlight animation durations from YAML, in milliseconds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AnimationConfigYaml {
    pub drag_ms: u64,
    pub tap_ms: u64,
}

impl Default for AnimationConfigYaml {
    fn default() -> Self {
        Self {
            drag_ms: 250,
            tap_ms: 500,
        }
    }
}

/// Tab bar configuration from YAML
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TabBarConfigYaml {
    /// Height of the button row
    pub height: u16,
    /// Padding left and right of the buttons
    pub horizontal_inset: u16,
    /// Padding below the buttons
    pub bottom_inset: u16,
    /// Highlight size behind the active icon
    pub active_icon: IconSizeYaml,
    /// Inactive icon frame
    pub inactive_icon: IconSizeYaml,
    pub colors: TabBarColorsYaml,
    pub animation: AnimationConfigYaml,
}

impl Default for TabBarConfigYaml {
    fn default() -> Self {
        Self {
            height: 4,
            horizontal_inset: 2,
            bottom_inset: 1,
            active_icon: IconSizeYaml { width: 5, height: 3 },
            inactive_icon: IconSizeYaml { width: 3, height: 1 },
            colors: TabBarColorsYaml::default(),
            animation: AnimationConfigYaml::default(),
        }
    }
}

// ┌────────────────────────────────────────────────────────────────────────────────────────────────┐
// │                                    Configuration Conversion Functions                          │
// └────────────────────────────────────────────────────────────────────────────────────────────────┘

/// Convert YAML tab bar configuration to the appearance used for rendering
pub fn convert_tab_bar_config(config: &TabBarConfigYaml) -> Result<TabBarAppearance, ComponentError> {
    if config.height < 2 {
        return Err(ComponentError::BarTooShort(config.height));
    }
    for (name, size) in [("active_icon", config.active_icon), ("inactive_icon", config.inactive_icon)] {
        if size.width == 0 || size.height == 0 {
            return Err(ComponentError::EmptyIcon(name));
        }
    }
    if config.active_icon.width < config.inactive_icon.width
        || config.active_icon.height < config.inactive_icon.height
    {
        return Err(ComponentError::ActiveIconSmaller);
    }
    if config.animation.tap_ms == 0 {
        return Err(ComponentError::ZeroDuration("tap_ms"));
    }

    let defaults = TabBarColors::default();
    let colors = &config.colors;
    Ok(TabBarAppearance {
        metrics: TabBarMetrics {
            height: config.height,
            horizontal_inset: config.horizontal_inset,
            bottom_inset: config.bottom_inset,
            active_icon: IconSize::new(config.active_icon.width, config.active_icon.height),
            inactive_icon: IconSize::new(config.inactive_icon.width, config.inactive_icon.height),
        },
        colors: TabBarColors {
            background: parse_color(&colors.background, defaults.background),
            border: parse_color(&colors.border, defaults.border),
            highlight: parse_color(&colors.highlight, defaults.highlight),
            active_icon: parse_color(&colors.active_icon, defaults.active_icon),
            inactive_icon: parse_color(&colors.inactive_icon, defaults.inactive_icon),
            active_label: parse_color(&colors.active_label, defaults.active_label),
            inactive_label: parse_color(&colors.inactive_label, defaults.inactive_label),
        },
        animation: AnimationTimings {
            drag: Duration::from_millis(config.animation.drag_ms),
            tap: Duration::from_millis(config.animation.tap_ms),
        },
    })
}

// ┌────────────────────────────────────────────────────────────────────────────────────────────────┐
// │                            Tab Bar Manager - OOP Style Tab Bar Operations                      │
// └────────────────────────────────────────────────────────────────────────────────────────────────┘

/// Tab Bar Manager wrapper for OOP-style tab bar operations
/// Owns the bar's presentation state and appearance, and translates crossterm mouse events
pub struct TabBarManager<T: TabCatalog> {
    state: InteractiveTabBar<T>,
    appearance: TabBarAppearance,
}

impl<T: TabCatalog> TabBarManager<T> {
    pub fn new(appearance: TabBarAppearance) -> Self {
        Self {
            state: InteractiveTabBar::new(appearance.animation),
            appearance,
        }
    }

    /// Create from YAML configuration
    pub fn from_config(config: &TabBarConfigYaml) -> Result<Self, ComponentError> {
        convert_tab_bar_config(config).map(Self::new)
    }

    pub fn state(&self) -> &InteractiveTabBar<T> {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut InteractiveTabBar<T> {
        &mut self.state
    }

    pub fn appearance(&self) -> &TabBarAppearance {
        &self.appearance
    }

    /// Render the bar into `area` for the animation frame at `now`
    pub fn render(&mut self, area: Rect, buf: &mut Buffer, active: &ActiveTab<T>, now: Instant) {
        TabBarView::new(active.get(), &self.appearance)
            .at(now)
            .render(area, buf, &mut self.state);
    }

    /// Feed a mouse event to the bar
    /// Returns true if the event affected the bar (needs a redraw)
    pub fn handle_mouse(&mut self, mouse: MouseEvent, active: &mut ActiveTab<T>) -> bool {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.state.pointer_down(mouse.column, mouse.row);
                true
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                let before = self.state.dragging_preview();
                self.state.pointer_moved(mouse.column, mouse.row, active);
                before != self.state.dragging_preview()
            }
            MouseEventKind::Up(MouseButton::Left) => {
                let had_preview = self.state.dragging_preview().is_some();
                self.state.pointer_up(active) || had_preview
            }
            _ => false,
        }
    }

    /// Abort an in-progress gesture (e.g. the terminal lost focus)
    /// Returns true if a visible preview was dropped
    pub fn cancel(&mut self) -> bool {
        debug!("cancelling tab bar gesture");
        let had_preview = self.state.dragging_preview().is_some();
        self.state.cancel_drag();
        had_preview
    }

    /// Whether the highlight animation still needs frames
    pub fn is_animating(&self, now: Instant) -> bool {
        self.state.is_animating(now)
    }

    /// Highlight color, for hosts that tint related chrome
    pub fn highlight_color(&self) -> Color {
        self.appearance.colors.highlight
    }
}
