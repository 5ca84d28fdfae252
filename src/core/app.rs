// Application State
// Main application state management and lifecycle

use std::time::{Duration, Instant};

use tracing::info;
use tui_components::{ActiveTab, ChangeSource, TabBarAppearance, TabBarManager, TabCatalog, TabChange};

use super::{AppEvent, TabItem};
use crate::config_validation::ValidatedConfig;

/// Poll interval while the highlight is moving
pub const ANIMATION_FRAME: Duration = Duration::from_millis(16);

/// Poll interval when nothing is animating
pub const IDLE_POLL: Duration = Duration::from_millis(250);

/// Main application state
pub struct App {
    /// Title shown in the header
    pub title: String,

    /// The selected tab; shared with the tab bar
    pub active_tab: ActiveTab<TabItem>,

    /// Tab bar presentation state
    pub tab_bar: TabBarManager<TabItem>,

    /// Whether the application should quit
    pub should_quit: bool,
}

impl App {
    /// Create a new application instance
    pub fn new(title: impl Into<String>, appearance: TabBarAppearance, initial_tab: TabItem) -> Self {
        Self {
            title: title.into(),
            active_tab: ActiveTab::new(initial_tab),
            tab_bar: TabBarManager::new(appearance),
            should_quit: false,
        }
    }

    /// Create from validated configuration; `tab` overrides the configured initial tab
    pub fn from_config(validated: &ValidatedConfig, tab: Option<TabItem>) -> Self {
        Self::new(
            validated.config.application.title.clone(),
            validated.appearance,
            tab.unwrap_or(validated.initial_tab),
        )
    }

    /// Currently selected tab
    pub fn current_tab(&self) -> TabItem {
        self.active_tab.get()
    }

    // ┌────────────────────────────────────────────────────────────────────────────────────────────────┐
    // │                                         Navigation                                             │
    // └────────────────────────────────────────────────────────────────────────────────────────────────┘

    /// Select the tab to the left, wrapping to the last one
    pub fn select_previous(&mut self) {
        let tab = self.current_tab().offset(-1);
        self.active_tab.set(tab, ChangeSource::Programmatic);
    }

    /// Select the tab to the right, wrapping to the first one
    pub fn select_next(&mut self) {
        let tab = self.current_tab().offset(1);
        self.active_tab.set(tab, ChangeSource::Programmatic);
    }

    /// Select the tab at `index`; out of range is ignored
    pub fn select(&mut self, index: usize) {
        if let Some(tab) = TabItem::from_index(index) {
            self.active_tab.set(tab, ChangeSource::Programmatic);
        }
    }

    /// Signal the application to quit
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Apply an application event
    /// Returns true if the screen is stale: the bar changed, the active tab moved, or the
    /// terminal was resized
    pub fn handle_event(&mut self, event: AppEvent) -> bool {
        let bar_changed = match event {
            AppEvent::Quit => {
                self.quit();
                false
            }
            AppEvent::PreviousTab => {
                self.select_previous();
                false
            }
            AppEvent::NextTab => {
                self.select_next();
                false
            }
            AppEvent::SelectTab(index) => {
                self.select(index);
                false
            }
            AppEvent::Mouse(mouse) => self.tab_bar.handle_mouse(mouse, &mut self.active_tab),
            AppEvent::FocusLost => self.tab_bar.cancel(),
            AppEvent::Resize => true,
            AppEvent::None => false,
        };
        bar_changed || self.active_tab.is_dirty()
    }

    /// Drain the pending selection change, logging it
    pub fn take_change(&mut self) -> Option<TabChange<TabItem>> {
        let change = self.active_tab.take_change()?;
        info!(from = %change.from, to = %change.to, source = ?change.source, "tab changed");
        Some(change)
    }

    /// How long the event loop may block before the next frame is due
    pub fn poll_timeout(&self, now: Instant) -> Duration {
        if self.tab_bar.is_animating(now) {
            ANIMATION_FRAME
        } else {
            IDLE_POLL
        }
    }
}
