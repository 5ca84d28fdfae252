// Active Tab Binding
// The committed tab selection, shared between the host view and the tab bar

use super::catalog::TabCatalog;
use tracing::info;

/// Who wrote the active tab
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeSource {
    /// A drag gesture ended over a previewed tab
    DragCommit,
    /// A discrete tap on a button
    Tap,
    /// The host switched tabs itself (keyboard, startup, ...)
    Programmatic,
}

/// A committed change of the active tab
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabChange<T> {
    pub from: T,
    pub to: T,
    pub source: ChangeSource,
}

/// Two-way binding to the committed active tab
///
/// The host owns it and lends it to the tab bar by `&mut`; both sides may write.
/// Writes that actually change the value set a dirty flag the host drains with
/// [`ActiveTab::take_change`] to decide whether to re-render.
#[derive(Debug, Clone)]
pub struct ActiveTab<T: TabCatalog> {
    current: T,
    pending: Option<TabChange<T>>,
}

impl<T: TabCatalog> ActiveTab<T> {
    pub fn new(initial: T) -> Self {
        Self {
            current: initial,
            pending: None,
        }
    }

    pub fn get(&self) -> T {
        self.current
    }

    /// Write a new value; last write wins
    /// Returns true if the value changed
    pub fn set(&mut self, tab: T, source: ChangeSource) -> bool {
        if tab == self.current {
            return false;
        }
        info!(from = ?self.current, to = ?tab, ?source, "active tab changed");
        let from = match self.pending {
            // Coalesce unread changes so the host sees where it started from
            Some(change) => change.from,
            None => self.current,
        };
        self.current = tab;
        // Back where the unread changes started: nothing left to report
        self.pending = (from != tab).then_some(TabChange { from, to: tab, source });
        true
    }

    /// Whether a change has been written since the last `take_change`
    pub fn is_dirty(&self) -> bool {
        self.pending.is_some()
    }

    /// Drain the pending change notification
    pub fn take_change(&mut self) -> Option<TabChange<T>> {
        self.pending.take()
    }
}
