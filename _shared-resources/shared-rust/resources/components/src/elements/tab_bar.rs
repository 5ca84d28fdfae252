// Interactive Tab Bar
// Tab bar state: button layout, drag preview, gesture phase and the sliding highlight
//
// The host owns the committed selection (`ActiveTab`) and lends it to every call that may
// commit. Everything else here is private presentation state of the bar.

use std::time::{Duration, Instant};

use ratatui::style::Color;
use tracing::debug;

use crate::core::{
    ActiveTab, ChangeSource, CoordinateSpace, LocalPoint, TabBounds, TabButtonLayout, TabCatalog,
};
use crate::utilities::HighlightTween;

/// Name of the coordinate space button frames and pointer locations are measured in
pub const TAB_BAR_SPACE: &str = "TABBAR";

/// Identity of the single highlight shared by all buttons
pub const ACTIVE_TAB_HIGHLIGHT: &str = "ACTIVETAB";

// ┌────────────────────────────────────────────────────────────────────────────────────────────────┐
// │                                          Appearance                                            │
// └────────────────────────────────────────────────────────────────────────────────────────────────┘

/// Size of an icon frame in cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconSize {
    pub width: u16,
    pub height: u16,
}

impl IconSize {
    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Bar geometry in cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabBarMetrics {
    /// Height of the button row
    pub height: u16,
    /// Padding left and right of the button row
    pub horizontal_inset: u16,
    /// Padding below the button row
    pub bottom_inset: u16,
    /// Highlight size behind the active icon
    pub active_icon: IconSize,
    /// Frame of an inactive icon; the active highlight is bottom-aligned to it
    pub inactive_icon: IconSize,
}

impl Default for TabBarMetrics {
    fn default() -> Self {
        Self {
            height: 4,
            horizontal_inset: 2,
            bottom_inset: 1,
            active_icon: IconSize::new(5, 3),
            inactive_icon: IconSize::new(3, 1),
        }
    }
}

impl TabBarMetrics {
    /// Total rows taken by the bar, insets included
    pub fn total_height(&self) -> u16 {
        self.height.saturating_add(self.bottom_inset)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabBarColors {
    pub background: Color,
    pub border: Color,
    pub highlight: Color,
    pub active_icon: Color,
    pub inactive_icon: Color,
    pub active_label: Color,
    pub inactive_label: Color,
}

impl Default for TabBarColors {
    fn default() -> Self {
        Self {
            background: Color::Reset,
            border: Color::DarkGray,
            highlight: Color::Blue,
            active_icon: Color::White,
            inactive_icon: Color::Gray,
            active_label: Color::Blue,
            inactive_label: Color::DarkGray,
        }
    }
}

/// Highlight animation durations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationTimings {
    /// Following the pointer while dragging
    pub drag: Duration,
    /// Taps, cancels and programmatic switches
    pub tap: Duration,
}

impl Default for AnimationTimings {
    fn default() -> Self {
        Self {
            drag: Duration::from_millis(250),
            tap: Duration::from_millis(500),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TabBarAppearance {
    pub metrics: TabBarMetrics,
    pub colors: TabBarColors,
    pub animation: AnimationTimings,
}

// ┌────────────────────────────────────────────────────────────────────────────────────────────────┐
// │                                         Gesture State                                          │
// └────────────────────────────────────────────────────────────────────────────────────────────────┘

/// Pointer gesture phase
///
/// Terminal input reports press, drag and release without telling taps from drags,
/// so a press waits in `Pressed` until the first movement decides what it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GesturePhase<T> {
    Idle,
    /// Pointer is down and has not moved yet; a release here is a tap
    Pressed { tab: Option<T> },
    /// Drag in progress; `preview` is the tab last found under the pointer
    Dragging { preview: Option<T> },
    /// Pointer moved after a press that cannot start a drag; ignored until release
    Rejected,
}

/// Kind of transition the next highlight move animates with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Transition {
    Drag,
    Tap,
}

#[derive(Debug, Clone, Copy)]
struct Highlight<T> {
    tab: T,
    tween: HighlightTween,
}

/// Presentation state of the interactive tab bar
#[derive(Debug, Clone)]
pub struct InteractiveTabBar<T: TabCatalog> {
    layout: TabButtonLayout,
    space: CoordinateSpace,
    phase: GesturePhase<T>,
    highlight: Option<Highlight<T>>,
    next_transition: Transition,
    animation: AnimationTimings,
}

impl<T: TabCatalog> InteractiveTabBar<T> {
    pub fn new(animation: AnimationTimings) -> Self {
        Self {
            layout: TabButtonLayout::new(T::all().len()),
            space: CoordinateSpace::new(TAB_BAR_SPACE),
            phase: GesturePhase::Idle,
            highlight: None,
            next_transition: Transition::Tap,
            animation,
        }
    }

    pub fn layout(&self) -> &TabButtonLayout {
        &self.layout
    }

    pub fn coordinate_space(&self) -> &CoordinateSpace {
        &self.space
    }

    pub(crate) fn coordinate_space_mut(&mut self) -> &mut CoordinateSpace {
        &mut self.space
    }

    pub fn phase(&self) -> GesturePhase<T> {
        self.phase
    }

    /// Tab currently previewed by an in-progress drag
    pub fn dragging_preview(&self) -> Option<T> {
        match self.phase {
            GesturePhase::Dragging { preview } => preview,
            _ => None,
        }
    }

    /// The preview if a drag shows one, otherwise the committed tab
    pub fn effective_active(&self, active: &ActiveTab<T>) -> T {
        self.dragging_preview().unwrap_or_else(|| active.get())
    }

    /// Record a button's frame, measured in the bar's coordinate space
    pub fn record_frame(&mut self, tab: T, frame: TabBounds) -> bool {
        self.layout.record(tab.index(), frame)
    }

    /// First tab whose recorded frame contains `point`
    pub fn locate(&self, point: LocalPoint) -> Option<T> {
        self.layout.locate(point).and_then(T::from_index)
    }

    // ── Gesture operations ─────────────────────────────────────────────────────────────────────

    /// Try to start a drag from the button of `from`
    /// Drags can only start on the currently active tab; returns whether the drag started
    pub fn begin_drag(&mut self, from: T, active: &ActiveTab<T>) -> bool {
        if from != active.get() {
            debug!(?from, active = ?active.get(), "drag rejected: not started on the active tab");
            self.phase = GesturePhase::Rejected;
            return false;
        }
        debug!(?from, "drag started");
        self.phase = GesturePhase::Dragging { preview: None };
        true
    }

    /// Pointer moved during a drag, `point` in the bar's coordinate space
    /// Previews the tab under the pointer; outside every button the last preview sticks
    pub fn drag_moved(&mut self, point: LocalPoint) {
        let GesturePhase::Dragging { preview } = self.phase else {
            return;
        };
        if let Some(tab) = self.locate(point) {
            if preview != Some(tab) {
                debug!(?tab, ?point, "drag preview");
                self.next_transition = Transition::Drag;
            }
            self.phase = GesturePhase::Dragging { preview: Some(tab) };
        }
    }

    /// Drag released: commit the preview if there is one, then clear it
    pub fn end_drag(&mut self, active: &mut ActiveTab<T>) -> bool {
        let committed = match self.phase {
            GesturePhase::Dragging { preview: Some(tab) } => active.set(tab, ChangeSource::DragCommit),
            _ => false,
        };
        debug!(committed, "drag ended");
        self.phase = GesturePhase::Idle;
        committed
    }

    /// Drag aborted by the host: clear the preview without committing
    pub fn cancel_drag(&mut self) {
        if self.dragging_preview().is_some() {
            self.next_transition = Transition::Tap;
        }
        debug!(phase = ?self.phase, "gesture cancelled");
        self.phase = GesturePhase::Idle;
    }

    /// Discrete tap on a button: commit immediately, no preview phase
    /// Independent of any drag in progress
    pub fn tap(&mut self, tab: T, active: &mut ActiveTab<T>) -> bool {
        self.next_transition = Transition::Tap;
        active.set(tab, ChangeSource::Tap)
    }

    // ── Pointer routing (screen cells) ─────────────────────────────────────────────────────────

    /// Pointer pressed at a screen cell
    /// The part of the highlight that protrudes above the buttons counts as its tab's button
    pub fn pointer_down(&mut self, column: u16, row: u16) {
        let point = self.space.to_local(column, row);
        let tab = self.locate(point).or_else(|| self.highlight_at(point));
        debug!(space = self.space.name(), ?tab, column, row, "pointer down");
        self.phase = GesturePhase::Pressed { tab };
    }

    /// Pointer moved with the button held, at a screen cell
    pub fn pointer_moved(&mut self, column: u16, row: u16, active: &ActiveTab<T>) {
        if let GesturePhase::Pressed { tab } = self.phase {
            match tab {
                Some(tab) => {
                    self.begin_drag(tab, active);
                }
                None => self.phase = GesturePhase::Rejected,
            }
        }
        self.drag_moved(self.space.to_local(column, row));
    }

    /// Pointer released; ends a drag or completes a tap
    /// Returns true if the active tab changed
    pub fn pointer_up(&mut self, active: &mut ActiveTab<T>) -> bool {
        match self.phase {
            GesturePhase::Pressed { tab } => {
                self.phase = GesturePhase::Idle;
                tab.map(|tab| self.tap(tab, active)).unwrap_or(false)
            }
            GesturePhase::Dragging { .. } => self.end_drag(active),
            GesturePhase::Rejected | GesturePhase::Idle => {
                self.phase = GesturePhase::Idle;
                false
            }
        }
    }

    // ── Highlight animation ────────────────────────────────────────────────────────────────────

    /// Point the highlight at `tab`'s frame; animates when the tab changes
    /// The first placement and pure geometry changes (resize) snap without animation
    pub(crate) fn sync_highlight(&mut self, tab: T, target: TabBounds, now: Instant) {
        let duration = match self.next_transition {
            Transition::Drag => self.animation.drag,
            Transition::Tap => self.animation.tap,
        };
        self.highlight = Some(match self.highlight {
            Some(current) if current.tab != tab => {
                debug!(id = ACTIVE_TAB_HIGHLIGHT, from = ?current.tab, to = ?tab, ?duration, "highlight moving");
                Highlight {
                    tab,
                    tween: current.tween.retarget(target, now, duration),
                }
            }
            Some(current) if current.tween.target() == target => current,
            _ => Highlight {
                tab,
                tween: HighlightTween::settled(target, now),
            },
        });
        self.next_transition = Transition::Tap;
    }

    /// Tab whose highlight rests over `point`
    fn highlight_at(&self, point: LocalPoint) -> Option<T> {
        self.highlight
            .filter(|highlight| highlight.tween.target().contains(point))
            .map(|highlight| highlight.tab)
    }

    /// Highlight rectangle at `now`, if the bar has been laid out
    pub fn highlight_bounds(&self, now: Instant) -> Option<TabBounds> {
        self.highlight.map(|highlight| highlight.tween.current(now))
    }

    /// Whether the highlight is still moving and needs more frames
    pub fn is_animating(&self, now: Instant) -> bool {
        self.highlight
            .map(|highlight| !highlight.tween.is_finished(now))
            .unwrap_or(false)
    }
}

impl<T: TabCatalog> Default for InteractiveTabBar<T> {
    fn default() -> Self {
        Self::new(AnimationTimings::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::test_support::Demo;

    /// Bar with four 10-cell buttons starting at x=2, 4 rows high
    fn laid_out_bar() -> InteractiveTabBar<Demo> {
        let mut bar = InteractiveTabBar::default();
        for tab in Demo::all() {
            let x = 2 + tab.index() as i32 * 10;
            bar.record_frame(*tab, TabBounds::new(x, 0, 10, 4));
        }
        bar
    }

    fn point_in(tab: Demo) -> LocalPoint {
        LocalPoint::new(2 + tab.index() as i32 * 10 + 5, 2)
    }

    #[test]
    fn test_drag_move_previews_tab_under_pointer() {
        let mut bar = laid_out_bar();
        let active = ActiveTab::new(Demo::Home);
        assert!(bar.begin_drag(Demo::Home, &active));

        for tab in Demo::all() {
            bar.drag_moved(point_in(*tab));
            assert_eq!(bar.dragging_preview(), Some(*tab));
            assert_eq!(bar.effective_active(&active), *tab);
        }
    }

    #[test]
    fn test_drag_move_outside_keeps_last_preview() {
        let mut bar = laid_out_bar();
        let active = ActiveTab::new(Demo::Home);
        bar.begin_drag(Demo::Home, &active);
        bar.drag_moved(point_in(Demo::Notification));

        bar.drag_moved(LocalPoint::new(0, 2));
        bar.drag_moved(LocalPoint::new(20, -3));
        bar.drag_moved(LocalPoint::new(200, 2));
        assert_eq!(bar.dragging_preview(), Some(Demo::Notification));
    }

    #[test]
    fn test_drag_scenario_home_to_search() {
        let mut bar = laid_out_bar();
        let mut active = ActiveTab::new(Demo::Home);

        bar.begin_drag(Demo::Home, &active);
        bar.drag_moved(point_in(Demo::Search));
        assert_eq!(bar.dragging_preview(), Some(Demo::Search));
        bar.drag_moved(LocalPoint::new(-5, 10));
        assert_eq!(bar.dragging_preview(), Some(Demo::Search));
        assert_eq!(active.get(), Demo::Home);

        assert!(bar.end_drag(&mut active));
        assert_eq!(active.get(), Demo::Search);
        assert_eq!(bar.dragging_preview(), None);
        assert_eq!(bar.phase(), GesturePhase::Idle);
    }

    #[test]
    fn test_end_drag_without_preview_only_clears() {
        let mut bar = laid_out_bar();
        let mut active = ActiveTab::new(Demo::Search);
        bar.begin_drag(Demo::Search, &active);
        bar.drag_moved(LocalPoint::new(-1, -1));

        assert!(!bar.end_drag(&mut active));
        assert_eq!(active.get(), Demo::Search);
        assert_eq!(bar.dragging_preview(), None);
    }

    #[test]
    fn test_end_drag_on_active_tab_clears_preview() {
        let mut bar = laid_out_bar();
        let mut active = ActiveTab::new(Demo::Home);
        bar.begin_drag(Demo::Home, &active);
        bar.drag_moved(point_in(Demo::Home));

        assert!(!bar.end_drag(&mut active));
        assert_eq!(active.get(), Demo::Home);
        assert_eq!(bar.dragging_preview(), None);
    }

    #[test]
    fn test_drag_only_starts_on_active_tab() {
        let mut bar = laid_out_bar();
        let mut active = ActiveTab::new(Demo::Home);
        assert!(!bar.begin_drag(Demo::Setting, &active));

        bar.drag_moved(point_in(Demo::Search));
        assert_eq!(bar.dragging_preview(), None);
        assert!(!bar.end_drag(&mut active));
        assert_eq!(active.get(), Demo::Home);
    }

    #[test]
    fn test_cancel_drag_does_not_commit() {
        let mut bar = laid_out_bar();
        let active = ActiveTab::new(Demo::Home);
        bar.begin_drag(Demo::Home, &active);
        bar.drag_moved(point_in(Demo::Setting));

        bar.cancel_drag();
        assert_eq!(bar.dragging_preview(), None);
        assert_eq!(active.get(), Demo::Home);
    }

    #[test]
    fn test_tap_commits_immediately() {
        let mut bar = laid_out_bar();
        let mut active = ActiveTab::new(Demo::Home);
        assert!(bar.tap(Demo::Setting, &mut active));
        assert_eq!(active.get(), Demo::Setting);
        assert_eq!(bar.phase(), GesturePhase::Idle);
    }

    #[test]
    fn test_tap_during_drag_still_commits() {
        let mut bar = laid_out_bar();
        let mut active = ActiveTab::new(Demo::Home);
        bar.begin_drag(Demo::Home, &active);
        bar.drag_moved(point_in(Demo::Search));

        bar.tap(Demo::Notification, &mut active);
        assert_eq!(active.get(), Demo::Notification);

        // The drag is still live; releasing it commits its preview over the tap
        assert_eq!(bar.dragging_preview(), Some(Demo::Search));
        assert!(bar.end_drag(&mut active));
        assert_eq!(active.get(), Demo::Search);
    }

    #[test]
    fn test_tapping_active_tab_is_idempotent() {
        let mut bar = laid_out_bar();
        let mut active = ActiveTab::new(Demo::Search);
        for _ in 0..3 {
            assert!(!bar.tap(Demo::Search, &mut active));
            assert_eq!(active.get(), Demo::Search);
        }
        assert!(active.take_change().is_none());
    }

    #[test]
    fn test_pointer_press_release_is_a_tap() {
        let mut bar = laid_out_bar();
        bar.coordinate_space_mut().set_origin(0, 20);
        let mut active = ActiveTab::new(Demo::Home);

        bar.pointer_down(25, 22);
        assert!(bar.pointer_up(&mut active));
        assert_eq!(active.get(), Demo::Notification);
    }

    #[test]
    fn test_pointer_drag_from_active_tab_commits_on_release() {
        let mut bar = laid_out_bar();
        bar.coordinate_space_mut().set_origin(0, 20);
        let mut active = ActiveTab::new(Demo::Home);

        bar.pointer_down(7, 22);
        bar.pointer_moved(10, 22, &active);
        assert_eq!(bar.dragging_preview(), Some(Demo::Home));
        bar.pointer_moved(27, 21, &active);
        assert_eq!(bar.dragging_preview(), Some(Demo::Notification));
        bar.pointer_moved(27, 5, &active);
        assert_eq!(bar.dragging_preview(), Some(Demo::Notification));

        assert!(bar.pointer_up(&mut active));
        assert_eq!(active.get(), Demo::Notification);
        assert_eq!(bar.dragging_preview(), None);
    }

    #[test]
    fn test_pointer_drag_from_inactive_tab_is_ignored() {
        let mut bar = laid_out_bar();
        bar.coordinate_space_mut().set_origin(0, 20);
        let mut active = ActiveTab::new(Demo::Home);

        bar.pointer_down(17, 22); // search
        bar.pointer_moved(27, 22, &active);
        assert_eq!(bar.phase(), GesturePhase::Rejected);
        assert_eq!(bar.dragging_preview(), None);

        // Releasing after moving is not a tap either
        assert!(!bar.pointer_up(&mut active));
        assert_eq!(active.get(), Demo::Home);
        assert_eq!(bar.phase(), GesturePhase::Idle);
    }

    #[test]
    fn test_pointer_press_outside_buttons_does_nothing() {
        let mut bar = laid_out_bar();
        bar.coordinate_space_mut().set_origin(0, 20);
        let mut active = ActiveTab::new(Demo::Home);

        bar.pointer_down(0, 22);
        assert!(!bar.pointer_up(&mut active));
        assert_eq!(active.get(), Demo::Home);
    }

    #[test]
    fn test_highlight_first_placement_snaps() {
        let mut bar: InteractiveTabBar<Demo> = laid_out_bar();
        let now = Instant::now();
        let target = TabBounds::new(4, -1, 5, 3);
        bar.sync_highlight(Demo::Home, target, now);
        assert_eq!(bar.highlight_bounds(now), Some(target));
        assert!(!bar.is_animating(now));
    }

    #[test]
    fn test_highlight_preview_uses_drag_timing() {
        let mut bar = laid_out_bar();
        let active = ActiveTab::new(Demo::Home);
        let start = Instant::now();
        let home = TabBounds::new(4, -1, 5, 3);
        let search = TabBounds::new(14, -1, 5, 3);
        bar.sync_highlight(Demo::Home, home, start);

        bar.begin_drag(Demo::Home, &active);
        bar.drag_moved(point_in(Demo::Search));
        bar.sync_highlight(Demo::Search, search, start);

        assert!(bar.is_animating(start + Duration::from_millis(200)));
        let settled = start + Duration::from_millis(250);
        assert!(!bar.is_animating(settled));
        assert_eq!(bar.highlight_bounds(settled), Some(search));
    }

    #[test]
    fn test_highlight_tap_uses_tap_timing() {
        let mut bar = laid_out_bar();
        let mut active = ActiveTab::new(Demo::Home);
        let start = Instant::now();
        bar.sync_highlight(Demo::Home, TabBounds::new(4, -1, 5, 3), start);

        bar.tap(Demo::Setting, &mut active);
        bar.sync_highlight(Demo::Setting, TabBounds::new(34, -1, 5, 3), start);
        assert!(bar.is_animating(start + Duration::from_millis(400)));
        assert!(!bar.is_animating(start + Duration::from_millis(500)));
    }

    #[test]
    fn test_highlight_resize_snaps() {
        let mut bar = laid_out_bar();
        let start = Instant::now();
        bar.sync_highlight(Demo::Home, TabBounds::new(4, -1, 5, 3), start);
        let resized = TabBounds::new(8, -1, 5, 3);
        bar.sync_highlight(Demo::Home, resized, start);
        assert_eq!(bar.highlight_bounds(start), Some(resized));
        assert!(!bar.is_animating(start));
    }
}
