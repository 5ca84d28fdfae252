// Event Handling
// Application event types and handler infrastructure

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent};

/// Application events that can be handled
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// Quit the application
    Quit,

    /// Switch to the tab on the left (wraps)
    PreviousTab,

    /// Switch to the tab on the right (wraps)
    NextTab,

    /// Switch to the tab at a position
    SelectTab(usize),

    /// Pointer input for the tab bar
    Mouse(MouseEvent),

    /// Terminal lost focus; any gesture in progress is abandoned
    FocusLost,

    /// Terminal resized
    Resize,

    /// No operation
    None,
}

/// Event handler that converts terminal events to application events
pub struct EventHandler;

impl EventHandler {
    /// Convert a crossterm event to an application event
    pub fn handle(event: Event) -> AppEvent {
        match event {
            Event::Key(key) => Self::handle_key(key),
            Event::Mouse(mouse) => AppEvent::Mouse(mouse),
            Event::FocusLost => AppEvent::FocusLost,
            Event::Resize(_, _) => AppEvent::Resize,
            _ => AppEvent::None,
        }
    }

    /// Handle keyboard events
    fn handle_key(key: KeyEvent) -> AppEvent {
        // Only handle key press events
        if key.kind != KeyEventKind::Press {
            return AppEvent::None;
        }

        match key.code {
            // Quit
            KeyCode::Char('q') | KeyCode::Esc => AppEvent::Quit,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => AppEvent::Quit,

            // Tab navigation
            KeyCode::Left | KeyCode::Char('h') | KeyCode::BackTab => AppEvent::PreviousTab,
            KeyCode::Right | KeyCode::Char('l') | KeyCode::Tab => AppEvent::NextTab,
            KeyCode::Char(digit @ '1'..='9') => AppEvent::SelectTab(digit as usize - '1' as usize),

            _ => AppEvent::None,
        }
    }
}
