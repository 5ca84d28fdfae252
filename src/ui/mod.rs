// UI module
// TUI views and the event loop

pub mod app_view;
pub mod styles;

use anyhow::Result;
use crossterm::event;
use ratatui::{backend::Backend, Terminal};
use std::time::Instant;
use tracing::trace;

use crate::core::{App, EventHandler, ANIMATION_FRAME};

pub use app_view::render_app;
pub use styles::Styles;

/// Run the main application event loop
/// Frames are drawn when something changed or the highlight is still moving
pub fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    let mut needs_redraw = true;
    loop {
        if needs_redraw {
            let now = Instant::now();
            terminal.draw(|f| render_app(f, app, now))?;
            // A frame drawn before the tween ended leaves one more to draw
            needs_redraw = app.tab_bar.is_animating(now);
        }

        // Poll fast while the highlight is moving or a settling frame is owed
        let timeout = if needs_redraw {
            ANIMATION_FRAME
        } else {
            app.poll_timeout(Instant::now())
        };
        if event::poll(timeout)? {
            let event = event::read()?;
            let app_event = EventHandler::handle(event);
            trace!(?app_event, "event");

            needs_redraw |= app.handle_event(app_event);
            needs_redraw |= app.take_change().is_some();
        }

        // Check if we should quit
        if app.should_quit {
            return Ok(());
        }
    }
}
