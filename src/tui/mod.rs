//! Terminal User Interface (TUI) for tomate.
//!
//! Renders the single-screen timer and forwards user commands to the
//! session controller. Built with ratatui and crossterm.

mod app;
mod event;
mod ui;

pub use app::{App, SettingsField};

use std::io;
use std::time::Instant;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;

use crate::config::{Settings, SettingsStore};
use crate::error::TomateError;
use crate::notify::Notifier;

/// Run the TUI application.
///
/// # Errors
///
/// Returns an error if the TUI fails to initialize or run.
pub fn run<S: SettingsStore>(
    settings: Settings,
    store: S,
    notifier: &dyn Notifier,
    load_warning: Option<String>,
) -> Result<(), TomateError> {
    // Setup terminal
    enable_raw_mode()
        .map_err(|e| TomateError::Terminal(format!("Failed to enable raw mode: {e}")))?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)
        .map_err(|e| TomateError::Terminal(format!("Failed to setup terminal: {e}")))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)
        .map_err(|e| TomateError::Terminal(format!("Failed to create terminal: {e}")))?;

    // Create app state and run main loop
    let mut app = App::new(settings, store, notifier, load_warning);
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    terminal.show_cursor().ok();

    result
}

/// Run the main application loop.
fn run_app<B: Backend, S: SettingsStore>(
    terminal: &mut Terminal<B>,
    app: &mut App<'_, S>,
) -> Result<(), TomateError> {
    loop {
        // Draw UI
        terminal
            .draw(|frame| ui::render(frame, app))
            .map_err(|e| TomateError::Terminal(format!("Failed to draw: {e}")))?;

        // Handle events
        if let Some(action) = event::handle_events(app)? {
            match action {
                event::Action::Quit => break,
                event::Action::Toggle => app.toggle_timer(),
                event::Action::Reset => app.reset_timer(),
                event::Action::Save => app.save_settings(),
            }
        }

        // Advance the countdown: pending expiry first, then a due tick.
        app.advance(Instant::now());
    }

    Ok(())
}
