//! Event handling for the TUI.

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};

use crate::config::SettingsStore;
use crate::error::TomateError;
use crate::tui::app::App;

/// Action to take after handling an event.
pub enum Action {
    /// Quit the application.
    Quit,
    /// Start or pause the timer.
    Toggle,
    /// Reset the current session.
    Reset,
    /// Save the settings draft.
    Save,
}

/// How long to block waiting for input before the loop advances the timer.
const POLL_TIMEOUT: Duration = Duration::from_millis(100);

/// Handle terminal events.
///
/// Returns an action to take, or None if no action is needed. Settings
/// panel navigation mutates the app directly.
///
/// # Errors
///
/// Returns an error if event polling fails.
pub fn handle_events<S: SettingsStore>(app: &mut App<'_, S>) -> Result<Option<Action>, TomateError> {
    if !event::poll(POLL_TIMEOUT)
        .map_err(|e| TomateError::Terminal(format!("Event poll failed: {e}")))?
    {
        return Ok(None);
    }

    let Event::Key(key) =
        event::read().map_err(|e| TomateError::Terminal(format!("Event read failed: {e}")))?
    else {
        return Ok(None);
    };

    if key.kind == KeyEventKind::Release {
        return Ok(None);
    }

    // Handle Ctrl+C
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Ok(Some(Action::Quit));
    }

    if app.settings_open {
        return Ok(handle_settings_key(app, key.code));
    }

    match key.code {
        // Quit
        KeyCode::Char('q') | KeyCode::Esc => return Ok(Some(Action::Quit)),

        // Timer controls
        KeyCode::Char(' ') => return Ok(Some(Action::Toggle)),
        KeyCode::Char('r') => return Ok(Some(Action::Reset)),

        // Settings panel
        KeyCode::Char('s') => app.open_settings(true),

        // Help
        KeyCode::Char('?') => {
            app.status =
                Some("Space:start/pause | r:reset | s:settings | q:quit".to_string());
        }

        _ => {}
    }

    Ok(None)
}

/// Handle a key while the settings panel is open.
fn handle_settings_key<S: SettingsStore>(app: &mut App<'_, S>, code: KeyCode) -> Option<Action> {
    match code {
        // Cancel: retain prior settings
        KeyCode::Esc | KeyCode::Char('q') => app.open_settings(false),

        // Field navigation - vim style
        KeyCode::Char('j') | KeyCode::Down => app.select_next_field(),
        KeyCode::Char('k') | KeyCode::Up => app.select_previous_field(),

        // Adjust the selected field
        KeyCode::Char('h') | KeyCode::Left | KeyCode::Char('-') => app.adjust_field(-1),
        KeyCode::Char('l') | KeyCode::Right | KeyCode::Char('+') | KeyCode::Char(' ') => {
            app.adjust_field(1);
        }

        // Save
        KeyCode::Enter => return Some(Action::Save),

        _ => {}
    }

    None
}
