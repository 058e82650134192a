//! Application state for the TUI.

use std::time::Instant;

use crate::config::{Settings, SettingsStore};
use crate::notify::Notifier;
use crate::session::{SessionController, Snapshot, Ticker};

/// Field selected in the settings panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsField {
    /// Work duration in minutes.
    Work,
    /// Short break duration in minutes.
    ShortBreak,
    /// Long break duration in minutes.
    LongBreak,
    /// Sound on/off.
    Sound,
}

impl SettingsField {
    const ORDER: [Self; 4] = [Self::Work, Self::ShortBreak, Self::LongBreak, Self::Sound];

    fn index(self) -> usize {
        Self::ORDER
            .iter()
            .position(|f| *f == self)
            .unwrap_or_default()
    }

    /// The field below this one, stopping at the last.
    #[must_use]
    pub fn next(self) -> Self {
        let i = self.index();
        Self::ORDER[(i + 1).min(Self::ORDER.len() - 1)]
    }

    /// The field above this one, stopping at the first.
    #[must_use]
    pub fn previous(self) -> Self {
        Self::ORDER[self.index().saturating_sub(1)]
    }
}

/// Application state.
pub struct App<'a, S: SettingsStore> {
    /// Timer state machine.
    pub controller: SessionController,
    /// Settings persistence.
    store: S,
    /// Session-complete notifier.
    notifier: &'a dyn Notifier,
    /// One-second tick source.
    ticker: Ticker,
    /// Whether the settings panel is open.
    pub settings_open: bool,
    /// Working copy edited in the settings panel.
    pub draft: Settings,
    /// Selected settings field.
    pub selected_field: SettingsField,
    /// Status message to display.
    pub status: Option<String>,
}

impl<'a, S: SettingsStore> App<'a, S> {
    /// Create a new app instance.
    pub fn new(
        settings: Settings,
        store: S,
        notifier: &'a dyn Notifier,
        load_warning: Option<String>,
    ) -> Self {
        let controller = SessionController::new(settings);
        let ticker = Ticker::new(Instant::now(), controller.epoch());
        let draft = controller.settings().clone();

        Self {
            controller,
            store,
            notifier,
            ticker,
            settings_open: false,
            draft,
            selected_field: SettingsField::Work,
            status: load_warning,
        }
    }

    /// Advance the timer: fire a pending expiry, or deliver a due tick.
    ///
    /// The expiry fires on the evaluation cycle after the tick that
    /// reached zero, so the clock renders 00:00 once before the session
    /// transitions.
    pub fn advance(&mut self, now: Instant) {
        if self.controller.is_expired() {
            self.controller.on_expire(self.notifier);
            self.status = Some(format!(
                "{} up next",
                self.controller.session().display_name()
            ));
            return;
        }

        if self
            .ticker
            .poll(now, self.controller.running(), self.controller.epoch())
        {
            self.controller.tick();
        }
    }

    /// Start or pause the timer.
    pub fn toggle_timer(&mut self) {
        self.controller.toggle();
        self.status = None;
    }

    /// Reset the current session.
    pub fn reset_timer(&mut self) {
        self.controller.reset();
        self.status = Some("Session reset".to_string());
    }

    /// Open or close the settings panel.
    ///
    /// Opening seeds the draft from the active settings; closing without
    /// saving discards the draft.
    pub fn open_settings(&mut self, open: bool) {
        if open {
            self.draft = self.controller.settings().clone();
            self.selected_field = SettingsField::Work;
        }
        self.settings_open = open;
    }

    /// Move selection to the next settings field.
    pub fn select_next_field(&mut self) {
        self.selected_field = self.selected_field.next();
    }

    /// Move selection to the previous settings field.
    pub fn select_previous_field(&mut self) {
        self.selected_field = self.selected_field.previous();
    }

    /// Adjust the selected draft field by the given number of minutes.
    ///
    /// The sound field toggles on any adjustment. Values are clamped to
    /// the widget range here; validation proper happens on save.
    pub fn adjust_field(&mut self, delta: i32) {
        match self.selected_field {
            SettingsField::Work => {
                self.draft.work_minutes = adjust(self.draft.work_minutes, delta, 60);
            }
            SettingsField::ShortBreak => {
                self.draft.short_break_minutes = adjust(self.draft.short_break_minutes, delta, 30);
            }
            SettingsField::LongBreak => {
                self.draft.long_break_minutes = adjust(self.draft.long_break_minutes, delta, 60);
            }
            SettingsField::Sound => {
                self.draft.sound_enabled = !self.draft.sound_enabled;
            }
        }
    }

    /// Validate, apply, and persist the draft settings.
    ///
    /// Rejected drafts leave the active settings untouched and keep the
    /// panel open. A storage failure keeps the applied settings in memory
    /// and surfaces a warning instead of crashing.
    pub fn save_settings(&mut self) {
        match self.controller.apply_settings(self.draft.clone()) {
            Ok(()) => {
                match self.store.save(self.controller.settings()) {
                    Ok(()) => self.status = Some("Settings saved".to_string()),
                    Err(e) => {
                        self.status = Some(format!("Settings applied but not persisted: {e}"));
                    }
                }
                self.settings_open = false;
            }
            Err(e) => self.status = Some(e.to_string()),
        }
    }

    /// Snapshot of the timer for rendering.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        self.controller.snapshot()
    }
}

fn adjust(value: u32, delta: i32, max: u32) -> u32 {
    value.saturating_add_signed(delta).clamp(1, max)
}
