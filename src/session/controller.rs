//! The session controller.
//!
//! Owns the countdown, session-type transitions, completed-session
//! counting, and settings application. It is driven externally: a tick
//! source delivers `tick()` once per second while running, and the
//! presentation layer forwards user commands. Expiry is two-phase: the
//! tick that reaches zero leaves the clock at 00:00, and the transition
//! fires when the driver observes `is_expired()` on a later cycle.

use chrono::Duration;

use super::SessionType;
use crate::config::Settings;
use crate::error::TomateError;
use crate::notify::Notifier;

/// Read-only view of the controller for the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    /// Remaining time formatted as MM:SS.
    pub clock: String,
    /// Current session type.
    pub session: SessionType,
    /// Whether the countdown is running.
    pub running: bool,
    /// Completed sessions within the current cycle of four.
    pub completed_in_cycle: u32,
    /// Theme key for the current session type.
    pub theme: &'static str,
}

/// The Pomodoro session state machine.
#[derive(Debug, Clone)]
pub struct SessionController {
    settings: Settings,
    session: SessionType,
    remaining_seconds: u32,
    running: bool,
    completed: u32,
    epoch: u64,
}

impl SessionController {
    /// Create a controller in its initial state: a paused work session
    /// at the full configured duration.
    #[must_use]
    pub const fn new(settings: Settings) -> Self {
        let remaining_seconds = SessionType::Work.duration_seconds(&settings);
        Self {
            settings,
            session: SessionType::Work,
            remaining_seconds,
            running: false,
            completed: 0,
            epoch: 0,
        }
    }

    /// Advance the countdown by one second.
    ///
    /// Only has an effect while running with time remaining; the tick
    /// that reaches zero does not transition the session.
    pub fn tick(&mut self) {
        if self.running && self.remaining_seconds > 0 {
            self.remaining_seconds -= 1;
        }
    }

    /// Check whether the countdown has reached zero.
    ///
    /// The driver evaluates this each cycle and invokes [`Self::on_expire`]
    /// when it holds.
    #[must_use]
    pub const fn is_expired(&self) -> bool {
        self.remaining_seconds == 0
    }

    /// Handle a naturally expired session.
    ///
    /// Plays the notifier if sound is enabled, stops the countdown,
    /// counts the completion, and transitions to the next session type
    /// at its full configured duration. Work sessions hand off to a long
    /// break when the post-increment count is divisible by four, and to
    /// a short break otherwise; breaks always hand back to work.
    ///
    /// No-op unless the countdown has actually reached zero.
    pub fn on_expire(&mut self, notifier: &dyn Notifier) {
        if self.remaining_seconds != 0 {
            return;
        }

        if self.settings.sound_enabled {
            notifier.play();
        }

        self.running = false;
        self.completed += 1;

        self.session = match self.session {
            SessionType::Work => {
                if self.completed % 4 == 0 {
                    SessionType::LongBreak
                } else {
                    SessionType::ShortBreak
                }
            }
            SessionType::ShortBreak | SessionType::LongBreak => SessionType::Work,
        };

        self.remaining_seconds = self.session.duration_seconds(&self.settings);
        self.epoch += 1;
    }

    /// Start or pause the countdown.
    ///
    /// Allowed in any state; touches nothing but the running flag.
    pub fn toggle(&mut self) {
        self.running = !self.running;
    }

    /// Stop the countdown and restore the current session's full duration.
    ///
    /// Does not change the session type or the completed count.
    pub fn reset(&mut self) {
        self.running = false;
        self.remaining_seconds = self.session.duration_seconds(&self.settings);
        self.epoch += 1;
    }

    /// Validate and apply new settings, then reset the current session.
    ///
    /// This is the pure half of saving settings; persistence is sequenced
    /// separately by the caller. The current session type is kept, but its
    /// duration may differ under the new settings.
    ///
    /// # Errors
    ///
    /// Returns `TomateError::InvalidSettings` if the new settings are out
    /// of range. Prior settings are retained unchanged.
    pub fn apply_settings(&mut self, new_settings: Settings) -> Result<(), TomateError> {
        new_settings.validate()?;
        self.settings = new_settings;
        self.reset();
        Ok(())
    }

    /// Get a read-only snapshot for rendering.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            clock: format_clock(self.remaining()),
            session: self.session,
            running: self.running,
            completed_in_cycle: self.completed % 4,
            theme: self.session.theme_key(),
        }
    }

    /// The active settings.
    #[must_use]
    pub const fn settings(&self) -> &Settings {
        &self.settings
    }

    /// The current session type.
    #[must_use]
    pub const fn session(&self) -> SessionType {
        self.session
    }

    /// Remaining seconds in the current session.
    #[must_use]
    pub const fn remaining_seconds(&self) -> u32 {
        self.remaining_seconds
    }

    /// Remaining time as a Duration.
    #[must_use]
    pub const fn remaining(&self) -> Duration {
        Duration::seconds(self.remaining_seconds as i64)
    }

    /// Whether the countdown is running.
    #[must_use]
    pub const fn running(&self) -> bool {
        self.running
    }

    /// Total sessions completed by natural expiry.
    #[must_use]
    pub const fn completed(&self) -> u32 {
        self.completed
    }

    /// Identity of the current session instance.
    ///
    /// Bumped on every reset, transition, and settings application so the
    /// tick source can discard ticks scheduled against a stale session.
    #[must_use]
    pub const fn epoch(&self) -> u64 {
        self.epoch
    }
}

/// Format a duration as MM:SS with zero-padded fields.
#[must_use]
pub fn format_clock(d: Duration) -> String {
    let total_seconds = d.num_seconds().abs();
    let minutes = total_seconds / 60;
    let seconds = total_seconds % 60;
    format!("{minutes:02}:{seconds:02}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::testing::RecordingNotifier;

    fn controller() -> SessionController {
        SessionController::new(Settings::default())
    }

    /// Run the controller until the given completed count, expiring
    /// sessions naturally.
    fn complete_sessions(ctrl: &mut SessionController, notifier: &RecordingNotifier, count: u32) {
        while ctrl.completed() < count {
            ctrl.toggle();
            while ctrl.remaining_seconds() > 0 {
                ctrl.tick();
            }
            ctrl.on_expire(notifier);
        }
    }

    #[test]
    fn test_initial_state() {
        let ctrl = controller();

        assert_eq!(ctrl.session(), SessionType::Work);
        assert_eq!(ctrl.remaining_seconds(), 25 * 60);
        assert_eq!(ctrl.remaining().num_minutes(), 25);
        assert!(!ctrl.running());
        assert_eq!(ctrl.completed(), 0);
    }

    #[test]
    fn test_tick_decrements_while_running() {
        let mut ctrl = controller();
        ctrl.toggle();

        ctrl.tick();

        assert_eq!(ctrl.remaining_seconds(), 25 * 60 - 1);
    }

    #[test]
    fn test_tick_ignored_while_paused() {
        let mut ctrl = controller();

        ctrl.tick();

        assert_eq!(ctrl.remaining_seconds(), 25 * 60);
    }

    #[test]
    fn test_tick_to_zero_leaves_running() {
        let mut ctrl = controller();
        ctrl.toggle();
        while ctrl.remaining_seconds() > 1 {
            ctrl.tick();
        }

        ctrl.tick();

        // Reaching zero does not transition or stop by itself.
        assert_eq!(ctrl.remaining_seconds(), 0);
        assert!(ctrl.running());
        assert!(ctrl.is_expired());
        assert_eq!(ctrl.session(), SessionType::Work);
    }

    #[test]
    fn test_tick_at_zero_is_noop() {
        let mut ctrl = controller();
        ctrl.toggle();
        while ctrl.remaining_seconds() > 0 {
            ctrl.tick();
        }

        ctrl.tick();

        assert_eq!(ctrl.remaining_seconds(), 0);
    }

    #[test]
    fn test_toggle_twice_restores_state() {
        let mut ctrl = controller();
        let before = ctrl.snapshot();

        ctrl.toggle();
        assert!(ctrl.running());
        ctrl.toggle();

        assert_eq!(ctrl.snapshot(), before);
    }

    #[test]
    fn test_work_expiry_goes_to_short_break() {
        let notifier = RecordingNotifier::new();
        let mut ctrl = controller();
        ctrl.toggle();
        while ctrl.remaining_seconds() > 0 {
            ctrl.tick();
        }

        ctrl.on_expire(&notifier);

        assert_eq!(ctrl.completed(), 1);
        assert_eq!(ctrl.session(), SessionType::ShortBreak);
        assert_eq!(ctrl.remaining_seconds(), 5 * 60);
        assert!(!ctrl.running());
    }

    /// Work session with the given completion count behind it.
    fn work_session_with_completed(completed: u32) -> SessionController {
        let settings = Settings::default();
        let remaining_seconds = SessionType::Work.duration_seconds(&settings);
        SessionController {
            settings,
            session: SessionType::Work,
            remaining_seconds,
            running: false,
            completed,
            epoch: 0,
        }
    }

    #[test]
    fn test_fourth_completion_goes_to_long_break() {
        let notifier = RecordingNotifier::new();
        let mut ctrl = work_session_with_completed(3);

        ctrl.toggle();
        while ctrl.remaining_seconds() > 0 {
            ctrl.tick();
        }
        ctrl.on_expire(&notifier);

        assert_eq!(ctrl.completed(), 4);
        assert_eq!(ctrl.session(), SessionType::LongBreak);
        assert_eq!(ctrl.remaining_seconds(), 15 * 60);
    }

    #[test]
    fn test_early_work_completions_go_to_short_break() {
        let notifier = RecordingNotifier::new();
        for completed in [0, 1, 2] {
            let mut ctrl = work_session_with_completed(completed);
            ctrl.toggle();
            while ctrl.remaining_seconds() > 0 {
                ctrl.tick();
            }

            ctrl.on_expire(&notifier);

            assert_eq!(ctrl.session(), SessionType::ShortBreak);
        }
    }

    #[test]
    fn test_break_expiry_goes_to_work() {
        let notifier = RecordingNotifier::new();
        let mut ctrl = controller();
        complete_sessions(&mut ctrl, &notifier, 1);
        assert_eq!(ctrl.session(), SessionType::ShortBreak);
        let completed_before = ctrl.completed();

        ctrl.toggle();
        while ctrl.remaining_seconds() > 0 {
            ctrl.tick();
        }
        ctrl.on_expire(&notifier);

        assert_eq!(ctrl.session(), SessionType::Work);
        assert_eq!(ctrl.remaining_seconds(), 25 * 60);
        assert_eq!(ctrl.completed(), completed_before + 1);
    }

    #[test]
    fn test_on_expire_with_time_remaining_is_noop() {
        let notifier = RecordingNotifier::new();
        let mut ctrl = controller();
        ctrl.toggle();
        ctrl.tick();

        ctrl.on_expire(&notifier);

        assert_eq!(ctrl.session(), SessionType::Work);
        assert_eq!(ctrl.completed(), 0);
        assert_eq!(notifier.plays(), 0);
    }

    #[test]
    fn test_expire_plays_sound_once() {
        let notifier = RecordingNotifier::new();
        let mut ctrl = controller();
        complete_sessions(&mut ctrl, &notifier, 1);

        assert_eq!(notifier.plays(), 1);
    }

    #[test]
    fn test_expire_respects_sound_disabled() {
        let notifier = RecordingNotifier::new();
        let mut settings = Settings::default();
        settings.sound_enabled = false;
        let mut ctrl = SessionController::new(settings);
        complete_sessions(&mut ctrl, &notifier, 1);

        assert_eq!(notifier.plays(), 0);
        // The transition itself still happens.
        assert_eq!(ctrl.session(), SessionType::ShortBreak);
    }

    #[test]
    fn test_reset_restores_duration_keeps_session_and_count() {
        let notifier = RecordingNotifier::new();
        let mut ctrl = controller();
        complete_sessions(&mut ctrl, &notifier, 1);
        ctrl.toggle();
        ctrl.tick();
        ctrl.tick();

        ctrl.reset();

        assert!(!ctrl.running());
        assert_eq!(ctrl.session(), SessionType::ShortBreak);
        assert_eq!(ctrl.remaining_seconds(), 5 * 60);
        assert_eq!(ctrl.completed(), 1);
    }

    #[test]
    fn test_reset_bumps_epoch() {
        let mut ctrl = controller();
        let epoch = ctrl.epoch();

        ctrl.reset();

        assert_eq!(ctrl.epoch(), epoch + 1);
    }

    #[test]
    fn test_apply_settings_resets_current_session() {
        let mut ctrl = controller();
        ctrl.toggle();
        ctrl.tick();

        let mut settings = Settings::default();
        settings.work_minutes = 50;
        ctrl.apply_settings(settings).unwrap();

        assert!(!ctrl.running());
        assert_eq!(ctrl.session(), SessionType::Work);
        assert_eq!(ctrl.remaining_seconds(), 50 * 60);
    }

    #[test]
    fn test_apply_settings_uses_new_duration_for_current_break() {
        let notifier = RecordingNotifier::new();
        let mut ctrl = controller();
        complete_sessions(&mut ctrl, &notifier, 1);
        assert_eq!(ctrl.session(), SessionType::ShortBreak);

        let mut settings = Settings::default();
        settings.short_break_minutes = 10;
        ctrl.apply_settings(settings).unwrap();

        assert_eq!(ctrl.remaining_seconds(), 10 * 60);
    }

    #[test]
    fn test_apply_settings_rejects_out_of_range() {
        let mut ctrl = controller();

        let mut settings = Settings::default();
        settings.work_minutes = 0;
        let result = ctrl.apply_settings(settings);

        assert!(matches!(result, Err(TomateError::InvalidSettings(_))));
        // Prior settings unchanged.
        assert_eq!(ctrl.settings().work_minutes, 25);
        assert_eq!(ctrl.remaining_seconds(), 25 * 60);
    }

    #[test]
    fn test_full_work_session_scenario() {
        // Default settings, work session: 25*60 ticks then expiry.
        let notifier = RecordingNotifier::new();
        let mut ctrl = controller();
        ctrl.toggle();

        for _ in 0..25 * 60 {
            ctrl.tick();
        }
        assert!(ctrl.is_expired());
        ctrl.on_expire(&notifier);

        assert_eq!(ctrl.completed(), 1);
        assert_eq!(ctrl.session(), SessionType::ShortBreak);
        assert_eq!(ctrl.remaining_seconds(), 300);
    }

    #[test]
    fn test_snapshot() {
        let mut ctrl = controller();
        ctrl.toggle();
        ctrl.tick();

        let snapshot = ctrl.snapshot();

        assert_eq!(snapshot.clock, "24:59");
        assert_eq!(snapshot.session, SessionType::Work);
        assert!(snapshot.running);
        assert_eq!(snapshot.completed_in_cycle, 0);
        assert_eq!(snapshot.theme, "work");
    }

    #[test]
    fn test_completed_in_cycle_wraps() {
        let notifier = RecordingNotifier::new();
        let mut ctrl = controller();
        complete_sessions(&mut ctrl, &notifier, 5);

        assert_eq!(ctrl.snapshot().completed_in_cycle, 1);
    }

    #[test]
    fn test_format_clock() {
        assert_eq!(format_clock(Duration::minutes(25)), "25:00");
        assert_eq!(format_clock(Duration::seconds(90)), "01:30");
        assert_eq!(format_clock(Duration::seconds(9)), "00:09");
        assert_eq!(format_clock(Duration::zero()), "00:00");
    }

    #[test]
    fn test_snapshot_clock_tracks_remaining() {
        let mut ctrl = controller();
        ctrl.toggle();
        for _ in 0..90 {
            ctrl.tick();
        }

        assert_eq!(ctrl.remaining().num_seconds(), i64::from(25 * 60 - 90));
        assert_eq!(ctrl.snapshot().clock, "23:30");
    }
}
