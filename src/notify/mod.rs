//! Session-complete notifications.
//!
//! The notifier is fire-and-forget: it is invoked once per session
//! completion and its outcome is never awaited or checked. Playback
//! failures are swallowed so they cannot disturb the timer.

use notify_rust::Notification;

/// A fire-and-forget notification capability.
pub trait Notifier {
    /// Signal that a session has completed.
    fn play(&self);
}

/// Desktop notifier using the platform notification daemon.
#[derive(Debug, Default)]
pub struct DesktopNotifier;

impl DesktopNotifier {
    /// Create a new desktop notifier.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Notifier for DesktopNotifier {
    fn play(&self) {
        Notification::new()
            .summary("Pomodoro Timer")
            .body("Session complete")
            .appname("tomate")
            .sound_name("complete")
            .show()
            .ok();
    }
}
