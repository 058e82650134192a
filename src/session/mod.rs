//! Pomodoro session state machine.
//!
//! Provides the countdown controller and its supporting types:
//! - Session type cycling (work, short break, long break)
//! - One-second tick handling and expiry transitions
//! - Settings application mid-cycle

pub mod controller;
pub mod ticker;

pub use controller::{format_clock, SessionController, Snapshot};
pub use ticker::Ticker;

use serde::{Deserialize, Serialize};

use crate::config::Settings;

/// Type of Pomodoro session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionType {
    /// Focused work session
    Work,
    /// Short break between work sessions
    ShortBreak,
    /// Long break after a full cycle of work sessions
    LongBreak,
}

impl SessionType {
    /// Get the configured duration for this session type, in seconds.
    #[must_use]
    pub const fn duration_seconds(&self, settings: &Settings) -> u32 {
        let minutes = match self {
            Self::Work => settings.work_minutes,
            Self::ShortBreak => settings.short_break_minutes,
            Self::LongBreak => settings.long_break_minutes,
        };
        minutes * 60
    }

    /// Get display name.
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Work => "Focus Time",
            Self::ShortBreak => "Short Break",
            Self::LongBreak => "Long Break",
        }
    }

    /// Key identifying the visual theme for this session type.
    #[must_use]
    pub const fn theme_key(&self) -> &'static str {
        match self {
            Self::Work => "work",
            Self::ShortBreak => "short_break",
            Self::LongBreak => "long_break",
        }
    }

    /// Check if this is a break type.
    #[must_use]
    pub const fn is_break(&self) -> bool {
        matches!(self, Self::ShortBreak | Self::LongBreak)
    }
}

impl std::fmt::Display for SessionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
