//! Timer settings.
//!
//! Settings are replaced wholesale on save and persisted as a flat
//! JSON record via [`super::store::SettingsStore`].

use serde::{Deserialize, Serialize};

use crate::error::TomateError;

/// Maximum work session length in minutes.
pub const MAX_WORK_MINUTES: u32 = 60;
/// Maximum short break length in minutes.
pub const MAX_SHORT_BREAK_MINUTES: u32 = 30;
/// Maximum long break length in minutes.
pub const MAX_LONG_BREAK_MINUTES: u32 = 60;

/// User-configurable timer settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Work session length in minutes (1-60).
    #[serde(default = "default_work")]
    pub work_minutes: u32,
    /// Short break length in minutes (1-30).
    #[serde(default = "default_short_break")]
    pub short_break_minutes: u32,
    /// Long break length in minutes (1-60).
    #[serde(default = "default_long_break")]
    pub long_break_minutes: u32,
    /// Play a notification sound when a session completes.
    #[serde(default = "default_true")]
    pub sound_enabled: bool,
}

// Default value functions for serde
const fn default_work() -> u32 {
    25
}

const fn default_short_break() -> u32 {
    5
}

const fn default_long_break() -> u32 {
    15
}

const fn default_true() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            work_minutes: default_work(),
            short_break_minutes: default_short_break(),
            long_break_minutes: default_long_break(),
            sound_enabled: default_true(),
        }
    }
}

impl Settings {
    /// Validate that all durations are within bounds.
    ///
    /// # Errors
    ///
    /// Returns `TomateError::InvalidSettings` naming the offending field
    /// if any duration is zero or above its maximum.
    pub fn validate(&self) -> Result<(), TomateError> {
        if self.work_minutes == 0 || self.work_minutes > MAX_WORK_MINUTES {
            return Err(TomateError::InvalidSettings(format!(
                "work minutes must be 1-{MAX_WORK_MINUTES}, got {}",
                self.work_minutes
            )));
        }

        if self.short_break_minutes == 0 || self.short_break_minutes > MAX_SHORT_BREAK_MINUTES {
            return Err(TomateError::InvalidSettings(format!(
                "short break minutes must be 1-{MAX_SHORT_BREAK_MINUTES}, got {}",
                self.short_break_minutes
            )));
        }

        if self.long_break_minutes == 0 || self.long_break_minutes > MAX_LONG_BREAK_MINUTES {
            return Err(TomateError::InvalidSettings(format!(
                "long break minutes must be 1-{MAX_LONG_BREAK_MINUTES}, got {}",
                self.long_break_minutes
            )));
        }

        Ok(())
    }
}
