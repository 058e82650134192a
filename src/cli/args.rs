use std::path::PathBuf;

use clap::Parser;

use crate::config::Settings;
use crate::error::TomateError;

#[derive(Parser, Debug)]
#[command(name = "tomate")]
#[command(about = "A single-screen Pomodoro timer for the terminal")]
#[command(long_about = "tomate - A single-screen Pomodoro timer for the terminal

Runs a full-screen countdown timer that cycles through Pomodoro work and
break sessions. Work sessions alternate with short breaks; every fourth
completed session earns a long break. Durations are configurable from the
in-app settings panel and persist between runs.

KEYS:
  Space     Start / pause the timer
  r         Reset the current session
  s         Open the settings panel
  q / Esc   Quit

Duration flags below override the saved settings for this run only;
use the settings panel (s) to change them permanently.")]
#[command(version, propagate_version = true)]
pub struct Cli {
    /// Work session length in minutes (1-60), for this run only
    #[arg(short, long, value_name = "MINUTES")]
    pub work: Option<u32>,

    /// Short break length in minutes (1-30), for this run only
    #[arg(short, long, value_name = "MINUTES")]
    pub short_break: Option<u32>,

    /// Long break length in minutes (1-60), for this run only
    #[arg(short, long, value_name = "MINUTES")]
    pub long_break: Option<u32>,

    /// Disable the session-complete notification sound
    #[arg(long)]
    pub no_sound: bool,

    /// Directory for the settings file (defaults to ~/.tomate)
    #[arg(long, value_name = "DIR", env = "TOMATE_CONFIG_DIR", hide = true)]
    pub config_dir: Option<PathBuf>,
}

impl Cli {
    /// Apply command-line overrides to loaded settings.
    ///
    /// Overrides are validated against the same bounds as saved settings.
    ///
    /// # Errors
    ///
    /// Returns `TomateError::InvalidSettings` if an override is out of range.
    pub fn apply_overrides(&self, settings: &mut Settings) -> Result<(), TomateError> {
        let mut overridden = settings.clone();

        if let Some(work) = self.work {
            overridden.work_minutes = work;
        }
        if let Some(short) = self.short_break {
            overridden.short_break_minutes = short;
        }
        if let Some(long) = self.long_break {
            overridden.long_break_minutes = long;
        }
        if self.no_sound {
            overridden.sound_enabled = false;
        }

        overridden.validate()?;
        *settings = overridden;
        Ok(())
    }
}
