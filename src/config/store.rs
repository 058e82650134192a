//! Settings persistence.
//!
//! A [`SettingsStore`] is a simple key-value collaborator: one settings
//! record under one fixed location. The file-backed implementation keeps
//! a flat JSON file so it can be inspected and edited by hand.

use std::path::PathBuf;

use super::settings::Settings;
use crate::error::TomateError;

/// Key-value persistence for timer settings.
pub trait SettingsStore {
    /// Load the persisted settings, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the stored record exists but cannot be read
    /// or parsed.
    fn load(&self) -> Result<Option<Settings>, TomateError>;

    /// Persist the given settings, replacing any prior record.
    ///
    /// # Errors
    ///
    /// Returns an error if the record cannot be written.
    fn save(&self, settings: &Settings) -> Result<(), TomateError>;
}

/// Settings store backed by a single JSON file.
#[derive(Debug, Clone)]
pub struct JsonSettingsStore {
    path: PathBuf,
}

impl JsonSettingsStore {
    /// Create a store backed by the given file path.
    #[must_use]
    pub const fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// The file path this store reads and writes.
    #[must_use]
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl SettingsStore for JsonSettingsStore {
    fn load(&self) -> Result<Option<Settings>, TomateError> {
        if !self.path.exists() {
            return Ok(None);
        }

        let contents = std::fs::read_to_string(&self.path).map_err(|e| {
            TomateError::Storage(format!(
                "Failed to read settings file {}: {e}",
                self.path.display()
            ))
        })?;

        let settings = serde_json::from_str(&contents).map_err(|e| {
            TomateError::Storage(format!(
                "Failed to parse settings file {}: {e}",
                self.path.display()
            ))
        })?;

        Ok(Some(settings))
    }

    fn save(&self, settings: &Settings) -> Result<(), TomateError> {
        let contents = serde_json::to_string_pretty(settings)?;

        std::fs::write(&self.path, contents).map_err(|e| {
            TomateError::Storage(format!(
                "Failed to write settings file {}: {e}",
                self.path.display()
            ))
        })
    }
}
