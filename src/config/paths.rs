//! Path resolution for tomate configuration files.
//!
//! All tomate data is stored in `~/.tomate/`:
//! - `settings.json` - Persisted timer settings

use std::path::PathBuf;

use crate::error::TomateError;

/// Paths to tomate configuration files.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Root directory: `~/.tomate/`
    pub root: PathBuf,
    /// Settings file: `~/.tomate/settings.json`
    pub settings_file: PathBuf,
}

impl Paths {
    /// Create paths based on the user's home directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, TomateError> {
        let home = std::env::var("HOME")
            .map_err(|_| TomateError::Config("Could not determine home directory".to_string()))?;

        let root = PathBuf::from(home).join(".tomate");

        Ok(Self {
            settings_file: root.join("settings.json"),
            root,
        })
    }

    /// Create paths with a custom root directory (useful for testing).
    #[must_use]
    pub fn with_root(root: PathBuf) -> Self {
        Self {
            settings_file: root.join("settings.json"),
            root,
        }
    }

    /// Ensure the root directory exists, creating it if necessary.
    ///
    /// # Errors
    ///
    /// Returns an error if directory creation fails.
    pub fn ensure_dirs(&self) -> Result<(), TomateError> {
        if !self.root.exists() {
            std::fs::create_dir_all(&self.root).map_err(|e| {
                TomateError::Config(format!(
                    "Failed to create directory {:?}: {}",
                    self.root, e
                ))
            })?;
        }

        Ok(())
    }
}
