//! Configuration management for tomate.
//!
//! This module handles loading and saving settings from `~/.tomate/`.

mod paths;
mod settings;
mod store;

pub use paths::Paths;
pub use settings::Settings;
pub use store::{JsonSettingsStore, SettingsStore};
