//! tomate - A single-screen Pomodoro timer for the terminal
//!
//! This crate provides a Pomodoro work/break countdown timer with
//! configurable durations, session cycling, and desktop notifications.

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod error;
pub mod notify;
pub mod session;
pub mod tui;

pub use cli::args::Cli;
pub use config::{JsonSettingsStore, Paths, Settings, SettingsStore};
pub use error::TomateError;
pub use notify::{DesktopNotifier, Notifier};
pub use session::{SessionController, SessionType, Snapshot, Ticker};
