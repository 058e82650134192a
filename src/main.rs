use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use tomate::cli::args::Cli;
use tomate::config::{JsonSettingsStore, Paths, Settings, SettingsStore};
use tomate::error::TomateError;
use tomate::notify::DesktopNotifier;
use tomate::tui;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), TomateError> {
    let cli = Cli::parse();

    let paths = match &cli.config_dir {
        Some(root) => Paths::with_root(root.clone()),
        None => Paths::new()?,
    };
    paths.ensure_dirs()?;

    let store = JsonSettingsStore::new(paths.settings_file.clone());

    // A broken settings file falls back to defaults rather than aborting.
    let (mut settings, load_warning) = match store.load() {
        Ok(Some(s)) => (s, None),
        Ok(None) => (Settings::default(), None),
        Err(e) => (
            Settings::default(),
            Some(format!("Using default settings: {e}")),
        ),
    };

    cli.apply_overrides(&mut settings)?;

    let notifier = DesktopNotifier::new();

    tui::run(settings, store, &notifier, load_warning)
}
