//! Command-line interface for tomate.

pub mod args;

pub use args::Cli;
