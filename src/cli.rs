//! Command-line interface for the turtle challenge.

use std::path::PathBuf;

use clap::Parser;

/// Replay turtle move sequences across a minefield
#[derive(Parser, Debug)]
#[command(name = "turtle-challenge")]
#[command(about = "Replay turtle move sequences across a minefield", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Game settings file (.json or .xml)
    pub settings: PathBuf,

    /// Move sequences file (.json or .xml)
    pub moves: PathBuf,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
