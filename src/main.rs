//! Turtle Challenge - CLI
//!
//! Prints one line per sequence outcome, or the settings problems if the
//! game settings are invalid. Logs go to stderr.

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use turtle_challenge::GameManager;

const FATAL_MESSAGE: &str = "A fatal error occurred during the execution of the game. \
Please check the log for the detailed error message.";

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level)),
        )
        .init();

    info!("Turtle challenge game launched");

    match run(&cli) {
        Ok(()) => {
            info!("Turtle challenge game exits");
            std::process::ExitCode::SUCCESS
        }
        Err(err) => {
            println!("{FATAL_MESSAGE}");
            error!("{err:#}");
            std::process::ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    info!(
        settings = %cli.settings.display(),
        moves = %cli.moves.display(),
        "starting the game"
    );

    let manager = GameManager::new();
    let lines = manager
        .start_files(&cli.settings, &cli.moves)
        .context("failed to run the game")?;

    for line in lines {
        println!("{line}");
        info!("{line}");
    }

    Ok(())
}
