//! Rewind - tic-tac-toe with move history and time-travel.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use rewind_games::{AppConfig, Cli, Command, replay_report, tui::run_tui};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = AppConfig::load_or_default(&cli.config)?;

    match cli.command {
        Command::Play => run_play(&config),
        Command::Replay { moves, jump } => run_replay(&config, &moves, jump),
    }
}

fn env_filter(config: &AppConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.log_filter()))
}

/// Run the terminal UI, logging to a file so output doesn't corrupt the screen.
fn run_play(config: &AppConfig) -> Result<()> {
    let log_file = std::fs::File::create(config.log_file())
        .with_context(|| format!("Failed to create log file {}", config.log_file().display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    run_tui(config)
}

/// Play a move list headlessly and print the final position.
fn run_replay(config: &AppConfig, moves: &str, jump: Option<usize>) -> Result<()> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_writer(std::io::stderr)
        .try_init();

    info!(moves, ?jump, "Replaying moves");
    let report = replay_report(moves, jump)?;
    print!("{}", report);
    Ok(())
}
