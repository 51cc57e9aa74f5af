//! Rewind - terminal tic-tac-toe with move history and time-travel
//!
//! This crate is the presentation layer for [`rewind_tictactoe`]. It reads
//! the controller's [`GameView`](rewind_tictactoe::GameView) to draw the
//! board and move list, and turns key presses into
//! [`Intent`](rewind_tictactoe::Intent)s.
//!
//! # Architecture
//!
//! - **CLI**: `rewind play` and `rewind replay` subcommands
//! - **Config**: TOML file with log settings and board colors
//! - **TUI**: ratatui/crossterm front end
//! - **Replay**: headless playback that prints the final position

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod replay;
pub mod tui;

// Crate-level exports - CLI
pub use cli::{Cli, Command};

// Crate-level exports - Configuration
pub use config::{AppConfig, ConfigError, Theme};

// Crate-level exports - Headless replay
pub use replay::{ReplayError, parse_moves, replay_report};
