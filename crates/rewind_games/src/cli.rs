//! Command-line interface for rewind.

use clap::{Parser, Subcommand};

/// Rewind - tic-tac-toe with move history and time-travel
#[derive(Parser, Debug)]
#[command(name = "rewind")]
#[command(about = "Tic-tac-toe with move history and time-travel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (defaults are used if it doesn't exist)
    #[arg(short, long, global = true, default_value = "rewind.toml")]
    pub config: std::path::PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal UI
    Play,

    /// Play a list of moves without a UI and print the resulting position
    Replay {
        /// Comma-separated squares, as the numbers 1-9 shown on the board or labels like "center"
        moves: String,

        /// History step to view after playing (defaults to the last move)
        #[arg(long)]
        jump: Option<usize>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_replay_with_jump() {
        let cli = Cli::try_parse_from(["rewind", "replay", "1,5,2", "--jump", "2"])
            .expect("valid arguments");

        assert_eq!(cli.config, std::path::PathBuf::from("rewind.toml"));
        match cli.command {
            Command::Replay { moves, jump } => {
                assert_eq!(moves, "1,5,2");
                assert_eq!(jump, Some(2));
            }
            Command::Play => panic!("expected replay"),
        }
    }

    #[test]
    fn test_parse_play_with_config() {
        let cli = Cli::try_parse_from(["rewind", "play", "--config", "custom.toml"])
            .expect("valid arguments");

        assert!(matches!(cli.command, Command::Play));
        assert_eq!(cli.config, std::path::PathBuf::from("custom.toml"));
    }

    #[test]
    fn test_cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
