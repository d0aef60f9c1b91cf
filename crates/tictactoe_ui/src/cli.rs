//! Command-line interface.

use crate::FirstPlayer;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Two-player tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Two-player tic-tac-toe, played by clicking cells", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the settings file (defaults are used if it does not exist)
    #[arg(short, long, default_value = "tictactoe.toml", global = true)]
    pub config: PathBuf,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play matches until you quit
    Play {
        /// Directory holding the symbol files
        #[arg(long)]
        assets_dir: Option<PathBuf>,

        /// Marker that opens the first match
        #[arg(long, value_enum)]
        first: Option<FirstPlayer>,
    },

    /// Load the symbol files and print them
    Symbols {
        /// Directory holding the symbol files
        #[arg(long)]
        assets_dir: Option<PathBuf>,
    },
}

impl Default for Command {
    fn default() -> Self {
        Self::Play {
            assets_dir: None,
            first: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_means_play() {
        let cli = Cli::try_parse_from(["tictactoe"]).unwrap();
        assert_eq!(cli.command.unwrap_or_default(), Command::default());
        assert_eq!(cli.config, PathBuf::from("tictactoe.toml"));
    }

    #[test]
    fn test_play_flags() {
        let cli = Cli::try_parse_from([
            "tictactoe",
            "play",
            "--first",
            "nought",
            "--assets-dir",
            "art",
        ])
        .unwrap();
        assert_eq!(
            cli.command,
            Some(Command::Play {
                assets_dir: Some(PathBuf::from("art")),
                first: Some(FirstPlayer::Nought),
            })
        );
    }

    #[test]
    fn test_global_config_after_subcommand() {
        let cli = Cli::try_parse_from(["tictactoe", "symbols", "--config", "other.toml"]).unwrap();
        assert_eq!(cli.config, PathBuf::from("other.toml"));
        assert!(matches!(cli.command, Some(Command::Symbols { assets_dir: None })));
    }

    #[test]
    fn test_rejects_blank_as_first_player() {
        assert!(Cli::try_parse_from(["tictactoe", "play", "--first", "blank"]).is_err());
    }
}
