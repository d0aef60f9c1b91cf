//! Terminal front-end settings.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tictactoe_core::Marker;
use tracing::{debug, info, instrument};

/// Which marker opens the first match.
///
/// Defaults to [`FirstPlayer::Cross`]; later matches alternate regardless.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum FirstPlayer {
    /// Cross opens.
    #[default]
    Cross,
    /// Nought opens.
    Nought,
}

impl FirstPlayer {
    /// Marker of the opening player.
    pub fn marker(self) -> Marker {
        match self {
            Self::Cross => Marker::Cross,
            Self::Nought => Marker::Nought,
        }
    }

    /// Marker of the player who moves second.
    pub fn other(self) -> Marker {
        self.marker().opponent()
    }
}

/// Settings read from `tictactoe.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct UiConfig {
    /// Directory containing `blank.txt`, `cross.txt` and `nought.txt`.
    #[serde(default = "default_assets_dir")]
    assets_dir: PathBuf,

    /// Who opens the first match.
    #[serde(default)]
    first_player: FirstPlayer,

    /// File receiving log output.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,

    /// Filter used when `RUST_LOG` is not set.
    #[serde(default = "default_log_filter")]
    log_filter: String,
}

fn default_assets_dir() -> PathBuf {
    PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/assets"))
}

fn default_log_file() -> PathBuf {
    PathBuf::from("tictactoe.log")
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            assets_dir: default_assets_dir(),
            first_player: FirstPlayer::default(),
            log_file: default_log_file(),
            log_filter: default_log_filter(),
        }
    }
}

impl UiConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(first_player = ?config.first_player, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise returns the defaults.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Applies command-line overrides.
    pub fn with_overrides(
        mut self,
        assets_dir: Option<PathBuf>,
        first_player: Option<FirstPlayer>,
    ) -> Self {
        if let Some(dir) = assets_dir {
            self.assets_dir = dir;
        }
        if let Some(first) = first_player {
            self.first_player = first;
        }
        self
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
