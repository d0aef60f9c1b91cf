//! Tests for loading terminal settings.

use std::io::Write;
use std::path::PathBuf;
use tempfile::{NamedTempFile, TempDir};
use tictactoe_core::Marker;
use tictactoe_ui::{FirstPlayer, UiConfig};

fn config_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_missing_file_gives_defaults() {
    let dir = TempDir::new().unwrap();
    let config = UiConfig::load_or_default(dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, UiConfig::default());
    assert_eq!(*config.first_player(), FirstPlayer::Cross);
    assert_eq!(config.log_filter(), "info");
    assert!(config.assets_dir().join("cross.txt").exists());
}

#[test]
fn test_parses_first_player() {
    let file = config_file("first_player = \"nought\"\n");
    let config = UiConfig::from_file(file.path()).unwrap();
    assert_eq!(*config.first_player(), FirstPlayer::Nought);
    assert_eq!(config.first_player().marker(), Marker::Nought);
    assert_eq!(config.first_player().other(), Marker::Cross);
    // Unset keys keep their defaults
    assert_eq!(config.log_file(), &PathBuf::from("tictactoe.log"));
}

#[test]
fn test_parses_all_keys() {
    let file = config_file(
        r#"
assets_dir = "/tmp/art"
first_player = "cross"
log_file = "game.log"
log_filter = "tictactoe_core=debug"
"#,
    );
    let config = UiConfig::from_file(file.path()).unwrap();
    assert_eq!(config.assets_dir(), &PathBuf::from("/tmp/art"));
    assert_eq!(config.log_file(), &PathBuf::from("game.log"));
    assert_eq!(config.log_filter(), "tictactoe_core=debug");
}

#[test]
fn test_invalid_toml_is_an_error() {
    let file = config_file("first_player = [\n");
    let err = UiConfig::load_or_default(file.path()).unwrap_err();
    assert!(err.message.contains("Failed to parse config"));
}

#[test]
fn test_unknown_first_player_is_an_error() {
    let file = config_file("first_player = \"blank\"\n");
    assert!(UiConfig::from_file(file.path()).is_err());
}

#[test]
fn test_overrides_replace_file_values() {
    let file = config_file("first_player = \"nought\"\n");
    let config = UiConfig::from_file(file.path())
        .unwrap()
        .with_overrides(Some(PathBuf::from("art")), Some(FirstPlayer::Cross));
    assert_eq!(config.assets_dir(), &PathBuf::from("art"));
    assert_eq!(*config.first_player(), FirstPlayer::Cross);
}

#[test]
fn test_no_overrides_keep_file_values() {
    let file = config_file("first_player = \"nought\"\n");
    let config = UiConfig::from_file(file.path())
        .unwrap()
        .with_overrides(None, None);
    assert_eq!(*config.first_player(), FirstPlayer::Nought);
}
