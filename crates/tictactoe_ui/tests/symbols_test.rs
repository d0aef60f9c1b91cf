//! Tests for loading the bundled symbol files.

use tictactoe_core::Marker;
use tictactoe_ui::{UiConfig, load_symbols};

#[tokio::test]
async fn test_bundled_assets_load() {
    let config = UiConfig::default();
    let symbols = load_symbols(config.assets_dir()).await.unwrap();
    for marker in [Marker::Blank, Marker::Cross, Marker::Nought] {
        assert!(!symbols.payload(marker).is_empty());
    }
    assert_ne!(symbols.payload(Marker::Cross), symbols.payload(Marker::Nought));
}

#[tokio::test]
async fn test_missing_assets_fail_startup() {
    let dir = tempfile::TempDir::new().unwrap();
    let err = load_symbols(dir.path()).await.unwrap_err();
    assert!(err.to_string().contains("Failed to load symbols"));
}
