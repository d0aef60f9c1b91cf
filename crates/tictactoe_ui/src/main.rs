//! Two-player tic-tac-toe in the terminal.

use anyhow::Result;
use clap::Parser;
use tictactoe_ui::{Cli, Command, UiConfig, init_tracing, print_symbols, run_play};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = UiConfig::load_or_default(&cli.config)?;

    match cli.command.unwrap_or_default() {
        Command::Play { assets_dir, first } => {
            let config = config.with_overrides(assets_dir, first);
            init_tracing(&config)?;
            run_play(&config).await
        }
        Command::Symbols { assets_dir } => {
            let config = config.with_overrides(assets_dir, None);
            init_tracing(&config)?;
            print_symbols(&config).await
        }
    }
}
