//! Terminal front-end for the tic-tac-toe core.
//!
//! Draws the core's [`Canvas`](tictactoe_core::Canvas) with ratatui and
//! feeds mouse clicks (or digit keys) back in as surface events.

#![warn(missing_docs)]

mod cli;
mod config;
mod tui;
mod ui;

pub use cli::{Cli, Command};
pub use config::{ConfigError, FirstPlayer, UiConfig};
pub use tui::{init_tracing, load_symbols, print_symbols, run_play};
pub use ui::{BoardLayout, draw, key_event, mouse_event};
