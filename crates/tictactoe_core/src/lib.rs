//! Tic-tac-toe game core.
//!
//! Two players alternate placing markers on a 3x3 board until one completes
//! a line or the board fills. Moves come from clicks on a render surface:
//! a [`Player`] suspends on the board's [`InputNotifier`] until a blank cell
//! is clicked, and the match resumes from there.
//!
//! # Architecture
//!
//! - **Symbols**: [`Marker`] values and their display payloads
//! - **Board**: nine cells stored on a [`RenderSurface`]
//! - **Input**: [`InputNotifier`] and [`EventRouter`] turn clicks into moves
//! - **Game**: one match, from reset to dismissed result
//! - **Application**: endless matches, swapping who goes first
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use tictactoe_core::{
//!     Application, Board, Canvas, HumanPlayer, Marker, ResultAnnouncer, SymbolRegistry,
//! };
//!
//! # async fn example() -> Result<(), tictactoe_core::GameError> {
//! let canvas = Canvas::new().shared();
//! let symbols = Arc::new(SymbolRegistry::new(" ", "X", "O"));
//! let board = Board::new(canvas.clone(), symbols);
//! let announcer = ResultAnnouncer::new(canvas);
//! let mut app = Application::new(
//!     board,
//!     announcer,
//!     Box::new(HumanPlayer::new(Marker::Cross)),
//!     Box::new(HumanPlayer::new(Marker::Nought)),
//! );
//! app.run().await
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod announcer;
mod application;
mod board;
mod error;
mod game;
mod notifier;
mod player;
mod position;
pub mod rules;
mod surface;
mod symbol;

pub use announcer::{Dismissal, Outcome, ResultAnnouncer};
pub use application::Application;
pub use board::{Board, TOTAL_CELLS};
pub use error::{AssetError, BoardError, GameError, SymbolError};
pub use game::{Game, GamePhase, Move};
pub use notifier::{EventRouter, InputNotifier, MoveHandler};
pub use player::{HumanPlayer, Player};
pub use position::Position;
pub use surface::{Canvas, CanvasCell, RenderSurface, SharedSurface, SurfaceEvent};
pub use symbol::{FileSymbolLoader, Marker, SymbolLoader, SymbolRegistry, marker_for_name};
