//! Error types for the game core.
//!
//! Every failure here is either startup-fatal ([`AssetError`]) or a logic
//! defect (unknown marker name, bad cell index). None of them are retried.

use crate::{Marker, Position};
use tracing::instrument;

/// Failure to map a stored cell value back to a [`Marker`].
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum SymbolError {
    /// The name matches none of the three known markers.
    #[display("Symbol not found for name: {}", _0)]
    NotFound(String),
}

impl std::error::Error for SymbolError {}

/// Error raised by board access.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum BoardError {
    /// Cell index outside 0-8.
    #[display("Cell index {} is out of range (must be 0-8)", _0)]
    OutOfRange(usize),

    /// A move targeted a cell that already holds a marker.
    #[display("Square {} is already occupied", _0)]
    CellOccupied(Position),

    /// A cell holds a value that is not a marker name.
    #[display("{}", _0)]
    Symbol(SymbolError),
}

impl std::error::Error for BoardError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Symbol(e) => Some(e),
            _ => None,
        }
    }
}

/// Error raised while a match or the application loop is running.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum GameError {
    /// Board access failed.
    #[display("{}", _0)]
    Board(BoardError),

    /// The pending move wait was dropped before a click arrived.
    #[display("Move wait for {} was abandoned", _0)]
    MoveAbandoned(Marker),

    /// The result announcer went away before it was dismissed.
    #[display("Result announcer dropped before dismissal")]
    AnnouncerDropped,
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Board(e) => Some(e),
            _ => None,
        }
    }
}

impl From<SymbolError> for BoardError {
    fn from(err: SymbolError) -> Self {
        Self::Symbol(err)
    }
}

impl From<BoardError> for GameError {
    fn from(err: BoardError) -> Self {
        Self::Board(err)
    }
}

impl From<SymbolError> for GameError {
    fn from(err: SymbolError) -> Self {
        Self::Board(BoardError::Symbol(err))
    }
}

/// Symbol asset could not be loaded.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Asset error: {} at {}:{}", message, file, line)]
pub struct AssetError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl AssetError {
    /// Creates a new asset error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
