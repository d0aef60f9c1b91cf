//! The 3x3 board, backed by a render surface.

use crate::surface::{self, SharedSurface};
use crate::{BoardError, InputNotifier, Marker, Position, SymbolRegistry, marker_for_name};
use std::sync::Arc;
use tracing::{debug, instrument};

/// Number of cells on the board.
pub const TOTAL_CELLS: usize = 9;

/// 3x3 tic-tac-toe board.
///
/// Cell contents live on the render surface as marker names; every read
/// goes back through [`marker_for_name`]. The board owns the single
/// [`InputNotifier`] bound to its cells.
pub struct Board {
    surface: SharedSurface,
    symbols: Arc<SymbolRegistry>,
    controller: InputNotifier,
}

impl Board {
    /// Creates a board over `surface` and clears every cell.
    #[instrument(skip_all)]
    pub fn new(surface: SharedSurface, symbols: Arc<SymbolRegistry>) -> Self {
        let controller = InputNotifier::new(surface.clone());
        let board = Self {
            surface,
            symbols,
            controller,
        };
        board.reset();
        board
    }

    /// Sets every cell to blank.
    #[instrument(skip(self))]
    pub fn reset(&self) {
        let blank = self.symbols.payload(Marker::Blank);
        let mut surface = surface::lock(&self.surface);
        for position in Position::ALL {
            surface.write_cell(position, Marker::Blank.name(), blank);
        }
        debug!("Board reset");
    }

    /// Marker in the cell at `index` (0-8).
    #[instrument(skip(self))]
    pub fn cell_state(&self, index: usize) -> Result<Marker, BoardError> {
        let position = Position::from_index(index).ok_or(BoardError::OutOfRange(index))?;
        Ok(self.marker_at(position)?)
    }

    /// Marker in the cell at `position`.
    pub fn marker_at(&self, position: Position) -> Result<Marker, BoardError> {
        let surface = surface::lock(&self.surface);
        Ok(marker_for_name(surface.cell_value(position))?)
    }

    /// Snapshot of all nine cells in row-major order.
    pub fn state(&self) -> Result<[Marker; TOTAL_CELLS], BoardError> {
        let surface = surface::lock(&self.surface);
        let mut state = [Marker::Blank; TOTAL_CELLS];
        for (slot, position) in state.iter_mut().zip(Position::ALL) {
            *slot = marker_for_name(surface.cell_value(position))?;
        }
        Ok(state)
    }

    /// Writes `marker` into a blank cell.
    ///
    /// Targeting an occupied cell is a contract violation and leaves the
    /// board untouched.
    #[instrument(skip(self))]
    pub fn mark_move(&self, position: Position, marker: Marker) -> Result<(), BoardError> {
        let mut surface = surface::lock(&self.surface);
        if marker_for_name(surface.cell_value(position))? != Marker::Blank {
            return Err(BoardError::CellOccupied(position));
        }
        surface.write_cell(position, marker.name(), self.symbols.payload(marker));
        debug!(%position, %marker, "Move marked");
        Ok(())
    }

    /// Input notifier bound to this board's cells.
    pub fn controller(&self) -> &InputNotifier {
        &self.controller
    }

    /// Formats the board as text, one row per line.
    pub fn display(&self) -> Result<String, BoardError> {
        let state = self.state()?;
        let rows: Vec<String> = state
            .chunks(3)
            .map(|row| {
                row.iter()
                    .map(|marker| match marker {
                        Marker::Blank => ".",
                        Marker::Cross => "X",
                        Marker::Nought => "O",
                    })
                    .collect()
            })
            .collect();
        Ok(rows.join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Canvas;
    use std::sync::Mutex;

    fn board() -> (Board, Arc<Mutex<Canvas>>) {
        let canvas = Canvas::new().shared();
        let symbols = Arc::new(SymbolRegistry::new("_", "X", "O"));
        (Board::new(canvas.clone(), symbols), canvas)
    }

    #[test]
    fn test_new_board_is_blank() {
        let (board, canvas) = board();
        assert_eq!(board.state().unwrap(), [Marker::Blank; 9]);
        let canvas = canvas.lock().unwrap();
        assert!(canvas.cells().iter().all(|c| c.payload == "_"));
    }

    #[test]
    fn test_mark_move_writes_name_and_payload() {
        let (board, canvas) = board();
        board.mark_move(Position::Center, Marker::Cross).unwrap();
        assert_eq!(board.cell_state(4).unwrap(), Marker::Cross);
        let canvas = canvas.lock().unwrap();
        assert_eq!(canvas.cell(Position::Center).value, "cross");
        assert_eq!(canvas.cell(Position::Center).payload, "X");
    }

    #[test]
    fn test_mark_move_rejects_occupied_cell() {
        let (board, _canvas) = board();
        board.mark_move(Position::TopLeft, Marker::Cross).unwrap();
        assert_eq!(
            board.mark_move(Position::TopLeft, Marker::Nought),
            Err(BoardError::CellOccupied(Position::TopLeft))
        );
        assert_eq!(board.cell_state(0).unwrap(), Marker::Cross);
    }

    #[test]
    fn test_cell_state_out_of_range() {
        let (board, _canvas) = board();
        assert_eq!(board.cell_state(9), Err(BoardError::OutOfRange(9)));
        assert!(board.cell_state(8).is_ok());
    }

    #[test]
    fn test_reset_is_idempotent() {
        let (board, _canvas) = board();
        board.mark_move(Position::TopRight, Marker::Nought).unwrap();
        board.mark_move(Position::BottomLeft, Marker::Cross).unwrap();
        board.reset();
        let once = board.state().unwrap();
        board.reset();
        assert_eq!(board.state().unwrap(), once);
        assert_eq!(once, [Marker::Blank; 9]);
    }

    #[test]
    fn test_unknown_cell_value_surfaces_symbol_error() {
        let (board, canvas) = board();
        canvas.lock().unwrap().set_raw_value(Position::Center, "circle");
        assert!(matches!(board.cell_state(4), Err(BoardError::Symbol(_))));
        assert!(board.state().is_err());
    }

    #[test]
    fn test_display() {
        let (board, _canvas) = board();
        board.mark_move(Position::TopLeft, Marker::Cross).unwrap();
        board.mark_move(Position::Center, Marker::Nought).unwrap();
        assert_eq!(board.display().unwrap(), "X..\n.O.\n...");
    }
}
