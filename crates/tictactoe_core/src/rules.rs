//! Win and full-board detection over a board snapshot.

use crate::Marker;
use crate::board::TOTAL_CELLS;

/// The 8 index triples that win: rows, columns, diagonals.
pub const WINNING_LINES: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// Whether `marker` fills at least one winning line. Blank never wins.
pub fn has_won(state: &[Marker; TOTAL_CELLS], marker: Marker) -> bool {
    marker != Marker::Blank
        && WINNING_LINES
            .iter()
            .any(|line| line.iter().all(|&i| state[i] == marker))
}

/// Whether no cell is blank.
pub fn is_full(state: &[Marker; TOTAL_CELLS]) -> bool {
    state.iter().all(|&m| m != Marker::Blank)
}
