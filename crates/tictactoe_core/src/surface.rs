//! Render surface the board and announcer draw onto.
//!
//! The surface is the store of record for cell contents: each cell holds a
//! marker name plus a display payload. Clicks come back out of the surface
//! as [`SurfaceEvent`]s.

use crate::{Marker, Position};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Something that can display the nine cells and a result overlay.
pub trait RenderSurface: Send {
    /// Marker name currently stored in a cell.
    fn cell_value(&self, position: Position) -> &str;

    /// Stores a marker name and its display payload in a cell.
    fn write_cell(&mut self, position: Position, name: &str, payload: &str);

    /// Shows the result overlay with a message.
    fn show_overlay(&mut self, message: &str);

    /// Hides the result overlay.
    fn hide_overlay(&mut self);
}

/// Surface shared by the board, input notifier and result announcer.
pub type SharedSurface = Arc<Mutex<dyn RenderSurface>>;

/// Locks a shared surface, recovering the guard if a holder panicked.
pub(crate) fn lock(surface: &SharedSurface) -> MutexGuard<'_, dyn RenderSurface + 'static> {
    surface.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Raw click notification delivered by a surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceEvent {
    /// A board cell was clicked.
    CellClicked(Position),
    /// The result overlay was clicked.
    OverlayClicked,
}

/// One cell as stored on a [`Canvas`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanvasCell {
    /// Stored marker name.
    pub value: String,
    /// Display payload written alongside the name.
    pub payload: String,
}

/// In-memory render surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    cells: [CanvasCell; 9],
    overlay: Option<String>,
}

impl Canvas {
    /// Creates a canvas with every cell holding the blank marker name.
    pub fn new() -> Self {
        Self {
            cells: std::array::from_fn(|_| CanvasCell {
                value: Marker::Blank.name().to_string(),
                payload: String::new(),
            }),
            overlay: None,
        }
    }

    /// Wraps the canvas for sharing with the game.
    pub fn shared(self) -> Arc<Mutex<Canvas>> {
        Arc::new(Mutex::new(self))
    }

    /// Cell at a position.
    pub fn cell(&self, position: Position) -> &CanvasCell {
        &self.cells[position.to_index()]
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[CanvasCell; 9] {
        &self.cells
    }

    /// Overlay message, if the overlay is showing.
    pub fn overlay(&self) -> Option<&str> {
        self.overlay.as_deref()
    }

    /// Overwrites a cell's stored name without touching its payload.
    ///
    /// Stands in for anything outside the board editing the surface.
    pub fn set_raw_value(&mut self, position: Position, value: impl Into<String>) {
        self.cells[position.to_index()].value = value.into();
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderSurface for Canvas {
    fn cell_value(&self, position: Position) -> &str {
        &self.cells[position.to_index()].value
    }

    fn write_cell(&mut self, position: Position, name: &str, payload: &str) {
        let cell = &mut self.cells[position.to_index()];
        cell.value = name.to_string();
        cell.payload = payload.to_string();
    }

    fn show_overlay(&mut self, message: &str) {
        self.overlay = Some(message.to_string());
    }

    fn hide_overlay(&mut self) {
        self.overlay = None;
    }
}
