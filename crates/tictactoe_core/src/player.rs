//! Player trait and the human implementation.

use crate::{Board, GameError, Marker, Position};
use async_trait::async_trait;
use tokio::sync::oneshot;
use tracing::{debug, info, instrument};

/// Something that produces the next move for a marker.
#[async_trait]
pub trait Player: Send + Sync {
    /// Marker this player places. Fixed for the player's lifetime.
    fn marker(&self) -> Marker;

    /// Returns the player's display name.
    fn name(&self) -> &str;

    /// Waits for this player's next move on `board`.
    async fn make_move(&self, board: &Board) -> Result<Position, GameError>;
}

/// Human player whose moves are clicks on the board.
#[derive(Debug, Clone)]
pub struct HumanPlayer {
    marker: Marker,
    name: String,
}

impl HumanPlayer {
    /// Creates a human player for `marker`, named after it.
    pub fn new(marker: Marker) -> Self {
        Self {
            marker,
            name: marker.to_string(),
        }
    }
}

#[async_trait]
impl Player for HumanPlayer {
    fn marker(&self) -> Marker {
        self.marker
    }

    fn name(&self) -> &str {
        &self.name
    }

    #[instrument(skip(self, board), fields(marker = %self.marker))]
    async fn make_move(&self, board: &Board) -> Result<Position, GameError> {
        let (tx, rx) = oneshot::channel();
        board.controller().register_listener(Box::new(move |position| {
            let _ = tx.send(position);
        }));
        debug!("Waiting for click");

        let position = rx.await.map_err(|_| GameError::MoveAbandoned(self.marker))?;
        info!(%position, "Human chose cell");
        Ok(position)
    }
}
