//! Endless sequence of matches with alternating first player.

use crate::{Board, Game, GameError, Outcome, Player, ResultAnnouncer};
use std::future::Future;
use tracing::{info, instrument};

/// Long-lived game state: one board, one announcer, two players.
///
/// Only the first/second role assignment changes between matches.
pub struct Application {
    board: Board,
    announcer: ResultAnnouncer,
    first: Box<dyn Player>,
    second: Box<dyn Player>,
    matches_played: u64,
}

impl Application {
    /// Creates an application; `first` opens the first match.
    pub fn new(
        board: Board,
        announcer: ResultAnnouncer,
        first: Box<dyn Player>,
        second: Box<dyn Player>,
    ) -> Self {
        Self {
            board,
            announcer,
            first,
            second,
            matches_played: 0,
        }
    }

    /// Player who opens the next match.
    pub fn first_player(&self) -> &dyn Player {
        self.first.as_ref()
    }

    /// Player who moves second in the next match.
    pub fn second_player(&self) -> &dyn Player {
        self.second.as_ref()
    }

    /// Number of completed matches.
    pub fn matches_played(&self) -> u64 {
        self.matches_played
    }

    /// Plays one match, then swaps who goes first.
    #[instrument(skip(self), fields(match_number = self.matches_played + 1))]
    pub async fn play_match(&mut self) -> Result<Outcome, GameError> {
        let outcome = Game::new(
            self.first.as_ref(),
            self.second.as_ref(),
            &self.board,
            &self.announcer,
        )
        .play()
        .await?;

        self.matches_played += 1;
        std::mem::swap(&mut self.first, &mut self.second);
        info!(?outcome, next_first = self.first.name(), "Match complete");
        Ok(outcome)
    }

    /// Plays matches forever. Only returns on error.
    pub async fn run(&mut self) -> Result<(), GameError> {
        loop {
            self.play_match().await?;
        }
    }

    /// Plays matches until `shutdown` completes.
    ///
    /// A match in flight when shutdown fires is dropped mid-move.
    pub async fn run_until<F>(&mut self, shutdown: F) -> Result<(), GameError>
    where
        F: Future<Output = ()>,
    {
        let result = tokio::select! {
            result = self.run() => result,
            () = shutdown => Ok(()),
        };
        info!(matches = self.matches_played, "Application stopped");
        result
    }
}
