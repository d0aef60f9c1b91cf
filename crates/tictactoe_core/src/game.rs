//! One match between two players.

use crate::{Board, GameError, Marker, Outcome, Player, Position, ResultAnnouncer, rules};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Lifecycle of a [`Game`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GamePhase {
    /// Created, `play` not yet called.
    NotStarted,
    /// Moves are being taken.
    InProgress,
    /// Terminal state reached.
    Finished,
}

/// A move applied during a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct Move {
    /// Marker placed.
    pub marker: Marker,
    /// Cell it was placed in.
    pub position: Position,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.marker, self.position.label())
    }
}

/// Runs a single match on a shared board.
///
/// A game is created fresh for every match and dropped afterwards. The
/// board, players and announcer outlive it.
pub struct Game<'a> {
    first: &'a dyn Player,
    second: &'a dyn Player,
    board: &'a Board,
    announcer: &'a ResultAnnouncer,
    phase: GamePhase,
    history: Vec<Move>,
}

impl<'a> Game<'a> {
    /// Creates a game; `first` moves first.
    pub fn new(
        first: &'a dyn Player,
        second: &'a dyn Player,
        board: &'a Board,
        announcer: &'a ResultAnnouncer,
    ) -> Self {
        Self {
            first,
            second,
            board,
            announcer,
            phase: GamePhase::NotStarted,
            history: Vec::new(),
        }
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Moves applied so far, in order.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Player who moves first.
    pub fn first_player(&self) -> &'a dyn Player {
        self.first
    }

    /// Player who moves second.
    pub fn second_player(&self) -> &'a dyn Player {
        self.second
    }

    /// Whether `player`'s marker fills a winning line.
    pub fn is_winner(&self, player: &dyn Player) -> Result<bool, GameError> {
        Ok(rules::has_won(&self.board.state()?, player.marker()))
    }

    /// Whether no cell is blank.
    pub fn is_full(&self) -> Result<bool, GameError> {
        Ok(rules::is_full(&self.board.state()?))
    }

    /// Whether the board is full and neither player has won.
    pub fn is_draw(&self) -> Result<bool, GameError> {
        Ok(!self.is_winner(self.first)? && !self.is_winner(self.second)? && self.is_full()?)
    }

    /// Whether play must stop.
    pub fn is_game_over(&self) -> Result<bool, GameError> {
        Ok(self.is_winner(self.first)? || self.is_winner(self.second)? || self.is_full()?)
    }

    /// The winning player. If both somehow qualify the first player wins.
    pub fn winner(&self) -> Result<Option<&'a dyn Player>, GameError> {
        if self.is_winner(self.first)? {
            Ok(Some(self.first))
        } else if self.is_winner(self.second)? {
            Ok(Some(self.second))
        } else {
            Ok(None)
        }
    }

    /// Plays the match to completion and waits for the result to be
    /// dismissed.
    #[instrument(skip(self), fields(first = self.first.name(), second = self.second.name()))]
    pub async fn play(&mut self) -> Result<Outcome, GameError> {
        self.board.reset();
        self.history.clear();
        self.phase = GamePhase::InProgress;
        info!("Match started");

        let (mut current, mut waiting) = (self.first, self.second);
        while !self.is_game_over()? {
            debug!(player = current.name(), "Waiting for move");
            let position = current.make_move(self.board).await?;
            self.board.mark_move(position, current.marker())?;
            self.history.push(Move::new(current.marker(), position));
            debug!(move_number = self.history.len(), %position, "Move applied");
            std::mem::swap(&mut current, &mut waiting);
        }

        self.phase = GamePhase::Finished;
        let outcome = match self.winner()? {
            Some(player) => Outcome::Winner(player.marker()),
            None => Outcome::Draw,
        };
        info!(?outcome, moves = self.history.len(), "Game over");

        self.announcer.display(&outcome).wait().await?;
        Ok(outcome)
    }
}
