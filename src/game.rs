//! Game controller: owns the board, the turn marker, and the outcome.

use crate::board::{Board, BoardError};
use crate::rules::{self, Outcome};
use crate::strategy::{MoveStrategy, StrategyError};
use crate::types::{Coord, Move, Player};
use derive_more::{Display, Error, From};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

/// Errors raised while driving a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, From)]
pub enum GameError {
    /// A move was submitted after the game reached a terminal outcome.
    #[display("the game is already over")]
    GameOver,
    /// The board rejected the move; the turn marker is unchanged and
    /// the same turn may be retried.
    #[display("{_0}")]
    Board(#[from] BoardError),
    /// The NPC strategy failed to produce a move.
    #[display("{_0}")]
    Strategy(#[from] StrategyError),
}

/// One game from an empty board to a terminal outcome.
///
/// The controller owns the board exclusively; strategies only ever see
/// it behind a shared reference for the duration of one decision. Each
/// game instance is fully isolated, so independent games can run side
/// by side without shared state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    board: Board,
    to_move: Player,
    outcome: Outcome,
    history: Vec<Move>,
}

impl Game {
    /// Creates a new game: empty board, X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            to_move: Player::X,
            outcome: Outcome::InProgress,
            history: Vec::new(),
        }
    }

    /// The board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The player whose move is next.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// The current outcome.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Moves played so far, in order.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Applies one move for the player whose turn it is.
    ///
    /// On success the move is recorded, the outcome re-evaluated, and
    /// the turn marker flipped if the game continues. A rejected move
    /// (occupied cell, out-of-bounds coordinate) leaves board and turn
    /// marker untouched so the same turn can be retried.
    ///
    /// # Errors
    ///
    /// Returns `GameOver` after a terminal outcome, or the underlying
    /// [`BoardError`] for an invalid placement.
    #[instrument(skip(self), fields(player = %self.to_move))]
    pub fn play(&mut self, coord: Coord) -> Result<Outcome, GameError> {
        if self.outcome.is_terminal() {
            return Err(GameError::GameOver);
        }
        self.board.place(coord, self.to_move)?;
        self.history.push(Move::new(self.to_move, coord));
        self.outcome = rules::evaluate(&self.board);
        match self.outcome {
            Outcome::InProgress => self.to_move = self.to_move.opponent(),
            outcome => info!(%outcome, moves = self.history.len(), "game over"),
        }
        Ok(self.outcome)
    }

    /// Lets `strategy` take the current turn.
    ///
    /// Returns the cell the strategy chose together with the resulting
    /// outcome. The controller checks for a terminal outcome first, so
    /// a correctly driven game never invokes a strategy on a full
    /// board.
    ///
    /// # Errors
    ///
    /// Returns `GameOver` after a terminal outcome; a `NoLegalMoves`
    /// from the strategy indicates a caller defect and is surfaced
    /// as [`GameError::Strategy`].
    #[instrument(skip(self, strategy), fields(player = %self.to_move))]
    pub fn play_npc(
        &mut self,
        strategy: &mut dyn MoveStrategy,
    ) -> Result<(Coord, Outcome), GameError> {
        if self.outcome.is_terminal() {
            return Err(GameError::GameOver);
        }
        let coord = strategy.choose_move(&self.board, self.to_move)?;
        let outcome = self.play(coord)?;
        Ok((coord, outcome))
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
