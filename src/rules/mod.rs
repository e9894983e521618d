//! Game rules: pure outcome evaluation over a board snapshot.
//!
//! Rules are separated from board storage so the same functions serve
//! the live game and the speculative boards built during search.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::check_winner;

use crate::board::Board;
use crate::types::Player;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Terminal state of a board snapshot.
///
/// Derived on demand from the board, never stored by the rules layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Game is ongoing.
    InProgress,
    /// A player completed a line.
    Won(Player),
    /// Board is full with no winner.
    Draw,
}

impl Outcome {
    /// True once the game has ended.
    pub fn is_terminal(self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    /// Returns the winner, if there is one.
    pub fn winner(self) -> Option<Player> {
        match self {
            Outcome::Won(player) => Some(player),
            _ => None,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::InProgress => write!(f, "in progress"),
            Outcome::Won(player) => write!(f, "Player {player} wins"),
            Outcome::Draw => write!(f, "draw"),
        }
    }
}

/// Evaluates a board snapshot: winner first, then draw, else in progress.
///
/// Pure and side-effect free, so it is safe to call on speculative
/// boards — including malformed ones holding two complete lines, where
/// the first line in scan order (rows, columns, diagonals) decides.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> Outcome {
    if let Some(winner) = win::check_winner(board) {
        return Outcome::Won(winner);
    }
    if draw::is_full(board) {
        return Outcome::Draw;
    }
    Outcome::InProgress
}
