//! NPC move selection.
//!
//! Three strategies cover the difficulty ladder: [`Random`] (easy),
//! [`Heuristic`] (medium), and [`Optimal`] (hard). All of them consume a
//! read-only board snapshot and return the cell they would play; the
//! caller commits the move. Hypothetical placements are probed on cloned
//! boards, so a decision never mutates the live game.

pub mod heuristic;
pub mod minimax;
pub mod random;

pub use heuristic::Heuristic;
pub use minimax::Optimal;
pub use random::Random;

use crate::board::{Board, BoardError};
use crate::types::{Coord, Player};
use derive_more::{Display, Error, From};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Errors raised by a strategy decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, From)]
pub enum StrategyError {
    /// The strategy was invoked on a full board. The controller checks
    /// the outcome before delegating, so this indicates a caller defect.
    #[display("no legal moves remain")]
    NoLegalMoves,
    /// A speculative placement was rejected by the board.
    #[display("speculative move rejected: {_0}")]
    Board(#[from] BoardError),
}

/// A decision procedure for the NPC side.
///
/// Implementations receive the board and the mark they play on every
/// call; they never retain a reference to the board between turns.
pub trait MoveStrategy {
    /// Chooses an empty cell for `mark` to play.
    ///
    /// # Errors
    ///
    /// Returns `NoLegalMoves` if the board has no empty cell.
    fn choose_move(&mut self, board: &Board, mark: Player) -> Result<Coord, StrategyError>;
}

/// NPC difficulty, chosen once at startup.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
pub enum Difficulty {
    /// Uniformly random moves.
    #[default]
    Easy,
    /// Tactical rules: win, block, then positional preference.
    Medium,
    /// Full adversarial search; never loses.
    Hard,
}

impl Difficulty {
    /// Lenient parse matching the configuration contract: unrecognized
    /// input falls back to [`Difficulty::Easy`] with a warning rather
    /// than failing.
    pub fn parse_lenient(input: &str) -> Self {
        input.trim().parse().unwrap_or_else(|_| {
            warn!(input, "unrecognized difficulty, defaulting to easy");
            Difficulty::Easy
        })
    }
}

/// The closed set of NPC strategies, one per difficulty.
#[derive(Debug)]
pub enum Npc {
    /// Easy: uniformly random.
    Random(Random),
    /// Medium: ordered tactical rules.
    Heuristic(Heuristic),
    /// Hard: minimax with alpha-beta pruning.
    Optimal(Optimal),
}

impl Npc {
    /// Builds the strategy for a difficulty.
    ///
    /// A `seed` fixes the random source of the easy and medium
    /// strategies for reproducible games; the hard strategy is
    /// deterministic and ignores it.
    pub fn new(difficulty: Difficulty, seed: Option<u64>) -> Self {
        match difficulty {
            Difficulty::Easy => Npc::Random(match seed {
                Some(seed) => Random::seeded(seed),
                None => Random::new(),
            }),
            Difficulty::Medium => Npc::Heuristic(match seed {
                Some(seed) => Heuristic::seeded(seed),
                None => Heuristic::new(),
            }),
            Difficulty::Hard => Npc::Optimal(Optimal),
        }
    }
}

impl MoveStrategy for Npc {
    fn choose_move(&mut self, board: &Board, mark: Player) -> Result<Coord, StrategyError> {
        match self {
            Npc::Random(strategy) => strategy.choose_move(board, mark),
            Npc::Heuristic(strategy) => strategy.choose_move(board, mark),
            Npc::Optimal(strategy) => strategy.choose_move(board, mark),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_parse_lenient_known_values() {
        assert_eq!(Difficulty::parse_lenient("easy"), Difficulty::Easy);
        assert_eq!(Difficulty::parse_lenient("MEDIUM"), Difficulty::Medium);
        assert_eq!(Difficulty::parse_lenient(" hard "), Difficulty::Hard);
    }

    #[test]
    fn test_parse_lenient_defaults_to_easy() {
        assert_eq!(Difficulty::parse_lenient("impossible"), Difficulty::Easy);
        assert_eq!(Difficulty::parse_lenient(""), Difficulty::Easy);
    }

    #[test]
    fn test_every_difficulty_produces_a_move() {
        for difficulty in Difficulty::iter() {
            let mut npc = Npc::new(difficulty, Some(1));
            let board = Board::new();
            let coord = npc.choose_move(&board, Player::O).unwrap();
            assert!(board.is_empty(coord));
        }
    }

    #[test]
    fn test_full_board_is_no_legal_moves() {
        let mut board = Board::new();
        for (i, coord) in Coord::ALL.into_iter().enumerate() {
            let player = if i % 2 == 0 { Player::X } else { Player::O };
            board.place(coord, player).unwrap();
        }
        for difficulty in Difficulty::iter() {
            let mut npc = Npc::new(difficulty, Some(1));
            assert_eq!(
                npc.choose_move(&board, Player::X),
                Err(StrategyError::NoLegalMoves)
            );
        }
    }
}
