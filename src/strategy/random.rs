//! Easy difficulty: uniformly random move selection.

use super::{MoveStrategy, StrategyError};
use crate::board::Board;
use crate::types::{Coord, Player};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use tracing::{debug, instrument};

/// Picks uniformly at random among the empty cells.
#[derive(Debug)]
pub struct Random {
    rng: StdRng,
}

impl Random {
    /// Creates a strategy seeded from system entropy.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Creates a strategy with a fixed seed for reproducible games.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for Random {
    fn default() -> Self {
        Self::new()
    }
}

impl MoveStrategy for Random {
    #[instrument(skip(self, board))]
    fn choose_move(&mut self, board: &Board, mark: Player) -> Result<Coord, StrategyError> {
        let open: Vec<Coord> = board.empty_cells().collect();
        let coord = open
            .choose(&mut self.rng)
            .copied()
            .ok_or(StrategyError::NoLegalMoves)?;
        debug!(%coord, "random move");
        Ok(coord)
    }
}
