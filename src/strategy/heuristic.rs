//! Medium difficulty: ordered tactical rules.
//!
//! Rules are tried in priority order and the first applicable one wins:
//! take an immediate win, block the opponent's immediate win, take the
//! center, take a random free corner, take a random free side, and as a
//! safety net fall back to a random empty cell. On a 3×3 board the
//! center, corners, and sides cover every cell, so the fallback is not
//! reachable in practice; it is kept so the strategy is total.

use super::{MoveStrategy, StrategyError};
use crate::board::Board;
use crate::rules;
use crate::types::{Coord, Player};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use tracing::{debug, instrument};

/// Rule-based strategy: wins and blocks when possible, otherwise
/// prefers center, then corners, then sides.
#[derive(Debug)]
pub struct Heuristic {
    rng: StdRng,
}

impl Heuristic {
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

    /// Uniform pick among the cells of `candidates` that are empty.
    fn pick_open(&mut self, board: &Board, candidates: &[Coord]) -> Option<Coord> {
        let open: Vec<Coord> = candidates
            .iter()
            .copied()
            .filter(|coord| board.is_empty(*coord))
            .collect();
        open.choose(&mut self.rng).copied()
    }
}

impl Default for Heuristic {
    fn default() -> Self {
        Self::new()
    }
}

impl MoveStrategy for Heuristic {
    #[instrument(skip(self, board))]
    fn choose_move(&mut self, board: &Board, mark: Player) -> Result<Coord, StrategyError> {
        if board.is_full() {
            return Err(StrategyError::NoLegalMoves);
        }
        if let Some(coord) = winning_move(board, mark)? {
            debug!(%coord, "taking the win");
            return Ok(coord);
        }
        if let Some(coord) = winning_move(board, mark.opponent())? {
            debug!(%coord, "blocking the opponent");
            return Ok(coord);
        }
        if board.is_empty(Coord::CENTER) {
            debug!("taking the center");
            return Ok(Coord::CENTER);
        }
        if let Some(coord) = self.pick_open(board, &Coord::CORNERS) {
            debug!(%coord, "taking a corner");
            return Ok(coord);
        }
        if let Some(coord) = self.pick_open(board, &Coord::SIDES) {
            debug!(%coord, "taking a side");
            return Ok(coord);
        }
        let open: Vec<Coord> = board.empty_cells().collect();
        open.choose(&mut self.rng)
            .copied()
            .ok_or(StrategyError::NoLegalMoves)
    }
}

/// First empty cell, in row-major order, where `mark` would complete a
/// line by playing there. Probes are made on cloned boards.
fn winning_move(board: &Board, mark: Player) -> Result<Option<Coord>, StrategyError> {
    for coord in board.empty_cells() {
        let probe = board.with_move(coord, mark)?;
        if rules::check_winner(&probe) == Some(mark) {
            return Ok(Some(coord));
        }
    }
    Ok(None)
}
