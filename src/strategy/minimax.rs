//! Hard difficulty: exhaustive adversarial search with alpha-beta
//! pruning.
//!
//! The remaining game tree is at most nine plies deep, so the search is
//! run to the end every turn; no iterative deepening or transposition
//! table is needed. Terminal scores are depth-sensitive so the strategy
//! prefers the fastest win and, when losing is forced, the slowest loss.

use super::{MoveStrategy, StrategyError};
use crate::board::Board;
use crate::rules::{self, Outcome};
use crate::types::{Coord, Player};
use tracing::{debug, instrument};

/// Plays game-theoretically optimal moves: never loses, and wins
/// whenever the opponent allows it.
#[derive(Debug, Default, Clone, Copy)]
pub struct Optimal;

impl MoveStrategy for Optimal {
    #[instrument(skip(self, board))]
    fn choose_move(&mut self, board: &Board, mark: Player) -> Result<Coord, StrategyError> {
        let mut best: Option<(Coord, i32)> = None;
        for coord in board.empty_cells() {
            let probe = board.with_move(coord, mark)?;
            let score = minimax(&probe, mark, 1, false, i32::MIN, i32::MAX)?;
            debug!(%coord, score, "scored candidate");
            // Strictly greater keeps the first cell found in row-major
            // order on ties, which makes move selection deterministic.
            if best.is_none_or(|(_, s)| score > s) {
                best = Some((coord, score));
            }
        }
        best.map(|(coord, _)| coord)
            .ok_or(StrategyError::NoLegalMoves)
    }
}

/// Scores a position from the perspective of `mark`, the strategy's own
/// player. A win for `mark` scores `10 - depth`, a loss `depth - 10`,
/// and a draw `0`. Sibling branches are pruned once `beta <= alpha`.
fn minimax(
    board: &Board,
    mark: Player,
    depth: i32,
    maximizing: bool,
    mut alpha: i32,
    mut beta: i32,
) -> Result<i32, StrategyError> {
    match rules::evaluate(board) {
        Outcome::Won(winner) if winner == mark => return Ok(10 - depth),
        Outcome::Won(_) => return Ok(depth - 10),
        Outcome::Draw => return Ok(0),
        Outcome::InProgress => {}
    }

    if maximizing {
        let mut best = i32::MIN;
        for coord in board.empty_cells() {
            let probe = board.with_move(coord, mark)?;
            let score = minimax(&probe, mark, depth + 1, false, alpha, beta)?;
            best = best.max(score);
            alpha = alpha.max(score);
            if beta <= alpha {
                break;
            }
        }
        Ok(best)
    } else {
        let mut best = i32::MAX;
        for coord in board.empty_cells() {
            let probe = board.with_move(coord, mark.opponent())?;
            let score = minimax(&probe, mark, depth + 1, true, alpha, beta)?;
            best = best.min(score);
            beta = beta.min(score);
            if beta <= alpha {
                break;
            }
        }
        Ok(best)
    }
}
