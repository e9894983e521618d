//! Draw detection.

use super::win::check_winner;
use crate::board::Board;
use tracing::instrument;

/// True iff every cell is occupied.
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.is_full()
}

/// True iff the board is full and no line is complete.
#[instrument(skip(board))]
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && check_winner(board).is_none()
}
