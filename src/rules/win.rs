//! Win detection: the eight-line scan.

use crate::board::Board;
use crate::types::{Cell, Coord, Player};
use tracing::instrument;

/// The eight winning lines: three rows, three columns, two diagonals.
///
/// A real game can hold at most one complete line, so the scan order
/// only matters for malformed boards; it is fixed to keep tie-break
/// behavior stable.
const LINES: [[Coord; 3]; 8] = [
    // Rows
    [
        Coord { row: 0, col: 0 },
        Coord { row: 0, col: 1 },
        Coord { row: 0, col: 2 },
    ],
    [
        Coord { row: 1, col: 0 },
        Coord { row: 1, col: 1 },
        Coord { row: 1, col: 2 },
    ],
    [
        Coord { row: 2, col: 0 },
        Coord { row: 2, col: 1 },
        Coord { row: 2, col: 2 },
    ],
    // Columns
    [
        Coord { row: 0, col: 0 },
        Coord { row: 1, col: 0 },
        Coord { row: 2, col: 0 },
    ],
    [
        Coord { row: 0, col: 1 },
        Coord { row: 1, col: 1 },
        Coord { row: 2, col: 1 },
    ],
    [
        Coord { row: 0, col: 2 },
        Coord { row: 1, col: 2 },
        Coord { row: 2, col: 2 },
    ],
    // Diagonals
    [
        Coord { row: 0, col: 0 },
        Coord { row: 1, col: 1 },
        Coord { row: 2, col: 2 },
    ],
    [
        Coord { row: 0, col: 2 },
        Coord { row: 1, col: 1 },
        Coord { row: 2, col: 0 },
    ],
];

/// Checks for a complete line on the board.
///
/// Returns `Some(player)` for the first line (in scan order) whose three
/// cells hold the same mark, `None` otherwise.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Player> {
    for [a, b, c] in LINES {
        // Line coordinates are always on the board.
        let sq = board.cell(a).ok()?;
        if sq != Cell::Empty && Ok(sq) == board.cell(b) && Ok(sq) == board.cell(c) {
            return match sq {
                Cell::Occupied(player) => Some(player),
                Cell::Empty => None,
            };
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(check_winner(&Board::new()), None);
    }

    #[test]
    fn test_winner_top_row() {
        let mut board = Board::new();
        for col in 0..3 {
            board.place(Coord::new(0, col), Player::X).unwrap();
        }
        assert_eq!(check_winner(&board), Some(Player::X));
    }

    #[test]
    fn test_winner_middle_column() {
        let mut board = Board::new();
        for row in 0..3 {
            board.place(Coord::new(row, 1), Player::O).unwrap();
        }
        assert_eq!(check_winner(&board), Some(Player::O));
    }

    #[test]
    fn test_winner_main_diagonal() {
        let mut board = Board::new();
        for i in 0..3 {
            board.place(Coord::new(i, i), Player::O).unwrap();
        }
        assert_eq!(check_winner(&board), Some(Player::O));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let mut board = Board::new();
        for i in 0..3 {
            board.place(Coord::new(i, 2 - i), Player::X).unwrap();
        }
        assert_eq!(check_winner(&board), Some(Player::X));
    }

    #[test]
    fn test_no_winner_mixed_line() {
        let mut board = Board::new();
        board.place(Coord::new(0, 0), Player::X).unwrap();
        board.place(Coord::new(0, 1), Player::O).unwrap();
        board.place(Coord::new(0, 2), Player::X).unwrap();
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_no_winner_incomplete() {
        let mut board = Board::new();
        board.place(Coord::new(0, 0), Player::X).unwrap();
        board.place(Coord::new(0, 1), Player::X).unwrap();
        assert_eq!(check_winner(&board), None);
    }
}
