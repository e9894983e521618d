//! Core value types shared across the engine.

use serde::{Deserialize, Serialize};

/// A player's mark. X always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opposing player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// One square's occupancy state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Unoccupied square.
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Cell {
    /// True if the cell is unoccupied.
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    /// Single-character rendering: `' '`, `'X'`, or `'O'`.
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => ' ',
            Cell::Occupied(Player::X) => 'X',
            Cell::Occupied(Player::O) => 'O',
        }
    }
}

/// A board coordinate as a zero-based (row, column) pair.
///
/// Construction does not validate the range; `Board` operations reject
/// coordinates outside `[0, 3)` with `OutOfBounds`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
#[display("({row}, {col})")]
pub struct Coord {
    /// Row index, top to bottom.
    pub row: usize,
    /// Column index, left to right.
    pub col: usize,
}

impl Coord {
    /// Creates a coordinate.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// The center square.
    pub const CENTER: Coord = Coord { row: 1, col: 1 };

    /// The four corner squares.
    pub const CORNERS: [Coord; 4] = [
        Coord { row: 0, col: 0 },
        Coord { row: 0, col: 2 },
        Coord { row: 2, col: 0 },
        Coord { row: 2, col: 2 },
    ];

    /// The four edge-center squares.
    pub const SIDES: [Coord; 4] = [
        Coord { row: 0, col: 1 },
        Coord { row: 1, col: 0 },
        Coord { row: 1, col: 2 },
        Coord { row: 2, col: 1 },
    ];

    /// All nine coordinates in row-major order.
    pub const ALL: [Coord; 9] = [
        Coord { row: 0, col: 0 },
        Coord { row: 0, col: 1 },
        Coord { row: 0, col: 2 },
        Coord { row: 1, col: 0 },
        Coord { row: 1, col: 1 },
        Coord { row: 1, col: 2 },
        Coord { row: 2, col: 0 },
        Coord { row: 2, col: 1 },
        Coord { row: 2, col: 2 },
    ];
}

/// A move: a player placing their mark at a coordinate.
///
/// Moves are first-class domain events; the game controller records
/// them in its history.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
#[display("{player} -> {coord}")]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// Where the mark is placed.
    pub coord: Coord,
}

impl Move {
    /// Creates a new move.
    pub fn new(player: Player, coord: Coord) -> Self {
        Self { player, coord }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent_flips() {
        assert_eq!(Player::X.opponent(), Player::O);
        assert_eq!(Player::O.opponent(), Player::X);
    }

    #[test]
    fn test_cell_symbols() {
        assert_eq!(Cell::Empty.symbol(), ' ');
        assert_eq!(Cell::Occupied(Player::X).symbol(), 'X');
        assert_eq!(Cell::Occupied(Player::O).symbol(), 'O');
    }

    #[test]
    fn test_all_coords_row_major() {
        let mut expected = Vec::new();
        for row in 0..3 {
            for col in 0..3 {
                expected.push(Coord::new(row, col));
            }
        }
        assert_eq!(Coord::ALL.to_vec(), expected);
    }

    #[test]
    fn test_center_corners_sides_cover_board() {
        let mut all: Vec<Coord> = vec![Coord::CENTER];
        all.extend(Coord::CORNERS);
        all.extend(Coord::SIDES);
        all.sort_by_key(|c| (c.row, c.col));
        let mut expected = Coord::ALL.to_vec();
        expected.sort_by_key(|c| (c.row, c.col));
        assert_eq!(all, expected);
    }
}
