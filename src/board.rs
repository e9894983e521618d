//! The 3×3 game board: storage, mutation, and occupancy queries.

use crate::types::{Cell, Coord, Player};
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Side length of the board.
pub const SIZE: usize = 3;

/// Errors raised by board operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum BoardError {
    /// A coordinate outside `[0, 3)` was supplied.
    #[display("{_0} is out of bounds, rows and columns run 0-2")]
    OutOfBounds(#[error(not(source))] Coord),
    /// The target cell is already occupied.
    #[display("the cell at {_0} is already taken")]
    CellOccupied(#[error(not(source))] Coord),
}

/// 3×3 grid of cells in row-major order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; SIZE * SIZE],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; SIZE * SIZE],
        }
    }

    fn index(coord: Coord) -> Result<usize, BoardError> {
        if coord.row < SIZE && coord.col < SIZE {
            Ok(coord.row * SIZE + coord.col)
        } else {
            Err(BoardError::OutOfBounds(coord))
        }
    }

    /// Returns the cell at `coord`.
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` if either index is 3 or greater.
    pub fn cell(&self, coord: Coord) -> Result<Cell, BoardError> {
        Ok(self.cells[Self::index(coord)?])
    }

    /// True if `coord` is on the board and unoccupied.
    pub fn is_empty(&self, coord: Coord) -> bool {
        matches!(self.cell(coord), Ok(Cell::Empty))
    }

    /// Places `player`'s mark at `coord`.
    ///
    /// On success exactly one cell changes; a rejected move leaves the
    /// board untouched.
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` for an invalid coordinate and `CellOccupied`
    /// if the target cell is not empty.
    #[instrument(skip(self))]
    pub fn place(&mut self, coord: Coord, player: Player) -> Result<(), BoardError> {
        let idx = Self::index(coord)?;
        if self.cells[idx] != Cell::Empty {
            return Err(BoardError::CellOccupied(coord));
        }
        self.cells[idx] = Cell::Occupied(player);
        Ok(())
    }

    /// Copy of this board with `player`'s mark placed at `coord`.
    ///
    /// Strategies use this to probe hypothetical moves; the live board
    /// is never touched during a decision.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Board::place`].
    pub fn with_move(&self, coord: Coord, player: Player) -> Result<Board, BoardError> {
        let mut next = self.clone();
        next.place(coord, player)?;
        Ok(next)
    }

    /// True iff no empty cell remains.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| *c != Cell::Empty)
    }

    /// All cells as a row-major slice.
    pub fn cells(&self) -> &[Cell; SIZE * SIZE] {
        &self.cells
    }

    /// Empty coordinates in row-major order.
    ///
    /// This is the candidate-move universe for every strategy; the scan
    /// order makes tie-breaking deterministic.
    pub fn empty_cells(&self) -> impl Iterator<Item = Coord> + '_ {
        Coord::ALL.into_iter().filter(|c| self.is_empty(*c))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..SIZE {
            for col in 0..SIZE {
                write!(f, " {} ", self.cells[row * SIZE + col].symbol())?;
                if col < SIZE - 1 {
                    write!(f, "|")?;
                }
            }
            if row < SIZE - 1 {
                writeln!(f)?;
                writeln!(f, "---+---+---")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_empty() {
        let board = Board::new();
        assert!(!board.is_full());
        assert_eq!(board.empty_cells().count(), 9);
    }

    #[test]
    fn test_place_and_read_back() {
        let mut board = Board::new();
        board.place(Coord::new(1, 2), Player::X).unwrap();
        assert_eq!(
            board.cell(Coord::new(1, 2)),
            Ok(Cell::Occupied(Player::X))
        );
        assert_eq!(board.cell(Coord::new(2, 1)), Ok(Cell::Empty));
    }

    #[test]
    fn test_out_of_bounds_row() {
        let mut board = Board::new();
        let coord = Coord::new(3, 0);
        assert_eq!(
            board.place(coord, Player::X),
            Err(BoardError::OutOfBounds(coord))
        );
        assert_eq!(
            board.place(coord, Player::O),
            Err(BoardError::OutOfBounds(coord))
        );
        assert_eq!(board.cell(coord), Err(BoardError::OutOfBounds(coord)));
    }

    #[test]
    fn test_out_of_bounds_col() {
        let board = Board::new();
        assert_eq!(
            board.cell(Coord::new(0, 7)),
            Err(BoardError::OutOfBounds(Coord::new(0, 7)))
        );
    }

    #[test]
    fn test_occupied_cell_leaves_board_unchanged() {
        let mut board = Board::new();
        let coord = Coord::new(0, 0);
        board.place(coord, Player::X).unwrap();
        let before = board.clone();
        assert_eq!(
            board.place(coord, Player::O),
            Err(BoardError::CellOccupied(coord))
        );
        assert_eq!(board, before);
    }

    #[test]
    fn test_empty_plus_occupied_is_nine() {
        let mut board = Board::new();
        let moves = [
            (Coord::new(0, 0), Player::X),
            (Coord::new(1, 1), Player::O),
            (Coord::new(2, 2), Player::X),
            (Coord::new(0, 2), Player::O),
        ];
        for (i, (coord, player)) in moves.into_iter().enumerate() {
            board.place(coord, player).unwrap();
            let occupied = board.cells().iter().filter(|c| !c.is_empty()).count();
            assert_eq!(board.empty_cells().count() + occupied, 9);
            assert_eq!(occupied, i + 1);
        }
    }

    #[test]
    fn test_with_move_leaves_original_untouched() {
        let board = Board::new();
        let probe = board.with_move(Coord::new(1, 1), Player::X).unwrap();
        assert!(board.is_empty(Coord::new(1, 1)));
        assert!(!probe.is_empty(Coord::new(1, 1)));
    }

    #[test]
    fn test_is_full() {
        let mut board = Board::new();
        for (i, coord) in Coord::ALL.into_iter().enumerate() {
            assert!(!board.is_full());
            let player = if i % 2 == 0 { Player::X } else { Player::O };
            board.place(coord, player).unwrap();
        }
        assert!(board.is_full());
        assert_eq!(board.empty_cells().count(), 0);
    }

    #[test]
    fn test_display_renders_marks() {
        let mut board = Board::new();
        board.place(Coord::new(0, 0), Player::X).unwrap();
        board.place(Coord::new(1, 1), Player::O).unwrap();
        let rendered = board.to_string();
        assert!(rendered.contains('X'));
        assert!(rendered.contains('O'));
        assert!(rendered.contains("---+---+---"));
    }
}
