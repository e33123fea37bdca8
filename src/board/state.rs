//! Board representation.
//!
//! A fixed 8x8 array of cells addressed by linear index. Piece lists are
//! derived from the cells in ascending index order.

use super::candidate::Candidate;
use super::cell::Cell;

/// Number of squares on the board.
pub const BOARD_SIZE: usize = 64;

/// Number of files per rank.
pub const BOARD_WIDTH: usize = 8;

/// A linear square index, valid when `< BOARD_SIZE`.
pub type Square = usize;

/// A full board snapshot.
///
/// Stored inline so the board is trivially copyable and needs no allocation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    pub cells: [Cell; BOARD_SIZE],
}

impl Default for Board {
    fn default() -> Self {
        Board::empty()
    }
}

impl Board {
    /// Creates a board with every square empty.
    pub fn empty() -> Self {
        Board {
            cells: [Cell::Empty; BOARD_SIZE],
        }
    }

    /// The demonstration setup: own pieces on 11-18, enemy pieces on 47-54.
    pub fn demo() -> Self {
        let mut board = Board::empty();
        for sq in 11..=18 {
            board.cells[sq] = Cell::Own;
        }
        for sq in 47..=54 {
            board.cells[sq] = Cell::Enemy;
        }
        board
    }

    /// Returns true if `sq` addresses a square on the board.
    #[inline]
    pub const fn in_bounds(sq: Square) -> bool {
        sq < BOARD_SIZE
    }

    /// Returns the cell at `sq`, or `None` if it is off the board.
    #[inline]
    pub fn get(&self, sq: Square) -> Option<Cell> {
        self.cells.get(sq).copied()
    }

    /// Returns true if `sq` is on the board and empty.
    #[inline]
    pub fn is_open(&self, sq: Square) -> bool {
        self.get(sq).is_some_and(Cell::is_empty)
    }

    /// Sets the cell at `sq`. Returns false if `sq` is off the board.
    pub fn set(&mut self, sq: Square, cell: Cell) -> bool {
        match self.cells.get_mut(sq) {
            Some(c) => {
                *c = cell;
                true
            }
            None => false,
        }
    }

    /// Squares holding own pieces, in ascending order.
    pub fn own_pieces(&self) -> Vec<Square> {
        self.squares_with(Cell::Own)
    }

    /// Squares holding enemy pieces, in ascending order.
    pub fn enemy_pieces(&self) -> Vec<Square> {
        self.squares_with(Cell::Enemy)
    }

    fn squares_with(&self, cell: Cell) -> Vec<Square> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| **c == cell)
            .map(|(i, _)| i)
            .collect()
    }

    /// Plays a candidate: the moving piece's cell is carried to the target
    /// and a captured square is cleared.
    ///
    /// Returns false, leaving the board untouched, if any referenced square
    /// is off the board.
    pub fn apply(&mut self, candidate: &Candidate) -> bool {
        let piece = candidate.piece();
        let to = candidate.to();
        let captured = candidate.captured();
        if !Board::in_bounds(piece) || !Board::in_bounds(to) {
            return false;
        }
        if captured.is_some_and(|c| !Board::in_bounds(c)) {
            return false;
        }

        let mover = self.cells[piece];
        self.cells[piece] = Cell::Empty;
        self.cells[to] = mover;
        if let Some(c) = captured {
            self.cells[c] = Cell::Empty;
        }
        true
    }
}
