//! Cell contents.
//!
//! Each square of the board is empty, holds one of the two sides' pieces,
//! or is off the playing surface altogether.

/// The contents of a single board square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Own,
    Enemy,
    /// Unplayable square. Never a move target or jump landing.
    Void,
}

impl Cell {
    /// Returns the single-character notation for this cell.
    pub const fn notation_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Own => 'o',
            Cell::Enemy => 'x',
            Cell::Void => '#',
        }
    }

    /// Parses a cell from its single-character notation.
    pub fn from_notation_char(c: char) -> Option<Cell> {
        match c {
            '.' => Some(Cell::Empty),
            'o' => Some(Cell::Own),
            'x' => Some(Cell::Enemy),
            '#' => Some(Cell::Void),
            _ => None,
        }
    }

    /// Returns true if a piece may move or land here.
    #[inline]
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }
}
