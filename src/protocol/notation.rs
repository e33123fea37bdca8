//! Position notation.
//!
//! A compact, FEN-like string for a full board: eight ranks separated by
//! `/`, rank 0 first, each rank listing its eight cells from file 0.
//!
//! Cells: `.` empty, `o` own piece, `x` enemy piece, `#` void square. A
//! digit `1`-`8` stands for that many consecutive empty cells.
//!
//! Encoding always collapses empty runs into digits, so the encoded form is
//! canonical and doubles as the position fingerprint for repetition checks.

use crate::board::{Board, Cell, BOARD_SIZE, BOARD_WIDTH};

/// Number of ranks in the notation.
const RANK_COUNT: usize = BOARD_SIZE / BOARD_WIDTH;

/// Errors that can occur during notation parsing.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum NotationError {
    #[error("expected 8 ranks separated by '/', got {0}")]
    WrongRankCount(usize),

    #[error("rank {rank} describes {len} cells, expected 8")]
    WrongRankLength { rank: usize, len: usize },

    #[error("invalid cell character: '{0}'")]
    InvalidCell(char),
}

/// Parses a position string into a board.
pub fn parse_position(s: &str) -> Result<Board, NotationError> {
    let ranks: Vec<&str> = s.trim().split('/').collect();
    if ranks.len() != RANK_COUNT {
        return Err(NotationError::WrongRankCount(ranks.len()));
    }

    let mut board = Board::empty();
    for (rank, text) in ranks.iter().enumerate() {
        let mut file = 0usize;
        for c in text.chars() {
            if let Some(run) = c.to_digit(10).filter(|d| (1..=8).contains(d)) {
                file += run as usize;
                if file > BOARD_WIDTH {
                    return Err(NotationError::WrongRankLength { rank, len: file });
                }
                continue;
            }
            let cell = Cell::from_notation_char(c).ok_or(NotationError::InvalidCell(c))?;
            if file >= BOARD_WIDTH {
                return Err(NotationError::WrongRankLength { rank, len: file + 1 });
            }
            board.cells[rank * BOARD_WIDTH + file] = cell;
            file += 1;
        }
        if file != BOARD_WIDTH {
            return Err(NotationError::WrongRankLength { rank, len: file });
        }
    }

    Ok(board)
}

/// Encodes a board into its canonical position string.
pub fn encode_position(board: &Board) -> String {
    let mut out = String::with_capacity(BOARD_SIZE + RANK_COUNT);

    for (rank, cells) in board.cells.chunks(BOARD_WIDTH).enumerate() {
        if rank > 0 {
            out.push('/');
        }
        let mut empty_run = 0u32;
        for cell in cells {
            if *cell == Cell::Empty {
                empty_run += 1;
                continue;
            }
            if empty_run > 0 {
                out.push(char::from_digit(empty_run, 10).unwrap_or('8'));
                empty_run = 0;
            }
            out.push(cell.notation_char());
        }
        if empty_run > 0 {
            out.push(char::from_digit(empty_run, 10).unwrap_or('8'));
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const EMPTY: &str = "8/8/8/8/8/8/8/8";
    const DEMO: &str = "8/3ooooo/ooo5/8/8/7x/xxxxxxx1/8";

    #[test]
    fn empty_board_encoding() {
        assert_eq!(encode_position(&Board::empty()), EMPTY);
    }

    #[test]
    fn demo_board_encoding() {
        assert_eq!(encode_position(&Board::demo()), DEMO);
        assert_eq!(parse_position(DEMO).unwrap(), Board::demo());
    }

    #[test]
    fn dots_and_digits_are_equivalent() {
        let board = parse_position("......../8/8/8/2o.x3/8/8/#7").unwrap();
        assert_eq!(board.get(34), Some(Cell::Own));
        assert_eq!(board.get(36), Some(Cell::Enemy));
        assert_eq!(board.get(56), Some(Cell::Void));
        assert_eq!(encode_position(&board), "8/8/8/8/2o1x3/8/8/#7");
    }

    #[test]
    fn wrong_rank_count() {
        assert_eq!(
            parse_position("8/8/8"),
            Err(NotationError::WrongRankCount(3))
        );
    }

    #[test]
    fn short_and_long_ranks() {
        assert_eq!(
            parse_position("7/8/8/8/8/8/8/8"),
            Err(NotationError::WrongRankLength { rank: 0, len: 7 })
        );
        assert_eq!(
            parse_position("8/8/44o/8/8/8/8/8"),
            Err(NotationError::WrongRankLength { rank: 2, len: 9 })
        );
        assert_eq!(
            parse_position("8/8/8/8/8/8/8/9"),
            Err(NotationError::InvalidCell('9'))
        );
    }

    #[test]
    fn invalid_cell() {
        assert_eq!(
            parse_position("8/8/8/8/8/8/8/7K"),
            Err(NotationError::InvalidCell('K'))
        );
    }

    #[test]
    fn encoding_distinguishes_positions() {
        let mut a = Board::empty();
        a.set(20, Cell::Own);
        let mut b = Board::empty();
        b.set(21, Cell::Own);
        assert_ne!(encode_position(&a), encode_position(&b));
    }
}
