//! Diagonal step offsets on the flattened board.
//!
//! Squares are addressed by `rank * BOARD_WIDTH + file`, so a diagonal step
//! is a fixed signed offset. Without the edge guard no check is made that
//! the step stays on the same pair of adjacent ranks, which means a step
//! off the left or right edge silently wraps onto the neighbouring rank.

use super::state::{Square, BOARD_SIZE, BOARD_WIDTH};

/// The four diagonal offsets, in enumeration order.
pub const DIRECTIONS: [isize; 4] = [-9, -7, 7, 9];

/// Returns the square one diagonal step from `from`, or `None` if it is
/// off the board.
///
/// With `edge_guard` set, a step whose file does not differ from the
/// origin's by exactly one is also rejected.
#[inline]
pub fn step(from: Square, direction: isize, edge_guard: bool) -> Option<Square> {
    let to = from.checked_add_signed(direction)?;
    if to >= BOARD_SIZE {
        return None;
    }
    if edge_guard && (from % BOARD_WIDTH).abs_diff(to % BOARD_WIDTH) != 1 {
        return None;
    }
    Some(to)
}
