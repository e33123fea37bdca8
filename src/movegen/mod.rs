//! Candidate move generation.
//!
//! Enumerates simple diagonal moves and single capturing jumps for a set of
//! pieces. Enumeration is filter-based: squares off the board, occupied
//! targets and missing enemies simply produce no candidate.

use crate::board::{step, Board, Candidate, Cell, Square, DIRECTIONS};
use crate::config::EvalConfig;
use crate::eval::threat_score;

/// Generates every simple move and jump for `own`, with base scores.
///
/// Order is piece order, then direction order, and within one direction the
/// simple move precedes the jump. Ranking relies on this order for ties.
pub fn generate_candidates(
    board: &Board,
    own: &[Square],
    opponents: &[Square],
    cfg: &EvalConfig,
) -> Vec<Candidate> {
    let mut candidates = Vec::new();

    for &piece in own {
        if !Board::in_bounds(piece) {
            continue;
        }
        for &direction in DIRECTIONS.iter() {
            let Some(adjacent) = step(piece, direction, cfg.edge_guard) else {
                continue;
            };

            if board.is_open(adjacent) {
                candidates.push(Candidate::Move {
                    piece,
                    to: adjacent,
                    score: cfg.move_base,
                });
            }

            if let Some((captured, landing)) = jump_target(board, adjacent, direction, cfg) {
                let risk = threat_score(board, landing, opponents, cfg);
                candidates.push(Candidate::Jump {
                    piece,
                    to: landing,
                    captured,
                    score: cfg.jump_base.saturating_sub(risk),
                });
            }
        }
    }

    candidates
}

/// Returns (captured, landing) if an enemy on `adjacent` can be jumped in
/// `direction` into an empty square.
fn jump_target(
    board: &Board,
    adjacent: Square,
    direction: isize,
    cfg: &EvalConfig,
) -> Option<(Square, Square)> {
    if board.get(adjacent) != Some(Cell::Enemy) {
        return None;
    }
    let landing = step(adjacent, direction, cfg.edge_guard)?;
    board.is_open(landing).then_some((adjacent, landing))
}
