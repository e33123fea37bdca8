//! Ranking and top-N selection.
//!
//! Candidates are stably sorted by descending score, so ties keep
//! enumeration order. A single pass then keeps the first candidate seen for
//! each originating piece.

use std::collections::HashSet;

use tracing::debug;

use crate::board::{Board, Candidate, Square};
use crate::config::EvalConfig;
use crate::eval::apply_strategy_bonus;
use crate::movegen::generate_candidates;

/// Evaluates every candidate for `own` and returns the ranked selection.
///
/// This is pure: it never reports and carries no state between calls.
pub fn evaluate(
    board: &Board,
    own: &[Square],
    opponents: &[Square],
    cfg: &EvalConfig,
) -> Vec<Candidate> {
    let mut candidates = generate_candidates(board, own, opponents, cfg);
    apply_strategy_bonus(&mut candidates, cfg);
    let enumerated = candidates.len();
    let ranked = rank_candidates(candidates, cfg.top_n);
    debug!(enumerated, selected = ranked.len(), "ranked candidates");
    ranked
}

/// Sorts by descending score and keeps at most `top_n` candidates, one per piece.
pub fn rank_candidates(mut candidates: Vec<Candidate>, top_n: usize) -> Vec<Candidate> {
    // `sort_by` is stable; equal scores stay in enumeration order.
    candidates.sort_by(|a, b| b.score().cmp(&a.score()));

    let mut selected = Vec::with_capacity(top_n.min(candidates.len()));
    let mut seen: HashSet<Square> = HashSet::new();
    for candidate in candidates {
        if selected.len() >= top_n {
            break;
        }
        if seen.insert(candidate.piece()) {
            selected.push(candidate);
        }
    }

    selected
}
