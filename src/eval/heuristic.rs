//! Threat-aware heuristic scoring.
//!
//! A jump is worth less the more opponent pieces could answer it. Threats
//! are aggregated over every opponent piece rather than taken from the
//! nearest one, so two attackers count twice.

use crate::board::{step, Board, Candidate, Square, DIRECTIONS};
use crate::config::EvalConfig;

/// Returns the threat accumulated against `target` by all `opponents`.
///
/// For each opponent piece and direction: if its adjacent square is the
/// target, `cfg.adjacent_threat` is added; otherwise if the adjacent square
/// is empty and the square beyond it is the target, `cfg.jump_threat` is
/// added.
pub fn threat_score(board: &Board, target: Square, opponents: &[Square], cfg: &EvalConfig) -> i32 {
    let mut threat = 0i32;

    for &opponent in opponents {
        if !Board::in_bounds(opponent) {
            continue;
        }
        for &direction in DIRECTIONS.iter() {
            let Some(adjacent) = step(opponent, direction, cfg.edge_guard) else {
                continue;
            };
            if adjacent == target {
                threat = threat.saturating_add(cfg.adjacent_threat);
            } else if board.is_open(adjacent)
                && step(adjacent, direction, cfg.edge_guard) == Some(target)
            {
                threat = threat.saturating_add(cfg.jump_threat);
            }
        }
    }

    threat
}

/// Adds the flat positional bonus: `cfg.move_bonus` to every simple move,
/// `cfg.jump_bonus` to every jump.
pub fn apply_strategy_bonus(candidates: &mut [Candidate], cfg: &EvalConfig) {
    for candidate in candidates.iter_mut() {
        let bonus = if candidate.is_jump() {
            cfg.jump_bonus
        } else {
            cfg.move_bonus
        };
        candidate.add_score(bonus);
    }
}
