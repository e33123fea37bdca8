//! Print-once move evaluation.
//!
//! Wraps the pure ranking pipeline with the announce-once behaviour of a
//! turn: the first evaluation is computed and reported, later calls return
//! nothing until the caller resets the flag for the next turn.

use std::io::{self, Write};

use tracing::debug;

use crate::board::{Board, Candidate, Square};
use crate::config::EvalConfig;
use crate::protocol::report::write_report;
use crate::search::evaluate;

/// Stateful evaluator that reports its ranking at most once per reset.
#[derive(Debug, Default)]
pub struct MoveEvaluator {
    already_reported: bool,
}

impl MoveEvaluator {
    /// Creates an evaluator that has not reported yet.
    pub fn new() -> Self {
        MoveEvaluator::default()
    }

    /// Evaluates and reports the top candidates, unless that already
    /// happened since the last reset, in which case nothing is computed and
    /// an empty list is returned.
    pub fn evaluate<W: Write>(
        &mut self,
        board: &Board,
        own: &[Square],
        opponents: &[Square],
        cfg: &EvalConfig,
        out: &mut W,
    ) -> io::Result<Vec<Candidate>> {
        if self.already_reported {
            debug!("evaluation already reported; skipping");
            return Ok(Vec::new());
        }

        let ranked = evaluate(board, own, opponents, cfg);
        write_report(out, &ranked, cfg)?;
        self.already_reported = true;
        Ok(ranked)
    }

    /// Allows the next `evaluate` call to compute and report again.
    pub fn reset_evaluation_flag(&mut self) {
        self.already_reported = false;
    }

    pub fn already_reported(&self) -> bool {
        self.already_reported
    }
}
