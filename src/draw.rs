//! Draw detection for lone-piece endings.
//!
//! A `GameSession` belongs to exactly one game. It carries the quiet-move
//! counter and the table of positions already seen; a new game starts with
//! a new session rather than a reset.

use std::collections::HashMap;
use std::fmt;

use tracing::debug;

use crate::board::{Board, Square};
use crate::config::EvalConfig;
use crate::protocol::notation::encode_position;

/// Why a position was declared drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DrawReason {
    /// Too many moves without a capture.
    FiftyMove,
    /// The same position came up again.
    Repetition,
}

impl DrawReason {
    pub const fn as_str(self) -> &'static str {
        match self {
            DrawReason::FiftyMove => "50-move rule draw.",
            DrawReason::Repetition => "2-fold repetition draw.",
        }
    }
}

impl fmt::Display for DrawReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-game draw bookkeeping.
#[derive(Debug, Clone, Default)]
pub struct GameSession {
    move_counter: u32,
    repetitions: HashMap<String, u32>,
}

impl GameSession {
    pub fn new() -> Self {
        GameSession::default()
    }

    /// Moves played since the last capture.
    pub fn move_counter(&self) -> u32 {
        self.move_counter
    }

    /// Overrides the quiet-move counter, for drivers that track it themselves.
    pub fn set_move_counter(&mut self, moves: u32) {
        self.move_counter = moves;
    }

    /// Records a played move: a capture resets the counter, anything else
    /// advances it.
    pub fn record_move(&mut self, captured: bool) {
        if captured {
            self.move_counter = 0;
        } else {
            self.move_counter = self.move_counter.saturating_add(1);
        }
    }

    /// How many times the given position has been seen.
    pub fn occurrences(&self, board: &Board) -> u32 {
        self.repetitions
            .get(&encode_position(board))
            .copied()
            .unwrap_or(0)
    }

    /// Checks the draw rules, which only apply once either side is down to
    /// a single piece.
    ///
    /// The quiet-move rule is checked first and only reads the counter. The
    /// repetition rule records the position on every call that reaches it
    /// and reports a draw on every occurrence at or beyond
    /// `cfg.repetition_limit`.
    pub fn detect_draw(
        &mut self,
        board: &Board,
        own: &[Square],
        opponents: &[Square],
        cfg: &EvalConfig,
    ) -> Option<DrawReason> {
        if own.len() != 1 && opponents.len() != 1 {
            return None;
        }

        if self.move_counter >= cfg.fifty_move_limit {
            debug!(moves = self.move_counter, "quiet-move limit reached");
            return Some(DrawReason::FiftyMove);
        }

        let seen = self.repetitions.entry(encode_position(board)).or_insert(0);
        *seen = seen.saturating_add(1);
        if *seen >= cfg.repetition_limit {
            debug!(occurrences = *seen, "position repeated");
            return Some(DrawReason::Repetition);
        }

        None
    }
}
