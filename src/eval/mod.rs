//! Candidate scoring.
//!
//! Measures how exposed a landing square is to opponent counter-play and
//! applies the flat strategy bonus to enumerated candidates.

pub(crate) mod heuristic;

pub use heuristic::{apply_strategy_bonus, threat_score};
