//! Candidate ranking.
//!
//! Runs the single-ply pipeline: enumerate, apply the strategy bonus, then
//! keep the best candidate for each of the top pieces.

pub mod ranking;

pub use ranking::{evaluate, rank_candidates};
