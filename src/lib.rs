//! Draughtsman: checkers move evaluation library.
//!
//! Exposes the board model, candidate generation, threat-aware scoring,
//! ranking, draw detection and the text protocol used by the binary entry
//! point and the integration tests.

pub mod board;
pub mod config;
pub mod draw;
pub mod engine;
pub mod eval;
pub mod evaluator;
pub mod movegen;
pub mod protocol;
pub mod search;
