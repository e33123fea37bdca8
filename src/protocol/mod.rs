//! Text protocol handling.
//!
//! Implements the position notation, the evaluation report format, and the
//! command parser for the engine's stdin/stdout loop.

pub mod notation;
pub mod parser;
pub mod report;

pub use notation::{encode_position, parse_position, NotationError};
pub use parser::{parse_command, Command};
pub use report::{format_candidate, write_report};
