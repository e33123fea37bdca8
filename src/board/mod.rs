//! Board representation and candidate-move types.
//!
//! Contains the cell contents, the flattened 8x8 board, the diagonal step
//! offsets, and the scored candidate moves produced by evaluation.

pub mod candidate;
pub mod cell;
pub mod direction;
pub mod state;

pub use candidate::{Candidate, CandidateKind};
pub use cell::Cell;
pub use direction::{step, DIRECTIONS};
pub use state::{Board, Square, BOARD_SIZE, BOARD_WIDTH};
