//! Scored candidate moves.
//!
//! A candidate is either a simple diagonal step or a capturing jump, each
//! carrying the heuristic score used for ranking.

use serde::Serialize;

use super::state::Square;

/// The kind of a candidate, as shown in reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CandidateKind {
    Move,
    Jump,
}

impl CandidateKind {
    /// Returns the report label.
    pub const fn label(self) -> &'static str {
        match self {
            CandidateKind::Move => "Move",
            CandidateKind::Jump => "Jump",
        }
    }
}

/// A proposed move with its heuristic score. Higher scores are preferred.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Candidate {
    /// Step to an adjacent empty square: `Piece at 20 -> 29 (Move, Score: 3)`
    Move { piece: Square, to: Square, score: i32 },

    /// Capture over an adjacent enemy piece into the empty square behind it.
    Jump {
        piece: Square,
        to: Square,
        captured: Square,
        score: i32,
    },
}

impl Candidate {
    /// The square of the piece making the move.
    pub fn piece(&self) -> Square {
        match *self {
            Candidate::Move { piece, .. } | Candidate::Jump { piece, .. } => piece,
        }
    }

    /// The destination square.
    pub fn to(&self) -> Square {
        match *self {
            Candidate::Move { to, .. } | Candidate::Jump { to, .. } => to,
        }
    }

    /// The captured square, for jumps.
    pub fn captured(&self) -> Option<Square> {
        match *self {
            Candidate::Move { .. } => None,
            Candidate::Jump { captured, .. } => Some(captured),
        }
    }

    /// The heuristic score; higher is better.
    pub fn score(&self) -> i32 {
        match *self {
            Candidate::Move { score, .. } | Candidate::Jump { score, .. } => score,
        }
    }

    /// Adds `delta` to the score, saturating at the `i32` bounds.
    pub fn add_score(&mut self, delta: i32) {
        match self {
            Candidate::Move { score, .. } | Candidate::Jump { score, .. } => {
                *score = score.saturating_add(delta)
            }
        }
    }

    /// Whether this is a simple move or a jump.
    pub fn kind(&self) -> CandidateKind {
        match self {
            Candidate::Move { .. } => CandidateKind::Move,
            Candidate::Jump { .. } => CandidateKind::Jump,
        }
    }

    /// Returns true for capturing jumps.
    pub fn is_jump(&self) -> bool {
        matches!(self, Candidate::Jump { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors() {
        let m = Candidate::Move { piece: 11, to: 20, score: 3 };
        assert_eq!(m.piece(), 11);
        assert_eq!(m.to(), 20);
        assert_eq!(m.captured(), None);
        assert_eq!(m.kind(), CandidateKind::Move);
        assert!(!m.is_jump());

        let j = Candidate::Jump { piece: 20, to: 38, captured: 29, score: 10 };
        assert_eq!(j.captured(), Some(29));
        assert_eq!(j.kind().label(), "Jump");
        assert!(j.is_jump());
    }

    #[test]
    fn add_score_adjusts_both_variants() {
        let mut m = Candidate::Move { piece: 11, to: 20, score: 1 };
        m.add_score(2);
        assert_eq!(m.score(), 3);

        let mut j = Candidate::Jump { piece: 20, to: 38, captured: 29, score: 5 };
        j.add_score(-8);
        assert_eq!(j.score(), -3);
    }

    #[test]
    fn add_score_saturates() {
        let mut m = Candidate::Move { piece: 11, to: 20, score: i32::MAX - 1 };
        m.add_score(5);
        assert_eq!(m.score(), i32::MAX);

        let mut j = Candidate::Jump { piece: 20, to: 38, captured: 29, score: i32::MIN + 1 };
        j.add_score(-5);
        assert_eq!(j.score(), i32::MIN);
    }

    #[test]
    fn serializes_with_type_tag() {
        let j = Candidate::Jump { piece: 20, to: 38, captured: 29, score: 10 };
        let json = serde_json::to_string(&j).unwrap();
        assert_eq!(json, r#"{"type":"jump","piece":20,"to":38,"captured":29,"score":10}"#);
    }
}
