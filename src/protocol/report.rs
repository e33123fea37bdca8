//! Evaluation reports.
//!
//! Text form: a `Top N Moves:` header followed by one line per candidate,
//! e.g. `Piece at 20 -> 38 (Jump, Score: 10)`. JSON form: the ranked list as
//! a single JSON array line.

use std::io::{self, Write};

use crate::board::Candidate;
use crate::config::{EvalConfig, ReportFormat};

/// Formats a single candidate as a report line.
pub fn format_candidate(candidate: &Candidate) -> String {
    format!(
        "Piece at {} -> {} ({}, Score: {})",
        candidate.piece(),
        candidate.to(),
        candidate.kind().label(),
        candidate.score()
    )
}

/// Writes the ranked candidates in the configured report format.
pub fn write_report<W: Write>(
    out: &mut W,
    ranked: &[Candidate],
    cfg: &EvalConfig,
) -> io::Result<()> {
    match cfg.report_format {
        ReportFormat::Text => {
            writeln!(out, "Top {} Moves:", cfg.top_n)?;
            for candidate in ranked {
                writeln!(out, "{}", format_candidate(candidate))?;
            }
        }
        ReportFormat::Json => {
            serde_json::to_writer(&mut *out, ranked)?;
            writeln!(out)?;
        }
    }
    out.flush()
}
