//! Evaluation configuration.
//!
//! Every heuristic constant lives here. The defaults reproduce the classic
//! scoring; a JSON file or protocol `setoption` commands can override
//! individual fields.

use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde::Deserialize;

/// Errors raised while loading or updating the configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("failed to parse config JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unknown option '{0}'")]
    UnknownOption(String),

    #[error("invalid value '{value}' for option '{name}'")]
    InvalidValue { name: String, value: String },
}

/// How the evaluation report is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for ReportFormat {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(ReportFormat::Text),
            "json" => Ok(ReportFormat::Json),
            _ => Err(()),
        }
    }
}

/// Scoring weights, ranking size, and draw thresholds.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EvalConfig {
    /// Maximum number of candidates returned, one per piece.
    pub top_n: usize,
    /// Base score of a simple move.
    pub move_base: i32,
    /// Base score of a jump before the landing-square threat is subtracted.
    pub jump_base: i32,
    /// Threat added per opponent piece directly adjacent to a landing square.
    pub adjacent_threat: i32,
    /// Threat added per opponent piece able to jump into a landing square.
    pub jump_threat: i32,
    /// Flat bonus added to every simple move after enumeration.
    pub move_bonus: i32,
    /// Flat bonus added to every jump after enumeration.
    pub jump_bonus: i32,
    /// Quiet moves after which a lone-piece ending is drawn.
    pub fifty_move_limit: u32,
    /// Occurrences of one position after which a lone-piece ending is drawn.
    pub repetition_limit: u32,
    /// Reject diagonal steps that wrap across the left or right edge.
    pub edge_guard: bool,
    pub report_format: ReportFormat,
}

impl Default for EvalConfig {
    fn default() -> Self {
        EvalConfig {
            top_n: 5,
            move_base: 1,
            jump_base: 10,
            adjacent_threat: 5,
            jump_threat: 10,
            move_bonus: 2,
            jump_bonus: 5,
            fifty_move_limit: 50,
            repetition_limit: 2,
            edge_guard: false,
            report_format: ReportFormat::Text,
        }
    }
}

impl EvalConfig {
    /// Loads a configuration from a JSON file. Missing fields keep their defaults.
    pub fn load(path: &Path) -> Result<EvalConfig, ConfigError> {
        let data = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        EvalConfig::from_json(&data)
    }

    /// Parses a configuration from a JSON string. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<EvalConfig, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Applies a protocol option by name, e.g. `TopN` or `EdgeGuard`.
    ///
    /// Names are matched case-insensitively. On error the configuration is
    /// left unchanged.
    pub fn set_option(&mut self, name: &str, value: Option<&str>) -> Result<(), ConfigError> {
        let raw = value.unwrap_or("").trim();
        let invalid = || ConfigError::InvalidValue {
            name: name.to_string(),
            value: raw.to_string(),
        };

        match name.to_ascii_lowercase().as_str() {
            "topn" => self.top_n = parse_value(raw).ok_or_else(invalid)?,
            "movebase" => self.move_base = parse_value(raw).ok_or_else(invalid)?,
            "jumpbase" => self.jump_base = parse_value(raw).ok_or_else(invalid)?,
            "adjacentthreat" => self.adjacent_threat = parse_value(raw).ok_or_else(invalid)?,
            "jumpthreat" => self.jump_threat = parse_value(raw).ok_or_else(invalid)?,
            "movebonus" => self.move_bonus = parse_value(raw).ok_or_else(invalid)?,
            "jumpbonus" => self.jump_bonus = parse_value(raw).ok_or_else(invalid)?,
            "fiftymovelimit" => self.fifty_move_limit = parse_value(raw).ok_or_else(invalid)?,
            "repetitionlimit" => self.repetition_limit = parse_value(raw).ok_or_else(invalid)?,
            "edgeguard" => self.edge_guard = parse_value(raw).ok_or_else(invalid)?,
            "reportformat" => self.report_format = parse_value(raw).ok_or_else(invalid)?,
            _ => return Err(ConfigError::UnknownOption(name.to_string())),
        }
        Ok(())
    }
}

fn parse_value<T: FromStr>(raw: &str) -> Option<T> {
    raw.parse().ok()
}
