//! Command parser.
//!
//! Parses incoming protocol lines into structured `Command` variants that
//! the engine main loop can dispatch on.

use tracing::warn;

use crate::board::Square;

/// A parsed command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Synchronization ping; engine must reply `readyok`.
    IsReady,

    /// Start a new game: empty board, fresh draw tracking.
    NewGame,

    /// Set the board from a position string.
    Position { notation: String },

    /// Set an option: `setoption name <id> [value <x>]`.
    SetOption { name: String, value: Option<String> },

    /// Evaluate and report the top candidates (once per reset).
    Evaluate,

    /// Clear the evaluation flag so the next `evaluate` reports again.
    Reset,

    /// Play the generated candidate from one square to another.
    Play { from: Square, to: Square },

    /// Check the draw rules for the current position.
    Draw,

    /// Terminate the engine process.
    Quit,
}

/// Parses a single line of input into a `Command`.
///
/// Returns `None` for empty lines or unrecognized commands. Malformed
/// arguments for known commands also return `None` after logging a warning.
pub fn parse_command(line: &str) -> Option<Command> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return None;
    }

    let tokens: Vec<&str> = trimmed.split_whitespace().collect();

    match tokens[0] {
        "isready" => Some(Command::IsReady),
        "newgame" => Some(Command::NewGame),
        "evaluate" => Some(Command::Evaluate),
        "reset" => Some(Command::Reset),
        "draw" => Some(Command::Draw),
        "quit" => Some(Command::Quit),

        "position" => parse_position(&tokens),
        "setoption" => parse_setoption(&tokens),
        "play" => parse_play(&tokens),

        other => {
            warn!(command = other, "unknown command");
            None
        }
    }
}

/// Parses `position <notation>`.
fn parse_position(tokens: &[&str]) -> Option<Command> {
    if tokens.len() < 2 {
        warn!("malformed position: expected 'position <notation>'");
        return None;
    }
    Some(Command::Position {
        notation: tokens[1].to_string(),
    })
}

/// Parses `setoption name <id> [value <x>]`.
fn parse_setoption(tokens: &[&str]) -> Option<Command> {
    if tokens.len() < 3 || tokens[1] != "name" {
        warn!("malformed setoption: expected 'setoption name <id> [value <x>]'");
        return None;
    }

    let value_idx = tokens.iter().position(|&t| t == "value");
    let (name_parts, value_parts) = match value_idx {
        Some(vi) => (&tokens[2..vi], &tokens[vi + 1..]),
        None => (&tokens[2..], &tokens[tokens.len()..]),
    };
    if name_parts.is_empty() {
        warn!("malformed setoption: empty name");
        return None;
    }

    let name = name_parts.join(" ");
    let value = if value_parts.is_empty() {
        None
    } else {
        Some(value_parts.join(" "))
    };
    Some(Command::SetOption { name, value })
}

/// Parses `play <from> <to>`.
fn parse_play(tokens: &[&str]) -> Option<Command> {
    if tokens.len() != 3 {
        warn!("malformed play: expected 'play <from> <to>'");
        return None;
    }
    match (tokens[1].parse::<Square>(), tokens[2].parse::<Square>()) {
        (Ok(from), Ok(to)) => Some(Command::Play { from, to }),
        _ => {
            warn!(from = tokens[1], to = tokens[2], "invalid play squares");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_simple_commands() {
        assert_eq!(parse_command("isready"), Some(Command::IsReady));
        assert_eq!(parse_command("newgame"), Some(Command::NewGame));
        assert_eq!(parse_command("evaluate"), Some(Command::Evaluate));
        assert_eq!(parse_command("reset"), Some(Command::Reset));
        assert_eq!(parse_command("draw"), Some(Command::Draw));
        assert_eq!(parse_command("quit"), Some(Command::Quit));
    }

    #[test]
    fn parse_empty_line_returns_none() {
        assert_eq!(parse_command(""), None);
        assert_eq!(parse_command("   \t"), None);
    }

    #[test]
    fn parse_unknown_command_returns_none() {
        assert_eq!(parse_command("go movetime 100"), None);
    }

    #[test]
    fn parse_surrounding_whitespace() {
        assert_eq!(parse_command("  evaluate  \n"), Some(Command::Evaluate));
    }

    #[test]
    fn parse_position_command() {
        assert_eq!(
            parse_command("position 8/8/8/8/8/8/8/8"),
            Some(Command::Position {
                notation: "8/8/8/8/8/8/8/8".to_string()
            })
        );
        assert_eq!(parse_command("position"), None);
    }

    #[test]
    fn parse_setoption_with_value() {
        assert_eq!(
            parse_command("setoption name TopN value 3"),
            Some(Command::SetOption {
                name: "TopN".to_string(),
                value: Some("3".to_string())
            })
        );
    }

    #[test]
    fn parse_setoption_without_value() {
        assert_eq!(
            parse_command("setoption name EdgeGuard"),
            Some(Command::SetOption {
                name: "EdgeGuard".to_string(),
                value: None
            })
        );
    }

    #[test]
    fn parse_setoption_malformed() {
        assert_eq!(parse_command("setoption TopN 3"), None);
        assert_eq!(parse_command("setoption name value 3"), None);
    }

    #[test]
    fn parse_play_command() {
        assert_eq!(
            parse_command("play 20 38"),
            Some(Command::Play { from: 20, to: 38 })
        );
        assert_eq!(parse_command("play 20"), None);
        assert_eq!(parse_command("play a b"), None);
        assert_eq!(parse_command("play -1 5"), None);
    }
}
