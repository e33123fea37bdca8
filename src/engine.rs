//! Engine state management.
//!
//! Holds the current board, evaluation options, the print-once evaluator
//! and the draw bookkeeping for the game in progress, and answers the
//! protocol commands that read or change them.

use std::io::{self, Write};

use tracing::{debug, info};

use crate::board::{Board, Square};
use crate::config::EvalConfig;
use crate::draw::GameSession;
use crate::evaluator::MoveEvaluator;
use crate::movegen::generate_candidates;
use crate::protocol::notation::parse_position;

/// Holds the mutable state of the engine between commands.
pub struct Engine {
    pub board: Board,
    pub config: EvalConfig,
    evaluator: MoveEvaluator,
    session: GameSession,
}

impl Default for Engine {
    fn default() -> Self {
        Engine::new(EvalConfig::default())
    }
}

impl Engine {
    /// Creates an engine on an empty board.
    pub fn new(config: EvalConfig) -> Self {
        Engine {
            board: Board::empty(),
            config,
            evaluator: MoveEvaluator::new(),
            session: GameSession::new(),
        }
    }

    /// Starts a new game. Options are kept.
    pub fn new_game(&mut self) {
        self.board = Board::empty();
        self.evaluator = MoveEvaluator::new();
        self.session = GameSession::new();
    }

    /// Sets the current board from a position string.
    /// Returns an error message on failure.
    pub fn set_position(&mut self, notation: &str) -> Result<(), String> {
        match parse_position(notation) {
            Ok(board) => {
                self.board = board;
                Ok(())
            }
            Err(e) => Err(format!("failed to parse position: {}", e)),
        }
    }

    /// Sets an evaluation option.
    pub fn set_option(&mut self, name: &str, value: Option<&str>) -> Result<(), String> {
        self.config
            .set_option(name, value)
            .map_err(|e| e.to_string())?;
        debug!(name, value, "option set");
        Ok(())
    }

    /// The draw bookkeeping for the current game.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Handles the `isready` command.
    pub fn handle_isready<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "readyok")?;
        out.flush()
    }

    /// Handles the `evaluate` command: reports the top candidates unless they
    /// were already reported since the last reset.
    pub fn handle_evaluate<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        let own = self.board.own_pieces();
        let opponents = self.board.enemy_pieces();
        self.evaluator
            .evaluate(&self.board, &own, &opponents, &self.config, out)?;
        Ok(())
    }

    /// Handles the `reset` command.
    pub fn handle_reset(&mut self) {
        self.evaluator.reset_evaluation_flag();
    }

    /// Plays the generated candidate moving `from` to `to`.
    ///
    /// Updates the quiet-move counter and clears the evaluation flag so the
    /// new position can be reported.
    pub fn handle_play(&mut self, from: Square, to: Square) -> Result<(), String> {
        let own = self.board.own_pieces();
        let opponents = self.board.enemy_pieces();
        let candidate = generate_candidates(&self.board, &own, &opponents, &self.config)
            .into_iter()
            .find(|c| c.piece() == from && c.to() == to)
            .ok_or_else(|| format!("no candidate move from {} to {}", from, to))?;

        self.board.apply(&candidate);
        self.session.record_move(candidate.is_jump());
        self.evaluator.reset_evaluation_flag();
        info!(
            from,
            to,
            captured = ?candidate.captured(),
            quiet_moves = self.session.move_counter(),
            "move played"
        );
        Ok(())
    }

    /// Handles the `draw` command: writes `draw <reason>` or `nodraw`.
    pub fn handle_draw<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        let own = self.board.own_pieces();
        let opponents = self.board.enemy_pieces();
        match self
            .session
            .detect_draw(&self.board, &own, &opponents, &self.config)
        {
            Some(reason) => writeln!(out, "draw {}", reason)?,
            None => writeln!(out, "nodraw")?,
        }
        out.flush()
    }
}
