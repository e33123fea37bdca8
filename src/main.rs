//! Draughtsman -- a checkers move evaluator driven over stdin/stdout.
//!
//! Reads one command per line and writes responses to stdout. Diagnostics
//! go to stderr through `tracing`; set `RUST_LOG=debug` for detail.
//!
//! Usage:
//!   draughtsman [--config FILE]

use std::env;
use std::io::{self, BufRead};
use std::path::Path;
use std::process::ExitCode;

use tracing::warn;
use tracing_subscriber::EnvFilter;

use draughtsman::config::EvalConfig;
use draughtsman::engine::Engine;
use draughtsman::protocol::parser::{parse_command, Command};

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let config = match parse_args() {
        Ok(Some(config)) => config,
        Ok(None) => return ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            print_usage();
            return ExitCode::FAILURE;
        }
    };

    match run(Engine::new(config)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("i/o error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Parses command-line arguments. Returns `Ok(None)` when only help was requested.
fn parse_args() -> Result<Option<EvalConfig>, String> {
    let args: Vec<String> = env::args().skip(1).collect();
    let mut config = EvalConfig::default();

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--config" => {
                i += 1;
                let path = args.get(i).ok_or("--config requires a file path")?;
                config = EvalConfig::load(Path::new(path)).map_err(|e| e.to_string())?;
            }
            "--help" | "-h" => {
                print_usage();
                return Ok(None);
            }
            other => return Err(format!("Unknown argument: {}", other)),
        }
        i += 1;
    }

    Ok(Some(config))
}

fn print_usage() {
    eprintln!("Usage: draughtsman [--config FILE]");
}

/// Runs the command loop until `quit` or end of input.
fn run(mut engine: Engine) -> io::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    for line in stdin.lock().lines() {
        let line = line?;

        let cmd = match parse_command(&line) {
            Some(c) => c,
            None => continue,
        };

        match cmd {
            Command::IsReady => engine.handle_isready(&mut out)?,
            Command::NewGame => engine.new_game(),
            Command::Position { notation } => {
                if let Err(e) = engine.set_position(&notation) {
                    warn!("{}", e);
                }
            }
            Command::SetOption { name, value } => {
                if let Err(e) = engine.set_option(&name, value.as_deref()) {
                    warn!("{}", e);
                }
            }
            Command::Evaluate => engine.handle_evaluate(&mut out)?,
            Command::Reset => engine.handle_reset(),
            Command::Play { from, to } => {
                if let Err(e) = engine.handle_play(from, to) {
                    warn!("{}", e);
                }
            }
            Command::Draw => engine.handle_draw(&mut out)?,
            Command::Quit => break,
        }
    }

    Ok(())
}
