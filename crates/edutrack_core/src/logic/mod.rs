//! Command pipeline: raw text in, result message out.
//!
//! # Responsibility
//! - Tokenize and parse command text into executable command objects.
//! - Execute commands against the session model, one at a time.
//!
//! # Invariants
//! - Execution is synchronous; a command fully completes (or fails) before
//!   the next one is accepted.
//! - Failed commands leave the model unmodified.
//! - Logged events carry command metadata only, never person field contents.

use crate::model::book::Model;
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::Instant;

pub mod commands;
pub mod parser;

use commands::{CommandError, CommandResult};
use parser::ParseError;

/// Error from either stage of the pipeline.
#[derive(Debug)]
pub enum LogicError {
    Parse(ParseError),
    Command(CommandError),
}

impl Display for LogicError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(err) => write!(f, "{err}"),
            Self::Command(err) => write!(f, "{err}"),
        }
    }
}

impl Error for LogicError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Parse(err) => Some(err),
            Self::Command(err) => Some(err),
        }
    }
}

impl From<ParseError> for LogicError {
    fn from(value: ParseError) -> Self {
        Self::Parse(value)
    }
}

impl From<CommandError> for LogicError {
    fn from(value: CommandError) -> Self {
        Self::Command(value)
    }
}

/// Runs one raw command line through parse and execute.
///
/// The returned error carries the fixed user-facing message; the model is
/// untouched whenever an error is returned.
pub fn run_command(input: &str, model: &mut Model) -> Result<CommandResult, LogicError> {
    let started_at = Instant::now();
    let command_word = input.trim().split_whitespace().next().unwrap_or("");

    let command = match parser::parse_command(input) {
        Ok(command) => command,
        Err(err) => {
            warn!(
                "event=command_parse module=logic status=error command={command_word} duration_ms={}",
                started_at.elapsed().as_millis()
            );
            return Err(err.into());
        }
    };

    match command.execute(model) {
        Ok(result) => {
            info!(
                "event=command_executed module=logic status=ok command={command_word} duration_ms={}",
                started_at.elapsed().as_millis()
            );
            Ok(result)
        }
        Err(err) => {
            warn!(
                "event=command_executed module=logic status=error command={command_word} duration_ms={}",
                started_at.elapsed().as_millis()
            );
            Err(err.into())
        }
    }
}
