//! Session exit command.

use super::{Command, CommandError, CommandResult};
use crate::model::book::Model;

/// Signals the caller to end the session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExitCommand;

impl ExitCommand {
    pub const COMMAND_WORD: &'static str = "exit";
}

impl Command for ExitCommand {
    fn execute(&self, _model: &mut Model) -> Result<CommandResult, CommandError> {
        Ok(CommandResult::with_exit("Exiting Address Book as requested ..."))
    }
}
