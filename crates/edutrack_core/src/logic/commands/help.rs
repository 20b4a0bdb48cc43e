//! Command overview command.

use super::{Command, CommandError, CommandResult};
use crate::model::book::Model;

/// Reports the list of available command words.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HelpCommand;

impl HelpCommand {
    pub const COMMAND_WORD: &'static str = "help";
    pub const MESSAGE_HELP: &'static str = "Available commands: add, edit, delete, clear, find, \
        list, remark, tagcreate, tagassign, help, exit";
}

impl Command for HelpCommand {
    fn execute(&self, _model: &mut Model) -> Result<CommandResult, CommandError> {
        Ok(CommandResult::with_help(Self::MESSAGE_HELP))
    }
}
