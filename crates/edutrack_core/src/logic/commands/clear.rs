//! Book reset command.

use super::{Command, CommandError, CommandResult};
use crate::model::book::Model;

/// Empties the whole contact book, including the tag registry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClearCommand;

impl ClearCommand {
    pub const COMMAND_WORD: &'static str = "clear";
}

impl Command for ClearCommand {
    fn execute(&self, model: &mut Model) -> Result<CommandResult, CommandError> {
        model.clear();
        Ok(CommandResult::new("Address book has been cleared!"))
    }
}
