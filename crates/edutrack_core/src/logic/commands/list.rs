//! Full-list command.

use super::{Command, CommandError, CommandResult};
use crate::model::book::{Model, PersonFilter};

/// Clears any active filter so the whole book is displayed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListCommand;

impl ListCommand {
    pub const COMMAND_WORD: &'static str = "list";
}

impl Command for ListCommand {
    fn execute(&self, model: &mut Model) -> Result<CommandResult, CommandError> {
        model.update_filter(PersonFilter::All);
        Ok(CommandResult::new("Listed all persons"))
    }
}
