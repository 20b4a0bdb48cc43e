//! Person deletion command.

use super::{Command, CommandError, CommandResult};
use crate::model::book::Model;
use crate::model::index::DisplayedIndex;

/// Deletes the person at a displayed index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteCommand {
    index: DisplayedIndex,
}

impl DeleteCommand {
    pub const COMMAND_WORD: &'static str = "delete";
    pub const MESSAGE_USAGE: &'static str = "delete: Deletes the person identified by the index \
        number used in the displayed person list.\n\
        Parameters: INDEX (must be a positive integer)\n\
        Example: delete 1";

    pub fn new(index: DisplayedIndex) -> Self {
        Self { index }
    }
}

impl Command for DeleteCommand {
    fn execute(&self, model: &mut Model) -> Result<CommandResult, CommandError> {
        let target = model
            .filtered_person_at(self.index.zero_based())
            .cloned()
            .ok_or(CommandError::InvalidPersonIndex)?;

        model.remove_person(&target);
        Ok(CommandResult::new(format!(
            "Deleted Person: {}",
            target.summary()
        )))
    }
}
