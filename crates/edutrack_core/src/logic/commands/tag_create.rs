//! Tag registration command.

use super::{Command, CommandError, CommandResult};
use crate::model::book::Model;
use crate::model::tag::Tag;

/// Registers a new canonical tag in the book's tag set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagCreateCommand {
    tag: Tag,
}

impl TagCreateCommand {
    pub const COMMAND_WORD: &'static str = "tagcreate";
    pub const MESSAGE_USAGE: &'static str = "tagcreate: Creates a new tag that can then be \
        assigned to persons.\n\
        Parameters: t/TAG\n\
        Example: tagcreate t/Physics";

    pub fn new(tag: Tag) -> Self {
        Self { tag }
    }
}

impl Command for TagCreateCommand {
    fn execute(&self, model: &mut Model) -> Result<CommandResult, CommandError> {
        if !model.add_tag(self.tag.clone()) {
            return Err(CommandError::DuplicateTagRegistration);
        }
        Ok(CommandResult::new(format!("New tag added: {}", self.tag)))
    }
}
