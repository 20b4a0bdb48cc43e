//! Remark replacement command.

use super::{Command, CommandError, CommandResult};
use crate::model::book::Model;
use crate::model::index::DisplayedIndex;
use crate::model::remark::Remark;

/// Replaces (or removes) the remark of the person at a displayed index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemarkCommand {
    index: DisplayedIndex,
    remark: Remark,
}

impl RemarkCommand {
    pub const COMMAND_WORD: &'static str = "remark";
    pub const MESSAGE_USAGE: &'static str = "remark: Edits the remark of the person identified \
        by the index number used in the displayed person list. \
        An empty or omitted remark removes the existing one.\n\
        Parameters: INDEX (must be a positive integer) r/[REMARK]\n\
        Example: remark 1 r/Likes tea";

    pub fn new(index: DisplayedIndex, remark: Remark) -> Self {
        Self { index, remark }
    }
}

impl Command for RemarkCommand {
    fn execute(&self, model: &mut Model) -> Result<CommandResult, CommandError> {
        let target = model
            .filtered_person_at(self.index.zero_based())
            .cloned()
            .ok_or(CommandError::InvalidPersonIndex)?;

        let edited = target.with_remark(self.remark.clone());
        model.replace_person(&target, edited.clone());

        let message = if self.remark.is_empty() {
            format!("Removed remark from Person: {}", edited.summary())
        } else {
            format!("Added remark to Person: {}", edited.summary())
        };
        Ok(CommandResult::new(message))
    }
}
