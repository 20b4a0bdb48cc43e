//! Canonical tag assignment command.

use super::{Command, CommandError, CommandResult};
use crate::model::book::Model;
use crate::model::index::DisplayedIndex;
use crate::model::tag::Tag;

/// Assigns a registered tag to the person at a displayed index.
///
/// The tag carried here is the user-typed one; execution resolves it
/// case-insensitively against the registered set, and the canonical
/// registered tag is what ends up on the person.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagAssignCommand {
    index: DisplayedIndex,
    tag: Tag,
}

impl TagAssignCommand {
    pub const COMMAND_WORD: &'static str = "tagassign";
    pub const MESSAGE_USAGE: &'static str = "tagassign: Assigns an existing tag to the person \
        identified by the index number used in the displayed person list.\n\
        Parameters: INDEX (must be a positive integer) t/TAG\n\
        Example: tagassign 1 t/Physics";

    pub fn new(index: DisplayedIndex, tag: Tag) -> Self {
        Self { index, tag }
    }
}

impl Command for TagAssignCommand {
    fn execute(&self, model: &mut Model) -> Result<CommandResult, CommandError> {
        let target = model
            .filtered_person_at(self.index.zero_based())
            .cloned()
            .ok_or(CommandError::InvalidPersonIndex)?;

        let canonical = model
            .canonical_tag(self.tag.name())
            .cloned()
            .ok_or(CommandError::TagNotFound)?;

        if target.has_tag(&canonical) {
            return Err(CommandError::DuplicateTagAssignment);
        }

        let mut tags = target.tags().clone();
        tags.insert(canonical.clone());
        let edited = target.with_tags(tags);
        model.replace_person(&target, edited.clone());

        Ok(CommandResult::new(format!(
            "Assigned tag {} to {}",
            canonical,
            edited.name()
        )))
    }
}
