//! Partial person edit command.

use super::{Command, CommandError, CommandResult};
use crate::model::book::Model;
use crate::model::index::DisplayedIndex;
use crate::model::person::{Address, Email, Name, Person, Phone};
use crate::model::remark::Remark;
use crate::model::tag::{Group, Tag};
use std::collections::BTreeSet;

/// Fields to change on the target person; `None` keeps the current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditPersonDescriptor {
    pub name: Option<Name>,
    pub phone: Option<Phone>,
    pub email: Option<Email>,
    pub address: Option<Address>,
    /// `Some(empty)` clears the tag set.
    pub tags: Option<Vec<Tag>>,
    /// `Some(empty)` clears the group set.
    pub groups: Option<BTreeSet<Group>>,
    pub remark: Option<Remark>,
}

impl EditPersonDescriptor {
    pub fn any_field_edited(&self) -> bool {
        self.name.is_some()
            || self.phone.is_some()
            || self.email.is_some()
            || self.address.is_some()
            || self.tags.is_some()
            || self.groups.is_some()
            || self.remark.is_some()
    }
}

/// Rebuilds the person at a displayed index with the descriptor's fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditCommand {
    index: DisplayedIndex,
    descriptor: EditPersonDescriptor,
}

impl EditCommand {
    pub const COMMAND_WORD: &'static str = "edit";
    pub const MESSAGE_USAGE: &'static str = "edit: Edits the person identified by the index \
        number used in the displayed person list. Existing values will be overwritten.\n\
        Parameters: INDEX (must be a positive integer) [n/NAME] [p/PHONE] [e/EMAIL] [a/ADDRESS] \
        [t/TAG]... [g/GROUP]... [r/REMARK]\n\
        Example: edit 1 p/91234567 e/johndoe@example.com";

    pub fn new(index: DisplayedIndex, descriptor: EditPersonDescriptor) -> Self {
        Self { index, descriptor }
    }
}

impl Command for EditCommand {
    fn execute(&self, model: &mut Model) -> Result<CommandResult, CommandError> {
        let target = model
            .filtered_person_at(self.index.zero_based())
            .cloned()
            .ok_or(CommandError::InvalidPersonIndex)?;

        let tags = match &self.descriptor.tags {
            Some(edited_tags) => {
                let mut resolved = BTreeSet::new();
                for tag in edited_tags {
                    let canonical = model
                        .canonical_tag(tag.name())
                        .cloned()
                        .ok_or(CommandError::TagNotFound)?;
                    resolved.insert(canonical);
                }
                resolved
            }
            None => target.tags().clone(),
        };

        let edited = Person::new(
            self.descriptor.name.clone().unwrap_or_else(|| target.name().clone()),
            self.descriptor.phone.clone().unwrap_or_else(|| target.phone().clone()),
            self.descriptor.email.clone().unwrap_or_else(|| target.email().clone()),
            self.descriptor
                .address
                .clone()
                .unwrap_or_else(|| target.address().clone()),
            tags,
            self.descriptor
                .groups
                .clone()
                .unwrap_or_else(|| target.groups().clone()),
            self.descriptor
                .remark
                .clone()
                .unwrap_or_else(|| target.remark().clone()),
        );

        if edited != target && model.has_person(&edited) {
            return Err(CommandError::DuplicatePerson);
        }

        model.replace_person(&target, edited.clone());
        Ok(CommandResult::new(format!(
            "Edited Person: {}",
            edited.summary()
        )))
    }
}
