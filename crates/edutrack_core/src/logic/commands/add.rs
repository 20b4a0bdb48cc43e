//! Person creation command.

use super::{Command, CommandError, CommandResult};
use crate::model::book::Model;
use crate::model::person::{Address, Email, Name, Person, Phone};
use crate::model::remark::Remark;
use crate::model::tag::{Group, Tag};
use std::collections::BTreeSet;

/// Adds a new person built from validated fields.
///
/// Tags are held as typed by the user; execution resolves each against the
/// registered set so the stored person only carries canonical tags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddCommand {
    name: Name,
    phone: Phone,
    email: Email,
    address: Address,
    tags: Vec<Tag>,
    groups: BTreeSet<Group>,
    remark: Remark,
}

impl AddCommand {
    pub const COMMAND_WORD: &'static str = "add";
    pub const MESSAGE_USAGE: &'static str = "add: Adds a person to the address book.\n\
        Parameters: n/NAME p/PHONE e/EMAIL a/ADDRESS [t/TAG]... [g/GROUP]... [r/REMARK]\n\
        Example: add n/John Doe p/98765432 e/johnd@example.com a/311, Clementi Ave 2 t/friends";

    pub fn new(
        name: Name,
        phone: Phone,
        email: Email,
        address: Address,
        tags: Vec<Tag>,
        groups: BTreeSet<Group>,
        remark: Remark,
    ) -> Self {
        Self {
            name,
            phone,
            email,
            address,
            tags,
            groups,
            remark,
        }
    }
}

impl Command for AddCommand {
    fn execute(&self, model: &mut Model) -> Result<CommandResult, CommandError> {
        let mut tags = BTreeSet::new();
        for tag in &self.tags {
            let canonical = model
                .canonical_tag(tag.name())
                .cloned()
                .ok_or(CommandError::TagNotFound)?;
            tags.insert(canonical);
        }

        let person = Person::new(
            self.name.clone(),
            self.phone.clone(),
            self.email.clone(),
            self.address.clone(),
            tags,
            self.groups.clone(),
            self.remark.clone(),
        );

        if model.has_person(&person) {
            return Err(CommandError::DuplicatePerson);
        }

        let message = format!("New person added: {}", person.summary());
        model.add_person(person);
        Ok(CommandResult::new(message))
    }
}
