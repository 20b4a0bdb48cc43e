//! Name-keyword filter command.

use super::{Command, CommandError, CommandResult};
use crate::model::book::{Model, PersonFilter};

/// Filters the displayed list to persons whose name matches any keyword.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FindCommand {
    keywords: Vec<String>,
}

impl FindCommand {
    pub const COMMAND_WORD: &'static str = "find";
    pub const MESSAGE_USAGE: &'static str = "find: Finds all persons whose names contain any of \
        the given keywords (case-insensitive) and displays them as a list with index numbers.\n\
        Parameters: KEYWORD [MORE_KEYWORDS]...\n\
        Example: find alice bob charlie";

    pub fn new(keywords: Vec<String>) -> Self {
        Self { keywords }
    }
}

impl Command for FindCommand {
    fn execute(&self, model: &mut Model) -> Result<CommandResult, CommandError> {
        model.update_filter(PersonFilter::NameMatchesKeywords(self.keywords.clone()));
        Ok(CommandResult::new(format!(
            "{} persons listed!",
            model.filtered_persons().len()
        )))
    }
}
