//! Executable command objects.
//!
//! # Responsibility
//! - Define the `Command` contract every parsed command satisfies.
//! - Centralize the fixed error-message taxonomy for execution failures.
//!
//! # Invariants
//! - `execute` either completes its whole mutation or returns an error with
//!   the model untouched.
//! - Error messages are fixed-format strings; callers display them as-is.

use crate::model::book::Model;
use std::error::Error;
use std::fmt::{Display, Formatter};

mod add;
mod clear;
mod delete;
mod edit;
mod exit;
mod find;
mod help;
mod list;
mod remark;
mod tag_assign;
mod tag_create;

pub use add::AddCommand;
pub use clear::ClearCommand;
pub use delete::DeleteCommand;
pub use edit::{EditCommand, EditPersonDescriptor};
pub use exit::ExitCommand;
pub use find::FindCommand;
pub use help::HelpCommand;
pub use list::ListCommand;
pub use remark::RemarkCommand;
pub use tag_assign::TagAssignCommand;
pub use tag_create::TagCreateCommand;

/// Domain-validation failure during command execution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// Index is outside the bounds of the displayed list.
    InvalidPersonIndex,
    /// Tag name does not resolve against the registered tag set.
    TagNotFound,
    /// Target person already holds the resolved canonical tag.
    DuplicateTagAssignment,
    /// An identical person record already exists.
    DuplicatePerson,
    /// A case-insensitive duplicate tag is already registered.
    DuplicateTagRegistration,
}

impl Display for CommandError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidPersonIndex => write!(f, "The person index provided is invalid"),
            Self::TagNotFound => write!(f, "Tag not found"),
            Self::DuplicateTagAssignment => {
                write!(f, "This tag has already been assigned to this person")
            }
            Self::DuplicatePerson => {
                write!(f, "This person already exists in the address book")
            }
            Self::DuplicateTagRegistration => {
                write!(f, "This tag already exists in the address book")
            }
        }
    }
}

impl Error for CommandError {}

/// Outcome of a successfully executed command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    feedback: String,
    show_help: bool,
    exit: bool,
}

impl CommandResult {
    pub fn new(feedback: impl Into<String>) -> Self {
        Self {
            feedback: feedback.into(),
            show_help: false,
            exit: false,
        }
    }

    pub fn with_help(feedback: impl Into<String>) -> Self {
        Self {
            show_help: true,
            ..Self::new(feedback)
        }
    }

    pub fn with_exit(feedback: impl Into<String>) -> Self {
        Self {
            exit: true,
            ..Self::new(feedback)
        }
    }

    /// Human-readable result message.
    pub fn feedback(&self) -> &str {
        &self.feedback
    }

    pub fn is_show_help(&self) -> bool {
        self.show_help
    }

    pub fn is_exit(&self) -> bool {
        self.exit
    }
}

/// One parsed, executable unit of work against the session model.
pub trait Command: std::fmt::Debug {
    /// Performs the command's single mutation (or query).
    ///
    /// # Errors
    /// Returns a `CommandError` with the model unmodified when any
    /// validation step fails.
    fn execute(&self, model: &mut Model) -> Result<CommandResult, CommandError>;
}
