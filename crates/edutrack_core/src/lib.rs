//! Core domain logic for EduTrack, a command-driven contact/student tracker.
//! This crate is the single source of truth for business invariants.

pub mod logging;
pub mod logic;
pub mod model;
pub mod storage;

pub use logging::{default_log_level, init_logging, logging_status};
pub use logic::commands::{Command, CommandError, CommandResult};
pub use logic::parser::{parse_command, ParseError};
pub use logic::{run_command, LogicError};
pub use model::book::{ContactBook, Model, PersonFilter};
pub use model::index::DisplayedIndex;
pub use model::person::{Address, Email, FieldError, Name, Person, Phone};
pub use model::remark::Remark;
pub use model::tag::{Group, Tag};
pub use storage::{
    open_db, open_db_in_memory, BookStorage, SqliteBookStorage, StorageError, StorageResult,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
