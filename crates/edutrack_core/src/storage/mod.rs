//! SQLite persistence collaborator for the contact book.
//!
//! # Responsibility
//! - Open and configure database connections.
//! - Apply schema migrations in deterministic order.
//! - Save and load whole contact books.
//!
//! # Invariants
//! - Schema version is tracked via `PRAGMA user_version`.
//! - No application data is read or written before migrations succeed.
//! - Loaded values pass through the domain constructors; invalid persisted
//!   rows are rejected, not masked.

use std::error::Error;
use std::fmt::{Display, Formatter};

mod book_storage;
pub mod migrations;
mod open;

pub use book_storage::{BookStorage, SqliteBookStorage};
pub use open::{open_db, open_db_in_memory};
pub use rusqlite::Connection;

pub type StorageResult<T> = Result<T, StorageError>;

/// Persistence-layer failure.
#[derive(Debug)]
pub enum StorageError {
    Sqlite(rusqlite::Error),
    UnsupportedSchemaVersion {
        db_version: u32,
        latest_supported: u32,
    },
    /// Persisted row fails domain validation or referential checks.
    InvalidData(String),
    Serde(serde_json::Error),
}

impl Display for StorageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "{err}"),
            Self::UnsupportedSchemaVersion {
                db_version,
                latest_supported,
            } => write!(
                f,
                "database schema version {db_version} is newer than supported {latest_supported}"
            ),
            Self::InvalidData(message) => write!(f, "invalid persisted data: {message}"),
            Self::Serde(err) => write!(f, "{err}"),
        }
    }
}

impl Error for StorageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
            Self::Serde(err) => Some(err),
            _ => None,
        }
    }
}

impl From<rusqlite::Error> for StorageError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serde(value)
    }
}
