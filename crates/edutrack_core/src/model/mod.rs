//! Domain model for contact records.
//!
//! # Responsibility
//! - Define the validated value objects that make up a `Person`.
//! - Own the in-memory contact book and its canonical tag registry.
//!
//! # Invariants
//! - A person's tag set only ever contains tags registered in the book.
//! - Person records are immutable; edits replace the whole record.

pub mod book;
pub mod index;
pub mod person;
pub mod remark;
pub mod tag;
