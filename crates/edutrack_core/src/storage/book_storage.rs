//! Whole-book save/load over the persons and tags tables.
//!
//! # Responsibility
//! - Persist the in-memory contact book between sessions.
//! - Reconstruct a validated book from persisted rows.
//!
//! # Invariants
//! - Save is transactional replace-all; a failed save leaves the previous
//!   book intact on disk.
//! - Every loaded person tag must exist in the loaded tag registry.

use super::{StorageError, StorageResult};
use crate::model::book::ContactBook;
use crate::model::person::{Address, Email, Name, Person, Phone};
use crate::model::remark::Remark;
use crate::model::tag::{Group, Tag};
use rusqlite::{params, Connection, Row};
use std::collections::BTreeSet;

/// Storage contract consumed by the application shell.
pub trait BookStorage {
    fn save_book(&mut self, book: &ContactBook) -> StorageResult<()>;
    fn load_book(&mut self) -> StorageResult<ContactBook>;
}

/// SQLite-backed book storage.
pub struct SqliteBookStorage<'conn> {
    conn: &'conn mut Connection,
}

impl<'conn> SqliteBookStorage<'conn> {
    pub fn new(conn: &'conn mut Connection) -> Self {
        Self { conn }
    }
}

impl BookStorage for SqliteBookStorage<'_> {
    fn save_book(&mut self, book: &ContactBook) -> StorageResult<()> {
        let tx = self.conn.transaction()?;

        tx.execute("DELETE FROM persons;", [])?;
        tx.execute("DELETE FROM tags;", [])?;

        for tag in book.tags() {
            tx.execute("INSERT INTO tags (name) VALUES (?1);", [tag.name()])?;
        }

        for person in book.persons() {
            tx.execute(
                "INSERT INTO persons (name, phone, email, address, tag_names, group_names, remark)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7);",
                params![
                    person.name().as_str(),
                    person.phone().as_str(),
                    person.email().as_str(),
                    person.address().as_str(),
                    serde_json::to_string(person.tags())?,
                    serde_json::to_string(person.groups())?,
                    person.remark().as_str(),
                ],
            )?;
        }

        tx.commit()?;
        Ok(())
    }

    fn load_book(&mut self) -> StorageResult<ContactBook> {
        let mut book = ContactBook::new();

        let mut tag_stmt = self.conn.prepare("SELECT name FROM tags ORDER BY id;")?;
        let mut tag_rows = tag_stmt.query([])?;
        while let Some(row) = tag_rows.next()? {
            let name: String = row.get("name")?;
            let tag = Tag::new(&name).map_err(|err| {
                StorageError::InvalidData(format!("tag `{name}` in tags.name: {err}"))
            })?;
            if !book.add_tag(tag) {
                return Err(StorageError::InvalidData(format!(
                    "duplicate tag `{name}` in tags.name"
                )));
            }
        }

        let mut person_stmt = self.conn.prepare(
            "SELECT name, phone, email, address, tag_names, group_names, remark
             FROM persons ORDER BY id;",
        )?;
        let mut person_rows = person_stmt.query([])?;
        while let Some(row) = person_rows.next()? {
            let person = parse_person_row(&book, row)?;
            book.add_person(person);
        }

        Ok(book)
    }
}

fn parse_person_row(book: &ContactBook, row: &Row<'_>) -> StorageResult<Person> {
    let name_text: String = row.get("name")?;
    let invalid = |detail: String| {
        StorageError::InvalidData(format!("person `{name_text}` in persons: {detail}"))
    };

    let tag_names_json: String = row.get("tag_names")?;
    let tag_names: Vec<String> =
        serde_json::from_str(&tag_names_json).map_err(|err| invalid(err.to_string()))?;
    let mut tags = BTreeSet::new();
    for tag_name in &tag_names {
        // Stored person tags must match a registered tag exactly; the save
        // path only writes canonical casings.
        let canonical = book
            .tags()
            .iter()
            .find(|tag| tag.name() == tag_name)
            .ok_or_else(|| invalid(format!("tag `{tag_name}` is not registered")))?;
        tags.insert(canonical.clone());
    }

    let group_names_json: String = row.get("group_names")?;
    let group_names: Vec<String> =
        serde_json::from_str(&group_names_json).map_err(|err| invalid(err.to_string()))?;
    let mut groups = BTreeSet::new();
    for group_name in &group_names {
        groups.insert(Group::new(group_name).map_err(|err| invalid(err.to_string()))?);
    }

    let name = Name::new(&name_text).map_err(|err| invalid(err.to_string()))?;
    let phone = Phone::new(&row.get::<_, String>("phone")?).map_err(|err| invalid(err.to_string()))?;
    let email = Email::new(&row.get::<_, String>("email")?).map_err(|err| invalid(err.to_string()))?;
    let address =
        Address::new(&row.get::<_, String>("address")?).map_err(|err| invalid(err.to_string()))?;
    let remark = Remark::new(row.get::<_, String>("remark")?);

    Ok(Person::new(name, phone, email, address, tags, groups, remark))
}
