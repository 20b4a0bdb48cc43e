//! In-memory contact book and session model.
//!
//! # Responsibility
//! - Own the person list and the canonical tag registry (single source of
//!   truth for a session).
//! - Expose the filtered-list view that index-based commands resolve
//!   against.
//!
//! # Invariants
//! - One registered tag per logical name; registration rejects
//!   case-insensitive duplicates.
//! - `canonical_tag` always returns the registered casing, never input
//!   casing.
//! - Mutations happen one command at a time; there is no concurrent access.

use crate::model::person::Person;
use crate::model::tag::Tag;

/// Filter applied to the displayed person list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PersonFilter {
    /// Show every person.
    #[default]
    All,
    /// Show persons whose name contains any keyword as a full word,
    /// case-insensitively.
    NameMatchesKeywords(Vec<String>),
}

impl PersonFilter {
    fn matches(&self, person: &Person) -> bool {
        match self {
            Self::All => true,
            Self::NameMatchesKeywords(keywords) => person
                .name()
                .as_str()
                .split_whitespace()
                .any(|word| keywords.iter().any(|kw| word.eq_ignore_ascii_case(kw))),
        }
    }
}

/// Persons plus the canonical tag registry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactBook {
    persons: Vec<Person>,
    tags: Vec<Tag>,
}

impl ContactBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn persons(&self) -> &[Person] {
        &self.persons
    }

    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    /// Whether an identical record (value equality) is already present.
    pub fn has_person(&self, person: &Person) -> bool {
        self.persons.contains(person)
    }

    pub fn add_person(&mut self, person: Person) {
        self.persons.push(person);
    }

    /// Replaces `target` with `edited` in place. Returns `false` when
    /// `target` is not in the book.
    pub fn replace_person(&mut self, target: &Person, edited: Person) -> bool {
        match self.persons.iter().position(|person| person == target) {
            Some(position) => {
                self.persons[position] = edited;
                true
            }
            None => false,
        }
    }

    /// Removes `target` from the book. Returns `false` when absent.
    pub fn remove_person(&mut self, target: &Person) -> bool {
        match self.persons.iter().position(|person| person == target) {
            Some(position) => {
                self.persons.remove(position);
                true
            }
            None => false,
        }
    }

    /// Whether a tag with this name is registered, case-insensitively.
    pub fn has_tag(&self, name: &str) -> bool {
        self.canonical_tag(name).is_some()
    }

    /// Resolves a possibly differently-cased name to the registered tag.
    pub fn canonical_tag(&self, name: &str) -> Option<&Tag> {
        self.tags.iter().find(|tag| tag.matches_ignore_case(name))
    }

    /// Registers a new canonical tag. Returns `false` when a
    /// case-insensitive duplicate is already registered.
    pub fn add_tag(&mut self, tag: Tag) -> bool {
        if self.has_tag(tag.name()) {
            return false;
        }
        self.tags.push(tag);
        true
    }
}

/// Session facade over one contact book plus the current list filter.
///
/// Commands execute against this type: they resolve display indices via
/// `filtered_persons`, then mutate the underlying book.
#[derive(Debug, Clone, Default)]
pub struct Model {
    book: ContactBook,
    filter: PersonFilter,
}

impl Model {
    pub fn new(book: ContactBook) -> Self {
        Self {
            book,
            filter: PersonFilter::All,
        }
    }

    pub fn book(&self) -> &ContactBook {
        &self.book
    }

    /// Persons visible under the current filter, in book order.
    pub fn filtered_persons(&self) -> Vec<&Person> {
        self.book
            .persons()
            .iter()
            .filter(|person| self.filter.matches(person))
            .collect()
    }

    /// Person at a 0-based position of the filtered list.
    pub fn filtered_person_at(&self, zero_based: usize) -> Option<&Person> {
        self.filtered_persons().get(zero_based).copied()
    }

    pub fn update_filter(&mut self, filter: PersonFilter) {
        self.filter = filter;
    }

    pub fn has_person(&self, person: &Person) -> bool {
        self.book.has_person(person)
    }

    pub fn add_person(&mut self, person: Person) {
        self.book.add_person(person);
    }

    pub fn replace_person(&mut self, target: &Person, edited: Person) -> bool {
        self.book.replace_person(target, edited)
    }

    pub fn remove_person(&mut self, target: &Person) -> bool {
        self.book.remove_person(target)
    }

    pub fn has_tag(&self, name: &str) -> bool {
        self.book.has_tag(name)
    }

    pub fn canonical_tag(&self, name: &str) -> Option<&Tag> {
        self.book.canonical_tag(name)
    }

    pub fn add_tag(&mut self, tag: Tag) -> bool {
        self.book.add_tag(tag)
    }

    /// Resets the book to empty and clears the filter.
    pub fn clear(&mut self) {
        self.book = ContactBook::new();
        self.filter = PersonFilter::All;
    }
}

#[cfg(test)]
mod tests {
    use super::{ContactBook, Model, PersonFilter};
    use crate::model::person::{Address, Email, Name, Person, Phone};
    use crate::model::remark::Remark;
    use crate::model::tag::Tag;
    use std::collections::BTreeSet;

    fn person(name: &str) -> Person {
        Person::new(
            Name::new(name).unwrap(),
            Phone::new("94351253").unwrap(),
            Email::new("contact@example.com").unwrap(),
            Address::new("10 Downing Street").unwrap(),
            BTreeSet::new(),
            BTreeSet::new(),
            Remark::empty(),
        )
    }

    #[test]
    fn canonical_tag_keeps_registered_casing() {
        let mut book = ContactBook::new();
        assert!(book.add_tag(Tag::new("example").unwrap()));

        let resolved = book.canonical_tag("exAmple").unwrap();
        assert_eq!(resolved.name(), "example");
    }

    #[test]
    fn add_tag_rejects_case_insensitive_duplicates() {
        let mut book = ContactBook::new();
        assert!(book.add_tag(Tag::new("Physics").unwrap()));
        assert!(!book.add_tag(Tag::new("physics").unwrap()));
        assert_eq!(book.tags().len(), 1);
    }

    #[test]
    fn replace_person_targets_by_value_equality() {
        let mut book = ContactBook::new();
        book.add_person(person("Alice"));
        book.add_person(person("Benson"));

        let target = person("Alice");
        let edited = person("Alicia");
        assert!(book.replace_person(&target, edited.clone()));
        assert_eq!(book.persons()[0], edited);
        assert!(!book.replace_person(&target, person("Alice")));
    }

    #[test]
    fn filter_restricts_displayed_list_by_name_words() {
        let mut model = Model::default();
        model.add_person(person("Alice Pauline"));
        model.add_person(person("Benson Meier"));
        model.add_person(person("Alice Tan"));

        model.update_filter(PersonFilter::NameMatchesKeywords(vec!["alice".to_string()]));
        let shown = model.filtered_persons();
        assert_eq!(shown.len(), 2);
        assert_eq!(shown[0].name().as_str(), "Alice Pauline");

        model.update_filter(PersonFilter::All);
        assert_eq!(model.filtered_persons().len(), 3);
    }

    #[test]
    fn filter_matches_whole_words_only() {
        let mut model = Model::default();
        model.add_person(person("Alice Pauline"));

        model.update_filter(PersonFilter::NameMatchesKeywords(vec!["Ali".to_string()]));
        assert!(model.filtered_persons().is_empty());
    }
}
