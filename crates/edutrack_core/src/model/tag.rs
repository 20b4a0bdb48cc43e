//! Tag and group value objects.
//!
//! # Responsibility
//! - Validate tag/group names at construction.
//! - Provide the case-insensitive matching used for canonical tag lookup.
//!
//! # Invariants
//! - Tag names are trimmed and purely alphanumeric, so two registered tags
//!   can only collide case-insensitively, never by whitespace variants.
//! - Equality stays case-sensitive: the registered casing is the canonical
//!   identity stored on persons.

use crate::model::person::FieldError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::fmt::{Display, Formatter};

static TAG_NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9]+$").expect("valid tag name regex"));
static GROUP_NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9][A-Za-z0-9 ]*$").expect("valid group name regex"));

/// Canonical tag attached to persons.
///
/// The book registers one canonical casing per logical tag; lookups are
/// case-insensitive but always resolve to the registered value.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Tag {
    name: String,
}

impl Tag {
    /// Validates and wraps a tag name.
    ///
    /// Input is trimmed first; the remainder must be non-empty and
    /// alphanumeric.
    pub fn new(name: &str) -> Result<Self, FieldError> {
        let trimmed = name.trim();
        if !TAG_NAME_RE.is_match(trimmed) {
            return Err(FieldError::InvalidTag(name.to_string()));
        }
        Ok(Self {
            name: trimmed.to_string(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Case-insensitive name comparison used for canonical resolution.
    pub fn matches_ignore_case(&self, other: &str) -> bool {
        self.name.eq_ignore_ascii_case(other.trim())
    }
}

impl Display for Tag {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Group membership label for a person.
///
/// Unlike tags, groups have no canonical registry; each person carries its
/// own validated group names.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Group {
    name: String,
}

impl Group {
    /// Validates and wraps a group name (alphanumeric, inner spaces allowed).
    pub fn new(name: &str) -> Result<Self, FieldError> {
        let trimmed = name.trim();
        if !GROUP_NAME_RE.is_match(trimmed) {
            return Err(FieldError::InvalidGroup(name.to_string()));
        }
        Ok(Self {
            name: trimmed.to_string(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Display for Group {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::{Group, Tag};

    #[test]
    fn tag_trims_and_accepts_alphanumeric_names() {
        let tag = Tag::new("  Physics2026 ").unwrap();
        assert_eq!(tag.name(), "Physics2026");
    }

    #[test]
    fn tag_rejects_blank_and_non_alphanumeric_names() {
        assert!(Tag::new("").is_err());
        assert!(Tag::new("   ").is_err());
        assert!(Tag::new("two words").is_err());
        assert!(Tag::new("hy-phen").is_err());
    }

    #[test]
    fn tag_matching_is_case_insensitive_but_identity_is_not() {
        let canonical = Tag::new("example").unwrap();
        assert!(canonical.matches_ignore_case("exAmple"));
        assert!(canonical.matches_ignore_case(" EXAMPLE "));
        assert_ne!(canonical, Tag::new("exAmple").unwrap());
    }

    #[test]
    fn group_allows_inner_spaces_only() {
        assert_eq!(Group::new("Study Group 3").unwrap().name(), "Study Group 3");
        assert!(Group::new(" leading kept after trim ").is_ok());
        assert!(Group::new("").is_err());
    }
}
