//! Person record and its validated fields.
//!
//! # Responsibility
//! - Validate contact fields at construction time.
//! - Define the immutable `Person` value object shared by commands.
//!
//! # Invariants
//! - Every constructed field satisfies its constraint; invalid input never
//!   enters the model.
//! - `Person` identity is value-equality of all fields.
//! - Edits produce a new record via the `with_*` builders.

use crate::model::remark::Remark;
use crate::model::tag::{Group, Tag};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

static NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9][A-Za-z0-9 ]*$").expect("valid name regex"));
static PHONE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{3,}$").expect("valid phone regex"));
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[A-Za-z0-9](?:[A-Za-z0-9+_.\-]*[A-Za-z0-9])?@(?:[A-Za-z0-9](?:[A-Za-z0-9\-]*[A-Za-z0-9])?\.)*[A-Za-z0-9](?:[A-Za-z0-9\-]*[A-Za-z0-9])?$",
    )
    .expect("valid email regex")
});

/// Validation error for person fields.
///
/// Each variant carries the rejected raw input; `Display` yields the fixed
/// constraint message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    InvalidName(String),
    InvalidPhone(String),
    InvalidEmail(String),
    InvalidAddress(String),
    InvalidTag(String),
    InvalidGroup(String),
}

impl Display for FieldError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidName(_) => write!(
                f,
                "Names should only contain alphanumeric characters and spaces, and it should not be blank"
            ),
            Self::InvalidPhone(_) => write!(
                f,
                "Phone numbers should only contain numbers, and it should be at least 3 digits long"
            ),
            Self::InvalidEmail(_) => write!(
                f,
                "Emails should be of the format local-part@domain and the domain's final label should be at least 2 characters long"
            ),
            Self::InvalidAddress(_) => write!(
                f,
                "Addresses can take any values, and it should not be blank"
            ),
            Self::InvalidTag(_) => write!(f, "Tag names should be alphanumeric"),
            Self::InvalidGroup(_) => write!(
                f,
                "Group names should be alphanumeric and may contain spaces"
            ),
        }
    }
}

impl Error for FieldError {}

/// Person display name.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Name(String);

impl Name {
    pub fn new(value: &str) -> Result<Self, FieldError> {
        if !NAME_RE.is_match(value) {
            return Err(FieldError::InvalidName(value.to_string()));
        }
        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for Name {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Phone number, digits only, at least 3 digits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Phone(String);

impl Phone {
    pub fn new(value: &str) -> Result<Self, FieldError> {
        if !PHONE_RE.is_match(value) {
            return Err(FieldError::InvalidPhone(value.to_string()));
        }
        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for Phone {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Email address of the shape `local-part@domain`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Email(String);

impl Email {
    pub fn new(value: &str) -> Result<Self, FieldError> {
        if !EMAIL_RE.is_match(value) || !final_domain_label_ok(value) {
            return Err(FieldError::InvalidEmail(value.to_string()));
        }
        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// The regex accepts single-character final labels; the length floor is
// simpler to check outside the pattern.
fn final_domain_label_ok(value: &str) -> bool {
    value
        .rsplit_once('@')
        .map(|(_, domain)| domain.rsplit('.').next().is_some_and(|label| label.len() >= 2))
        .unwrap_or(false)
}

impl Display for Email {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Postal address; any non-blank text not starting with whitespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Address(String);

impl Address {
    pub fn new(value: &str) -> Result<Self, FieldError> {
        if value.is_empty() || value.starts_with(char::is_whitespace) {
            return Err(FieldError::InvalidAddress(value.to_string()));
        }
        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for Address {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Immutable contact record.
///
/// All fields are validated value objects. There is no surrogate key;
/// two persons are the same record exactly when every field matches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    name: Name,
    phone: Phone,
    email: Email,
    address: Address,
    tags: BTreeSet<Tag>,
    groups: BTreeSet<Group>,
    remark: Remark,
}

impl Person {
    pub fn new(
        name: Name,
        phone: Phone,
        email: Email,
        address: Address,
        tags: BTreeSet<Tag>,
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

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phone(&self) -> &Phone {
        &self.phone
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn address(&self) -> &Address {
        &self.address
    }

    pub fn tags(&self) -> &BTreeSet<Tag> {
        &self.tags
    }

    pub fn groups(&self) -> &BTreeSet<Group> {
        &self.groups
    }

    pub fn remark(&self) -> &Remark {
        &self.remark
    }

    pub fn has_tag(&self, tag: &Tag) -> bool {
        self.tags.contains(tag)
    }

    /// Returns a copy of this person with the remark replaced.
    pub fn with_remark(&self, remark: Remark) -> Self {
        let mut edited = self.clone();
        edited.remark = remark;
        edited
    }

    /// Returns a copy of this person with the tag set replaced.
    pub fn with_tags(&self, tags: BTreeSet<Tag>) -> Self {
        let mut edited = self.clone();
        edited.tags = tags;
        edited
    }

    /// One-line summary used in command feedback messages.
    pub fn summary(&self) -> String {
        let tags = self
            .tags
            .iter()
            .map(|tag| format!("[{tag}]"))
            .collect::<Vec<_>>()
            .join("");
        format!(
            "{}; Phone: {}; Email: {}; Address: {}; Remark: {}; Tags: {}",
            self.name, self.phone, self.email, self.address, self.remark, tags
        )
    }
}
