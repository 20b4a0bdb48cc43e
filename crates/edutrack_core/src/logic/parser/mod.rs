//! Command-text parsing.
//!
//! # Responsibility
//! - Split raw input into a command word plus arguments and route to the
//!   per-command parsers.
//! - Convert tokenized arguments into validated domain values and
//!   executable command objects.
//!
//! # Invariants
//! - Parsing never touches the model; all domain checks that need model
//!   state happen at execution time.
//! - Every parse failure carries a fixed user-facing message, with a usage
//!   hint for format errors.

use crate::logic::commands::{
    AddCommand, ClearCommand, Command, DeleteCommand, EditCommand, EditPersonDescriptor,
    ExitCommand, FindCommand, HelpCommand, ListCommand, RemarkCommand, TagAssignCommand,
    TagCreateCommand,
};
use crate::model::index::DisplayedIndex;
use crate::model::person::{Address, Email, FieldError, Name, Phone};
use crate::model::remark::Remark;
use crate::model::tag::{Group, Tag};
use std::collections::BTreeSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod tokenizer;

use tokenizer::{
    tokenize, ArgumentMultimap, Prefix, PREFIX_ADDRESS, PREFIX_EMAIL, PREFIX_GROUP, PREFIX_NAME,
    PREFIX_PHONE, PREFIX_REMARK, PREFIX_TAG,
};

/// Parse-stage failure with a fixed user-facing message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Malformed arguments; carries the usage hint of the intended command.
    InvalidCommandFormat { usage: &'static str },
    /// Command word is not recognized.
    UnknownCommand,
    /// Edit was requested without any field to change.
    NothingToEdit,
    /// A single-valued prefix appeared more than once.
    DuplicatePrefix(Prefix),
    /// A value failed its field constraint.
    InvalidField(FieldError),
}

impl Display for ParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidCommandFormat { usage } => {
                write!(f, "Invalid command format! \n{usage}")
            }
            Self::UnknownCommand => write!(f, "Unknown command"),
            Self::NothingToEdit => write!(f, "At least one field to edit must be provided."),
            Self::DuplicatePrefix(prefix) => write!(
                f,
                "Multiple values specified for the following single-valued field(s): {prefix}"
            ),
            Self::InvalidField(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ParseError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidField(err) => Some(err),
            _ => None,
        }
    }
}

impl From<FieldError> for ParseError {
    fn from(value: FieldError) -> Self {
        Self::InvalidField(value)
    }
}

/// Parses one raw input line into an executable command.
pub fn parse_command(input: &str) -> Result<Box<dyn Command>, ParseError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ParseError::UnknownCommand);
    }
    let (word, args) = match trimmed.split_once(char::is_whitespace) {
        Some((word, args)) => (word, args),
        None => (trimmed, ""),
    };

    match word {
        AddCommand::COMMAND_WORD => Ok(Box::new(parse_add(args)?)),
        EditCommand::COMMAND_WORD => Ok(Box::new(parse_edit(args)?)),
        DeleteCommand::COMMAND_WORD => Ok(Box::new(parse_delete(args)?)),
        RemarkCommand::COMMAND_WORD => Ok(Box::new(parse_remark(args)?)),
        TagAssignCommand::COMMAND_WORD => Ok(Box::new(parse_tag_assign(args)?)),
        TagCreateCommand::COMMAND_WORD => Ok(Box::new(parse_tag_create(args)?)),
        FindCommand::COMMAND_WORD => Ok(Box::new(parse_find(args)?)),
        ListCommand::COMMAND_WORD => Ok(Box::new(ListCommand)),
        ClearCommand::COMMAND_WORD => Ok(Box::new(ClearCommand)),
        HelpCommand::COMMAND_WORD => Ok(Box::new(HelpCommand)),
        ExitCommand::COMMAND_WORD => Ok(Box::new(ExitCommand)),
        _ => Err(ParseError::UnknownCommand),
    }
}

/// Parses a 1-based display index from a preamble.
///
/// Only plain unsigned decimal digits are accepted; signs, zero and
/// surrounding garbage are rejected.
fn parse_index(preamble: &str) -> Option<DisplayedIndex> {
    let trimmed = preamble.trim();
    if trimmed.is_empty() || !trimmed.bytes().all(|byte| byte.is_ascii_digit()) {
        return None;
    }
    let value = trimmed.parse::<usize>().ok()?;
    DisplayedIndex::from_one_based(value)
}

fn verify_singular(map: &ArgumentMultimap, singular: &[Prefix]) -> Result<(), ParseError> {
    match map.first_duplicated(singular) {
        Some(prefix) => Err(ParseError::DuplicatePrefix(prefix)),
        None => Ok(()),
    }
}

fn parse_add(args: &str) -> Result<AddCommand, ParseError> {
    let map = tokenize(
        args,
        &[
            PREFIX_NAME,
            PREFIX_PHONE,
            PREFIX_EMAIL,
            PREFIX_ADDRESS,
            PREFIX_TAG,
            PREFIX_GROUP,
            PREFIX_REMARK,
        ],
    );

    let invalid_format = || ParseError::InvalidCommandFormat {
        usage: AddCommand::MESSAGE_USAGE,
    };
    if !map.preamble().is_empty() {
        return Err(invalid_format());
    }
    verify_singular(
        &map,
        &[
            PREFIX_NAME,
            PREFIX_PHONE,
            PREFIX_EMAIL,
            PREFIX_ADDRESS,
            PREFIX_REMARK,
        ],
    )?;

    let name = Name::new(map.value_of(PREFIX_NAME).ok_or_else(invalid_format)?)?;
    let phone = Phone::new(map.value_of(PREFIX_PHONE).ok_or_else(invalid_format)?)?;
    let email = Email::new(map.value_of(PREFIX_EMAIL).ok_or_else(invalid_format)?)?;
    let address = Address::new(map.value_of(PREFIX_ADDRESS).ok_or_else(invalid_format)?)?;
    let tags = map
        .all_values(PREFIX_TAG)
        .into_iter()
        .map(Tag::new)
        .collect::<Result<Vec<_>, _>>()?;
    let groups = map
        .all_values(PREFIX_GROUP)
        .into_iter()
        .map(Group::new)
        .collect::<Result<BTreeSet<_>, _>>()?;
    let remark = map
        .value_of(PREFIX_REMARK)
        .map(Remark::new)
        .unwrap_or_default();

    Ok(AddCommand::new(
        name, phone, email, address, tags, groups, remark,
    ))
}

fn parse_edit(args: &str) -> Result<EditCommand, ParseError> {
    let map = tokenize(
        args,
        &[
            PREFIX_NAME,
            PREFIX_PHONE,
            PREFIX_EMAIL,
            PREFIX_ADDRESS,
            PREFIX_TAG,
            PREFIX_GROUP,
            PREFIX_REMARK,
        ],
    );

    let index = parse_index(map.preamble()).ok_or(ParseError::InvalidCommandFormat {
        usage: EditCommand::MESSAGE_USAGE,
    })?;
    verify_singular(
        &map,
        &[
            PREFIX_NAME,
            PREFIX_PHONE,
            PREFIX_EMAIL,
            PREFIX_ADDRESS,
            PREFIX_REMARK,
        ],
    )?;

    let descriptor = EditPersonDescriptor {
        name: map.value_of(PREFIX_NAME).map(Name::new).transpose()?,
        phone: map.value_of(PREFIX_PHONE).map(Phone::new).transpose()?,
        email: map.value_of(PREFIX_EMAIL).map(Email::new).transpose()?,
        address: map.value_of(PREFIX_ADDRESS).map(Address::new).transpose()?,
        tags: parse_tags_for_edit(map.all_values(PREFIX_TAG))?,
        groups: parse_groups_for_edit(map.all_values(PREFIX_GROUP))?,
        remark: map.value_of(PREFIX_REMARK).map(Remark::new),
    };

    if !descriptor.any_field_edited() {
        return Err(ParseError::NothingToEdit);
    }
    Ok(EditCommand::new(index, descriptor))
}

// A single empty `t/` clears the tag set; any other empty value is invalid.
fn parse_tags_for_edit(values: Vec<&str>) -> Result<Option<Vec<Tag>>, ParseError> {
    if values.is_empty() {
        return Ok(None);
    }
    if values.len() == 1 && values[0].is_empty() {
        return Ok(Some(Vec::new()));
    }
    let tags = values
        .into_iter()
        .map(Tag::new)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Some(tags))
}

fn parse_groups_for_edit(values: Vec<&str>) -> Result<Option<BTreeSet<Group>>, ParseError> {
    if values.is_empty() {
        return Ok(None);
    }
    if values.len() == 1 && values[0].is_empty() {
        return Ok(Some(BTreeSet::new()));
    }
    let groups = values
        .into_iter()
        .map(Group::new)
        .collect::<Result<BTreeSet<_>, _>>()?;
    Ok(Some(groups))
}

fn parse_delete(args: &str) -> Result<DeleteCommand, ParseError> {
    let index = parse_index(args).ok_or(ParseError::InvalidCommandFormat {
        usage: DeleteCommand::MESSAGE_USAGE,
    })?;
    Ok(DeleteCommand::new(index))
}

fn parse_remark(args: &str) -> Result<RemarkCommand, ParseError> {
    let map = tokenize(args, &[PREFIX_REMARK]);

    let index = parse_index(map.preamble()).ok_or(ParseError::InvalidCommandFormat {
        usage: RemarkCommand::MESSAGE_USAGE,
    })?;

    // Absent r/ defaults to the empty remark, which removes any existing one.
    let remark = map
        .value_of(PREFIX_REMARK)
        .map(Remark::new)
        .unwrap_or_default();
    Ok(RemarkCommand::new(index, remark))
}

fn parse_tag_assign(args: &str) -> Result<TagAssignCommand, ParseError> {
    let map = tokenize(args, &[PREFIX_TAG]);

    let invalid_format = || ParseError::InvalidCommandFormat {
        usage: TagAssignCommand::MESSAGE_USAGE,
    };
    let index = parse_index(map.preamble()).ok_or_else(invalid_format)?;
    verify_singular(&map, &[PREFIX_TAG])?;
    let tag = Tag::new(map.value_of(PREFIX_TAG).ok_or_else(invalid_format)?)?;
    Ok(TagAssignCommand::new(index, tag))
}

fn parse_tag_create(args: &str) -> Result<TagCreateCommand, ParseError> {
    let map = tokenize(args, &[PREFIX_TAG]);

    let invalid_format = || ParseError::InvalidCommandFormat {
        usage: TagCreateCommand::MESSAGE_USAGE,
    };
    if !map.preamble().is_empty() {
        return Err(invalid_format());
    }
    verify_singular(&map, &[PREFIX_TAG])?;
    let tag = Tag::new(map.value_of(PREFIX_TAG).ok_or_else(invalid_format)?)?;
    Ok(TagCreateCommand::new(tag))
}

fn parse_find(args: &str) -> Result<FindCommand, ParseError> {
    let keywords: Vec<String> = args.split_whitespace().map(str::to_string).collect();
    if keywords.is_empty() {
        return Err(ParseError::InvalidCommandFormat {
            usage: FindCommand::MESSAGE_USAGE,
        });
    }
    Ok(FindCommand::new(keywords))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index(one_based: usize) -> DisplayedIndex {
        DisplayedIndex::from_one_based(one_based).unwrap()
    }

    #[test]
    fn parse_index_accepts_plain_positive_integers_only() {
        assert_eq!(parse_index(" 1 ").unwrap().one_based(), 1);
        assert_eq!(parse_index("42").unwrap().one_based(), 42);
        assert!(parse_index("0").is_none());
        assert!(parse_index("+1").is_none());
        assert!(parse_index("-5").is_none());
        assert!(parse_index("abc").is_none());
        assert!(parse_index("1 extra").is_none());
        assert!(parse_index("").is_none());
    }

    #[test]
    fn remark_with_value_builds_command() {
        let parsed = parse_remark("1 r/Likes tea").unwrap();
        assert_eq!(parsed, RemarkCommand::new(index(1), Remark::new("Likes tea")));
    }

    #[test]
    fn remark_without_prefix_defaults_to_empty_remark() {
        let parsed = parse_remark("2").unwrap();
        assert_eq!(parsed, RemarkCommand::new(index(2), Remark::empty()));

        let explicit_empty = parse_remark("2 r/").unwrap();
        assert_eq!(explicit_empty, RemarkCommand::new(index(2), Remark::empty()));
    }

    #[test]
    fn remark_with_bad_index_reports_usage() {
        let err = parse_remark("r/Likes tea").unwrap_err();
        assert_eq!(
            err,
            ParseError::InvalidCommandFormat {
                usage: RemarkCommand::MESSAGE_USAGE
            }
        );
        assert!(err.to_string().starts_with("Invalid command format! \n"));
        assert!(err.to_string().contains("remark 1 r/Likes tea"));
    }

    #[test]
    fn tag_assign_requires_index_and_tag() {
        let parsed = parse_tag_assign("1 t/Physics").unwrap();
        assert_eq!(
            parsed,
            TagAssignCommand::new(index(1), Tag::new("Physics").unwrap())
        );

        assert!(matches!(
            parse_tag_assign("1"),
            Err(ParseError::InvalidCommandFormat { .. })
        ));
        assert!(matches!(
            parse_tag_assign("t/Physics"),
            Err(ParseError::InvalidCommandFormat { .. })
        ));
        assert_eq!(
            parse_tag_assign("1 t/Physics t/Math").unwrap_err(),
            ParseError::DuplicatePrefix(PREFIX_TAG)
        );
    }

    #[test]
    fn tag_assign_rejects_invalid_tag_names() {
        assert!(matches!(
            parse_tag_assign("1 t/two words"),
            Err(ParseError::InvalidField(FieldError::InvalidTag(_)))
        ));
    }

    #[test]
    fn tag_create_takes_exactly_one_tag_value() {
        let parsed = parse_tag_create("t/Physics").unwrap();
        assert_eq!(parsed, TagCreateCommand::new(Tag::new("Physics").unwrap()));

        assert!(matches!(
            parse_tag_create(""),
            Err(ParseError::InvalidCommandFormat { .. })
        ));
        assert!(matches!(
            parse_tag_create("stray t/Physics"),
            Err(ParseError::InvalidCommandFormat { .. })
        ));
    }

    #[test]
    fn add_requires_all_mandatory_prefixes() {
        let parsed = parse_add("n/John Doe p/98765432 e/johnd@example.com a/311, Clementi Ave 2");
        assert!(parsed.is_ok());

        assert!(matches!(
            parse_add("n/John Doe p/98765432 e/johnd@example.com"),
            Err(ParseError::InvalidCommandFormat { .. })
        ));
        assert!(matches!(
            parse_add("stray n/John p/911 e/j@ab.cd a/Street"),
            Err(ParseError::InvalidCommandFormat { .. })
        ));
    }

    #[test]
    fn add_rejects_repeated_singular_prefixes() {
        let err = parse_add("n/John p/911 p/922 e/j@ab.cd a/Street").unwrap_err();
        assert_eq!(err, ParseError::DuplicatePrefix(PREFIX_PHONE));
    }

    #[test]
    fn add_surfaces_field_constraint_messages() {
        let err = parse_add("n/John p/12 e/j@ab.cd a/Street").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Phone numbers should only contain numbers, and it should be at least 3 digits long"
        );
    }

    #[test]
    fn edit_requires_at_least_one_field() {
        assert_eq!(parse_edit("1").unwrap_err(), ParseError::NothingToEdit);
        assert!(parse_edit("1 p/91234567").is_ok());
        assert!(matches!(
            parse_edit("p/91234567"),
            Err(ParseError::InvalidCommandFormat { .. })
        ));
    }

    #[test]
    fn edit_single_empty_tag_prefix_clears_tags() {
        let parsed = parse_edit("1 t/").unwrap();
        let expected = EditCommand::new(
            index(1),
            EditPersonDescriptor {
                tags: Some(Vec::new()),
                ..EditPersonDescriptor::default()
            },
        );
        assert_eq!(parsed, expected);

        assert!(matches!(
            parse_edit("1 t/ t/Physics"),
            Err(ParseError::InvalidField(FieldError::InvalidTag(_)))
        ));
    }

    #[test]
    fn find_splits_keywords_on_whitespace() {
        let parsed = parse_find("  alice   bob  ").unwrap();
        assert_eq!(
            parsed,
            FindCommand::new(vec!["alice".to_string(), "bob".to_string()])
        );
        assert!(matches!(
            parse_find("   "),
            Err(ParseError::InvalidCommandFormat { .. })
        ));
    }

    #[test]
    fn dispatch_routes_known_words_and_rejects_unknown() {
        assert!(parse_command("list").is_ok());
        assert!(parse_command("remark 1 r/Likes tea").is_ok());
        assert!(parse_command("  exit  ").is_ok());
        assert_eq!(
            parse_command("bogus 1").unwrap_err(),
            ParseError::UnknownCommand
        );
        assert_eq!(parse_command("   ").unwrap_err(), ParseError::UnknownCommand);
    }
}
