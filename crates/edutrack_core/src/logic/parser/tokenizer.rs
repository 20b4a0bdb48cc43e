//! Lexical splitting of command arguments into preamble and prefixed values.
//!
//! # Responsibility
//! - Locate recognized prefixes in a raw argument string.
//! - Capture the text following each prefix, up to the next prefix or end
//!   of input, as that prefix's value.
//!
//! # Invariants
//! - Splitting is purely lexical; value content is never validated here.
//! - A repeated prefix appends to an ordered value sequence, preserving
//!   input order.
//! - A token only counts as a prefix when it starts the string or follows
//!   whitespace.

/// Marker token introducing an argument value, e.g. `t/` or `r/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Prefix(&'static str);

impl Prefix {
    pub const fn token(&self) -> &'static str {
        self.0
    }
}

impl std::fmt::Display for Prefix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

pub const PREFIX_NAME: Prefix = Prefix("n/");
pub const PREFIX_PHONE: Prefix = Prefix("p/");
pub const PREFIX_EMAIL: Prefix = Prefix("e/");
pub const PREFIX_ADDRESS: Prefix = Prefix("a/");
pub const PREFIX_TAG: Prefix = Prefix("t/");
pub const PREFIX_GROUP: Prefix = Prefix("g/");
pub const PREFIX_REMARK: Prefix = Prefix("r/");

/// Tokenized arguments: leading preamble plus ordered prefix/value pairs.
#[derive(Debug, Clone, Default)]
pub struct ArgumentMultimap {
    preamble: String,
    values: Vec<(Prefix, String)>,
}

impl ArgumentMultimap {
    /// Free text before the first recognized prefix, trimmed.
    pub fn preamble(&self) -> &str {
        &self.preamble
    }

    /// Last value given for `prefix`, if any.
    pub fn value_of(&self, prefix: Prefix) -> Option<&str> {
        self.values
            .iter()
            .rev()
            .find(|(key, _)| *key == prefix)
            .map(|(_, value)| value.as_str())
    }

    /// Every value given for `prefix`, in input order.
    pub fn all_values(&self, prefix: Prefix) -> Vec<&str> {
        self.values
            .iter()
            .filter(|(key, _)| *key == prefix)
            .map(|(_, value)| value.as_str())
            .collect()
    }

    /// First prefix among `singular` that occurs more than once.
    pub fn first_duplicated(&self, singular: &[Prefix]) -> Option<Prefix> {
        singular.iter().copied().find(|prefix| {
            self.values
                .iter()
                .filter(|(key, _)| key == prefix)
                .count()
                > 1
        })
    }
}

/// Splits `args` around occurrences of the recognized `prefixes`.
pub fn tokenize(args: &str, prefixes: &[Prefix]) -> ArgumentMultimap {
    let mut found: Vec<(usize, Prefix)> = Vec::new();
    for &prefix in prefixes {
        let token = prefix.token();
        let mut search_from = 0;
        while let Some(offset) = args[search_from..].find(token) {
            let at = search_from + offset;
            if at == 0 || args[..at].ends_with(char::is_whitespace) {
                found.push((at, prefix));
            }
            search_from = at + token.len();
        }
    }
    found.sort_by_key(|(at, _)| *at);

    let preamble_end = found.first().map_or(args.len(), |(at, _)| *at);
    let mut map = ArgumentMultimap {
        preamble: args[..preamble_end].trim().to_string(),
        values: Vec::with_capacity(found.len()),
    };

    for (position, (at, prefix)) in found.iter().enumerate() {
        let value_start = at + prefix.token().len();
        let value_end = found
            .get(position + 1)
            .map_or(args.len(), |(next_at, _)| *next_at);
        map.values
            .push((*prefix, args[value_start..value_end].trim().to_string()));
    }

    map
}

#[cfg(test)]
mod tests {
    use super::{tokenize, PREFIX_REMARK, PREFIX_TAG};

    #[test]
    fn preamble_only_when_no_prefix_present() {
        let map = tokenize("1", &[PREFIX_REMARK]);
        assert_eq!(map.preamble(), "1");
        assert!(map.value_of(PREFIX_REMARK).is_none());
    }

    #[test]
    fn captures_value_up_to_end_of_input() {
        let map = tokenize("1 r/Likes tea", &[PREFIX_REMARK]);
        assert_eq!(map.preamble(), "1");
        assert_eq!(map.value_of(PREFIX_REMARK), Some("Likes tea"));
    }

    #[test]
    fn captures_value_up_to_next_recognized_prefix() {
        let map = tokenize("2 t/Physics r/front row", &[PREFIX_TAG, PREFIX_REMARK]);
        assert_eq!(map.preamble(), "2");
        assert_eq!(map.value_of(PREFIX_TAG), Some("Physics"));
        assert_eq!(map.value_of(PREFIX_REMARK), Some("front row"));
    }

    #[test]
    fn repeated_prefix_appends_in_input_order() {
        let map = tokenize("t/first t/second t/third", &[PREFIX_TAG]);
        assert_eq!(map.all_values(PREFIX_TAG), vec!["first", "second", "third"]);
        // value_of returns the last occurrence
        assert_eq!(map.value_of(PREFIX_TAG), Some("third"));
    }

    #[test]
    fn prefix_must_start_the_string_or_follow_whitespace() {
        let map = tokenize("1 r/visit http://r/path", &[PREFIX_REMARK]);
        assert_eq!(map.value_of(PREFIX_REMARK), Some("visit http://r/path"));

        let at_start = tokenize("t/Physics", &[PREFIX_TAG]);
        assert_eq!(at_start.preamble(), "");
        assert_eq!(at_start.value_of(PREFIX_TAG), Some("Physics"));
    }

    #[test]
    fn unrecognized_prefixes_stay_inside_values() {
        let map = tokenize("1 r/remark with t/inside", &[PREFIX_REMARK]);
        assert_eq!(map.value_of(PREFIX_REMARK), Some("remark with t/inside"));
    }

    #[test]
    fn empty_value_is_captured_as_empty_string() {
        let map = tokenize("3 r/", &[PREFIX_REMARK]);
        assert_eq!(map.value_of(PREFIX_REMARK), Some(""));
    }

    #[test]
    fn first_duplicated_reports_repeated_singular_prefix() {
        let map = tokenize("1 r/a r/b", &[PREFIX_REMARK]);
        assert_eq!(map.first_duplicated(&[PREFIX_REMARK]), Some(PREFIX_REMARK));

        let clean = tokenize("1 r/a", &[PREFIX_REMARK]);
        assert_eq!(clean.first_duplicated(&[PREFIX_REMARK]), None);
    }
}
