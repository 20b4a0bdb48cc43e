//! Free-text remark field for a person.

use serde::Serialize;
use std::fmt::{Display, Formatter};

/// Free-form remark attached to a person.
///
/// Any string is valid, including the empty string, which stands for
/// "no remark". Replacing a remark with an empty one removes it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Remark {
    value: String,
}

impl Remark {
    /// Wraps an arbitrary remark string. No validation is applied.
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    /// Returns the empty remark, meaning "no remark".
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }
}

impl Display for Remark {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}
