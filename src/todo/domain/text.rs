//! Validated todo text.

use super::TodoDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Trimmed, non-empty todo text of at most [`TodoText::MAX_LENGTH`]
/// characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TodoText(String);

impl TodoText {
    /// Maximum number of characters permitted after trimming.
    pub const MAX_LENGTH: usize = 500;

    /// Creates validated todo text.
    ///
    /// Surrounding whitespace is removed before validation and the trimmed
    /// value is stored.
    ///
    /// # Errors
    ///
    /// Returns [`TodoDomainError::EmptyText`] when nothing remains after
    /// trimming, or [`TodoDomainError::TextTooLong`] when the trimmed text
    /// exceeds [`TodoText::MAX_LENGTH`] characters.
    pub fn new(value: impl AsRef<str>) -> Result<Self, TodoDomainError> {
        let trimmed = value.as_ref().trim();
        if trimmed.is_empty() {
            return Err(TodoDomainError::EmptyText);
        }

        let length = trimmed.chars().count();
        if length > Self::MAX_LENGTH {
            return Err(TodoDomainError::TextTooLong {
                length,
                max: Self::MAX_LENGTH,
            });
        }

        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the text as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for TodoText {
    type Error = TodoDomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<TodoText> for String {
    fn from(value: TodoText) -> Self {
        value.0
    }
}

impl AsRef<str> for TodoText {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for TodoText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
