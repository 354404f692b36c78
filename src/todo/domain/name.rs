//! Validated todo name type.

use super::TodoDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum length for a todo name, matching the `VARCHAR(100)` column.
pub const MAX_NAME_LENGTH: usize = 100;

/// Trimmed, non-empty todo name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoName(String);

impl TodoName {
    /// Creates a validated todo name.
    ///
    /// The input is trimmed before validation. Length is counted in
    /// characters, not bytes.
    ///
    /// # Errors
    ///
    /// Returns [`TodoDomainError::EmptyName`] when the value is empty after
    /// trimming, or [`TodoDomainError::NameTooLong`] when it exceeds
    /// [`MAX_NAME_LENGTH`] characters.
    pub fn new(value: impl Into<String>) -> Result<Self, TodoDomainError> {
        let raw = value.into();
        let trimmed = raw.trim();

        if trimmed.is_empty() {
            return Err(TodoDomainError::EmptyName);
        }

        if trimmed.chars().count() > MAX_NAME_LENGTH {
            return Err(TodoDomainError::NameTooLong {
                max: MAX_NAME_LENGTH,
            });
        }

        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the name, returning the inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl AsRef<str> for TodoName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for TodoName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
