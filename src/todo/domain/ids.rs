//! Identifier type for the todo domain.

use super::TodoDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Storage-assigned identifier of a persisted todo.
///
/// Identifiers are always positive; storage allocates them on insert and
/// they never change afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoId(i32);

impl TodoId {
    /// Creates an identifier from a raw storage or wire value.
    ///
    /// # Errors
    ///
    /// Returns [`TodoDomainError::InvalidId`] when the value is not positive.
    pub const fn new(value: i32) -> Result<Self, TodoDomainError> {
        if value <= 0 {
            return Err(TodoDomainError::InvalidId(value));
        }
        Ok(Self(value))
    }

    /// Returns the raw identifier value.
    #[must_use]
    pub const fn value(self) -> i32 {
        self.0
    }
}

impl TryFrom<i32> for TodoId {
    type Error = TodoDomainError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
