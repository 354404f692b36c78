//! Error types for todo domain validation.

use thiserror::Error;

/// Errors returned while constructing or mutating todo domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TodoDomainError {
    /// The todo name is empty after trimming.
    #[error("todo name is required")]
    EmptyName,

    /// The todo name exceeds the storage limit of `max` characters.
    #[error("todo name must not exceed {max} characters")]
    NameTooLong {
        /// Maximum permitted length in characters.
        max: usize,
    },

    /// The todo identifier is zero or negative.
    #[error("todo id must be a positive integer, got {0}")]
    InvalidId(i32),
}

impl TodoDomainError {
    /// Returns the human-readable messages carried to the service boundary.
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        vec![self.to_string()]
    }
}
