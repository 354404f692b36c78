//! Individual validation rule implementations.
//!
//! Each rule checks one aspect of raw request input and returns `Ok(())` or
//! the specific violation.

use crate::todo::domain::MAX_NAME_LENGTH;
use thiserror::Error;

/// A single rule violation, rendered as a client-facing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TodoRuleViolation {
    /// The name is missing or whitespace-only.
    #[error("todo name is required")]
    NameRequired,

    /// The name is longer than the storage column allows.
    #[error("todo name must not exceed {max} characters")]
    NameTooLong {
        /// Maximum permitted length in characters.
        max: usize,
    },

    /// The identifier is zero or negative.
    #[error("todo id must be a positive integer")]
    IdNotPositive,
}

/// Validates that a name has content after trimming.
///
/// # Errors
///
/// Returns [`TodoRuleViolation::NameRequired`] for empty or whitespace-only
/// names.
pub fn validate_name_required(name: &str) -> Result<(), TodoRuleViolation> {
    if name.trim().is_empty() {
        return Err(TodoRuleViolation::NameRequired);
    }
    Ok(())
}

/// Validates that a trimmed name fits the storage limit.
///
/// # Errors
///
/// Returns [`TodoRuleViolation::NameTooLong`] when the trimmed name has more
/// than [`MAX_NAME_LENGTH`] characters.
pub fn validate_name_length(name: &str) -> Result<(), TodoRuleViolation> {
    if name.trim().chars().count() > MAX_NAME_LENGTH {
        return Err(TodoRuleViolation::NameTooLong {
            max: MAX_NAME_LENGTH,
        });
    }
    Ok(())
}

/// Validates that an identifier is positive.
///
/// # Errors
///
/// Returns [`TodoRuleViolation::IdNotPositive`] for zero or negative ids.
pub const fn validate_id_positive(id: i32) -> Result<(), TodoRuleViolation> {
    if id <= 0 {
        return Err(TodoRuleViolation::IdNotPositive);
    }
    Ok(())
}

/// Collects a rule outcome into a message list.
pub(super) fn collect(errors: &mut Vec<String>, outcome: Result<(), TodoRuleViolation>) {
    if let Err(violation) = outcome {
        errors.push(violation.to_string());
    }
}
