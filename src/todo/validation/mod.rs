//! Request validation for the todo pipeline.
//!
//! Rules are pure functions in [`rules`]; [`validators`] groups them per
//! request shape for registration with the dispatcher.

pub mod rules;
pub mod validators;

pub use rules::TodoRuleViolation;
pub use validators::{IdPositiveValidator, NameLengthValidator, NameRequiredValidator};
