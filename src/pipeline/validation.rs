//! Aggregated validation failures.

use thiserror::Error;

/// Ordered, non-empty list of validation messages for one request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("validation failed: {}", .messages.join("; "))]
pub struct ValidationFailure {
    messages: Vec<String>,
}

impl ValidationFailure {
    /// Wraps collected failure messages.
    ///
    /// Returns `None` when `messages` is empty, since an empty failure would
    /// mean the request passed.
    #[must_use]
    pub fn from_messages(messages: Vec<String>) -> Option<Self> {
        if messages.is_empty() {
            None
        } else {
            Some(Self { messages })
        }
    }

    /// Returns the failure messages in the order they were produced.
    #[must_use]
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Consumes the failure, returning its messages.
    #[must_use]
    pub fn into_messages(self) -> Vec<String> {
        self.messages
    }
}
