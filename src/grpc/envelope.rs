//! Status envelope construction and error classification.

use super::proto::StatusData;
use crate::pipeline::DispatchError;
use crate::todo::handlers::TodoHandlerError;

/// Envelope code for a successful read or update.
pub const CODE_OK: i32 = 200;
/// Envelope code for a successful create.
pub const CODE_CREATED: i32 = 201;
/// Envelope code for rejected input.
pub const CODE_BAD_REQUEST: i32 = 400;
/// Envelope code for a missing record on lookup.
pub const CODE_NOT_FOUND: i32 = 404;
/// Envelope code for a write that could not be applied.
pub const CODE_UNPROCESSABLE: i32 = 422;

/// Message used for every input rejection.
pub const VALIDATION_FAILED: &str = "validation error occurred";
/// Message returned for internal failures when details are hidden.
pub const INTERNAL_ERROR: &str = "an unexpected error occurred";

/// Builds a successful envelope.
#[must_use]
pub fn success(code: i32, message: &str) -> StatusData {
    StatusData {
        success: true,
        code,
        message: message.to_owned(),
        errors: Vec::new(),
    }
}

/// Builds a failed envelope.
#[must_use]
pub fn failure(code: i32, message: &str, errors: Vec<String>) -> StatusData {
    StatusData {
        success: false,
        code,
        message: message.to_owned(),
        errors,
    }
}

/// Builds the envelope for rejected input.
#[must_use]
pub fn bad_input(errors: Vec<String>) -> StatusData {
    failure(CODE_BAD_REQUEST, VALIDATION_FAILED, errors)
}

/// Client-visible class of a pipeline failure.
#[derive(Debug)]
pub enum FailureClass {
    /// Validation or domain rejection; the messages are safe to return.
    BadInput(Vec<String>),
    /// The call was cancelled or ran out of time.
    Cancelled,
    /// Storage or wiring failure; the detail must stay server-side.
    Internal(String),
}

impl From<DispatchError<TodoHandlerError>> for FailureClass {
    fn from(err: DispatchError<TodoHandlerError>) -> Self {
        match err {
            DispatchError::Validation(failure) => Self::BadInput(failure.into_messages()),
            DispatchError::Handler(TodoHandlerError::Domain(domain)) => {
                Self::BadInput(domain.messages())
            }
            DispatchError::Handler(TodoHandlerError::Cancelled) => Self::Cancelled,
            other @ (DispatchError::HandlerNotRegistered(_)
            | DispatchError::Handler(TodoHandlerError::Repository(_))) => {
                Self::Internal(other.to_string())
            }
        }
    }
}
