//! Domain model for todo records.
//!
//! A todo is a single named record. The name invariant is enforced at every
//! construction and mutation path so an invalid todo can never be observed,
//! regardless of whether request validation ran first.

mod error;
mod ids;
mod name;
mod todo;

pub use error::TodoDomainError;
pub use ids::TodoId;
pub use name::{MAX_NAME_LENGTH, TodoName};
pub use todo::{NewTodo, Todo};
