//! Port contracts for todo persistence.
//!
//! Reads and writes are split into two narrow traits so handlers depend only
//! on the capability they use.

pub mod repository;

pub use repository::{
    TodoReadRepository, TodoRepositoryError, TodoRepositoryResult, TodoWriteRepository,
};
