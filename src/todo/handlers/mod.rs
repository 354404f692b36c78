//! Handlers for each todo request.
//!
//! Handlers orchestrate the domain and the repository ports. "Not found" is
//! an ordinary outcome (`None` or `false`), never an error.

mod create;
mod delete;
mod get_all;
mod get_by_id;
mod update;

pub use create::CreateTodoHandler;
pub use delete::DeleteTodoHandler;
pub use get_all::GetAllTodosHandler;
pub use get_by_id::GetTodoByIdHandler;
pub use update::UpdateTodoHandler;

use crate::todo::{
    domain::TodoDomainError,
    ports::{TodoRepositoryError, TodoRepositoryResult},
};
use std::future::Future;
use thiserror::Error;
use tokio_util::sync::CancellationToken;

/// Errors raised by todo handlers.
#[derive(Debug, Error)]
pub enum TodoHandlerError {
    /// The todo invariant rejected the input.
    #[error(transparent)]
    Domain(#[from] TodoDomainError),

    /// Storage failed.
    #[error(transparent)]
    Repository(#[from] TodoRepositoryError),

    /// The caller cancelled or the deadline expired before storage was
    /// touched, or while a read was in flight.
    #[error("request cancelled before storage completed")]
    Cancelled,
}

/// Result type for todo handlers.
pub type TodoHandlerResult<T> = Result<T, TodoHandlerError>;

/// Awaits a read unless `cancellation` fires first.
///
/// Only reads are raced. Dropping a read loses nothing.
async fn until_cancelled<T>(
    cancellation: &CancellationToken,
    operation: impl Future<Output = TodoRepositoryResult<T>>,
) -> TodoHandlerResult<T> {
    tokio::select! {
        biased;
        () = cancellation.cancelled() => Err(TodoHandlerError::Cancelled),
        result = operation => Ok(result?),
    }
}

/// Refuses to start a write once `cancellation` has fired.
///
/// A write that has started runs to completion so the reported outcome
/// always matches what storage committed.
fn ensure_not_cancelled(cancellation: &CancellationToken) -> TodoHandlerResult<()> {
    if cancellation.is_cancelled() {
        return Err(TodoHandlerError::Cancelled);
    }
    Ok(())
}
