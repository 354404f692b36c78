//! Repository ports for todo persistence and lookup.

use crate::todo::domain::{NewTodo, Todo, TodoId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for todo repository operations.
pub type TodoRepositoryResult<T> = Result<T, TodoRepositoryError>;

/// Read-side todo persistence contract.
#[async_trait]
pub trait TodoReadRepository: Send + Sync {
    /// Finds a todo by identifier.
    ///
    /// Returns `None` when the todo does not exist.
    async fn get_by_id(&self, id: TodoId) -> TodoRepositoryResult<Option<Todo>>;

    /// Returns every stored todo ordered by identifier.
    async fn get_all(&self) -> TodoRepositoryResult<Vec<Todo>>;
}

/// Write-side todo persistence contract.
#[async_trait]
pub trait TodoWriteRepository: Send + Sync {
    /// Stores a new todo and returns the identifier assigned by storage.
    async fn add(&self, todo: &NewTodo) -> TodoRepositoryResult<TodoId>;

    /// Persists the name of an existing todo.
    ///
    /// # Errors
    ///
    /// Returns [`TodoRepositoryError::NotFound`] when the todo does not exist.
    async fn update(&self, todo: &Todo) -> TodoRepositoryResult<()>;

    /// Removes a todo.
    ///
    /// # Errors
    ///
    /// Returns [`TodoRepositoryError::NotFound`] when the todo does not exist.
    async fn delete(&self, id: TodoId) -> TodoRepositoryResult<()>;
}

/// Errors returned by todo repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TodoRepositoryError {
    /// The todo was not found.
    #[error("todo not found: {0}")]
    NotFound(TodoId),

    /// Persisted data could not be reconstructed into domain types.
    #[error("invalid persisted data: {0}")]
    InvalidPersistedData(Arc<dyn std::error::Error + Send + Sync>),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TodoRepositoryError {
    /// Wraps a data-quality error from persisted rows.
    pub fn invalid_persisted_data(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::InvalidPersistedData(Arc::new(err))
    }

    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
