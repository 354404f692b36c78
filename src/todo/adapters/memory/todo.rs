//! In-memory todo repository for tests and the `memory` storage backend.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use crate::todo::{
    domain::{NewTodo, Todo, TodoId},
    ports::{TodoReadRepository, TodoRepositoryError, TodoRepositoryResult, TodoWriteRepository},
};

/// Thread-safe in-memory todo repository implementing both ports.
///
/// Identifiers are allocated sequentially from 1 and never reused, matching
/// a `SERIAL` column.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTodoRepository {
    state: Arc<RwLock<InMemoryTodoState>>,
}

#[derive(Debug, Default)]
struct InMemoryTodoState {
    todos: BTreeMap<TodoId, Todo>,
    last_id: i32,
}

impl InMemoryTodoRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn read_state(
        &self,
    ) -> TodoRepositoryResult<std::sync::RwLockReadGuard<'_, InMemoryTodoState>> {
        self.state
            .read()
            .map_err(|err| TodoRepositoryError::persistence(std::io::Error::other(err.to_string())))
    }

    fn write_state(
        &self,
    ) -> TodoRepositoryResult<std::sync::RwLockWriteGuard<'_, InMemoryTodoState>> {
        self.state
            .write()
            .map_err(|err| TodoRepositoryError::persistence(std::io::Error::other(err.to_string())))
    }
}

#[async_trait]
impl TodoReadRepository for InMemoryTodoRepository {
    async fn get_by_id(&self, id: TodoId) -> TodoRepositoryResult<Option<Todo>> {
        let state = self.read_state()?;
        Ok(state.todos.get(&id).cloned())
    }

    async fn get_all(&self) -> TodoRepositoryResult<Vec<Todo>> {
        let state = self.read_state()?;
        Ok(state.todos.values().cloned().collect())
    }
}

#[async_trait]
impl TodoWriteRepository for InMemoryTodoRepository {
    async fn add(&self, todo: &NewTodo) -> TodoRepositoryResult<TodoId> {
        let mut state = self.write_state()?;
        let next = state.last_id.checked_add(1).ok_or_else(|| {
            TodoRepositoryError::persistence(std::io::Error::other("todo id space exhausted"))
        })?;
        let id = TodoId::new(next).map_err(TodoRepositoryError::persistence)?;
        state.last_id = next;
        state.todos.insert(id, todo.clone().into_persisted(id));
        Ok(id)
    }

    async fn update(&self, todo: &Todo) -> TodoRepositoryResult<()> {
        let mut state = self.write_state()?;
        let stored = state
            .todos
            .get_mut(&todo.id())
            .ok_or(TodoRepositoryError::NotFound(todo.id()))?;
        *stored = todo.clone();
        Ok(())
    }

    async fn delete(&self, id: TodoId) -> TodoRepositoryResult<()> {
        let mut state = self.write_state()?;
        state
            .todos
            .remove(&id)
            .map(|_| ())
            .ok_or(TodoRepositoryError::NotFound(id))
    }
}
