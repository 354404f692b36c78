//! `PostgreSQL` repository implementation for todo records.

use super::{
    models::{NewTodoRow, TodoRow},
    schema::{CREATE_TODOS_TABLE, todos},
};
use crate::todo::{
    domain::{NewTodo, Todo, TodoId, TodoName},
    ports::{TodoReadRepository, TodoRepositoryError, TodoRepositoryResult, TodoWriteRepository},
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use std::time::Duration;

/// `PostgreSQL` connection pool type used by todo adapters.
pub type TodoPgPool = Pool<ConnectionManager<PgConnection>>;

/// Builds a connection pool for `database_url`.
///
/// Opening the initial connections blocks, so it runs on the blocking
/// thread pool and gives up after `connect_timeout`.
///
/// # Errors
///
/// Returns [`TodoRepositoryError::Persistence`] when the pool cannot open
/// its initial connections.
pub async fn connect_pool(
    database_url: &str,
    max_size: u32,
    connect_timeout: Duration,
) -> TodoRepositoryResult<TodoPgPool> {
    let manager = ConnectionManager::<PgConnection>::new(database_url);
    tokio::task::spawn_blocking(move || {
        Pool::builder()
            .max_size(max_size)
            .connection_timeout(connect_timeout)
            .build(manager)
            .map_err(TodoRepositoryError::persistence)
    })
    .await
    .map_err(TodoRepositoryError::persistence)?
}

/// `PostgreSQL`-backed todo repository implementing both ports.
#[derive(Debug, Clone)]
pub struct PostgresTodoRepository {
    pool: TodoPgPool,
}

impl PostgresTodoRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: TodoPgPool) -> Self {
        Self { pool }
    }

    /// Creates the `todos` table if it is missing.
    ///
    /// # Errors
    ///
    /// Returns [`TodoRepositoryError::Persistence`] when the statement fails.
    pub async fn ensure_schema(&self) -> TodoRepositoryResult<()> {
        self.run_blocking(|connection| {
            diesel::sql_query(CREATE_TODOS_TABLE)
                .execute(connection)
                .map_err(TodoRepositoryError::persistence)?;
            Ok(())
        })
        .await
    }

    async fn run_blocking<F, T>(&self, f: F) -> TodoRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> TodoRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(TodoRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(TodoRepositoryError::persistence)?
    }
}

#[async_trait]
impl TodoReadRepository for PostgresTodoRepository {
    async fn get_by_id(&self, id: TodoId) -> TodoRepositoryResult<Option<Todo>> {
        self.run_blocking(move |connection| {
            let row = todos::table
                .find(id.value())
                .select(TodoRow::as_select())
                .first::<TodoRow>(connection)
                .optional()
                .map_err(TodoRepositoryError::persistence)?;
            row.map(row_to_todo).transpose()
        })
        .await
    }

    async fn get_all(&self) -> TodoRepositoryResult<Vec<Todo>> {
        self.run_blocking(move |connection| {
            let rows = todos::table
                .order(todos::id.asc())
                .select(TodoRow::as_select())
                .load::<TodoRow>(connection)
                .map_err(TodoRepositoryError::persistence)?;
            rows.into_iter().map(row_to_todo).collect()
        })
        .await
    }
}

#[async_trait]
impl TodoWriteRepository for PostgresTodoRepository {
    async fn add(&self, todo: &NewTodo) -> TodoRepositoryResult<TodoId> {
        let new_row = NewTodoRow {
            name: todo.name().as_str().to_owned(),
        };

        self.run_blocking(move |connection| {
            let id = diesel::insert_into(todos::table)
                .values(&new_row)
                .returning(todos::id)
                .get_result::<i32>(connection)
                .map_err(TodoRepositoryError::persistence)?;
            TodoId::new(id).map_err(TodoRepositoryError::invalid_persisted_data)
        })
        .await
    }

    async fn update(&self, todo: &Todo) -> TodoRepositoryResult<()> {
        let id = todo.id();
        let name = todo.name().as_str().to_owned();

        self.run_blocking(move |connection| {
            let updated_count = diesel::update(todos::table.find(id.value()))
                .set(todos::name.eq(&name))
                .execute(connection)
                .map_err(TodoRepositoryError::persistence)?;

            if updated_count == 0 {
                return Err(TodoRepositoryError::NotFound(id));
            }
            Ok(())
        })
        .await
    }

    async fn delete(&self, id: TodoId) -> TodoRepositoryResult<()> {
        self.run_blocking(move |connection| {
            let deleted_count = diesel::delete(todos::table.find(id.value()))
                .execute(connection)
                .map_err(TodoRepositoryError::persistence)?;

            if deleted_count == 0 {
                return Err(TodoRepositoryError::NotFound(id));
            }
            Ok(())
        })
        .await
    }
}

fn row_to_todo(row: TodoRow) -> TodoRepositoryResult<Todo> {
    let TodoRow { id, name } = row;
    let parsed_id = TodoId::new(id).map_err(TodoRepositoryError::invalid_persisted_data)?;
    let parsed_name = TodoName::new(name).map_err(TodoRepositoryError::invalid_persisted_data)?;
    Ok(Todo::from_persisted(parsed_id, parsed_name))
}
