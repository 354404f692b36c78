//! Handler for [`GetAllTodosQuery`].

use super::{TodoHandlerError, until_cancelled};
use crate::pipeline::RequestHandler;
use crate::todo::{
    ports::TodoReadRepository,
    requests::{GetAllTodosQuery, TodoDto},
};
use async_trait::async_trait;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

/// Lists every todo; an empty store yields an empty list.
#[derive(Clone)]
pub struct GetAllTodosHandler<R>
where
    R: TodoReadRepository,
{
    reader: Arc<R>,
}

impl<R> GetAllTodosHandler<R>
where
    R: TodoReadRepository,
{
    /// Creates the handler over a read port.
    #[must_use]
    pub const fn new(reader: Arc<R>) -> Self {
        Self { reader }
    }
}

#[async_trait]
impl<R> RequestHandler<GetAllTodosQuery, TodoHandlerError> for GetAllTodosHandler<R>
where
    R: TodoReadRepository + 'static,
{
    async fn handle(
        &self,
        _request: GetAllTodosQuery,
        cancellation: &CancellationToken,
    ) -> Result<Vec<TodoDto>, TodoHandlerError> {
        let todos = until_cancelled(cancellation, self.reader.get_all()).await?;
        Ok(todos.into_iter().map(TodoDto::from).collect())
    }
}
