//! Handler for [`GetTodoByIdQuery`].

use super::{TodoHandlerError, until_cancelled};
use crate::pipeline::RequestHandler;
use crate::todo::{
    domain::TodoId,
    ports::TodoReadRepository,
    requests::{GetTodoByIdQuery, TodoDto},
};
use async_trait::async_trait;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

/// Fetches one todo; a missing or non-positive id yields `None`.
#[derive(Clone)]
pub struct GetTodoByIdHandler<R>
where
    R: TodoReadRepository,
{
    reader: Arc<R>,
}

impl<R> GetTodoByIdHandler<R>
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
impl<R> RequestHandler<GetTodoByIdQuery, TodoHandlerError> for GetTodoByIdHandler<R>
where
    R: TodoReadRepository + 'static,
{
    async fn handle(
        &self,
        request: GetTodoByIdQuery,
        cancellation: &CancellationToken,
    ) -> Result<Option<TodoDto>, TodoHandlerError> {
        let Ok(id) = TodoId::new(request.id()) else {
            return Ok(None);
        };
        let found = until_cancelled(cancellation, self.reader.get_by_id(id)).await?;
        Ok(found.map(TodoDto::from))
    }
}
