//! Handler for [`UpdateTodoCommand`].

use super::{TodoHandlerError, ensure_not_cancelled, until_cancelled};
use crate::pipeline::RequestHandler;
use crate::todo::{
    domain::TodoId,
    ports::{TodoReadRepository, TodoRepositoryError, TodoWriteRepository},
    requests::UpdateTodoCommand,
};
use async_trait::async_trait;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

/// Renames an existing todo.
///
/// Responds `false` without writing when the todo does not exist.
#[derive(Clone)]
pub struct UpdateTodoHandler<R, W>
where
    R: TodoReadRepository,
    W: TodoWriteRepository,
{
    reader: Arc<R>,
    writer: Arc<W>,
}

impl<R, W> UpdateTodoHandler<R, W>
where
    R: TodoReadRepository,
    W: TodoWriteRepository,
{
    /// Creates the handler over the read and write ports.
    #[must_use]
    pub const fn new(reader: Arc<R>, writer: Arc<W>) -> Self {
        Self { reader, writer }
    }
}

#[async_trait]
impl<R, W> RequestHandler<UpdateTodoCommand, TodoHandlerError> for UpdateTodoHandler<R, W>
where
    R: TodoReadRepository + 'static,
    W: TodoWriteRepository + 'static,
{
    async fn handle(
        &self,
        request: UpdateTodoCommand,
        cancellation: &CancellationToken,
    ) -> Result<bool, TodoHandlerError> {
        let dto = request.into_dto();
        let Ok(id) = TodoId::new(dto.id) else {
            return Ok(false);
        };

        let Some(existing) = until_cancelled(cancellation, self.reader.get_by_id(id)).await? else {
            debug!(todo_id = %id, "todo to update not found");
            return Ok(false);
        };

        let renamed = existing.update(dto.name)?;
        ensure_not_cancelled(cancellation)?;
        match self.writer.update(&renamed).await {
            Ok(()) => {
                info!(todo_id = %id, "todo updated");
                Ok(true)
            }
            Err(TodoRepositoryError::NotFound(_)) => Ok(false),
            Err(err) => Err(err.into()),
        }
    }
}
