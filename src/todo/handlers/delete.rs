//! Handler for [`DeleteTodoCommand`].

use super::{TodoHandlerError, ensure_not_cancelled, until_cancelled};
use crate::pipeline::RequestHandler;
use crate::todo::{
    domain::TodoId,
    ports::{TodoReadRepository, TodoRepositoryError, TodoWriteRepository},
    requests::DeleteTodoCommand,
};
use async_trait::async_trait;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

/// Removes an existing todo.
///
/// Responds `false` without writing when the todo does not exist.
#[derive(Clone)]
pub struct DeleteTodoHandler<R, W>
where
    R: TodoReadRepository,
    W: TodoWriteRepository,
{
    reader: Arc<R>,
    writer: Arc<W>,
}

impl<R, W> DeleteTodoHandler<R, W>
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
impl<R, W> RequestHandler<DeleteTodoCommand, TodoHandlerError> for DeleteTodoHandler<R, W>
where
    R: TodoReadRepository + 'static,
    W: TodoWriteRepository + 'static,
{
    async fn handle(
        &self,
        request: DeleteTodoCommand,
        cancellation: &CancellationToken,
    ) -> Result<bool, TodoHandlerError> {
        let Ok(id) = TodoId::new(request.id()) else {
            return Ok(false);
        };

        if until_cancelled(cancellation, self.reader.get_by_id(id))
            .await?
            .is_none()
        {
            debug!(todo_id = %id, "todo to delete not found");
            return Ok(false);
        }

        ensure_not_cancelled(cancellation)?;
        match self.writer.delete(id).await {
            Ok(()) => {
                info!(todo_id = %id, "todo deleted");
                Ok(true)
            }
            Err(TodoRepositoryError::NotFound(_)) => Ok(false),
            Err(err) => Err(err.into()),
        }
    }
}
