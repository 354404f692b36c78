//! Handler for [`CreateTodoCommand`].

use super::{TodoHandlerError, ensure_not_cancelled};
use crate::pipeline::RequestHandler;
use crate::todo::{domain::Todo, ports::TodoWriteRepository, requests::CreateTodoCommand};
use async_trait::async_trait;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::info;

/// Builds a todo from the payload and stores it.
#[derive(Clone)]
pub struct CreateTodoHandler<W>
where
    W: TodoWriteRepository,
{
    writer: Arc<W>,
}

impl<W> CreateTodoHandler<W>
where
    W: TodoWriteRepository,
{
    /// Creates the handler over a write port.
    #[must_use]
    pub const fn new(writer: Arc<W>) -> Self {
        Self { writer }
    }
}

#[async_trait]
impl<W> RequestHandler<CreateTodoCommand, TodoHandlerError> for CreateTodoHandler<W>
where
    W: TodoWriteRepository + 'static,
{
    async fn handle(
        &self,
        request: CreateTodoCommand,
        cancellation: &CancellationToken,
    ) -> Result<i32, TodoHandlerError> {
        let draft = Todo::create(request.into_dto().name)?;
        ensure_not_cancelled(cancellation)?;
        let id = self.writer.add(&draft).await?;
        info!(todo_id = %id, "todo created");
        Ok(id.value())
    }
}
