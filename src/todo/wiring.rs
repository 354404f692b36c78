//! Explicit assembly of the todo request pipeline.

use crate::pipeline::{Dispatcher, PipelineConfig, PipelineConfigError};
use crate::todo::{
    handlers::{
        CreateTodoHandler, DeleteTodoHandler, GetAllTodosHandler, GetTodoByIdHandler,
        TodoHandlerError, UpdateTodoHandler,
    },
    ports::{TodoReadRepository, TodoWriteRepository},
    requests::{
        CreateTodoCommand, DeleteTodoCommand, GetAllTodosQuery, GetTodoByIdQuery,
        UpdateTodoCommand,
    },
    validation::{IdPositiveValidator, NameLengthValidator, NameRequiredValidator},
};
use std::sync::Arc;

/// Dispatcher serving every todo request.
pub type TodoDispatcher = Dispatcher<TodoHandlerError>;

/// Lists every todo validator and handler, in registration order.
#[must_use]
pub fn todo_pipeline<R, W>(reader: Arc<R>, writer: Arc<W>) -> PipelineConfig<TodoHandlerError>
where
    R: TodoReadRepository + 'static,
    W: TodoWriteRepository + 'static,
{
    PipelineConfig::new()
        .validator::<CreateTodoCommand>(NameRequiredValidator)
        .validator::<CreateTodoCommand>(NameLengthValidator)
        .handler::<CreateTodoCommand>(CreateTodoHandler::new(Arc::clone(&writer)))
        .validator::<UpdateTodoCommand>(IdPositiveValidator)
        .validator::<UpdateTodoCommand>(NameRequiredValidator)
        .validator::<UpdateTodoCommand>(NameLengthValidator)
        .handler::<UpdateTodoCommand>(UpdateTodoHandler::new(
            Arc::clone(&reader),
            Arc::clone(&writer),
        ))
        .validator::<DeleteTodoCommand>(IdPositiveValidator)
        .handler::<DeleteTodoCommand>(DeleteTodoHandler::new(Arc::clone(&reader), writer))
        .handler::<GetTodoByIdQuery>(GetTodoByIdHandler::new(Arc::clone(&reader)))
        .handler::<GetAllTodosQuery>(GetAllTodosHandler::new(reader))
}

/// Builds the todo dispatcher over the given ports.
///
/// # Errors
///
/// Returns [`PipelineConfigError`] when the pipeline is misconfigured.
pub fn build_todo_dispatcher<R, W>(
    reader: Arc<R>,
    writer: Arc<W>,
) -> Result<TodoDispatcher, PipelineConfigError>
where
    R: TodoReadRepository + 'static,
    W: TodoWriteRepository + 'static,
{
    Dispatcher::new(todo_pipeline(reader, writer))
}
