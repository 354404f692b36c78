//! Shared test helpers for in-memory integration tests.

use rstest::fixture;
use std::sync::Arc;
use todo_grpc::todo::{
    adapters::memory::InMemoryTodoRepository,
    requests::{CreateTodoCommand, CreateTodoDto},
    wiring::{TodoDispatcher, build_todo_dispatcher},
};
use tokio_util::sync::CancellationToken;

/// Provides a fresh in-memory repository for each test.
#[fixture]
pub fn repo() -> Arc<InMemoryTodoRepository> {
    Arc::new(InMemoryTodoRepository::new())
}

/// Builds a dispatcher whose ports share `repo`.
pub fn dispatcher_over(repo: &Arc<InMemoryTodoRepository>) -> TodoDispatcher {
    build_todo_dispatcher(Arc::clone(repo), Arc::clone(repo)).expect("valid todo pipeline")
}

/// Creates a todo through the pipeline and returns its id.
pub async fn create_todo(dispatcher: &TodoDispatcher, name: &str) -> i32 {
    let command = CreateTodoCommand::new(CreateTodoDto {
        name: name.to_owned(),
    });
    dispatcher
        .send(command, &CancellationToken::new())
        .await
        .expect("create should succeed")
}
