//! Shared world state for todo CRUD BDD scenarios.

use std::sync::Arc;

use rstest::fixture;
use todo_grpc::grpc::{BoundaryOptions, TodoGrpcService, proto::StatusData};
use todo_grpc::todo::{adapters::memory::InMemoryTodoRepository, wiring::build_todo_dispatcher};

/// Scenario world for todo CRUD behaviour tests.
pub struct TodoWorld {
    /// The gRPC service under test.
    pub service: TodoGrpcService,
    /// Identifier returned by the last successful create.
    pub last_created_id: Option<i32>,
    /// Envelope from the last call.
    pub last_status: Option<StatusData>,
}

impl TodoWorld {
    /// Creates a world backed by an empty in-memory store.
    ///
    /// # Panics
    ///
    /// Panics if the todo pipeline is misconfigured.
    #[must_use]
    pub fn new() -> Self {
        let repository = Arc::new(InMemoryTodoRepository::new());
        let dispatcher = build_todo_dispatcher(Arc::clone(&repository), repository)
            .expect("todo pipeline should be valid");
        Self {
            service: TodoGrpcService::new(dispatcher, BoundaryOptions::default()),
            last_created_id: None,
            last_status: None,
        }
    }

    /// Returns the envelope from the last call.
    ///
    /// # Errors
    ///
    /// Returns an error when no call has been made yet.
    pub fn status(&self) -> Result<&StatusData, eyre::Report> {
        self.last_status
            .as_ref()
            .ok_or_else(|| eyre::eyre!("no response recorded in scenario world"))
    }
}

impl Default for TodoWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> TodoWorld {
    TodoWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
