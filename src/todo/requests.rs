//! Command and query contracts for the todo pipeline.
//!
//! Each request is immutable once built and declares the value its handler
//! returns. DTOs carry raw boundary input; validation happens in the
//! dispatcher and again in the domain.

use crate::pipeline::Request;
use crate::todo::domain::Todo;
use serde::{Deserialize, Serialize};

/// Raw input for creating a todo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateTodoDto {
    /// Requested name, untrimmed.
    pub name: String,
}

/// Raw input for renaming a todo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateTodoDto {
    /// Identifier of the todo to rename.
    pub id: i32,
    /// Requested name, untrimmed.
    pub name: String,
}

/// Read model returned by todo queries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoDto {
    /// Storage-assigned identifier.
    pub id: i32,
    /// Trimmed name.
    pub name: String,
}

impl From<Todo> for TodoDto {
    fn from(todo: Todo) -> Self {
        Self {
            id: todo.id().value(),
            name: todo.name().as_str().to_owned(),
        }
    }
}

/// Creates a todo; responds with the assigned identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTodoCommand {
    dto: CreateTodoDto,
}

impl CreateTodoCommand {
    /// Wraps the create payload.
    #[must_use]
    pub const fn new(dto: CreateTodoDto) -> Self {
        Self { dto }
    }

    /// Returns the create payload.
    #[must_use]
    pub const fn dto(&self) -> &CreateTodoDto {
        &self.dto
    }

    /// Consumes the command, returning its payload.
    #[must_use]
    pub fn into_dto(self) -> CreateTodoDto {
        self.dto
    }
}

impl Request for CreateTodoCommand {
    type Response = i32;
    const NAME: &'static str = "CreateTodoCommand";
}

/// Renames a todo; responds `false` when the todo does not exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateTodoCommand {
    dto: UpdateTodoDto,
}

impl UpdateTodoCommand {
    /// Wraps the update payload.
    #[must_use]
    pub const fn new(dto: UpdateTodoDto) -> Self {
        Self { dto }
    }

    /// Returns the update payload.
    #[must_use]
    pub const fn dto(&self) -> &UpdateTodoDto {
        &self.dto
    }

    /// Consumes the command, returning its payload.
    #[must_use]
    pub fn into_dto(self) -> UpdateTodoDto {
        self.dto
    }
}

impl Request for UpdateTodoCommand {
    type Response = bool;
    const NAME: &'static str = "UpdateTodoCommand";
}

/// Deletes a todo; responds `false` when the todo does not exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteTodoCommand {
    id: i32,
}

impl DeleteTodoCommand {
    /// Targets the todo with the given raw identifier.
    #[must_use]
    pub const fn new(id: i32) -> Self {
        Self { id }
    }

    /// Returns the raw identifier.
    #[must_use]
    pub const fn id(&self) -> i32 {
        self.id
    }
}

impl Request for DeleteTodoCommand {
    type Response = bool;
    const NAME: &'static str = "DeleteTodoCommand";
}

/// Looks up one todo; responds `None` when it does not exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GetTodoByIdQuery {
    id: i32,
}

impl GetTodoByIdQuery {
    /// Targets the todo with the given raw identifier.
    #[must_use]
    pub const fn new(id: i32) -> Self {
        Self { id }
    }

    /// Returns the raw identifier.
    #[must_use]
    pub const fn id(&self) -> i32 {
        self.id
    }
}

impl Request for GetTodoByIdQuery {
    type Response = Option<TodoDto>;
    const NAME: &'static str = "GetTodoByIdQuery";
}

/// Lists every todo.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GetAllTodosQuery;

impl Request for GetAllTodosQuery {
    type Response = Vec<TodoDto>;
    const NAME: &'static str = "GetAllTodosQuery";
}
