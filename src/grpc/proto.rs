//! Protobuf messages for the `todo.v1` package and the generated service
//! glue.

/// Uniform status envelope attached to every response.
#[derive(Clone, PartialEq, Eq, ::prost::Message)]
pub struct StatusData {
    /// Whether the operation achieved its intent.
    #[prost(bool, tag = "1")]
    pub success: bool,
    /// HTTP-style status code.
    #[prost(int32, tag = "2")]
    pub code: i32,
    /// Short human-readable outcome.
    #[prost(string, tag = "3")]
    pub message: ::prost::alloc::string::String,
    /// Individual failure messages, in the order they were produced.
    #[prost(string, repeated, tag = "4")]
    pub errors: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
}

/// Wire representation of a todo.
#[derive(Clone, PartialEq, Eq, ::prost::Message)]
pub struct TodoData {
    /// Storage-assigned identifier.
    #[prost(int32, tag = "1")]
    pub id: i32,
    /// Todo name.
    #[prost(string, tag = "2")]
    pub name: ::prost::alloc::string::String,
}

/// `GetById` input.
#[derive(Clone, Copy, PartialEq, Eq, ::prost::Message)]
pub struct GetTodoByIdRequest {
    /// Identifier to look up.
    #[prost(int32, tag = "1")]
    pub id: i32,
}

/// `GetAll` input.
#[derive(Clone, Copy, PartialEq, Eq, ::prost::Message)]
pub struct GetAllTodosRequest {}

/// `Create` input.
#[derive(Clone, PartialEq, Eq, ::prost::Message)]
pub struct CreateTodoRequest {
    /// Requested name.
    #[prost(string, tag = "1")]
    pub name: ::prost::alloc::string::String,
}

/// `Update` input.
#[derive(Clone, PartialEq, Eq, ::prost::Message)]
pub struct UpdateTodoRequest {
    /// Identifier of the todo to rename.
    #[prost(int32, tag = "1")]
    pub id: i32,
    /// Requested name.
    #[prost(string, tag = "2")]
    pub name: ::prost::alloc::string::String,
}

/// `Delete` input.
#[derive(Clone, Copy, PartialEq, Eq, ::prost::Message)]
pub struct DeleteTodoRequest {
    /// Identifier of the todo to delete.
    #[prost(int32, tag = "1")]
    pub id: i32,
}

/// `GetById` output.
#[derive(Clone, PartialEq, Eq, ::prost::Message)]
pub struct TodoResponse {
    /// Outcome envelope.
    #[prost(message, optional, tag = "1")]
    pub status: ::core::option::Option<StatusData>,
    /// The todo, when found.
    #[prost(message, optional, tag = "2")]
    pub data: ::core::option::Option<TodoData>,
}

/// `GetAll` output.
#[derive(Clone, PartialEq, Eq, ::prost::Message)]
pub struct TodoListResponse {
    /// Outcome envelope.
    #[prost(message, optional, tag = "1")]
    pub status: ::core::option::Option<StatusData>,
    /// Every stored todo, ordered by identifier.
    #[prost(message, repeated, tag = "2")]
    pub data: ::prost::alloc::vec::Vec<TodoData>,
}

/// `Create` output.
#[derive(Clone, PartialEq, Eq, ::prost::Message)]
pub struct CreateTodoResponse {
    /// Outcome envelope.
    #[prost(message, optional, tag = "1")]
    pub status: ::core::option::Option<StatusData>,
    /// Identifier assigned to the new todo, or 0 on failure.
    #[prost(int32, tag = "2")]
    pub id: i32,
}

/// `Update` output.
#[derive(Clone, PartialEq, Eq, ::prost::Message)]
pub struct UpdateTodoResponse {
    /// Outcome envelope.
    #[prost(message, optional, tag = "1")]
    pub status: ::core::option::Option<StatusData>,
}

/// `Delete` output.
#[derive(Clone, PartialEq, Eq, ::prost::Message)]
pub struct DeleteTodoResponse {
    /// Outcome envelope.
    #[prost(message, optional, tag = "1")]
    pub status: ::core::option::Option<StatusData>,
}

include!(concat!(env!("OUT_DIR"), "/todo.v1.TodoService.rs"));
