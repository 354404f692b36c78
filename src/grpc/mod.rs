//! gRPC boundary for the todo service.
//!
//! Translates `todo.v1.TodoService` calls into pipeline requests and maps
//! results back into responses carrying a uniform status envelope.
//! Validation and domain failures stay in the envelope (code 400); internal
//! failures become transport errors with a generic message.

pub mod correlation;
pub mod envelope;
pub mod proto;
mod service;

pub use proto::todo_service_server::{TodoService, TodoServiceServer};
pub use service::{BoundaryOptions, DEFAULT_REQUEST_TIMEOUT, TodoGrpcService};
