//! Todo gRPC service built around a validating request pipeline.
//!
//! Every call is turned into a command or query and sent through a
//! dispatcher that runs the request's validators before its handler.
//! Handlers talk to storage only through repository ports.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain**: the todo entity and its invariants
//! - **Ports**: read and write repository traits
//! - **Adapters**: in-memory and `PostgreSQL` repositories, and the gRPC
//!   boundary
//!
//! # Modules
//!
//! - [`pipeline`]: generic request, validator and handler dispatch
//! - [`todo`]: todo domain, requests, handlers and storage
//! - [`grpc`]: `todo.v1.TodoService` transport adapter
//! - [`config`]: layered service configuration
//! - [`telemetry`]: tracing subscriber setup

pub mod config;
pub mod grpc;
pub mod pipeline;
pub mod telemetry;
pub mod todo;
