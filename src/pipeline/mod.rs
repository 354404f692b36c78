//! Request pipeline: validate, then dispatch to exactly one handler.
//!
//! A [`PipelineConfig`] is assembled once at startup, listing every
//! validator and handler instance per request shape. [`Dispatcher::new`]
//! checks that configuration and freezes it; afterwards the dispatcher holds
//! no mutable state and can be shared freely across concurrent calls.
//!
//! For each [`Dispatcher::send`] call:
//!
//! 1. every validator registered for the request shape runs, and all
//!    failure messages are collected in registration order;
//! 2. any failure rejects the request with a [`ValidationFailure`] before a
//!    handler is reached, so rejected requests have no side effects;
//! 3. otherwise the single registered handler is invoked and its result is
//!    returned unchanged.

mod config;
mod dispatcher;
mod request;
mod validation;

pub use config::{PipelineConfig, PipelineConfigError};
pub use dispatcher::{DispatchError, Dispatcher};
pub use request::{Request, RequestHandler, RequestValidator};
pub use validation::ValidationFailure;
