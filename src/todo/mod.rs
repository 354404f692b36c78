//! Todo record management.
//!
//! Create, read, update and delete of named todo records, routed through
//! the validating request [`pipeline`](crate::pipeline). The module follows
//! hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Request contracts in [`requests`], validators in [`validation`] and
//!   handlers in [`handlers`]
//! - Pipeline assembly in [`wiring`]

pub mod adapters;
pub mod domain;
pub mod handlers;
pub mod ports;
pub mod requests;
pub mod validation;
pub mod wiring;

#[cfg(test)]
mod tests;
