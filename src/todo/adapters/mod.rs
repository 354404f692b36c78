//! Adapter implementations for todo persistence ports.

pub mod memory;
pub mod postgres;
