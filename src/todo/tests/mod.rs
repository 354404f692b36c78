//! Unit tests for the todo module.
//!
//! Tests are organised by layer: domain invariants, handler orchestration
//! against mocked ports, and the assembled pipeline.
