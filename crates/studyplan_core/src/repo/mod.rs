//! Persistence contracts for planner state.
//!
//! # Responsibility
//! - Define the key-value store contract the planner orchestration relies on.
//! - Keep SQL and JSON encoding details out of planners and services.
//!
//! # Invariants
//! - A missing `subjects` key reads as an empty collection, not an error.
//! - Read paths reject malformed payloads instead of masking them.

pub mod state_repo;
