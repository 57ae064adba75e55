//! Planner use-case layer.
//!
//! # Responsibility
//! - `mutations`: pure snapshot-in, snapshot-out edits.
//! - `study_service`: orchestration over a state store.

pub mod mutations;
pub mod study_service;
