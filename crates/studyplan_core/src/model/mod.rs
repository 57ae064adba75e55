//! Study planning domain model.
//!
//! # Responsibility
//! - Define canonical subject/topic/user records shared by planners and storage.
//! - Keep field-level validation next to the records it protects.
//!
//! # Invariants
//! - Every subject and topic carries a stable uuid assigned at creation.
//! - Topic order inside a subject, and subject order inside a collection, is
//!   significant for planning tie-breaks.

pub mod study;
pub mod user;
pub mod weekday;
