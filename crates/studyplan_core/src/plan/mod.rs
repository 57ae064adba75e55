//! Read-only derivations over a collection snapshot.
//!
//! # Responsibility
//! - Compute completion percentages.
//! - Allocate the daily hour budget across today's pending topics.
//! - Summarize pending topics per weekday.
//!
//! # Invariants
//! - Planners never mutate or persist the snapshot they are given.
//! - Traversal order is collection order, then topic order.

pub mod daily;
pub mod progress;
pub mod weekly;
