//! Core planning logic for the study planner.
//! Owns the subject/topic model, progress and plan derivations, and the
//! storage contract; presentation layers only consume its view models.

pub mod db;
pub mod logging;
pub mod model;
pub mod plan;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::study::{Collection, Subject, SubjectId, Topic, TopicId, ValidationError};
pub use model::user::{Theme, User};
pub use model::weekday::Weekday;
pub use plan::daily::{daily_plan, DailyPlan, PlanItem};
pub use plan::progress::{overall_progress, subject_progress, ProgressTally};
pub use plan::weekly::{weekly_summary, DaySummary, WeeklySummary};
pub use repo::state_repo::{MemoryStateStore, RepoError, RepoResult, SqliteStateStore, StateStore};
pub use service::mutations::{
    add_subject, add_topic, mark_complete, mark_complete_by_id, IndexError, OpError, OpResult,
};
pub use service::study_service::{
    Dashboard, ServiceError, ServiceResult, StudyService, SubjectView, TopicView,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
