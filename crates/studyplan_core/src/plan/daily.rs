//! Greedy daily allocation of the study hour budget.
//!
//! # Invariants
//! - Allocated hours never sum to more than the budget.
//! - Only pending topics scheduled for the plan day are considered.
//! - Topics are taken in collection order; no reordering by size or priority.
//! - A topic cut short by the budget is not carried over to other days.

use crate::model::study::{Collection, SubjectId, TopicId};
use crate::model::weekday::Weekday;

/// One allocation line of a daily plan.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanItem {
    pub subject_id: SubjectId,
    pub topic_id: TopicId,
    pub topic_name: String,
    /// Hours allocated today; at most the topic's estimate.
    pub hours: f64,
}

/// Result of allocating one day's budget.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyPlan {
    pub day: Weekday,
    pub budget_hours: f64,
    pub remaining_hours: f64,
    pub items: Vec<PlanItem>,
}

impl DailyPlan {
    /// Sentinel for "no study scheduled today"; callers should render a
    /// message instead of an empty list.
    pub fn is_nothing_scheduled(&self) -> bool {
        self.items.is_empty()
    }

    pub fn allocated_hours(&self) -> f64 {
        self.items.iter().map(|item| item.hours).sum()
    }
}

/// Allocates `budget_hours` across pending topics scheduled on `today`.
pub fn daily_plan(collection: &Collection, today: Weekday, budget_hours: f64) -> DailyPlan {
    let mut remaining = budget_hours;
    let mut items = Vec::new();

    for (subject, topic) in collection.topics() {
        if topic.completed || topic.day != today || remaining <= 0.0 {
            continue;
        }
        let used = topic.hours.min(remaining);
        items.push(PlanItem {
            subject_id: subject.id,
            topic_id: topic.id,
            topic_name: topic.name.clone(),
            hours: used,
        });
        remaining -= used;
    }

    DailyPlan {
        day: today,
        budget_hours,
        remaining_hours: remaining.max(0.0),
        items,
    }
}
