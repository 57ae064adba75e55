//! Per-weekday listing of pending topics.

use crate::model::study::Collection;
use crate::model::weekday::Weekday;

/// Pending topic labels for one weekday.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DaySummary {
    pub day: Weekday,
    /// Labels formatted as `name (hours h)`, in collection order.
    pub topics: Vec<String>,
}

impl DaySummary {
    pub fn is_free(&self) -> bool {
        self.topics.is_empty()
    }
}

/// Seven day summaries, Monday first. Free days are kept, never dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeeklySummary {
    days: Vec<DaySummary>,
}

impl WeeklySummary {
    /// Always seven entries in `Weekday::ALL` order.
    pub fn days(&self) -> &[DaySummary] {
        &self.days
    }

    pub fn day(&self, day: Weekday) -> &DaySummary {
        &self.days[day.index()]
    }
}

/// Groups every pending topic under its scheduled weekday.
pub fn weekly_summary(collection: &Collection) -> WeeklySummary {
    let days = Weekday::ALL
        .into_iter()
        .map(|day| DaySummary {
            day,
            topics: collection
                .topics()
                .filter(|(_, topic)| topic.is_pending() && topic.day == day)
                .map(|(_, topic)| topic.effort_label())
                .collect(),
        })
        .collect();
    WeeklySummary { days }
}
