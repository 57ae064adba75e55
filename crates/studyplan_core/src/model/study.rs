//! Subject/topic records and the collection aggregate.
//!
//! # Responsibility
//! - Define the persisted shape of subjects and topics.
//! - Provide constructors that enforce field-level invariants.
//! - Offer ordered iteration plus stable-id lookup over the collection.
//!
//! # Invariants
//! - `name` fields are non-blank and stored trimmed.
//! - `hours` is finite and strictly positive.
//! - `completed` only ever moves from `false` to `true`.

use super::weekday::Weekday;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier of a subject.
pub type SubjectId = Uuid;
/// Stable identifier of a topic.
pub type TopicId = Uuid;

/// Field-level validation failure for planner inputs.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Subject name is blank after trim.
    EmptySubjectName,
    /// Topic name is blank after trim.
    EmptyTopicName,
    /// Topic effort is zero, negative or not a finite number.
    NonPositiveHours(f64),
    /// Day label is not one of `Mon..Sun`.
    InvalidDay(String),
    /// User name is blank after trim.
    EmptyUserName,
    /// Daily budget is zero, negative or not a finite number.
    NonPositiveDailyHours(f64),
}

impl ValidationError {
    /// Stable machine-readable code, free of user input.
    pub fn code(&self) -> &'static str {
        match self {
            Self::EmptySubjectName => "empty_subject_name",
            Self::EmptyTopicName => "empty_topic_name",
            Self::NonPositiveHours(_) => "non_positive_hours",
            Self::InvalidDay(_) => "invalid_day",
            Self::EmptyUserName => "empty_user_name",
            Self::NonPositiveDailyHours(_) => "non_positive_daily_hours",
        }
    }
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptySubjectName => write!(f, "subject name must not be blank"),
            Self::EmptyTopicName => write!(f, "topic name must not be blank"),
            Self::NonPositiveHours(value) => {
                write!(f, "topic hours must be a positive number, got {value}")
            }
            Self::InvalidDay(value) => {
                write!(f, "invalid day `{value}`; expected Mon|Tue|Wed|Thu|Fri|Sat|Sun")
            }
            Self::EmptyUserName => write!(f, "user name must not be blank"),
            Self::NonPositiveDailyHours(value) => {
                write!(f, "daily hours must be a positive number, got {value}")
            }
        }
    }
}

impl Error for ValidationError {}

/// One study item with an effort estimate and a scheduled weekday.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Topic {
    /// Generated on load for records persisted before ids existed.
    #[serde(default = "Uuid::new_v4")]
    pub id: TopicId,
    pub name: String,
    /// Estimated effort in hours.
    pub hours: f64,
    pub day: Weekday,
    #[serde(default)]
    pub completed: bool,
}

impl Topic {
    /// Creates a pending topic with a generated stable ID.
    ///
    /// # Errors
    /// - `EmptyTopicName` when `name` is blank.
    /// - `NonPositiveHours` when `hours` is not a finite positive number.
    pub fn new(name: &str, hours: f64, day: Weekday) -> Result<Self, ValidationError> {
        let name = normalize_name(name, ValidationError::EmptyTopicName)?;
        ensure_positive_hours(hours)?;
        Ok(Self {
            id: Uuid::new_v4(),
            name,
            hours,
            day,
            completed: false,
        })
    }

    /// Marks the topic as done. Calling it again is a no-op.
    pub fn complete(&mut self) {
        self.completed = true;
    }

    /// Returns whether the topic still needs study time.
    pub fn is_pending(&self) -> bool {
        !self.completed
    }

    /// Label used by weekly listings, e.g. `Limits (1.5h)`.
    pub fn effort_label(&self) -> String {
        format!("{} ({}h)", self.name, self.hours)
    }

    /// Checks invariants on a topic that did not come through [`Topic::new`].
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::EmptyTopicName);
        }
        ensure_positive_hours(self.hours)
    }
}

/// Top-level study category owning an ordered list of topics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subject {
    #[serde(default = "Uuid::new_v4")]
    pub id: SubjectId,
    pub name: String,
    #[serde(default)]
    pub topics: Vec<Topic>,
}

impl Subject {
    /// Creates a subject with no topics and a generated stable ID.
    pub fn new(name: &str) -> Result<Self, ValidationError> {
        let name = normalize_name(name, ValidationError::EmptySubjectName)?;
        Ok(Self {
            id: Uuid::new_v4(),
            name,
            topics: Vec::new(),
        })
    }

    /// Returns `(done, total)` topic counts.
    pub fn completion_counts(&self) -> (usize, usize) {
        let done = self.topics.iter().filter(|topic| topic.completed).count();
        (done, self.topics.len())
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::EmptySubjectName);
        }
        self.topics.iter().try_for_each(Topic::validate)
    }
}

/// Ordered set of subjects; the root aggregate read by every planner.
///
/// Serialized as a bare JSON array of subjects.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Collection {
    subjects: Vec<Subject>,
}

impl Collection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subjects(&self) -> &[Subject] {
        &self.subjects
    }

    pub fn len(&self) -> usize {
        self.subjects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subjects.is_empty()
    }

    pub fn subject_at(&self, index: usize) -> Option<&Subject> {
        self.subjects.get(index)
    }

    /// Looks up a subject by stable ID.
    pub fn subject(&self, id: SubjectId) -> Option<&Subject> {
        self.subjects.iter().find(|subject| subject.id == id)
    }

    /// Looks up a topic by stable ID together with its owning subject.
    pub fn topic(&self, id: TopicId) -> Option<(&Subject, &Topic)> {
        self.topics().find(|(_, topic)| topic.id == id)
    }

    /// Resolves a topic ID to its `(subject_index, topic_index)` position in
    /// this snapshot.
    pub fn position_of_topic(&self, id: TopicId) -> Option<(usize, usize)> {
        self.subjects
            .iter()
            .enumerate()
            .find_map(|(subject_index, subject)| {
                subject
                    .topics
                    .iter()
                    .position(|topic| topic.id == id)
                    .map(|topic_index| (subject_index, topic_index))
            })
    }

    /// Iterates every topic in collection order, then topic order.
    pub fn topics(&self) -> impl Iterator<Item = (&Subject, &Topic)> + '_ {
        self.subjects
            .iter()
            .flat_map(|subject| subject.topics.iter().map(move |topic| (subject, topic)))
    }

    /// Total number of topics across all subjects.
    pub fn topic_count(&self) -> usize {
        self.subjects.iter().map(|subject| subject.topics.len()).sum()
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        self.subjects.iter().try_for_each(Subject::validate)
    }

    pub(crate) fn subjects_mut(&mut self) -> &mut Vec<Subject> {
        &mut self.subjects
    }
}

impl From<Vec<Subject>> for Collection {
    fn from(subjects: Vec<Subject>) -> Self {
        Self { subjects }
    }
}

pub(crate) fn normalize_name(value: &str, blank: ValidationError) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(blank);
    }
    Ok(trimmed.to_string())
}

fn ensure_positive_hours(hours: f64) -> Result<(), ValidationError> {
    if hours.is_finite() && hours > 0.0 {
        Ok(())
    } else {
        Err(ValidationError::NonPositiveHours(hours))
    }
}

#[cfg(test)]
mod tests {
    use super::{Collection, Subject, Topic, ValidationError};
    use crate::model::weekday::Weekday;

    #[test]
    fn topic_new_trims_name_and_starts_pending() {
        let topic = Topic::new("  Limits ", 1.5, Weekday::Tue).unwrap();
        assert_eq!(topic.name, "Limits");
        assert!(topic.is_pending());
        assert_eq!(topic.effort_label(), "Limits (1.5h)");
    }

    #[test]
    fn topic_new_rejects_bad_hours() {
        for hours in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let err = Topic::new("x", hours, Weekday::Mon).unwrap_err();
            assert!(matches!(err, ValidationError::NonPositiveHours(_)));
        }
    }

    #[test]
    fn whole_hours_render_without_fraction() {
        let topic = Topic::new("Vectors", 2.0, Weekday::Mon).unwrap();
        assert_eq!(topic.effort_label(), "Vectors (2h)");
    }

    #[test]
    fn legacy_records_without_ids_get_fresh_ids() {
        let json = r#"[{"name":"Math","topics":[{"name":"Limits","hours":2,"day":"Mon","completed":false}]}]"#;
        let collection: Collection = serde_json::from_str(json).unwrap();
        let (subject, topic) = collection.topics().next().unwrap();
        assert!(!subject.id.is_nil());
        assert_eq!(collection.position_of_topic(topic.id), Some((0, 0)));
        assert_eq!(topic.hours, 2.0);
    }

    #[test]
    fn subject_validate_reports_invalid_topic() {
        let mut subject = Subject::new("Math").unwrap();
        let mut topic = Topic::new("Limits", 1.0, Weekday::Mon).unwrap();
        topic.hours = 0.0;
        subject.topics.push(topic);
        assert!(matches!(
            subject.validate(),
            Err(ValidationError::NonPositiveHours(_))
        ));
    }
}
