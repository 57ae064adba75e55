//! Pure mutation operations over collection snapshots.
//!
//! # Responsibility
//! - Add subjects and topics, and mark topics complete.
//! - Report the failing field or index without touching the input snapshot.
//!
//! # Invariants
//! - Every operation is all-or-nothing: on error no new snapshot exists.
//! - Operations never persist; callers save the returned snapshot.
//! - Completion is one-way and idempotent.

use crate::model::study::{Collection, Subject, Topic, TopicId, ValidationError};
use crate::model::weekday::Weekday;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type OpResult<T> = Result<T, OpError>;

/// Address that does not exist in the current snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IndexError {
    Subject {
        index: usize,
        len: usize,
    },
    Topic {
        subject_index: usize,
        index: usize,
        len: usize,
    },
    UnknownTopic(TopicId),
}

impl Display for IndexError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Subject { index, len } => {
                write!(f, "subject index {index} out of range ({len} subjects)")
            }
            Self::Topic {
                subject_index,
                index,
                len,
            } => write!(
                f,
                "topic index {index} out of range for subject {subject_index} ({len} topics)"
            ),
            Self::UnknownTopic(id) => write!(f, "topic not found: {id}"),
        }
    }
}

impl Error for IndexError {}

/// Failure of a mutation operation.
#[derive(Debug, Clone, PartialEq)]
pub enum OpError {
    Validation(ValidationError),
    Index(IndexError),
}

impl OpError {
    /// Stable machine-readable code, free of user input.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Validation(err) => err.code(),
            Self::Index(IndexError::UnknownTopic(_)) => "unknown_topic",
            Self::Index(_) => "index_out_of_range",
        }
    }
}

impl Display for OpError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Index(err) => write!(f, "{err}"),
        }
    }
}

impl Error for OpError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Index(err) => Some(err),
        }
    }
}

impl From<ValidationError> for OpError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<IndexError> for OpError {
    fn from(value: IndexError) -> Self {
        Self::Index(value)
    }
}

/// Appends an empty subject named `name` (trimmed).
pub fn add_subject(collection: &Collection, name: &str) -> OpResult<Collection> {
    let subject = Subject::new(name)?;
    let mut next = collection.clone();
    next.subjects_mut().push(subject);
    Ok(next)
}

/// Appends a pending topic to the subject at `subject_index`.
///
/// # Errors
/// - `IndexError::Subject` when `subject_index` is out of range.
/// - `ValidationError` for a blank name, non-positive hours or unknown day.
pub fn add_topic(
    collection: &Collection,
    subject_index: usize,
    name: &str,
    hours: f64,
    day: &str,
) -> OpResult<Collection> {
    check_subject_index(collection, subject_index)?;
    let day: Weekday = day.parse()?;
    let topic = Topic::new(name, hours, day)?;

    let mut next = collection.clone();
    next.subjects_mut()[subject_index].topics.push(topic);
    Ok(next)
}

/// Marks the topic at `(subject_index, topic_index)` as completed.
pub fn mark_complete(
    collection: &Collection,
    subject_index: usize,
    topic_index: usize,
) -> OpResult<Collection> {
    check_subject_index(collection, subject_index)?;
    let len = collection.subjects()[subject_index].topics.len();
    if topic_index >= len {
        return Err(IndexError::Topic {
            subject_index,
            index: topic_index,
            len,
        }
        .into());
    }

    let mut next = collection.clone();
    next.subjects_mut()[subject_index].topics[topic_index].complete();
    Ok(next)
}

/// Marks a topic complete by stable ID, independent of its current position.
pub fn mark_complete_by_id(collection: &Collection, topic_id: TopicId) -> OpResult<Collection> {
    let (subject_index, topic_index) = collection
        .position_of_topic(topic_id)
        .ok_or(IndexError::UnknownTopic(topic_id))?;
    mark_complete(collection, subject_index, topic_index)
}

fn check_subject_index(collection: &Collection, index: usize) -> Result<(), IndexError> {
    if index < collection.len() {
        Ok(())
    } else {
        Err(IndexError::Subject {
            index,
            len: collection.len(),
        })
    }
}
