//! Study planner use-case service.
//!
//! # Responsibility
//! - Orchestrate load → mutate → save for every planner mutation.
//! - Handle login/logout and the theme preference.
//! - Assemble the dashboard view model consumed by presentation layers.
//!
//! # Invariants
//! - A failed mutation leaves persisted state untouched.
//! - Every successful mutation saves the full collection before returning.
//! - Log events carry counts and indexes only, never user-entered text.

use crate::model::study::{Collection, SubjectId, TopicId, ValidationError};
use crate::model::user::{Theme, User};
use crate::model::weekday::Weekday;
use crate::plan::daily::{daily_plan, DailyPlan};
use crate::plan::progress::{overall_progress, subject_progress};
use crate::plan::weekly::{weekly_summary, WeeklySummary};
use crate::repo::state_repo::{RepoError, StateStore};
use crate::service::mutations::{self, OpError};
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Errors surfaced by [`StudyService`].
#[derive(Debug)]
pub enum ServiceError {
    /// Input rejected by a mutation; nothing was saved.
    Op(OpError),
    /// Planning requires a logged-in user.
    NotLoggedIn,
    Repo(RepoError),
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Op(err) => write!(f, "{err}"),
            Self::NotLoggedIn => write!(f, "no user is logged in"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Op(err) => Some(err),
            Self::NotLoggedIn => None,
            Self::Repo(err) => Some(err),
        }
    }
}

impl From<OpError> for ServiceError {
    fn from(value: OpError) -> Self {
        Self::Op(value)
    }
}

impl From<ValidationError> for ServiceError {
    fn from(value: ValidationError) -> Self {
        Self::Op(OpError::Validation(value))
    }
}

impl From<RepoError> for ServiceError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

/// Subject row of the dashboard.
#[derive(Debug, Clone, PartialEq)]
pub struct SubjectView {
    pub id: SubjectId,
    pub name: String,
    pub progress: u8,
    pub topics: Vec<TopicView>,
}

/// Topic row of the dashboard.
#[derive(Debug, Clone, PartialEq)]
pub struct TopicView {
    pub id: TopicId,
    pub name: String,
    pub hours: f64,
    pub day: Weekday,
    pub completed: bool,
}

/// Everything a presentation layer needs for one render.
#[derive(Debug, Clone, PartialEq)]
pub struct Dashboard {
    pub user: User,
    pub theme: Theme,
    pub overall_progress: u8,
    pub subjects: Vec<SubjectView>,
    pub today: DailyPlan,
    pub week: WeeklySummary,
}

/// Planner facade over a state store implementation.
pub struct StudyService<S: StateStore> {
    store: S,
}

impl<S: StateStore> StudyService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Stores the user profile, overwriting any previous one.
    ///
    /// An existing collection is kept; an absent one is initialized empty.
    pub fn login(&self, name: &str, daily_hours: f64) -> ServiceResult<User> {
        let user = User::new(name, daily_hours)?;
        self.store.save_user(&user)?;
        if !self.store.has_subjects()? {
            self.store.save_subjects(&Collection::new())?;
        }
        info!("event=login module=service status=ok");
        Ok(user)
    }

    /// Clears every stored key, including subjects and theme.
    pub fn logout(&self) -> ServiceResult<()> {
        self.store.clear()?;
        info!("event=logout module=service status=ok");
        Ok(())
    }

    pub fn current_user(&self) -> ServiceResult<Option<User>> {
        Ok(self.store.load_user()?)
    }

    pub fn subjects(&self) -> ServiceResult<Collection> {
        Ok(self.store.load_subjects()?)
    }

    pub fn add_subject(&self, name: &str) -> ServiceResult<Collection> {
        self.mutate("subject_add", |collection| {
            mutations::add_subject(collection, name)
        })
    }

    pub fn add_topic(
        &self,
        subject_index: usize,
        name: &str,
        hours: f64,
        day: &str,
    ) -> ServiceResult<Collection> {
        self.mutate("topic_add", |collection| {
            mutations::add_topic(collection, subject_index, name, hours, day)
        })
    }

    pub fn mark_complete(
        &self,
        subject_index: usize,
        topic_index: usize,
    ) -> ServiceResult<Collection> {
        self.mutate("topic_complete", |collection| {
            mutations::mark_complete(collection, subject_index, topic_index)
        })
    }

    pub fn mark_topic_complete(&self, topic_id: TopicId) -> ServiceResult<Collection> {
        self.mutate("topic_complete", |collection| {
            mutations::mark_complete_by_id(collection, topic_id)
        })
    }

    /// Returns the stored theme, `light` when unset.
    pub fn theme(&self) -> ServiceResult<Theme> {
        Ok(self.store.load_theme()?.unwrap_or_default())
    }

    pub fn toggle_theme(&self) -> ServiceResult<Theme> {
        let theme = self.theme()?.toggled();
        self.store.save_theme(theme)?;
        info!("event=theme_toggle module=service status=ok theme={theme}");
        Ok(theme)
    }

    /// Today's allocation for the logged-in user's budget.
    pub fn today_plan(&self, today: Weekday) -> ServiceResult<DailyPlan> {
        let user = self.require_user()?;
        let collection = self.store.load_subjects()?;
        Ok(daily_plan(&collection, today, user.daily_hours))
    }

    pub fn week(&self) -> ServiceResult<WeeklySummary> {
        Ok(weekly_summary(&self.store.load_subjects()?))
    }

    /// Derives the full view model from one snapshot.
    pub fn dashboard(&self, today: Weekday) -> ServiceResult<Dashboard> {
        let user = self.require_user()?;
        let collection = self.store.load_subjects()?;

        let subjects = collection
            .subjects()
            .iter()
            .map(|subject| SubjectView {
                id: subject.id,
                name: subject.name.clone(),
                progress: subject_progress(subject),
                topics: subject
                    .topics
                    .iter()
                    .map(|topic| TopicView {
                        id: topic.id,
                        name: topic.name.clone(),
                        hours: topic.hours,
                        day: topic.day,
                        completed: topic.completed,
                    })
                    .collect(),
            })
            .collect();

        Ok(Dashboard {
            theme: self.theme()?,
            overall_progress: overall_progress(&collection),
            subjects,
            today: daily_plan(&collection, today, user.daily_hours),
            week: weekly_summary(&collection),
            user,
        })
    }

    fn require_user(&self) -> ServiceResult<User> {
        self.store.load_user()?.ok_or(ServiceError::NotLoggedIn)
    }

    fn mutate<F>(&self, event: &str, apply: F) -> ServiceResult<Collection>
    where
        F: FnOnce(&Collection) -> Result<Collection, OpError>,
    {
        let current = self.store.load_subjects()?;
        let next = match apply(&current) {
            Ok(next) => next,
            Err(err) => {
                warn!(
                    "event={event} module=service status=rejected error_code={}",
                    err.code()
                );
                return Err(err.into());
            }
        };
        self.store.save_subjects(&next)?;
        info!(
            "event={event} module=service status=ok subjects={} topics={}",
            next.len(),
            next.topic_count()
        );
        Ok(next)
    }
}
