//! Single-user profile and display theme records.

use super::study::{normalize_name, ValidationError};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Logged-in learner and the hour budget used for daily plans.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    /// Persisted as `dailyHours`; older payloads used `hours`.
    #[serde(rename = "dailyHours", alias = "hours")]
    pub daily_hours: f64,
}

impl User {
    /// Validates and builds a user profile.
    ///
    /// # Errors
    /// - `EmptyUserName` when `name` is blank.
    /// - `NonPositiveDailyHours` when the budget is not a finite positive number.
    pub fn new(name: &str, daily_hours: f64) -> Result<Self, ValidationError> {
        let name = normalize_name(name, ValidationError::EmptyUserName)?;
        if !(daily_hours.is_finite() && daily_hours > 0.0) {
            return Err(ValidationError::NonPositiveDailyHours(daily_hours));
        }
        Ok(Self { name, daily_hours })
    }
}

/// Display theme preference. Has no effect on planning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

impl Display for Theme {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
