//! Exercise records attributed to a user.
//!
//! An [`Exercise`] is immutable once stored. The owner reference is not
//! enforced at write time; owner resolution happens when the record is read
//! back through the exercise services.

use std::fmt;

use chrono::NaiveDate;
use uuid::Uuid;

use super::UserId;

/// Validation errors returned by the exercise constructors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExerciseValidationError {
    /// The description was missing or blank.
    #[error("description must not be empty")]
    EmptyDescription,
}

/// Server-generated exercise identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ExerciseId(Uuid);

impl ExerciseId {
    /// Generate a new random identifier.
    #[must_use]
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Wrap a UUID read back from storage.
    #[must_use]
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Access the underlying UUID.
    #[must_use]
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for ExerciseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Free-text description of the logged activity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Description(String);

impl Description {
    /// Validate and construct a [`Description`].
    ///
    /// # Examples
    /// ```
    /// use exercise_tracker::domain::Description;
    ///
    /// assert!(Description::new("run").is_ok());
    /// assert!(Description::new("  ").is_err());
    /// ```
    pub fn new(description: impl Into<String>) -> Result<Self, ExerciseValidationError> {
        let description = description.into();
        if description.trim().is_empty() {
            return Err(ExerciseValidationError::EmptyDescription);
        }
        Ok(Self(description))
    }
}

impl AsRef<str> for Description {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl From<Description> for String {
    fn from(value: Description) -> Self {
        value.0
    }
}

/// Duration of an exercise; the unit is a caller convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ExerciseDuration(i32);

impl ExerciseDuration {
    /// Wrap an integer duration.
    #[must_use]
    pub const fn new(value: i32) -> Self {
        Self(value)
    }

    /// Raw integer value.
    #[must_use]
    pub const fn get(self) -> i32 {
        self.0
    }
}

impl From<i32> for ExerciseDuration {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

/// A stored exercise record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exercise {
    id: ExerciseId,
    owner_id: UserId,
    description: Description,
    duration: ExerciseDuration,
    date: NaiveDate,
}

impl Exercise {
    /// Assemble an exercise from validated parts.
    #[must_use]
    pub fn new(
        id: ExerciseId,
        owner_id: UserId,
        description: Description,
        duration: ExerciseDuration,
        date: NaiveDate,
    ) -> Self {
        Self {
            id,
            owner_id,
            description,
            duration,
            date,
        }
    }

    #[must_use]
    pub fn id(&self) -> ExerciseId {
        self.id
    }

    #[must_use]
    pub fn owner_id(&self) -> &UserId {
        &self.owner_id
    }

    #[must_use]
    pub fn description(&self) -> &Description {
        &self.description
    }

    #[must_use]
    pub fn duration(&self) -> ExerciseDuration {
        self.duration
    }

    /// Calendar day the exercise was performed on.
    #[must_use]
    pub fn date(&self) -> NaiveDate {
        self.date
    }
}

/// Draft exercise as submitted by a client.
///
/// `date` is optional; the service fills in the current UTC day when it is
/// absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewExercise {
    pub description: Description,
    pub duration: ExerciseDuration,
    pub date: Option<NaiveDate>,
}

impl NewExercise {
    /// Materialise the draft for `owner_id`, defaulting the date to `today`.
    #[must_use]
    pub fn into_exercise(self, owner_id: UserId, today: NaiveDate) -> Exercise {
        Exercise::new(
            ExerciseId::random(),
            owner_id,
            self.description,
            self.duration,
            self.date.unwrap_or(today),
        )
    }
}
