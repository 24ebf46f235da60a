//! Driving port for logging exercises.

use async_trait::async_trait;

use crate::domain::{Error, Exercise, NewExercise, User, UserId};

/// Request to log an exercise against an owner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddExerciseRequest {
    pub owner_id: UserId,
    pub exercise: NewExercise,
}

/// Stored exercise together with its resolved owner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddExerciseResponse {
    pub owner: User,
    pub exercise: Exercise,
}

/// Domain use-case port for adding exercises.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ExerciseCommand: Send + Sync {
    /// Store the exercise, then resolve its owner.
    ///
    /// The exercise is written before the owner lookup; an unknown owner
    /// yields a `not_found` error and the stored row is kept.
    async fn add_exercise(
        &self,
        request: AddExerciseRequest,
    ) -> Result<AddExerciseResponse, Error>;
}
