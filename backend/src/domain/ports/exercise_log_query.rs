//! Driving port for reading an owner's exercise log.

use async_trait::async_trait;

use crate::domain::{Error, ExerciseLog, LogFilter, UserId};

/// Request for the exercise log of a single owner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExerciseLogRequest {
    pub owner_id: UserId,
    pub filter: LogFilter,
}

/// Domain use-case port for exercise logs.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ExerciseLogQuery: Send + Sync {
    /// Resolve the owner and return the matching exercises.
    async fn exercise_log(&self, request: ExerciseLogRequest) -> Result<ExerciseLog, Error>;
}
