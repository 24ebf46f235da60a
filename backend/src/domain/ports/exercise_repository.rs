//! Port abstraction for exercise persistence adapters and their errors.
use async_trait::async_trait;

use crate::domain::{Exercise, LogWindow, UserId};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by exercise repository adapters.
    pub enum ExercisePersistenceError {
        /// Repository connection could not be established.
        Connection { message: String } => "exercise repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "exercise repository query failed: {message}",
    }
}

/// Driven port for storing exercises and reading an owner's log.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ExerciseRepository: Send + Sync {
    /// Store a new exercise. The owner reference is not checked.
    async fn insert(&self, exercise: &Exercise) -> Result<(), ExercisePersistenceError>;

    /// Return the exercises of `owner_id` whose date lies inside `window`.
    ///
    /// Results keep insertion order and are truncated to the window limit
    /// when one is set. No date sort is applied.
    async fn list_for_owner(
        &self,
        owner_id: &UserId,
        window: &LogWindow,
    ) -> Result<Vec<Exercise>, ExercisePersistenceError>;
}
