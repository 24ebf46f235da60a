//! Exercise domain services.
//!
//! Logging an exercise and reading the log both resolve the owner through the
//! user repository. The add flow writes first and resolves second, so an
//! unknown owner leaves the stored exercise in place and reports `not_found`.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use mockable::Clock;
use serde_json::json;

use crate::domain::ports::{
    AddExerciseRequest, AddExerciseResponse, ExerciseCommand, ExerciseLogQuery,
    ExerciseLogRequest, ExercisePersistenceError, ExerciseRepository, UserRepository,
};
use crate::domain::user_service::map_user_persistence_error;
use crate::domain::{Error, ExerciseLog, User, UserId};

fn map_exercise_persistence_error(error: ExercisePersistenceError) -> Error {
    Error::persistence_failure(error.to_string())
}

/// Exercise service implementing [`ExerciseCommand`] and [`ExerciseLogQuery`].
#[derive(Clone)]
pub struct ExerciseService<U, E> {
    user_repo: Arc<U>,
    exercise_repo: Arc<E>,
    clock: Arc<dyn Clock>,
}

impl<U, E> ExerciseService<U, E> {
    /// Create a new service.
    ///
    /// `clock` supplies "today" for exercises without a date and for the
    /// default upper bound of a log query.
    ///
    /// # Examples
    /// ```no_run
    /// # use std::sync::Arc;
    /// # use mockable::DefaultClock;
    /// # use exercise_tracker::domain::ExerciseService;
    /// # use exercise_tracker::outbound::memory::{InMemoryExerciseRepository, InMemoryUserRepository};
    /// let service = ExerciseService::new(
    ///     Arc::new(InMemoryUserRepository::default()),
    ///     Arc::new(InMemoryExerciseRepository::default()),
    ///     Arc::new(DefaultClock),
    /// );
    /// # let _ = service;
    /// ```
    pub fn new(user_repo: Arc<U>, exercise_repo: Arc<E>, clock: Arc<dyn Clock>) -> Self {
        Self {
            user_repo,
            exercise_repo,
            clock,
        }
    }

    fn today(&self) -> NaiveDate {
        self.clock.utc().date_naive()
    }
}

impl<U, E> ExerciseService<U, E>
where
    U: UserRepository,
{
    async fn resolve_owner(&self, owner_id: &UserId) -> Result<User, Error> {
        self.user_repo
            .find_by_id(owner_id)
            .await
            .map_err(map_user_persistence_error)?
            .ok_or_else(|| {
                Error::not_found(format!("user {owner_id} not found")).with_details(json!({
                    "userId": owner_id.as_ref(),
                    "code": "user_not_found",
                }))
            })
    }
}

#[async_trait]
impl<U, E> ExerciseCommand for ExerciseService<U, E>
where
    U: UserRepository,
    E: ExerciseRepository,
{
    async fn add_exercise(
        &self,
        request: AddExerciseRequest,
    ) -> Result<AddExerciseResponse, Error> {
        let AddExerciseRequest { owner_id, exercise } = request;
        let exercise = exercise.into_exercise(owner_id.clone(), self.today());

        self.exercise_repo
            .insert(&exercise)
            .await
            .map_err(map_exercise_persistence_error)?;

        let owner = self.resolve_owner(&owner_id).await?;
        Ok(AddExerciseResponse { owner, exercise })
    }
}

#[async_trait]
impl<U, E> ExerciseLogQuery for ExerciseService<U, E>
where
    U: UserRepository,
    E: ExerciseRepository,
{
    async fn exercise_log(&self, request: ExerciseLogRequest) -> Result<ExerciseLog, Error> {
        let owner = self.resolve_owner(&request.owner_id).await?;
        let window = request.filter.resolve(self.today());
        if window.is_empty() {
            return Ok(ExerciseLog::new(owner, Vec::new()));
        }

        let entries = self
            .exercise_repo
            .list_for_owner(owner.id(), &window)
            .await
            .map_err(map_exercise_persistence_error)?;
        Ok(ExerciseLog::new(owner, entries))
    }
}

#[cfg(test)]
#[path = "exercise_service_tests.rs"]
mod tests;
