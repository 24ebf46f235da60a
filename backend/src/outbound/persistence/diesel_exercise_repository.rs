//! PostgreSQL-backed `ExerciseRepository` implementation using Diesel ORM.
//!
//! Log queries filter on owner and inclusive date range and keep insertion
//! order (`created_at`, then `id`). The window limit, when present, becomes
//! a SQL `LIMIT`.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{ExercisePersistenceError, ExerciseRepository};
use crate::domain::{Description, Exercise, ExerciseDuration, ExerciseId, LogWindow, UserId};

use super::diesel_basic_error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::models::{ExerciseRow, NewExerciseRow};
use super::pool::{DbPool, PoolError};
use super::schema::exercises;

/// Diesel-backed implementation of the [`ExerciseRepository`] port.
#[derive(Clone)]
pub struct DieselExerciseRepository {
    pool: DbPool,
}

impl DieselExerciseRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> ExercisePersistenceError {
    map_basic_pool_error(error, ExercisePersistenceError::connection)
}

fn map_diesel_error(error: diesel::result::Error) -> ExercisePersistenceError {
    map_basic_diesel_error(
        error,
        ExercisePersistenceError::query,
        ExercisePersistenceError::connection,
    )
}

fn row_to_exercise(row: ExerciseRow) -> Result<Exercise, ExercisePersistenceError> {
    let description = Description::new(row.description).map_err(|err| {
        ExercisePersistenceError::query(format!("invalid stored exercise {}: {err}", row.id))
    })?;
    Ok(Exercise::new(
        ExerciseId::from_uuid(row.id),
        UserId::from_uuid(row.owner_id),
        description,
        ExerciseDuration::new(row.duration),
        row.date,
    ))
}

#[async_trait]
impl ExerciseRepository for DieselExerciseRepository {
    async fn insert(&self, exercise: &Exercise) -> Result<(), ExercisePersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = NewExerciseRow {
            id: *exercise.id().as_uuid(),
            owner_id: *exercise.owner_id().as_uuid(),
            description: exercise.description().as_ref(),
            duration: exercise.duration().get(),
            date: exercise.date(),
        };

        diesel::insert_into(exercises::table)
            .values(&row)
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(())
    }

    async fn list_for_owner(
        &self,
        owner_id: &UserId,
        window: &LogWindow,
    ) -> Result<Vec<Exercise>, ExercisePersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let mut query = exercises::table
            .filter(exercises::owner_id.eq(*owner_id.as_uuid()))
            .filter(exercises::date.ge(window.from()))
            .filter(exercises::date.le(window.to()))
            .order((exercises::created_at.asc(), exercises::id.asc()))
            .select(ExerciseRow::as_select())
            .into_boxed();
        if let Some(limit) = window.limit() {
            query = query.limit(i64::from(limit.get()));
        }

        let rows: Vec<ExerciseRow> = query.load(&mut conn).await.map_err(map_diesel_error)?;
        rows.into_iter().map(row_to_exercise).collect()
    }
}
