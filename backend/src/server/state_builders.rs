//! Wiring of repositories and services into [`HttpState`].

use std::sync::Arc;

use mockable::{Clock, DefaultClock};
use tracing::warn;

use exercise_tracker::domain::ports::{ExerciseRepository, UserRepository};
use exercise_tracker::domain::{ExerciseService, UserService};
use exercise_tracker::inbound::http::state::HttpState;
use exercise_tracker::outbound::memory::{InMemoryExerciseRepository, InMemoryUserRepository};
use exercise_tracker::outbound::persistence::{DbPool, DieselExerciseRepository, DieselUserRepository};

fn services_over<U, E>(users: Arc<U>, exercises: Arc<E>) -> HttpState
where
    U: UserRepository + 'static,
    E: ExerciseRepository + 'static,
{
    let clock: Arc<dyn Clock> = Arc::new(DefaultClock);
    let user_service = Arc::new(UserService::new(Arc::clone(&users)));
    let exercise_service = Arc::new(ExerciseService::new(users, exercises, clock));
    HttpState::new(
        user_service.clone(),
        user_service,
        exercise_service.clone(),
        exercise_service,
    )
}

/// Build handler state over PostgreSQL when a pool is configured, memory
/// otherwise.
pub(crate) fn build_http_state(db_pool: Option<&DbPool>) -> HttpState {
    match db_pool {
        Some(pool) => services_over(
            Arc::new(DieselUserRepository::new(pool.clone())),
            Arc::new(DieselExerciseRepository::new(pool.clone())),
        ),
        None => {
            warn!("no database configured; records are kept in memory and lost on restart");
            services_over(
                Arc::new(InMemoryUserRepository::default()),
                Arc::new(InMemoryExerciseRepository::default()),
            )
        }
    }
}
