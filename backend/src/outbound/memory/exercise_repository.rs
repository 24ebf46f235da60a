//! In-memory `ExerciseRepository`.

use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use crate::domain::ports::{ExercisePersistenceError, ExerciseRepository};
use crate::domain::{Exercise, LogWindow, UserId};

/// `ExerciseRepository` storing exercises in insertion order.
#[derive(Debug, Default)]
pub struct InMemoryExerciseRepository {
    exercises: Mutex<Vec<Exercise>>,
}

impl InMemoryExerciseRepository {
    fn exercises(&self) -> Result<MutexGuard<'_, Vec<Exercise>>, ExercisePersistenceError> {
        self.exercises
            .lock()
            .map_err(|_| ExercisePersistenceError::connection("exercise store lock poisoned"))
    }
}

#[async_trait]
impl ExerciseRepository for InMemoryExerciseRepository {
    async fn insert(&self, exercise: &Exercise) -> Result<(), ExercisePersistenceError> {
        self.exercises()?.push(exercise.clone());
        Ok(())
    }

    async fn list_for_owner(
        &self,
        owner_id: &UserId,
        window: &LogWindow,
    ) -> Result<Vec<Exercise>, ExercisePersistenceError> {
        let limit = window
            .limit()
            .and_then(|limit| usize::try_from(limit.get()).ok())
            .unwrap_or(usize::MAX);

        Ok(self
            .exercises()?
            .iter()
            .filter(|exercise| exercise.owner_id() == owner_id && window.contains(exercise.date()))
            .take(limit)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use std::num::NonZeroU32;

    use super::*;
    use crate::domain::{Description, ExerciseDuration, ExerciseId};
    use chrono::NaiveDate;
    use rstest::{fixture, rstest};

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    fn exercise(owner: &UserId, description: &str, date: NaiveDate) -> Exercise {
        Exercise::new(
            ExerciseId::random(),
            owner.clone(),
            Description::new(description).expect("valid description"),
            ExerciseDuration::new(10),
            date,
        )
    }

    struct Seeded {
        repo: InMemoryExerciseRepository,
        owner: UserId,
    }

    #[fixture]
    async fn seeded() -> Seeded {
        let repo = InMemoryExerciseRepository::default();
        let owner = UserId::random();
        let other = UserId::random();
        for (description, date) in [
            ("march", day(2023, 3, 1)),
            ("january", day(2023, 1, 1)),
            ("february", day(2023, 2, 1)),
        ] {
            repo.insert(&exercise(&owner, description, date))
                .await
                .expect("insert exercise");
        }
        repo.insert(&exercise(&other, "other", day(2023, 2, 1)))
            .await
            .expect("insert foreign exercise");
        Seeded { repo, owner }
    }

    fn descriptions(entries: &[Exercise]) -> Vec<&str> {
        entries
            .iter()
            .map(|entry| entry.description().as_ref())
            .collect()
    }

    #[rstest]
    #[tokio::test]
    async fn unbounded_window_keeps_insertion_order(#[future] seeded: Seeded) {
        let Seeded { repo, owner } = seeded.await;
        let window = LogWindow::new(day(1970, 1, 1), day(2030, 1, 1), None);

        let entries = repo.list_for_owner(&owner, &window).await.expect("list");

        assert_eq!(descriptions(&entries), vec!["march", "january", "february"]);
    }

    #[rstest]
    #[tokio::test]
    async fn date_range_is_inclusive_and_owner_scoped(#[future] seeded: Seeded) {
        let Seeded { repo, owner } = seeded.await;
        let window = LogWindow::new(day(2023, 1, 15), day(2023, 2, 15), None);

        let entries = repo.list_for_owner(&owner, &window).await.expect("list");

        assert_eq!(descriptions(&entries), vec!["february"]);
    }

    #[rstest]
    #[tokio::test]
    async fn limit_truncates_in_storage_order(#[future] seeded: Seeded) {
        let Seeded { repo, owner } = seeded.await;
        let window = LogWindow::new(day(1970, 1, 1), day(2030, 1, 1), NonZeroU32::new(2));

        let entries = repo.list_for_owner(&owner, &window).await.expect("list");

        assert_eq!(descriptions(&entries), vec!["march", "january"]);
    }
}
