//! Integration tests for the Diesel repositories against embedded PostgreSQL.
//!
//! Each test provisions a fresh, migrated database on an embedded cluster.
//! Set `SKIP_TEST_CLUSTER=1` to skip when the cluster cannot start.

use std::num::NonZeroU32;

use chrono::NaiveDate;
use exercise_tracker::domain::ports::{ExerciseRepository, UserRepository};
use exercise_tracker::domain::{
    Description, Exercise, ExerciseDuration, ExerciseId, LogWindow, User, UserId, Username,
};
use exercise_tracker::outbound::persistence::{
    DbPool, DieselExerciseRepository, DieselUserRepository, PoolConfig, run_pending_migrations,
};
use pg_embedded_setup_unpriv::TestCluster;
use rstest::{fixture, rstest};
use tokio::runtime::Runtime;

#[path = "support/pg_embed.rs"]
mod pg_embed;

mod support;

use support::{handle_cluster_setup_failure, migrated_database};

struct TestContext {
    runtime: Runtime,
    users: DieselUserRepository,
    exercises: DieselExerciseRepository,
    database_url: String,
    _cluster: TestCluster,
}

fn setup_context() -> Result<TestContext, String> {
    let runtime = Runtime::new().map_err(|err| err.to_string())?;
    let cluster = pg_embed::test_cluster()?;
    let database_url = migrated_database(&cluster)?;
    let config = PoolConfig::new(&database_url).with_max_size(2);
    let pool = runtime
        .block_on(DbPool::new(config))
        .map_err(|err| err.to_string())?;

    Ok(TestContext {
        runtime,
        users: DieselUserRepository::new(pool.clone()),
        exercises: DieselExerciseRepository::new(pool),
        database_url,
        _cluster: cluster,
    })
}

#[fixture]
fn context() -> Option<TestContext> {
    match setup_context() {
        Ok(context) => Some(context),
        Err(reason) => handle_cluster_setup_failure(reason),
    }
}

fn user(name: &str) -> User {
    User::new(UserId::random(), Username::new(name).expect("valid username"))
}

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

fn exercise(owner: &User, description: &str, date: NaiveDate) -> Exercise {
    Exercise::new(
        ExerciseId::random(),
        owner.id().clone(),
        Description::new(description).expect("valid description"),
        ExerciseDuration::new(30),
        date,
    )
}

fn descriptions(entries: &[Exercise]) -> Vec<&str> {
    entries
        .iter()
        .map(|entry| entry.description().as_ref())
        .collect()
}

#[rstest]
fn users_round_trip_in_insertion_order(context: Option<TestContext>) {
    let Some(ctx) = context else {
        return;
    };
    let alice = user("alice");
    let bob = user("bob");
    let duplicate_name = user("alice");

    ctx.runtime.block_on(async {
        for user in [&alice, &bob, &duplicate_name] {
            ctx.users.insert(user).await.expect("insert succeeds");
        }

        let listed = ctx.users.list().await.expect("list succeeds");
        assert_eq!(listed, vec![alice.clone(), bob.clone(), duplicate_name.clone()]);

        let found = ctx.users.find_by_id(bob.id()).await.expect("lookup succeeds");
        assert_eq!(found, Some(bob.clone()));

        let missing = ctx
            .users
            .find_by_id(&UserId::random())
            .await
            .expect("lookup succeeds");
        assert!(missing.is_none());
    });
}

#[rstest]
fn exercise_log_filters_by_owner_and_date_keeping_insertion_order(
    context: Option<TestContext>,
) {
    let Some(ctx) = context else {
        return;
    };
    let owner = user("alice");
    let other = user("bob");
    // Inserted out of date order; results must follow insertion.
    let march = exercise(&owner, "march", day(2023, 3, 1));
    let january = exercise(&owner, "january", day(2023, 1, 1));
    let february = exercise(&owner, "february", day(2023, 2, 1));
    let foreign = exercise(&other, "foreign", day(2023, 2, 1));

    ctx.runtime.block_on(async {
        for entry in [&march, &january, &february, &foreign] {
            ctx.exercises.insert(entry).await.expect("insert succeeds");
        }

        let everything = LogWindow::new(day(1970, 1, 1), day(2024, 1, 1), None);
        let all = ctx
            .exercises
            .list_for_owner(owner.id(), &everything)
            .await
            .expect("list succeeds");
        assert_eq!(descriptions(&all), ["march", "january", "february"]);

        let mid = LogWindow::new(day(2023, 1, 15), day(2023, 2, 15), None);
        let filtered = ctx
            .exercises
            .list_for_owner(owner.id(), &mid)
            .await
            .expect("list succeeds");
        assert_eq!(filtered, vec![february.clone()]);

        let inclusive = LogWindow::new(day(2023, 1, 1), day(2023, 3, 1), NonZeroU32::new(2));
        let limited = ctx
            .exercises
            .list_for_owner(owner.id(), &inclusive)
            .await
            .expect("list succeeds");
        assert_eq!(descriptions(&limited), ["march", "january"]);
    });
}

#[rstest]
fn exercises_for_unknown_owners_are_stored(context: Option<TestContext>) {
    let Some(ctx) = context else {
        return;
    };
    let ghost = user("ghost");
    let entry = exercise(&ghost, "orphan", day(2023, 5, 5));

    ctx.runtime.block_on(async {
        ctx.exercises.insert(&entry).await.expect("insert succeeds");
        let window = LogWindow::new(day(2023, 1, 1), day(2023, 12, 31), None);
        let listed = ctx
            .exercises
            .list_for_owner(ghost.id(), &window)
            .await
            .expect("list succeeds");
        assert_eq!(listed, vec![entry.clone()]);
    });
}

#[rstest]
fn migrations_are_idempotent(context: Option<TestContext>) {
    let Some(ctx) = context else {
        return;
    };
    let applied = run_pending_migrations(&ctx.database_url).expect("migrations rerun");
    assert_eq!(applied, 0);
}
