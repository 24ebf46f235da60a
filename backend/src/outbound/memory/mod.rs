//! In-process repositories used when no database is configured.
//!
//! Records live in `Mutex`-guarded vectors, so insertion order doubles as
//! the list order exposed by the ports. Contents are lost on restart.

mod exercise_repository;
mod user_repository;

pub use exercise_repository::InMemoryExerciseRepository;
pub use user_repository::InMemoryUserRepository;
