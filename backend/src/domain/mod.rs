//! Domain primitives, services and ports.
//!
//! Purpose: define the strongly typed entities shared by the HTTP and
//! persistence adapters and the services implementing the driving ports.
//! Nothing in here depends on Actix, Diesel or utoipa.
//!
//! Public surface:
//! - `Error` / `ErrorCode`: transport-agnostic error payload.
//! - `TraceId`: request-scoped correlation identifier.
//! - `User`, `UserId`, `Username`: exercise owners.
//! - `Exercise`, `NewExercise`: logged activities.
//! - `LogFilter`, `LogWindow`, `ExerciseLog`: log filtering and results.
//! - `UserService`, `ExerciseService`: driving port implementations.

pub mod error;
pub mod exercise;
pub mod exercise_log;
mod exercise_service;
pub mod ports;
pub mod trace_id;
pub mod user;
mod user_service;

pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::exercise::{
    Description, Exercise, ExerciseDuration, ExerciseId, ExerciseValidationError, NewExercise,
};
pub use self::exercise_log::{ExerciseLog, LogFilter, LogWindow, default_from};
pub use self::exercise_service::ExerciseService;
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{User, UserId, UserValidationError, Username};
pub use self::user_service::UserService;

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use exercise_tracker::domain::{ApiResult, Error};
///
/// fn lookup() -> ApiResult<()> {
///     Err(Error::not_found("unknown user"))
/// }
/// assert!(lookup().is_err());
/// ```
pub type ApiResult<T> = Result<T, Error>;
