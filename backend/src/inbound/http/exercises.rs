//! Exercise API handlers.
//!
//! ```text
//! POST /api/users/{id}/exercises   description=run&duration=30&date=2023-01-01
//! GET  /api/users/{id}/logs?from=2023-01-01&to=2023-12-31&limit=10
//! ```
//!
//! Bodies are read loosely (`duration` may be a number or a numeric string)
//! and coerced by [`crate::inbound::http::validation`] before the domain is
//! called. Dates are echoed in the `Www Mmm DD YYYY` form.

use actix_web::{get, post, web};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;
use utoipa::{IntoParams, ToSchema};

use crate::domain::ports::{AddExerciseRequest, AddExerciseResponse, ExerciseLogRequest};
use crate::domain::{
    Description, Error, Exercise, ExerciseDuration, ExerciseLog, ExerciseValidationError,
    LogFilter, NewExercise, UserId,
};
use crate::inbound::http::ApiResult;
use crate::inbound::http::extractors::{JsonOrForm, into_body};
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{
    FieldName, coerce_integer, parse_optional_count, parse_optional_date, parse_user_id,
    require_text,
};

const HUMAN_DATE_FORMAT: &str = "%a %b %d %Y";

fn human_date(date: NaiveDate) -> String {
    date.format(HUMAN_DATE_FORMAT).to_string()
}

fn owner_id_from_path(raw: &str) -> Result<UserId, Error> {
    parse_user_id(raw, FieldName::new("id"))
}

/// Request body for `POST /api/users/{id}/exercises`.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct AddExerciseBody {
    #[schema(example = "run")]
    pub description: Option<String>,
    /// Minutes; a JSON number or a numeric string.
    #[schema(value_type = Option<i32>, example = 30)]
    pub duration: Option<Value>,
    /// `YYYY-MM-DD` or RFC 3339; defaults to today (UTC).
    #[schema(example = "2023-01-01")]
    pub date: Option<String>,
}

impl TryFrom<AddExerciseBody> for NewExercise {
    type Error = Error;

    fn try_from(body: AddExerciseBody) -> Result<Self, Self::Error> {
        let description_field = FieldName::new("description");
        let description = require_text(body.description, description_field)
            .and_then(|raw| Description::new(raw).map_err(map_exercise_validation_error))?;
        let duration = coerce_integer(body.duration.as_ref(), FieldName::new("duration"))?;
        let date = parse_optional_date(body.date.as_deref(), FieldName::new("date"))?;
        Ok(NewExercise {
            description,
            duration: ExerciseDuration::new(duration),
            date,
        })
    }
}

fn map_exercise_validation_error(err: ExerciseValidationError) -> Error {
    match err {
        ExerciseValidationError::EmptyDescription => Error::invalid_request(err.to_string())
            .with_details(serde_json::json!({
                "field": "description",
                "code": "missing_field",
            })),
    }
}

/// Stored exercise echoed with its owner's identity.
#[derive(Debug, Serialize, ToSchema)]
pub struct ExerciseResponse {
    #[schema(example = "alice")]
    pub username: String,
    /// Owner identifier.
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    pub id: String,
    #[schema(example = "run")]
    pub description: String,
    #[schema(example = 30)]
    pub duration: i32,
    #[schema(example = "Sun Jan 01 2023")]
    pub date: String,
}

impl From<AddExerciseResponse> for ExerciseResponse {
    fn from(value: AddExerciseResponse) -> Self {
        let AddExerciseResponse { owner, exercise } = value;
        Self {
            username: owner.username().to_string(),
            id: owner.id().to_string(),
            description: exercise.description().as_ref().to_owned(),
            duration: exercise.duration().get(),
            date: human_date(exercise.date()),
        }
    }
}

/// Query string accepted by `GET /api/users/{id}/logs`.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct LogQueryParams {
    /// Earliest date (inclusive), `YYYY-MM-DD`; defaults to 1970-01-01.
    pub from: Option<String>,
    /// Latest date (inclusive), `YYYY-MM-DD`; defaults to today (UTC).
    pub to: Option<String>,
    /// Maximum number of entries; `0` means no limit.
    #[param(value_type = Option<u32>)]
    pub limit: Option<String>,
}

impl TryFrom<LogQueryParams> for LogFilter {
    type Error = Error;

    fn try_from(params: LogQueryParams) -> Result<Self, Self::Error> {
        Ok(LogFilter {
            from: parse_optional_date(params.from.as_deref(), FieldName::new("from"))?,
            to: parse_optional_date(params.to.as_deref(), FieldName::new("to"))?,
            limit: parse_optional_count(params.limit.as_deref(), FieldName::new("limit"))?,
        })
    }
}

/// Single entry of an exercise log.
#[derive(Debug, Serialize, ToSchema)]
pub struct LogEntry {
    #[schema(example = "run")]
    pub description: String,
    #[schema(example = 30)]
    pub duration: i32,
    #[schema(example = "Sun Jan 01 2023")]
    pub date: String,
}

impl From<&Exercise> for LogEntry {
    fn from(exercise: &Exercise) -> Self {
        Self {
            description: exercise.description().as_ref().to_owned(),
            duration: exercise.duration().get(),
            date: human_date(exercise.date()),
        }
    }
}

/// Owner identity plus the filtered exercises.
#[derive(Debug, Serialize, ToSchema)]
pub struct ExerciseLogResponse {
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    pub id: String,
    #[schema(example = "alice")]
    pub username: String,
    /// Number of entries in `log`.
    pub count: usize,
    pub log: Vec<LogEntry>,
}

impl From<ExerciseLog> for ExerciseLogResponse {
    fn from(value: ExerciseLog) -> Self {
        let owner = value.owner();
        Self {
            id: owner.id().to_string(),
            username: owner.username().to_string(),
            count: value.count(),
            log: value.entries().iter().map(LogEntry::from).collect(),
        }
    }
}

/// Log an exercise for a user.
///
/// The exercise is stored before the owner is resolved, so an unknown owner
/// yields `404` while the row remains stored.
#[utoipa::path(
    post,
    path = "/api/users/{id}/exercises",
    params(("id" = String, Path, description = "Owner identifier")),
    request_body(
        content = AddExerciseBody,
        description = "Accepted as JSON or application/x-www-form-urlencoded"
    ),
    responses(
        (status = 200, description = "Stored exercise", body = ExerciseResponse),
        (status = 400, description = "Invalid request or store failure", body = ErrorSchema),
        (status = 404, description = "Unknown owner", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["exercises"],
    operation_id = "addExercise"
)]
#[post("/users/{id}/exercises")]
pub async fn add_exercise(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: JsonOrForm<AddExerciseBody>,
) -> ApiResult<web::Json<ExerciseResponse>> {
    let owner_id = owner_id_from_path(&path.into_inner())?;
    let exercise = NewExercise::try_from(into_body(payload))?;
    info!(owner_id = %owner_id, "adding exercise");
    let response = state
        .exercises
        .add_exercise(AddExerciseRequest { owner_id, exercise })
        .await?;
    Ok(web::Json(ExerciseResponse::from(response)))
}

/// Fetch a user's exercise log.
#[utoipa::path(
    get,
    path = "/api/users/{id}/logs",
    params(("id" = String, Path, description = "Owner identifier"), LogQueryParams),
    responses(
        (status = 200, description = "Exercise log", body = ExerciseLogResponse),
        (status = 400, description = "Invalid request or store failure", body = ErrorSchema),
        (status = 404, description = "Unknown owner", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["exercises"],
    operation_id = "getExerciseLog"
)]
#[get("/users/{id}/logs")]
pub async fn exercise_log(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    query: web::Query<LogQueryParams>,
) -> ApiResult<web::Json<ExerciseLogResponse>> {
    let owner_id = owner_id_from_path(&path.into_inner())?;
    let filter = LogFilter::try_from(query.into_inner())?;
    info!(owner_id = %owner_id, ?filter, "fetching exercise log");
    let log = state
        .exercise_log
        .exercise_log(ExerciseLogRequest { owner_id, filter })
        .await?;
    Ok(web::Json(ExerciseLogResponse::from(log)))
}

#[cfg(test)]
#[path = "exercises_tests.rs"]
mod tests;
