//! OpenAPI documentation for the REST API.
//!
//! [`ApiDoc`] registers every inbound handler plus the schema wrappers from
//! [`crate::inbound::http::schemas`]. Swagger UI serves it in debug builds
//! and the `openapi-dump` binary prints it for external tooling.

use utoipa::OpenApi;

use crate::inbound::http::exercises::{
    AddExerciseBody, ExerciseLogResponse, ExerciseResponse, LogEntry,
};
use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema, UserSchema};
use crate::inbound::http::users::CreateUserRequest;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Exercise tracker API",
        description = "Create users, log exercises and query exercise logs."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::users::create_user,
        crate::inbound::http::users::list_users,
        crate::inbound::http::exercises::add_exercise,
        crate::inbound::http::exercises::exercise_log,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        UserSchema,
        ErrorSchema,
        ErrorCodeSchema,
        CreateUserRequest,
        AddExerciseBody,
        ExerciseResponse,
        ExerciseLogResponse,
        LogEntry,
    )),
    tags(
        (name = "users", description = "Create and list users"),
        (name = "exercises", description = "Log exercises and read exercise logs"),
        (name = "health", description = "Readiness and liveness probes")
    )
)]
pub struct ApiDoc;
