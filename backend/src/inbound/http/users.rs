//! Users API handlers.
//!
//! ```text
//! POST /api/users   username=alice            (form or JSON)
//! GET  /api/users
//! ```

use actix_web::{get, post, web};
use serde::Deserialize;
use serde_json::json;
use tracing::info;

use crate::domain::{Error, User, UserValidationError, Username};
use crate::inbound::http::ApiResult;
use crate::inbound::http::extractors::{JsonOrForm, into_body};
use crate::inbound::http::schemas::{ErrorSchema, UserSchema};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, require_text};

/// Request body for `POST /api/users`.
///
/// Example JSON: `{"username":"alice"}`
#[derive(Debug, Default, Deserialize, utoipa::ToSchema)]
pub struct CreateUserRequest {
    #[schema(example = "alice")]
    pub username: Option<String>,
}

impl TryFrom<CreateUserRequest> for Username {
    type Error = Error;

    fn try_from(value: CreateUserRequest) -> Result<Self, Self::Error> {
        let field = FieldName::new("username");
        let raw = require_text(value.username, field)?;
        Username::new(raw).map_err(map_username_error)
    }
}

fn map_username_error(err: UserValidationError) -> Error {
    Error::invalid_request(err.to_string())
        .with_details(json!({ "field": "username", "code": "invalid_username" }))
}

/// Create a user from the submitted username.
///
/// Usernames are not unique; each call stores a new user with a fresh id.
#[utoipa::path(
    post,
    path = "/api/users",
    request_body(
        content = CreateUserRequest,
        description = "Accepted as JSON or application/x-www-form-urlencoded"
    ),
    responses(
        (status = 200, description = "Created user", body = UserSchema),
        (status = 400, description = "Invalid request or store failure", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "createUser"
)]
#[post("/users")]
pub async fn create_user(
    state: web::Data<HttpState>,
    payload: JsonOrForm<CreateUserRequest>,
) -> ApiResult<web::Json<User>> {
    let username = Username::try_from(into_body(payload))?;
    info!(username = %username, "creating user");
    let user = state.users.create_user(username).await?;
    Ok(web::Json(user))
}

/// List every stored user in creation order.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use exercise_tracker::inbound::http::users::list_users;
///
/// let app = App::new().service(list_users);
/// ```
#[utoipa::path(
    get,
    path = "/api/users",
    responses(
        (status = 200, description = "Users", body = [UserSchema]),
        (status = 400, description = "Store failure", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "listUsers"
)]
#[get("/users")]
pub async fn list_users(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<User>>> {
    info!("listing users");
    let users = state.users_query.list_users().await?;
    Ok(web::Json(users))
}
