//! Extractor configuration shared by the API scope.
//!
//! Actix rejects malformed bodies, query strings and paths before a handler
//! runs. These configs route those rejections through the domain [`Error`]
//! so clients always receive the JSON error envelope, never a plain-text
//! body.

use actix_web::error::{JsonPayloadError, UrlencodedError};
use actix_web::{Either, HttpRequest, web};
use serde_json::json;

use crate::domain::Error;

/// Request body accepted either as JSON or as an URL-encoded form.
pub type JsonOrForm<T> = Either<web::Json<T>, web::Form<T>>;

/// Unwrap a [`JsonOrForm`] body regardless of its encoding.
pub fn into_body<T>(payload: JsonOrForm<T>) -> T {
    match payload {
        Either::Left(json) => json.into_inner(),
        Either::Right(form) => form.into_inner(),
    }
}

/// Largest accepted request body in bytes.
pub const BODY_LIMIT: usize = 16 * 1024;

fn malformed(source: &'static str, message: String) -> actix_web::Error {
    Error::invalid_request(message)
        .with_details(json!({ "code": "malformed_request", "source": source }))
        .into()
}

fn rejected(source: &'static str, message: String, req: &HttpRequest) -> actix_web::Error {
    tracing::debug!(source, path = req.path(), %message, "request extraction failed");
    malformed(source, message)
}

/// The JSON branch of a [`JsonOrForm`] declined a body of another encoding.
fn json_declined(err: &JsonPayloadError) -> bool {
    matches!(err, JsonPayloadError::ContentType)
}

/// The form branch of a [`JsonOrForm`] declined a body of another encoding.
fn form_declined(err: &UrlencodedError) -> bool {
    matches!(err, UrlencodedError::ContentType)
}

/// JSON body extractor settings.
#[must_use]
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(BODY_LIMIT)
        .error_handler(|err, req| {
            let message = format!("invalid JSON body: {err}");
            if json_declined(&err) {
                malformed("body", message)
            } else {
                rejected("body", message, req)
            }
        })
}

/// URL-encoded form extractor settings.
#[must_use]
pub fn form_config() -> web::FormConfig {
    web::FormConfig::default()
        .limit(BODY_LIMIT)
        .error_handler(|err, req| {
            let message = format!("invalid form body: {err}");
            if form_declined(&err) {
                malformed("body", message)
            } else {
                rejected("body", message, req)
            }
        })
}

/// Query string extractor settings.
#[must_use]
pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default()
        .error_handler(|err, req| rejected("query", format!("invalid query string: {err}"), req))
}

/// Path extractor settings.
#[must_use]
pub fn path_config() -> web::PathConfig {
    web::PathConfig::default()
        .error_handler(|err, req| rejected("path", format!("invalid path: {err}"), req))
}
