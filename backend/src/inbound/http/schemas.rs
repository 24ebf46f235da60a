//! OpenAPI schema definitions for domain types.
//!
//! Domain types stay framework-agnostic and do not derive `ToSchema`. The
//! wrappers below mirror their serialised shape so handlers can reference
//! them in `#[utoipa::path]` annotations.

use serde::Serialize;
use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::ErrorCode`].
#[derive(Serialize, ToSchema)]
#[schema(as = ErrorCode)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCodeSchema {
    /// The request is malformed, fails validation, or the store rejected it.
    InvalidRequest,
    /// The requested resource does not exist.
    NotFound,
    /// An unexpected error occurred on the server.
    InternalError,
}

/// OpenAPI schema for [`crate::domain::Error`].
#[derive(Serialize, ToSchema)]
#[schema(as = Error)]
#[serde(rename_all = "camelCase")]
pub struct ErrorSchema {
    /// Stable machine-readable error code.
    #[schema(example = "invalid_request")]
    code: ErrorCodeSchema,
    /// Human-readable message returned to clients.
    #[schema(example = "missing required field: username")]
    message: String,
    /// Correlation identifier, also sent in the `trace-id` header.
    #[schema(example = "6f1c1a44-3a5e-4c3f-9a53-0c0f4d7c2b11")]
    trace_id: Option<String>,
    /// Supplementary details such as `{ "field": "username", "code": "missing_field" }`.
    details: Option<serde_json::Value>,
}

/// OpenAPI schema for [`crate::domain::User`].
#[derive(ToSchema)]
#[schema(as = User)]
#[expect(dead_code, reason = "Used only for OpenAPI schema generation via utoipa")]
pub struct UserSchema {
    /// Server-generated user identifier.
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    id: String,
    /// Username supplied at creation.
    #[schema(example = "alice")]
    username: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use utoipa::PartialSchema;

    fn schema_to_json<T: PartialSchema>() -> String {
        serde_json::to_string(&T::schema()).expect("schema serialises to JSON")
    }

    #[rstest]
    fn schema_names_match_domain_types() {
        assert_eq!(ErrorCodeSchema::name(), "ErrorCode");
        assert_eq!(ErrorSchema::name(), "Error");
        assert_eq!(UserSchema::name(), "User");
    }

    #[rstest]
    #[case("invalid_request")]
    #[case("not_found")]
    #[case("internal_error")]
    fn error_code_schema_lists_variant(#[case] variant: &str) {
        assert!(schema_to_json::<ErrorCodeSchema>().contains(variant));
    }

    #[rstest]
    fn error_schema_uses_camel_case_trace_id() {
        let schema_json = schema_to_json::<ErrorSchema>();
        assert!(schema_json.contains("traceId"));
        assert!(schema_json.contains("details"));
    }

    #[rstest]
    fn error_schema_serialises_like_the_error_envelope() {
        let documented = ErrorSchema {
            code: ErrorCodeSchema::NotFound,
            message: "user not found".to_owned(),
            trace_id: Some("trace".to_owned()),
            details: Some(serde_json::json!({ "code": "unknown_user" })),
        };
        let envelope = crate::domain::Error::not_found("user not found")
            .with_trace_id("trace")
            .with_details(serde_json::json!({ "code": "unknown_user" }));

        assert_eq!(
            serde_json::to_value(&documented).expect("schema serialises"),
            serde_json::to_value(&envelope).expect("error serialises"),
        );
    }

    #[rstest]
    fn user_schema_exposes_id_and_username() {
        let schema_json = schema_to_json::<UserSchema>();
        assert!(schema_json.contains("\"id\""));
        assert!(schema_json.contains("\"username\""));
    }
}
