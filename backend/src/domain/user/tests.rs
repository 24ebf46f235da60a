//! Tests for user identifiers, usernames and serialisation.

use super::*;
use rstest::rstest;
use serde_json::json;

const VALID_ID: &str = "3fa85f64-5717-4562-b3fc-2c963f66afa6";

#[rstest]
#[case("", UserValidationError::EmptyId)]
#[case("not-a-uuid", UserValidationError::InvalidId)]
#[case(" 3fa85f64-5717-4562-b3fc-2c963f66afa6", UserValidationError::InvalidId)]
fn user_id_rejects_invalid_input(#[case] raw: &str, #[case] expected: UserValidationError) {
    assert_eq!(UserId::new(raw), Err(expected));
}

#[rstest]
fn user_id_keeps_original_text() {
    let id = UserId::new(VALID_ID).expect("valid id");
    assert_eq!(id.as_ref(), VALID_ID);
    assert_eq!(id.as_uuid().to_string(), VALID_ID);
}

#[rstest]
fn random_ids_are_distinct() {
    assert_ne!(UserId::random(), UserId::random());
}

#[rstest]
#[case("")]
#[case("   ")]
#[case("\t\n")]
fn username_rejects_blank_values(#[case] raw: &str) {
    assert_eq!(Username::new(raw), Err(UserValidationError::EmptyUsername));
}

#[rstest]
#[case("alice")]
#[case(" spaced name ")]
#[case("ümlaut")]
fn username_is_kept_verbatim(#[case] raw: &str) {
    let username = Username::new(raw).expect("valid username");
    assert_eq!(username.as_ref(), raw);
}

#[rstest]
fn user_serialises_id_and_username() {
    let user = User::try_from_strings(VALID_ID, "alice").expect("valid user");
    let value = serde_json::to_value(&user).expect("serialise user");
    assert_eq!(value, json!({ "id": VALID_ID, "username": "alice" }));
}

#[rstest]
fn user_deserialisation_validates_fields() {
    let result: Result<User, _> =
        serde_json::from_value(json!({ "id": "nope", "username": "alice" }));
    assert!(result.is_err());
}
