//! Shared validation and coercion helpers for inbound HTTP adapters.
//!
//! Request bodies arrive either as JSON or as URL-encoded forms, so scalar
//! fields are read loosely and coerced here before the domain sees them.
//! Every failure becomes an `invalid_request` error whose details carry the
//! offending `field`, a machine-readable `code`, and the raw `value` when
//! one was supplied.

use chrono::{DateTime, NaiveDate, Utc};
use serde_json::{Value, json};

use crate::domain::{Error, UserId};

/// Validation error codes for HTTP request failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ValidationCode {
    MissingField,
    InvalidUuid,
    InvalidDate,
    InvalidInteger,
}

impl ValidationCode {
    const fn as_str(self) -> &'static str {
        match self {
            Self::MissingField => "missing_field",
            Self::InvalidUuid => "invalid_uuid",
            Self::InvalidDate => "invalid_date",
            Self::InvalidInteger => "invalid_integer",
        }
    }
}

/// Newtype wrapper for HTTP field names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    const fn as_str(self) -> &'static str {
        self.0
    }
}

fn validation_error(
    field: FieldName,
    code: ValidationCode,
    message: String,
    value: Option<&str>,
) -> Error {
    let mut details = json!({
        "field": field.as_str(),
        "code": code.as_str(),
    });
    if let (Some(raw), Some(map)) = (value, details.as_object_mut()) {
        map.insert("value".to_owned(), Value::String(raw.to_owned()));
    }
    Error::invalid_request(message).with_details(details)
}

pub(crate) fn missing_field_error(field: FieldName) -> Error {
    let name = field.as_str();
    validation_error(
        field,
        ValidationCode::MissingField,
        format!("missing required field: {name}"),
        None,
    )
}

pub(crate) fn invalid_uuid_error(field: FieldName, value: &str) -> Error {
    let name = field.as_str();
    validation_error(
        field,
        ValidationCode::InvalidUuid,
        format!("{name} must be a valid UUID"),
        Some(value),
    )
}

pub(crate) fn invalid_date_error(field: FieldName, value: &str) -> Error {
    let name = field.as_str();
    validation_error(
        field,
        ValidationCode::InvalidDate,
        format!("{name} must be a YYYY-MM-DD date or an RFC 3339 timestamp"),
        Some(value),
    )
}

pub(crate) fn invalid_integer_error(field: FieldName, value: &str) -> Error {
    let name = field.as_str();
    validation_error(
        field,
        ValidationCode::InvalidInteger,
        format!("{name} must be an integer"),
        Some(value),
    )
}

/// Require a non-blank text field, returning it verbatim.
pub(crate) fn require_text(value: Option<String>, field: FieldName) -> Result<String, Error> {
    match value {
        Some(text) if !text.trim().is_empty() => Ok(text),
        _ => Err(missing_field_error(field)),
    }
}

/// Parse a user identifier taken from the request path.
pub(crate) fn parse_user_id(value: &str, field: FieldName) -> Result<UserId, Error> {
    UserId::new(value).map_err(|_| invalid_uuid_error(field, value))
}

/// Parse an optional calendar date.
///
/// Accepts `YYYY-MM-DD` or an RFC 3339 timestamp (its UTC day). Absent or
/// blank input yields `None` so the caller can apply its default.
pub(crate) fn parse_optional_date(
    value: Option<&str>,
    field: FieldName,
) -> Result<Option<NaiveDate>, Error> {
    let Some(raw) = value.map(str::trim).filter(|raw| !raw.is_empty()) else {
        return Ok(None);
    };

    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Ok(Some(date));
    }
    DateTime::parse_from_rfc3339(raw)
        .map(|timestamp| Some(timestamp.with_timezone(&Utc).date_naive()))
        .map_err(|_| invalid_date_error(field, raw))
}

/// Parse an optional non-negative integer such as a result limit.
///
/// Absent or blank input yields `None`. Values beyond `u32::MAX` saturate,
/// since no log can hold that many entries.
pub(crate) fn parse_optional_count(
    value: Option<&str>,
    field: FieldName,
) -> Result<Option<u32>, Error> {
    let Some(raw) = value.map(str::trim).filter(|raw| !raw.is_empty()) else {
        return Ok(None);
    };
    if !raw.bytes().all(|byte| byte.is_ascii_digit()) {
        return Err(invalid_integer_error(field, raw));
    }
    // Only overflow can fail for a non-empty run of digits.
    Ok(Some(raw.parse::<u32>().unwrap_or(u32::MAX)))
}

/// Read the leading integer of `text` the way lenient form parsers do.
///
/// Leading whitespace and an optional sign are accepted; parsing stops at the
/// first non-digit. Returns `None` when no digit is present or the value
/// does not fit in an `i32`.
fn leading_integer(text: &str) -> Option<i32> {
    let trimmed = text.trim_start();
    let (negative, rest) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let digits_end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    let digits = rest.get(..digits_end).filter(|digits| !digits.is_empty())?;

    let magnitude: i64 = digits.parse().ok()?;
    let value = if negative { -magnitude } else { magnitude };
    i32::try_from(value).ok()
}

fn truncate_float(value: f64) -> Option<i32> {
    let truncated = value.trunc();
    let in_range = truncated >= f64::from(i32::MIN) && truncated <= f64::from(i32::MAX);
    // Range-checked above; `as` only drops the zero fractional part.
    in_range.then(|| truncated as i32)
}

/// Coerce a required integer field supplied as a JSON number or a string.
///
/// JSON integers are taken as-is, floats are truncated toward zero, and
/// strings use [`leading_integer`] semantics (`"45"` and `" 45min"` both
/// yield 45).
pub(crate) fn coerce_integer(value: Option<&Value>, field: FieldName) -> Result<i32, Error> {
    let coerced = match value {
        None | Some(Value::Null) => return Err(missing_field_error(field)),
        Some(Value::String(text)) if text.trim().is_empty() => {
            return Err(missing_field_error(field));
        }
        Some(Value::String(text)) => leading_integer(text),
        Some(Value::Number(number)) => match number.as_i64() {
            Some(int) => i32::try_from(int).ok(),
            None => number.as_f64().and_then(truncate_float),
        },
        Some(_) => None,
    };

    coerced.ok_or_else(|| {
        let raw = match value {
            Some(Value::String(text)) => text.clone(),
            Some(other) => other.to_string(),
            None => String::new(),
        };
        invalid_integer_error(field, &raw)
    })
}
