//! Request payload validation.
//!
//! Request fields arrive as raw JSON values. The helpers here turn each one
//! into typed domain data, so callers checking fields in order can report
//! exactly which field was wrong.

use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

use rust_decimal::Decimal;
use serde_json::{Map, Value};
use thiserror::Error;
use uuid::Uuid;

/// JSON object payload.
pub type Fields = Map<String, Value>;

/// Why a field was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationReason {
    /// The field is absent or `null`.
    Required,

    /// The field must be a JSON string.
    NotAString,

    /// The field must be a number (or a numeric string).
    NotANumber,

    /// The field is an empty string.
    Empty,

    /// The field is not a valid identifier.
    NotAnIdentifier,

    /// The payload must be a JSON object.
    NotAnObject,

    /// The field must be an integer greater than zero.
    NotAPositiveInteger,

    /// The field is not part of the schema.
    NotAllowed,

    /// The field must name one of a fixed set of values.
    NotOneOf(&'static [&'static str]),
}

impl Display for ValidationReason {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Required => f.write_str("is required"),
            Self::NotAString => f.write_str("must be a string"),
            Self::NotANumber => f.write_str("must be a number"),
            Self::Empty => f.write_str("is not allowed to be empty"),
            Self::NotAnIdentifier => f.write_str("must be a valid identifier"),
            Self::NotAnObject => f.write_str("must be of type object"),
            Self::NotAPositiveInteger => f.write_str("must be a positive integer"),
            Self::NotAllowed => f.write_str("is not allowed"),
            Self::NotOneOf(allowed) => write!(f, "must be one of [{}]", allowed.join(", ")),
        }
    }
}

/// The first field that failed validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("\"{field}\" {reason}")]
pub struct ValidationError {
    /// Wire name of the offending field.
    pub field: String,

    /// What was wrong with it.
    pub reason: ValidationReason,
}

impl ValidationError {
    #[must_use]
    pub fn new(field: impl Into<String>, reason: ValidationReason) -> Self {
        Self {
            field: field.into(),
            reason,
        }
    }
}

/// Reject the first key left over once the known fields were taken.
///
/// # Errors
///
/// Names the first unknown key.
pub fn no_unknown_keys(unknown: &Fields) -> Result<(), ValidationError> {
    match unknown.keys().next() {
        Some(key) => Err(ValidationError::new(key.as_str(), ValidationReason::NotAllowed)),
        None => Ok(()),
    }
}

fn present(value: Option<&Value>) -> Option<&Value> {
    value.filter(|value| !value.is_null())
}

/// A required, non-empty string.
///
/// # Errors
///
/// Fails when the value is absent, `null`, not a string or empty.
pub fn required_text(field: &str, value: Option<&Value>) -> Result<String, ValidationError> {
    let text = optional_text(field, value)?
        .ok_or_else(|| ValidationError::new(field, ValidationReason::Required))?;

    if text.is_empty() {
        return Err(ValidationError::new(field, ValidationReason::Empty));
    }

    Ok(text)
}

/// An optional string. Empty strings are accepted.
///
/// # Errors
///
/// Fails when a value is present but is not a string.
pub fn optional_text(field: &str, value: Option<&Value>) -> Result<Option<String>, ValidationError> {
    present(value)
        .map(|value| {
            value
                .as_str()
                .map(ToOwned::to_owned)
                .ok_or_else(|| ValidationError::new(field, ValidationReason::NotAString))
        })
        .transpose()
}

/// A required number.
///
/// # Errors
///
/// Fails when the value is absent or not numeric.
pub fn required_number(field: &str, value: Option<&Value>) -> Result<Decimal, ValidationError> {
    optional_number(field, value)?
        .ok_or_else(|| ValidationError::new(field, ValidationReason::Required))
}

/// An optional number. Numeric strings are converted, as JSON clients
/// frequently send form values as text.
///
/// # Errors
///
/// Fails when a value is present but is neither a number nor a numeric string.
pub fn optional_number(
    field: &str,
    value: Option<&Value>,
) -> Result<Option<Decimal>, ValidationError> {
    present(value)
        .map(|value| {
            let text = match value {
                Value::Number(number) => number.to_string(),
                Value::String(text) => text.trim().to_owned(),
                _ => return Err(ValidationError::new(field, ValidationReason::NotANumber)),
            };

            parse_decimal(&text)
                .ok_or_else(|| ValidationError::new(field, ValidationReason::NotANumber))
        })
        .transpose()
}

/// A required identifier.
///
/// # Errors
///
/// Fails when the value is absent, not a string or not a UUID.
pub fn required_identifier(field: &str, value: Option<&Value>) -> Result<Uuid, ValidationError> {
    optional_identifier(field, value)?
        .ok_or_else(|| ValidationError::new(field, ValidationReason::Required))
}

/// An optional identifier.
///
/// # Errors
///
/// Fails when a value is present but is not a UUID string.
pub fn optional_identifier(
    field: &str,
    value: Option<&Value>,
) -> Result<Option<Uuid>, ValidationError> {
    optional_text(field, value)?
        .map(|text| identifier(field, &text))
        .transpose()
}

/// Parse an identifier taken from a path segment or a string field.
///
/// # Errors
///
/// Fails when `text` is not a UUID.
pub fn identifier(field: &str, text: &str) -> Result<Uuid, ValidationError> {
    Uuid::parse_str(text)
        .map_err(|_ignored| ValidationError::new(field, ValidationReason::NotAnIdentifier))
}
