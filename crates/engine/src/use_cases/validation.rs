//! Common validation helpers for untyped input.
//!
//! Request bodies arrive as JSON; these helpers turn individual fields into
//! typed values, naming the offending field on failure.

use roster_domain::AttributeValue;
use serde_json::Value;

/// Validation error type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{field_name} cannot be undefined (None).")]
    Undefined { field_name: &'static str },

    #[error("{field_name} cannot be empty.")]
    Empty { field_name: &'static str },

    #[error("{field_name} must be a string.")]
    NotString { field_name: &'static str },

    #[error("{field_name} needs to be an integer.")]
    NotInteger { field_name: &'static str },

    #[error("{field_name} must be a boolean (true/false).")]
    NotBoolean { field_name: &'static str },
}

/// Validate a string is non-empty.
pub fn require_non_empty(value: &str, field_name: &'static str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Empty { field_name });
    }
    Ok(())
}

fn present(value: Option<&Value>) -> Option<&Value> {
    value.filter(|v| !v.is_null())
}

/// Require a non-empty JSON string.
pub fn require_text<'a>(
    value: Option<&'a Value>,
    field_name: &'static str,
) -> Result<&'a str, ValidationError> {
    match present(value) {
        None => Err(ValidationError::Undefined { field_name }),
        Some(Value::String(text)) => {
            require_non_empty(text, field_name)?;
            Ok(text)
        }
        Some(_) => Err(ValidationError::NotString { field_name }),
    }
}

/// Require a JSON integer.
pub fn require_integer(
    value: Option<&Value>,
    field_name: &'static str,
) -> Result<i64, ValidationError> {
    match present(value) {
        None => Err(ValidationError::Undefined { field_name }),
        Some(Value::String(text)) if text.trim().is_empty() => {
            Err(ValidationError::Empty { field_name })
        }
        Some(Value::Number(number)) => number
            .as_i64()
            .ok_or(ValidationError::NotInteger { field_name }),
        Some(_) => Err(ValidationError::NotInteger { field_name }),
    }
}

pub fn require_bool(value: Option<&Value>, field_name: &'static str) -> Result<bool, ValidationError> {
    match present(value) {
        None => Err(ValidationError::Undefined { field_name }),
        Some(Value::Bool(flag)) => Ok(*flag),
        Some(_) => Err(ValidationError::NotBoolean { field_name }),
    }
}

/// Accept either a string or an integer, leaving the kind-specific type check
/// to the character being updated.
pub fn require_attribute(
    value: Option<&Value>,
    field_name: &'static str,
) -> Result<AttributeValue, ValidationError> {
    match present(value) {
        None => Err(ValidationError::Undefined { field_name }),
        Some(Value::String(text)) => {
            require_non_empty(text, field_name)?;
            Ok(AttributeValue::Text(text.clone()))
        }
        Some(Value::Number(number)) => number
            .as_i64()
            .map(AttributeValue::Integer)
            .ok_or(ValidationError::NotInteger { field_name }),
        Some(_) => Err(ValidationError::NotString { field_name }),
    }
}
