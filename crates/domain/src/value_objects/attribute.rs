//! Loosely typed attribute input for kind-dependent updates

use std::fmt;

use crate::error::DomainError;

/// A raw attribute value supplied to an update whose meaning depends on the
/// kind of the target character (job/level for players, type/difficulty for
/// monsters).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttributeValue {
    Text(String),
    Integer(i64),
}

impl AttributeValue {
    pub fn as_text(&self, label: &str) -> Result<&str, DomainError> {
        match self {
            AttributeValue::Text(text) => Ok(text),
            AttributeValue::Integer(_) => {
                Err(DomainError::validation(format!("{label} must be a string.")))
            }
        }
    }

    pub fn as_integer(&self, label: &str) -> Result<i64, DomainError> {
        match self {
            AttributeValue::Integer(value) => Ok(*value),
            AttributeValue::Text(text) if text.trim().is_empty() => {
                Err(DomainError::validation(format!("{label} cannot be empty.")))
            }
            AttributeValue::Text(_) => Err(DomainError::validation(format!(
                "{label} needs to be an integer."
            ))),
        }
    }
}

impl fmt::Display for AttributeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttributeValue::Text(text) => f.write_str(text),
            AttributeValue::Integer(value) => write!(f, "{value}"),
        }
    }
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        AttributeValue::Text(value.to_string())
    }
}

impl From<String> for AttributeValue {
    fn from(value: String) -> Self {
        AttributeValue::Text(value)
    }
}

impl From<i64> for AttributeValue {
    fn from(value: i64) -> Self {
        AttributeValue::Integer(value)
    }
}
