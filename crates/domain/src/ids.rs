use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Identifier of a character inside one registry.
///
/// Ids are positive integers issued by the backing store in strictly
/// increasing order. They are never reused, even after the owning character
/// has been deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct CharacterId(i64);

impl CharacterId {
    pub const LABEL: &'static str = "ID";

    /// Wrap a raw id, rejecting zero and negative values.
    pub fn new(value: i64) -> Result<Self, DomainError> {
        if value <= 0 {
            return Err(DomainError::validation(format!(
                "{} must be a positive integer.",
                Self::LABEL
            )));
        }
        Ok(Self(value))
    }

    pub fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for CharacterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<i64> for CharacterId {
    type Error = DomainError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<CharacterId> for i64 {
    fn from(value: CharacterId) -> Self {
        value.0
    }
}

/// Parses ids arriving as text (path segments, form fields).
impl FromStr for CharacterId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(DomainError::validation(format!(
                "{} cannot be empty.",
                Self::LABEL
            )));
        }
        let value = trimmed.parse::<i64>().map_err(|_| {
            DomainError::validation(format!("{} needs to be an integer.", Self::LABEL))
        })?;
        Self::new(value)
    }
}
