//! Player level value object

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// A player level, always within `1..=10`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct Level(u8);

impl Level {
    pub const LABEL: &'static str = "Player Level";
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 10;

    /// Create a validated level.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` when the value lies outside `1..=10`.
    pub fn new(value: i64) -> Result<Self, DomainError> {
        if value < i64::from(Self::MIN) || value > i64::from(Self::MAX) {
            return Err(DomainError::validation(format!(
                "{} is out of range, please enter {}-{}",
                Self::LABEL,
                Self::MIN,
                Self::MAX
            )));
        }
        // Range checked above
        Ok(Self(value as u8))
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// Number of levels gained above the starting level.
    pub fn steps_above_first(self) -> u32 {
        u32::from(self.0 - Self::MIN)
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<i64> for Level {
    type Error = DomainError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Level> for u8 {
    fn from(level: Level) -> Self {
        level.0
    }
}
