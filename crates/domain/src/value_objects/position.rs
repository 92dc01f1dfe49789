//! Grid position value object

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// A position on the 11x11 server grid. Both coordinates lie in `0..=10`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "[i64; 2]", into = "[u8; 2]")]
pub struct Position {
    x: u8,
    y: u8,
}

impl Position {
    pub const MIN: u8 = 0;
    pub const MAX: u8 = 10;

    /// Create a validated position. Nothing is constructed unless both
    /// coordinates are in range.
    pub fn new(x: i64, y: i64) -> Result<Self, DomainError> {
        let x = Self::coordinate("X", x)?;
        let y = Self::coordinate("Y", y)?;
        Ok(Self { x, y })
    }

    pub fn origin() -> Self {
        Self::default()
    }

    pub fn x(&self) -> u8 {
        self.x
    }

    pub fn y(&self) -> u8 {
        self.y
    }

    fn coordinate(label: &str, value: i64) -> Result<u8, DomainError> {
        if value < i64::from(Self::MIN) || value > i64::from(Self::MAX) {
            return Err(DomainError::validation(format!(
                "{label} ({value}) is out of range. Must be between {} and {}.",
                Self::MIN,
                Self::MAX
            )));
        }
        Ok(value as u8)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "X = {} Y = {}", self.x, self.y)
    }
}

impl TryFrom<[i64; 2]> for Position {
    type Error = DomainError;

    fn try_from([x, y]: [i64; 2]) -> Result<Self, Self::Error> {
        Self::new(x, y)
    }
}

impl From<Position> for [u8; 2] {
    fn from(position: Position) -> Self {
        [position.x, position.y]
    }
}
