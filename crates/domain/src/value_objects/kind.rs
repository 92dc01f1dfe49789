//! Character kind discriminator

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

/// Discriminator distinguishing players from monsters.
///
/// Fixed when a character is constructed and never changes afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CharacterKind {
    Player,
    Monster,
}

impl CharacterKind {
    pub const LABEL: &'static str = "Character type";

    pub fn all() -> &'static [CharacterKind] {
        &[CharacterKind::Player, CharacterKind::Monster]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CharacterKind::Player => "player",
            CharacterKind::Monster => "monster",
        }
    }
}

impl fmt::Display for CharacterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CharacterKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match super::normalize_choice(Self::LABEL, s)?.as_str() {
            "player" => Ok(CharacterKind::Player),
            "monster" => Ok(CharacterKind::Monster),
            _ => Err(DomainError::validation(
                "Character type must be either 'player' or 'monster'.",
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_kinds_case_insensitively() {
        assert_eq!("player".parse::<CharacterKind>().unwrap(), CharacterKind::Player);
        assert_eq!(" Monster ".parse::<CharacterKind>().unwrap(), CharacterKind::Monster);
    }

    #[test]
    fn rejects_unknown_and_empty_kinds() {
        assert_eq!(
            "npc".parse::<CharacterKind>().unwrap_err().to_string(),
            "Character type must be either 'player' or 'monster'."
        );
        assert_eq!(
            "".parse::<CharacterKind>().unwrap_err().to_string(),
            "Character type cannot be empty."
        );
    }
}
