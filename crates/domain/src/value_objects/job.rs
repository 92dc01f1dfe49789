//! Player job value object

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

/// Player job. Decides the base health and damage a player starts from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Job {
    Assassin,
    Knight,
    Warrior,
}

impl Job {
    pub const LABEL: &'static str = "Player Job";

    pub fn all() -> &'static [Job] {
        &[Job::Assassin, Job::Knight, Job::Warrior]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Job::Assassin => "assassin",
            Job::Knight => "knight",
            Job::Warrior => "warrior",
        }
    }

    /// Health at level 1
    pub fn base_health(&self) -> u32 {
        match self {
            Job::Assassin => 80,
            Job::Knight => 100,
            Job::Warrior => 120,
        }
    }

    /// Damage at level 1
    pub fn base_damage(&self) -> u32 {
        match self {
            Job::Assassin => 30,
            Job::Knight => 20,
            Job::Warrior => 10,
        }
    }
}

impl fmt::Display for Job {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Job {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match super::normalize_choice(Self::LABEL, s)?.as_str() {
            "assassin" => Ok(Job::Assassin),
            "knight" => Ok(Job::Knight),
            "warrior" => Ok(Job::Warrior),
            _ => Err(DomainError::validation(
                "Player Job must be either assassin, knight, or warrior.",
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_case() {
        assert_eq!("KNIGHT".parse::<Job>().unwrap(), Job::Knight);
        assert_eq!("Assassin".parse::<Job>().unwrap().to_string(), "assassin");
    }

    #[test]
    fn rejects_unknown_job() {
        let err = "mage".parse::<Job>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Player Job must be either assassin, knight, or warrior."
        );
        assert_eq!(
            "".parse::<Job>().unwrap_err().to_string(),
            "Player Job cannot be empty."
        );
    }
}
