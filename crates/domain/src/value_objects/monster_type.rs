//! Monster type and AI difficulty value objects

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

/// Monster species. Decides a monster's health.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MonsterType {
    Dragon,
    Orc,
    Elf,
}

impl MonsterType {
    pub const LABEL: &'static str = "Monster type";

    pub fn all() -> &'static [MonsterType] {
        &[MonsterType::Dragon, MonsterType::Orc, MonsterType::Elf]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MonsterType::Dragon => "dragon",
            MonsterType::Orc => "orc",
            MonsterType::Elf => "elf",
        }
    }

    pub fn health(&self) -> u32 {
        match self {
            MonsterType::Dragon => 150,
            MonsterType::Orc => 130,
            MonsterType::Elf => 110,
        }
    }
}

impl fmt::Display for MonsterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MonsterType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match super::normalize_choice(Self::LABEL, s)?.as_str() {
            "dragon" => Ok(MonsterType::Dragon),
            "orc" => Ok(MonsterType::Orc),
            "elf" => Ok(MonsterType::Elf),
            _ => Err(DomainError::validation(
                "Monster type must be either dragon, orc or elf.",
            )),
        }
    }
}

/// How aggressively a monster's AI plays. Decides a monster's damage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AiDifficulty {
    Easy,
    Normal,
    Hard,
}

impl AiDifficulty {
    pub const LABEL: &'static str = "Monster AI difficulty";

    pub fn all() -> &'static [AiDifficulty] {
        &[AiDifficulty::Easy, AiDifficulty::Normal, AiDifficulty::Hard]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AiDifficulty::Easy => "easy",
            AiDifficulty::Normal => "normal",
            AiDifficulty::Hard => "hard",
        }
    }

    pub fn damage(&self) -> u32 {
        match self {
            AiDifficulty::Easy => 10,
            AiDifficulty::Normal => 20,
            AiDifficulty::Hard => 30,
        }
    }

    /// Numeric score used when averaging difficulty across monsters.
    pub fn severity(&self) -> u32 {
        match self {
            AiDifficulty::Easy => 1,
            AiDifficulty::Normal => 2,
            AiDifficulty::Hard => 3,
        }
    }

    /// Maps a rounded severity score back to a difficulty. Scores above the
    /// hardest level saturate to `Hard`; zero has no difficulty.
    pub fn from_severity(score: u32) -> Option<Self> {
        match score {
            0 => None,
            1 => Some(AiDifficulty::Easy),
            2 => Some(AiDifficulty::Normal),
            _ => Some(AiDifficulty::Hard),
        }
    }
}

impl fmt::Display for AiDifficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AiDifficulty {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match super::normalize_choice(Self::LABEL, s)?.as_str() {
            "easy" => Ok(AiDifficulty::Easy),
            "normal" => Ok(AiDifficulty::Normal),
            "hard" => Ok(AiDifficulty::Hard),
            _ => Err(DomainError::validation(
                "Monster AI difficulty must be either easy, normal, or hard.",
            )),
        }
    }
}
