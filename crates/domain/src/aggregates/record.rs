//! Flat field-map projection of a character

use serde::{Deserialize, Serialize};

use super::{Character, CharacterVariant, Monster, Player};
use crate::error::DomainError;
use crate::ids::CharacterId;
use crate::value_objects::{AiDifficulty, CharacterKind, Job, Level, MonsterType, Position};

/// The flat representation used for persistence and the wire.
///
/// Variant-specific fields are `None` for the other kind and omitted when
/// serialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterRecord {
    pub id: Option<CharacterId>,
    pub health: u32,
    pub damage: u32,
    pub position: Position,
    pub alive: bool,
    pub kind: CharacterKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub player_level: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job: Option<Job>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monster_type: Option<MonsterType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monster_ai_difficulty: Option<AiDifficulty>,
}

fn missing(label: &str) -> DomainError {
    DomainError::validation(format!("{label} cannot be undefined (None)."))
}

/// Rehydrates a character from its record. Stored `health`/`damage` are
/// ignored and re-derived from the typed attributes.
impl TryFrom<CharacterRecord> for Character {
    type Error = DomainError;

    fn try_from(record: CharacterRecord) -> Result<Self, Self::Error> {
        let variant = match record.kind {
            CharacterKind::Player => {
                let level = record.player_level.ok_or_else(|| missing(Level::LABEL))?;
                let job = record.job.ok_or_else(|| missing(Job::LABEL))?;
                CharacterVariant::Player(Player::new(Level::new(i64::from(level))?, job))
            }
            CharacterKind::Monster => {
                let monster_type = record
                    .monster_type
                    .ok_or_else(|| missing(MonsterType::LABEL))?;
                let difficulty = record
                    .monster_ai_difficulty
                    .ok_or_else(|| missing(AiDifficulty::LABEL))?;
                CharacterVariant::Monster(Monster::new(monster_type, difficulty))
            }
        };

        Ok(Character::restore(
            record.id,
            record.position,
            record.alive,
            variant,
        ))
    }
}
