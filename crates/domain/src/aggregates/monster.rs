//! Monster variant

use serde::{Deserialize, Serialize};

use super::{CharacterClass, CharacterRecord};
use crate::error::DomainError;
use crate::value_objects::{AiDifficulty, CharacterKind, CombatStats, MonsterType};

/// Monster-specific attributes. Health comes from the type, damage from the
/// AI difficulty; the two are independent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Monster {
    monster_type: MonsterType,
    ai_difficulty: AiDifficulty,
}

impl Monster {
    pub fn new(monster_type: MonsterType, ai_difficulty: AiDifficulty) -> Self {
        Self {
            monster_type,
            ai_difficulty,
        }
    }

    pub fn parse(monster_type: &str, ai_difficulty: &str) -> Result<Self, DomainError> {
        Ok(Self::new(monster_type.parse()?, ai_difficulty.parse()?))
    }

    pub fn monster_type(&self) -> MonsterType {
        self.monster_type
    }

    pub fn ai_difficulty(&self) -> AiDifficulty {
        self.ai_difficulty
    }

    pub(crate) fn set_monster_type(&mut self, monster_type: MonsterType) {
        self.monster_type = monster_type;
    }

    pub(crate) fn set_ai_difficulty(&mut self, ai_difficulty: AiDifficulty) {
        self.ai_difficulty = ai_difficulty;
    }
}

impl CharacterClass for Monster {
    fn kind(&self) -> CharacterKind {
        CharacterKind::Monster
    }

    fn derive_stats(&self) -> CombatStats {
        CombatStats::new(self.monster_type.health(), self.ai_difficulty.damage())
    }

    fn summary(&self) -> String {
        format!("{} {}", self.ai_difficulty, self.monster_type)
    }

    fn fill_record(&self, record: &mut CharacterRecord) {
        record.monster_type = Some(self.monster_type);
        record.monster_ai_difficulty = Some(self.ai_difficulty);
    }
}
