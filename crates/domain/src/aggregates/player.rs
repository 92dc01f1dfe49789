//! Player variant

use serde::{Deserialize, Serialize};

use super::{CharacterClass, CharacterRecord};
use crate::error::DomainError;
use crate::value_objects::{CharacterKind, CombatStats, Job, Level};

/// Player-specific attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    level: Level,
    job: Job,
}

impl Player {
    pub const HEALTH_PER_LEVEL: u32 = 4;
    pub const DAMAGE_PER_LEVEL: u32 = 3;

    pub fn new(level: Level, job: Job) -> Self {
        Self { level, job }
    }

    /// Validate raw inputs. The level is checked first, then the job.
    pub fn parse(level: i64, job: &str) -> Result<Self, DomainError> {
        Ok(Self::new(Level::new(level)?, job.parse()?))
    }

    pub fn level(&self) -> Level {
        self.level
    }

    pub fn job(&self) -> Job {
        self.job
    }

    pub(crate) fn set_level(&mut self, level: Level) {
        self.level = level;
    }

    pub(crate) fn set_job(&mut self, job: Job) {
        self.job = job;
    }
}

impl CharacterClass for Player {
    fn kind(&self) -> CharacterKind {
        CharacterKind::Player
    }

    fn derive_stats(&self) -> CombatStats {
        let steps = self.level.steps_above_first();
        CombatStats::new(
            self.job.base_health() + steps * Self::HEALTH_PER_LEVEL,
            self.job.base_damage() + steps * Self::DAMAGE_PER_LEVEL,
        )
    }

    fn summary(&self) -> String {
        format!("level {} {}", self.level, self.job)
    }

    fn fill_record(&self, record: &mut CharacterRecord) {
        record.player_level = Some(self.level.get());
        record.job = Some(self.job);
    }
}
