//! Aggregate statistics over a registry's population

use serde::{Serialize, Serializer};
use std::fmt;

use crate::aggregates::{Character, CharacterVariant};
use crate::error::DomainError;
use crate::value_objects::{AiDifficulty, Level};

/// Average monster difficulty label.
///
/// `NotAvailable` is only valid when there are no monsters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AverageDifficulty {
    NotAvailable,
    Level(AiDifficulty),
}

impl AverageDifficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            AverageDifficulty::NotAvailable => "not available",
            AverageDifficulty::Level(difficulty) => difficulty.as_str(),
        }
    }

    /// Averages severity scores, rounding half up (1.5 -> normal, 2.5 -> hard).
    pub fn from_scores(total_severity: u64, count: u64) -> Self {
        if count == 0 {
            return AverageDifficulty::NotAvailable;
        }
        let rounded = (2 * total_severity + count) / (2 * count);
        match AiDifficulty::from_severity(u32::try_from(rounded).unwrap_or(u32::MAX)) {
            Some(difficulty) => AverageDifficulty::Level(difficulty),
            None => AverageDifficulty::NotAvailable,
        }
    }
}

impl fmt::Display for AverageDifficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for AverageDifficulty {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Immutable snapshot of the population on one server.
///
/// # Invariants
///
/// - `total_num_characters == num_players + num_monsters`
/// - `avg_player_level` is 0 exactly when there are no players, otherwise in `1..=10`
/// - `avg_monster_ai_difficulty` is `NotAvailable` exactly when there are no monsters
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServerStats {
    total_num_characters: u32,
    num_monsters: u32,
    num_players: u32,
    avg_player_level: u32,
    avg_monster_ai_difficulty: AverageDifficulty,
}

impl ServerStats {
    pub fn new(
        total_num_characters: u32,
        num_monsters: u32,
        num_players: u32,
        avg_player_level: u32,
        avg_monster_ai_difficulty: AverageDifficulty,
    ) -> Result<Self, DomainError> {
        if num_monsters.checked_add(num_players) != Some(total_num_characters) {
            return Err(DomainError::validation(
                "Invalid number of total characters value",
            ));
        }
        let level_in_range = if num_players == 0 {
            avg_player_level == 0
        } else {
            (u32::from(Level::MIN)..=u32::from(Level::MAX)).contains(&avg_player_level)
        };
        if !level_in_range {
            return Err(DomainError::validation("Invalid average player level value"));
        }
        let difficulty_present = !matches!(avg_monster_ai_difficulty, AverageDifficulty::NotAvailable);
        if difficulty_present != (num_monsters > 0) {
            return Err(DomainError::validation(
                "Invalid average monster ai difficulty value",
            ));
        }

        Ok(Self {
            total_num_characters,
            num_monsters,
            num_players,
            avg_player_level,
            avg_monster_ai_difficulty,
        })
    }

    /// Tallies a population into a snapshot.
    pub fn from_characters<'a>(
        characters: impl IntoIterator<Item = &'a Character>,
    ) -> Result<Self, DomainError> {
        let mut num_players: u32 = 0;
        let mut num_monsters: u32 = 0;
        let mut level_total: u64 = 0;
        let mut severity_total: u64 = 0;

        for character in characters {
            match character.variant() {
                CharacterVariant::Player(player) => {
                    num_players += 1;
                    level_total += u64::from(player.level().get());
                }
                CharacterVariant::Monster(monster) => {
                    num_monsters += 1;
                    severity_total += u64::from(monster.ai_difficulty().severity());
                }
            }
        }

        let avg_player_level = if num_players == 0 {
            0
        } else {
            u32::try_from(level_total / u64::from(num_players))
                .unwrap_or(u32::from(Level::MAX))
        };
        let avg_difficulty = AverageDifficulty::from_scores(severity_total, u64::from(num_monsters));

        Self::new(
            num_players + num_monsters,
            num_monsters,
            num_players,
            avg_player_level,
            avg_difficulty,
        )
    }

    pub fn total_num_characters(&self) -> u32 {
        self.total_num_characters
    }

    pub fn num_monsters(&self) -> u32 {
        self.num_monsters
    }

    pub fn num_players(&self) -> u32 {
        self.num_players
    }

    pub fn avg_player_level(&self) -> u32 {
        self.avg_player_level
    }

    pub fn avg_monster_ai_difficulty(&self) -> AverageDifficulty {
        self.avg_monster_ai_difficulty
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value_objects::{Job, MonsterType};

    fn monster(difficulty: AiDifficulty) -> Character {
        Character::new_monster(MonsterType::Orc, difficulty)
    }

    fn player(level: i64) -> Character {
        Character::new_player(Level::new(level).unwrap(), Job::Knight)
    }

    #[test]
    fn empty_population_has_no_averages() {
        let stats = ServerStats::from_characters(&Vec::<Character>::new()).unwrap();
        assert_eq!(stats.total_num_characters(), 0);
        assert_eq!(stats.num_players(), 0);
        assert_eq!(stats.num_monsters(), 0);
        assert_eq!(stats.avg_player_level(), 0);
        assert_eq!(stats.avg_monster_ai_difficulty().as_str(), "not available");
    }

    #[test]
    fn player_level_average_floors() {
        let population = [player(1), player(2)];
        let stats = ServerStats::from_characters(&population).unwrap();
        assert_eq!(stats.avg_player_level(), 1);
        assert_eq!(stats.avg_monster_ai_difficulty(), AverageDifficulty::NotAvailable);
    }

    #[test]
    fn player_level_average_tops_out_at_max_level() {
        let population = [player(10), player(10), player(10)];
        let stats = ServerStats::from_characters(&population).unwrap();
        assert_eq!(stats.avg_player_level(), u32::from(Level::MAX));
    }

    #[test]
    fn difficulty_average_rounds_half_up() {
        let easy_normal = [monster(AiDifficulty::Easy), monster(AiDifficulty::Normal)];
        assert_eq!(
            ServerStats::from_characters(&easy_normal)
                .unwrap()
                .avg_monster_ai_difficulty(),
            AverageDifficulty::Level(AiDifficulty::Normal)
        );

        let normal_hard = [monster(AiDifficulty::Normal), monster(AiDifficulty::Hard)];
        assert_eq!(
            ServerStats::from_characters(&normal_hard)
                .unwrap()
                .avg_monster_ai_difficulty(),
            AverageDifficulty::Level(AiDifficulty::Hard)
        );

        let mostly_easy = [
            monster(AiDifficulty::Easy),
            monster(AiDifficulty::Easy),
            monster(AiDifficulty::Hard),
        ];
        // mean 5/3 = 1.67
        assert_eq!(
            ServerStats::from_characters(&mostly_easy)
                .unwrap()
                .avg_monster_ai_difficulty(),
            AverageDifficulty::Level(AiDifficulty::Normal)
        );
    }

    #[test]
    fn constructor_rejects_inconsistent_counts() {
        let err = ServerStats::new(3, 1, 1, 1, AverageDifficulty::Level(AiDifficulty::Easy))
            .unwrap_err();
        assert_eq!(err.to_string(), "Invalid number of total characters value");

        assert!(ServerStats::new(1, 0, 1, 0, AverageDifficulty::NotAvailable).is_err());
        assert!(ServerStats::new(1, 1, 0, 0, AverageDifficulty::NotAvailable).is_err());
        assert!(ServerStats::new(0, 0, 0, 0, AverageDifficulty::NotAvailable).is_ok());
    }

    #[test]
    fn serializes_flat_labels() {
        let stats = ServerStats::from_characters(&[monster(AiDifficulty::Hard)]).unwrap();
        let json = serde_json::to_value(&stats).unwrap();
        assert_eq!(json["total_num_characters"], 1);
        assert_eq!(json["avg_monster_ai_difficulty"], "hard");
    }
}
