extern crate self as roster_domain;

pub mod aggregates;
pub mod error;
pub mod ids;
pub mod value_objects;

pub use aggregates::{Character, CharacterClass, CharacterRecord, CharacterVariant, Monster, Player};

pub use error::DomainError;

pub use ids::CharacterId;

pub use value_objects::{
    AiDifficulty, AttributeValue, AverageDifficulty, CharacterKind, CombatStats, Job, Level,
    MonsterType, Position, ServerStats,
};
