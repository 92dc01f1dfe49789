//! Value objects - Immutable objects defined by their attributes

mod attribute;
mod combat_stats;
mod job;
mod kind;
mod level;
mod monster_type;
mod position;
mod server_stats;

pub use attribute::AttributeValue;
pub use combat_stats::CombatStats;
pub use job::Job;
pub use kind::CharacterKind;
pub use level::Level;
pub use monster_type::{AiDifficulty, MonsterType};
pub use position::Position;
pub use server_stats::{AverageDifficulty, ServerStats};

use crate::error::DomainError;

/// Trims and lower-cases an enumerated string input, rejecting blank values.
pub(crate) fn normalize_choice(label: &str, raw: &str) -> Result<String, DomainError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(DomainError::validation(format!("{label} cannot be empty.")));
    }
    Ok(trimmed.to_lowercase())
}
