//! Derived combat statistics

use serde::{Deserialize, Serialize};

/// Health and damage derived from a character's typed attributes.
///
/// Never set independently; always produced by [`crate::CharacterClass::derive_stats`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CombatStats {
    pub health: u32,
    pub damage: u32,
}

impl CombatStats {
    pub fn new(health: u32, damage: u32) -> Self {
        Self { health, damage }
    }
}
