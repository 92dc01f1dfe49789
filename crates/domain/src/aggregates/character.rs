//! Character aggregate - players and monsters tracked by a registry
//!
//! # Design
//!
//! - **Closed variants**: [`CharacterVariant`] is the discriminated payload;
//!   the kind can never change after construction.
//! - **Derived stats**: health and damage are recomputed from the variant's
//!   typed attributes after every mutation, never set directly.
//! - **Valid by construction**: the raw-input constructors ([`Character::player`],
//!   [`Character::monster`]) validate and normalize before anything is built.
//! - **Identity is external**: `id` stays `None` until a registry accepts the
//!   character.

use crate::error::DomainError;
use crate::ids::CharacterId;
use crate::value_objects::{
    AiDifficulty, AttributeValue, CharacterKind, CombatStats, Job, Level, MonsterType, Position,
};

use super::{CharacterRecord, Monster, Player};

/// Behavior every character variant must provide.
pub trait CharacterClass {
    fn kind(&self) -> CharacterKind;

    /// Health and damage for the current attributes.
    fn derive_stats(&self) -> CombatStats;

    /// The identity attributes in prose, e.g. `level 1 assassin` or `easy dragon`.
    fn summary(&self) -> String;

    /// Writes the variant-specific fields into a record.
    fn fill_record(&self, record: &mut CharacterRecord);
}

/// Variant payload of a character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharacterVariant {
    Player(Player),
    Monster(Monster),
}

impl CharacterClass for CharacterVariant {
    fn kind(&self) -> CharacterKind {
        match self {
            CharacterVariant::Player(player) => player.kind(),
            CharacterVariant::Monster(monster) => monster.kind(),
        }
    }

    fn derive_stats(&self) -> CombatStats {
        match self {
            CharacterVariant::Player(player) => player.derive_stats(),
            CharacterVariant::Monster(monster) => monster.derive_stats(),
        }
    }

    fn summary(&self) -> String {
        match self {
            CharacterVariant::Player(player) => player.summary(),
            CharacterVariant::Monster(monster) => monster.summary(),
        }
    }

    fn fill_record(&self, record: &mut CharacterRecord) {
        match self {
            CharacterVariant::Player(player) => player.fill_record(record),
            CharacterVariant::Monster(monster) => monster.fill_record(record),
        }
    }
}

/// A player or monster.
///
/// # Invariants
///
/// - `stats` always equals `variant.derive_stats()`
/// - `position` coordinates always lie in `0..=10` (enforced by [`Position`])
/// - the variant (and therefore the kind) is fixed at construction
///
/// # Example
///
/// ```
/// use roster_domain::Character;
///
/// let monster = Character::monster("dragon", "easy").unwrap();
/// assert_eq!(monster.health(), 150);
/// assert_eq!(monster.damage(), 10);
/// assert!(monster.id().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Character {
    id: Option<CharacterId>,
    stats: CombatStats,
    position: Position,
    alive: bool,
    variant: CharacterVariant,
}

impl Character {
    // =========================================================================
    // Constructors
    // =========================================================================

    fn from_variant(variant: CharacterVariant) -> Self {
        Self {
            id: None,
            stats: variant.derive_stats(),
            position: Position::origin(),
            alive: true,
            variant,
        }
    }

    pub fn new_player(level: Level, job: Job) -> Self {
        Self::from_variant(CharacterVariant::Player(Player::new(level, job)))
    }

    pub fn new_monster(monster_type: MonsterType, ai_difficulty: AiDifficulty) -> Self {
        Self::from_variant(CharacterVariant::Monster(Monster::new(
            monster_type,
            ai_difficulty,
        )))
    }

    /// Build a player from raw input.
    ///
    /// # Errors
    ///
    /// `DomainError::Validation` naming `Player Level` or `Player Job`.
    pub fn player(level: i64, job: &str) -> Result<Self, DomainError> {
        Ok(Self::from_variant(CharacterVariant::Player(Player::parse(
            level, job,
        )?)))
    }

    /// Build a monster from raw input.
    ///
    /// # Errors
    ///
    /// `DomainError::Validation` naming `Monster type` or `Monster AI difficulty`.
    pub fn monster(monster_type: &str, ai_difficulty: &str) -> Result<Self, DomainError> {
        Ok(Self::from_variant(CharacterVariant::Monster(
            Monster::parse(monster_type, ai_difficulty)?,
        )))
    }

    /// Rebuild a stored character. Derived stats are recomputed.
    pub fn restore(
        id: Option<CharacterId>,
        position: Position,
        alive: bool,
        variant: CharacterVariant,
    ) -> Self {
        Self {
            id,
            stats: variant.derive_stats(),
            position,
            alive,
            variant,
        }
    }

    /// Attach the identity issued by a registry's store.
    pub fn with_id(mut self, id: CharacterId) -> Self {
        self.id = Some(id);
        self
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[inline]
    pub fn id(&self) -> Option<CharacterId> {
        self.id
    }

    #[inline]
    pub fn kind(&self) -> CharacterKind {
        self.variant.kind()
    }

    #[inline]
    pub fn health(&self) -> u32 {
        self.stats.health
    }

    #[inline]
    pub fn damage(&self) -> u32 {
        self.stats.damage
    }

    #[inline]
    pub fn stats(&self) -> CombatStats {
        self.stats
    }

    #[inline]
    pub fn position(&self) -> Position {
        self.position
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.alive
    }

    #[inline]
    pub fn variant(&self) -> &CharacterVariant {
        &self.variant
    }

    pub fn as_player(&self) -> Option<&Player> {
        match &self.variant {
            CharacterVariant::Player(player) => Some(player),
            CharacterVariant::Monster(_) => None,
        }
    }

    pub fn as_monster(&self) -> Option<&Monster> {
        match &self.variant {
            CharacterVariant::Monster(monster) => Some(monster),
            CharacterVariant::Player(_) => None,
        }
    }

    // =========================================================================
    // Common mutators
    // =========================================================================

    /// Move to `(x, y)`. Both coordinates are validated before either changes.
    pub fn move_to(&mut self, x: i64, y: i64) -> Result<(), DomainError> {
        self.position = Position::new(x, y)?;
        Ok(())
    }

    pub fn set_alive(&mut self, alive: bool) {
        self.alive = alive;
    }

    // =========================================================================
    // Variant mutators (re-derive stats)
    // =========================================================================

    pub fn set_level(&mut self, level: i64) -> Result<(), DomainError> {
        let level = Level::new(level)?;
        self.player_mut(Level::LABEL)?.set_level(level);
        self.refresh_stats();
        Ok(())
    }

    pub fn set_job(&mut self, job: &str) -> Result<(), DomainError> {
        let job = job.parse::<Job>()?;
        self.player_mut(Job::LABEL)?.set_job(job);
        self.refresh_stats();
        Ok(())
    }

    pub fn set_monster_type(&mut self, monster_type: &str) -> Result<(), DomainError> {
        let monster_type = monster_type.parse::<MonsterType>()?;
        self.monster_mut(MonsterType::LABEL)?
            .set_monster_type(monster_type);
        self.refresh_stats();
        Ok(())
    }

    pub fn set_ai_difficulty(&mut self, ai_difficulty: &str) -> Result<(), DomainError> {
        let ai_difficulty = ai_difficulty.parse::<AiDifficulty>()?;
        self.monster_mut(AiDifficulty::LABEL)?
            .set_ai_difficulty(ai_difficulty);
        self.refresh_stats();
        Ok(())
    }

    /// Replace both identity attributes at once.
    ///
    /// For players `first` is the job and `second` the level; for monsters
    /// `first` is the monster type and `second` the AI difficulty. Both are
    /// validated before anything changes.
    pub fn reassign(
        &mut self,
        first: &AttributeValue,
        second: &AttributeValue,
    ) -> Result<(), DomainError> {
        match &mut self.variant {
            CharacterVariant::Player(player) => {
                let job = first.as_text(Job::LABEL)?.parse::<Job>()?;
                let level = Level::new(second.as_integer(Level::LABEL)?)?;
                player.set_job(job);
                player.set_level(level);
            }
            CharacterVariant::Monster(monster) => {
                let monster_type = first
                    .as_text(MonsterType::LABEL)?
                    .parse::<MonsterType>()?;
                let ai_difficulty = second
                    .as_text(AiDifficulty::LABEL)?
                    .parse::<AiDifficulty>()?;
                monster.set_monster_type(monster_type);
                monster.set_ai_difficulty(ai_difficulty);
            }
        }
        self.refresh_stats();
        Ok(())
    }

    fn refresh_stats(&mut self) {
        self.stats = self.variant.derive_stats();
    }

    fn player_mut(&mut self, label: &str) -> Result<&mut Player, DomainError> {
        match &mut self.variant {
            CharacterVariant::Player(player) => Ok(player),
            CharacterVariant::Monster(_) => Err(DomainError::validation(format!(
                "{label} does not apply to a monster."
            ))),
        }
    }

    fn monster_mut(&mut self, label: &str) -> Result<&mut Monster, DomainError> {
        match &mut self.variant {
            CharacterVariant::Monster(monster) => Ok(monster),
            CharacterVariant::Player(_) => Err(DomainError::validation(format!(
                "{label} does not apply to a player."
            ))),
        }
    }

    // =========================================================================
    // Projections
    // =========================================================================

    /// One-line description, e.g. `The player (id: 2) is level 1 assassin`.
    pub fn short_details(&self) -> String {
        let id = match self.id {
            Some(id) => id.to_string(),
            None => "none".to_string(),
        };
        format!("The {} (id: {}) is {}", self.kind(), id, self.variant.summary())
    }

    /// Description including stats and position.
    pub fn full_details(&self) -> String {
        format!(
            "{} with {} health and {} damage, Position: {}",
            self.short_details(),
            self.stats.health,
            self.stats.damage,
            self.position
        )
    }

    pub fn to_record(&self) -> CharacterRecord {
        let mut record = CharacterRecord {
            id: self.id,
            health: self.stats.health,
            damage: self.stats.damage,
            position: self.position,
            alive: self.alive,
            kind: self.kind(),
            player_level: None,
            job: None,
            monster_type: None,
            monster_ai_difficulty: None,
        };
        self.variant.fill_record(&mut record);
        record
    }
}
