//! Aggregate roots - domain objects that own their related data
//!
//! A [`Character`] owns the fields shared by every kind and a closed
//! [`CharacterVariant`] payload. Each variant implements [`CharacterClass`],
//! so adding a kind is a compile-time obligation to provide stats,
//! descriptions and a record projection.
//!
//! | Concern | Where it lives |
//! |---------|----------------|
//! | Common fields, position, alive flag | [`Character`] |
//! | Typed attributes + stat formulas | [`Player`], [`Monster`] |
//! | Flat field map for storage/wire | [`CharacterRecord`] |

pub mod character;
pub mod monster;
pub mod player;
pub mod record;

pub use character::{Character, CharacterClass, CharacterVariant};
pub use monster::Monster;
pub use player::Player;
pub use record::CharacterRecord;
