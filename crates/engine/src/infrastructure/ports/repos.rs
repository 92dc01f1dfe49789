//! Repository port traits for character storage.

use async_trait::async_trait;
use roster_domain::{Character, CharacterId, CharacterKind};

use super::error::RepoError;

/// Durable storage for one registry's characters.
///
/// Each call is its own unit of work; implementations hold no entity state
/// between calls beyond what they persist.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CharacterRepo: Send + Sync {
    /// Persist a character that has no id yet and return the id issued for it.
    /// Issued ids strictly increase and are never handed out twice.
    async fn insert(&self, character: &Character) -> Result<CharacterId, RepoError>;

    async fn get(&self, id: CharacterId) -> Result<Option<Character>, RepoError>;

    /// All characters, players first, each kind in id order.
    async fn list_all(&self) -> Result<Vec<Character>, RepoError>;

    /// Characters of one kind in id order.
    async fn list_by_kind(&self, kind: CharacterKind) -> Result<Vec<Character>, RepoError>;

    /// Overwrite the stored row for `character.id()`. Last write wins.
    async fn update(&self, character: &Character) -> Result<(), RepoError>;

    /// Remove a character. Returns `false` when nothing was stored under `id`.
    async fn delete(&self, id: CharacterId) -> Result<bool, RepoError>;
}
