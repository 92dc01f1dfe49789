//! In-memory character storage for development and testing
//!
//! Keeps characters in a `BTreeMap` keyed by id, so listing is naturally in
//! id order. Nothing is persisted across process restarts.

use async_trait::async_trait;
use roster_domain::{Character, CharacterId, CharacterKind};
use std::collections::BTreeMap;
use tokio::sync::RwLock;

use crate::infrastructure::ports::{CharacterRepo, RepoError};

#[derive(Default)]
struct Store {
    characters: BTreeMap<CharacterId, Character>,
    last_id: i64,
}

/// In-memory implementation of [`CharacterRepo`].
#[derive(Default)]
pub struct InMemoryCharacterRepo {
    store: RwLock<Store>,
}

impl InMemoryCharacterRepo {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CharacterRepo for InMemoryCharacterRepo {
    async fn insert(&self, character: &Character) -> Result<CharacterId, RepoError> {
        if let Some(id) = character.id() {
            return Err(RepoError::constraint(format!(
                "character already stored under id {id}"
            )));
        }

        let mut store = self.store.write().await;
        let id = CharacterId::new(store.last_id + 1).map_err(RepoError::serialization)?;
        store.last_id = id.get();
        store.characters.insert(id, character.clone().with_id(id));
        Ok(id)
    }

    async fn get(&self, id: CharacterId) -> Result<Option<Character>, RepoError> {
        Ok(self.store.read().await.characters.get(&id).cloned())
    }

    async fn list_all(&self) -> Result<Vec<Character>, RepoError> {
        let store = self.store.read().await;
        let mut characters: Vec<Character> = store.characters.values().cloned().collect();
        // Stable sort keeps id order within each kind
        characters.sort_by_key(Character::kind);
        Ok(characters)
    }

    async fn list_by_kind(&self, kind: CharacterKind) -> Result<Vec<Character>, RepoError> {
        let store = self.store.read().await;
        Ok(store
            .characters
            .values()
            .filter(|character| character.kind() == kind)
            .cloned()
            .collect())
    }

    async fn update(&self, character: &Character) -> Result<(), RepoError> {
        let id = character
            .id()
            .ok_or_else(|| RepoError::constraint("cannot update a character without an id"))?;

        let mut store = self.store.write().await;
        match store.characters.get_mut(&id) {
            Some(stored) if stored.kind() == character.kind() => {
                *stored = character.clone();
                Ok(())
            }
            _ => Err(RepoError::not_found("Character", id)),
        }
    }

    async fn delete(&self, id: CharacterId) -> Result<bool, RepoError> {
        Ok(self.store.write().await.characters.remove(&id).is_some())
    }
}
