//! Character registry use case.
//!
//! The registry is the single entry point for managing the character
//! population of one server. It validates input, delegates persistence to a
//! [`CharacterRepo`] and produces the details and stats projections.

use std::sync::Arc;

use roster_domain::{
    AttributeValue, Character, CharacterId, CharacterKind, CharacterRecord, DomainError,
    ServerStats,
};

use crate::infrastructure::ports::{CharacterRepo, RepoError};
use crate::use_cases::validation::{require_non_empty, ValidationError};

/// Error type for registry operations.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("{0}")]
    Validation(String),
    #[error("{entity_type} with ID {id} does not exist.")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },
    #[error("Repository error: {0}")]
    Repo(#[from] RepoError),
}

impl RegistryError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn character_not_found(id: CharacterId) -> Self {
        Self::NotFound {
            entity_type: "Character",
            id: id.to_string(),
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

impl From<DomainError> for RegistryError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(msg) => Self::Validation(msg),
            DomainError::NotFound { entity_type, id } => Self::NotFound { entity_type, id },
        }
    }
}

impl From<ValidationError> for RegistryError {
    fn from(err: ValidationError) -> Self {
        Self::Validation(err.to_string())
    }
}

pub struct CharacterRegistry {
    server_name: String,
    storage_id: String,
    repo: Arc<dyn CharacterRepo>,
}

impl CharacterRegistry {
    /// Create a registry for the named server.
    ///
    /// `storage_id` identifies the backing store (a database path for the
    /// SQLite backend) and is only used for diagnostics.
    pub fn new(
        server_name: impl Into<String>,
        storage_id: impl Into<String>,
        repo: Arc<dyn CharacterRepo>,
    ) -> Result<Self, RegistryError> {
        let server_name = server_name.into();
        let storage_id = storage_id.into();
        require_non_empty(&server_name, "Server Name")?;
        require_non_empty(&storage_id, "Database Name")?;

        Ok(Self {
            server_name,
            storage_id,
            repo,
        })
    }

    pub fn get_server_name(&self) -> &str {
        &self.server_name
    }

    pub fn storage_id(&self) -> &str {
        &self.storage_id
    }

    /// Store a new character and return the id it was assigned.
    pub async fn add(&self, character: Character) -> Result<CharacterId, RegistryError> {
        if let Some(id) = character.id() {
            return Err(RegistryError::validation(format!(
                "Invalid character object: character already has ID {id}."
            )));
        }

        let kind = character.kind();
        let id = self.repo.insert(&character).await?;
        tracing::info!(character_id = %id, kind = %kind, "Character added");
        Ok(id)
    }

    pub async fn exists(&self, id: CharacterId) -> Result<bool, RegistryError> {
        Ok(self.repo.get(id).await?.is_some())
    }

    pub async fn get(&self, id: CharacterId) -> Result<Character, RegistryError> {
        match self.repo.get(id).await? {
            Some(character) => Ok(character),
            None => {
                tracing::debug!(character_id = %id, "Character not found");
                Err(RegistryError::character_not_found(id))
            }
        }
    }

    /// Every character, players first, each group in id order.
    pub async fn get_all(&self) -> Result<Vec<Character>, RegistryError> {
        Ok(self.repo.list_all().await?)
    }

    pub async fn get_all_by_type(
        &self,
        kind: CharacterKind,
    ) -> Result<Vec<Character>, RegistryError> {
        Ok(self.repo.list_by_kind(kind).await?)
    }

    /// Replace both kind-specific attributes of a stored character.
    ///
    /// Players take `(job, level)`, monsters take `(monster_type, ai_difficulty)`.
    /// Nothing is written unless both values are valid.
    pub async fn update(
        &self,
        id: CharacterId,
        first: impl Into<AttributeValue>,
        second: impl Into<AttributeValue>,
    ) -> Result<Character, RegistryError> {
        let (first, second) = (first.into(), second.into());
        let mut character = self.get(id).await?;
        character.reassign(&first, &second)?;
        self.persist(&character).await?;
        tracing::info!(character_id = %id, kind = %character.kind(), "Character updated");
        Ok(character)
    }

    pub async fn move_character(
        &self,
        id: CharacterId,
        x: i64,
        y: i64,
    ) -> Result<Character, RegistryError> {
        let mut character = self.get(id).await?;
        character.move_to(x, y)?;
        self.persist(&character).await?;
        tracing::info!(character_id = %id, position = %character.position(), "Character moved");
        Ok(character)
    }

    pub async fn set_alive(&self, id: CharacterId, alive: bool) -> Result<Character, RegistryError> {
        let mut character = self.get(id).await?;
        character.set_alive(alive);
        self.persist(&character).await?;
        tracing::info!(character_id = %id, alive, "Character status changed");
        Ok(character)
    }

    pub async fn delete(&self, id: CharacterId) -> Result<(), RegistryError> {
        if !self.repo.delete(id).await? {
            tracing::debug!(character_id = %id, "Delete of unknown character");
            return Err(RegistryError::character_not_found(id));
        }
        tracing::info!(character_id = %id, "Character deleted");
        Ok(())
    }

    pub async fn get_server_stats(&self) -> Result<ServerStats, RegistryError> {
        let characters = self.get_all().await?;
        Ok(ServerStats::from_characters(&characters)?)
    }

    pub async fn get_character_details(&self, id: CharacterId) -> Result<String, RegistryError> {
        Ok(self.get(id).await?.full_details())
    }

    pub async fn get_character_details_by_type(
        &self,
        kind: CharacterKind,
    ) -> Result<Vec<String>, RegistryError> {
        let characters = self.get_all_by_type(kind).await?;
        Ok(characters.iter().map(Character::short_details).collect())
    }

    pub async fn get_all_character_details(&self) -> Result<Vec<String>, RegistryError> {
        let characters = self.get_all().await?;
        Ok(characters.iter().map(Character::short_details).collect())
    }

    pub async fn get_record(&self, id: CharacterId) -> Result<CharacterRecord, RegistryError> {
        Ok(self.get(id).await?.to_record())
    }

    pub async fn get_all_records(&self) -> Result<Vec<CharacterRecord>, RegistryError> {
        let characters = self.get_all().await?;
        Ok(characters.iter().map(Character::to_record).collect())
    }

    async fn persist(&self, character: &Character) -> Result<(), RegistryError> {
        match self.repo.update(character).await {
            Ok(()) => Ok(()),
            Err(RepoError::NotFound { entity_type, id }) => {
                Err(RegistryError::NotFound { entity_type, id })
            }
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::memory::InMemoryCharacterRepo;
    use crate::infrastructure::ports::MockCharacterRepo;
    use roster_domain::{AiDifficulty, AverageDifficulty, Job, MonsterType};

    fn registry() -> CharacterRegistry {
        CharacterRegistry::new("ACIT", "characters.sqlite", Arc::new(InMemoryCharacterRepo::new()))
            .expect("valid registry")
    }

    fn id(value: i64) -> CharacterId {
        CharacterId::new(value).expect("valid id")
    }

    #[test]
    fn new_rejects_blank_names() {
        let repo: Arc<dyn CharacterRepo> = Arc::new(InMemoryCharacterRepo::new());
        let err = CharacterRegistry::new("", "db", repo.clone())
            .err()
            .expect("blank server name");
        assert_eq!(err.to_string(), "Server Name cannot be empty.");

        let err = CharacterRegistry::new("ACIT", "  ", repo)
            .err()
            .expect("blank storage id");
        assert_eq!(err.to_string(), "Database Name cannot be empty.");
    }

    #[tokio::test]
    async fn add_assigns_increasing_ids_and_details_render() {
        let registry = registry();
        assert_eq!(registry.get_server_name(), "ACIT");

        let dragon = registry
            .add(Character::monster("dragon", "easy").unwrap())
            .await
            .unwrap();
        let knight = registry
            .add(Character::player(1, "knight").unwrap())
            .await
            .unwrap();
        assert_eq!((dragon.get(), knight.get()), (1, 2));

        assert_eq!(
            registry.get_character_details(dragon).await.unwrap(),
            "The monster (id: 1) is easy dragon with 150 health and 10 damage, Position: X = 0 Y = 0"
        );
        assert!(registry.exists(knight).await.unwrap());
        assert!(!registry.exists(id(99)).await.unwrap());
    }

    #[tokio::test]
    async fn dragon_then_assassin_lifecycle() {
        let registry = registry();

        let dragon = registry
            .add(Character::monster("dragon", "easy").unwrap())
            .await
            .unwrap();
        assert_eq!(dragon, id(1));
        assert_eq!(
            registry.get_character_details(dragon).await.unwrap(),
            "The monster (id: 1) is easy dragon with 150 health and 10 damage, Position: X = 0 Y = 0"
        );

        let assassin = registry
            .add(Character::player(1, "assassin").unwrap())
            .await
            .unwrap();
        assert_eq!(assassin, id(2));
        let stored = registry.get(assassin).await.unwrap();
        assert_eq!((stored.health(), stored.damage()), (80, 30));

        let expected =
            ServerStats::new(2, 1, 1, 1, AverageDifficulty::Level(AiDifficulty::Easy)).unwrap();
        assert_eq!(registry.get_server_stats().await.unwrap(), expected);

        registry.delete(dragon).await.unwrap();
        assert!(!registry.exists(dragon).await.unwrap());
        assert_eq!(registry.get_all().await.unwrap().len(), 1);
        assert_eq!(
            registry.get_all_character_details().await.unwrap(),
            vec!["The player (id: 2) is level 1 assassin"]
        );
    }

    #[tokio::test]
    async fn add_rejects_character_that_already_has_an_id() {
        let registry = registry();
        let character = Character::player(1, "knight").unwrap().with_id(id(5));
        assert!(registry.add(character).await.unwrap_err().is_validation());
    }

    #[tokio::test]
    async fn get_and_delete_report_missing_ids() {
        let registry = registry();
        let err = registry.get(id(7)).await.unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "Character with ID 7 does not exist.");

        let added = registry
            .add(Character::player(2, "warrior").unwrap())
            .await
            .unwrap();
        registry.delete(added).await.unwrap();
        assert!(!registry.exists(added).await.unwrap());
        assert!(registry.delete(added).await.unwrap_err().is_not_found());
        assert!(registry.get_character_details(added).await.unwrap_err().is_not_found());

        let next = registry
            .add(Character::player(2, "warrior").unwrap())
            .await
            .unwrap();
        assert!(next > added);
    }

    #[tokio::test]
    async fn update_player_recomputes_stats() {
        let registry = registry();
        let added = registry
            .add(Character::player(1, "assassin").unwrap())
            .await
            .unwrap();

        let updated = registry.update(added, "warrior", 10_i64).await.unwrap();
        assert_eq!((updated.health(), updated.damage()), (156, 37));
        assert_eq!(registry.get(added).await.unwrap(), updated);
    }

    #[tokio::test]
    async fn update_monster_and_reject_wrong_attribute_types() {
        let registry = registry();
        let added = registry
            .add(Character::monster("elf", "easy").unwrap())
            .await
            .unwrap();

        let updated = registry.update(added, "orc", "hard").await.unwrap();
        assert_eq!((updated.health(), updated.damage()), (130, 30));

        let err = registry.update(added, "orc", 3_i64).await.unwrap_err();
        assert_eq!(err.to_string(), "Monster AI difficulty must be a string.");
        let err = registry.update(added, "goblin", "hard").await.unwrap_err();
        assert!(err.is_validation());

        let stored = registry.get(added).await.unwrap();
        let monster = stored.as_monster().expect("still a monster");
        assert_eq!(monster.monster_type(), MonsterType::Orc);
        assert_eq!(monster.ai_difficulty(), AiDifficulty::Hard);

        assert!(registry
            .update(id(42), "orc", "hard")
            .await
            .unwrap_err()
            .is_not_found());
    }

    #[tokio::test]
    async fn invalid_player_update_leaves_character_unchanged() {
        let registry = registry();
        let added = registry
            .add(Character::player(4, "knight").unwrap())
            .await
            .unwrap();

        let err = registry.update(added, "warrior", 11_i64).await.unwrap_err();
        assert_eq!(
            err.to_string(),
            "Player Level is out of range, please enter 1-10"
        );
        let player = registry.get(added).await.unwrap();
        assert_eq!(player.as_player().map(|p| p.job()), Some(Job::Knight));
    }

    #[tokio::test]
    async fn move_and_set_alive_persist() {
        let registry = registry();
        let added = registry
            .add(Character::monster("orc", "normal").unwrap())
            .await
            .unwrap();

        registry.move_character(added, 3, 10).await.unwrap();
        registry.set_alive(added, false).await.unwrap();
        assert!(registry.move_character(added, -1, 0).await.unwrap_err().is_validation());

        let stored = registry.get(added).await.unwrap();
        assert_eq!((stored.position().x(), stored.position().y()), (3, 10));
        assert!(!stored.is_alive());
    }

    #[tokio::test]
    async fn details_by_type_partition_the_population() {
        let registry = registry();
        registry
            .add(Character::monster("dragon", "hard").unwrap())
            .await
            .unwrap();
        registry
            .add(Character::player(3, "knight").unwrap())
            .await
            .unwrap();
        registry
            .add(Character::monster("elf", "normal").unwrap())
            .await
            .unwrap();

        let all = registry.get_all_character_details().await.unwrap();
        let players = registry
            .get_character_details_by_type(CharacterKind::Player)
            .await
            .unwrap();
        let monsters = registry
            .get_character_details_by_type(CharacterKind::Monster)
            .await
            .unwrap();

        assert_eq!(players, vec!["The player (id: 2) is level 3 knight"]);
        assert_eq!(
            monsters,
            vec![
                "The monster (id: 1) is hard dragon",
                "The monster (id: 3) is normal elf",
            ]
        );
        assert_eq!(all.len(), players.len() + monsters.len());
        let mut union = players.clone();
        union.extend(monsters);
        assert_eq!(union, all);

        let records = registry.get_all_records().await.unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].kind, CharacterKind::Player);
    }

    #[tokio::test]
    async fn server_stats_reflect_population() {
        let registry = registry();
        let empty = registry.get_server_stats().await.unwrap();
        assert_eq!(empty.total_num_characters(), 0);
        assert_eq!(empty.avg_player_level(), 0);
        assert_eq!(empty.avg_monster_ai_difficulty(), AverageDifficulty::NotAvailable);

        registry
            .add(Character::player(2, "knight").unwrap())
            .await
            .unwrap();
        registry
            .add(Character::player(5, "warrior").unwrap())
            .await
            .unwrap();
        registry
            .add(Character::monster("orc", "easy").unwrap())
            .await
            .unwrap();
        registry
            .add(Character::monster("elf", "normal").unwrap())
            .await
            .unwrap();

        let stats = registry.get_server_stats().await.unwrap();
        assert_eq!(stats.total_num_characters(), 4);
        assert_eq!((stats.num_players(), stats.num_monsters()), (2, 2));
        assert_eq!(stats.avg_player_level(), 3);
        assert_eq!(
            stats.avg_monster_ai_difficulty(),
            AverageDifficulty::Level(AiDifficulty::Normal)
        );
    }

    #[tokio::test]
    async fn repo_errors_propagate() {
        let mut repo = MockCharacterRepo::new();
        repo.expect_list_all()
            .returning(|| Err(RepoError::database("list_characters", "disk gone")));
        repo.expect_get()
            .withf(|id| id.get() == 1)
            .returning(|_| Err(RepoError::database("get_character", "disk gone")));

        let registry = CharacterRegistry::new("ACIT", "mock", Arc::new(repo)).unwrap();
        assert!(matches!(
            registry.get_server_stats().await,
            Err(RegistryError::Repo(_))
        ));
        assert!(matches!(registry.exists(id(1)).await, Err(RegistryError::Repo(_))));
    }

    #[tokio::test]
    async fn update_lost_to_concurrent_delete_is_not_found() {
        let stored = Character::player(1, "knight").unwrap().with_id(id(3));
        let mut repo = MockCharacterRepo::new();
        repo.expect_get()
            .returning(move |_| Ok(Some(stored.clone())));
        repo.expect_update()
            .returning(|_| Err(RepoError::not_found("Character", 3)));

        let registry = CharacterRegistry::new("ACIT", "mock", Arc::new(repo)).unwrap();
        let err = registry.set_alive(id(3), false).await.unwrap_err();
        assert!(err.is_not_found());
    }
}
