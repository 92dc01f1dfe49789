//! SQLite-backed character storage.

use async_trait::async_trait;
use roster_domain::{
    AiDifficulty, Character, CharacterId, CharacterKind, CharacterRecord, Job, Level, MonsterType,
    Position,
};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

use crate::infrastructure::ports::{CharacterRepo, RepoError};

const SELECT_COLUMNS: &str =
    "SELECT id, x, y, alive, kind, monster_type, ai_difficulty, player_level, job FROM characters";

/// SQLite implementation of [`CharacterRepo`].
///
/// `AUTOINCREMENT` on the primary key keeps ids monotonic across deletes and
/// restarts; SQLite never hands out a rowid that was used before.
pub struct SqliteCharacterRepo {
    pool: SqlitePool,
}

impl SqliteCharacterRepo {
    /// Open (creating if needed) the database file and bootstrap the schema.
    pub async fn new(db_path: &str) -> Result<Self, RepoError> {
        let pool = SqlitePool::connect(&format!("sqlite:{}?mode=rwc", db_path))
            .await
            .map_err(|e| RepoError::database("connect", e))?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS characters (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                health INTEGER NOT NULL,
                damage INTEGER NOT NULL,
                x INTEGER NOT NULL,
                y INTEGER NOT NULL,
                alive INTEGER NOT NULL,
                kind TEXT NOT NULL CHECK (kind IN ('player', 'monster')),
                monster_type TEXT,
                ai_difficulty TEXT,
                player_level INTEGER,
                job TEXT
            )
            "#,
        )
        .execute(&pool)
        .await
        .map_err(|e| RepoError::database("create_schema", e))?;

        tracing::debug!(db_path, "Character store ready");
        Ok(Self { pool })
    }

    fn row_to_character(row: &SqliteRow) -> Result<Character, RepoError> {
        let column_err = |e: sqlx::Error| RepoError::serialization(e);

        let id: i64 = row.try_get("id").map_err(column_err)?;
        let x: i64 = row.try_get("x").map_err(column_err)?;
        let y: i64 = row.try_get("y").map_err(column_err)?;
        let alive: bool = row.try_get("alive").map_err(column_err)?;
        let kind: String = row.try_get("kind").map_err(column_err)?;
        let monster_type: Option<String> = row.try_get("monster_type").map_err(column_err)?;
        let ai_difficulty: Option<String> = row.try_get("ai_difficulty").map_err(column_err)?;
        let player_level: Option<i64> = row.try_get("player_level").map_err(column_err)?;
        let job: Option<String> = row.try_get("job").map_err(column_err)?;

        let record = CharacterRecord {
            id: Some(CharacterId::new(id).map_err(RepoError::serialization)?),
            health: 0,
            damage: 0,
            position: Position::new(x, y).map_err(RepoError::serialization)?,
            alive,
            kind: kind.parse::<CharacterKind>().map_err(RepoError::serialization)?,
            player_level: player_level
                .map(|level| Level::new(level).map(Level::get))
                .transpose()
                .map_err(RepoError::serialization)?,
            job: job
                .map(|job| job.parse::<Job>())
                .transpose()
                .map_err(RepoError::serialization)?,
            monster_type: monster_type
                .map(|monster_type| monster_type.parse::<MonsterType>())
                .transpose()
                .map_err(RepoError::serialization)?,
            monster_ai_difficulty: ai_difficulty
                .map(|difficulty| difficulty.parse::<AiDifficulty>())
                .transpose()
                .map_err(RepoError::serialization)?,
        };

        Character::try_from(record).map_err(RepoError::serialization)
    }
}

#[async_trait]
impl CharacterRepo for SqliteCharacterRepo {
    async fn insert(&self, character: &Character) -> Result<CharacterId, RepoError> {
        if let Some(id) = character.id() {
            return Err(RepoError::constraint(format!(
                "character already stored under id {id}"
            )));
        }
        let record = character.to_record();

        let result = sqlx::query(
            r#"
            INSERT INTO characters
                (health, damage, x, y, alive, kind, monster_type, ai_difficulty, player_level, job)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(i64::from(record.health))
        .bind(i64::from(record.damage))
        .bind(i64::from(record.position.x()))
        .bind(i64::from(record.position.y()))
        .bind(record.alive)
        .bind(record.kind.as_str())
        .bind(record.monster_type.map(|t| t.as_str()))
        .bind(record.monster_ai_difficulty.map(|d| d.as_str()))
        .bind(record.player_level.map(i64::from))
        .bind(record.job.map(|j| j.as_str()))
        .execute(&self.pool)
        .await
        .map_err(|e| RepoError::database("insert_character", e))?;

        CharacterId::new(result.last_insert_rowid()).map_err(RepoError::serialization)
    }

    async fn get(&self, id: CharacterId) -> Result<Option<Character>, RepoError> {
        let row = sqlx::query(&format!("{SELECT_COLUMNS} WHERE id = ?"))
            .bind(id.get())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| RepoError::database("get_character", e))?;

        row.as_ref().map(Self::row_to_character).transpose()
    }

    async fn list_all(&self) -> Result<Vec<Character>, RepoError> {
        let sql = format!(
            "{SELECT_COLUMNS} ORDER BY CASE kind WHEN 'player' THEN 0 ELSE 1 END, id"
        );
        let rows = sqlx::query(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| RepoError::database("list_characters", e))?;
        rows.iter().map(Self::row_to_character).collect()
    }

    async fn list_by_kind(&self, kind: CharacterKind) -> Result<Vec<Character>, RepoError> {
        let sql = format!("{SELECT_COLUMNS} WHERE kind = ? ORDER BY id");
        let rows = sqlx::query(&sql)
            .bind(kind.as_str())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| RepoError::database("list_characters_by_kind", e))?;
        rows.iter().map(Self::row_to_character).collect()
    }

    async fn update(&self, character: &Character) -> Result<(), RepoError> {
        let id = character
            .id()
            .ok_or_else(|| RepoError::constraint("cannot update a character without an id"))?;
        let record = character.to_record();

        let result = sqlx::query(
            r#"
            UPDATE characters SET
                health = ?, damage = ?, x = ?, y = ?, alive = ?,
                monster_type = ?, ai_difficulty = ?, player_level = ?, job = ?
            WHERE id = ? AND kind = ?
            "#,
        )
        .bind(i64::from(record.health))
        .bind(i64::from(record.damage))
        .bind(i64::from(record.position.x()))
        .bind(i64::from(record.position.y()))
        .bind(record.alive)
        .bind(record.monster_type.map(|t| t.as_str()))
        .bind(record.monster_ai_difficulty.map(|d| d.as_str()))
        .bind(record.player_level.map(i64::from))
        .bind(record.job.map(|j| j.as_str()))
        .bind(id.get())
        .bind(record.kind.as_str())
        .execute(&self.pool)
        .await
        .map_err(|e| RepoError::database("update_character", e))?;

        if result.rows_affected() == 0 {
            return Err(RepoError::not_found("Character", id));
        }
        Ok(())
    }

    async fn delete(&self, id: CharacterId) -> Result<bool, RepoError> {
        let result = sqlx::query("DELETE FROM characters WHERE id = ?")
            .bind(id.get())
            .execute(&self.pool)
            .await
            .map_err(|e| RepoError::database("delete_character", e))?;

        Ok(result.rows_affected() > 0)
    }
}
