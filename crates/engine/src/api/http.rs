//! HTTP routes.

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post, put},
    Json, Router,
};
use serde_json::Value;
use std::sync::Arc;

use roster_domain::{
    AiDifficulty, AttributeValue, Character, CharacterId, CharacterKind, CharacterRecord,
    CharacterVariant, DomainError, Job, Level, MonsterType, ServerStats,
};

use crate::app::App;
use crate::use_cases::validation::{
    require_attribute, require_bool, require_integer, require_text,
};
use crate::use_cases::{RegistryError, ValidationError};

/// Create all HTTP routes.
pub fn routes() -> Router<Arc<App>> {
    Router::new()
        .route("/api/health", get(health))
        .route("/server/name", get(server_name))
        .route("/server/serverstats", get(server_stats))
        .route("/server/character", post(add_character))
        .route("/server/character/{id}", put(update_character))
        .route("/server/character/{id}/position", put(move_character))
        .route("/server/character/{id}/alive", put(set_character_alive))
        .route("/server/characters/all", get(list_all_details))
        .route("/server/characters/all/{kind}", get(list_details_by_kind))
        .route(
            "/server/characters/{id}",
            get(get_character).delete(delete_character),
        )
        .route("/server/characters/{id}/details", get(get_character_details))
}

async fn health() -> &'static str {
    "OK"
}

async fn server_name(State(app): State<Arc<App>>) -> Json<String> {
    Json(app.registry.get_server_name().to_string())
}

async fn server_stats(State(app): State<Arc<App>>) -> Result<Json<ServerStats>, ApiError> {
    Ok(Json(app.registry.get_server_stats().await?))
}

// =============================================================================
// Characters
// =============================================================================

async fn add_character(
    State(app): State<Arc<App>>,
    body: Bytes,
) -> Result<Json<CharacterId>, ApiError> {
    let body = parse_body(&body)?
        .ok_or_else(|| ApiError::BadRequest("Character cannot be undefined.".to_string()))?;
    let character = character_from_json(&body)?;
    let id = app.registry.add(character).await?;
    Ok(Json(id))
}

async fn get_character(
    State(app): State<Arc<App>>,
    Path(id): Path<String>,
) -> Result<Json<CharacterRecord>, ApiError> {
    let id = parse_id(&id)?;
    Ok(Json(app.registry.get_record(id).await?))
}

async fn get_character_details(
    State(app): State<Arc<App>>,
    Path(id): Path<String>,
) -> Result<Json<String>, ApiError> {
    let id = parse_id(&id)?;
    Ok(Json(app.registry.get_character_details(id).await?))
}

/// Accepts both identity fields or just one; the other keeps its stored value.
async fn update_character(
    State(app): State<Arc<App>>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Json<CharacterRecord>, ApiError> {
    let id = parse_id(&id)?;
    let body = parse_body(&body)?
        .ok_or_else(|| ApiError::BadRequest("Update body cannot be undefined.".to_string()))?;

    let current = app.registry.get(id).await?;
    let (first_key, first_label, second_key, second_label) = match current.kind() {
        CharacterKind::Player => ("job", Job::LABEL, "player_level", Level::LABEL),
        CharacterKind::Monster => (
            "monster_type",
            MonsterType::LABEL,
            "monster_ai_difficulty",
            AiDifficulty::LABEL,
        ),
    };

    let (first, second) = (body.get(first_key), body.get(second_key));
    if first.is_none() && second.is_none() {
        return Err(ApiError::BadRequest(format!(
            "Update requires '{first_key}' or '{second_key}'."
        )));
    }

    let (stored_first, stored_second) = stored_attributes(&current);
    let first = match first {
        Some(value) => require_attribute(Some(value), first_label)?,
        None => stored_first,
    };
    let second = match second {
        Some(value) => require_attribute(Some(value), second_label)?,
        None => stored_second,
    };

    let updated = app.registry.update(id, first, second).await?;
    Ok(Json(updated.to_record()))
}

async fn move_character(
    State(app): State<Arc<App>>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Json<CharacterRecord>, ApiError> {
    let id = parse_id(&id)?;
    let body = parse_body(&body)?
        .ok_or_else(|| ApiError::BadRequest("Position cannot be undefined.".to_string()))?;
    let x = require_integer(body.get("x"), "X")?;
    let y = require_integer(body.get("y"), "Y")?;

    let moved = app.registry.move_character(id, x, y).await?;
    Ok(Json(moved.to_record()))
}

async fn set_character_alive(
    State(app): State<Arc<App>>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Json<CharacterRecord>, ApiError> {
    let id = parse_id(&id)?;
    let body = parse_body(&body)?
        .ok_or_else(|| ApiError::BadRequest("Alive cannot be undefined (None).".to_string()))?;
    let alive = require_bool(body.get("alive"), "Alive")?;

    let updated = app.registry.set_alive(id, alive).await?;
    Ok(Json(updated.to_record()))
}

async fn delete_character(
    State(app): State<Arc<App>>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = parse_id(&id)?;
    app.registry.delete(id).await?;
    Ok(StatusCode::OK)
}

async fn list_all_details(State(app): State<Arc<App>>) -> Result<Json<Vec<String>>, ApiError> {
    Ok(Json(app.registry.get_all_character_details().await?))
}

async fn list_details_by_kind(
    State(app): State<Arc<App>>,
    Path(kind): Path<String>,
) -> Result<Json<Vec<String>>, ApiError> {
    let kind = kind.parse::<CharacterKind>()?;
    Ok(Json(app.registry.get_character_details_by_type(kind).await?))
}

// =============================================================================
// Request parsing
// =============================================================================

fn parse_id(raw: &str) -> Result<CharacterId, ApiError> {
    Ok(raw.parse::<CharacterId>()?)
}

/// An empty body or a literal `null` yields `None`.
fn parse_body(body: &Bytes) -> Result<Option<Value>, ApiError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(None);
    }
    let value: Value = serde_json::from_slice(body)
        .map_err(|e| ApiError::BadRequest(format!("Invalid JSON body: {e}")))?;
    Ok(Some(value).filter(|v| !v.is_null()))
}

fn character_from_json(body: &Value) -> Result<Character, ApiError> {
    let kind = body
        .get("type")
        .and_then(Value::as_str)
        .and_then(|raw| raw.parse::<CharacterKind>().ok())
        .ok_or_else(|| {
            ApiError::BadRequest(
                "Invalid character object: type must be either 'player' or 'monster'."
                    .to_string(),
            )
        })?;

    let character = match kind {
        CharacterKind::Player => {
            let level = require_integer(body.get("player_level"), Level::LABEL)?;
            let job = require_text(body.get("job"), Job::LABEL)?;
            Character::player(level, job)?
        }
        CharacterKind::Monster => {
            let monster_type = require_text(body.get("monster_type"), MonsterType::LABEL)?;
            let ai_difficulty =
                require_text(body.get("monster_ai_difficulty"), AiDifficulty::LABEL)?;
            Character::monster(monster_type, ai_difficulty)?
        }
    };
    Ok(character)
}

fn stored_attributes(character: &Character) -> (AttributeValue, AttributeValue) {
    match character.variant() {
        CharacterVariant::Player(player) => (
            AttributeValue::from(player.job().as_str()),
            AttributeValue::from(i64::from(player.level().get())),
        ),
        CharacterVariant::Monster(monster) => (
            AttributeValue::from(monster.monster_type().as_str()),
            AttributeValue::from(monster.ai_difficulty().as_str()),
        ),
    }
}

// =============================================================================
// Errors
// =============================================================================

#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    BadRequest(String),
    Internal(String),
}

impl axum::response::IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg).into_response(),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg).into_response(),
            ApiError::Internal(detail) => {
                tracing::error!(error = %detail, "Request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal error").into_response()
            }
        }
    }
}

impl From<RegistryError> for ApiError {
    fn from(e: RegistryError) -> Self {
        match e {
            RegistryError::Validation(msg) => ApiError::BadRequest(msg),
            RegistryError::NotFound { .. } => ApiError::NotFound(e.to_string()),
            RegistryError::Repo(repo) => ApiError::Internal(repo.to_string()),
        }
    }
}

impl From<DomainError> for ApiError {
    fn from(e: DomainError) -> Self {
        RegistryError::from(e).into()
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        ApiError::BadRequest(e.to_string())
    }
}
