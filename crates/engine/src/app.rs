//! Application state and composition.

use std::sync::Arc;

use crate::config::{EngineConfig, StorageBackend};
use crate::infrastructure::{
    memory::InMemoryCharacterRepo,
    ports::{CharacterRepo, RepoError},
    sqlite::SqliteCharacterRepo,
};
use crate::use_cases::{CharacterRegistry, RegistryError};

/// Main application state.
///
/// Passed to HTTP handlers via Axum state.
pub struct App {
    pub registry: CharacterRegistry,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Storage(#[from] RepoError),
    #[error(transparent)]
    Registry(#[from] RegistryError),
}

impl App {
    pub fn new(registry: CharacterRegistry) -> Self {
        Self { registry }
    }

    /// Open the configured store and build the registry on top of it.
    pub async fn from_config(config: &EngineConfig) -> Result<Self, AppError> {
        let repo = connect_storage(config).await?;
        let registry = CharacterRegistry::new(&config.server_name, &config.database_path, repo)?;
        Ok(Self::new(registry))
    }
}

pub async fn connect_storage(config: &EngineConfig) -> Result<Arc<dyn CharacterRepo>, RepoError> {
    match config.storage_backend {
        StorageBackend::Sqlite => {
            tracing::info!(path = %config.database_path, "Opening SQLite character store");
            Ok(Arc::new(
                SqliteCharacterRepo::new(&config.database_path).await?,
            ))
        }
        StorageBackend::Memory => {
            tracing::info!("Using in-memory character store");
            Ok(Arc::new(InMemoryCharacterRepo::new()))
        }
    }
}
