//! Engine configuration loaded from environment variables.

use std::net::SocketAddr;
use std::str::FromStr;

/// Where characters are stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    Sqlite,
    Memory,
}

impl FromStr for StorageBackend {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sqlite" => Ok(Self::Sqlite),
            "memory" => Ok(Self::Memory),
            _ => Err(ConfigError::UnknownBackend(s.to_string())),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Unknown STORAGE_BACKEND '{0}', expected 'sqlite' or 'memory'")]
    UnknownBackend(String),
    #[error("Invalid server port '{0}'")]
    InvalidPort(String),
    #[error("Invalid bind address '{0}'")]
    InvalidAddress(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    pub server_name: String,
    pub database_path: String,
    pub storage_backend: StorageBackend,
    pub server_host: String,
    pub server_port: u16,
    /// Comma-separated origins, or `*`. CORS is off when unset.
    pub cors_allowed_origins: Option<String>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            server_name: "ACIT".into(),
            database_path: "characters.sqlite".into(),
            storage_backend: StorageBackend::Sqlite,
            server_host: "0.0.0.0".into(),
            server_port: 5000,
            cors_allowed_origins: None,
        }
    }
}

impl EngineConfig {
    /// Read the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup, falling back to
    /// the defaults for unset keys.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let storage_backend = match lookup("STORAGE_BACKEND") {
            Some(raw) => raw.parse::<StorageBackend>()?,
            None => defaults.storage_backend,
        };
        let server_port = match lookup("SERVER_PORT").or_else(|| lookup("PORT")) {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw))?,
            None => defaults.server_port,
        };

        Ok(Self {
            server_name: lookup("SERVER_NAME").unwrap_or(defaults.server_name),
            database_path: lookup("DATABASE_PATH").unwrap_or(defaults.database_path),
            storage_backend,
            server_host: lookup("SERVER_HOST").unwrap_or(defaults.server_host),
            server_port,
            cors_allowed_origins: lookup("CORS_ALLOWED_ORIGINS")
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
        })
    }

    pub fn bind_addr(&self) -> Result<SocketAddr, ConfigError> {
        let raw = format!("{}:{}", self.server_host, self.server_port);
        raw.parse().map_err(|_| ConfigError::InvalidAddress(raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = EngineConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, EngineConfig::default());
        assert_eq!(config.bind_addr().unwrap().port(), 5000);
    }

    #[test]
    fn reads_overrides_and_port_fallback() {
        let config = EngineConfig::from_lookup(lookup(&[
            ("SERVER_NAME", "Test Server"),
            ("STORAGE_BACKEND", "Memory"),
            ("PORT", "8080"),
            ("SERVER_HOST", "127.0.0.1"),
            ("CORS_ALLOWED_ORIGINS", "  "),
        ]))
        .unwrap();
        assert_eq!(config.server_name, "Test Server");
        assert_eq!(config.storage_backend, StorageBackend::Memory);
        assert_eq!(config.server_port, 8080);
        assert_eq!(config.cors_allowed_origins, None);
        assert_eq!(config.bind_addr().unwrap().to_string(), "127.0.0.1:8080");
    }

    #[test]
    fn rejects_bad_backend_and_port() {
        assert!(matches!(
            EngineConfig::from_lookup(lookup(&[("STORAGE_BACKEND", "postgres")])),
            Err(ConfigError::UnknownBackend(_))
        ));
        assert!(matches!(
            EngineConfig::from_lookup(lookup(&[("SERVER_PORT", "http")])),
            Err(ConfigError::InvalidPort(_))
        ));
    }
}
