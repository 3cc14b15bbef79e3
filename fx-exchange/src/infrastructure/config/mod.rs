//! Configuration loading for the quote exchange
//!
//! Supports JSON configuration files for:
//! - Server settings (bind address, SSE keep-alive)
//! - Storage backend (in-memory or SQLite)
//! - Seed quotes loaded at startup

use chrono::{NaiveDate, NaiveDateTime};
use fx_core::{NewQuote, Rate};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

/// Root configuration for the quote exchange
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Service name, logged at startup
    #[serde(default = "default_service_name")]
    pub name: String,

    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub storage: StorageConfig,

    #[serde(default)]
    pub seed: SeedConfig,
}

fn default_service_name() -> String {
    "FX Quote Exchange".to_string()
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            name: default_service_name(),
            server: ServerConfig::default(),
            storage: StorageConfig::default(),
            seed: SeedConfig::default(),
        }
    }
}

impl ServiceConfig {
    /// Load configuration from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::Io {
            path: path.as_ref().display().to_string(),
            error: e.to_string(),
        })?;

        Self::from_json(&content)
    }

    /// Parse configuration from JSON string
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Defaults plus the sample trading day of 2025-05-09
    pub fn with_sample_quotes() -> Self {
        Self {
            seed: SeedConfig::sample(),
            ..Default::default()
        }
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.storage.backend == StorageBackend::Sqlite && self.storage.url.trim().is_empty() {
            return Err(ConfigError::InvalidStorage(
                "sqlite backend requires a url".to_string(),
            ));
        }
        if self.server.keep_alive_secs == 0 {
            return Err(ConfigError::InvalidServer(
                "keep_alive_secs must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Interval between SSE keep-alive comments
    #[serde(default = "default_keep_alive_secs")]
    pub keep_alive_secs: u64,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_keep_alive_secs() -> u64 {
    15
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            keep_alive_secs: default_keep_alive_secs(),
        }
    }
}

impl ServerConfig {
    pub fn keep_alive(&self) -> Duration {
        Duration::from_secs(self.keep_alive_secs)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    Memory,
    Sqlite,
}

/// Storage configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "default_backend")]
    pub backend: StorageBackend,
    /// SQLite connection URL, ignored by the memory backend
    #[serde(default = "default_database_url")]
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

fn default_backend() -> StorageBackend {
    StorageBackend::Memory
}

fn default_database_url() -> String {
    "sqlite::memory:".to_string()
}

fn default_max_connections() -> u32 {
    5
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: default_backend(),
            url: default_database_url(),
            max_connections: default_max_connections(),
        }
    }
}

impl StorageConfig {
    pub fn sqlite(url: impl Into<String>) -> Self {
        Self {
            backend: StorageBackend::Sqlite,
            url: url.into(),
            ..Default::default()
        }
    }
}

/// Seed data written at startup
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedConfig {
    /// Clear the store before inserting the seed quotes
    #[serde(default = "default_reset_on_start")]
    pub reset_on_start: bool,
    #[serde(default)]
    pub quotes: Vec<SeedQuoteConfig>,
}

fn default_reset_on_start() -> bool {
    true
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            reset_on_start: default_reset_on_start(),
            quotes: Vec::new(),
        }
    }
}

impl SeedConfig {
    /// Five quotes spread over the morning of 2025-05-09
    pub fn sample() -> Self {
        let quotes = [
            (3.50, 3.70, (10, 20)),
            (3.55, 3.70, (10, 30)),
            (3.60, 3.80, (10, 40)),
            (3.65, 3.80, (11, 45)),
            (3.70, 3.90, (11, 55)),
        ]
        .into_iter()
        .filter_map(|(buy, sell, (h, m))| {
            NaiveDate::from_ymd_opt(2025, 5, 9)
                .and_then(|d| d.and_hms_opt(h, m, 0))
                .map(|date_time| SeedQuoteConfig {
                    buy,
                    sell,
                    date_time,
                })
        })
        .collect();

        Self {
            reset_on_start: true,
            quotes,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedQuoteConfig {
    pub buy: Rate,
    pub sell: Rate,
    pub date_time: NaiveDateTime,
}

impl SeedQuoteConfig {
    pub fn to_new_quote(&self) -> NewQuote {
        NewQuote::new(self.buy, self.sell, self.date_time)
    }
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {error}")]
    Io { path: String, error: String },

    #[error("Failed to parse config: {0}")]
    Parse(String),

    #[error("Invalid server config: {0}")]
    InvalidServer(String),

    #[error("Invalid storage config: {0}")]
    InvalidStorage(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_config() {
        let config = ServiceConfig::from_json("{}").unwrap();

        assert_eq!(config.name, "FX Quote Exchange");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.storage.backend, StorageBackend::Memory);
        assert!(config.seed.quotes.is_empty());
    }

    #[test]
    fn test_parse_full_config() {
        let json = r#"{
            "name": "Test Desk",
            "server": { "host": "127.0.0.1", "port": 9000, "keep_alive_secs": 5 },
            "storage": { "backend": "sqlite", "url": "sqlite://quotes.db", "max_connections": 2 },
            "seed": {
                "reset_on_start": false,
                "quotes": [
                    { "buy": 3.5, "sell": 3.7, "date_time": "2025-05-09T10:20:00" }
                ]
            }
        }"#;

        let config = ServiceConfig::from_json(json).unwrap();

        assert_eq!(config.bind_address(), "127.0.0.1:9000");
        assert_eq!(config.server.keep_alive(), Duration::from_secs(5));
        assert_eq!(config.storage.backend, StorageBackend::Sqlite);
        assert_eq!(config.storage.max_connections, 2);
        assert!(!config.seed.reset_on_start);

        let quote = config.seed.quotes[0].to_new_quote();
        assert_eq!(quote.buy, 3.5);
        assert_eq!(
            quote.date_time,
            NaiveDate::from_ymd_opt(2025, 5, 9)
                .unwrap()
                .and_hms_opt(10, 20, 0)
                .unwrap()
        );
    }

    #[test]
    fn test_rejects_unknown_backend() {
        let json = r#"{ "storage": { "backend": "postgres" } }"#;
        assert!(matches!(
            ServiceConfig::from_json(json),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_rejects_zero_keep_alive() {
        let json = r#"{ "server": { "keep_alive_secs": 0 } }"#;
        assert!(matches!(
            ServiceConfig::from_json(json),
            Err(ConfigError::InvalidServer(_))
        ));
    }

    #[test]
    fn test_rejects_empty_sqlite_url() {
        let json = r#"{ "storage": { "backend": "sqlite", "url": " " } }"#;
        assert!(matches!(
            ServiceConfig::from_json(json),
            Err(ConfigError::InvalidStorage(_))
        ));
    }

    #[test]
    fn test_sample_quotes() {
        let config = ServiceConfig::with_sample_quotes();

        assert_eq!(config.seed.quotes.len(), 5);
        assert!(config.seed.reset_on_start);
        assert_eq!(config.seed.quotes[4].buy, 3.70);
        assert_eq!(config.seed.quotes[4].sell, 3.90);
    }

    #[test]
    fn test_bundled_sqlite_config_matches_sample() {
        let config = ServiceConfig::from_json(include_str!("../../../config/sqlite.json")).unwrap();
        let sample = SeedConfig::sample();

        assert_eq!(config.storage.backend, StorageBackend::Sqlite);
        assert_eq!(config.seed.quotes.len(), sample.quotes.len());
        for (loaded, expected) in config.seed.quotes.iter().zip(&sample.quotes) {
            assert_eq!(loaded.to_new_quote(), expected.to_new_quote());
        }
    }

    #[test]
    fn test_missing_file() {
        let err = ServiceConfig::from_file("/nonexistent/fx.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
