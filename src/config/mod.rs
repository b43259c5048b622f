//! Configuration management for readyroom
//!
//! This module handles loading, validation, and management of all configuration.

pub mod models;
pub mod validation;

pub use models::*;
pub use validation::Validate;

use crate::utils::error::{ReadyroomError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, info};

/// Prefix of every environment variable read by [`Config::from_env`]
pub const ENV_PREFIX: &str = "READYROOM_";

/// Main configuration struct
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Permission resolver configuration
    #[serde(default)]
    pub permissions: PermissionsConfig,
    /// Database configuration
    #[serde(default)]
    pub database: DatabaseConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a YAML file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| ReadyroomError::Config(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_yaml_str(&content)?;

        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Parse and validate configuration from YAML text
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(content)
            .map_err(|e| ReadyroomError::Config(format!("Failed to parse config: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from `READYROOM_*` environment variables
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");
        Self::from_env_vars(std::env::vars())
    }

    /// Build configuration from an explicit set of environment variables.
    ///
    /// Variables that are not set keep their defaults.
    pub fn from_env_vars<I>(vars: I) -> Result<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let vars: HashMap<String, String> = vars
            .into_iter()
            .filter_map(|(key, value)| {
                key.strip_prefix(ENV_PREFIX)
                    .map(|name| (name.to_string(), value))
            })
            .collect();

        let mut config = Self::default();

        if let Some(url) = vars.get("DATABASE_URL") {
            config.database.url = url.clone();
        }
        if let Some(max_conn) = vars.get("DATABASE_MAX_CONNECTIONS") {
            config.database.max_connections = parse_var("DATABASE_MAX_CONNECTIONS", max_conn)?;
        }
        if let Some(timeout) = vars.get("DATABASE_TIMEOUT") {
            config.database.connection_timeout = parse_var("DATABASE_TIMEOUT", timeout)?;
        }
        if let Some(ttl) = vars.get("SESSION_TTL") {
            config.permissions.session_ttl_seconds = Some(parse_var("SESSION_TTL", ttl)?);
        }
        if let Some(max_sessions) = vars.get("MAX_SESSIONS") {
            config.permissions.max_sessions = parse_var("MAX_SESSIONS", max_sessions)?;
        }
        if let Some(level) = vars.get("LOG_LEVEL") {
            config.logging.level = level.clone();
        }
        if let Some(json) = vars.get("LOG_JSON") {
            config.logging.json = parse_var("LOG_JSON", json)?;
        }

        config.validate()?;
        debug!("Configuration loaded from environment variables");
        Ok(config)
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        debug!("Validating configuration");

        self.permissions
            .validate()
            .map_err(|e| ReadyroomError::Config(format!("Permissions config error: {}", e)))?;

        self.database
            .validate()
            .map_err(|e| ReadyroomError::Config(format!("Database config error: {}", e)))?;

        self.logging
            .validate()
            .map_err(|e| ReadyroomError::Config(format!("Logging config error: {}", e)))?;

        Ok(())
    }

    /// Merge with another configuration (other takes precedence)
    pub fn merge(mut self, other: Self) -> Self {
        self.permissions = self.permissions.merge(other.permissions);
        self.database = self.database.merge(other.database);
        self.logging = self.logging.merge(other.logging);
        self
    }

    /// Convert to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self)
            .map_err(|e| ReadyroomError::Config(format!("Failed to serialize config to YAML: {}", e)))
    }
}

fn parse_var<T>(name: &str, value: &str) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    value.trim().parse().map_err(|e| {
        ReadyroomError::Config(format!("Invalid {}{}: {}", ENV_PREFIX, name, e))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn vars(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[tokio::test]
    async fn test_config_from_file() {
        let config_content = r#"
permissions:
  session_ttl_seconds: 1800
  max_sessions: 500

database:
  url: "sqlite::memory:"
  max_connections: 1

logging:
  level: "readyroom=debug"
  json: true
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(config_content.as_bytes()).unwrap();

        let config = Config::from_file(temp_file.path()).await.unwrap();

        assert_eq!(config.permissions.session_ttl_seconds, Some(1800));
        assert_eq!(config.permissions.max_sessions, 500);
        assert_eq!(config.database.url, "sqlite::memory:");
        assert_eq!(config.database.max_connections, 1);
        assert_eq!(config.database.connection_timeout, default_connection_timeout());
        assert!(config.logging.json);
    }

    #[tokio::test]
    async fn test_config_from_missing_file() {
        let result = Config::from_file("/nonexistent/readyroom.yaml").await;
        assert!(matches!(result, Err(ReadyroomError::Config(_))));
    }

    #[test]
    fn test_empty_yaml_uses_defaults() {
        let config = Config::from_yaml_str("{}").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_invalid_yaml_section_is_rejected() {
        let result = Config::from_yaml_str("permissions:\n  max_sessions: 0\n");
        assert!(matches!(result, Err(ReadyroomError::Config(msg)) if msg.contains("Permissions")));
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.permissions.session_ttl(), None);
    }

    #[test]
    fn test_config_from_env_vars() {
        let config = Config::from_env_vars(vars(&[
            ("READYROOM_DATABASE_URL", "postgres://db/readyroom"),
            ("READYROOM_DATABASE_MAX_CONNECTIONS", "20"),
            ("READYROOM_SESSION_TTL", "600"),
            ("READYROOM_LOG_JSON", "true"),
            ("DATABASE_URL", "ignored://other"),
        ]))
        .unwrap();

        assert_eq!(config.database.url, "postgres://db/readyroom");
        assert_eq!(config.database.max_connections, 20);
        assert_eq!(config.permissions.session_ttl_seconds, Some(600));
        assert!(config.logging.json);
    }

    #[test]
    fn test_config_from_env_vars_rejects_bad_numbers() {
        let result = Config::from_env_vars(vars(&[("READYROOM_SESSION_TTL", "soon")]));
        assert!(matches!(result, Err(ReadyroomError::Config(msg)) if msg.contains("READYROOM_SESSION_TTL")));
    }

    #[test]
    fn test_config_merge() {
        let base = Config::default();
        let mut other = Config::default();
        other.database.url = "sqlite::memory:".to_string();
        other.permissions.session_ttl_seconds = Some(60);

        let merged = base.merge(other);
        assert_eq!(merged.database.url, "sqlite::memory:");
        assert_eq!(merged.permissions.session_ttl_seconds, Some(60));
        assert_eq!(merged.logging, LoggingConfig::default());
    }

    #[test]
    fn test_config_yaml_round_trip() {
        let mut config = Config::default();
        config.permissions.max_sessions = 42;
        let yaml = config.to_yaml().unwrap();
        assert_eq!(Config::from_yaml_str(&yaml).unwrap(), config);
    }
}
