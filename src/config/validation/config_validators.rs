//! Validators for the configuration sections

use super::trait_def::Validate;
use crate::config::models::*;
use tracing::debug;

impl Validate for PermissionsConfig {
    fn validate(&self) -> Result<(), String> {
        debug!("Validating permissions configuration");

        if self.session_ttl_seconds == Some(0) {
            return Err("Session TTL must be greater than 0 when set".to_string());
        }

        if self.max_sessions == 0 {
            return Err("Max sessions must be greater than 0".to_string());
        }

        Ok(())
    }
}

impl Validate for DatabaseConfig {
    fn validate(&self) -> Result<(), String> {
        debug!("Validating database configuration");

        if self.url.is_empty() {
            return Err("Database URL cannot be empty".to_string());
        }

        let supported = ["sqlite:", "postgres://", "postgresql://"];
        if !supported.iter().any(|prefix| self.url.starts_with(prefix)) {
            return Err(format!(
                "Unsupported database URL scheme: {}",
                self.url.split(':').next().unwrap_or_default()
            ));
        }

        if self.max_connections == 0 {
            return Err("Max connections must be greater than 0".to_string());
        }

        if self.connection_timeout == 0 {
            return Err("Connection timeout must be greater than 0".to_string());
        }

        Ok(())
    }
}

impl Validate for LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        if self.level.trim().is_empty() {
            return Err("Log level cannot be empty".to_string());
        }

        tracing_subscriber::EnvFilter::try_new(&self.level)
            .map(|_| ())
            .map_err(|e| format!("Invalid log filter '{}': {}", self.level, e))
    }
}
