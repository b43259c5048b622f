//! Permission resolver configuration

use super::*;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Permission resolver configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionsConfig {
    /// Reload a cached permission set after this many seconds.
    /// `None` keeps it for the whole session.
    #[serde(default)]
    pub session_ttl_seconds: Option<u64>,
    /// Maximum number of users whose permission sets are cached
    #[serde(default = "default_max_sessions")]
    pub max_sessions: usize,
}

impl Default for PermissionsConfig {
    fn default() -> Self {
        Self {
            session_ttl_seconds: None,
            max_sessions: default_max_sessions(),
        }
    }
}

impl PermissionsConfig {
    pub fn session_ttl(&self) -> Option<Duration> {
        self.session_ttl_seconds.map(Duration::from_secs)
    }

    /// Merge permission configurations (other takes precedence)
    pub fn merge(mut self, other: Self) -> Self {
        if other.session_ttl_seconds.is_some() {
            self.session_ttl_seconds = other.session_ttl_seconds;
        }
        if other.max_sessions != default_max_sessions() {
            self.max_sessions = other.max_sessions;
        }
        self
    }
}
