//! Configuration data models
//!
//! This module defines all configuration structures used by readyroom.

#![allow(missing_docs)]

pub mod logging;
pub mod permissions;
pub mod storage;

pub use logging::*;
pub use permissions::*;
pub use storage::*;

/// Default maximum number of cached permission sessions
pub fn default_max_sessions() -> usize {
    10_000
}

/// Default database URL
pub fn default_database_url() -> String {
    "sqlite://data/readyroom.db?mode=rwc".to_string()
}

/// Default maximum database connections
pub fn default_max_connections() -> u32 {
    10
}

/// Default connection timeout in seconds
pub fn default_connection_timeout() -> u64 {
    5
}

/// Default log filter
pub fn default_log_level() -> String {
    "info".to_string()
}
