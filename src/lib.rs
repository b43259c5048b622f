//! # readyroom
//!
//! Scoped permission evaluation for a virtual squadron operations console.
//!
//! A user's roles resolve into a [`PermissionSet`]: a map from permission name
//! to either a plain flag or a list of scope grants (global, one wing, one
//! squadron, or a per-debrief flight delegation). The [`ScopeMatcher`] decides
//! whether a grant list covers the resource being accessed, the
//! [`PermissionResolver`] adds session caching, the delegation fallback and the
//! debrief lifecycle rule, and [`PermissionGate`] / the actix-web route guard
//! turn decisions into rendering or `403` responses.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use readyroom::{AccessContext, Config, Readyroom, names};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_file("config/readyroom.yaml").await?;
//!     let readyroom = Readyroom::new(config).await?;
//!
//!     let resolver = readyroom.resolver();
//!     let allowed = resolver
//!         .has_permission(
//!             "user-42",
//!             names::MANAGE_ROSTER,
//!             Some(&AccessContext::new().squadron("vfa-103")),
//!         )
//!         .await;
//!     println!("may manage roster: {}", allowed);
//!
//!     readyroom.shutdown().await?;
//!     Ok(())
//! }
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]

pub mod auth;
pub mod config;
pub mod server;
pub mod storage;
pub mod utils;

// Re-export main types
pub use auth::permissions::names;
pub use auth::{
    AccessContext, DebriefRecord, DebriefStatus, DelegationRecord, GateMode, GateRender,
    GateState, Gated, MemorySources, PendingCheck, PermissionContext, PermissionGate,
    PermissionGrant, PermissionResolver, PermissionSet, PermissionSources, PermissionValue,
    ScopeMatcher,
};
pub use config::Config;
pub use server::middleware::{AuthenticatedUser, RequirePermission};
pub use storage::Database;
pub use utils::error::{PermissionError, ReadyroomError, Result};

use std::sync::Arc;
use tracing::info;

/// Composed permission service: database, sources and resolver
pub struct Readyroom {
    config: Config,
    database: Option<Arc<Database>>,
    resolver: Arc<PermissionResolver>,
}

impl Readyroom {
    /// Connect to the configured database, run migrations and build a
    /// resolver over the database sources
    pub async fn new(config: Config) -> Result<Self> {
        config.validate()?;
        info!("Creating readyroom permission service");

        let database = Arc::new(Database::new(&config.database).await?);
        database.migrate().await?;

        let sources = PermissionSources::shared(Arc::clone(&database));
        let resolver = Arc::new(PermissionResolver::new(&config.permissions, sources));

        Ok(Self {
            config,
            database: Some(database),
            resolver,
        })
    }

    /// Build a resolver over caller-provided sources, without a database
    pub fn with_sources(config: Config, sources: PermissionSources) -> Result<Self> {
        config.validate()?;
        let resolver = Arc::new(PermissionResolver::new(&config.permissions, sources));

        Ok(Self {
            config,
            database: None,
            resolver,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Shared resolver handle
    pub fn resolver(&self) -> Arc<PermissionResolver> {
        Arc::clone(&self.resolver)
    }

    /// Database handle, when constructed with [`Readyroom::new`]
    pub fn database(&self) -> Option<&Arc<Database>> {
        self.database.as_ref()
    }

    /// Start a session for a user and load its permission set
    pub async fn session(&self, user_id: impl Into<String>) -> PermissionContext {
        PermissionContext::login(user_id, self.resolver()).await
    }

    /// Drop cached sessions and close the database
    pub async fn shutdown(self) -> Result<()> {
        info!("Shutting down readyroom permission service");
        self.resolver.invalidate_all();

        // The pool is shared between clones; closing one closes it for all
        if let Some(database) = self.database {
            Database::clone(&database).close().await?;
        }
        Ok(())
    }
}

/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
