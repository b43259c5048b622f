//! Storage layer for readyroom
//!
//! Relational persistence of role grants, pilot assignments, debriefs and
//! delegations. The database handle implements the permission source traits
//! directly, so it can be injected into a resolver as-is.

/// Database storage module
pub mod database;

pub use database::{Database, DatabaseBackendType};
