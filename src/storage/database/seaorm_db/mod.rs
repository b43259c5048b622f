// Module declarations
mod connection;
mod debrief_ops;
mod delegation_ops;
mod grant_ops;
mod sources;
mod types;

// Re-export public types
pub use types::{DatabaseBackendType, SeaOrmDatabase};
