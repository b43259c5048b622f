//! Error types for readyroom

use thiserror::Error;

/// Result type alias for readyroom
pub type Result<T> = std::result::Result<T, ReadyroomError>;

/// Main error type for readyroom
#[derive(Error, Debug)]
pub enum ReadyroomError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Database errors
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Not found errors
    #[error("Not found: {0}")]
    NotFound(String),

    /// Internal errors
    #[error("Internal error: {0}")]
    Internal(String),

    /// Permission evaluation failures
    #[error(transparent)]
    Permission(#[from] PermissionError),
}

/// Reasons a permission check could not produce a grant.
///
/// None of these ever cross the boolean API of the resolver: they are logged
/// and folded into a denial.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PermissionError {
    /// A grant, delegation or debrief status source was unreachable or
    /// returned malformed data.
    #[error("Grant lookup failed: {0}")]
    GrantLookupFailure(String),

    /// The permission name is not present in the resolved set.
    #[error("Unknown permission: {0}")]
    UnknownPermission(String),

    /// A scope-qualified grant exists but the access context does not carry
    /// the identifier it needs.
    #[error("Invalid context for {permission}: missing {missing}")]
    InvalidContext {
        permission: String,
        missing: &'static str,
    },
}

impl PermissionError {
    /// Short stable label used as a structured log field
    pub fn kind(&self) -> &'static str {
        match self {
            Self::GrantLookupFailure(_) => "grant_lookup_failure",
            Self::UnknownPermission(_) => "unknown_permission",
            Self::InvalidContext { .. } => "invalid_context",
        }
    }
}
