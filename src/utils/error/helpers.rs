//! Helper functions for creating specific error types

use super::types::{PermissionError, ReadyroomError};

/// Helper functions for creating specific errors
impl ReadyroomError {
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation(message.into())
    }

    pub fn not_found<S: Into<String>>(message: S) -> Self {
        Self::NotFound(message.into())
    }

    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal(message.into())
    }

    pub fn grant_lookup<S: Into<String>>(message: S) -> Self {
        Self::Permission(PermissionError::GrantLookupFailure(message.into()))
    }

    /// Map any error onto the permission taxonomy.
    ///
    /// Source failures of every shape become `GrantLookupFailure`; errors that
    /// already carry a permission kind keep it.
    pub fn into_permission_error(self) -> PermissionError {
        match self {
            Self::Permission(e) => e,
            other => PermissionError::GrantLookupFailure(other.to_string()),
        }
    }
}
