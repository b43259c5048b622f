//! Tests for error handling

use super::types::{PermissionError, ReadyroomError};

#[test]
fn test_error_creation() {
    let error = ReadyroomError::config("missing database url");
    assert!(matches!(error, ReadyroomError::Config(_)));

    let error = ReadyroomError::not_found("debrief D1");
    assert!(matches!(error, ReadyroomError::NotFound(msg) if msg == "debrief D1"));
}

#[test]
fn test_grant_lookup_helper() {
    let error = ReadyroomError::grant_lookup("connection refused");
    assert!(matches!(
        error,
        ReadyroomError::Permission(PermissionError::GrantLookupFailure(msg)) if msg == "connection refused"
    ));
}

#[test]
fn test_database_error_maps_to_grant_lookup_failure() {
    let error = ReadyroomError::from(sea_orm::DbErr::Custom("pool timed out".to_string()));
    let permission = error.into_permission_error();
    assert_eq!(permission.kind(), "grant_lookup_failure");
    assert!(permission.to_string().contains("pool timed out"));
}

#[test]
fn test_permission_error_keeps_its_kind() {
    let error = ReadyroomError::from(PermissionError::UnknownPermission(
        "manage_roster".to_string(),
    ));
    assert_eq!(
        error.into_permission_error(),
        PermissionError::UnknownPermission("manage_roster".to_string())
    );
}

#[test]
fn test_error_display() {
    let error = PermissionError::InvalidContext {
        permission: "manage_roster".to_string(),
        missing: "squadron_id",
    };
    assert_eq!(
        error.to_string(),
        "Invalid context for manage_roster: missing squadron_id"
    );
    assert_eq!(error.kind(), "invalid_context");

    let error = ReadyroomError::validation("ttl must be positive");
    assert_eq!(error.to_string(), "Validation error: ttl must be positive");
}
