//! Scoped permissions
//!
//! Permission values, the pure scope matcher and construction of per-user
//! permission sets from role grants.

mod builder;
mod matcher;
pub mod names;
mod types;

pub use builder::{PermissionSetBuilder, PilotAssignment, RolePermission, ScopeLevel};
pub use matcher::ScopeMatcher;
pub use types::{
    AccessContext, DebriefRecord, DebriefStatus, DelegationRecord, PermissionGrant,
    PermissionSet, PermissionValue,
};
