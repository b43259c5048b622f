//! Authorization for the operations console
//!
//! Permission sets are loaded per user from injected [`sources`], evaluated
//! against the resource being accessed by the [`permissions::ScopeMatcher`]
//! and consumed through [`gate::PermissionGate`] or the route guard in
//! `crate::server::middleware`.

pub mod context;
pub mod gate;
pub mod permissions;
pub mod resolver;
pub mod sources;

pub use context::PermissionContext;
pub use gate::{GateMode, GateRender, GateState, Gated, PendingCheck, PermissionGate};
pub use permissions::{
    AccessContext, DebriefRecord, DebriefStatus, DelegationRecord, PermissionGrant,
    PermissionSet, PermissionValue, ScopeMatcher,
};
pub use resolver::PermissionResolver;
pub use sources::{
    DebriefStatusSource, DelegationSource, GrantSource, MemorySources, PermissionSources,
};
