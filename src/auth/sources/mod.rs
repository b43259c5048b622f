//! Data sources consulted by the permission resolver
//!
//! Each source is injected into the resolver at construction time. The
//! database-backed implementations live in `crate::storage`; [`MemorySources`]
//! keeps everything in process.

mod memory;

pub use memory::MemorySources;

use crate::auth::permissions::{DebriefRecord, DelegationRecord, PermissionSet};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::sync::Arc;

/// Source of per-user resolved permission sets
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GrantSource: Send + Sync {
    /// Load the complete permission set of a user
    async fn load_permission_set(&self, user_id: &str) -> Result<PermissionSet>;
}

/// Source of debrief edit delegations
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DelegationSource: Send + Sync {
    /// Find a non-revoked delegation of `debrief_id` to `pilot_id`
    async fn find_active_delegation(
        &self,
        debrief_id: &str,
        pilot_id: &str,
    ) -> Result<Option<DelegationRecord>>;
}

/// Source of debrief lifecycle state
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DebriefStatusSource: Send + Sync {
    /// Current state and owning unit of a debrief
    async fn debrief_status(&self, debrief_id: &str) -> Result<Option<DebriefRecord>>;
}

/// The three sources a resolver needs
#[derive(Clone)]
pub struct PermissionSources {
    pub grants: Arc<dyn GrantSource>,
    pub delegations: Arc<dyn DelegationSource>,
    pub debriefs: Arc<dyn DebriefStatusSource>,
}

impl PermissionSources {
    pub fn new(
        grants: Arc<dyn GrantSource>,
        delegations: Arc<dyn DelegationSource>,
        debriefs: Arc<dyn DebriefStatusSource>,
    ) -> Self {
        Self {
            grants,
            delegations,
            debriefs,
        }
    }

    /// Use one backend for all three lookups
    pub fn shared<T>(source: Arc<T>) -> Self
    where
        T: GrantSource + DelegationSource + DebriefStatusSource + 'static,
    {
        Self {
            grants: source.clone(),
            delegations: source.clone(),
            debriefs: source,
        }
    }
}
