//! In-process permission sources

use crate::auth::permissions::{
    DebriefRecord, DebriefStatus, DelegationRecord, PermissionSet,
};
use crate::utils::error::{ReadyroomError, Result};
use async_trait::async_trait;
use dashmap::DashMap;
use tracing::debug;

use super::{DebriefStatusSource, DelegationSource, GrantSource};

/// Permission sets, delegations and debriefs held in memory.
///
/// Writes model the administrator actions of the console: assigning a set,
/// delegating or revoking debrief edit rights, finalizing a debrief.
#[derive(Debug, Default)]
pub struct MemorySources {
    permission_sets: DashMap<String, PermissionSet>,
    delegations: DashMap<String, Vec<DelegationRecord>>,
    debriefs: DashMap<String, DebriefRecord>,
}

impl MemorySources {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the permission set of a user
    pub fn set_permissions(&self, user_id: impl Into<String>, set: PermissionSet) {
        self.permission_sets.insert(user_id.into(), set);
    }

    pub fn remove_permissions(&self, user_id: &str) -> Option<PermissionSet> {
        self.permission_sets.remove(user_id).map(|(_, set)| set)
    }

    /// Record a new delegation of `debrief_id` to `pilot_id`
    pub fn delegate(&self, debrief_id: impl Into<String>, pilot_id: impl Into<String>) {
        let record = DelegationRecord {
            debrief_id: debrief_id.into(),
            delegated_to_pilot_id: pilot_id.into(),
            revoked: false,
        };
        debug!(
            "Delegating debrief {} to pilot {}",
            record.debrief_id, record.delegated_to_pilot_id
        );
        self.delegations
            .entry(record.debrief_id.clone())
            .or_default()
            .push(record);
    }

    /// Revoke every active delegation of `debrief_id` to `pilot_id`.
    ///
    /// Returns the number of records revoked.
    pub fn revoke(&self, debrief_id: &str, pilot_id: &str) -> usize {
        let Some(mut records) = self.delegations.get_mut(debrief_id) else {
            return 0;
        };

        let mut revoked = 0;
        for record in records
            .iter_mut()
            .filter(|r| r.delegated_to_pilot_id == pilot_id && !r.revoked)
        {
            record.revoked = true;
            revoked += 1;
        }
        revoked
    }

    /// Insert or replace a debrief
    pub fn upsert_debrief(&self, record: DebriefRecord) {
        self.debriefs.insert(record.debrief_id.clone(), record);
    }

    /// Move a debrief to `Finalized`. Finalizing twice is a no-op.
    pub fn finalize(&self, debrief_id: &str) -> Result<()> {
        let mut record = self
            .debriefs
            .get_mut(debrief_id)
            .ok_or_else(|| ReadyroomError::not_found(format!("Debrief {}", debrief_id)))?;
        record.status = DebriefStatus::Finalized;
        Ok(())
    }
}

#[async_trait]
impl GrantSource for MemorySources {
    async fn load_permission_set(&self, user_id: &str) -> Result<PermissionSet> {
        Ok(self
            .permission_sets
            .get(user_id)
            .map(|set| set.value().clone())
            .unwrap_or_default())
    }
}

#[async_trait]
impl DelegationSource for MemorySources {
    async fn find_active_delegation(
        &self,
        debrief_id: &str,
        pilot_id: &str,
    ) -> Result<Option<DelegationRecord>> {
        Ok(self.delegations.get(debrief_id).and_then(|records| {
            records
                .iter()
                .find(|r| r.delegated_to_pilot_id == pilot_id && !r.revoked)
                .cloned()
        }))
    }
}

#[async_trait]
impl DebriefStatusSource for MemorySources {
    async fn debrief_status(&self, debrief_id: &str) -> Result<Option<DebriefRecord>> {
        Ok(self.debriefs.get(debrief_id).map(|r| r.value().clone()))
    }
}
