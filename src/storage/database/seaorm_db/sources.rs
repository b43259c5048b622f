//! Permission sources backed by the database

use crate::auth::permissions::{DebriefRecord, DelegationRecord, PermissionSet};
use crate::auth::sources::{DebriefStatusSource, DelegationSource, GrantSource};
use crate::utils::error::Result;
use async_trait::async_trait;

use super::types::SeaOrmDatabase;

#[async_trait]
impl GrantSource for SeaOrmDatabase {
    async fn load_permission_set(&self, user_id: &str) -> Result<PermissionSet> {
        self.build_permission_set(user_id).await
    }
}

#[async_trait]
impl DelegationSource for SeaOrmDatabase {
    async fn find_active_delegation(
        &self,
        debrief_id: &str,
        pilot_id: &str,
    ) -> Result<Option<DelegationRecord>> {
        SeaOrmDatabase::find_active_delegation(self, debrief_id, pilot_id).await
    }
}

#[async_trait]
impl DebriefStatusSource for SeaOrmDatabase {
    async fn debrief_status(&self, debrief_id: &str) -> Result<Option<DebriefRecord>> {
        self.find_debrief(debrief_id).await
    }
}
