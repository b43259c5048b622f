use crate::auth::permissions::DelegationRecord;
use crate::utils::error::{ReadyroomError, Result};
use sea_orm::sea_query::Expr;
use sea_orm::*;
use tracing::{debug, info};

use super::super::entities::{self, debrief_delegation};
use super::types::SeaOrmDatabase;

impl SeaOrmDatabase {
    /// Delegate editing of a debrief to a pilot.
    ///
    /// Returns the existing record when the pilot already holds an active
    /// delegation for the debrief.
    pub async fn delegate_debrief(
        &self,
        debrief_id: &str,
        pilot_id: &str,
        delegated_by: Option<&str>,
    ) -> Result<DelegationRecord> {
        if self.find_debrief(debrief_id).await?.is_none() {
            return Err(ReadyroomError::not_found(format!(
                "Debrief not found: {}",
                debrief_id
            )));
        }
        if let Some(existing) = self.find_active_delegation(debrief_id, pilot_id).await? {
            return Ok(existing);
        }

        let active_model = debrief_delegation::ActiveModel {
            id: NotSet,
            debrief_id: Set(debrief_id.to_string()),
            delegated_to_pilot_id: Set(pilot_id.to_string()),
            delegated_by: Set(delegated_by.map(str::to_string)),
            revoked: Set(false),
            created_at: Set(chrono::Utc::now().into()),
            revoked_at: Set(None),
        };

        entities::DebriefDelegation::insert(active_model)
            .exec(&self.db)
            .await
            .map_err(ReadyroomError::Database)?;

        info!("Debrief {} delegated to pilot {}", debrief_id, pilot_id);
        Ok(DelegationRecord {
            debrief_id: debrief_id.to_string(),
            delegated_to_pilot_id: pilot_id.to_string(),
            revoked: false,
        })
    }

    /// Revoke every active delegation of a debrief to a pilot
    pub async fn revoke_delegation(&self, debrief_id: &str, pilot_id: &str) -> Result<u64> {
        let now: sea_orm::prelude::DateTimeWithTimeZone = chrono::Utc::now().into();

        let result = entities::DebriefDelegation::update_many()
            .col_expr(debrief_delegation::Column::Revoked, Expr::value(true))
            .col_expr(debrief_delegation::Column::RevokedAt, Expr::value(now))
            .filter(debrief_delegation::Column::DebriefId.eq(debrief_id))
            .filter(debrief_delegation::Column::DelegatedToPilotId.eq(pilot_id))
            .filter(debrief_delegation::Column::Revoked.eq(false))
            .exec(&self.db)
            .await
            .map_err(ReadyroomError::Database)?;

        info!(
            "Revoked {} delegation(s) of debrief {} for pilot {}",
            result.rows_affected, debrief_id, pilot_id
        );
        Ok(result.rows_affected)
    }

    /// Find a non-revoked delegation of a debrief to a pilot
    pub async fn find_active_delegation(
        &self,
        debrief_id: &str,
        pilot_id: &str,
    ) -> Result<Option<DelegationRecord>> {
        debug!(
            "Finding active delegation of debrief {} for pilot {}",
            debrief_id, pilot_id
        );

        let model = entities::DebriefDelegation::find()
            .filter(debrief_delegation::Column::DebriefId.eq(debrief_id))
            .filter(debrief_delegation::Column::DelegatedToPilotId.eq(pilot_id))
            .filter(debrief_delegation::Column::Revoked.eq(false))
            .one(&self.db)
            .await
            .map_err(ReadyroomError::Database)?;

        Ok(model.map(|model| model.to_record()))
    }

    /// Every delegation of a debrief, revoked ones included, oldest first
    pub async fn list_delegations(&self, debrief_id: &str) -> Result<Vec<DelegationRecord>> {
        let models = entities::DebriefDelegation::find()
            .filter(debrief_delegation::Column::DebriefId.eq(debrief_id))
            .order_by_asc(debrief_delegation::Column::Id)
            .all(&self.db)
            .await
            .map_err(ReadyroomError::Database)?;

        Ok(models.iter().map(debrief_delegation::Model::to_record).collect())
    }
}
