use crate::auth::permissions::{DebriefRecord, DebriefStatus};
use crate::utils::error::{ReadyroomError, Result};
use sea_orm::*;
use tracing::{debug, info};

use super::super::entities::{self, debrief};
use super::types::SeaOrmDatabase;

impl SeaOrmDatabase {
    /// Store a new debrief
    pub async fn create_debrief(&self, record: &DebriefRecord) -> Result<()> {
        debug!("Creating debrief: {}", record.debrief_id);

        let now = chrono::Utc::now();
        let active_model = debrief::ActiveModel {
            id: Set(record.debrief_id.clone()),
            status: Set(record.status.as_str().to_string()),
            wing_id: Set(record.wing_id.clone()),
            squadron_id: Set(record.squadron_id.clone()),
            created_at: Set(now.into()),
            finalized_at: Set(match record.status {
                DebriefStatus::Finalized => Some(now.into()),
                DebriefStatus::Draft => None,
            }),
        };

        entities::Debrief::insert(active_model)
            .exec_without_returning(&self.db)
            .await
            .map_err(ReadyroomError::Database)?;

        Ok(())
    }

    /// Find a debrief by ID
    pub async fn find_debrief(&self, debrief_id: &str) -> Result<Option<DebriefRecord>> {
        debug!("Finding debrief: {}", debrief_id);

        entities::Debrief::find_by_id(debrief_id.to_string())
            .one(&self.db)
            .await
            .map_err(ReadyroomError::Database)?
            .map(|model| model.to_record())
            .transpose()
    }

    /// Move a debrief to `Finalized`. Finalizing twice is a no-op.
    pub async fn finalize_debrief(&self, debrief_id: &str) -> Result<()> {
        let model = entities::Debrief::find_by_id(debrief_id.to_string())
            .one(&self.db)
            .await
            .map_err(ReadyroomError::Database)?
            .ok_or_else(|| ReadyroomError::not_found(format!("Debrief not found: {}", debrief_id)))?;

        if model.status == DebriefStatus::Finalized.as_str() {
            return Ok(());
        }

        let mut active_model: debrief::ActiveModel = model.into();
        active_model.status = Set(DebriefStatus::Finalized.as_str().to_string());
        active_model.finalized_at = Set(Some(chrono::Utc::now().into()));

        active_model
            .update(&self.db)
            .await
            .map_err(ReadyroomError::Database)?;

        info!("Debrief finalized: {}", debrief_id);
        Ok(())
    }
}
