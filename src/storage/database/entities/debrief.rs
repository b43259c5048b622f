use crate::auth::permissions::{DebriefRecord, DebriefStatus};
use crate::utils::error::ReadyroomError;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Mission debrief database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "debriefs")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,

    /// `draft` or `finalized`
    pub status: String,

    /// Owning wing
    pub wing_id: Option<String>,

    /// Owning squadron
    pub squadron_id: Option<String>,

    pub created_at: DateTimeWithTimeZone,

    /// Set once when the debrief is finalized
    pub finalized_at: Option<DateTimeWithTimeZone>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Convert to the domain record
    pub fn to_record(&self) -> crate::utils::error::Result<DebriefRecord> {
        let status = DebriefStatus::parse(&self.status).ok_or_else(|| {
            ReadyroomError::validation(format!(
                "Debrief {} has unknown status {}",
                self.id, self.status
            ))
        })?;

        Ok(DebriefRecord {
            debrief_id: self.id.clone(),
            status,
            wing_id: self.wing_id.clone(),
            squadron_id: self.squadron_id.clone(),
        })
    }
}
