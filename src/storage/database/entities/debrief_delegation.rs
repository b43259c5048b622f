use crate::auth::permissions::DelegationRecord;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Per-debrief edit delegation database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "debrief_delegations")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub debrief_id: String,

    /// Pilot the debrief was delegated to
    pub delegated_to_pilot_id: String,

    /// User who created the delegation
    pub delegated_by: Option<String>,

    pub revoked: bool,

    pub created_at: DateTimeWithTimeZone,

    pub revoked_at: Option<DateTimeWithTimeZone>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Convert to the domain record
    pub fn to_record(&self) -> DelegationRecord {
        DelegationRecord {
            debrief_id: self.debrief_id.clone(),
            delegated_to_pilot_id: self.delegated_to_pilot_id.clone(),
            revoked: self.revoked,
        }
    }
}
