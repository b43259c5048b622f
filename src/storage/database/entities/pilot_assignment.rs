use crate::auth::permissions;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Pilot assignment database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "pilot_assignments")]
pub struct Model {
    /// User this assignment belongs to
    #[sea_orm(primary_key, auto_increment = false)]
    pub user_id: String,

    /// Pilot record of the user
    pub pilot_id: Option<String>,

    /// Wing the user belongs to
    pub wing_id: Option<String>,

    /// Squadron the user belongs to
    pub squadron_id: Option<String>,

    /// Last update timestamp
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Convert to the domain assignment
    pub fn to_assignment(&self) -> permissions::PilotAssignment {
        permissions::PilotAssignment {
            user_id: self.user_id.clone(),
            pilot_id: self.pilot_id.clone(),
            wing_id: self.wing_id.clone(),
            squadron_id: self.squadron_id.clone(),
        }
    }
}
