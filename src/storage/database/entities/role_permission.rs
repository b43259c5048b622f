use crate::auth::permissions::{self, ScopeLevel};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Permission granted by a role at a scope level
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "role_permissions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    /// Granting role
    pub role: String,

    /// Permission name
    pub permission: String,

    /// Stored scope level (`flag`, `global`, `own_wing`, `own_squadron`, `flight`)
    pub scope: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Convert to the domain row; unknown scope levels are rejected
    pub fn to_role_permission(
        &self,
    ) -> crate::utils::error::Result<permissions::RolePermission> {
        Ok(permissions::RolePermission {
            role: self.role.clone(),
            permission: self.permission.clone(),
            scope: self.scope.parse::<ScopeLevel>()?,
        })
    }
}
