use crate::auth::permissions::{
    PermissionSet, PermissionSetBuilder, PilotAssignment, RolePermission, ScopeLevel,
};
use crate::utils::error::{ReadyroomError, Result};
use sea_orm::sea_query::OnConflict;
use sea_orm::*;
use tracing::debug;

use super::super::entities::{self, pilot_assignment, role, role_permission, user_role};
use super::types::SeaOrmDatabase;

impl SeaOrmDatabase {
    /// Insert or replace the org-chart placement of a user
    pub async fn upsert_pilot_assignment(&self, assignment: &PilotAssignment) -> Result<()> {
        debug!("Upserting pilot assignment for user: {}", assignment.user_id);

        let active_model = pilot_assignment::ActiveModel {
            user_id: Set(assignment.user_id.clone()),
            pilot_id: Set(assignment.pilot_id.clone()),
            wing_id: Set(assignment.wing_id.clone()),
            squadron_id: Set(assignment.squadron_id.clone()),
            updated_at: Set(chrono::Utc::now().into()),
        };

        entities::PilotAssignment::insert(active_model)
            .on_conflict(
                OnConflict::column(pilot_assignment::Column::UserId)
                    .update_columns([
                        pilot_assignment::Column::PilotId,
                        pilot_assignment::Column::WingId,
                        pilot_assignment::Column::SquadronId,
                        pilot_assignment::Column::UpdatedAt,
                    ])
                    .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await
            .map_err(ReadyroomError::Database)?;

        Ok(())
    }

    /// Find the org-chart placement of a user
    pub async fn find_pilot_assignment(&self, user_id: &str) -> Result<Option<PilotAssignment>> {
        debug!("Finding pilot assignment for user: {}", user_id);

        let model = entities::PilotAssignment::find_by_id(user_id.to_string())
            .one(&self.db)
            .await
            .map_err(ReadyroomError::Database)?;

        Ok(model.map(|model| model.to_assignment()))
    }

    /// Create a role. Creating an existing role is a no-op.
    pub async fn create_role(&self, name: &str, description: Option<&str>) -> Result<()> {
        debug!("Creating role: {}", name);

        if self.role_exists(name).await? {
            return Ok(());
        }

        let active_model = role::ActiveModel {
            name: Set(name.to_string()),
            description: Set(description.map(str::to_string)),
            created_at: Set(chrono::Utc::now().into()),
        };

        entities::Role::insert(active_model)
            .exec_without_returning(&self.db)
            .await
            .map_err(ReadyroomError::Database)?;

        Ok(())
    }

    async fn role_exists(&self, name: &str) -> Result<bool> {
        let model = entities::Role::find_by_id(name.to_string())
            .one(&self.db)
            .await
            .map_err(ReadyroomError::Database)?;
        Ok(model.is_some())
    }

    async fn ensure_role(&self, name: &str) -> Result<()> {
        if self.role_exists(name).await? {
            Ok(())
        } else {
            Err(ReadyroomError::not_found(format!("Role not found: {}", name)))
        }
    }

    /// Grant a permission to a role at a scope level
    pub async fn add_role_permission(
        &self,
        role: &str,
        permission: &str,
        scope: ScopeLevel,
    ) -> Result<()> {
        debug!("Granting {} to role {} at {}", permission, role, scope);
        self.ensure_role(role).await?;

        let existing = entities::RolePermission::find()
            .filter(role_permission::Column::Role.eq(role))
            .filter(role_permission::Column::Permission.eq(permission))
            .filter(role_permission::Column::Scope.eq(scope.as_str()))
            .one(&self.db)
            .await
            .map_err(ReadyroomError::Database)?;
        if existing.is_some() {
            return Ok(());
        }

        let active_model = role_permission::ActiveModel {
            id: NotSet,
            role: Set(role.to_string()),
            permission: Set(permission.to_string()),
            scope: Set(scope.as_str().to_string()),
        };

        entities::RolePermission::insert(active_model)
            .exec(&self.db)
            .await
            .map_err(ReadyroomError::Database)?;

        Ok(())
    }

    /// Withdraw a permission from a role at every scope level
    pub async fn remove_role_permission(&self, role: &str, permission: &str) -> Result<u64> {
        debug!("Removing {} from role {}", permission, role);

        let result = entities::RolePermission::delete_many()
            .filter(role_permission::Column::Role.eq(role))
            .filter(role_permission::Column::Permission.eq(permission))
            .exec(&self.db)
            .await
            .map_err(ReadyroomError::Database)?;

        Ok(result.rows_affected)
    }

    /// Give a user a role. Assigning a held role is a no-op.
    pub async fn assign_role(&self, user_id: &str, role: &str) -> Result<()> {
        debug!("Assigning role {} to user {}", role, user_id);
        self.ensure_role(role).await?;

        let existing = entities::UserRole::find()
            .filter(user_role::Column::UserId.eq(user_id))
            .filter(user_role::Column::Role.eq(role))
            .one(&self.db)
            .await
            .map_err(ReadyroomError::Database)?;
        if existing.is_some() {
            return Ok(());
        }

        let active_model = user_role::ActiveModel {
            id: NotSet,
            user_id: Set(user_id.to_string()),
            role: Set(role.to_string()),
            created_at: Set(chrono::Utc::now().into()),
        };

        entities::UserRole::insert(active_model)
            .exec(&self.db)
            .await
            .map_err(ReadyroomError::Database)?;

        Ok(())
    }

    /// Take a role away from a user
    pub async fn revoke_role(&self, user_id: &str, role: &str) -> Result<u64> {
        debug!("Revoking role {} from user {}", role, user_id);

        let result = entities::UserRole::delete_many()
            .filter(user_role::Column::UserId.eq(user_id))
            .filter(user_role::Column::Role.eq(role))
            .exec(&self.db)
            .await
            .map_err(ReadyroomError::Database)?;

        Ok(result.rows_affected)
    }

    /// Every permission row granted through the roles of a user
    pub async fn role_permissions_for_user(&self, user_id: &str) -> Result<Vec<RolePermission>> {
        let roles: Vec<String> = entities::UserRole::find()
            .filter(user_role::Column::UserId.eq(user_id))
            .all(&self.db)
            .await
            .map_err(ReadyroomError::Database)?
            .into_iter()
            .map(|model| model.role)
            .collect();

        if roles.is_empty() {
            return Ok(Vec::new());
        }

        entities::RolePermission::find()
            .filter(role_permission::Column::Role.is_in(roles))
            .order_by_asc(role_permission::Column::Id)
            .all(&self.db)
            .await
            .map_err(ReadyroomError::Database)?
            .iter()
            .map(role_permission::Model::to_role_permission)
            .collect()
    }

    /// Resolve the roles of a user into their permission set.
    ///
    /// Users without a pilot assignment still get their flag and global
    /// grants; own-unit grants have nothing to resolve against and are left
    /// out.
    pub async fn build_permission_set(&self, user_id: &str) -> Result<PermissionSet> {
        let assignment = self
            .find_pilot_assignment(user_id)
            .await?
            .unwrap_or_else(|| PilotAssignment {
                user_id: user_id.to_string(),
                ..PilotAssignment::default()
            });
        let rows = self.role_permissions_for_user(user_id).await?;

        let mut builder = PermissionSetBuilder::new(&assignment);
        builder.extend(&rows);
        builder.build()
    }
}
