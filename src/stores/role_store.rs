use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder, Set,
};

use crate::errors::InternalError;
use crate::types::db::{role, user_role};

/// RoleStore manages the role catalog and user-role assignments
///
/// Write operations take an explicit connection so callers can run the
/// revoke-all + re-assign pair inside one transaction.
pub struct RoleStore {
    db: DatabaseConnection,
}

impl RoleStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// List the full role catalog, ordered by name
    pub async fn list_roles(&self) -> Result<Vec<role::Model>, InternalError> {
        role::Entity::find()
            .order_by_asc(role::Column::Name)
            .all(&self.db)
            .await
            .map_err(|e| InternalError::database("list_roles", e))
    }

    /// Find a role by its unique name
    pub async fn find_by_name(&self, name: &str) -> Result<Option<role::Model>, InternalError> {
        role::Entity::find()
            .filter(role::Column::Name.eq(name))
            .one(&self.db)
            .await
            .map_err(|e| InternalError::database("find_role_by_name", e))
    }

    /// Create a role in the catalog (seed path)
    pub async fn create_role(
        &self,
        name: &str,
        description: Option<&str>,
    ) -> Result<role::Model, InternalError> {
        let new_role = role::ActiveModel {
            name: Set(name.to_string()),
            description: Set(description.map(|d| d.to_string())),
            created_at: Set(Utc::now().timestamp()),
            ..Default::default()
        };

        new_role
            .insert(&self.db)
            .await
            .map_err(|e| InternalError::database("create_role", e))
    }

    /// Roles held by a user
    ///
    /// Returns an empty vec when the user has no assignments.
    pub async fn roles_of_user(&self, user_id: i32) -> Result<Vec<role::Model>, InternalError> {
        let rows = user_role::Entity::find()
            .filter(user_role::Column::UserId.eq(user_id))
            .find_also_related(role::Entity)
            .all(&self.db)
            .await
            .map_err(|e| InternalError::database("roles_of_user", e))?;

        Ok(rows.into_iter().filter_map(|(_, r)| r).collect())
    }

    /// All user-role assignments joined with their roles
    ///
    /// Used by the admin listing to resolve role names per user in one query.
    pub async fn list_assignments(
        &self,
    ) -> Result<Vec<(user_role::Model, Option<role::Model>)>, InternalError> {
        user_role::Entity::find()
            .find_also_related(role::Entity)
            .all(&self.db)
            .await
            .map_err(|e| InternalError::database("list_assignments", e))
    }

    /// Assign the given roles to a user
    pub async fn assign_roles<C: ConnectionTrait>(
        &self,
        conn: &C,
        user_id: i32,
        role_ids: &[i32],
    ) -> Result<(), InternalError> {
        if role_ids.is_empty() {
            return Ok(());
        }

        let assigned_at = Utc::now().timestamp();
        let rows: Vec<user_role::ActiveModel> = role_ids
            .iter()
            .map(|role_id| user_role::ActiveModel {
                user_id: Set(user_id),
                role_id: Set(*role_id),
                assigned_at: Set(assigned_at),
            })
            .collect();

        user_role::Entity::insert_many(rows)
            .exec(conn)
            .await
            .map_err(|e| InternalError::database("assign_roles", e))?;

        Ok(())
    }

    /// Remove every role assignment for a user
    pub async fn revoke_all<C: ConnectionTrait>(
        &self,
        conn: &C,
        user_id: i32,
    ) -> Result<(), InternalError> {
        user_role::Entity::delete_many()
            .filter(user_role::Column::UserId.eq(user_id))
            .exec(conn)
            .await
            .map_err(|e| InternalError::database("revoke_all_roles", e))?;

        Ok(())
    }
}
