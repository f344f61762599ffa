use std::collections::HashMap;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder, Set,
};

use crate::errors::InternalError;
use crate::types::db::user;

/// Fields for a new user row
pub struct NewUser {
    pub username: String,
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub manager_id: Option<i32>,
    pub department: Option<String>,
    pub location: Option<String>,
    pub status: String,
}

/// Profile fields an administrator may update
pub struct UserProfileUpdate {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub manager_id: Option<i32>,
    pub department: Option<String>,
    pub location: Option<String>,
    pub status: String,
}

/// UserStore manages user rows
pub struct UserStore {
    db: DatabaseConnection,
}

impl UserStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn find_by_id(&self, user_id: i32) -> Result<Option<user::Model>, InternalError> {
        user::Entity::find_by_id(user_id)
            .one(&self.db)
            .await
            .map_err(|e| InternalError::database("find_user_by_id", e))
    }

    pub async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<user::Model>, InternalError> {
        user::Entity::find()
            .filter(user::Column::Username.eq(username))
            .one(&self.db)
            .await
            .map_err(|e| InternalError::database("find_user_by_username", e))
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<user::Model>, InternalError> {
        user::Entity::find()
            .filter(user::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(|e| InternalError::database("find_user_by_email", e))
    }

    /// All users, newest first
    pub async fn list_all(&self) -> Result<Vec<user::Model>, InternalError> {
        user::Entity::find()
            .order_by_desc(user::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| InternalError::database("list_users", e))
    }

    /// Active users only, for assignment and manager dropdowns
    pub async fn list_active(&self) -> Result<Vec<user::Model>, InternalError> {
        user::Entity::find()
            .filter(user::Column::Status.eq(user::STATUS_ACTIVE))
            .order_by_desc(user::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| InternalError::database("list_active_users", e))
    }

    /// Display names keyed by user id, for resolving task references
    pub async fn display_names(
        &self,
        user_ids: &[i32],
    ) -> Result<HashMap<i32, String>, InternalError> {
        if user_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let users = user::Entity::find()
            .filter(user::Column::Id.is_in(user_ids.to_vec()))
            .all(&self.db)
            .await
            .map_err(|e| InternalError::database("display_names", e))?;

        Ok(users.into_iter().map(|u| (u.id, u.display_name())).collect())
    }

    /// Insert a new user row and return it with its generated id
    pub async fn insert_user<C: ConnectionTrait>(
        &self,
        conn: &C,
        new_user: NewUser,
    ) -> Result<user::Model, InternalError> {
        let now = Utc::now().timestamp();

        let row = user::ActiveModel {
            username: Set(new_user.username),
            password_hash: Set(new_user.password_hash),
            first_name: Set(new_user.first_name),
            last_name: Set(new_user.last_name),
            email: Set(new_user.email),
            manager_id: Set(new_user.manager_id),
            department: Set(new_user.department),
            location: Set(new_user.location),
            status: Set(new_user.status),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        row.insert(conn)
            .await
            .map_err(|e| InternalError::database("insert_user", e))
    }

    /// Update profile fields for an existing user
    pub async fn update_profile<C: ConnectionTrait>(
        &self,
        conn: &C,
        user_id: i32,
        update: UserProfileUpdate,
    ) -> Result<(), InternalError> {
        let row = user::ActiveModel {
            id: Set(user_id),
            first_name: Set(update.first_name),
            last_name: Set(update.last_name),
            email: Set(update.email),
            manager_id: Set(update.manager_id),
            department: Set(update.department),
            location: Set(update.location),
            status: Set(update.status),
            updated_at: Set(Utc::now().timestamp()),
            ..Default::default()
        };

        row.update(conn)
            .await
            .map_err(|e| InternalError::database("update_user_profile", e))?;

        Ok(())
    }

    /// Delete a user row
    ///
    /// Unconditional: role assignments cascade, but tasks referencing the
    /// user and reports pointing at them as manager are left behind. The
    /// self-deletion guard lives in the admin coordinator.
    pub async fn delete(&self, user_id: i32) -> Result<(), InternalError> {
        user::Entity::delete_by_id(user_id)
            .exec(&self.db)
            .await
            .map_err(|e| InternalError::database("delete_user", e))?;

        Ok(())
    }
}
