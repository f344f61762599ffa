use std::collections::HashMap;
use std::sync::Arc;

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::app_data::AppData;
use crate::errors::admin::AdminError;
use crate::errors::internal::DatabaseError;
use crate::services::access_policy;
use crate::stores::user_store::{NewUser, UserProfileUpdate};
use crate::stores::{CredentialStore, RoleStore, UserStore};
use crate::types::db::user;
use crate::types::dto::admin::{
    AdminOverviewResponse, CreateUserRequest, ResetPasswordRequest, RoleListResponse,
    RoleResponse, UpdateUserRequest, UserListResponse, UserResponse,
};
use crate::types::internal::Principal;

const MIN_PASSWORD_LENGTH: usize = 6;

/// Orchestrates the Administrator-only identity management surface
pub struct AdminCoordinator {
    db: DatabaseConnection,
    user_store: Arc<UserStore>,
    role_store: Arc<RoleStore>,
    credential_store: Arc<CredentialStore>,
}

impl AdminCoordinator {
    pub fn new(app_data: &Arc<AppData>) -> Self {
        Self {
            db: app_data.db.clone(),
            user_store: Arc::clone(&app_data.user_store),
            role_store: Arc::clone(&app_data.role_store),
            credential_store: Arc::clone(&app_data.credential_store),
        }
    }

    fn ensure_admin(principal: &Principal) -> Result<(), AdminError> {
        if access_policy::can_manage_users(principal) {
            Ok(())
        } else {
            Err(AdminError::forbidden())
        }
    }

    pub async fn overview(
        &self,
        principal: &Principal,
    ) -> Result<AdminOverviewResponse, AdminError> {
        Self::ensure_admin(principal)?;

        let users = self
            .user_store
            .list_all()
            .await
            .map_err(AdminError::from_internal)?;
        let roles = self
            .role_store
            .list_roles()
            .await
            .map_err(AdminError::from_internal)?;

        Ok(AdminOverviewResponse {
            total_users: users.len() as i64,
            active_users: users.iter().filter(|u| u.is_active()).count() as i64,
            total_roles: roles.len() as i64,
        })
    }

    pub async fn list_users(&self, principal: &Principal) -> Result<UserListResponse, AdminError> {
        Self::ensure_admin(principal)?;

        let users = self
            .user_store
            .list_all()
            .await
            .map_err(AdminError::from_internal)?;
        let assignments = self
            .role_store
            .list_assignments()
            .await
            .map_err(AdminError::from_internal)?;

        // Manager names resolve from the same listing; roles from one
        // assignment query rather than one per user
        let names: HashMap<i32, String> =
            users.iter().map(|u| (u.id, u.display_name())).collect();

        let mut roles_by_user: HashMap<i32, Vec<(i32, String)>> = HashMap::new();
        for (assignment, role) in assignments {
            if let Some(role) = role {
                roles_by_user
                    .entry(assignment.user_id)
                    .or_default()
                    .push((role.id, role.name));
            }
        }

        let users = users
            .into_iter()
            .map(|u| {
                let manager_name = u.manager_id.and_then(|id| names.get(&id).cloned());
                let mut roles = roles_by_user.remove(&u.id).unwrap_or_default();
                roles.sort();
                Self::user_response(u, manager_name, roles)
            })
            .collect();

        Ok(UserListResponse { users })
    }

    pub async fn get_user(
        &self,
        principal: &Principal,
        user_id: i32,
    ) -> Result<UserResponse, AdminError> {
        Self::ensure_admin(principal)?;

        let user = self
            .user_store
            .find_by_id(user_id)
            .await
            .map_err(AdminError::from_internal)?
            .ok_or_else(|| AdminError::user_not_found(user_id))?;

        self.build_user_response(user).await
    }

    pub async fn create_user(
        &self,
        principal: &Principal,
        request: CreateUserRequest,
    ) -> Result<UserResponse, AdminError> {
        Self::ensure_admin(principal)?;

        let required = [
            ("username", &request.username),
            ("password", &request.password),
            ("first_name", &request.first_name),
            ("last_name", &request.last_name),
            ("email", &request.email),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(AdminError::validation(format!("{} is required", field)));
            }
        }

        let existing_username = self
            .user_store
            .find_by_username(&request.username)
            .await
            .map_err(AdminError::from_internal)?;
        let existing_email = self
            .user_store
            .find_by_email(&request.email)
            .await
            .map_err(AdminError::from_internal)?;
        if existing_username.is_some() || existing_email.is_some() {
            return Err(AdminError::duplicate_user());
        }

        let password_hash = self
            .credential_store
            .hash_password(&request.password)
            .map_err(AdminError::from_internal)?;

        // User row and role assignments land together or not at all
        let txn = self.db.begin().await.map_err(|e| {
            AdminError::from_internal(DatabaseError::TransactionBegin { source: e }.into())
        })?;

        let created = self
            .user_store
            .insert_user(
                &txn,
                NewUser {
                    username: request.username,
                    password_hash,
                    first_name: request.first_name,
                    last_name: request.last_name,
                    email: request.email,
                    manager_id: request.manager_id,
                    department: request.department,
                    location: request.location,
                    status: user::STATUS_ACTIVE.to_string(),
                },
            )
            .await
            .map_err(AdminError::from_internal)?;

        self.role_store
            .assign_roles(&txn, created.id, &request.role_ids)
            .await
            .map_err(AdminError::from_internal)?;

        txn.commit().await.map_err(|e| {
            AdminError::from_internal(DatabaseError::TransactionCommit { source: e }.into())
        })?;

        tracing::info!("User {} created by admin {}", created.id, principal.user_id);
        self.build_user_response(created).await
    }

    pub async fn update_user(
        &self,
        principal: &Principal,
        user_id: i32,
        request: UpdateUserRequest,
    ) -> Result<UserResponse, AdminError> {
        Self::ensure_admin(principal)?;

        let existing = self
            .user_store
            .find_by_id(user_id)
            .await
            .map_err(AdminError::from_internal)?
            .ok_or_else(|| AdminError::user_not_found(user_id))?;

        if request.status != user::STATUS_ACTIVE && request.status != user::STATUS_INACTIVE {
            return Err(AdminError::validation(format!(
                "Unknown status: {}",
                request.status
            )));
        }

        // Profile update and role reassignment (revoke-all + re-insert)
        // share one transaction so no reader can observe a user with zero
        // roles mid-write.
        let txn = self.db.begin().await.map_err(|e| {
            AdminError::from_internal(DatabaseError::TransactionBegin { source: e }.into())
        })?;

        self.user_store
            .update_profile(
                &txn,
                existing.id,
                UserProfileUpdate {
                    first_name: request.first_name,
                    last_name: request.last_name,
                    email: request.email,
                    manager_id: request.manager_id,
                    department: request.department,
                    location: request.location,
                    status: request.status,
                },
            )
            .await
            .map_err(AdminError::from_internal)?;

        self.role_store
            .revoke_all(&txn, existing.id)
            .await
            .map_err(AdminError::from_internal)?;
        self.role_store
            .assign_roles(&txn, existing.id, &request.role_ids)
            .await
            .map_err(AdminError::from_internal)?;

        txn.commit().await.map_err(|e| {
            AdminError::from_internal(DatabaseError::TransactionCommit { source: e }.into())
        })?;

        let updated = self
            .user_store
            .find_by_id(user_id)
            .await
            .map_err(AdminError::from_internal)?
            .ok_or_else(|| AdminError::user_not_found(user_id))?;

        self.build_user_response(updated).await
    }

    pub async fn reset_password(
        &self,
        principal: &Principal,
        user_id: i32,
        request: ResetPasswordRequest,
    ) -> Result<(), AdminError> {
        Self::ensure_admin(principal)?;

        let user = self
            .user_store
            .find_by_id(user_id)
            .await
            .map_err(AdminError::from_internal)?
            .ok_or_else(|| AdminError::user_not_found(user_id))?;

        if request.new_password != request.confirm_password {
            return Err(AdminError::validation("Passwords do not match"));
        }
        if request.new_password.len() < MIN_PASSWORD_LENGTH {
            return Err(AdminError::validation(
                "Password must be at least 6 characters",
            ));
        }

        self.credential_store
            .update_password(user.id, &request.new_password)
            .await
            .map_err(AdminError::from_internal)?;

        tracing::info!(
            "Password reset for user {} by admin {}",
            user.id,
            principal.user_id
        );
        Ok(())
    }

    /// Delete a user account
    ///
    /// An administrator may not delete their own account: the request is
    /// rejected before any row is touched.
    pub async fn delete_user(
        &self,
        principal: &Principal,
        user_id: i32,
    ) -> Result<(), AdminError> {
        Self::ensure_admin(principal)?;

        if user_id == principal.user_id {
            return Err(AdminError::cannot_delete_self());
        }

        let user = self
            .user_store
            .find_by_id(user_id)
            .await
            .map_err(AdminError::from_internal)?
            .ok_or_else(|| AdminError::user_not_found(user_id))?;

        self.user_store
            .delete(user.id)
            .await
            .map_err(AdminError::from_internal)?;

        tracing::info!("User {} deleted by admin {}", user_id, principal.user_id);
        Ok(())
    }

    pub async fn list_roles(&self, principal: &Principal) -> Result<RoleListResponse, AdminError> {
        Self::ensure_admin(principal)?;

        let roles = self
            .role_store
            .list_roles()
            .await
            .map_err(AdminError::from_internal)?;

        Ok(RoleListResponse {
            roles: roles
                .into_iter()
                .map(|r| RoleResponse {
                    id: r.id,
                    name: r.name,
                    description: r.description,
                })
                .collect(),
        })
    }

    async fn build_user_response(&self, user: user::Model) -> Result<UserResponse, AdminError> {
        let manager_name = match user.manager_id {
            Some(manager_id) => self
                .user_store
                .find_by_id(manager_id)
                .await
                .map_err(AdminError::from_internal)?
                .map(|m| m.display_name()),
            None => None,
        };

        let mut roles: Vec<(i32, String)> = self
            .role_store
            .roles_of_user(user.id)
            .await
            .map_err(AdminError::from_internal)?
            .into_iter()
            .map(|r| (r.id, r.name))
            .collect();
        roles.sort();

        Ok(Self::user_response(user, manager_name, roles))
    }

    fn user_response(
        user: user::Model,
        manager_name: Option<String>,
        roles: Vec<(i32, String)>,
    ) -> UserResponse {
        let (role_ids, role_names): (Vec<i32>, Vec<String>) = roles.into_iter().unzip();
        UserResponse {
            id: user.id,
            username: user.username,
            first_name: user.first_name,
            last_name: user.last_name,
            email: user.email,
            manager_id: user.manager_id,
            manager_name,
            department: user.department,
            location: user.location,
            status: user.status,
            roles: role_names,
            role_ids,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}
