use std::sync::Arc;

use poem_openapi::{param::Path, payload::Json, OpenApi, Tags};

use crate::api::SessionAuth;
use crate::app_data::AppData;
use crate::coordinators::AdminCoordinator;
use crate::errors::admin::AdminError;
use crate::services::SessionService;
use crate::types::dto::admin::{
    AdminOverviewResponse, CreateUserRequest, ResetPasswordRequest, RoleListResponse,
    UpdateUserRequest, UserListResponse, UserResponse,
};
use crate::types::dto::common::MessageResponse;
use crate::types::internal::Principal;

/// Administration API endpoints
///
/// Every endpoint here requires the Administrator role; the coordinator
/// rejects anyone else with a 403.
pub struct AdminApi {
    coordinator: AdminCoordinator,
    session_service: Arc<SessionService>,
}

impl AdminApi {
    pub fn new(app_data: &Arc<AppData>) -> Self {
        Self {
            coordinator: AdminCoordinator::new(app_data),
            session_service: Arc::clone(&app_data.session_service),
        }
    }

    fn principal(&self, auth: &SessionAuth) -> Result<Principal, AdminError> {
        self.session_service
            .resolve(&auth.0.key)
            .ok_or_else(AdminError::unauthenticated)
    }
}

/// API tags for administration endpoints
#[derive(Tags)]
enum AdminTags {
    /// Administration endpoints
    Administration,
}

#[OpenApi(prefix_path = "/admin")]
impl AdminApi {
    /// Aggregate counts for the admin overview
    #[oai(path = "/", method = "get", tag = "AdminTags::Administration")]
    async fn overview(&self, auth: SessionAuth) -> Result<Json<AdminOverviewResponse>, AdminError> {
        let principal = self.principal(&auth)?;
        let overview = self.coordinator.overview(&principal).await?;
        Ok(Json(overview))
    }

    /// List all users with their roles and manager names
    #[oai(path = "/users", method = "get", tag = "AdminTags::Administration")]
    async fn list_users(&self, auth: SessionAuth) -> Result<Json<UserListResponse>, AdminError> {
        let principal = self.principal(&auth)?;
        let users = self.coordinator.list_users(&principal).await?;
        Ok(Json(users))
    }

    /// Create a user with an initial password and role set
    #[oai(path = "/users", method = "post", tag = "AdminTags::Administration")]
    async fn create_user(
        &self,
        auth: SessionAuth,
        body: Json<CreateUserRequest>,
    ) -> Result<Json<UserResponse>, AdminError> {
        let principal = self.principal(&auth)?;
        let user = self.coordinator.create_user(&principal, body.0).await?;
        Ok(Json(user))
    }

    /// Fetch a single user
    #[oai(path = "/users/:user_id", method = "get", tag = "AdminTags::Administration")]
    async fn get_user(
        &self,
        auth: SessionAuth,
        user_id: Path<i32>,
    ) -> Result<Json<UserResponse>, AdminError> {
        let principal = self.principal(&auth)?;
        let user = self.coordinator.get_user(&principal, user_id.0).await?;
        Ok(Json(user))
    }

    /// Update a user's profile, status, and role set
    #[oai(path = "/users/:user_id", method = "put", tag = "AdminTags::Administration")]
    async fn update_user(
        &self,
        auth: SessionAuth,
        user_id: Path<i32>,
        body: Json<UpdateUserRequest>,
    ) -> Result<Json<UserResponse>, AdminError> {
        let principal = self.principal(&auth)?;
        let user = self
            .coordinator
            .update_user(&principal, user_id.0, body.0)
            .await?;
        Ok(Json(user))
    }

    /// Reset a user's password
    #[oai(
        path = "/users/:user_id/reset-password",
        method = "post",
        tag = "AdminTags::Administration"
    )]
    async fn reset_password(
        &self,
        auth: SessionAuth,
        user_id: Path<i32>,
        body: Json<ResetPasswordRequest>,
    ) -> Result<Json<MessageResponse>, AdminError> {
        let principal = self.principal(&auth)?;
        self.coordinator
            .reset_password(&principal, user_id.0, body.0)
            .await?;
        Ok(Json(MessageResponse {
            message: "Password reset successfully".to_string(),
        }))
    }

    /// Delete a user
    ///
    /// Administrators cannot delete their own account.
    #[oai(path = "/users/:user_id", method = "delete", tag = "AdminTags::Administration")]
    async fn delete_user(
        &self,
        auth: SessionAuth,
        user_id: Path<i32>,
    ) -> Result<Json<MessageResponse>, AdminError> {
        let principal = self.principal(&auth)?;
        self.coordinator.delete_user(&principal, user_id.0).await?;
        Ok(Json(MessageResponse {
            message: "User deleted successfully".to_string(),
        }))
    }

    /// The role catalog
    #[oai(path = "/roles", method = "get", tag = "AdminTags::Administration")]
    async fn list_roles(&self, auth: SessionAuth) -> Result<Json<RoleListResponse>, AdminError> {
        let principal = self.principal(&auth)?;
        let roles = self.coordinator.list_roles(&principal).await?;
        Ok(Json(roles))
    }
}
