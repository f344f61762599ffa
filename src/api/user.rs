use std::sync::Arc;

use poem_openapi::{payload::Json, OpenApi, Tags};

use crate::api::SessionAuth;
use crate::app_data::AppData;
use crate::coordinators::UserCoordinator;
use crate::errors::user::UserError;
use crate::services::SessionService;
use crate::types::dto::auth::SessionUserResponse;
use crate::types::dto::common::MessageResponse;
use crate::types::dto::user::ChangePasswordRequest;
use crate::types::internal::Principal;

/// Self-service user API endpoints
pub struct UserApi {
    coordinator: UserCoordinator,
    session_service: Arc<SessionService>,
}

impl UserApi {
    pub fn new(app_data: &Arc<AppData>) -> Self {
        Self {
            coordinator: UserCoordinator::new(app_data),
            session_service: Arc::clone(&app_data.session_service),
        }
    }

    fn principal(&self, auth: &SessionAuth) -> Result<Principal, UserError> {
        self.session_service
            .resolve(&auth.0.key)
            .ok_or_else(UserError::unauthenticated)
    }
}

/// API tags for self-service user endpoints
#[derive(Tags)]
enum UserTags {
    /// Self-service user endpoints
    Users,
}

#[OpenApi(prefix_path = "/users")]
impl UserApi {
    /// The current user's profile, read fresh from the database
    #[oai(path = "/profile", method = "get", tag = "UserTags::Users")]
    async fn profile(&self, auth: SessionAuth) -> Result<Json<SessionUserResponse>, UserError> {
        let principal = self.principal(&auth)?;
        let profile = self.coordinator.profile(&principal).await?;
        Ok(Json(profile))
    }

    /// Change the current user's password
    ///
    /// Requires the current password; the new password needs at least 6
    /// characters and a matching confirmation.
    #[oai(path = "/change-password", method = "post", tag = "UserTags::Users")]
    async fn change_password(
        &self,
        auth: SessionAuth,
        body: Json<ChangePasswordRequest>,
    ) -> Result<Json<MessageResponse>, UserError> {
        let principal = self.principal(&auth)?;
        self.coordinator.change_password(&principal, body.0).await?;
        Ok(Json(MessageResponse {
            message: "Password changed successfully".to_string(),
        }))
    }
}
