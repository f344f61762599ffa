use std::sync::Arc;

use crate::app_data::AppData;
use crate::errors::user::UserError;
use crate::services::RoleResolver;
use crate::stores::{CredentialStore, UserStore};
use crate::types::dto::auth::SessionUserResponse;
use crate::types::dto::user::ChangePasswordRequest;
use crate::types::internal::Principal;

const MIN_PASSWORD_LENGTH: usize = 6;

/// Self-service operations available to any authenticated user
pub struct UserCoordinator {
    user_store: Arc<UserStore>,
    credential_store: Arc<CredentialStore>,
    role_resolver: Arc<RoleResolver>,
}

impl UserCoordinator {
    pub fn new(app_data: &Arc<AppData>) -> Self {
        Self {
            user_store: Arc::clone(&app_data.user_store),
            credential_store: Arc::clone(&app_data.credential_store),
            role_resolver: Arc::clone(&app_data.role_resolver),
        }
    }

    /// Current profile, read fresh from the database
    ///
    /// The session principal may be stale if an administrator edited the
    /// account after login, so the profile endpoint re-reads the row.
    pub async fn profile(&self, principal: &Principal) -> Result<SessionUserResponse, UserError> {
        let user = self
            .user_store
            .find_by_id(principal.user_id)
            .await
            .map_err(UserError::from_internal)?
            .ok_or_else(UserError::unauthenticated)?;

        let roles = self.role_resolver.roles_of(user.id).await;
        Ok(SessionUserResponse::from(&Principal::from_user(
            &user, roles,
        )))
    }

    pub async fn change_password(
        &self,
        principal: &Principal,
        request: ChangePasswordRequest,
    ) -> Result<(), UserError> {
        if request.new_password != request.confirm_password {
            return Err(UserError::validation("Passwords do not match"));
        }
        if request.new_password.len() < MIN_PASSWORD_LENGTH {
            return Err(UserError::validation(
                "Password must be at least 6 characters",
            ));
        }

        let user = self
            .user_store
            .find_by_id(principal.user_id)
            .await
            .map_err(UserError::from_internal)?
            .ok_or_else(UserError::unauthenticated)?;

        let current_ok = self
            .credential_store
            .verify_password(&request.current_password, &user.password_hash)
            .map_err(UserError::from_internal)?;
        if !current_ok {
            return Err(UserError::validation("Current password is incorrect"));
        }

        self.credential_store
            .update_password(user.id, &request.new_password)
            .await
            .map_err(UserError::from_internal)?;

        tracing::info!("User {} changed their password", user.id);
        Ok(())
    }
}
