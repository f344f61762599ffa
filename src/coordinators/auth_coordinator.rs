use std::sync::Arc;

use crate::app_data::AppData;
use crate::errors::auth::AuthError;
use crate::services::{AuthService, SessionService};
use crate::types::dto::auth::SessionUserResponse;

/// Orchestrates the login/logout flows: authentication plus session
/// issuance and teardown
pub struct AuthCoordinator {
    auth_service: Arc<AuthService>,
    session_service: Arc<SessionService>,
}

impl AuthCoordinator {
    pub fn new(app_data: &Arc<AppData>) -> Self {
        Self {
            auth_service: Arc::clone(&app_data.auth_service),
            session_service: Arc::clone(&app_data.session_service),
        }
    }

    /// Authenticate and open a session
    ///
    /// Returns the opaque session token (for the cookie) and the session
    /// user payload.
    pub async fn login(
        &self,
        username: &str,
        password: &str,
    ) -> Result<(String, SessionUserResponse), AuthError> {
        let principal = self.auth_service.authenticate(username, password).await?;
        let response = SessionUserResponse::from(&principal);
        let token = self.session_service.create(principal);
        Ok((token, response))
    }

    /// Tear down a session; an absent or stale cookie is not an error
    pub fn logout(&self, token: Option<&str>) {
        if let Some(token) = token {
            self.session_service.destroy(token);
        }
    }
}
