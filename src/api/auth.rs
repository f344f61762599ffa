use std::sync::Arc;
use std::time::Duration;

use poem::web::cookie::{Cookie, CookieJar};
use poem_openapi::{payload::Json, OpenApi, Tags};

use crate::api::{SessionAuth, SESSION_COOKIE};
use crate::app_data::AppData;
use crate::coordinators::AuthCoordinator;
use crate::errors::auth::AuthError;
use crate::services::SessionService;
use crate::types::dto::auth::{LoginRequest, LoginResponse, SessionUserResponse};
use crate::types::dto::common::MessageResponse;

/// Authentication API endpoints
pub struct AuthApi {
    coordinator: AuthCoordinator,
    session_service: Arc<SessionService>,
}

impl AuthApi {
    pub fn new(app_data: &Arc<AppData>) -> Self {
        Self {
            coordinator: AuthCoordinator::new(app_data),
            session_service: Arc::clone(&app_data.session_service),
        }
    }

    fn session_cookie(&self, token: String) -> Cookie {
        let mut cookie = Cookie::new_with_str(SESSION_COOKIE, token);
        cookie.set_http_only(true);
        cookie.set_path("/");
        cookie.set_max_age(Duration::from_secs(
            self.session_service.cookie_max_age_secs() as u64,
        ));
        cookie
    }
}

/// API tags for authentication endpoints
#[derive(Tags)]
enum AuthTags {
    /// Authentication endpoints
    Authentication,
}

#[OpenApi(prefix_path = "/auth")]
impl AuthApi {
    /// Login with username and password
    ///
    /// Opens a session and sets the session cookie. Unknown usernames and
    /// wrong passwords produce the same 401.
    #[oai(path = "/login", method = "post", tag = "AuthTags::Authentication")]
    async fn login(
        &self,
        cookie_jar: &CookieJar,
        body: Json<LoginRequest>,
    ) -> Result<Json<LoginResponse>, AuthError> {
        let (token, user) = self.coordinator.login(&body.username, &body.password).await?;

        cookie_jar.add(self.session_cookie(token));

        Ok(Json(LoginResponse {
            message: "Login successful".to_string(),
            user,
        }))
    }

    /// Logout and tear down the session
    ///
    /// Succeeds whether or not a live session cookie is present.
    #[oai(path = "/logout", method = "post", tag = "AuthTags::Authentication")]
    async fn logout(&self, cookie_jar: &CookieJar) -> Json<MessageResponse> {
        let token = cookie_jar.get(SESSION_COOKIE).map(|c| c.value_str().to_string());
        self.coordinator.logout(token.as_deref());
        cookie_jar.remove(SESSION_COOKIE);

        Json(MessageResponse {
            message: "Logged out successfully".to_string(),
        })
    }

    /// The current session user
    #[oai(path = "/me", method = "get", tag = "AuthTags::Authentication")]
    async fn me(&self, auth: SessionAuth) -> Result<Json<SessionUserResponse>, AuthError> {
        let principal = self
            .session_service
            .resolve(&auth.0.key)
            .ok_or_else(AuthError::unauthenticated)?;

        Ok(Json(SessionUserResponse::from(&principal)))
    }
}
