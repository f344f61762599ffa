use poem_openapi::{payload::Json, ApiResponse, Object};

use crate::errors::InternalError;

/// Standardized error response for authentication endpoints
#[derive(Object, Debug)]
pub struct AuthErrorResponse {
    /// Error code identifier
    pub error: String,

    /// Human-readable error message
    pub message: String,

    /// HTTP status code
    pub status_code: u16,
}

/// Authentication error types
#[derive(ApiResponse, Debug)]
pub enum AuthError {
    /// Invalid username or password
    #[oai(status = 401)]
    InvalidCredentials(Json<AuthErrorResponse>),

    /// Account has been deactivated
    #[oai(status = 403)]
    AccountDeactivated(Json<AuthErrorResponse>),

    /// No valid session
    #[oai(status = 401)]
    Unauthenticated(Json<AuthErrorResponse>),

    /// Internal server error
    #[oai(status = 500)]
    InternalError(Json<AuthErrorResponse>),
}

impl AuthError {
    /// Create an InvalidCredentials error
    ///
    /// The message is identical for unknown usernames and wrong passwords so
    /// the response does not leak which usernames are registered.
    pub fn invalid_credentials() -> Self {
        AuthError::InvalidCredentials(Json(AuthErrorResponse {
            error: "invalid_credentials".to_string(),
            message: "Invalid username or password".to_string(),
            status_code: 401,
        }))
    }

    /// Create an AccountDeactivated error
    pub fn account_deactivated() -> Self {
        AuthError::AccountDeactivated(Json(AuthErrorResponse {
            error: "account_deactivated".to_string(),
            message: "Your account has been deactivated. Please contact an administrator."
                .to_string(),
            status_code: 403,
        }))
    }

    /// Create an Unauthenticated error
    pub fn unauthenticated() -> Self {
        AuthError::Unauthenticated(Json(AuthErrorResponse {
            error: "unauthenticated".to_string(),
            message: "Authentication required".to_string(),
            status_code: 401,
        }))
    }

    /// Create an InternalError with a generic client-facing message
    pub fn internal_error() -> Self {
        AuthError::InternalError(Json(AuthErrorResponse {
            error: "internal_error".to_string(),
            message: "An error occurred. Please try again.".to_string(),
            status_code: 500,
        }))
    }

    /// Convert an InternalError, logging the details and returning a generic
    /// error to the client
    pub fn from_internal(err: InternalError) -> Self {
        tracing::error!("Internal error in auth endpoint: {}", err);
        Self::internal_error()
    }
}
