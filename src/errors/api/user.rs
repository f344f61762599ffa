use poem_openapi::{payload::Json, ApiResponse, Object};

use crate::errors::InternalError;

/// Standardized error response for profile endpoints
#[derive(Object, Debug)]
pub struct UserErrorResponse {
    /// Error code identifier
    pub error: String,

    /// Human-readable error message
    pub message: String,

    /// HTTP status code
    pub status_code: u16,
}

/// Profile and password error types
#[derive(ApiResponse, Debug)]
pub enum UserError {
    /// No valid session
    #[oai(status = 401)]
    Unauthenticated(Json<UserErrorResponse>),

    /// Request failed validation
    #[oai(status = 400)]
    Validation(Json<UserErrorResponse>),

    /// Internal server error
    #[oai(status = 500)]
    InternalError(Json<UserErrorResponse>),
}

impl UserError {
    /// Create an Unauthenticated error
    pub fn unauthenticated() -> Self {
        UserError::Unauthenticated(Json(UserErrorResponse {
            error: "unauthenticated".to_string(),
            message: "Authentication required".to_string(),
            status_code: 401,
        }))
    }

    /// Create a Validation error
    pub fn validation(message: impl Into<String>) -> Self {
        UserError::Validation(Json(UserErrorResponse {
            error: "validation_error".to_string(),
            message: message.into(),
            status_code: 400,
        }))
    }

    /// Create an InternalError with a generic client-facing message
    pub fn internal_error() -> Self {
        UserError::InternalError(Json(UserErrorResponse {
            error: "internal_error".to_string(),
            message: "An error occurred. Please try again.".to_string(),
            status_code: 500,
        }))
    }

    /// Convert an InternalError, logging the details and returning a generic
    /// error to the client
    pub fn from_internal(err: InternalError) -> Self {
        tracing::error!("Internal error in profile endpoint: {}", err);
        Self::internal_error()
    }
}
