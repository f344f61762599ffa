use poem_openapi::{payload::Json, ApiResponse, Object};

use crate::errors::InternalError;

/// Standardized error response for admin endpoints
#[derive(Object, Debug)]
pub struct AdminErrorResponse {
    /// Error code identifier
    pub error: String,

    /// Human-readable error message
    pub message: String,

    /// HTTP status code
    pub status_code: u16,
}

/// Admin operation error types
#[derive(ApiResponse, Debug)]
pub enum AdminError {
    /// No valid session
    #[oai(status = 401)]
    Unauthenticated(Json<AdminErrorResponse>),

    /// Administrator role required
    #[oai(status = 403)]
    Forbidden(Json<AdminErrorResponse>),

    /// User not found
    #[oai(status = 404)]
    UserNotFound(Json<AdminErrorResponse>),

    /// Username or email already exists
    #[oai(status = 409)]
    DuplicateUser(Json<AdminErrorResponse>),

    /// Administrators may not delete their own account
    #[oai(status = 403)]
    CannotDeleteSelf(Json<AdminErrorResponse>),

    /// Request failed validation
    #[oai(status = 400)]
    Validation(Json<AdminErrorResponse>),

    /// Internal server error
    #[oai(status = 500)]
    InternalError(Json<AdminErrorResponse>),
}

impl AdminError {
    /// Create an Unauthenticated error
    pub fn unauthenticated() -> Self {
        AdminError::Unauthenticated(Json(AdminErrorResponse {
            error: "unauthenticated".to_string(),
            message: "Authentication required".to_string(),
            status_code: 401,
        }))
    }

    /// Create a Forbidden error
    pub fn forbidden() -> Self {
        AdminError::Forbidden(Json(AdminErrorResponse {
            error: "forbidden".to_string(),
            message: "You do not have permission to access this page.".to_string(),
            status_code: 403,
        }))
    }

    /// Create a UserNotFound error
    pub fn user_not_found(user_id: i32) -> Self {
        AdminError::UserNotFound(Json(AdminErrorResponse {
            error: "user_not_found".to_string(),
            message: format!("User not found: {}", user_id),
            status_code: 404,
        }))
    }

    /// Create a DuplicateUser error
    pub fn duplicate_user() -> Self {
        AdminError::DuplicateUser(Json(AdminErrorResponse {
            error: "duplicate_user".to_string(),
            message: "Username or email already exists".to_string(),
            status_code: 409,
        }))
    }

    /// Create a CannotDeleteSelf error
    pub fn cannot_delete_self() -> Self {
        AdminError::CannotDeleteSelf(Json(AdminErrorResponse {
            error: "cannot_delete_self".to_string(),
            message: "Cannot delete your own account".to_string(),
            status_code: 403,
        }))
    }

    /// Create a Validation error
    pub fn validation(message: impl Into<String>) -> Self {
        AdminError::Validation(Json(AdminErrorResponse {
            error: "validation_error".to_string(),
            message: message.into(),
            status_code: 400,
        }))
    }

    /// Create an InternalError with a generic client-facing message
    pub fn internal_error() -> Self {
        AdminError::InternalError(Json(AdminErrorResponse {
            error: "internal_error".to_string(),
            message: "An error occurred. Please try again.".to_string(),
            status_code: 500,
        }))
    }

    /// Convert an InternalError, logging the details and returning a generic
    /// error to the client
    pub fn from_internal(err: InternalError) -> Self {
        tracing::error!("Internal error in admin endpoint: {}", err);
        Self::internal_error()
    }
}
