use poem_openapi::{payload::Json, ApiResponse, Object};

use crate::errors::InternalError;

/// Standardized error response for task endpoints
#[derive(Object, Debug)]
pub struct TaskErrorResponse {
    /// Error code identifier
    pub error: String,

    /// Human-readable error message
    pub message: String,

    /// HTTP status code
    pub status_code: u16,
}

/// Task operation error types
#[derive(ApiResponse, Debug)]
pub enum TaskError {
    /// No valid session
    #[oai(status = 401)]
    Unauthenticated(Json<TaskErrorResponse>),

    /// Policy denied the requested action
    #[oai(status = 403)]
    Forbidden(Json<TaskErrorResponse>),

    /// Task not found
    #[oai(status = 404)]
    NotFound(Json<TaskErrorResponse>),

    /// Request failed validation
    #[oai(status = 400)]
    Validation(Json<TaskErrorResponse>),

    /// Internal server error
    #[oai(status = 500)]
    InternalError(Json<TaskErrorResponse>),
}

impl TaskError {
    /// Create an Unauthenticated error
    pub fn unauthenticated() -> Self {
        TaskError::Unauthenticated(Json(TaskErrorResponse {
            error: "unauthenticated".to_string(),
            message: "Authentication required".to_string(),
            status_code: 401,
        }))
    }

    /// Create a Forbidden error with a stable user-facing message
    pub fn forbidden(message: &str) -> Self {
        TaskError::Forbidden(Json(TaskErrorResponse {
            error: "forbidden".to_string(),
            message: message.to_string(),
            status_code: 403,
        }))
    }

    /// Create a NotFound error
    pub fn not_found() -> Self {
        TaskError::NotFound(Json(TaskErrorResponse {
            error: "not_found".to_string(),
            message: "Task not found".to_string(),
            status_code: 404,
        }))
    }

    /// Create a Validation error
    pub fn validation(message: impl Into<String>) -> Self {
        TaskError::Validation(Json(TaskErrorResponse {
            error: "validation_error".to_string(),
            message: message.into(),
            status_code: 400,
        }))
    }

    /// Create an InternalError with a generic client-facing message
    pub fn internal_error() -> Self {
        TaskError::InternalError(Json(TaskErrorResponse {
            error: "internal_error".to_string(),
            message: "An error occurred. Please try again.".to_string(),
            status_code: 500,
        }))
    }

    /// Convert an InternalError, logging the details and returning a generic
    /// error to the client
    pub fn from_internal(err: InternalError) -> Self {
        tracing::error!("Internal error in task endpoint: {}", err);
        Self::internal_error()
    }
}
