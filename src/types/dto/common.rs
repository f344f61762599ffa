use poem_openapi::Object;
use serde::{Deserialize, Serialize};

/// Response model for health check
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status, "ok" when serving
    pub status: String,

    /// Crate version
    pub version: String,

    /// Current server time (RFC 3339)
    pub timestamp: String,
}

/// Generic success message
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Success message
    pub message: String,
}
