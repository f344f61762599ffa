use poem_openapi::Object;
use serde::{Deserialize, Serialize};

/// Request model for a self-service password change
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct ChangePasswordRequest {
    /// Current password, verified before the change
    pub current_password: String,

    /// New password
    pub new_password: String,

    /// Confirmation, must match
    pub confirm_password: String,
}
