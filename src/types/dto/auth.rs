use poem_openapi::Object;
use serde::{Deserialize, Serialize};

use crate::types::internal::Principal;

/// Request model for user login
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct LoginRequest {
    /// Username for authentication
    pub username: String,

    /// Password for authentication
    pub password: String,
}

/// The session user, as exposed to clients (no password material)
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct SessionUserResponse {
    /// User id
    pub id: i32,

    /// Username
    pub username: String,

    /// First name
    pub first_name: String,

    /// Last name
    pub last_name: String,

    /// Email address
    pub email: String,

    /// Department, if set
    pub department: Option<String>,

    /// Location, if set
    pub location: Option<String>,

    /// Role names held by the user
    pub roles: Vec<String>,
}

impl From<&Principal> for SessionUserResponse {
    fn from(principal: &Principal) -> Self {
        Self {
            id: principal.user_id,
            username: principal.username.clone(),
            first_name: principal.first_name.clone(),
            last_name: principal.last_name.clone(),
            email: principal.email.clone(),
            department: principal.department.clone(),
            location: principal.location.clone(),
            roles: principal.roles.names(),
        }
    }
}

/// Response model for successful login
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Success message
    pub message: String,

    /// The authenticated session user
    pub user: SessionUserResponse,
}
