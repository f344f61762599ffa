use poem_openapi::Object;
use serde::{Deserialize, Serialize};

/// Aggregate counts for the admin overview
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct AdminOverviewResponse {
    /// Total users
    pub total_users: i64,

    /// Users with status "active"
    pub active_users: i64,

    /// Roles in the catalog
    pub total_roles: i64,
}

/// A user as listed on the admin surface
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct UserResponse {
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

    /// Manager user id, if set
    pub manager_id: Option<i32>,

    /// Manager display name, if set
    pub manager_name: Option<String>,

    /// Department, if set
    pub department: Option<String>,

    /// Location, if set
    pub location: Option<String>,

    /// "active" or "inactive"
    pub status: String,

    /// Role names held by the user
    pub roles: Vec<String>,

    /// Role ids held by the user
    pub role_ids: Vec<i32>,

    /// Creation time (unix seconds)
    pub created_at: i64,

    /// Last update time (unix seconds)
    pub updated_at: i64,
}

/// Response model for the admin user listing
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct UserListResponse {
    /// All users, newest first
    pub users: Vec<UserResponse>,
}

/// Request model for creating a user
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct CreateUserRequest {
    /// Username (unique)
    pub username: String,

    /// Initial password
    pub password: String,

    /// First name
    pub first_name: String,

    /// Last name
    pub last_name: String,

    /// Email address (unique)
    pub email: String,

    /// Manager user id
    pub manager_id: Option<i32>,

    /// Department
    pub department: Option<String>,

    /// Location
    pub location: Option<String>,

    /// Role ids to assign
    pub role_ids: Vec<i32>,
}

/// Request model for updating a user
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct UpdateUserRequest {
    /// First name
    pub first_name: String,

    /// Last name
    pub last_name: String,

    /// Email address
    pub email: String,

    /// Manager user id
    pub manager_id: Option<i32>,

    /// Department
    pub department: Option<String>,

    /// Location
    pub location: Option<String>,

    /// "active" or "inactive"
    pub status: String,

    /// Role ids replacing the current assignment
    pub role_ids: Vec<i32>,
}

/// Request model for an administrative password reset
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct ResetPasswordRequest {
    /// New password
    pub new_password: String,

    /// Confirmation, must match
    pub confirm_password: String,
}

/// A role in the catalog
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct RoleResponse {
    /// Role id
    pub id: i32,

    /// Unique role name
    pub name: String,

    /// Role description
    pub description: Option<String>,
}

/// Response model for the role catalog
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct RoleListResponse {
    /// All roles, ordered by name
    pub roles: Vec<RoleResponse>,
}
