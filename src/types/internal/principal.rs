use crate::types::db::user;
use crate::types::internal::roles::RoleSet;

/// The authenticated identity carried for the duration of a session
///
/// Built at login from the user row and the resolved role set, held
/// server-side by the session service, and passed into the access policy
/// to make decisions. Never persisted; never carries the password hash.
#[derive(Clone, Debug, PartialEq)]
pub struct Principal {
    pub user_id: i32,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub department: Option<String>,
    pub location: Option<String>,
    pub roles: RoleSet,
}

impl Principal {
    pub fn from_user(user: &user::Model, roles: RoleSet) -> Self {
        Self {
            user_id: user.id,
            username: user.username.clone(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            email: user.email.clone(),
            department: user.department.clone(),
            location: user.location.clone(),
            roles,
        }
    }
}
