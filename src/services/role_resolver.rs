use std::sync::Arc;

use crate::stores::RoleStore;
use crate::types::internal::{Role, RoleSet};

/// Resolves the set of role names held by a user
///
/// Pure read. "No roles" and "lookup failed" both come back as the empty
/// set rather than an error - callers must treat an empty set as "no
/// permissions", never as something to retry or surface.
pub struct RoleResolver {
    role_store: Arc<RoleStore>,
}

impl RoleResolver {
    pub fn new(role_store: Arc<RoleStore>) -> Self {
        Self { role_store }
    }

    pub async fn roles_of(&self, user_id: i32) -> RoleSet {
        match self.role_store.roles_of_user(user_id).await {
            Ok(roles) => roles
                .into_iter()
                .map(|r| Role::from_name(&r.name))
                .collect(),
            Err(e) => {
                tracing::warn!("Role lookup failed for user {}: {}", user_id, e);
                RoleSet::empty()
            }
        }
    }
}
