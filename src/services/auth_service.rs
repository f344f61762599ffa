use std::sync::Arc;

use crate::errors::auth::AuthError;
use crate::services::RoleResolver;
use crate::stores::CredentialStore;
use crate::types::internal::Principal;

/// Authentication service: verifies credentials and issues a Principal
pub struct AuthService {
    credential_store: Arc<CredentialStore>,
    role_resolver: Arc<RoleResolver>,
}

impl AuthService {
    pub fn new(credential_store: Arc<CredentialStore>, role_resolver: Arc<RoleResolver>) -> Self {
        Self {
            credential_store,
            role_resolver,
        }
    }

    /// Verify a username/password pair and build the session principal
    ///
    /// Unknown username and wrong password collapse into the same
    /// `InvalidCredentials`. The password is verified before the status
    /// check, so a deactivated account is only revealed to someone who
    /// already holds the correct password.
    pub async fn authenticate(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Principal, AuthError> {
        let user = self
            .credential_store
            .find_user_for_auth(username)
            .await
            .map_err(AuthError::from_internal)?;

        let user = match user {
            Some(user) => user,
            None => {
                tracing::debug!("Login failed: unknown username");
                return Err(AuthError::invalid_credentials());
            }
        };

        let password_ok = self
            .credential_store
            .verify_password(password, &user.password_hash)
            .map_err(AuthError::from_internal)?;

        if !password_ok {
            tracing::debug!("Login failed for user {}: wrong password", user.id);
            return Err(AuthError::invalid_credentials());
        }

        if !user.is_active() {
            tracing::info!("Login rejected for user {}: account deactivated", user.id);
            return Err(AuthError::account_deactivated());
        }

        let roles = self.role_resolver.roles_of(user.id).await;
        tracing::info!("Login successful for user {}", user.id);

        Ok(Principal::from_user(&user, roles))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stores::RoleStore;
    use crate::types::db::user;
    use crate::types::internal::Role;
    use chrono::Utc;
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ActiveModelTrait, Database, DatabaseConnection, Set};

    async fn setup() -> (DatabaseConnection, AuthService) {
        let db = Database::connect("sqlite::memory:")
            .await
            .expect("Failed to create test database");
        Migrator::up(&db, None)
            .await
            .expect("Failed to run migrations");

        let credential_store = Arc::new(CredentialStore::new(db.clone()));
        let role_store = Arc::new(RoleStore::new(db.clone()));
        let role_resolver = Arc::new(RoleResolver::new(role_store));
        let service = AuthService::new(credential_store, role_resolver);
        (db, service)
    }

    async fn insert_user(
        db: &DatabaseConnection,
        username: &str,
        password_hash: String,
        status: &str,
    ) -> user::Model {
        let now = Utc::now().timestamp();
        user::ActiveModel {
            username: Set(username.to_string()),
            password_hash: Set(password_hash),
            first_name: Set("Test".to_string()),
            last_name: Set("User".to_string()),
            email: Set(format!("{}@example.com", username)),
            manager_id: Set(None),
            department: Set(None),
            location: Set(None),
            status: Set(status.to_string()),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(db)
        .await
        .expect("Failed to insert test user")
    }

    #[tokio::test]
    async fn correct_credentials_yield_principal_with_roles() {
        let (db, service) = setup().await;
        let credential_store = CredentialStore::new(db.clone());
        let hash = credential_store.hash_password("admin123").unwrap();
        let user = insert_user(&db, "jsmith", hash, "active").await;

        let role_store = RoleStore::new(db.clone());
        let manager = role_store
            .create_role("Sales Manager", Some("Manage sales team"))
            .await
            .unwrap();
        role_store
            .assign_roles(&db, user.id, &[manager.id])
            .await
            .unwrap();

        let principal = service.authenticate("jsmith", "admin123").await.unwrap();
        assert_eq!(principal.user_id, user.id);
        assert!(principal.roles.contains(&Role::SalesManager));
    }

    #[tokio::test]
    async fn wrong_password_is_invalid_credentials() {
        let (db, service) = setup().await;
        let credential_store = CredentialStore::new(db.clone());
        let hash = credential_store.hash_password("admin123").unwrap();
        insert_user(&db, "jsmith", hash, "active").await;

        let err = service.authenticate("jsmith", "nope").await.unwrap_err();
        assert!(matches!(err, AuthError::InvalidCredentials(_)));
    }

    #[tokio::test]
    async fn unknown_user_is_indistinguishable_from_wrong_password() {
        let (_db, service) = setup().await;
        let err = service.authenticate("ghost", "admin123").await.unwrap_err();
        assert!(matches!(err, AuthError::InvalidCredentials(_)));
    }

    #[tokio::test]
    async fn inactive_account_with_correct_password_is_deactivated() {
        let (db, service) = setup().await;
        let credential_store = CredentialStore::new(db.clone());
        let hash = credential_store.hash_password("admin123").unwrap();
        insert_user(&db, "jsmith", hash, "inactive").await;

        let err = service
            .authenticate("jsmith", "admin123")
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::AccountDeactivated(_)));
    }

    #[tokio::test]
    async fn inactive_account_with_wrong_password_stays_invalid_credentials() {
        // Status is checked after password verification, so the response
        // never reveals account status to someone without the password.
        let (db, service) = setup().await;
        let credential_store = CredentialStore::new(db.clone());
        let hash = credential_store.hash_password("admin123").unwrap();
        insert_user(&db, "jsmith", hash, "inactive").await;

        let err = service.authenticate("jsmith", "nope").await.unwrap_err();
        assert!(matches!(err, AuthError::InvalidCredentials(_)));
    }

    #[tokio::test]
    async fn user_without_roles_gets_empty_role_set() {
        let (db, service) = setup().await;
        let credential_store = CredentialStore::new(db.clone());
        let hash = credential_store.hash_password("admin123").unwrap();
        insert_user(&db, "norole", hash, "active").await;

        let principal = service.authenticate("norole", "admin123").await.unwrap();
        assert!(principal.roles.is_empty());
    }

    #[tokio::test]
    async fn username_lookup_is_case_sensitive() {
        let (db, service) = setup().await;
        let credential_store = CredentialStore::new(db.clone());
        let hash = credential_store.hash_password("admin123").unwrap();
        insert_user(&db, "jsmith", hash, "active").await;

        let err = service
            .authenticate("JSmith", "admin123")
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::InvalidCredentials(_)));
    }
}
