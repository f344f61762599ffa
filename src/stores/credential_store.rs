use argon2::password_hash::SaltString;
use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};

use crate::errors::InternalError;
use crate::types::db::user;

/// CredentialStore manages password hashing and credential lookups
///
/// Password comparison is constant-time by virtue of the hashing primitive,
/// not custom code.
pub struct CredentialStore {
    db: DatabaseConnection,
}

impl CredentialStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Look up a user row by username for authentication
    ///
    /// Case-sensitive exact match. Returns `Ok(None)` for an unknown
    /// username so the caller can collapse it with a failed verification
    /// into one indistinguishable failure.
    pub async fn find_user_for_auth(
        &self,
        username: &str,
    ) -> Result<Option<user::Model>, InternalError> {
        user::Entity::find()
            .filter(user::Column::Username.eq(username))
            .one(&self.db)
            .await
            .map_err(|e| InternalError::database("find_user_for_auth", e))
    }

    /// Hash a plaintext password with Argon2id and a fresh salt
    pub fn hash_password(&self, password: &str) -> Result<String, InternalError> {
        let salt = SaltString::generate(&mut rand_core::OsRng);
        let hash = Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| InternalError::crypto("hash_password", e.to_string()))?;
        Ok(hash.to_string())
    }

    /// Verify a plaintext password against a stored hash
    ///
    /// A mismatch is `Ok(false)`; only a malformed stored hash is an error.
    pub fn verify_password(
        &self,
        password: &str,
        stored_hash: &str,
    ) -> Result<bool, InternalError> {
        let parsed = PasswordHash::new(stored_hash)
            .map_err(|e| InternalError::crypto("parse_password_hash", e.to_string()))?;
        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok())
    }

    /// Replace a user's password hash
    pub async fn update_password(
        &self,
        user_id: i32,
        new_password: &str,
    ) -> Result<(), InternalError> {
        let password_hash = self.hash_password(new_password)?;

        let update = user::ActiveModel {
            id: Set(user_id),
            password_hash: Set(password_hash),
            updated_at: Set(Utc::now().timestamp()),
            ..Default::default()
        };

        update
            .update(&self.db)
            .await
            .map_err(|e| InternalError::database("update_password", e))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::Database;

    async fn setup() -> CredentialStore {
        let db = Database::connect("sqlite::memory:")
            .await
            .expect("Failed to create test database");
        CredentialStore::new(db)
    }

    #[tokio::test]
    async fn hash_and_verify_round_trip() {
        let store = setup().await;
        let hash = store.hash_password("admin123").unwrap();

        assert!(store.verify_password("admin123", &hash).unwrap());
        assert!(!store.verify_password("wrong-password", &hash).unwrap());
    }

    #[tokio::test]
    async fn hashes_are_salted() {
        let store = setup().await;
        let a = store.hash_password("admin123").unwrap();
        let b = store.hash_password("admin123").unwrap();
        assert_ne!(a, b);
    }

    #[tokio::test]
    async fn malformed_stored_hash_is_an_error() {
        let store = setup().await;
        assert!(store.verify_password("admin123", "not-a-hash").is_err());
    }
}
