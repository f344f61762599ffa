use std::collections::HashMap;
use std::fmt;
use std::sync::RwLock;

use base64::{engine::general_purpose, Engine as _};
use chrono::Utc;
use rand::prelude::*;

use crate::services::crypto;
use crate::types::internal::Principal;

/// Server-side session storage
///
/// Sessions live in-process, keyed by the HMAC of an opaque cookie token,
/// so a leaked memory dump never exposes usable session ids. Expiry is
/// sliding: each resolved request pushes the deadline out another lifetime.
/// Single-process only; there is no distributed session sharing.
pub struct SessionService {
    session_secret: String,
    session_lifetime_hours: i64,
    sessions: RwLock<HashMap<String, SessionEntry>>,
}

struct SessionEntry {
    principal: Principal,
    expires_at: i64,
}

impl SessionService {
    pub fn new(session_secret: String) -> Self {
        Self {
            session_secret,
            session_lifetime_hours: 24,
            sessions: RwLock::new(HashMap::new()),
        }
    }

    /// Create a session for the principal and return the cookie token
    pub fn create(&self, principal: Principal) -> String {
        let mut rng = rand::rng();
        let random_bytes: [u8; 32] = rng.random();
        let token = general_purpose::URL_SAFE_NO_PAD.encode(random_bytes);

        let entry = SessionEntry {
            principal,
            expires_at: self.expiry_from_now(),
        };

        let key = self.hash_token(&token);
        let mut sessions = self.sessions.write().expect("session lock poisoned");
        let now = Utc::now().timestamp();
        sessions.retain(|_, e| e.expires_at > now);
        sessions.insert(key, entry);

        token
    }

    /// Resolve a cookie token to its principal, renewing the expiry
    ///
    /// Unknown and expired tokens both come back as `None`; the caller
    /// turns that into its unauthenticated response.
    pub fn resolve(&self, token: &str) -> Option<Principal> {
        let key = self.hash_token(token);
        let now = Utc::now().timestamp();

        let mut sessions = self.sessions.write().expect("session lock poisoned");
        match sessions.get_mut(&key) {
            Some(entry) if entry.expires_at > now => {
                entry.expires_at = self.expiry_from_now();
                Some(entry.principal.clone())
            }
            Some(_) => {
                sessions.remove(&key);
                None
            }
            None => None,
        }
    }

    /// Destroy a session; unknown tokens are a no-op
    pub fn destroy(&self, token: &str) {
        let key = self.hash_token(token);
        let mut sessions = self.sessions.write().expect("session lock poisoned");
        sessions.remove(&key);
    }

    /// Cookie lifetime in seconds, for Max-Age
    pub fn cookie_max_age_secs(&self) -> i64 {
        self.session_lifetime_hours * 60 * 60
    }

    fn expiry_from_now(&self) -> i64 {
        Utc::now().timestamp() + self.cookie_max_age_secs()
    }

    fn hash_token(&self, token: &str) -> String {
        crypto::hmac_sha256_token(&self.session_secret, token)
    }
}

#[cfg(test)]
impl SessionService {
    fn with_lifetime_hours(session_secret: String, hours: i64) -> Self {
        Self {
            session_secret,
            session_lifetime_hours: hours,
            sessions: RwLock::new(HashMap::new()),
        }
    }

    fn entry_expiry(&self, token: &str) -> Option<i64> {
        let key = self.hash_token(token);
        let sessions = self.sessions.read().expect("session lock poisoned");
        sessions.get(&key).map(|e| e.expires_at)
    }

    fn set_entry_expiry(&self, token: &str, expires_at: i64) {
        let key = self.hash_token(token);
        let mut sessions = self.sessions.write().expect("session lock poisoned");
        if let Some(entry) = sessions.get_mut(&key) {
            entry.expires_at = expires_at;
        }
    }
}

impl fmt::Debug for SessionService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionService")
            .field("session_secret", &"<redacted>")
            .field("session_lifetime_hours", &self.session_lifetime_hours)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::internal::{Role, RoleSet};

    fn principal(user_id: i32) -> Principal {
        Principal {
            user_id,
            username: format!("user{}", user_id),
            first_name: "Test".to_string(),
            last_name: "User".to_string(),
            email: format!("user{}@example.com", user_id),
            department: None,
            location: None,
            roles: [Role::SalesUser].into_iter().collect::<RoleSet>(),
        }
    }

    #[test]
    fn create_then_resolve_returns_the_principal() {
        let service = SessionService::new("test-secret".to_string());
        let token = service.create(principal(4));

        let resolved = service.resolve(&token).expect("session should resolve");
        assert_eq!(resolved.user_id, 4);
    }

    #[test]
    fn unknown_token_does_not_resolve() {
        let service = SessionService::new("test-secret".to_string());
        assert!(service.resolve("not-a-token").is_none());
    }

    #[test]
    fn destroyed_session_does_not_resolve() {
        let service = SessionService::new("test-secret".to_string());
        let token = service.create(principal(4));

        service.destroy(&token);
        assert!(service.resolve(&token).is_none());
    }

    #[test]
    fn tokens_are_unique_per_session() {
        let service = SessionService::new("test-secret".to_string());
        let a = service.create(principal(4));
        let b = service.create(principal(4));
        assert_ne!(a, b);
    }

    #[test]
    fn destroy_of_unknown_token_is_a_no_op() {
        let service = SessionService::new("test-secret".to_string());
        service.destroy("never-issued");
    }

    #[test]
    fn expired_session_does_not_resolve_and_is_removed() {
        let service = SessionService::with_lifetime_hours("test-secret".to_string(), -1);
        let token = service.create(principal(4));
        assert!(service.entry_expiry(&token).is_some());

        assert!(service.resolve(&token).is_none());
        assert!(service.entry_expiry(&token).is_none());
    }

    #[test]
    fn resolve_pushes_the_expiry_forward() {
        let service = SessionService::new("test-secret".to_string());
        let token = service.create(principal(4));

        let soon = Utc::now().timestamp() + 10;
        service.set_entry_expiry(&token, soon);

        assert!(service.resolve(&token).is_some());
        let renewed = service.entry_expiry(&token).expect("entry should remain");
        assert!(renewed > soon);
    }

    #[test]
    fn create_purges_stale_entries() {
        let service = SessionService::with_lifetime_hours("test-secret".to_string(), -1);
        let stale = service.create(principal(4));
        let fresh = service.create(principal(5));

        assert!(service.entry_expiry(&stale).is_none());
        assert!(service.entry_expiry(&fresh).is_some());
    }
}
