use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::config::BootstrapSettings;
use crate::services::{AuthService, RoleResolver, SessionService};
use crate::stores::{CredentialStore, RoleStore, TaskStore, UserStore};

/// Centralized application data following the main-owned stores pattern
///
/// All dependencies are created once in main.rs and shared across
/// coordinators. This eliminates store duplication and keeps coordinator
/// signatures stable: a coordinator takes `Arc<AppData>` and extracts what
/// it needs.
pub struct AppData {
    pub db: DatabaseConnection,
    pub credential_store: Arc<CredentialStore>,
    pub user_store: Arc<UserStore>,
    pub role_store: Arc<RoleStore>,
    pub task_store: Arc<TaskStore>,
    pub role_resolver: Arc<RoleResolver>,
    pub auth_service: Arc<AuthService>,
    pub session_service: Arc<SessionService>,
}

impl AppData {
    /// Initialize all application data
    ///
    /// The database connection should be established and migrated before
    /// calling this.
    pub fn init(db: DatabaseConnection, settings: &BootstrapSettings) -> Self {
        tracing::debug!("Creating stores...");
        let credential_store = Arc::new(CredentialStore::new(db.clone()));
        let user_store = Arc::new(UserStore::new(db.clone()));
        let role_store = Arc::new(RoleStore::new(db.clone()));
        let task_store = Arc::new(TaskStore::new(db.clone()));

        let role_resolver = Arc::new(RoleResolver::new(role_store.clone()));
        let auth_service = Arc::new(AuthService::new(
            credential_store.clone(),
            role_resolver.clone(),
        ));
        let session_service = Arc::new(SessionService::new(
            settings.session_secret().to_string(),
        ));
        tracing::debug!("Stores created");

        Self {
            db,
            credential_store,
            user_store,
            role_store,
            task_store,
            role_resolver,
            auth_service,
            session_service,
        }
    }
}
