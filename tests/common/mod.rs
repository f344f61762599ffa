// Common test utilities for integration tests

use std::collections::HashMap;
use std::sync::Arc;

use migration::{Migrator, MigratorTrait};
use sea_orm::Database;
use taskhub_backend::config::BootstrapSettings;
use taskhub_backend::stores::task_store::NewTask;
use taskhub_backend::stores::user_store::NewUser;
use taskhub_backend::types::db::user;
use taskhub_backend::types::internal::Principal;
use taskhub_backend::AppData;

pub const TEST_PASSWORD: &str = "password123";

/// Creates an in-memory application with migrations applied
pub async fn setup_app() -> Arc<AppData> {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("Failed to create test database");

    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");

    let settings = BootstrapSettings::from_env().expect("Failed to load settings");
    Arc::new(AppData::init(db, &settings))
}

/// Creates the standard role catalog, returning name -> id
pub async fn seed_roles(app: &AppData) -> HashMap<&'static str, i32> {
    let mut ids = HashMap::new();
    for name in ["Administrator", "Sales Manager", "Sales User", "Reporting User"] {
        let role = app
            .role_store
            .create_role(name, None)
            .await
            .expect("Failed to create role");
        ids.insert(name, role.id);
    }
    ids
}

/// Creates an active user with the given roles assigned
pub async fn create_user(
    app: &AppData,
    username: &str,
    role_ids: &[i32],
    manager_id: Option<i32>,
) -> user::Model {
    create_user_with_status(app, username, role_ids, manager_id, user::STATUS_ACTIVE).await
}

pub async fn create_user_with_status(
    app: &AppData,
    username: &str,
    role_ids: &[i32],
    manager_id: Option<i32>,
    status: &str,
) -> user::Model {
    let password_hash = app
        .credential_store
        .hash_password(TEST_PASSWORD)
        .expect("Failed to hash password");

    let created = app
        .user_store
        .insert_user(
            &app.db,
            NewUser {
                username: username.to_string(),
                password_hash,
                first_name: username.to_string(),
                last_name: "Test".to_string(),
                email: format!("{}@test.com", username),
                manager_id,
                department: Some("Sales".to_string()),
                location: None,
                status: status.to_string(),
            },
        )
        .await
        .expect("Failed to insert user");

    app.role_store
        .assign_roles(&app.db, created.id, role_ids)
        .await
        .expect("Failed to assign roles");

    created
}

/// Builds a principal the way a resolved session would
pub async fn principal_for(app: &AppData, user_id: i32) -> Principal {
    let user = app
        .user_store
        .find_by_id(user_id)
        .await
        .expect("Failed to load user")
        .expect("User not found");
    let roles = app.role_resolver.roles_of(user.id).await;
    Principal::from_user(&user, roles)
}

/// Creates a task assigned to one user, created by another
pub async fn create_task(app: &AppData, title: &str, assigned_to: i32, created_by: i32) -> i32 {
    let task = app
        .task_store
        .create(NewTask {
            title: title.to_string(),
            description: None,
            task_type: "Follow-up".to_string(),
            status: "open".to_string(),
            priority: "medium".to_string(),
            assigned_to,
            created_by,
            due_date: None,
        })
        .await
        .expect("Failed to create task");
    task.id
}
