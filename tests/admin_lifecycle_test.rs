mod common;

use taskhub_backend::coordinators::AdminCoordinator;
use taskhub_backend::errors::admin::AdminError;
use taskhub_backend::types::dto::admin::{
    CreateUserRequest, ResetPasswordRequest, UpdateUserRequest,
};

use common::{create_user, principal_for, seed_roles, setup_app, TEST_PASSWORD};

fn new_user_request(username: &str, role_ids: Vec<i32>) -> CreateUserRequest {
    CreateUserRequest {
        username: username.to_string(),
        password: "initial-pass".to_string(),
        first_name: "New".to_string(),
        last_name: "Hire".to_string(),
        email: format!("{}@test.com", username),
        manager_id: None,
        department: Some("Sales".to_string()),
        location: None,
        role_ids,
    }
}

#[tokio::test]
async fn non_admin_is_rejected_from_every_admin_operation() {
    let app = setup_app().await;
    let roles = seed_roles(&app).await;

    let manager = create_user(&app, "manager", &[roles["Sales Manager"]], None).await;
    let coordinator = AdminCoordinator::new(&app);
    let principal = principal_for(&app, manager.id).await;

    assert!(matches!(
        coordinator.overview(&principal).await,
        Err(AdminError::Forbidden(_))
    ));
    assert!(matches!(
        coordinator.list_users(&principal).await,
        Err(AdminError::Forbidden(_))
    ));
    assert!(matches!(
        coordinator
            .create_user(&principal, new_user_request("newbie", vec![]))
            .await,
        Err(AdminError::Forbidden(_))
    ));
    assert!(matches!(
        coordinator.delete_user(&principal, manager.id).await,
        Err(AdminError::Forbidden(_))
    ));
}

#[tokio::test]
async fn create_user_assigns_roles_and_rejects_duplicates() {
    let app = setup_app().await;
    let roles = seed_roles(&app).await;

    let admin = create_user(&app, "admin", &[roles["Administrator"]], None).await;
    let coordinator = AdminCoordinator::new(&app);
    let principal = principal_for(&app, admin.id).await;

    let created = coordinator
        .create_user(
            &principal,
            new_user_request("newbie", vec![roles["Sales User"]]),
        )
        .await
        .unwrap();

    assert_eq!(created.username, "newbie");
    assert_eq!(created.status, "active");
    assert_eq!(created.roles, vec!["Sales User".to_string()]);

    // Same username
    let dup = coordinator
        .create_user(&principal, new_user_request("newbie", vec![]))
        .await;
    assert!(matches!(dup, Err(AdminError::DuplicateUser(_))));

    // Same email, different username
    let mut request = new_user_request("other", vec![]);
    request.email = "newbie@test.com".to_string();
    let dup_email = coordinator.create_user(&principal, request).await;
    assert!(matches!(dup_email, Err(AdminError::DuplicateUser(_))));
}

#[tokio::test]
async fn create_user_requires_the_mandatory_fields() {
    let app = setup_app().await;
    let roles = seed_roles(&app).await;

    let admin = create_user(&app, "admin", &[roles["Administrator"]], None).await;
    let coordinator = AdminCoordinator::new(&app);
    let principal = principal_for(&app, admin.id).await;

    let mut request = new_user_request("blank", vec![]);
    request.password = "  ".to_string();

    let result = coordinator.create_user(&principal, request).await;
    assert!(matches!(result, Err(AdminError::Validation(_))));
}

#[tokio::test]
async fn update_user_replaces_the_whole_role_set() {
    let app = setup_app().await;
    let roles = seed_roles(&app).await;

    let admin = create_user(&app, "admin", &[roles["Administrator"]], None).await;
    let target = create_user(&app, "target", &[roles["Sales User"]], None).await;

    let coordinator = AdminCoordinator::new(&app);
    let principal = principal_for(&app, admin.id).await;

    let updated = coordinator
        .update_user(
            &principal,
            target.id,
            UpdateUserRequest {
                first_name: "Promoted".to_string(),
                last_name: "Test".to_string(),
                email: "target@test.com".to_string(),
                manager_id: Some(admin.id),
                department: Some("Sales".to_string()),
                location: Some("Chicago".to_string()),
                status: "active".to_string(),
                role_ids: vec![roles["Sales Manager"], roles["Reporting User"]],
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.first_name, "Promoted");
    assert_eq!(updated.manager_name.as_deref(), Some("admin Test"));

    let mut names = updated.roles.clone();
    names.sort();
    assert_eq!(names, vec!["Reporting User", "Sales Manager"]);

    // The old assignment is gone, not merged
    assert!(!updated.roles.contains(&"Sales User".to_string()));
}

#[tokio::test]
async fn update_user_rejects_an_unknown_status() {
    let app = setup_app().await;
    let roles = seed_roles(&app).await;

    let admin = create_user(&app, "admin", &[roles["Administrator"]], None).await;
    let target = create_user(&app, "target", &[roles["Sales User"]], None).await;

    let coordinator = AdminCoordinator::new(&app);
    let principal = principal_for(&app, admin.id).await;

    let result = coordinator
        .update_user(
            &principal,
            target.id,
            UpdateUserRequest {
                first_name: "target".to_string(),
                last_name: "Test".to_string(),
                email: "target@test.com".to_string(),
                manager_id: None,
                department: None,
                location: None,
                status: "suspended".to_string(),
                role_ids: vec![],
            },
        )
        .await;

    assert!(matches!(result, Err(AdminError::Validation(_))));
}

#[tokio::test]
async fn reset_password_changes_the_stored_credential() {
    let app = setup_app().await;
    let roles = seed_roles(&app).await;

    let admin = create_user(&app, "admin", &[roles["Administrator"]], None).await;
    let target = create_user(&app, "target", &[roles["Sales User"]], None).await;

    let coordinator = AdminCoordinator::new(&app);
    let principal = principal_for(&app, admin.id).await;

    let short = coordinator
        .reset_password(
            &principal,
            target.id,
            ResetPasswordRequest {
                new_password: "tiny".to_string(),
                confirm_password: "tiny".to_string(),
            },
        )
        .await;
    assert!(matches!(short, Err(AdminError::Validation(_))));

    let mismatch = coordinator
        .reset_password(
            &principal,
            target.id,
            ResetPasswordRequest {
                new_password: "brand-new-pass".to_string(),
                confirm_password: "different".to_string(),
            },
        )
        .await;
    assert!(matches!(mismatch, Err(AdminError::Validation(_))));

    coordinator
        .reset_password(
            &principal,
            target.id,
            ResetPasswordRequest {
                new_password: "brand-new-pass".to_string(),
                confirm_password: "brand-new-pass".to_string(),
            },
        )
        .await
        .unwrap();

    assert!(app
        .auth_service
        .authenticate("target", "brand-new-pass")
        .await
        .is_ok());
    assert!(app
        .auth_service
        .authenticate("target", TEST_PASSWORD)
        .await
        .is_err());
}

#[tokio::test]
async fn admin_cannot_delete_their_own_account() {
    let app = setup_app().await;
    let roles = seed_roles(&app).await;

    let admin = create_user(&app, "admin", &[roles["Administrator"]], None).await;
    let coordinator = AdminCoordinator::new(&app);
    let principal = principal_for(&app, admin.id).await;

    let result = coordinator.delete_user(&principal, admin.id).await;
    assert!(matches!(result, Err(AdminError::CannotDeleteSelf(_))));

    // Still present
    assert!(coordinator.get_user(&principal, admin.id).await.is_ok());
}

#[tokio::test]
async fn deleting_another_user_removes_them() {
    let app = setup_app().await;
    let roles = seed_roles(&app).await;

    let admin = create_user(&app, "admin", &[roles["Administrator"]], None).await;
    let target = create_user(&app, "target", &[roles["Sales User"]], None).await;

    let coordinator = AdminCoordinator::new(&app);
    let principal = principal_for(&app, admin.id).await;

    coordinator.delete_user(&principal, target.id).await.unwrap();

    let gone = coordinator.get_user(&principal, target.id).await;
    assert!(matches!(gone, Err(AdminError::UserNotFound(_))));

    let again = coordinator.delete_user(&principal, target.id).await;
    assert!(matches!(again, Err(AdminError::UserNotFound(_))));
}

#[tokio::test]
async fn overview_counts_users_and_roles() {
    let app = setup_app().await;
    let roles = seed_roles(&app).await;

    let admin = create_user(&app, "admin", &[roles["Administrator"]], None).await;
    create_user(&app, "active1", &[roles["Sales User"]], None).await;
    common::create_user_with_status(&app, "dormant", &[roles["Sales User"]], None, "inactive")
        .await;

    let coordinator = AdminCoordinator::new(&app);
    let principal = principal_for(&app, admin.id).await;

    let overview = coordinator.overview(&principal).await.unwrap();
    assert_eq!(overview.total_users, 3);
    assert_eq!(overview.active_users, 2);
    assert_eq!(overview.total_roles, 4);
}

#[tokio::test]
async fn list_users_resolves_roles_and_manager_names() {
    let app = setup_app().await;
    let roles = seed_roles(&app).await;

    let admin = create_user(&app, "admin", &[roles["Administrator"]], None).await;
    let rep = create_user(&app, "rep", &[roles["Sales User"]], Some(admin.id)).await;

    let coordinator = AdminCoordinator::new(&app);
    let principal = principal_for(&app, admin.id).await;

    let listing = coordinator.list_users(&principal).await.unwrap();
    assert_eq!(listing.users.len(), 2);

    let rep_row = listing.users.iter().find(|u| u.id == rep.id).unwrap();
    assert_eq!(rep_row.roles, vec!["Sales User".to_string()]);
    assert_eq!(rep_row.manager_name.as_deref(), Some("admin Test"));
}
