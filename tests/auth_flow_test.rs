mod common;

use taskhub_backend::coordinators::AuthCoordinator;
use taskhub_backend::errors::auth::AuthError;

use common::{create_user, create_user_with_status, seed_roles, setup_app, TEST_PASSWORD};

#[tokio::test]
async fn login_opens_a_resolvable_session() {
    let app = setup_app().await;
    let roles = seed_roles(&app).await;
    let user = create_user(&app, "jsmith", &[roles["Sales Manager"]], None).await;

    let coordinator = AuthCoordinator::new(&app);
    let (token, response) = coordinator.login("jsmith", TEST_PASSWORD).await.unwrap();

    assert_eq!(response.id, user.id);
    assert_eq!(response.username, "jsmith");
    assert_eq!(response.roles, vec!["Sales Manager".to_string()]);

    let principal = app.session_service.resolve(&token).unwrap();
    assert_eq!(principal.user_id, user.id);
}

#[tokio::test]
async fn wrong_password_and_unknown_user_fail_identically() {
    let app = setup_app().await;
    let roles = seed_roles(&app).await;
    create_user(&app, "jsmith", &[roles["Sales Manager"]], None).await;

    let coordinator = AuthCoordinator::new(&app);

    let wrong_password = coordinator.login("jsmith", "not-the-password").await;
    let unknown_user = coordinator.login("nobody", TEST_PASSWORD).await;

    for result in [wrong_password, unknown_user] {
        match result {
            Err(AuthError::InvalidCredentials(body)) => {
                assert_eq!(body.0.message, "Invalid username or password");
            }
            other => panic!("Expected InvalidCredentials, got {:?}", other),
        }
    }
}

#[tokio::test]
async fn deactivated_account_with_correct_password_gets_its_own_error() {
    let app = setup_app().await;
    let roles = seed_roles(&app).await;
    create_user_with_status(&app, "dormant", &[roles["Sales User"]], None, "inactive").await;

    let coordinator = AuthCoordinator::new(&app);

    let result = coordinator.login("dormant", TEST_PASSWORD).await;
    assert!(matches!(result, Err(AuthError::AccountDeactivated(_))));

    // A wrong password on an inactive account reveals nothing about status
    let wrong = coordinator.login("dormant", "not-the-password").await;
    assert!(matches!(wrong, Err(AuthError::InvalidCredentials(_))));
}

#[tokio::test]
async fn logout_destroys_the_session() {
    let app = setup_app().await;
    let roles = seed_roles(&app).await;
    create_user(&app, "jsmith", &[roles["Sales Manager"]], None).await;

    let coordinator = AuthCoordinator::new(&app);
    let (token, _) = coordinator.login("jsmith", TEST_PASSWORD).await.unwrap();

    coordinator.logout(Some(&token));
    assert!(app.session_service.resolve(&token).is_none());

    // Logging out again, or without a cookie, is fine
    coordinator.logout(Some(&token));
    coordinator.logout(None);
}

#[tokio::test]
async fn username_lookup_is_case_sensitive() {
    let app = setup_app().await;
    let roles = seed_roles(&app).await;
    create_user(&app, "jsmith", &[roles["Sales Manager"]], None).await;

    let coordinator = AuthCoordinator::new(&app);
    let result = coordinator.login("JSmith", TEST_PASSWORD).await;
    assert!(matches!(result, Err(AuthError::InvalidCredentials(_))));
}

#[tokio::test]
async fn concurrent_sessions_are_independent() {
    let app = setup_app().await;
    let roles = seed_roles(&app).await;
    create_user(&app, "jsmith", &[roles["Sales Manager"]], None).await;

    let coordinator = AuthCoordinator::new(&app);
    let (first, _) = coordinator.login("jsmith", TEST_PASSWORD).await.unwrap();
    let (second, _) = coordinator.login("jsmith", TEST_PASSWORD).await.unwrap();

    assert_ne!(first, second);

    coordinator.logout(Some(&first));
    assert!(app.session_service.resolve(&first).is_none());
    assert!(app.session_service.resolve(&second).is_some());
}
