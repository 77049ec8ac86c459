mod common;

use common::{build_context, build_context_with_stored_token, PROFILE_BODY};
use lexgate::error::AuthError;
use lexgate::models::RegistrationRequest;
use lexgate::routes::{NavDecision, HOME_PATH, LOGIN_PATH};
use mockito::Server;

/// Startup with a persisted token: the session is authenticated before any
/// network traffic, the profile is still absent, and home is reachable.
#[tokio::test]
async fn test_startup_restores_persisted_token() {
    let server = Server::new_async().await;
    let harness = build_context_with_stored_token(&server.url(), "abc");

    let session = harness.context.session.snapshot();
    assert_eq!(session.token.as_deref(), Some("abc"));
    assert!(session.user.is_none());
    assert!(session.is_authenticated());

    assert_eq!(harness.context.navigate("/"), NavDecision::Proceed);
    assert_eq!(
        harness.context.navigate("/login"),
        NavDecision::Redirect(HOME_PATH)
    );
}

/// A successful login stores the token in memory and on disk, then fetches
/// the profile exactly once.
#[tokio::test]
async fn test_login_persists_token_and_fetches_profile() {
    let mut server = Server::new_async().await;
    let login_mock = server
        .mock("POST", "/login")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"access_token": "tok-xyz", "token_type": "bearer"}"#)
        .create_async()
        .await;
    let profile_mock = server
        .mock("GET", "/users/me")
        .match_header("authorization", "Bearer tok-xyz")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(PROFILE_BODY)
        .expect(1)
        .create_async()
        .await;

    let harness = build_context(&server.url());
    assert_eq!(
        harness.context.navigate("/"),
        NavDecision::Redirect(LOGIN_PATH),
        "anonymous navigation to home must bounce to login first"
    );

    let response = harness
        .context
        .session
        .login("alice", "secret")
        .await
        .expect("login should succeed");
    login_mock.assert_async().await;
    profile_mock.assert_async().await;
    assert_eq!(response.access_token, "tok-xyz");

    let session = harness.context.session.snapshot();
    assert_eq!(session.token.as_deref(), Some("tok-xyz"));
    assert_eq!(
        session.user.as_ref().map(|u| u.username.as_str()),
        Some("alice")
    );
    assert!(!session.loading);
    assert!(session.error.is_none());

    let on_disk = std::fs::read_to_string(&harness.token_path).expect("token file");
    assert_eq!(on_disk.trim(), "tok-xyz");

    assert_eq!(harness.context.navigate("/"), NavDecision::Proceed);
    assert_eq!(
        harness.context.navigate("/login"),
        NavDecision::Redirect(HOME_PATH)
    );
    assert_eq!(harness.context.navigate("/register"), NavDecision::Proceed);
}

/// A rejected login records the service message and leaves the session
/// anonymous.
#[tokio::test]
async fn test_failed_login_records_service_detail() {
    let mut server = Server::new_async().await;
    let login_mock = server
        .mock("POST", "/login")
        .with_status(401)
        .with_header("content-type", "application/json")
        .with_body(r#"{"detail": "Invalid credentials"}"#)
        .create_async()
        .await;

    let harness = build_context(&server.url());
    let result = harness.context.session.login("alice", "wrong").await;
    login_mock.assert_async().await;

    let err = result.expect_err("login should fail");
    assert!(err.is_unauthorized());

    let session = harness.context.session.snapshot();
    assert!(session.token.is_none());
    assert_eq!(session.error.as_deref(), Some("Invalid credentials"));
    assert!(!harness.token_path.exists());
    assert_eq!(
        harness.context.navigate("/"),
        NavDecision::Redirect(LOGIN_PATH)
    );
}

/// Registration surfaces the service's rejection message to the caller and
/// in the session error field.
#[tokio::test]
async fn test_register_conflict_propagates_detail() {
    let mut server = Server::new_async().await;
    let register_mock = server
        .mock("POST", "/register")
        .with_status(400)
        .with_header("content-type", "application/json")
        .with_body(r#"{"detail": "Username taken"}"#)
        .create_async()
        .await;

    let harness = build_context(&server.url());
    let request = RegistrationRequest {
        email: "bob@example.com".to_string(),
        username: "bob".to_string(),
        password: "x".to_string(),
        full_name: None,
    };
    let err = harness
        .context
        .session
        .register(&request)
        .await
        .expect_err("register should fail");

    register_mock.assert_async().await;
    match err {
        AuthError::Service { status, detail } => {
            assert_eq!(status, 400);
            assert_eq!(detail, "Username taken");
        }
        other => panic!("expected Service error, got {:?}", other),
    }
    assert_eq!(
        harness.context.session.snapshot().error.as_deref(),
        Some("Username taken")
    );
}

/// An expired token is dropped on the next authenticated request and later
/// navigation lands on the login page.
#[tokio::test]
async fn test_unauthorized_profile_fetch_forces_logout() {
    let mut server = Server::new_async().await;
    let profile_mock = server
        .mock("GET", "/users/me")
        .with_status(401)
        .with_header("content-type", "application/json")
        .with_body(r#"{"detail": "Could not validate credentials"}"#)
        .create_async()
        .await;

    let harness = build_context_with_stored_token(&server.url(), "stale");
    assert!(harness.context.session.is_authenticated());

    let result = harness.context.session.fetch_user_data().await;
    profile_mock.assert_async().await;
    assert!(result.is_err());

    let session = harness.context.session.snapshot();
    assert!(session.token.is_none());
    assert!(session.user.is_none());
    assert!(!harness.token_path.exists(), "storage key must be removed");
    assert_eq!(
        harness.context.navigate("/discussions"),
        NavDecision::Redirect(LOGIN_PATH)
    );
}

/// Reset tears the session down; doing it twice is harmless.
#[tokio::test]
async fn test_reset_clears_session_and_is_idempotent() {
    let server = Server::new_async().await;
    let harness = build_context_with_stored_token(&server.url(), "abc");
    assert!(harness.context.session.is_authenticated());

    harness.context.reset();
    assert!(!harness.context.session.is_authenticated());
    assert!(!harness.token_path.exists());

    harness.context.reset();
    assert!(!harness.context.session.is_authenticated());
}

/// Route parameters are bound opaquely and authorization still applies.
#[tokio::test]
async fn test_parameterized_routes_are_gated() {
    let server = Server::new_async().await;
    let harness = build_context(&server.url());

    assert_eq!(
        harness.context.navigate("/legal-article/42"),
        NavDecision::Redirect(LOGIN_PATH)
    );

    let m = harness
        .context
        .authorizer
        .table()
        .resolve("/legal-article/42")
        .expect("route should match");
    assert_eq!(m.params.get("id").map(String::as_str), Some("42"));
}
