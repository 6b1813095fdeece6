//! Integration tests for sign-up, login and profiles.

mod helpers;

use axum::body::Body;
use http::{Request, StatusCode};
use serde_json::json;

#[tokio::test]
async fn test_create_account_then_login() {
    let app = helpers::TestApp::new();

    let created = app
        .create_account("alice@example.com", "secret", "Listener")
        .await;
    assert_eq!(created.status, StatusCode::OK);
    assert_eq!(created.body, json!({ "ok": true }));

    let token = app.login("alice@example.com", "secret").await;
    assert!(!token.is_empty());
}

#[tokio::test]
async fn test_duplicate_email_is_rejected() {
    let app = helpers::TestApp::new();
    app.create_account("alice@example.com", "secret", "Listener")
        .await;

    let response = app
        .create_account("alice@example.com", "other", "Host")
        .await;
    assert_eq!(response.status, StatusCode::CONFLICT);
    assert!(!response.ok());
    assert_eq!(
        response.error(),
        Some("There is a user with that email already")
    );
}

#[tokio::test]
async fn test_invalid_email_is_rejected() {
    let app = helpers::TestApp::new();
    let response = app.create_account("not-an-email", "secret", "Host").await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error(), Some("Email must be a valid email address"));
}

#[tokio::test]
async fn test_login_unknown_user() {
    let app = helpers::TestApp::new();
    let response = app
        .request(
            "POST",
            "/api/auth/login",
            Some(json!({ "email": "nobody@example.com", "password": "x" })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body, json!({ "ok": false, "error": "User not found" }));
}

#[tokio::test]
async fn test_login_wrong_password() {
    let app = helpers::TestApp::new();
    app.create_account("alice@example.com", "secret", "Listener")
        .await;

    let response = app
        .request(
            "POST",
            "/api/auth/login",
            Some(json!({ "email": "alice@example.com", "password": "wrong" })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.error(), Some("Wrong password"));
}

#[tokio::test]
async fn test_me_requires_token() {
    let app = helpers::TestApp::new();

    let missing = app.request("GET", "/api/users/me", None, None).await;
    assert_eq!(missing.status, StatusCode::UNAUTHORIZED);

    let invalid = app
        .request("GET", "/api/users/me", None, Some("garbage"))
        .await;
    assert_eq!(invalid.status, StatusCode::UNAUTHORIZED);
    assert_eq!(invalid.error(), Some("Invalid token"));
}

#[tokio::test]
async fn test_me_accepts_x_jwt_header() {
    let app = helpers::TestApp::new();
    let token = app.listener_token().await;

    let req = Request::builder()
        .method("GET")
        .uri("/api/users/me")
        .header("x-jwt", token)
        .body(Body::empty())
        .unwrap();
    let response = app.send(req).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["user"]["email"], "listener@example.com");
    assert_eq!(response.body["user"]["role"], "Listener");
    assert!(response.body["user"].get("password_hash").is_none());
}

#[tokio::test]
async fn test_edit_profile_changes_login_credentials() {
    let app = helpers::TestApp::new();
    let token = app.listener_token().await;

    let response = app
        .request(
            "PATCH",
            "/api/users/me",
            Some(json!({ "email": "renamed@example.com", "password": "new-pw" })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.ok());

    let old = app
        .request(
            "POST",
            "/api/auth/login",
            Some(json!({ "email": "listener@example.com", "password": "listener-pw" })),
            None,
        )
        .await;
    assert_eq!(old.error(), Some("User not found"));

    app.login("renamed@example.com", "new-pw").await;
}

#[tokio::test]
async fn test_edit_profile_rejects_invalid_fields() {
    let app = helpers::TestApp::new();
    let token = app.listener_token().await;

    let response = app
        .request(
            "PATCH",
            "/api/users/me",
            Some(json!({ "email": "not-an-email" })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error(), Some("Email must be a valid email address"));

    let response = app
        .request(
            "PATCH",
            "/api/users/me",
            Some(json!({ "password": "" })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error(), Some("Password must not be empty"));

    let me = app.request("GET", "/api/users/me", None, Some(&token)).await;
    assert_eq!(me.body["user"]["email"], "listener@example.com");
    app.login("listener@example.com", "listener-pw").await;
}

#[tokio::test]
async fn test_user_profile_by_id() {
    let app = helpers::TestApp::new();
    let token = app.listener_token().await;

    let found = app.request("GET", "/api/users/1", None, Some(&token)).await;
    assert_eq!(found.status, StatusCode::OK);
    assert_eq!(found.body["user"]["id"], 1);

    let missing = app.request("GET", "/api/users/99", None, Some(&token)).await;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);
    assert_eq!(missing.error(), Some("User not found"));
}

#[tokio::test]
async fn test_health() {
    let app = helpers::TestApp::new();
    let response = app.request("GET", "/api/health", None, None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.ok());
    assert_eq!(response.body["status"], "ok");
    assert_eq!(response.body["database"], true);
}
