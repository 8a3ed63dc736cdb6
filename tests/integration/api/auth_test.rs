//! Account API integration tests
//!
//! Signup, login, verification and profile endpoints, plus the token check
//! and fallback shared by every route.

use axum::http::StatusCode;
use mulberry::backend::auth::verification::VerificationEntry;
use mulberry::backend::store::{self, Table};
use serde_json::{json, Value};

use crate::common::TestApp;

async fn signup(app: &TestApp, email: &str) -> Value {
    app.server
        .post("/user/signup")
        .json(&json!({ "email": email, "password": "password123" }))
        .await
        .json()
}

#[tokio::test]
async fn test_signup_success() {
    let app = TestApp::new();
    let body = signup(&app, "test@example.com").await;

    assert_eq!(body["status"], "success");
    assert!(body["data"]["token"].is_string());
}

#[tokio::test]
async fn test_signup_duplicate_email() {
    let app = TestApp::new();
    signup(&app, "test@example.com").await;

    let response = app
        .server
        .post("/user/signup")
        .json(&json!({ "email": "test@example.com", "password": "password123" }))
        .await;

    response.assert_status(StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["status"], "fail");
    assert_eq!(body["message"], "email already exists");
}

#[tokio::test]
async fn test_signup_rejects_dash_edged_email() {
    let app = TestApp::new();

    for email in ["ann@host-", "-ann@host.io"] {
        let body = signup(&app, email).await;
        assert_eq!(body["status"], "fail");
        assert_eq!(body["message"], "Invalid email format");
    }
}

#[tokio::test]
async fn test_login_success_hides_password() {
    let app = TestApp::new();
    signup(&app, "test@example.com").await;

    let body: Value = app
        .server
        .post("/user/login")
        .json(&json!({ "email": "test@example.com", "password": "password123" }))
        .await
        .json();

    assert_eq!(body["status"], "success");
    assert_eq!(body["data"]["email"], "test@example.com");
    assert_eq!(body["data"]["status"], "PENDING");
    assert!(body["data"]["token"].is_string());
    assert!(body["data"].get("password_hash").is_none());
}

#[tokio::test]
async fn test_login_invalid_credentials() {
    let app = TestApp::new();
    signup(&app, "test@example.com").await;

    let wrong: Value = app
        .server
        .post("/user/login")
        .json(&json!({ "email": "test@example.com", "password": "wrongpassword" }))
        .await
        .json();
    assert_eq!(wrong["message"], "Wrong password");

    let missing: Value = app
        .server
        .post("/user/login")
        .json(&json!({ "email": "nobody@example.com", "password": "password123" }))
        .await
        .json();
    assert_eq!(missing["message"], "User doesn't exist");
}

#[tokio::test]
async fn test_signup_token_opens_protected_routes() {
    let app = TestApp::new();
    let body = signup(&app, "test@example.com").await;
    let token = body["data"]["token"].as_str().unwrap().to_string();

    let response = app
        .server
        .get("/user")
        .add_query_param("email", "test@example.com")
        .authorization_bearer(token)
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["data"]["email"], "test@example.com");
}

#[tokio::test]
async fn test_missing_token_is_rejected() {
    let app = TestApp::new();
    let response = app.server.get("/chat").await;

    response.assert_status(StatusCode::UNAUTHORIZED);
    let body: Value = response.json();
    assert_eq!(body, json!({ "status": "fail", "message": "No token is present" }));
}

#[tokio::test]
async fn test_invalid_token_is_forbidden() {
    let app = TestApp::new();
    let response = app.server.get("/chat").authorization_bearer("not-a-jwt").await;

    response.assert_status(StatusCode::FORBIDDEN);
    let body: Value = response.json();
    assert_eq!(body["message"], "Token is invalid or expires");
}

#[tokio::test]
async fn test_unknown_route_falls_back() {
    let app = TestApp::new();
    let response = app.server.get("/nowhere").await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["message"], "No proper handler found for the endpoint");
}

#[tokio::test]
async fn test_verification_flow() {
    let app = TestApp::new();
    signup(&app, "test@example.com").await;

    let codes: Vec<VerificationEntry> = store::scan_as(&app.store, Table::Cache).await.unwrap();
    assert_eq!(codes.len(), 1);

    let verified: Value = app.server.get(&format!("/user/verify/{}", codes[0].key)).await.json();
    assert_eq!(verified["status"], "success");

    let again: Value = app.server.post(&format!("/user/verify/{}", codes[0].key)).await.json();
    assert_eq!(again["message"], "Either verification is expired or already verified");

    let resend: Value = app.server.post("/user/verify/resend/test@example.com").await.json();
    assert_eq!(resend["message"], "Email has been verified or user not exists!");
}

#[tokio::test]
async fn test_update_profile_activates_account() {
    let app = TestApp::new();
    signup(&app, "test@example.com").await;
    let token = app.token("test@example.com");

    let updated: Value = app
        .server
        .put("/user")
        .authorization_bearer(&token)
        .json(&json!({
            "name": "Tess",
            "gender": "female",
            "location": "Boston",
            "interests": ["tennis", "jazz"],
            "photo": "https://img.example.com/tess.png"
        }))
        .await
        .json();
    assert_eq!(updated["status"], "success");

    let profile: Value = app
        .server
        .get("/user")
        .add_query_param("email", "test@example.com")
        .authorization_bearer(&token)
        .await
        .json();
    assert_eq!(profile["data"]["status"], "ACTIVE");
    assert_eq!(profile["data"]["name"], "Tess");

    let photo: Value = app
        .server
        .get("/user/photo")
        .add_query_param("email", "test@example.com")
        .authorization_bearer(&token)
        .await
        .json();
    assert_eq!(photo["data"]["link"], "https://img.example.com/tess.png");
}

#[tokio::test]
async fn test_change_password() {
    let app = TestApp::new();
    signup(&app, "test@example.com").await;

    let changed: Value = app
        .server
        .put("/user/password")
        .authorization_bearer(app.token("test@example.com"))
        .json(&json!({ "password": "brand-new-pass" }))
        .await
        .json();
    assert_eq!(changed["status"], "success");

    let login: Value = app
        .server
        .post("/user/login")
        .json(&json!({ "email": "test@example.com", "password": "brand-new-pass" }))
        .await
        .json();
    assert_eq!(login["status"], "success");
}

#[tokio::test]
async fn test_wrong_method_falls_back() {
    let app = TestApp::new();
    let response = app.server.delete("/user/login").await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["status"], "fail");
    assert_eq!(body["message"], "No proper handler found for the endpoint");
}

#[tokio::test]
async fn test_mistyped_body_is_fail_envelope() {
    let app = TestApp::new();
    let response = app
        .server
        .post("/user/signup")
        .json(&json!({ "email": 5, "password": "password123" }))
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = response.json();
    assert_eq!(body["status"], "fail");
    assert!(body["message"].as_str().unwrap().contains("email"));
}
