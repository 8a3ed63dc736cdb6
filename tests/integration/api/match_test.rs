//! Match API integration tests

use mulberry::shared::{Gender, UserStatus};
use serde_json::{json, Value};

use crate::common::TestApp;

async fn matches(app: &TestApp, email: &str) -> Value {
    app.server
        .get("/match")
        .authorization_bearer(app.token(email))
        .await
        .json()
}

#[tokio::test]
async fn test_matches_are_ranked_and_filtered() {
    let app = TestApp::new();
    app.seed_user("alice@x.io", "Alice", Gender::Female, "NYC", &["hiking", "jazz"]).await;
    app.seed_user("bob@x.io", "Bob", Gender::Male, "NYC", &["hiking"]).await;
    app.seed_user("carl@x.io", "Carl", Gender::Male, "LA", &["hiking", "jazz"]).await;
    app.seed_user("dan@x.io", "Dan", Gender::Male, "LA", &["golf"]).await;
    app.seed_user("erin@x.io", "Erin", Gender::Female, "NYC", &["hiking", "jazz"]).await;

    let mut pending = app.seed_user("finn@x.io", "Finn", Gender::Male, "NYC", &["jazz"]).await;
    pending.status = UserStatus::Pending;
    app.users().put(&pending).await.unwrap();

    let body = matches(&app, "alice@x.io").await;
    assert_eq!(body["status"], "success");
    assert_eq!(body["data"], json!(["bob@x.io", "carl@x.io"]));
}

#[tokio::test]
async fn test_matches_are_cached() {
    let app = TestApp::new();
    app.seed_user("alice@x.io", "Alice", Gender::Female, "NYC", &["hiking"]).await;
    app.seed_user("bob@x.io", "Bob", Gender::Male, "NYC", &[]).await;

    assert_eq!(matches(&app, "alice@x.io").await["data"], json!(["bob@x.io"]));

    app.seed_user("gus@x.io", "Gus", Gender::Male, "NYC", &["hiking"]).await;
    assert_eq!(matches(&app, "alice@x.io").await["data"], json!(["bob@x.io"]));
}

#[tokio::test]
async fn test_matches_for_unknown_user() {
    let app = TestApp::new();
    let body = matches(&app, "ghost@x.io").await;

    assert_eq!(body["status"], "fail");
    assert_eq!(body["message"], "User doesn't exist");
}
