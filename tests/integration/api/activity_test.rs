//! Activity API integration tests

use mulberry::shared::Gender;
use serde_json::{json, Value};

use crate::common::TestApp;

const ALICE: &str = "alice@example.com";
const BOB: &str = "bob@example.com";
const EVE: &str = "eve@example.com";

/// Two users who have both written, so an offer exists
async fn app_with_offer() -> (TestApp, String) {
    let app = TestApp::new();
    app.seed_user(ALICE, "Alice", Gender::Female, "NYC", &["hiking"]).await;
    app.seed_user(BOB, "Bob", Gender::Male, "NYC", &["hiking"]).await;

    for (from, to) in [(ALICE, BOB), (BOB, ALICE)] {
        app.server
            .post(&format!("/chat/message/{}", to))
            .authorization_bearer(app.token(from))
            .json(&json!({ "message": "hello" }))
            .await;
    }

    let activity_id = format!("{}---{}", ALICE, BOB);
    (app, activity_id)
}

async fn get_activity(app: &TestApp, id: &str) -> Value {
    app.server
        .get(&format!("/activity/{}", id))
        .authorization_bearer(app.token(ALICE))
        .await
        .json()
}

async fn accept(app: &TestApp, id: &str, by: &str) -> Value {
    app.server
        .put(&format!("/activity/status/{}", id))
        .authorization_bearer(app.token(by))
        .await
        .json()
}

#[tokio::test]
async fn test_get_activity() {
    let (app, id) = app_with_offer().await;
    let body = get_activity(&app, &id).await;

    assert_eq!(body["status"], "success");
    assert_eq!(body["data"]["id"], id);
    assert_eq!(body["data"]["first"]["email"], ALICE);
    assert_eq!(body["data"]["first"]["name"], "Alice");
    assert_eq!(body["data"]["second"]["email"], BOB);
    assert_eq!(body["data"]["first"]["accepted"], false);
    assert!(body["data"]["activity"]["name"].is_string());
}

#[tokio::test]
async fn test_unknown_activity() {
    let (app, _) = app_with_offer().await;

    let missing = get_activity(&app, &format!("{}---{}", ALICE, EVE)).await;
    assert_eq!(missing["message"], "no such activity");

    let malformed = get_activity(&app, "not-a-key").await;
    assert_eq!(malformed["message"], "no such activity");
}

#[tokio::test]
async fn test_accept_activity() {
    let (app, id) = app_with_offer().await;

    assert_eq!(accept(&app, &id, BOB).await["status"], "success");
    let body = get_activity(&app, &id).await;
    assert_eq!(body["data"]["first"]["accepted"], false);
    assert_eq!(body["data"]["second"]["accepted"], true);

    assert_eq!(accept(&app, &id, ALICE).await["status"], "success");
    let body = get_activity(&app, &id).await;
    assert_eq!(body["data"]["first"]["accepted"], true);
}

#[tokio::test]
async fn test_outsider_cannot_accept() {
    let (app, id) = app_with_offer().await;
    let body = accept(&app, &id, EVE).await;

    assert_eq!(body["status"], "fail");
    assert_eq!(body["message"], "not a participant of this activity");
}
