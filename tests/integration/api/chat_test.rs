//! Chat API integration tests
//!
//! Sending, listing and reading conversations, and the activity offer that
//! appears once a conversation becomes mutual.

use axum::http::StatusCode;
use mulberry::shared::Gender;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use crate::common::TestApp;

const ALICE: &str = "alice@example.com";
const BOB: &str = "bob@example.com";

async fn app_with_pair() -> TestApp {
    let app = TestApp::new();
    app.seed_user(ALICE, "Alice", Gender::Female, "NYC", &["hiking"]).await;
    app.seed_user(BOB, "Bob", Gender::Male, "NYC", &["hiking"]).await;
    app
}

async fn send(app: &TestApp, from: &str, to: &str, text: &str) -> Value {
    let response = app
        .server
        .post(&format!("/chat/message/{}", to))
        .authorization_bearer(app.token(from))
        .json(&json!({ "message": text, "timestamp": "2024-05-01T10:00:00Z" }))
        .await;
    response.assert_status(StatusCode::OK);
    response.json()
}

async fn messages(app: &TestApp, reader: &str, with: &str) -> Value {
    app.server
        .get("/chat/message")
        .add_query_param("target_user_email", with)
        .authorization_bearer(app.token(reader))
        .await
        .json()
}

#[tokio::test]
async fn test_send_to_unknown_user_fails() {
    let app = app_with_pair().await;
    let body = send(&app, ALICE, "ghost@example.com", "hello?").await;

    assert_eq!(body["status"], "fail");
    assert_eq!(body["message"], "User doesn't exist");
}

#[tokio::test]
async fn test_missing_target_query_is_fail_envelope() {
    let app = app_with_pair().await;
    let response = app
        .server
        .get("/chat/message")
        .authorization_bearer(app.token(ALICE))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["status"], "fail");
    assert!(body["message"].as_str().unwrap().contains("target_user_email"));
}

#[tokio::test]
async fn test_send_empty_message_fails() {
    let app = app_with_pair().await;
    let body = send(&app, ALICE, BOB, "   ").await;
    assert_eq!(body["message"], "Message cannot be empty");
}

#[tokio::test]
async fn test_one_sided_conversation_has_no_activity() {
    let app = app_with_pair().await;
    send(&app, ALICE, BOB, "hi").await;
    let body = send(&app, ALICE, BOB, "anyone there?").await;

    assert_eq!(body["status"], "success");
    assert!(body["data"].get("activity_id").is_none());

    let history = messages(&app, BOB, ALICE).await;
    assert_eq!(history["data"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_mutual_conversation_gets_one_activity() {
    let app = app_with_pair().await;
    send(&app, ALICE, BOB, "hi").await;
    let reply = send(&app, BOB, ALICE, "hey!").await;

    let activity_id = reply["data"]["activity_id"].as_str().unwrap().to_string();
    assert_eq!(activity_id, format!("{}---{}", ALICE, BOB));

    let history = messages(&app, ALICE, BOB).await;
    let history = history["data"].as_array().unwrap();
    assert_eq!(history.len(), 3);
    assert_eq!(history[2]["sender_email"], "0");
    assert_eq!(history[2]["message"], activity_id);

    let later = send(&app, ALICE, BOB, "see you there").await;
    assert!(later["data"].get("activity_id").is_none());
    let history = messages(&app, ALICE, BOB).await;
    let system_messages = history["data"]
        .as_array()
        .unwrap()
        .iter()
        .filter(|m| m["sender_email"] == "0")
        .count();
    assert_eq!(system_messages, 1);
}

#[tokio::test]
async fn test_list_chats_tracks_read_state() {
    let app = app_with_pair().await;
    send(&app, ALICE, BOB, "hi bob").await;

    let bob_chats: Value = app
        .server
        .get("/chat")
        .authorization_bearer(app.token(BOB))
        .await
        .json();
    assert_eq!(
        bob_chats["data"][0],
        json!({
            "email": ALICE,
            "name": "Alice",
            "message": "hi bob",
            "read": false,
            "timestamp": "2024-05-01T10:00:00Z"
        })
    );

    messages(&app, BOB, ALICE).await;

    let bob_chats: Value = app
        .server
        .get("/chat")
        .authorization_bearer(app.token(BOB))
        .await
        .json();
    assert_eq!(bob_chats["data"][0]["read"], true);

    let alice_chats: Value = app
        .server
        .get("/chat")
        .authorization_bearer(app.token(ALICE))
        .await
        .json();
    assert_eq!(alice_chats["data"][0]["email"], BOB);
    assert_eq!(alice_chats["data"][0]["read"], true);
}

#[tokio::test]
async fn test_messages_of_empty_conversation() {
    let app = app_with_pair().await;
    let body = messages(&app, ALICE, BOB).await;

    assert_eq!(body["status"], "success");
    assert_eq!(body["data"], json!([]));
}

#[tokio::test]
async fn test_new_user_has_no_chats() {
    let app = app_with_pair().await;
    let body: Value = app
        .server
        .get("/chat")
        .authorization_bearer(app.token(ALICE))
        .await
        .json();
    assert_eq!(body["data"], json!([]));
}
