//! End-to-end tests for the BlueFlame API.
//!
//! Drives the full router over a real SQLite document store (in-memory or
//! on disk). Each test builds its own state.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use serde_json::{json, Value};
use tower::ServiceExt;

use blueflame_api::create_router;
use blueflame_api::handlers::{ChatResponse, HealthResponse};
use blueflame_api::state::AppState;
use blueflame_core::config::BlueflameConfig;
use blueflame_storage::{Database, SqliteDocumentStore};

// =============================================================================
// Helpers
// =============================================================================

/// Create a fresh AppState over an in-memory database.
fn make_state() -> AppState {
    let db = Arc::new(Database::in_memory().unwrap());
    AppState::new(
        BlueflameConfig::default(),
        Arc::new(SqliteDocumentStore::new(db)),
    )
}

fn get(uri: &str) -> Request<Body> {
    Request::get(uri).body(Body::empty()).unwrap()
}

fn post_json(uri: &str, json: Value) -> Request<Body> {
    Request::post(uri)
        .header("content-type", "application/json")
        .body(Body::from(json.to_string()))
        .unwrap()
}

async fn body_json(resp: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(resp.into_body(), 4 * 1024 * 1024)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

async fn send_chat(app: &axum::Router, body: Value) -> ChatResponse {
    let resp = app.clone().oneshot(post_json("/api/chat", body)).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    serde_json::from_value(body_json(resp).await).unwrap()
}

// =============================================================================
// Chat
// =============================================================================

#[tokio::test]
async fn test_translation_to_hindi() {
    let app = create_router(make_state());
    let chat = send_chat(
        &app,
        json!({"message": "hello", "mode": "translation", "language": "hi"}),
    )
    .await;

    assert_eq!(chat.reply, "Translation (hi): नमस्ते");
    assert_eq!(
        chat.suggestions,
        vec!["Detect language", "Back-translate", "Transliterate"]
    );
}

#[tokio::test]
async fn test_student_reply_is_wrapped() {
    let app = create_router(make_state());
    let chat = send_chat(&app, json!({"message": "Photosynthesis", "mode": "student"})).await;

    assert!(chat
        .reply
        .starts_with("Student Mode:\n- Simple explanation\n- Key points\n- Short example\n\n"));
    assert!(chat.reply.contains("Answer: Photosynthesis"));
    assert_eq!(chat.suggestions[0], "Create study notes");
}

#[tokio::test]
async fn test_fun_reply_is_wrapped() {
    let app = create_router(make_state());
    let chat = send_chat(&app, json!({"message": "Tell me a joke", "mode": "fun"})).await;

    assert!(chat.reply.starts_with("Fun Mode 🎉:\n"));
    assert!(chat
        .reply
        .ends_with("\n(peppered with a friendly, upbeat vibe)"));
}

#[tokio::test]
async fn test_summary_truncates_long_text() {
    let app = create_router(make_state());
    let words: Vec<String> = (1..=50).map(|i| format!("w{}", i)).collect();
    let chat = send_chat(
        &app,
        json!({"message": words.join(" "), "mode": "summary"}),
    )
    .await;

    assert!(chat.reply.ends_with('…'));
    assert!(chat.reply.contains("w40"));
    assert!(!chat.reply.contains("w41"));
}

#[tokio::test]
async fn test_session_continuity_across_turns() {
    let app = create_router(make_state());

    let first = send_chat(&app, json!({"message": "first question"})).await;
    let second = send_chat(
        &app,
        json!({"message": "second question", "session_id": first.session_id}),
    )
    .await;
    assert_eq!(second.session_id, first.session_id);

    let resp = app.clone().oneshot(get("/api/sessions")).await.unwrap();
    let sessions = body_json(resp).await;
    let sessions = sessions["sessions"].as_array().unwrap();
    assert_eq!(sessions.len(), 1);
    assert_eq!(sessions[0]["_id"], first.session_id.as_str());
    assert!(sessions[0]["title"].as_str().unwrap().starts_with("Chat – "));

    let resp = app
        .clone()
        .oneshot(get(&format!("/api/messages/{}", first.session_id)))
        .await
        .unwrap();
    let messages = body_json(resp).await;
    let messages = messages["messages"].as_array().unwrap();
    let roles: Vec<&str> = messages
        .iter()
        .map(|m| m["role"].as_str().unwrap())
        .collect();
    assert_eq!(roles, vec!["user", "assistant", "user", "assistant"]);
    assert_eq!(messages[0]["content"], "first question");
    assert_eq!(messages[2]["content"], "second question");
    assert!(messages[1]["created_at"].is_string());
}

#[tokio::test]
async fn test_blank_session_id_opens_new_session() {
    let app = create_router(make_state());

    let a = send_chat(&app, json!({"message": "one", "session_id": "   "})).await;
    let b = send_chat(&app, json!({"message": "two", "session_id": ""})).await;
    assert_ne!(a.session_id, b.session_id);

    let resp = app.oneshot(get("/api/sessions")).await.unwrap();
    let sessions = body_json(resp).await;
    assert_eq!(sessions["sessions"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_custom_title_for_new_session() {
    let app = create_router(make_state());
    send_chat(&app, json!({"message": "plan my week", "title": "Weekly plan"})).await;

    let resp = app.oneshot(get("/api/sessions")).await.unwrap();
    let sessions = body_json(resp).await;
    assert_eq!(sessions["sessions"][0]["title"], "Weekly plan");
    assert_eq!(sessions["sessions"][0]["mode"], "qa");
}

// =============================================================================
// Listing
// =============================================================================

#[tokio::test]
async fn test_sessions_limit_is_respected() {
    let app = create_router(make_state());
    for i in 0..4 {
        send_chat(&app, json!({"message": format!("msg {}", i)})).await;
    }

    let resp = app.clone().oneshot(get("/api/sessions?limit=2")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let sessions = body_json(resp).await;
    assert_eq!(sessions["sessions"].as_array().unwrap().len(), 2);

    // Zero is clamped up to one.
    let resp = app.oneshot(get("/api/sessions?limit=0")).await.unwrap();
    let sessions = body_json(resp).await;
    assert_eq!(sessions["sessions"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_messages_are_scoped_to_session() {
    let app = create_router(make_state());
    let a = send_chat(&app, json!({"message": "in a"})).await;
    send_chat(&app, json!({"message": "in b"})).await;

    let resp = app
        .oneshot(get(&format!("/api/messages/{}?limit=10", a.session_id)))
        .await
        .unwrap();
    let messages = body_json(resp).await;
    let messages = messages["messages"].as_array().unwrap();
    assert_eq!(messages.len(), 2);
    assert!(messages
        .iter()
        .all(|m| m["session_id"] == a.session_id.as_str()));
}

// =============================================================================
// Images and diagnostics
// =============================================================================

#[tokio::test]
async fn test_image_is_svg_with_prompt_title() {
    let app = create_router(make_state());
    let resp = app
        .clone()
        .oneshot(post_json("/api/image", json!({"prompt": "Flame & <glow>", "style": "neon"})))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = body_json(resp).await;
    let uri = body["image"].as_str().unwrap();
    let payload = uri.strip_prefix("data:image/svg+xml;base64,").unwrap();
    let svg = String::from_utf8(STANDARD.decode(payload).unwrap()).unwrap();
    assert!(svg.starts_with("<svg"));
    assert!(svg.contains("Flame &amp; &lt;glow&gt;"));
    assert!(svg.contains("Shahbaz AI · BlueFlame"));

    let resp = app.oneshot(get("/health")).await.unwrap();
    let health: HealthResponse = serde_json::from_value(body_json(resp).await).unwrap();
    assert_eq!(health.collections, vec!["imagerequest"]);
}

#[tokio::test]
async fn test_health_lists_collections_after_chat() {
    let app = create_router(make_state());
    send_chat(&app, json!({"message": "hello"})).await;

    let resp = app.oneshot(get("/test")).await.unwrap();
    let health: HealthResponse = serde_json::from_value(body_json(resp).await).unwrap();
    assert_eq!(health.database, "connected");
    assert_eq!(health.collections, vec!["chatmessage", "chatsession"]);
}

#[tokio::test]
async fn test_history_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("blueflame.db");

    let session_id = {
        let db = Arc::new(Database::new(&path).unwrap());
        let state = AppState::new(
            BlueflameConfig::default(),
            Arc::new(SqliteDocumentStore::new(db)),
        );
        let app = create_router(state);
        send_chat(&app, json!({"message": "remember me"})).await.session_id
    };

    let db = Arc::new(Database::new(&path).unwrap());
    let state = AppState::new(
        BlueflameConfig::default(),
        Arc::new(SqliteDocumentStore::new(db)),
    );
    let app = create_router(state);
    let resp = app
        .oneshot(get(&format!("/api/messages/{}", session_id)))
        .await
        .unwrap();
    let messages = body_json(resp).await;
    assert_eq!(messages["messages"][0]["content"], "remember me");
}
