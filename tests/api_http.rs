// tests/api_http.rs
//
// HTTP-level tests for the public Router without opening sockets.
// We exercise the router directly via tower::ServiceExt::oneshot.
//
// Covered:
// - GET /health
// - POST /analyze (wire contract + length gate)
// - POST /batch (arity, order, first offending index)
// - GET /debug/last, /debug/history, /debug/rolling

use axum::{
    body::{self, Body},
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value as Json};
use tower::ServiceExt as _; // for `oneshot`

use article_insight::api::{self, AppState};

const BODY_LIMIT: usize = 1024 * 1024; // 1MB, safe for tests

const BUSINESS_TEXT: &str = "The stock market rallied as investors cheered strong quarterly \
     earnings. Banks reported record profit and revenue growth across the industry.";

const SPORTS_TEXT: &str = "The home team won the championship game in the final seconds. The \
     coach praised every player, and the stadium crowd celebrated the tournament victory for hours.";

/// Build the same Router the binary serves (default 100-char gate).
fn test_router() -> Router {
    api::router(AppState::from_env())
}

async fn send_get(app: &Router, uri: &str) -> (StatusCode, Json) {
    let req = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .expect("build GET request");
    let resp = app.clone().oneshot(req).await.expect("oneshot GET");
    let status = resp.status();
    let bytes = body::to_bytes(resp.into_body(), BODY_LIMIT)
        .await
        .expect("read body");
    let v = serde_json::from_slice(&bytes).unwrap_or(Json::Null);
    (status, v)
}

async fn send_post(app: &Router, uri: &str, payload: &Json) -> (StatusCode, Json) {
    let req = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(payload.to_string()))
        .expect("build POST request");
    let resp = app.clone().oneshot(req).await.expect("oneshot POST");
    let status = resp.status();
    let bytes = body::to_bytes(resp.into_body(), BODY_LIMIT)
        .await
        .expect("read body");
    let v = serde_json::from_slice(&bytes).expect("parse response json");
    (status, v)
}

#[tokio::test]
async fn health_returns_200_and_ok_body() {
    let app = test_router();

    let req = Request::builder()
        .method("GET")
        .uri("/health")
        .body(Body::empty())
        .expect("build GET /health");
    let resp = app.oneshot(req).await.expect("oneshot /health");
    assert_eq!(resp.status(), StatusCode::OK);

    let bytes = body::to_bytes(resp.into_body(), BODY_LIMIT)
        .await
        .expect("read body");
    assert_eq!(String::from_utf8(bytes.to_vec()).expect("utf8").trim(), "ok");
}

#[tokio::test]
async fn analyze_returns_the_wire_contract() {
    let app = test_router();

    let (status, v) = send_post(&app, "/analyze", &json!({ "text": BUSINESS_TEXT })).await;
    assert_eq!(status, StatusCode::OK);

    // Contract checks for UI consumers: camelCase names, full score map.
    assert_eq!(v["category"]["name"], json!("business"));
    let confidence = v["category"]["confidence"].as_u64().expect("confidence");
    assert!((50..=95).contains(&confidence), "confidence {confidence}");
    let scores = v["category"]["allScores"].as_object().expect("allScores");
    assert_eq!(scores.len(), 7, "one share per keyword category");
    assert!(!scores.contains_key("general"));

    assert!(v["summary"].as_str().is_some_and(|s| !s.is_empty()));

    assert_eq!(v["sentiment"]["label"], json!("positive"));
    assert!(v["sentiment"]["score"].as_u64().expect("score") > 50);
    assert!(v["sentiment"]["positiveWords"].as_u64().expect("positiveWords") >= 1);
    assert_eq!(v["sentiment"]["negativeWords"], json!(0));

    assert_eq!(v["stats"]["wordCount"], json!(20));
    assert_eq!(v["stats"]["sentenceCount"], json!(2));
    assert_eq!(v["stats"]["avgWordsPerSentence"], json!(10));
}

#[tokio::test]
async fn analyze_rejects_short_text_with_422() {
    let app = test_router();

    let (status, v) = send_post(&app, "/analyze", &json!({ "text": "Way too short to analyze." }))
        .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    let error = v["error"].as_str().expect("error message");
    assert!(error.contains("minimum is 100"), "error was: {error}");
}

#[tokio::test]
async fn the_gate_is_configurable_per_state() {
    let app = api::router(AppState::with_min_chars(30));

    // 29 chars: rejected
    let (status, v) = send_post(&app, "/analyze", &json!({ "text": "tiny sample text under thirty" }))
        .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(v["error"].as_str().expect("error").contains("minimum is 30"));

    // 31 chars: analyzed
    let (status, v) = send_post(&app, "/analyze", &json!({ "text": "a tiny sample text over thirty." }))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert!(v["category"]["name"].is_string());
}

#[tokio::test]
async fn batch_analyzes_each_item_in_order() {
    let app = test_router();

    let items = json!([{ "text": BUSINESS_TEXT }, { "text": SPORTS_TEXT }]);
    let (status, v) = send_post(&app, "/batch", &items).await;
    assert_eq!(status, StatusCode::OK);

    let arr = v.as_array().expect("batch response must be an array");
    assert_eq!(arr.len(), 2, "batch arity must match input");
    assert_eq!(arr[0]["category"]["name"], json!("business"));
    assert_eq!(arr[1]["category"]["name"], json!("sports"));
}

#[tokio::test]
async fn batch_rejects_naming_the_first_offending_index() {
    let app = test_router();

    let items = json!([{ "text": BUSINESS_TEXT }, { "text": "too short" }]);
    let (status, v) = send_post(&app, "/batch", &items).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    let error = v["error"].as_str().expect("error message");
    assert!(error.contains("index 1"), "error was: {error}");
}

#[tokio::test]
async fn debug_routes_expose_recent_analyses() {
    let app = test_router();

    // Fresh state: nothing recorded yet.
    let (status, v) = send_get(&app, "/debug/last").await;
    assert_eq!(status, StatusCode::OK);
    assert!(v.is_null(), "fresh /debug/last should be null");

    let (status, _) = send_post(&app, "/analyze", &json!({ "text": BUSINESS_TEXT })).await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = send_post(&app, "/analyze", &json!({ "text": SPORTS_TEXT })).await;
    assert_eq!(status, StatusCode::OK);

    // Last entry reflects the most recent analysis; text shows up only as an id.
    let (_, last) = send_get(&app, "/debug/last").await;
    assert_eq!(last["category"], json!("sports"));
    let id = last["id"].as_str().expect("anon id");
    assert_eq!(id.len(), 12);
    assert!(id.chars().all(|c| c.is_ascii_hexdigit()));

    // History keeps insertion order, oldest first, with a working limit.
    let (_, history) = send_get(&app, "/debug/history").await;
    let rows = history.as_array().expect("history array");
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["category"], json!("business"));
    assert_eq!(rows[1]["category"], json!("sports"));

    let (_, limited) = send_get(&app, "/debug/history?limit=1").await;
    assert_eq!(limited.as_array().expect("limited history").len(), 1);

    // Rolling aggregates cover both samples.
    let (_, rolling) = send_get(&app, "/debug/rolling").await;
    assert_eq!(rolling["count"], json!(2));
    assert_eq!(rolling["window_secs"], json!(86_400));
    let avg_sentiment = rolling["avg_sentiment"].as_f64().expect("avg_sentiment");
    let avg_confidence = rolling["avg_confidence"].as_f64().expect("avg_confidence");
    assert!((avg_sentiment - 75.0).abs() < 1e-6, "avg_sentiment {avg_sentiment}");
    assert!((avg_confidence - 95.0).abs() < 1e-6, "avg_confidence {avg_confidence}");
}
