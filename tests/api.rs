use axum::body::Body;
use axum::http::StatusCode;
use browseease::api::{build_router, AppState};
use browseease::catalog::FixtureCatalog;
use browseease::notify::MemoryNotifier;
use browseease::sequencer::{Pacing, SearchSequencer};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

fn create_test_state() -> AppState {
    let notifications = MemoryNotifier::new();
    let sequencer = SearchSequencer::new(
        Arc::new(FixtureCatalog::builtin()),
        Arc::new(notifications.clone()),
        Pacing::default(),
    );
    AppState::new(sequencer, notifications)
}

fn app(state: &AppState) -> axum::Router {
    build_router(state.clone())
}

fn make_request(method: &str, uri: &str, body: Option<Value>) -> axum::http::Request<Body> {
    let builder = axum::http::Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json");

    match body {
        Some(b) => builder.body(Body::from(serde_json::to_string(&b).unwrap())).unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

async fn response_json(response: axum::http::Response<Body>) -> Value {
    let (parts, body) = response.into_parts();
    let bytes = body.collect().await.unwrap().to_bytes();
    if bytes.is_empty() {
        panic!("Empty response body. Status: {}, Headers: {:?}", parts.status, parts.headers);
    }
    serde_json::from_slice(&bytes)
        .unwrap_or_else(|e| panic!("JSON parse error: {}. Body: {:?}", e, String::from_utf8_lossy(&bytes)))
}

async fn get(state: &AppState, uri: &str) -> Value {
    let response = app(state).oneshot(make_request("GET", uri, None)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    response_json(response).await
}

async fn post_search(state: &AppState, query: &str) -> (StatusCode, Value) {
    let req = make_request("POST", "/api/search", Some(json!({ "query": query })));
    let response = app(state).oneshot(req).await.unwrap();
    let status = response.status();
    (status, response_json(response).await)
}

#[tokio::test]
async fn test_health_endpoint() {
    let state = create_test_state();
    let body = get(&state, "/api/health").await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "browseease");
}

#[tokio::test(start_paused = true)]
async fn test_idle_snapshot() {
    let state = create_test_state();
    let body = get(&state, "/api/search").await;
    assert_eq!(body["status"], "idle");
    assert_eq!(body["progress_percent"], 0);
    assert_eq!(body["events"].as_array().unwrap().len(), 0);
    assert!(body["summary"].is_null());
}

#[tokio::test(start_paused = true)]
async fn test_start_search_accepted() {
    let state = create_test_state();
    let (status, body) = post_search(&state, "gaming laptop").await;
    assert_eq!(status, StatusCode::ACCEPTED);
    assert_eq!(body["accepted"], true);
    assert_eq!(body["status"], "running");
    assert_eq!(body["query"], "gaming laptop");
    assert!(body["run_id"].is_string());
    assert!(body.get("reason").is_none());
}

#[tokio::test(start_paused = true)]
async fn test_empty_query_not_accepted() {
    let state = create_test_state();
    let (status, body) = post_search(&state, "   ").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["accepted"], false);
    assert_eq!(body["reason"], "empty_query");
    assert_eq!(body["status"], "idle");
}

#[tokio::test(start_paused = true)]
async fn test_start_while_running_not_accepted() {
    let state = create_test_state();
    post_search(&state, "wireless earbuds").await;

    let (status, body) = post_search(&state, "4K TV").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["accepted"], false);
    assert_eq!(body["reason"], "already_running");
    assert_eq!(body["query"], "wireless earbuds");
}

#[tokio::test(start_paused = true)]
async fn test_full_run_over_http() {
    let state = create_test_state();
    post_search(&state, "gaming laptop").await;
    state.sequencer.wait().await;

    let body = get(&state, "/api/search").await;
    assert_eq!(body["status"], "completed");
    assert_eq!(body["progress_percent"], 100);
    assert_eq!(body["events"][0]["message"], "Starting search for: \"gaming laptop\"");
    assert_eq!(body["events"][0]["kind"], "info");

    let results = get(&state, "/api/search/results").await;
    assert_eq!(results["total"], 5);
    assert_eq!(results["results"][0]["isTopPick"], true);

    let summary = get(&state, "/api/search/summary").await;
    assert!(!summary["summary"]["recommendation"].as_str().unwrap().is_empty());
    assert_eq!(summary["summary"]["priceRange"]["min"], "₹19,999");

    let notifications = get(&state, "/api/notifications").await;
    assert_eq!(notifications["total"], 1);
    assert_eq!(notifications["notifications"][0]["title"], "Search Complete!");
}

#[tokio::test(start_paused = true)]
async fn test_events_since() {
    let state = create_test_state();
    post_search(&state, "phones").await;
    state.sequencer.wait().await;

    let body = get(&state, "/api/search/events?since=7").await;
    assert_eq!(body["total"], 10);
    let events = body["events"].as_array().unwrap();
    assert_eq!(events.len(), 3);
    assert_eq!(events[0]["message"], "Filtering top results");

    let past_end = get(&state, "/api/search/events?since=50").await;
    assert_eq!(past_end["events"].as_array().unwrap().len(), 0);
}

#[tokio::test(start_paused = true)]
async fn test_summary_null_until_revealed() {
    let state = create_test_state();
    post_search(&state, "monitor").await;
    let body = get(&state, "/api/search/summary").await;
    assert!(body["summary"].is_null());
}

#[tokio::test]
async fn test_malformed_search_body_is_json_error() {
    let state = create_test_state();

    let req = axum::http::Request::builder()
        .method("POST")
        .uri("/api/search")
        .header("content-type", "application/json")
        .body(Body::from("not json"))
        .unwrap();
    let response = app(&state).oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = response_json(response).await;
    assert!(body["error"].as_str().unwrap().contains("Invalid search request"));

    let req = make_request("POST", "/api/search", Some(json!({ "q": "phones" })));
    let response = app(&state).oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(response_json(response).await["error"].is_string());

    let body = get(&state, "/api/search").await;
    assert_eq!(body["status"], "idle");
}
