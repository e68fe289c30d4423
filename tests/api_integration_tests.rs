//! Integration Tests for API Endpoints
//!
//! Tests the full request/response cycle for each endpoint.

use axum::{
    body::Body,
    http::{Request, StatusCode},
    response::Response,
    Router,
};
use serde_json::{json, Value};
use student_service::{api::create_router, cache::MemoryCache, AppState, Config};
use tower::ServiceExt;

// == Helper Functions ==

fn create_test_app() -> Router {
    create_router(AppState::from_config(
        &Config::default(),
        MemoryCache::new(100),
    ))
}

async fn body_to_json(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> Response {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.clone().oneshot(request).await.unwrap()
}

fn cache_header(response: &Response) -> &str {
    response.headers()["x-cache"].to_str().unwrap()
}

// == Create ==

#[tokio::test]
async fn test_create_then_get() {
    let app = create_test_app();

    let response = send(
        &app,
        "POST",
        "/students",
        Some(json!({"name": "Alice", "score": 90.5, "category": "CS"})),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body_to_json(response).await;
    assert_eq!(
        created,
        json!({"id": 1, "name": "Alice", "score": 90.5, "category": "CS"})
    );

    let response = send(&app, "GET", "/students/1", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(cache_header(&response), "miss");
    assert_eq!(body_to_json(response).await, created);

    let response = send(&app, "GET", "/students/1", None).await;
    assert_eq!(cache_header(&response), "hit");
    assert_eq!(body_to_json(response).await, created);
}

#[tokio::test]
async fn test_create_empty_name_is_bad_request() {
    let app = create_test_app();

    let response = send(
        &app,
        "POST",
        "/students",
        Some(json!({"name": "", "score": 75.0, "category": "ME"})),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_to_json(response).await;
    assert!(json.get("error").is_some());
}

#[tokio::test]
async fn test_create_without_body_is_bad_request() {
    let app = create_test_app();

    let response = send(&app, "POST", "/students", None).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/students")
                .header("content-type", "application/json")
                .body(Body::from(r#"{"name": "#))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // Nothing was stored
    let response = send(&app, "GET", "/students", None).await;
    assert_eq!(body_to_json(response).await, json!([]));
}

// == List ==

#[tokio::test]
async fn test_list_reflects_create() {
    let app = create_test_app();

    let response = send(&app, "GET", "/students", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(cache_header(&response), "miss");
    assert_eq!(body_to_json(response).await, json!([]));

    let response = send(&app, "GET", "/students", None).await;
    assert_eq!(cache_header(&response), "hit");

    send(
        &app,
        "POST",
        "/students",
        Some(json!({"name": "Bob", "score": 85.0, "category": "EE"})),
    )
    .await;

    let response = send(&app, "GET", "/students", None).await;
    assert_eq!(cache_header(&response), "miss");
    let listing = body_to_json(response).await;
    assert_eq!(listing.as_array().unwrap().len(), 1);
    assert_eq!(listing[0]["name"], "Bob");
}

// == Update ==

#[tokio::test]
async fn test_update_existing_student() {
    let app = create_test_app();

    send(
        &app,
        "POST",
        "/students",
        Some(json!({"name": "Alice", "score": 90.5, "category": "CS"})),
    )
    .await;
    // Warm the cache with the pre-update value
    send(&app, "GET", "/students/1", None).await;

    let response = send(
        &app,
        "PUT",
        "/students/1",
        Some(json!({"name": "Alice Smith", "score": 92.0, "category": "CS"})),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let expected = json!({"id": 1, "name": "Alice Smith", "score": 92.0, "category": "CS"});
    assert_eq!(body_to_json(response).await, expected);

    let response = send(&app, "GET", "/students/1", None).await;
    assert_eq!(body_to_json(response).await, expected);
}

#[tokio::test]
async fn test_update_unknown_student() {
    let app = create_test_app();

    let response = send(
        &app,
        "PUT",
        "/students/99",
        Some(json!({"name": "NonExistent", "score": 88.0, "category": "ME"})),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// == Delete ==

#[tokio::test]
async fn test_delete_answers_gone() {
    let app = create_test_app();

    send(
        &app,
        "POST",
        "/students",
        Some(json!({"name": "Alice", "score": 90.5, "category": "CS"})),
    )
    .await;
    send(&app, "GET", "/students/1", None).await;

    let response = send(&app, "DELETE", "/students/1", None).await;
    assert_eq!(response.status(), StatusCode::GONE);
    assert_eq!(body_to_json(response).await["name"], "Alice");

    let response = send(&app, "GET", "/students/1", None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = send(&app, "DELETE", "/students/1", None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_non_numeric_id_is_rejected() {
    let app = create_test_app();

    let response = send(&app, "GET", "/students/abc", None).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// == Stats and Health ==

#[tokio::test]
async fn test_stats_endpoint_counts_cache_lookups() {
    let app = create_test_app();

    send(
        &app,
        "POST",
        "/students",
        Some(json!({"name": "Alice", "score": 90.5, "category": "CS"})),
    )
    .await;
    send(&app, "GET", "/students/1", None).await; // miss
    send(&app, "GET", "/students/1", None).await; // hit

    let response = send(&app, "GET", "/stats", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response).await;

    assert_eq!(json["hits"].as_u64().unwrap(), 1);
    assert_eq!(json["misses"].as_u64().unwrap(), 1);
    assert_eq!(json["total_entries"].as_u64().unwrap(), 1);
    assert!(json.get("hit_rate").is_some());
}

#[tokio::test]
async fn test_health_endpoint() {
    let app = create_test_app();

    let response = send(&app, "GET", "/health", None).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response).await;
    assert_eq!(json["status"].as_str().unwrap(), "healthy");
    assert!(json.get("timestamp").is_some());
}
