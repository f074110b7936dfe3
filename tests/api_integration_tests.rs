//! Integration Tests for API Endpoints
//!
//! Tests full request/response cycles, including cache behaviour driven by
//! a manual clock.

use std::sync::Arc;

use album_cache::{
    api::create_router,
    cache::{CacheStore, ManualClock, DEFAULT_TTL},
    AppState,
};
use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

// == Helper Functions ==

fn create_test_app() -> (Router, Arc<ManualClock>) {
    let clock = Arc::new(ManualClock::new(0));
    let cache = CacheStore::with_clock(DEFAULT_TTL, clock.clone());
    (create_router(AppState::with_cache(cache)), clock)
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

fn album_body(title: &str, stock: i32) -> Value {
    json!({
        "title": title,
        "artistName": "Miles Davis",
        "genre": "jazz",
        "releaseYear": 1959,
        "stock": stock,
        "price": 11.5
    })
}

// == Album Endpoint Tests ==

#[tokio::test]
async fn test_create_album_success() {
    let (app, _) = create_test_app();

    let (status, json) = send(&app, "POST", "/api/v1/album", Some(album_body("Kind of Blue", 3))).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(json["albumId"], 1);
    assert_eq!(json["artistName"], "Miles Davis");
    assert_eq!(json["genre"], "JAZZ");
    assert!(json["createdAt"].is_string());
}

#[tokio::test]
async fn test_create_duplicate_album_conflict() {
    let (app, _) = create_test_app();

    send(&app, "POST", "/api/v1/album", Some(album_body("Kind of Blue", 3))).await;
    let (status, json) = send(&app, "POST", "/api/v1/album", Some(album_body("Kind of Blue", 9))).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert!(json["error"].as_str().unwrap().contains("already exists"));
}

#[tokio::test]
async fn test_create_album_invalid_genre() {
    let (app, _) = create_test_app();

    let mut body = album_body("Kind of Blue", 3);
    body["genre"] = json!("polka");
    let (status, json) = send(&app, "POST", "/api/v1/album", Some(body)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].as_str().unwrap().contains("Genre can be only"));
}

#[tokio::test]
async fn test_invalid_json_request() {
    let (app, _) = create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v1/album")
                .header("content-type", "application/json")
                .body(Body::from("not valid json"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert!(response.status().is_client_error());
}

#[tokio::test]
async fn test_get_album_and_list() {
    let (app, _) = create_test_app();
    send(&app, "POST", "/api/v1/album", Some(album_body("Kind of Blue", 3))).await;
    send(&app, "POST", "/api/v1/album", Some(album_body("Sketches of Spain", 1))).await;

    let (status, json) = send(&app, "GET", "/api/v1/album/2", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["title"], "Sketches of Spain");

    let (status, json) = send(&app, "GET", "/api/v1/album", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_update_then_get_returns_new_values() {
    let (app, _) = create_test_app();
    send(&app, "POST", "/api/v1/album", Some(album_body("Kind of Blue", 3))).await;
    send(&app, "GET", "/api/v1/album/1", None).await;

    let (status, json) = send(&app, "PUT", "/api/v1/album/1", Some(album_body("Kind of Blue", 0))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["stock"], 0);

    let (_, json) = send(&app, "GET", "/api/v1/album/1", None).await;
    assert_eq!(json["stock"], 0);
}

#[tokio::test]
async fn test_update_missing_album_not_found() {
    let (app, _) = create_test_app();

    let (status, _) = send(&app, "PUT", "/api/v1/album/7", Some(album_body("Ghost", 1))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_album() {
    let (app, _) = create_test_app();
    send(&app, "POST", "/api/v1/album", Some(album_body("Kind of Blue", 3))).await;

    let (status, _) = send(&app, "DELETE", "/api/v1/album/1", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = send(&app, "GET", "/api/v1/album/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, "DELETE", "/api/v1/album/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, state) = send(&app, "GET", "/api/v1/cache/state", None).await;
    assert!(state["entries"].as_array().unwrap().is_empty());
}

// == Artist Endpoint Tests ==

#[tokio::test]
async fn test_artist_endpoints() {
    let (app, _) = create_test_app();

    let (status, json) = send(&app, "POST", "/api/v1/artist", Some(json!({"artistName": "Sun Ra"}))).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(json["artistId"], 1);

    let (status, _) = send(&app, "POST", "/api/v1/artist", Some(json!({"artistName": "Sun Ra"}))).await;
    assert_eq!(status, StatusCode::CONFLICT);

    send(&app, "POST", "/api/v1/album", Some(album_body("Kind of Blue", 3))).await;

    let (status, json) = send(&app, "GET", "/api/v1/artist", None).await;
    assert_eq!(status, StatusCode::OK);
    let artists = json.as_array().unwrap();
    assert_eq!(artists.len(), 2);
    assert_eq!(artists[1]["artistName"], "Miles Davis");
    assert_eq!(artists[1]["albums"], json!(["Kind of Blue"]));

    let (status, _) = send(&app, "GET", "/api/v1/artist/9", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

// == Cache Behaviour Tests ==

#[tokio::test]
async fn test_idle_entry_swept_then_reloaded() {
    let (app, clock) = create_test_app();
    send(&app, "POST", "/api/v1/album", Some(album_body("Kind of Blue", 3))).await;

    clock.set(20_001);
    let (status, json) = send(&app, "POST", "/api/v1/cache/cleanup", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["removed"], 1);

    clock.set(20_002);
    let (status, json) = send(&app, "GET", "/api/v1/album/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["title"], "Kind of Blue");

    let (_, stats) = send(&app, "GET", "/api/v1/cache/stats", None).await;
    assert_eq!(stats["misses"], 1);
    assert_eq!(stats["expirations"], 1);
    assert_eq!(stats["total_entries"], 1);
}

#[tokio::test]
async fn test_read_extends_entry_life() {
    let (app, clock) = create_test_app();
    send(&app, "POST", "/api/v1/album", Some(album_body("Kind of Blue", 3))).await;

    clock.set(19_000);
    send(&app, "GET", "/api/v1/album/1", None).await;

    clock.set(20_001);
    let (_, json) = send(&app, "POST", "/api/v1/cache/cleanup", None).await;
    assert_eq!(json["removed"], 0);

    let (_, state) = send(&app, "GET", "/api/v1/cache/state", None).await;
    let entries = state["entries"].as_array().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["lastAccessed"], 19_000);
    assert_eq!(entries[0]["idleMs"], 1_001);

    let (_, stats) = send(&app, "GET", "/api/v1/cache/stats", None).await;
    assert_eq!(stats["hits"], 1);
    assert_eq!(stats["misses"], 0);
}

#[tokio::test]
async fn test_health_endpoint() {
    let (app, _) = create_test_app();

    let (status, json) = send(&app, "GET", "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "healthy");
}
