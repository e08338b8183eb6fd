//! API integration tests

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    response::Response,
    Router,
};
use reqwest::Client;
use serde_json::{json, Value};
use tower::ServiceExt;

use bookshelf_server::{
    api::create_router,
    config::{AppConfig, IdStrategy},
    AppState,
};

const BASE_URL: &str = "http://localhost:8080";

fn app() -> Router {
    create_router(AppState::new(AppConfig::default()))
}

fn app_with(configure: impl FnOnce(&mut AppConfig)) -> Router {
    let mut config = AppConfig::default();
    configure(&mut config);
    create_router(AppState::new(config))
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> Response {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(value) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(value.to_string())
        }
        None => Body::empty(),
    };

    app.clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap()
}

async fn json_body(response: Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn titles(body: &Value) -> Vec<String> {
    body.as_array()
        .unwrap()
        .iter()
        .map(|b| b["title"].as_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
async fn test_root_greeting() {
    let response = send(&app(), Method::GET, "/", None).await;
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert_eq!(&bytes[..], b"Hello World!");
}

#[tokio::test]
async fn test_health_and_ready() {
    let app = app();

    let response = send(&app, Method::GET, "/health", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await["status"], "healthy");

    let response = send(&app, Method::GET, "/ready", None).await;
    let body = json_body(response).await;
    assert_eq!(body["status"], "ready");
    assert_eq!(body["books"], 5);
}

#[tokio::test]
async fn test_list_books_returns_seed() {
    let response = send(&app(), Method::GET, "/books", None).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    assert_eq!(
        titles(&body),
        vec!["Testing Dot", "Learn Linq", "Generics", "Testing the Mic", "Drop the Dot"]
    );
    assert_eq!(body[0], json!({"id": 1, "title": "Testing Dot", "author": "Carson Alexander"}));
}

#[tokio::test]
async fn test_get_book_by_id() {
    let app = app();

    let response = send(&app, Method::GET, "/books/id/3", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await["title"], "Generics");

    // alias
    let response = send(&app, Method::GET, "/book/3", None).await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = send(&app, Method::GET, "/books/id/99", None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(json_body(response).await["error"], "NoSuchBook");

    let response = send(&app, Method::GET, "/books/id/not-a-number", None).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_books_by_author() {
    let app = app();

    let response = send(&app, Method::GET, "/books/author/Van%20Li", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(titles(&json_body(response).await), vec!["Drop the Dot"]);

    let response = send(&app, Method::GET, "/books/author/van%20li", None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_books_by_title() {
    let app = app();

    let response = send(&app, Method::GET, "/books/title/dot", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(titles(&json_body(response).await), vec!["Testing Dot", "Drop the Dot"]);

    let response = send(&app, Method::GET, "/books/title/cobol", None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_empty_filter_returns_empty_list_when_configured() {
    let app = app_with(|c| c.books.empty_filter_is_not_found = false);

    let response = send(&app, Method::GET, "/books/title/cobol", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await, json!([]));
}

#[tokio::test]
async fn test_create_book() {
    let app = app();

    let response = send(
        &app,
        Method::POST,
        "/book",
        Some(json!({"id": 1, "title": "Programming Rust", "author": "Jim Blandy"})),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(response.headers()[header::LOCATION], "/book/6");

    let body = json_body(response).await;
    assert_eq!(body, json!({"id": 6, "title": "Programming Rust", "author": "Jim Blandy"}));

    let response = send(&app, Method::GET, "/book/6", None).await;
    assert_eq!(json_body(response).await, body);
}

#[tokio::test]
async fn test_create_duplicate_title_is_bad_request() {
    let app = app();

    let response = send(
        &app,
        Method::POST,
        "/book",
        Some(json!({"title": "Learn Linq", "author": "Someone"})),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(json_body(response).await["error"], "Duplicate");

    let response = send(&app, Method::GET, "/books", None).await;
    assert_eq!(json_body(response).await.as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn test_update_book() {
    let app = app();

    let response = send(
        &app,
        Method::PUT,
        "/book/2",
        Some(json!({"id": 2, "title": "Learn LINQ", "author": "M. Alonso"})),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        json_body(response).await,
        json!({"id": 2, "title": "Learn LINQ", "author": "M. Alonso"})
    );
}

#[tokio::test]
async fn test_update_errors() {
    let app = app();

    let response = send(
        &app,
        Method::PUT,
        "/book/2",
        Some(json!({"id": 3, "title": "Changed", "author": "Changed"})),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(json_body(response).await["error"], "IdentifierMismatch");

    let response = send(
        &app,
        Method::PUT,
        "/book/42",
        Some(json!({"id": 42, "title": "Ghost", "author": "Nobody"})),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = send(&app, Method::GET, "/book/2", None).await;
    assert_eq!(json_body(response).await["title"], "Learn Linq");
}

#[tokio::test]
async fn test_delete_book() {
    let app = app();

    let response = send(&app, Method::DELETE, "/book/4", None).await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = send(&app, Method::GET, "/books/id/4", None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = send(&app, Method::DELETE, "/book/4", None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_uuid_strategy() {
    let app = app_with(|c| c.books.id_strategy = IdStrategy::Uuid);

    let response = send(
        &app,
        Method::POST,
        "/book",
        Some(json!({"title": "Rust Atomics and Locks", "author": "Mara Bos"})),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let body = json_body(response).await;
    let id = body["id"].as_str().unwrap().to_string();
    assert!(uuid::Uuid::parse_str(&id).is_ok());

    let response = send(&app, Method::GET, &format!("/books/id/{}", id), None).await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = send(&app, Method::GET, "/books/id/1", None).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_swagger_docs_toggle() {
    let response = send(&app(), Method::GET, "/api-docs/openapi.json", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    let doc = json_body(response).await;
    assert!(doc["paths"]["/books"].is_object());

    let app = app_with(|c| c.docs.enabled = false);
    let response = send(&app, Method::GET, "/api-docs/openapi.json", None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore] // Run with: cargo test -- --ignored
async fn test_live_health_check() {
    let client = Client::new();

    let response = client
        .get(format!("{}/health", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
#[ignore]
async fn test_live_create_and_delete_book() {
    let client = Client::new();

    let response = client
        .post(format!("{}/book", BASE_URL))
        .json(&json!({
            "title": format!("Live test {}", uuid::Uuid::new_v4()),
            "author": "Integration"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 201);
    let location = response
        .headers()
        .get("location")
        .and_then(|v| v.to_str().ok())
        .expect("No location header")
        .to_string();

    let response = client
        .delete(format!("{}{}", BASE_URL, location))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 200);
}
