// tests/support/helpers.rs
use super::mocks::{FailingStore, InMemoryStore};
use axum::Router;
use axum::body::{self, Body};
use axum::http::{Method, Request, StatusCode, header::CONTENT_TYPE};
use serde_json::Value;
use std::sync::Arc;
use tower::util::ServiceExt as _;
use trivia_api::application::ports::util::SlugGenerator;
use trivia_api::application::services::ApplicationServices;
use trivia_api::infrastructure::util::DefaultSlugGenerator;
use trivia_api::presentation::http::{routes::build_router, state::HttpState};

pub fn build_test_state(store: &InMemoryStore) -> HttpState {
    let slugger: Arc<dyn SlugGenerator> = Arc::new(DefaultSlugGenerator);
    let services = Arc::new(ApplicationServices::new(
        Arc::new(store.clone()),
        Arc::new(store.clone()),
        Arc::new(store.clone()),
        slugger,
    ));
    HttpState { services }
}

/// Router over a fresh in-memory store; the store handle is returned so tests
/// can inspect what was persisted.
pub fn make_test_router() -> (Router, InMemoryStore) {
    let store = InMemoryStore::new();
    let router = build_router(build_test_state(&store));
    (router, store)
}

pub fn make_failing_router() -> Router {
    let services = Arc::new(ApplicationServices::new(
        Arc::new(FailingStore),
        Arc::new(FailingStore),
        Arc::new(FailingStore),
        Arc::new(DefaultSlugGenerator),
    ));
    build_router(HttpState { services })
}

#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub content_type: String,
    pub raw: Vec<u8>,
    /// `Value::Null` when the body is empty.
    pub json: Value,
}

impl TestResponse {
    pub fn error_message(&self) -> &str {
        self.json
            .get("error")
            .and_then(Value::as_str)
            .unwrap_or_default()
    }
}

pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> TestResponse {
    let builder = Request::builder().method(method).uri(uri);
    let req = match body {
        Some(json) => builder
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    send_request(app, req).await
}

pub async fn send_request(app: &Router, req: Request<Body>) -> TestResponse {
    let resp = app.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    let (parts, body_stream) = resp.into_parts();
    let raw = body::to_bytes(body_stream, 1024 * 1024)
        .await
        .expect("read body")
        .to_vec();
    let content_type = parts
        .headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();
    let json = if raw.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&raw).unwrap_or_else(|_| {
            panic!("expected JSON body, got {}", String::from_utf8_lossy(&raw))
        })
    };

    TestResponse {
        status,
        content_type,
        raw,
        json,
    }
}

pub async fn get(app: &Router, uri: &str) -> TestResponse {
    send(app, Method::GET, uri, None).await
}

pub async fn post(app: &Router, uri: &str, body: Value) -> TestResponse {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn patch(app: &Router, uri: &str, body: Value) -> TestResponse {
    send(app, Method::PATCH, uri, Some(body)).await
}

pub async fn delete(app: &Router, uri: &str) -> TestResponse {
    send(app, Method::DELETE, uri, None).await
}

/// Assert that a response is an `{ "error": ... }` JSON body with the expected status.
pub fn assert_error_response(resp: &TestResponse, expected_status: StatusCode) {
    assert_eq!(
        resp.status,
        expected_status,
        "unexpected status, body: {}",
        String::from_utf8_lossy(&resp.raw)
    );
    assert!(
        resp.content_type.starts_with("application/json"),
        "unexpected content-type: {}",
        resp.content_type
    );
    assert!(
        !resp.error_message().is_empty(),
        "expected non-empty error field, got {}",
        resp.json
    );
}

/// Creates a category and returns its id.
pub async fn seed_category(app: &Router, name: &str) -> i64 {
    let resp = post(app, "/category", serde_json::json!({ "name": name })).await;
    assert_eq!(resp.status, StatusCode::CREATED, "seed category: {}", resp.json);
    resp.json["id"].as_i64().expect("category id")
}

/// Creates a question in the given category and returns its id.
pub async fn seed_question(app: &Router, category_id: i64, text: &str) -> i64 {
    let resp = post(
        app,
        "/question",
        serde_json::json!({ "question": text, "categoryId": category_id }),
    )
    .await;
    assert_eq!(resp.status, StatusCode::CREATED, "seed question: {}", resp.json);
    resp.json["id"].as_i64().expect("question id")
}

/// Creates an answer to the given question and returns its id.
pub async fn seed_answer(app: &Router, question_id: i64, text: &str) -> i64 {
    let resp = post(
        app,
        &format!("/questions/{question_id}/answers"),
        serde_json::json!({ "text": text }),
    )
    .await;
    assert_eq!(resp.status, StatusCode::CREATED, "seed answer: {}", resp.json);
    resp.json["id"].as_i64().expect("answer id")
}
