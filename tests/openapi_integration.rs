use axum::body::{self, Body};
use axum::http::{Method, Request, StatusCode, header};
use serde_json::Value;
use trivia_api::presentation::http::openapi::{docs_router, write_openapi_snapshot};
use tower::ServiceExt; // for oneshot

#[tokio::test]
async fn docs_router_get_openapi_json_returns_document() {
    let app = docs_router();

    let req = Request::builder()
        .method(Method::GET)
        .uri("/api-docs/openapi.json")
        .body(Body::empty())
        .unwrap();

    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let content_type = resp
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(content_type.starts_with("application/json"));

    let raw = body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let doc: Value = serde_json::from_slice(&raw).unwrap();
    assert_eq!(doc["info"]["title"], "Trivia API");
    assert!(doc["paths"]["/category"]["post"].is_object());
}

#[test]
fn snapshot_is_written_as_pretty_json() {
    let dir = std::env::temp_dir().join(format!("trivia-openapi-{}", std::process::id()));
    let path = dir.join("nested").join("openapi.json");

    write_openapi_snapshot(&path).unwrap();

    let contents = std::fs::read_to_string(&path).unwrap();
    assert!(contents.contains('\n'));
    let doc: Value = serde_json::from_str(&contents).unwrap();
    assert!(doc["components"]["schemas"]["AnswerDto"].is_object());

    std::fs::remove_dir_all(&dir).unwrap();
}
