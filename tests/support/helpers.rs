// tests/support/helpers.rs
use super::mocks::{
    FixedClock, InMemoryContentRepo, InMemoryInstructorRepo, InMemoryReviewRepo, InMemoryTermRepo,
};
use axum::body::{self, Body};
use axum::http::{Request, StatusCode, header};
use publishing_core::application::ports::time::Clock;
use publishing_core::application::services::ApplicationServices;
use publishing_core::domain::content::ContentWriteRepository;
use publishing_core::presentation::http::{routes::build_router, state::HttpState};
use serde_json::Value;
use std::sync::Arc;

/// Services wired to in-memory stores, with handles on the stores for assertions.
pub struct TestContext {
    pub services: Arc<ApplicationServices>,
    pub content: Arc<InMemoryContentRepo>,
    pub reviews: Arc<InMemoryReviewRepo>,
    pub instructors: Arc<InMemoryInstructorRepo>,
    pub terms: Arc<InMemoryTermRepo>,
}

pub fn build_context() -> TestContext {
    build_context_with(
        |content| -> Arc<dyn ContentWriteRepository> { content },
        Arc::new(FixedClock),
        2,
    )
}

/// Like [`build_context`] but lets the caller wrap the content write side and
/// pick the clock and slug attempt budget.
pub fn build_context_with<F>(
    wrap_writes: F,
    clock: Arc<dyn Clock>,
    slug_attempts: u32,
) -> TestContext
where
    F: FnOnce(Arc<InMemoryContentRepo>) -> Arc<dyn ContentWriteRepository>,
{
    let content = Arc::new(InMemoryContentRepo::new());
    let reviews = Arc::new(InMemoryReviewRepo::new(Arc::clone(&content)));
    let instructors = Arc::new(InMemoryInstructorRepo::new());
    let terms = Arc::new(InMemoryTermRepo::new(Arc::clone(&content)));

    let services = Arc::new(ApplicationServices::new(
        wrap_writes(Arc::clone(&content)),
        content.clone(),
        reviews.clone(),
        instructors.clone(),
        terms.clone(),
        clock,
        slug_attempts,
    ));

    TestContext {
        services,
        content,
        reviews,
        instructors,
        terms,
    }
}

pub fn build_test_state() -> HttpState {
    HttpState {
        services: build_context().services,
    }
}

pub fn make_test_router() -> axum::Router {
    build_router(build_test_state())
}

pub fn json_request(method: &str, uri: &str, payload: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(payload.to_string()))
        .unwrap()
}

pub fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub async fn json_body(resp: axum::response::Response) -> Value {
    let (parts, body_stream) = resp.into_parts();
    let bytes = body::to_bytes(body_stream, 1024 * 1024)
        .await
        .expect("read body");
    let ct = parts
        .headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    assert!(
        ct.starts_with("application/json"),
        "unexpected content-type: {ct}"
    );
    serde_json::from_slice(&bytes).expect("expected valid json body")
}

/// Assert that a response is an ErrorResponse JSON with the expected status and error string.
pub async fn assert_error_response(
    resp: axum::response::Response,
    expected_status: StatusCode,
    expected_error: &str,
) -> Value {
    assert_eq!(resp.status(), expected_status);
    let json = json_body(resp).await;
    let err_field = json.get("error").and_then(Value::as_str).unwrap_or("");
    let msg_field = json.get("message").and_then(Value::as_str).unwrap_or("");
    assert_eq!(err_field, expected_error, "unexpected error field: {err_field}");
    assert!(
        !msg_field.is_empty(),
        "expected non-empty message field in ErrorResponse"
    );
    json
}
