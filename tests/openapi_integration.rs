// tests/openapi_integration.rs
use axum::http::StatusCode;
use publishing_core::presentation::http::openapi::{ApiDoc, docs_router};
use tower::ServiceExt;
use utoipa::OpenApi;

mod support;

#[tokio::test]
async fn openapi_json_lists_every_resource() {
    let app = docs_router();
    let resp = app
        .oneshot(support::empty_request("GET", "/openapi.json"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let doc = support::json_body(resp).await;
    let paths = doc["paths"].as_object().unwrap();
    for path in [
        "/health",
        "/api/v1/posts",
        "/api/v1/posts/{id}",
        "/api/v1/posts/{id}/status",
        "/api/v1/posts/by-slug/{slug}",
        "/api/v1/posts/{id}/terms",
        "/api/v1/courses",
        "/api/v1/courses/{id}/reviews",
        "/api/v1/reviews/{id}",
        "/api/v1/instructors",
        "/api/v1/instructors/{id}",
        "/api/v1/categories",
        "/api/v1/tags/by-slug/{slug}",
        "/api/v1/course-categories/{id}",
    ] {
        assert!(paths.contains_key(path), "missing path {path}");
    }
}

#[test]
fn document_declares_resource_tags() {
    let doc = ApiDoc::openapi();
    let tags: Vec<String> = doc
        .tags
        .unwrap_or_default()
        .into_iter()
        .map(|tag| tag.name)
        .collect();
    for expected in [
        "Posts",
        "Courses",
        "Reviews",
        "Instructors",
        "Taxonomy",
        "System",
    ] {
        assert!(tags.iter().any(|t| t == expected), "missing tag {expected}");
    }
}

#[test]
fn rating_schema_is_a_decimal_string() {
    let doc = serde_json::to_value(ApiDoc::openapi()).unwrap();
    let rating = &doc["components"]["schemas"]["InstructorRatingDto"]["properties"]["rating"];
    assert_eq!(rating["type"], "string");
}
