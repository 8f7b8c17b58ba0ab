// tests/e2e_http.rs
use axum::http::StatusCode;
use serde_json::{Value, json};
use tower::util::ServiceExt as _;

mod support;

use support::{COURSE_DESCRIPTION, POST_BODY, empty_request, json_body, json_request};

async fn send(app: &axum::Router, req: axum::http::Request<axum::body::Body>) -> (StatusCode, Value) {
    let resp = app.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    (status, json_body(resp).await)
}

#[tokio::test]
async fn health_reports_ok() {
    let app = support::make_test_router();
    let (status, body) = send(&app, empty_request("GET", "/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");

    let direct = publishing_core::presentation::http::routes::health().await;
    assert_eq!(direct.0.status, "ok");
}

#[tokio::test]
async fn post_lifecycle_over_http() {
    let app = support::make_test_router();

    let (status, created) = send(
        &app,
        json_request(
            "POST",
            "/api/v1/posts",
            &json!({ "title": "Hello World", "body": POST_BODY, "owner_id": 1 }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["slug"], "hello-world");
    assert_eq!(created["status"], "draft");
    assert!(created["published_at"].is_null());
    let id = created["id"].as_i64().unwrap();

    let (status, _) = send(&app, empty_request("GET", "/api/v1/posts/by-slug/hello-world")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, draft) = send(&app, empty_request("GET", &format!("/api/v1/posts/{id}"))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(draft["status"], "draft");

    let (status, published) = send(
        &app,
        json_request(
            "POST",
            &format!("/api/v1/posts/{id}/status"),
            &json!({ "status": "published" }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(published["status"], "published");
    assert_eq!(published["published_at"], "2024-01-01T00:00:00Z");

    let (status, retitled) = send(
        &app,
        json_request(
            "PATCH",
            &format!("/api/v1/posts/{id}"),
            &json!({ "title": "Hello Again World" }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(retitled["title"], "Hello Again World");
    assert_eq!(retitled["slug"], "hello-world");

    let (status, by_slug) =
        send(&app, empty_request("GET", "/api/v1/posts/by-slug/hello-world")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(by_slug["id"], id);

    let (status, listed) = send(&app, empty_request("GET", "/api/v1/posts?q=again")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed.as_array().unwrap().len(), 1);

    let (status, deleted) =
        send(&app, empty_request("DELETE", &format!("/api/v1/posts/{id}"))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(deleted["status"], "deleted");

    let (status, _) = send(&app, empty_request("GET", &format!("/api/v1/posts/{id}"))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn duplicate_titles_get_suffixed_slugs_over_http() {
    let app = support::make_test_router();
    let payload = json!({ "title": "Hello World", "body": POST_BODY, "owner_id": 1 });

    let (_, first) = send(&app, json_request("POST", "/api/v1/posts", &payload)).await;
    let (_, second) = send(&app, json_request("POST", "/api/v1/posts", &payload)).await;
    assert_eq!(first["slug"], "hello-world");
    assert_eq!(second["slug"], "hello-world-2");
}

#[tokio::test]
async fn course_reviews_drive_instructor_rating() {
    let app = support::make_test_router();

    let (status, instructor) = send(
        &app,
        json_request(
            "POST",
            "/api/v1/instructors",
            &json!({ "name": "Grace", "expertise": "Compilers" }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(instructor["rating"], "0.00");
    let instructor_id = instructor["id"].as_i64().unwrap();

    let (status, course) = send(
        &app,
        json_request(
            "POST",
            "/api/v1/courses",
            &json!({
                "title": "Rust for Beginners",
                "body": COURSE_DESCRIPTION,
                "owner_id": instructor_id,
                "status": "published"
            }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(course["slug"], "rust-for-beginners");
    let course_id = course["id"].as_i64().unwrap();

    let (status, listed) = send(
        &app,
        empty_request("GET", &format!("/api/v1/courses?owner_id={instructor_id}")),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed[0]["id"], course_id);

    let reviews_uri = format!("/api/v1/courses/{course_id}/reviews");
    let mut review_ids = Vec::new();
    for (rater, rating) in [(1, 5), (2, 4), (3, 3), (4, 2)] {
        let (status, receipt) = send(
            &app,
            json_request(
                "POST",
                &reviews_uri,
                &json!({
                    "rater_id": rater,
                    "rating": rating,
                    "title": "Solid course",
                    "comment": support::REVIEW_COMMENT
                }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        review_ids.push(receipt["review"]["id"].as_i64().unwrap());
    }

    let (_, instructor) = send(
        &app,
        empty_request("GET", &format!("/api/v1/instructors/{instructor_id}")),
    )
    .await;
    assert_eq!(instructor["rating"], "3.50");

    let (status, reviews) = send(&app, empty_request("GET", &reviews_uri)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(reviews.as_array().unwrap().len(), 4);

    let (status, updated) = send(
        &app,
        json_request(
            "PATCH",
            &format!("/api/v1/reviews/{}", review_ids[3]),
            &json!({ "rater_id": 4, "rating": 4 }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["instructor"]["rating"], "4.00");

    let (status, rating) = send(
        &app,
        empty_request(
            "DELETE",
            &format!("/api/v1/reviews/{}?rater_id=1", review_ids[0]),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(rating["instructor_id"], instructor_id);
    assert_eq!(rating["rating"], "3.67");

    let (status, review) = send(
        &app,
        empty_request("GET", &format!("/api/v1/reviews/{}", review_ids[1])),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(review["rater_id"], 2);
}

#[tokio::test]
async fn posts_are_filed_under_terms_over_http() {
    let app = support::make_test_router();

    let (status, category) = send(
        &app,
        json_request("POST", "/api/v1/categories", &json!({ "name": "Backend" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(category["slug"], "backend");
    assert_eq!(category["taxonomy"], "category");

    let (_, rust) = send(
        &app,
        json_request("POST", "/api/v1/tags", &json!({ "name": "Rust" })),
    )
    .await;
    let (_, tokio_tag) = send(
        &app,
        json_request(
            "POST",
            "/api/v1/tags",
            &json!({ "name": "Tokio", "description": "Async runtime" }),
        ),
    )
    .await;

    let (status, created) = send(
        &app,
        json_request(
            "POST",
            "/api/v1/posts",
            &json!({
                "title": "Hello World",
                "body": POST_BODY,
                "owner_id": 1,
                "status": "published",
                "category_id": category["id"],
                "tag_ids": [rust["id"]],
            }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["category_id"], category["id"]);
    assert_eq!(created["tag_ids"], json!([rust["id"]]));

    let id = created["id"].as_i64().unwrap();
    let (status, retagged) = send(
        &app,
        json_request(
            "PUT",
            &format!("/api/v1/posts/{id}/terms"),
            &json!({ "category_id": category["id"], "tag_ids": [tokio_tag["id"]] }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(retagged["tag_ids"], json!([tokio_tag["id"]]));

    let tag_id = tokio_tag["id"].as_i64().unwrap();
    let (_, listed) = send(
        &app,
        empty_request("GET", &format!("/api/v1/posts?tag_id={tag_id}")),
    )
    .await;
    assert_eq!(listed.as_array().unwrap().len(), 1);

    let (status, found) = send(&app, empty_request("GET", "/api/v1/tags/by-slug/tokio")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(found["description"], "Async runtime");

    let (status, deleted) = send(
        &app,
        empty_request("DELETE", &format!("/api/v1/tags/{tag_id}")),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(deleted["status"], "deleted");

    let (_, after) = send(&app, empty_request("GET", &format!("/api/v1/posts/{id}"))).await;
    assert_eq!(after["tag_ids"], json!([]));
    assert_eq!(after["category_id"], category["id"]);
}
