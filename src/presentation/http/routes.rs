// src/presentation/http/routes.rs
use crate::presentation::http::state::HttpState;
use crate::presentation::http::{
    controllers::{courses, instructors, posts, reviews, taxonomy},
    middleware::rate_limit,
    openapi::{self, StatusResponse},
};
use axum::{
    Extension, Router,
    http::{HeaderValue, Method},
    routing::{delete, get, post, put},
};
use std::time::Duration;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Router options taken from configuration.
#[derive(Debug, Clone)]
pub struct RouterOptions {
    pub allowed_origins: Vec<String>,
    pub rate_limit: bool,
}

impl Default for RouterOptions {
    fn default() -> Self {
        Self {
            allowed_origins: vec!["http://localhost:3000".into()],
            rate_limit: false,
        }
    }
}

pub fn build_router(state: HttpState) -> Router {
    build_router_with(state, &RouterOptions::default())
}

pub fn build_router_with(state: HttpState, options: &RouterOptions) -> Router {
    let mut api = api_routes();
    if options.rate_limit {
        match rate_limit::layer() {
            Some(layer) => api = api.layer(layer),
            None => tracing::warn!("rate limiter configuration rejected; running without it"),
        }
    }

    Router::new()
        .merge(openapi::docs_router())
        .route("/health", get(health))
        .merge(api)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&options.allowed_origins))
        .layer(Extension(state))
}

fn api_routes() -> Router {
    Router::new()
        .route(
            "/api/v1/posts",
            get(posts::list_posts).post(posts::create_post),
        )
        .route(
            "/api/v1/posts/by-slug/{slug}",
            get(posts::get_post_by_slug),
        )
        .route(
            "/api/v1/posts/{id}",
            get(posts::get_post)
                .patch(posts::update_post)
                .delete(posts::delete_post),
        )
        .route("/api/v1/posts/{id}/status", post(posts::set_post_status))
        .route("/api/v1/posts/{id}/terms", put(posts::set_post_terms))
        .route(
            "/api/v1/courses",
            get(courses::list_courses).post(courses::create_course),
        )
        .route(
            "/api/v1/courses/by-slug/{slug}",
            get(courses::get_course_by_slug),
        )
        .route(
            "/api/v1/courses/{id}",
            get(courses::get_course)
                .patch(courses::update_course)
                .delete(courses::delete_course),
        )
        .route(
            "/api/v1/courses/{id}/status",
            post(courses::set_course_status),
        )
        .route("/api/v1/courses/{id}/terms", put(courses::set_course_terms))
        .route(
            "/api/v1/courses/{id}/reviews",
            get(reviews::list_course_reviews).post(reviews::create_review),
        )
        .route(
            "/api/v1/reviews/{id}",
            get(reviews::get_review)
                .patch(reviews::update_review)
                .delete(reviews::delete_review),
        )
        .route(
            "/api/v1/instructors",
            post(instructors::register_instructor),
        )
        .route(
            "/api/v1/instructors/{id}",
            get(instructors::get_instructor),
        )
        .merge(taxonomy_routes())
}

fn taxonomy_routes() -> Router {
    Router::new()
        .route(
            "/api/v1/categories",
            get(taxonomy::list_categories).post(taxonomy::create_category),
        )
        .route(
            "/api/v1/categories/by-slug/{slug}",
            get(taxonomy::get_category_by_slug),
        )
        .route(
            "/api/v1/categories/{id}",
            delete(taxonomy::delete_category),
        )
        .route(
            "/api/v1/tags",
            get(taxonomy::list_tags).post(taxonomy::create_tag),
        )
        .route("/api/v1/tags/by-slug/{slug}", get(taxonomy::get_tag_by_slug))
        .route("/api/v1/tags/{id}", delete(taxonomy::delete_tag))
        .route(
            "/api/v1/course-categories",
            get(taxonomy::list_course_categories).post(taxonomy::create_course_category),
        )
        .route(
            "/api/v1/course-categories/by-slug/{slug}",
            get(taxonomy::get_course_category_by_slug),
        )
        .route(
            "/api/v1/course-categories/{id}",
            delete(taxonomy::delete_course_category),
        )
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(tower_http::cors::Any)
        .max_age(Duration::from_secs(3600))
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service health check.", body = crate::presentation::http::openapi::StatusResponse)
    ),
    tag = "System"
)]
pub async fn health() -> axum::Json<StatusResponse> {
    axum::Json(StatusResponse {
        status: "ok".into(),
    })
}
