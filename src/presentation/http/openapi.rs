// src/presentation/http/openapi.rs
use axum::{Router, response::Redirect, routing::get};
use serde::{Deserialize, Serialize};
use std::{collections::HashSet, env, fs::File, io::BufWriter, path::Path};
use utoipa::openapi::server::Server;
use utoipa::{Modify, OpenApi, ToSchema};
use utoipa_redoc::{Redoc, Servable};
use utoipa_swagger_ui::SwaggerUi;

pub const DEFAULT_SNAPSHOT_PATH: &str = "spec/openapi.json";

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::posts::list_posts,
        crate::presentation::http::controllers::posts::create_post,
        crate::presentation::http::controllers::posts::get_post,
        crate::presentation::http::controllers::posts::get_post_by_slug,
        crate::presentation::http::controllers::posts::update_post,
        crate::presentation::http::controllers::posts::set_post_status,
        crate::presentation::http::controllers::posts::set_post_terms,
        crate::presentation::http::controllers::posts::delete_post,
        crate::presentation::http::controllers::courses::list_courses,
        crate::presentation::http::controllers::courses::create_course,
        crate::presentation::http::controllers::courses::get_course,
        crate::presentation::http::controllers::courses::get_course_by_slug,
        crate::presentation::http::controllers::courses::update_course,
        crate::presentation::http::controllers::courses::set_course_status,
        crate::presentation::http::controllers::courses::set_course_terms,
        crate::presentation::http::controllers::courses::delete_course,
        crate::presentation::http::controllers::reviews::list_course_reviews,
        crate::presentation::http::controllers::reviews::create_review,
        crate::presentation::http::controllers::reviews::get_review,
        crate::presentation::http::controllers::reviews::update_review,
        crate::presentation::http::controllers::reviews::delete_review,
        crate::presentation::http::controllers::instructors::register_instructor,
        crate::presentation::http::controllers::instructors::get_instructor,
        crate::presentation::http::controllers::taxonomy::list_categories,
        crate::presentation::http::controllers::taxonomy::create_category,
        crate::presentation::http::controllers::taxonomy::get_category_by_slug,
        crate::presentation::http::controllers::taxonomy::delete_category,
        crate::presentation::http::controllers::taxonomy::list_tags,
        crate::presentation::http::controllers::taxonomy::create_tag,
        crate::presentation::http::controllers::taxonomy::get_tag_by_slug,
        crate::presentation::http::controllers::taxonomy::delete_tag,
        crate::presentation::http::controllers::taxonomy::list_course_categories,
        crate::presentation::http::controllers::taxonomy::create_course_category,
        crate::presentation::http::controllers::taxonomy::get_course_category_by_slug,
        crate::presentation::http::controllers::taxonomy::delete_course_category,
        super::routes::health
    ),
    components(
        schemas(
            StatusResponse,
            crate::presentation::http::error::ErrorResponse,
            crate::presentation::http::controllers::content::ContentListParams,
            crate::presentation::http::controllers::content::CreateContentRequest,
            crate::presentation::http::controllers::content::UpdateContentRequest,
            crate::presentation::http::controllers::content::StatusRequest,
            crate::presentation::http::controllers::content::TermsRequest,
            crate::presentation::http::controllers::taxonomy::CreateTermRequest,
            crate::presentation::http::controllers::reviews::CreateReviewRequest,
            crate::presentation::http::controllers::reviews::UpdateReviewRequest,
            crate::presentation::http::controllers::instructors::RegisterInstructorRequest,
            crate::application::dto::ContentDto,
            crate::application::dto::ReviewDto,
            crate::application::dto::ReviewReceiptDto,
            crate::application::dto::InstructorRatingDto,
            crate::application::dto::InstructorDto,
            crate::application::dto::TermDto
        )
    ),
    tags(
        (name = "Posts", description = "Blog post endpoints"),
        (name = "Courses", description = "Course catalogue endpoints"),
        (name = "Reviews", description = "Course review endpoints"),
        (name = "Instructors", description = "Instructor registry endpoints"),
        (name = "Taxonomy", description = "Blog categories, tags and course categories"),
        (name = "System", description = "System level endpoints")
    ),
    modifiers(&ApiDocCustomizer),
    info(
        title = "Publishing API",
        description = "Posts, courses and course reviews",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

struct ApiDocCustomizer;

impl Modify for ApiDocCustomizer {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let servers = openapi.servers.get_or_insert_with(Vec::new);
        servers.clear();

        let mut urls: Vec<String> = env::var("PUBLIC_API_URLS")
            .ok()
            .map(|value| {
                value
                    .split(',')
                    .map(str::trim)
                    .filter(|segment| !segment.is_empty())
                    .map(|segment| segment.trim_end_matches('/').to_string())
                    .collect()
            })
            .unwrap_or_default();

        if urls.is_empty() {
            urls.push("http://localhost:8080".to_string());
        }

        let mut seen = HashSet::new();
        for url in urls {
            if seen.insert(url.clone()) {
                servers.push(Server::new(url));
            }
        }
    }
}

pub fn docs_router() -> Router {
    let openapi = ApiDoc::openapi();
    let swagger = SwaggerUi::new("/docs").url("/openapi.json", openapi.clone());
    let redoc = Redoc::with_url("/redoc", openapi);
    Router::new()
        .merge(swagger)
        .merge(redoc)
        .route("/", get(|| async { Redirect::permanent("/docs") }))
}

pub fn snapshot_path() -> String {
    env::var("OPENAPI_SNAPSHOT_PATH").unwrap_or_else(|_| DEFAULT_SNAPSHOT_PATH.to_string())
}

pub fn write_openapi_snapshot() -> std::io::Result<()> {
    let spec = ApiDoc::openapi();
    let output_path = snapshot_path();
    let path = Path::new(&output_path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, &spec)?;
    Ok(())
}
