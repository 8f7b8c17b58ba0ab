// src/presentation/http/controllers/taxonomy.rs
//! Categories and tags. Each taxonomy gets the same four endpoints.

use crate::application::{
    commands::taxonomy::{CreateTermCommand, DeleteTermCommand},
    dto::TermDto,
};
use crate::domain::taxonomy::Taxonomy;
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::openapi::StatusResponse;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path, http::StatusCode};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateTermRequest {
    #[schema(example = "Systems Programming")]
    pub name: String,
    #[serde(default)]
    pub description: String,
}

async fn list(state: &HttpState, taxonomy: Taxonomy) -> HttpResult<Json<Vec<TermDto>>> {
    state
        .services
        .taxonomy_queries
        .list_terms(taxonomy)
        .await
        .into_http()
        .map(Json)
}

async fn create(
    state: &HttpState,
    taxonomy: Taxonomy,
    payload: CreateTermRequest,
) -> HttpResult<(StatusCode, Json<TermDto>)> {
    let command = CreateTermCommand {
        taxonomy,
        name: payload.name,
        description: payload.description,
    };

    state
        .services
        .taxonomy_commands
        .create_term(command)
        .await
        .into_http()
        .map(|dto| (StatusCode::CREATED, Json(dto)))
}

async fn get_by_slug(
    state: &HttpState,
    taxonomy: Taxonomy,
    slug: String,
) -> HttpResult<Json<TermDto>> {
    state
        .services
        .taxonomy_queries
        .get_term_by_slug(taxonomy, slug)
        .await
        .into_http()
        .map(Json)
}

async fn delete(
    state: &HttpState,
    taxonomy: Taxonomy,
    id: i64,
) -> HttpResult<Json<StatusResponse>> {
    state
        .services
        .taxonomy_commands
        .delete_term(DeleteTermCommand { taxonomy, id })
        .await
        .into_http()?;

    Ok(Json(StatusResponse {
        status: "deleted".into(),
    }))
}

#[utoipa::path(
    get,
    path = "/api/v1/categories",
    responses(
        (status = 200, description = "Categories ordered by name.", body = [TermDto])
    ),
    tag = "Taxonomy"
)]
pub async fn list_categories(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<Vec<TermDto>>> {
    list(&state, Taxonomy::Category).await
}

#[utoipa::path(
    post,
    path = "/api/v1/categories",
    request_body = CreateTermRequest,
    responses(
        (status = 201, description = "Category created under a fresh slug.", body = TermDto),
        (status = 400, description = "Invalid name.", body = crate::presentation::http::error::ErrorResponse),
        (status = 409, description = "No unique slug could be reserved.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Taxonomy"
)]
pub async fn create_category(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<CreateTermRequest>,
) -> HttpResult<(StatusCode, Json<TermDto>)> {
    create(&state, Taxonomy::Category, payload).await
}

#[utoipa::path(
    get,
    path = "/api/v1/categories/by-slug/{slug}",
    params(("slug" = String, Path, description = "Category slug")),
    responses(
        (status = 200, description = "Category.", body = TermDto),
        (status = 404, description = "No category with this slug.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Taxonomy"
)]
pub async fn get_category_by_slug(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
) -> HttpResult<Json<TermDto>> {
    get_by_slug(&state, Taxonomy::Category, slug).await
}

#[utoipa::path(
    delete,
    path = "/api/v1/categories/{id}",
    params(("id" = i64, Path, description = "Category identifier")),
    responses(
        (status = 200, description = "Category deleted; content filed under it is kept.", body = StatusResponse),
        (status = 404, description = "Category not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Taxonomy"
)]
pub async fn delete_category(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<StatusResponse>> {
    delete(&state, Taxonomy::Category, id).await
}

#[utoipa::path(
    get,
    path = "/api/v1/tags",
    responses(
        (status = 200, description = "Tags ordered by name.", body = [TermDto])
    ),
    tag = "Taxonomy"
)]
pub async fn list_tags(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<Vec<TermDto>>> {
    list(&state, Taxonomy::Tag).await
}

#[utoipa::path(
    post,
    path = "/api/v1/tags",
    request_body = CreateTermRequest,
    responses(
        (status = 201, description = "Tag created under a fresh slug.", body = TermDto),
        (status = 400, description = "Invalid name.", body = crate::presentation::http::error::ErrorResponse),
        (status = 409, description = "No unique slug could be reserved.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Taxonomy"
)]
pub async fn create_tag(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<CreateTermRequest>,
) -> HttpResult<(StatusCode, Json<TermDto>)> {
    create(&state, Taxonomy::Tag, payload).await
}

#[utoipa::path(
    get,
    path = "/api/v1/tags/by-slug/{slug}",
    params(("slug" = String, Path, description = "Tag slug")),
    responses(
        (status = 200, description = "Tag.", body = TermDto),
        (status = 404, description = "No tag with this slug.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Taxonomy"
)]
pub async fn get_tag_by_slug(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
) -> HttpResult<Json<TermDto>> {
    get_by_slug(&state, Taxonomy::Tag, slug).await
}

#[utoipa::path(
    delete,
    path = "/api/v1/tags/{id}",
    params(("id" = i64, Path, description = "Tag identifier")),
    responses(
        (status = 200, description = "Tag deleted; content filed under it is kept.", body = StatusResponse),
        (status = 404, description = "Tag not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Taxonomy"
)]
pub async fn delete_tag(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<StatusResponse>> {
    delete(&state, Taxonomy::Tag, id).await
}

#[utoipa::path(
    get,
    path = "/api/v1/course-categories",
    responses(
        (status = 200, description = "Course categories ordered by name.", body = [TermDto])
    ),
    tag = "Taxonomy"
)]
pub async fn list_course_categories(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<Vec<TermDto>>> {
    list(&state, Taxonomy::CourseCategory).await
}

#[utoipa::path(
    post,
    path = "/api/v1/course-categories",
    request_body = CreateTermRequest,
    responses(
        (status = 201, description = "Course category created under a fresh slug.", body = TermDto),
        (status = 400, description = "Invalid name.", body = crate::presentation::http::error::ErrorResponse),
        (status = 409, description = "No unique slug could be reserved.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Taxonomy"
)]
pub async fn create_course_category(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<CreateTermRequest>,
) -> HttpResult<(StatusCode, Json<TermDto>)> {
    create(&state, Taxonomy::CourseCategory, payload).await
}

#[utoipa::path(
    get,
    path = "/api/v1/course-categories/by-slug/{slug}",
    params(("slug" = String, Path, description = "Course category slug")),
    responses(
        (status = 200, description = "Course category.", body = TermDto),
        (status = 404, description = "No course category with this slug.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Taxonomy"
)]
pub async fn get_course_category_by_slug(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
) -> HttpResult<Json<TermDto>> {
    get_by_slug(&state, Taxonomy::CourseCategory, slug).await
}

#[utoipa::path(
    delete,
    path = "/api/v1/course-categories/{id}",
    params(("id" = i64, Path, description = "Course category identifier")),
    responses(
        (status = 200, description = "Course category deleted; content filed under it is kept.", body = StatusResponse),
        (status = 404, description = "Course category not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Taxonomy"
)]
pub async fn delete_course_category(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<StatusResponse>> {
    delete(&state, Taxonomy::CourseCategory, id).await
}
