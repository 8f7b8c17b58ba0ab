// src/presentation/http/controllers/posts.rs
use super::content::{
    self, ContentListParams, CreateContentRequest, StatusRequest, TermsRequest,
    UpdateContentRequest,
};
use crate::application::dto::ContentDto;
use crate::domain::content::ContentKind;
use crate::presentation::http::error::HttpResult;
use crate::presentation::http::openapi::StatusResponse;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
    http::StatusCode,
};

const KIND: ContentKind = ContentKind::Post;

#[utoipa::path(
    get,
    path = "/api/v1/posts",
    params(ContentListParams),
    responses(
        (status = 200, description = "Published posts, newest first.", body = [ContentDto]),
        (status = 400, description = "Invalid filter.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Posts"
)]
pub async fn list_posts(
    Extension(state): Extension<HttpState>,
    Query(params): Query<ContentListParams>,
) -> HttpResult<Json<Vec<ContentDto>>> {
    content::list(&state, KIND, params).await
}

#[utoipa::path(
    post,
    path = "/api/v1/posts",
    request_body = CreateContentRequest,
    responses(
        (status = 201, description = "Post created.", body = ContentDto),
        (status = 400, description = "Invalid input.", body = crate::presentation::http::error::ErrorResponse),
        (status = 409, description = "No unique slug could be reserved.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Posts"
)]
pub async fn create_post(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<CreateContentRequest>,
) -> HttpResult<(StatusCode, Json<ContentDto>)> {
    content::create(&state, KIND, payload).await
}

#[utoipa::path(
    get,
    path = "/api/v1/posts/{id}",
    params(("id" = i64, Path, description = "Post identifier")),
    responses(
        (status = 200, description = "Post in any status.", body = ContentDto),
        (status = 404, description = "Post not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Posts"
)]
pub async fn get_post(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<ContentDto>> {
    content::get(&state, KIND, id).await
}

#[utoipa::path(
    get,
    path = "/api/v1/posts/by-slug/{slug}",
    params(("slug" = String, Path, description = "Post slug")),
    responses(
        (status = 200, description = "Published post.", body = ContentDto),
        (status = 404, description = "No published post with this slug.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Posts"
)]
pub async fn get_post_by_slug(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
) -> HttpResult<Json<ContentDto>> {
    content::get_by_slug(&state, KIND, slug).await
}

#[utoipa::path(
    patch,
    path = "/api/v1/posts/{id}",
    params(("id" = i64, Path, description = "Post identifier")),
    request_body = UpdateContentRequest,
    responses(
        (status = 200, description = "Post updated; the slug is kept.", body = ContentDto),
        (status = 400, description = "Invalid input.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Post not found.", body = crate::presentation::http::error::ErrorResponse),
        (status = 409, description = "Concurrent modification.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Posts"
)]
pub async fn update_post(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateContentRequest>,
) -> HttpResult<Json<ContentDto>> {
    content::update(&state, KIND, id, payload).await
}

#[utoipa::path(
    post,
    path = "/api/v1/posts/{id}/status",
    params(("id" = i64, Path, description = "Post identifier")),
    request_body = StatusRequest,
    responses(
        (status = 200, description = "Status applied.", body = ContentDto),
        (status = 400, description = "Unknown status or forbidden transition.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Post not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Posts"
)]
pub async fn set_post_status(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
    Json(payload): Json<StatusRequest>,
) -> HttpResult<Json<ContentDto>> {
    content::set_status(&state, KIND, id, payload).await
}

#[utoipa::path(
    put,
    path = "/api/v1/posts/{id}/terms",
    params(("id" = i64, Path, description = "Post identifier")),
    request_body = TermsRequest,
    responses(
        (status = 200, description = "Category and tags replaced.", body = ContentDto),
        (status = 400, description = "Unknown term or term of the wrong taxonomy.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Post or term not found.", body = crate::presentation::http::error::ErrorResponse),
        (status = 409, description = "Concurrent modification.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Posts"
)]
pub async fn set_post_terms(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
    Json(payload): Json<TermsRequest>,
) -> HttpResult<Json<ContentDto>> {
    content::set_terms(&state, KIND, id, payload).await
}

#[utoipa::path(
    delete,
    path = "/api/v1/posts/{id}",
    params(("id" = i64, Path, description = "Post identifier")),
    responses(
        (status = 200, description = "Post deleted.", body = StatusResponse),
        (status = 404, description = "Post not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Posts"
)]
pub async fn delete_post(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<StatusResponse>> {
    content::delete(&state, KIND, id).await
}
