// src/presentation/http/controllers/content.rs
//! Request types and handlers shared by the post and course endpoints.

use crate::application::{
    commands::content::{
        CreateContentCommand, DeleteContentCommand, SetContentStatusCommand,
        SetContentTermsCommand, UpdateContentCommand,
    },
    dto::ContentDto,
    queries::content::{GetContentByIdQuery, GetContentBySlugQuery, ListContentQuery},
};
use crate::domain::content::ContentKind;
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::openapi::StatusResponse;
use crate::presentation::http::state::HttpState;
use axum::{Json, http::StatusCode};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct ContentListParams {
    /// Case-insensitive title search.
    #[serde(default)]
    pub q: Option<String>,
    #[serde(default)]
    pub owner_id: Option<i64>,
    /// Only items filed under this category.
    #[serde(default)]
    pub category_id: Option<i64>,
    /// Only items carrying this tag.
    #[serde(default)]
    pub tag_id: Option<i64>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateContentRequest {
    pub title: String,
    /// Post content or course description.
    pub body: String,
    /// Author of a post or instructor of a course.
    pub owner_id: i64,
    /// Initial status; defaults to `draft`.
    #[serde(default)]
    #[schema(example = "published")]
    pub status: Option<String>,
    /// Blog category for posts, course category for courses.
    #[serde(default)]
    pub category_id: Option<i64>,
    /// Tags; posts only.
    #[serde(default)]
    pub tag_ids: Vec<i64>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateContentRequest {
    pub title: Option<String>,
    pub body: Option<String>,
}

/// Full replacement of an item's category and tags.
#[derive(Debug, Deserialize, ToSchema)]
pub struct TermsRequest {
    #[serde(default)]
    pub category_id: Option<i64>,
    #[serde(default)]
    pub tag_ids: Vec<i64>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct StatusRequest {
    #[schema(example = "published")]
    pub status: String,
}

pub(super) async fn list(
    state: &HttpState,
    kind: ContentKind,
    params: ContentListParams,
) -> HttpResult<Json<Vec<ContentDto>>> {
    state
        .services
        .content_queries
        .list_published(ListContentQuery {
            kind,
            search: params.q,
            owner_id: params.owner_id,
            category_id: params.category_id,
            tag_id: params.tag_id,
        })
        .await
        .into_http()
        .map(Json)
}

pub(super) async fn get(
    state: &HttpState,
    kind: ContentKind,
    id: i64,
) -> HttpResult<Json<ContentDto>> {
    state
        .services
        .content_queries
        .get_content_by_id(GetContentByIdQuery { kind, id })
        .await
        .into_http()
        .map(Json)
}

pub(super) async fn get_by_slug(
    state: &HttpState,
    kind: ContentKind,
    slug: String,
) -> HttpResult<Json<ContentDto>> {
    state
        .services
        .content_queries
        .get_content_by_slug(GetContentBySlugQuery { kind, slug })
        .await
        .into_http()
        .map(Json)
}

pub(super) async fn create(
    state: &HttpState,
    kind: ContentKind,
    payload: CreateContentRequest,
) -> HttpResult<(StatusCode, Json<ContentDto>)> {
    let command = CreateContentCommand {
        kind,
        title: payload.title,
        body: payload.body,
        owner_id: payload.owner_id,
        status: payload.status,
        category_id: payload.category_id,
        tag_ids: payload.tag_ids,
    };

    state
        .services
        .content_commands
        .create_content(command)
        .await
        .into_http()
        .map(|dto| (StatusCode::CREATED, Json(dto)))
}

pub(super) async fn update(
    state: &HttpState,
    kind: ContentKind,
    id: i64,
    payload: UpdateContentRequest,
) -> HttpResult<Json<ContentDto>> {
    let command = UpdateContentCommand {
        kind,
        id,
        title: payload.title,
        body: payload.body,
    };

    state
        .services
        .content_commands
        .update_content(command)
        .await
        .into_http()
        .map(Json)
}

pub(super) async fn set_status(
    state: &HttpState,
    kind: ContentKind,
    id: i64,
    payload: StatusRequest,
) -> HttpResult<Json<ContentDto>> {
    let command = SetContentStatusCommand {
        kind,
        id,
        status: payload.status,
    };

    state
        .services
        .content_commands
        .set_status(command)
        .await
        .into_http()
        .map(Json)
}

pub(super) async fn set_terms(
    state: &HttpState,
    kind: ContentKind,
    id: i64,
    payload: TermsRequest,
) -> HttpResult<Json<ContentDto>> {
    let command = SetContentTermsCommand {
        kind,
        id,
        category_id: payload.category_id,
        tag_ids: payload.tag_ids,
    };

    state
        .services
        .content_commands
        .set_terms(command)
        .await
        .into_http()
        .map(Json)
}

pub(super) async fn delete(
    state: &HttpState,
    kind: ContentKind,
    id: i64,
) -> HttpResult<Json<StatusResponse>> {
    state
        .services
        .content_commands
        .delete_content(DeleteContentCommand { kind, id })
        .await
        .into_http()?;

    Ok(Json(StatusResponse {
        status: "deleted".into(),
    }))
}
