// src/presentation/http/controllers/instructors.rs
use crate::application::{commands::reviews::RegisterInstructorCommand, dto::InstructorDto};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path, http::StatusCode};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct RegisterInstructorRequest {
    pub name: String,
    #[serde(default)]
    pub expertise: String,
}

#[utoipa::path(
    post,
    path = "/api/v1/instructors",
    request_body = RegisterInstructorRequest,
    responses(
        (status = 201, description = "Instructor registered with a 0.00 rating.", body = InstructorDto),
        (status = 400, description = "Invalid input.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Instructors"
)]
pub async fn register_instructor(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<RegisterInstructorRequest>,
) -> HttpResult<(StatusCode, Json<InstructorDto>)> {
    let command = RegisterInstructorCommand {
        name: payload.name,
        expertise: payload.expertise,
    };

    state
        .services
        .review_commands
        .register_instructor(command)
        .await
        .into_http()
        .map(|dto| (StatusCode::CREATED, Json(dto)))
}

#[utoipa::path(
    get,
    path = "/api/v1/instructors/{id}",
    params(("id" = i64, Path, description = "Instructor identifier")),
    responses(
        (status = 200, description = "Instructor with cached rating.", body = InstructorDto),
        (status = 404, description = "Instructor not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Instructors"
)]
pub async fn get_instructor(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<InstructorDto>> {
    state
        .services
        .review_queries
        .get_instructor(id)
        .await
        .into_http()
        .map(Json)
}
