// src/presentation/http/controllers/reviews.rs
use crate::application::{
    commands::reviews::{CreateReviewCommand, DeleteReviewCommand, UpdateReviewCommand},
    dto::{InstructorRatingDto, ReviewDto, ReviewReceiptDto},
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
    http::StatusCode,
};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateReviewRequest {
    pub rater_id: i64,
    /// Whole stars, `0..=5`.
    #[schema(example = 4)]
    pub rating: i32,
    pub title: String,
    pub comment: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateReviewRequest {
    /// Must match the rater that wrote the review.
    pub rater_id: i64,
    pub rating: Option<i32>,
    pub title: Option<String>,
    pub comment: Option<String>,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct RaterParams {
    /// Must match the rater that wrote the review.
    pub rater_id: i64,
}

#[utoipa::path(
    get,
    path = "/api/v1/courses/{id}/reviews",
    params(("id" = i64, Path, description = "Course identifier")),
    responses(
        (status = 200, description = "Reviews of the course, newest first.", body = [ReviewDto]),
        (status = 404, description = "Course not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Reviews"
)]
pub async fn list_course_reviews(
    Extension(state): Extension<HttpState>,
    Path(course_id): Path<i64>,
) -> HttpResult<Json<Vec<ReviewDto>>> {
    state
        .services
        .review_queries
        .list_course_reviews(course_id)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/courses/{id}/reviews",
    params(("id" = i64, Path, description = "Course identifier")),
    request_body = CreateReviewRequest,
    responses(
        (status = 201, description = "Review stored; instructor rating refreshed.", body = ReviewReceiptDto),
        (status = 400, description = "Invalid input.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Course not found.", body = crate::presentation::http::error::ErrorResponse),
        (status = 409, description = "Course already reviewed by this rater.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Reviews"
)]
pub async fn create_review(
    Extension(state): Extension<HttpState>,
    Path(course_id): Path<i64>,
    Json(payload): Json<CreateReviewRequest>,
) -> HttpResult<(StatusCode, Json<ReviewReceiptDto>)> {
    let command = CreateReviewCommand {
        course_id,
        rater_id: payload.rater_id,
        rating: payload.rating,
        title: payload.title,
        comment: payload.comment,
    };

    state
        .services
        .review_commands
        .create_review(command)
        .await
        .into_http()
        .map(|receipt| (StatusCode::CREATED, Json(receipt)))
}

#[utoipa::path(
    get,
    path = "/api/v1/reviews/{id}",
    params(("id" = i64, Path, description = "Review identifier")),
    responses(
        (status = 200, description = "Review.", body = ReviewDto),
        (status = 404, description = "Review not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Reviews"
)]
pub async fn get_review(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<ReviewDto>> {
    state
        .services
        .review_queries
        .get_review(id)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    patch,
    path = "/api/v1/reviews/{id}",
    params(("id" = i64, Path, description = "Review identifier")),
    request_body = UpdateReviewRequest,
    responses(
        (status = 200, description = "Review updated; instructor rating refreshed.", body = ReviewReceiptDto),
        (status = 400, description = "Invalid input.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Review not found for this rater.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Reviews"
)]
pub async fn update_review(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateReviewRequest>,
) -> HttpResult<Json<ReviewReceiptDto>> {
    let command = UpdateReviewCommand {
        id,
        rater_id: payload.rater_id,
        rating: payload.rating,
        title: payload.title,
        comment: payload.comment,
    };

    state
        .services
        .review_commands
        .update_review(command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/v1/reviews/{id}",
    params(
        ("id" = i64, Path, description = "Review identifier"),
        RaterParams
    ),
    responses(
        (status = 200, description = "Review deleted; refreshed instructor rating.", body = InstructorRatingDto),
        (status = 404, description = "Review not found for this rater.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Reviews"
)]
pub async fn delete_review(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
    Query(params): Query<RaterParams>,
) -> HttpResult<Json<InstructorRatingDto>> {
    state
        .services
        .review_commands
        .delete_review(DeleteReviewCommand {
            id,
            rater_id: params.rater_id,
        })
        .await
        .into_http()
        .map(Json)
}
