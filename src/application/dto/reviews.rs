use crate::domain::review::{Instructor, InstructorId, Rating, Review};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ReviewDto {
    pub id: i64,
    pub course_id: i64,
    pub rater_id: i64,
    pub rating: i32,
    pub title: String,
    pub comment: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Review> for ReviewDto {
    fn from(review: Review) -> Self {
        Self {
            id: review.id.into(),
            course_id: review.course_id.into(),
            rater_id: review.rater_id.into(),
            rating: review.value.into(),
            title: review.title.into_inner(),
            comment: review.comment.into_inner(),
            created_at: review.created_at,
            updated_at: review.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct InstructorRatingDto {
    pub instructor_id: i64,
    /// Mean of all reviews on the instructor's courses, two decimals.
    #[schema(value_type = String, example = "4.50")]
    pub rating: Decimal,
}

impl InstructorRatingDto {
    pub fn new(instructor_id: InstructorId, rating: Rating) -> Self {
        Self {
            instructor_id: instructor_id.into(),
            rating: rating.value(),
        }
    }
}

/// Result of a review write: the stored review and the refreshed aggregate.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ReviewReceiptDto {
    pub review: ReviewDto,
    pub instructor: InstructorRatingDto,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct InstructorDto {
    pub id: i64,
    pub name: String,
    pub expertise: String,
    #[schema(value_type = String, example = "4.50")]
    pub rating: Decimal,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Instructor> for InstructorDto {
    fn from(instructor: Instructor) -> Self {
        Self {
            id: instructor.id.into(),
            name: instructor.name,
            expertise: instructor.expertise,
            rating: instructor.rating.value(),
            created_at: instructor.created_at,
            updated_at: instructor.updated_at,
        }
    }
}
