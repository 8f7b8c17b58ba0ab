// src/domain/review/repository.rs
use crate::domain::content::ContentId;
use crate::domain::errors::DomainResult;
use crate::domain::review::entity::{Instructor, NewInstructor, NewReview, Review, ReviewUpdate};
use crate::domain::review::value_objects::{InstructorId, Rating, ReviewId};
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[async_trait]
pub trait ReviewRepository: Send + Sync {
    /// Fails with `DomainError::Conflict` when the rater already reviewed the course.
    async fn insert(&self, review: NewReview) -> DomainResult<Review>;
    async fn update(&self, update: ReviewUpdate) -> DomainResult<Review>;
    async fn delete(&self, id: ReviewId) -> DomainResult<()>;
    async fn find_by_id(&self, id: ReviewId) -> DomainResult<Option<Review>>;
    async fn list_by_course(&self, course_id: ContentId) -> DomainResult<Vec<Review>>;
    /// Reviews on every course owned by `instructor_id`.
    async fn list_by_instructor(&self, instructor_id: InstructorId) -> DomainResult<Vec<Review>>;
}

#[async_trait]
pub trait InstructorRepository: Send + Sync {
    async fn insert(&self, instructor: NewInstructor) -> DomainResult<Instructor>;
    async fn find_by_id(&self, id: InstructorId) -> DomainResult<Option<Instructor>>;
    async fn update_rating(
        &self,
        id: InstructorId,
        rating: Rating,
        updated_at: DateTime<Utc>,
    ) -> DomainResult<Instructor>;
}
