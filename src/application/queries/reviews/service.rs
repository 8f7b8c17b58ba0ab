use std::sync::Arc;

use crate::{
    application::{
        dto::{InstructorDto, ReviewDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        content::{ContentId, ContentKind, ContentReadRepository},
        review::{InstructorId, InstructorRepository, ReviewId, ReviewRepository},
    },
};

pub struct ReviewQueryService {
    review_repo: Arc<dyn ReviewRepository>,
    instructor_repo: Arc<dyn InstructorRepository>,
    content_repo: Arc<dyn ContentReadRepository>,
}

impl ReviewQueryService {
    pub fn new(
        review_repo: Arc<dyn ReviewRepository>,
        instructor_repo: Arc<dyn InstructorRepository>,
        content_repo: Arc<dyn ContentReadRepository>,
    ) -> Self {
        Self {
            review_repo,
            instructor_repo,
            content_repo,
        }
    }

    pub async fn get_review(&self, id: i64) -> ApplicationResult<ReviewDto> {
        let id = ReviewId::new(id)?;
        self.review_repo
            .find_by_id(id)
            .await?
            .map(Into::into)
            .ok_or_else(|| ApplicationError::not_found("review not found"))
    }

    pub async fn list_course_reviews(&self, course_id: i64) -> ApplicationResult<Vec<ReviewDto>> {
        let course_id = ContentId::new(course_id)?;
        let is_course = self
            .content_repo
            .find_by_id(course_id)
            .await?
            .is_some_and(|item| item.kind == ContentKind::Course);
        if !is_course {
            return Err(ApplicationError::not_found("course not found"));
        }

        let reviews = self.review_repo.list_by_course(course_id).await?;
        Ok(reviews.into_iter().map(Into::into).collect())
    }

    /// Instructor with the rating cached by the last review write.
    pub async fn get_instructor(&self, id: i64) -> ApplicationResult<InstructorDto> {
        let id = InstructorId::new(id)?;
        self.instructor_repo
            .find_by_id(id)
            .await?
            .map(Into::into)
            .ok_or_else(|| ApplicationError::not_found("instructor not found"))
    }
}
