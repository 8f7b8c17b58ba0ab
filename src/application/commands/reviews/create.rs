// src/application/commands/reviews/create.rs
use super::ReviewCommandService;
use crate::{
    application::{
        dto::{InstructorRatingDto, ReviewReceiptDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        content::ContentId,
        errors::DomainError,
        review::{NewReview, RaterId, ReviewComment, ReviewTitle, ReviewValue},
    },
};

pub struct CreateReviewCommand {
    pub course_id: i64,
    pub rater_id: i64,
    pub rating: i32,
    pub title: String,
    pub comment: String,
}

impl ReviewCommandService {
    pub async fn create_review(
        &self,
        command: CreateReviewCommand,
    ) -> ApplicationResult<ReviewReceiptDto> {
        let course_id = ContentId::new(command.course_id)?;
        let rater_id = RaterId::new(command.rater_id)?;
        let value = ReviewValue::new(command.rating)?;
        let title = ReviewTitle::new(command.title)?;
        let comment = ReviewComment::new(command.comment)?;

        let course = self.load_course(course_id).await?;

        let review = self
            .review_repo
            .insert(NewReview {
                course_id,
                rater_id,
                value,
                title,
                comment,
                created_at: self.clock.now(),
            })
            .await
            .map_err(|err| match err {
                DomainError::Conflict(_) => {
                    ApplicationError::conflict("course already reviewed by this rater")
                }
                other => other.into(),
            })?;

        tracing::info!(
            review_id = i64::from(review.id),
            course_id = i64::from(course_id),
            rater_id = i64::from(rater_id),
            "review created"
        );

        let (instructor_id, rating) = self.refresh_instructor_rating(&course).await?;
        Ok(ReviewReceiptDto {
            review: review.into(),
            instructor: InstructorRatingDto::new(instructor_id, rating),
        })
    }
}
