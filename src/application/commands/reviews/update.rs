// src/application/commands/reviews/update.rs
use super::ReviewCommandService;
use crate::{
    application::{
        dto::{InstructorRatingDto, ReviewReceiptDto},
        error::ApplicationResult,
    },
    domain::review::{ReviewComment, ReviewTitle, ReviewUpdate, ReviewValue},
};

pub struct UpdateReviewCommand {
    pub id: i64,
    pub rater_id: i64,
    pub rating: Option<i32>,
    pub title: Option<String>,
    pub comment: Option<String>,
}

impl ReviewCommandService {
    /// Updates the rater's review in place and refreshes the instructor rating.
    pub async fn update_review(
        &self,
        command: UpdateReviewCommand,
    ) -> ApplicationResult<ReviewReceiptDto> {
        let UpdateReviewCommand {
            id,
            rater_id,
            rating,
            title,
            comment,
        } = command;

        let existing = self.load_own_review(id, rater_id).await?;

        let value = rating.map(ReviewValue::new).transpose()?;
        let title = title.map(ReviewTitle::new).transpose()?;
        let comment = comment.map(ReviewComment::new).transpose()?;

        let mut update = ReviewUpdate::new(existing.id, self.clock.now());
        if let Some(value) = value {
            update = update.with_value(value);
        }
        if let Some(title) = title {
            update = update.with_title(title);
        }
        if let Some(comment) = comment {
            update = update.with_comment(comment);
        }

        let review = self.review_repo.update(update).await?;
        tracing::info!(review_id = i64::from(review.id), "review updated");

        let course = self.load_course(review.course_id).await?;
        let (instructor_id, rating) = self.refresh_instructor_rating(&course).await?;
        Ok(ReviewReceiptDto {
            review: review.into(),
            instructor: InstructorRatingDto::new(instructor_id, rating),
        })
    }
}
