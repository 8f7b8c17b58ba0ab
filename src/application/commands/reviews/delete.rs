// src/application/commands/reviews/delete.rs
use super::ReviewCommandService;
use crate::application::{dto::InstructorRatingDto, error::ApplicationResult};

pub struct DeleteReviewCommand {
    pub id: i64,
    pub rater_id: i64,
}

impl ReviewCommandService {
    pub async fn delete_review(
        &self,
        command: DeleteReviewCommand,
    ) -> ApplicationResult<InstructorRatingDto> {
        let review = self.load_own_review(command.id, command.rater_id).await?;
        let course = self.load_course(review.course_id).await?;

        self.review_repo.delete(review.id).await?;
        tracing::info!(review_id = i64::from(review.id), "review deleted");

        let (instructor_id, rating) = self.refresh_instructor_rating(&course).await?;
        Ok(InstructorRatingDto::new(instructor_id, rating))
    }
}
