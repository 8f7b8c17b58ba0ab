// src/application/commands/reviews/service.rs
use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::{
    application::{
        error::{ApplicationError, ApplicationResult},
        ports::time::Clock,
    },
    domain::{
        content::{ContentId, ContentItem, ContentKind, ContentReadRepository},
        review::{
            InstructorId, InstructorRepository, RaterId, Rating, Review, ReviewId,
            ReviewRepository, recompute_rating,
        },
    },
};

pub struct ReviewCommandService {
    pub(super) review_repo: Arc<dyn ReviewRepository>,
    pub(super) instructor_repo: Arc<dyn InstructorRepository>,
    pub(super) content_repo: Arc<dyn ContentReadRepository>,
    pub(super) clock: Arc<dyn Clock>,
}

impl ReviewCommandService {
    pub fn new(
        review_repo: Arc<dyn ReviewRepository>,
        instructor_repo: Arc<dyn InstructorRepository>,
        content_repo: Arc<dyn ContentReadRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            review_repo,
            instructor_repo,
            content_repo,
            clock,
        }
    }

    pub(super) async fn load_course(&self, id: ContentId) -> ApplicationResult<ContentItem> {
        self.content_repo
            .find_by_id(id)
            .await?
            .filter(|item| item.kind == ContentKind::Course)
            .ok_or_else(|| ApplicationError::not_found("course not found"))
    }

    /// Loads a review as seen by `rater_id`; other raters' reviews are invisible.
    pub(super) async fn load_own_review(
        &self,
        id: i64,
        rater_id: i64,
    ) -> ApplicationResult<Review> {
        let id = ReviewId::new(id)?;
        let rater_id = RaterId::new(rater_id)?;
        self.review_repo
            .find_by_id(id)
            .await?
            .filter(|review| review.is_written_by(rater_id))
            .ok_or_else(|| ApplicationError::not_found("review not found"))
    }

    pub(super) async fn refresh_instructor_rating(
        &self,
        course: &ContentItem,
    ) -> ApplicationResult<(InstructorId, Rating)> {
        let instructor_id = InstructorId::from(course.owner_id);
        let rating = refresh_rating(
            self.review_repo.as_ref(),
            self.instructor_repo.as_ref(),
            instructor_id,
            self.clock.now(),
        )
        .await?;
        Ok((instructor_id, rating))
    }
}

/// Rebuilds the cached rating of `instructor_id` from every review on their courses.
///
/// Reads the whole review collection after the triggering write has been
/// committed; a review committed concurrently is picked up by the next
/// refresh.
pub(crate) async fn refresh_rating(
    review_repo: &dyn ReviewRepository,
    instructor_repo: &dyn InstructorRepository,
    instructor_id: InstructorId,
    now: DateTime<Utc>,
) -> ApplicationResult<Rating> {
    let reviews = review_repo.list_by_instructor(instructor_id).await?;
    let rating = recompute_rating(&reviews);

    instructor_repo
        .update_rating(instructor_id, rating, now)
        .await?;

    tracing::debug!(
        instructor_id = i64::from(instructor_id),
        reviews = reviews.len(),
        %rating,
        "instructor rating recomputed"
    );
    Ok(rating)
}
