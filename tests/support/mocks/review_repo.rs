// tests/support/mocks/review_repo.rs
use super::content_repo::InMemoryContentRepo;
use async_trait::async_trait;
use publishing_core::domain::content::{ContentId, ContentKind};
use publishing_core::domain::errors::{DomainError, DomainResult};
use publishing_core::domain::review::{
    InstructorId, NewReview, Review, ReviewId, ReviewRepository, ReviewUpdate,
};
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

/// Review store joined against the content store, so reviews of a deleted
/// course disappear the way the `ON DELETE CASCADE` key makes them.
pub struct InMemoryReviewRepo {
    content: Arc<InMemoryContentRepo>,
    state: Mutex<(i64, BTreeMap<i64, Review>)>,
}

impl InMemoryReviewRepo {
    pub fn new(content: Arc<InMemoryContentRepo>) -> Self {
        Self {
            content,
            state: Mutex::new((0, BTreeMap::new())),
        }
    }

    fn live(&self) -> Vec<Review> {
        self.state
            .lock()
            .unwrap()
            .1
            .values()
            .filter(|review| self.content.get(review.course_id).is_some())
            .cloned()
            .collect()
    }
}

#[async_trait]
impl ReviewRepository for InMemoryReviewRepo {
    async fn insert(&self, review: NewReview) -> DomainResult<Review> {
        if self.content.get(review.course_id).is_none() {
            return Err(DomainError::not_found("course not found"));
        }
        let duplicate = self.live().iter().any(|existing| {
            existing.course_id == review.course_id && existing.rater_id == review.rater_id
        });
        if duplicate {
            return Err(DomainError::conflict("course already reviewed by this rater"));
        }

        let mut state = self.state.lock().unwrap();
        state.0 += 1;
        let created = Review {
            id: ReviewId(state.0),
            course_id: review.course_id,
            rater_id: review.rater_id,
            value: review.value,
            title: review.title,
            comment: review.comment,
            created_at: review.created_at,
            updated_at: review.created_at,
        };
        state.1.insert(created.id.0, created.clone());
        Ok(created)
    }

    async fn update(&self, update: ReviewUpdate) -> DomainResult<Review> {
        let mut state = self.state.lock().unwrap();
        let review = state
            .1
            .get_mut(&update.id.0)
            .ok_or_else(|| DomainError::not_found("review not found"))?;
        if let Some(value) = update.value {
            review.value = value;
        }
        if let Some(title) = update.title {
            review.title = title;
        }
        if let Some(comment) = update.comment {
            review.comment = comment;
        }
        review.updated_at = update.updated_at;
        Ok(review.clone())
    }

    async fn delete(&self, id: ReviewId) -> DomainResult<()> {
        self.state
            .lock()
            .unwrap()
            .1
            .remove(&id.0)
            .map(|_| ())
            .ok_or_else(|| DomainError::not_found("review not found"))
    }

    async fn find_by_id(&self, id: ReviewId) -> DomainResult<Option<Review>> {
        Ok(self.live().into_iter().find(|review| review.id == id))
    }

    async fn list_by_course(&self, course_id: ContentId) -> DomainResult<Vec<Review>> {
        let mut reviews: Vec<Review> = self
            .live()
            .into_iter()
            .filter(|review| review.course_id == course_id)
            .collect();
        reviews.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.0.cmp(&a.id.0)));
        Ok(reviews)
    }

    async fn list_by_instructor(&self, instructor_id: InstructorId) -> DomainResult<Vec<Review>> {
        Ok(self
            .live()
            .into_iter()
            .filter(|review| {
                self.content.get(review.course_id).is_some_and(|course| {
                    course.kind == ContentKind::Course && course.owner_id.0 == instructor_id.0
                })
            })
            .collect())
    }
}
