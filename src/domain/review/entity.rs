// src/domain/review/entity.rs
use crate::domain::content::ContentId;
use crate::domain::review::value_objects::{
    InstructorId, RaterId, Rating, ReviewComment, ReviewId, ReviewTitle, ReviewValue,
};
use chrono::{DateTime, Utc};

/// A student's review of a course. One per (course, rater).
#[derive(Debug, Clone)]
pub struct Review {
    pub id: ReviewId,
    pub course_id: ContentId,
    pub rater_id: RaterId,
    pub value: ReviewValue,
    pub title: ReviewTitle,
    pub comment: ReviewComment,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Review {
    pub fn is_written_by(&self, rater_id: RaterId) -> bool {
        self.rater_id == rater_id
    }
}

#[derive(Debug, Clone)]
pub struct NewReview {
    pub course_id: ContentId,
    pub rater_id: RaterId,
    pub value: ReviewValue,
    pub title: ReviewTitle,
    pub comment: ReviewComment,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct ReviewUpdate {
    pub id: ReviewId,
    pub value: Option<ReviewValue>,
    pub title: Option<ReviewTitle>,
    pub comment: Option<ReviewComment>,
    pub updated_at: DateTime<Utc>,
}

impl ReviewUpdate {
    pub fn new(id: ReviewId, updated_at: DateTime<Utc>) -> Self {
        Self {
            id,
            value: None,
            title: None,
            comment: None,
            updated_at,
        }
    }

    pub fn with_value(mut self, value: ReviewValue) -> Self {
        self.value = Some(value);
        self
    }

    pub fn with_title(mut self, title: ReviewTitle) -> Self {
        self.title = Some(title);
        self
    }

    pub fn with_comment(mut self, comment: ReviewComment) -> Self {
        self.comment = Some(comment);
        self
    }
}

/// Owner of courses; `rating` is a cache over their courses' reviews.
#[derive(Debug, Clone)]
pub struct Instructor {
    pub id: InstructorId,
    pub name: String,
    pub expertise: String,
    pub rating: Rating,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewInstructor {
    pub name: String,
    pub expertise: String,
    pub created_at: DateTime<Utc>,
}
