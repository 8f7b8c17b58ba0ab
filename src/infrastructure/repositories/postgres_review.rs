// src/infrastructure/repositories/postgres_review.rs
use super::map_sqlx;
use crate::domain::content::ContentId;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::review::{
    InstructorId, NewReview, RaterId, Review, ReviewComment, ReviewId, ReviewRepository,
    ReviewTitle, ReviewUpdate, ReviewValue,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

const REVIEW_COLUMNS: &str =
    "id, course_id, rater_id, value, title, comment, created_at, updated_at";

#[derive(Clone)]
pub struct PostgresReviewRepository {
    pool: PgPool,
}

impl PostgresReviewRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ReviewRow {
    id: i64,
    course_id: i64,
    rater_id: i64,
    value: i16,
    title: String,
    comment: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<ReviewRow> for Review {
    type Error = DomainError;

    fn try_from(row: ReviewRow) -> Result<Self, Self::Error> {
        Ok(Review {
            id: ReviewId::new(row.id)?,
            course_id: ContentId::new(row.course_id)?,
            rater_id: RaterId::new(row.rater_id)?,
            value: ReviewValue::new(i32::from(row.value))?,
            title: ReviewTitle::new(row.title)?,
            comment: ReviewComment::new(row.comment)?,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

fn into_reviews(rows: Vec<ReviewRow>) -> DomainResult<Vec<Review>> {
    rows.into_iter()
        .map(Review::try_from)
        .collect::<Result<Vec<_>, _>>()
}

#[async_trait]
impl ReviewRepository for PostgresReviewRepository {
    async fn insert(&self, review: NewReview) -> DomainResult<Review> {
        let NewReview {
            course_id,
            rater_id,
            value,
            title,
            comment,
            created_at,
        } = review;

        let row = sqlx::query_as::<_, ReviewRow>(&format!(
            "INSERT INTO course_reviews (course_id, rater_id, value, title, comment, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $6)
             RETURNING {REVIEW_COLUMNS}"
        ))
        .bind(i64::from(course_id))
        .bind(i64::from(rater_id))
        .bind(i16::from(value.get()))
        .bind(title.as_str())
        .bind(comment.as_str())
        .bind(created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Review::try_from(row)
    }

    async fn update(&self, update: ReviewUpdate) -> DomainResult<Review> {
        let ReviewUpdate {
            id,
            value,
            title,
            comment,
            updated_at,
        } = update;

        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("UPDATE course_reviews SET updated_at = ");
        builder.push_bind(updated_at);

        if let Some(value) = value {
            builder.push(", value = ");
            builder.push_bind(i16::from(value.get()));
        }

        if let Some(title) = title {
            builder.push(", title = ");
            builder.push_bind(title.into_inner());
        }

        if let Some(comment) = comment {
            builder.push(", comment = ");
            builder.push_bind(comment.into_inner());
        }

        builder.push(" WHERE id = ");
        builder.push_bind(i64::from(id));
        builder.push(" RETURNING ");
        builder.push(REVIEW_COLUMNS);

        let row = builder
            .build_query_as::<ReviewRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::NotFound("review not found".into()))?;

        Review::try_from(row)
    }

    async fn delete(&self, id: ReviewId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM course_reviews WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("review not found".into()));
        }
        Ok(())
    }

    async fn find_by_id(&self, id: ReviewId) -> DomainResult<Option<Review>> {
        let row = sqlx::query_as::<_, ReviewRow>(&format!(
            "SELECT {REVIEW_COLUMNS} FROM course_reviews WHERE id = $1"
        ))
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Review::try_from).transpose()
    }

    async fn list_by_course(&self, course_id: ContentId) -> DomainResult<Vec<Review>> {
        let rows = sqlx::query_as::<_, ReviewRow>(&format!(
            "SELECT {REVIEW_COLUMNS} FROM course_reviews
             WHERE course_id = $1
             ORDER BY created_at DESC, id DESC"
        ))
        .bind(i64::from(course_id))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        into_reviews(rows)
    }

    async fn list_by_instructor(&self, instructor_id: InstructorId) -> DomainResult<Vec<Review>> {
        let rows = sqlx::query_as::<_, ReviewRow>(
            "SELECT r.id, r.course_id, r.rater_id, r.value, r.title, r.comment, r.created_at, r.updated_at
             FROM course_reviews r
             JOIN content_items c ON c.id = r.course_id
             WHERE c.kind = 'course' AND c.owner_id = $1",
        )
        .bind(i64::from(instructor_id))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        into_reviews(rows)
    }
}
