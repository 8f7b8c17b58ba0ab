// src/infrastructure/repositories/postgres_instructor.rs
use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::review::{Instructor, InstructorId, InstructorRepository, NewInstructor, Rating};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::{FromRow, PgPool};

#[derive(Clone)]
pub struct PostgresInstructorRepository {
    pool: PgPool,
}

impl PostgresInstructorRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct InstructorRow {
    id: i64,
    name: String,
    expertise: String,
    rating: Decimal,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<InstructorRow> for Instructor {
    type Error = DomainError;

    fn try_from(row: InstructorRow) -> Result<Self, Self::Error> {
        Ok(Instructor {
            id: InstructorId::new(row.id)?,
            name: row.name,
            expertise: row.expertise,
            rating: Rating::from_stored(row.rating)?,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl InstructorRepository for PostgresInstructorRepository {
    async fn insert(&self, instructor: NewInstructor) -> DomainResult<Instructor> {
        let NewInstructor {
            name,
            expertise,
            created_at,
        } = instructor;

        let row = sqlx::query_as::<_, InstructorRow>(
            "INSERT INTO instructors (name, expertise, rating, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $4)
             RETURNING id, name, expertise, rating, created_at, updated_at",
        )
        .bind(name)
        .bind(expertise)
        .bind(Rating::zero().value())
        .bind(created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Instructor::try_from(row)
    }

    async fn find_by_id(&self, id: InstructorId) -> DomainResult<Option<Instructor>> {
        let row = sqlx::query_as::<_, InstructorRow>(
            "SELECT id, name, expertise, rating, created_at, updated_at
             FROM instructors WHERE id = $1",
        )
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Instructor::try_from).transpose()
    }

    async fn update_rating(
        &self,
        id: InstructorId,
        rating: Rating,
        updated_at: DateTime<Utc>,
    ) -> DomainResult<Instructor> {
        let row = sqlx::query_as::<_, InstructorRow>(
            "UPDATE instructors SET rating = $2, updated_at = $3 WHERE id = $1
             RETURNING id, name, expertise, rating, created_at, updated_at",
        )
        .bind(i64::from(id))
        .bind(rating.value())
        .bind(updated_at)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?
        .ok_or_else(|| DomainError::NotFound("instructor not found".into()))?;

        Instructor::try_from(row)
    }
}
