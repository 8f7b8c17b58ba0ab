// src/infrastructure/repositories/postgres_taxonomy.rs
use super::{like_prefix, map_sqlx};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::taxonomy::{NewTerm, Taxonomy, Term, TermId, TermName, TermRepository, TermSlug};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use std::collections::HashSet;

const TERM_COLUMNS: &str = "id, taxonomy, name, slug, description, created_at";

#[derive(Clone)]
pub struct PostgresTermRepository {
    pool: PgPool,
}

impl PostgresTermRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct TermRow {
    id: i64,
    taxonomy: String,
    name: String,
    slug: String,
    description: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<TermRow> for Term {
    type Error = DomainError;

    fn try_from(row: TermRow) -> Result<Self, Self::Error> {
        Ok(Term {
            id: TermId::new(row.id)?,
            taxonomy: row.taxonomy.parse()?,
            name: TermName::from_stored(row.name),
            slug: TermSlug::new(row.slug)?,
            description: row.description,
            created_at: row.created_at,
        })
    }
}

#[async_trait]
impl TermRepository for PostgresTermRepository {
    async fn insert(&self, term: NewTerm) -> DomainResult<Term> {
        let row = sqlx::query_as::<_, TermRow>(&format!(
            "INSERT INTO taxonomy_terms (taxonomy, name, slug, description, created_at)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {TERM_COLUMNS}"
        ))
        .bind(term.taxonomy.as_str())
        .bind(term.name.as_str())
        .bind(term.slug.as_str())
        .bind(&term.description)
        .bind(term.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Term::try_from(row)
    }

    async fn delete(&self, id: TermId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM taxonomy_terms WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("term not found".into()));
        }
        Ok(())
    }

    async fn find_by_id(&self, id: TermId) -> DomainResult<Option<Term>> {
        let row = sqlx::query_as::<_, TermRow>(&format!(
            "SELECT {TERM_COLUMNS} FROM taxonomy_terms WHERE id = $1"
        ))
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Term::try_from).transpose()
    }

    async fn find_by_slug(
        &self,
        taxonomy: Taxonomy,
        slug: &TermSlug,
    ) -> DomainResult<Option<Term>> {
        let row = sqlx::query_as::<_, TermRow>(&format!(
            "SELECT {TERM_COLUMNS} FROM taxonomy_terms WHERE taxonomy = $1 AND slug = $2"
        ))
        .bind(taxonomy.as_str())
        .bind(slug.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Term::try_from).transpose()
    }

    async fn list(&self, taxonomy: Taxonomy) -> DomainResult<Vec<Term>> {
        let rows = sqlx::query_as::<_, TermRow>(&format!(
            "SELECT {TERM_COLUMNS} FROM taxonomy_terms WHERE taxonomy = $1 ORDER BY name, id"
        ))
        .bind(taxonomy.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter()
            .map(Term::try_from)
            .collect::<Result<Vec<_>, _>>()
    }

    async fn slugs_with_prefix(
        &self,
        taxonomy: Taxonomy,
        prefix: &str,
    ) -> DomainResult<HashSet<String>> {
        let slugs = sqlx::query_scalar::<_, String>(
            "SELECT slug FROM taxonomy_terms WHERE taxonomy = $1 AND slug LIKE $2",
        )
        .bind(taxonomy.as_str())
        .bind(like_prefix(prefix))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(slugs.into_iter().collect())
    }
}
