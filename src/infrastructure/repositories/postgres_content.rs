// src/infrastructure/repositories/postgres_content.rs
use super::{like_prefix, map_sqlx};
use crate::domain::content::{
    ContentBody, ContentFilter, ContentId, ContentItem, ContentKind, ContentReadRepository,
    ContentSlug, ContentStatus, ContentTitle, ContentUpdate, ContentWriteRepository,
    NewContentItem, OwnerId, TermAssignment,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::taxonomy::TermId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgExecutor, PgPool, Postgres, QueryBuilder, Transaction};
use std::collections::HashSet;

/// Columns of `content_items c`, with the item's tag ids folded into an array.
const CONTENT_COLUMNS: &str = "c.id, c.kind, c.title, c.slug, c.body, c.status, c.published_at, \
     c.owner_id, c.category_id, \
     ARRAY(SELECT t.term_id FROM content_tags t WHERE t.content_id = c.id ORDER BY t.term_id) AS tag_ids, \
     c.created_at, c.updated_at";

#[derive(Clone)]
pub struct PostgresContentWriteRepository {
    pool: PgPool,
}

impl PostgresContentWriteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresContentReadRepository {
    pool: PgPool,
}

impl PostgresContentReadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ContentRow {
    id: i64,
    kind: String,
    title: String,
    slug: String,
    body: String,
    status: String,
    published_at: Option<DateTime<Utc>>,
    owner_id: i64,
    category_id: Option<i64>,
    tag_ids: Vec<i64>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<ContentRow> for ContentItem {
    type Error = DomainError;

    fn try_from(row: ContentRow) -> Result<Self, Self::Error> {
        let category_id = row.category_id.map(TermId::new).transpose()?;
        let tag_ids = row
            .tag_ids
            .into_iter()
            .map(TermId::new)
            .collect::<DomainResult<Vec<_>>>()?;

        Ok(ContentItem {
            id: ContentId::new(row.id)?,
            kind: row.kind.parse()?,
            title: ContentTitle::from_stored(row.title)?,
            slug: ContentSlug::new(row.slug)?,
            body: ContentBody::from_stored(row.body),
            status: row.status.parse()?,
            published_at: row.published_at,
            owner_id: OwnerId::new(row.owner_id)?,
            terms: TermAssignment::new(category_id, tag_ids),
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

async fn select_by_id<'e, E>(executor: E, id: i64) -> DomainResult<Option<ContentItem>>
where
    E: PgExecutor<'e>,
{
    let row = sqlx::query_as::<_, ContentRow>(&format!(
        "SELECT {CONTENT_COLUMNS} FROM content_items c WHERE c.id = $1"
    ))
    .bind(id)
    .fetch_optional(executor)
    .await
    .map_err(map_sqlx)?;

    row.map(ContentItem::try_from).transpose()
}

async fn replace_tags(
    tx: &mut Transaction<'_, Postgres>,
    content_id: i64,
    tag_ids: &[TermId],
) -> DomainResult<()> {
    sqlx::query("DELETE FROM content_tags WHERE content_id = $1")
        .bind(content_id)
        .execute(&mut **tx)
        .await
        .map_err(map_sqlx)?;

    if tag_ids.is_empty() {
        return Ok(());
    }

    let ids: Vec<i64> = tag_ids.iter().copied().map(i64::from).collect();
    sqlx::query("INSERT INTO content_tags (content_id, term_id) SELECT $1, UNNEST($2::BIGINT[])")
        .bind(content_id)
        .bind(ids)
        .execute(&mut **tx)
        .await
        .map_err(map_sqlx)?;
    Ok(())
}

async fn reload(tx: &mut Transaction<'_, Postgres>, id: i64) -> DomainResult<ContentItem> {
    select_by_id(&mut **tx, id)
        .await?
        .ok_or_else(|| {
            DomainError::Persistence("content row vanished inside its transaction".into())
        })
}

#[async_trait]
impl ContentWriteRepository for PostgresContentWriteRepository {
    async fn insert(&self, item: NewContentItem) -> DomainResult<ContentItem> {
        let NewContentItem {
            kind,
            title,
            slug,
            body,
            status,
            published_at,
            owner_id,
            terms,
            created_at,
            updated_at,
        } = item;

        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        let id = sqlx::query_scalar::<_, i64>(
            "INSERT INTO content_items
                 (kind, title, slug, body, status, published_at, owner_id, category_id, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
             RETURNING id",
        )
        .bind(kind.as_str())
        .bind(title.as_str())
        .bind(slug.as_str())
        .bind(body.as_str())
        .bind(status.as_str())
        .bind(published_at)
        .bind(i64::from(owner_id))
        .bind(terms.category_id.map(i64::from))
        .bind(created_at)
        .bind(updated_at)
        .fetch_one(&mut *tx)
        .await
        .map_err(map_sqlx)?;

        replace_tags(&mut tx, id, &terms.tag_ids).await?;
        let created = reload(&mut tx, id).await?;
        tx.commit().await.map_err(map_sqlx)?;
        Ok(created)
    }

    async fn update(&self, update: ContentUpdate) -> DomainResult<ContentItem> {
        let ContentUpdate {
            id,
            title,
            body,
            publish_state,
            terms,
            original_updated_at,
            updated_at,
        } = update;

        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("UPDATE content_items SET updated_at = ");
        builder.push_bind(updated_at);

        if let Some(title) = title {
            builder.push(", title = ");
            builder.push_bind(title.into_inner());
        }

        if let Some(body) = body {
            builder.push(", body = ");
            builder.push_bind(body.into_inner());
        }

        if let Some(state) = publish_state {
            builder.push(", status = ");
            builder.push_bind(state.status.as_str());
            builder.push(", published_at = ");
            builder.push_bind(state.published_at);
        }

        if let Some(terms) = &terms {
            builder.push(", category_id = ");
            builder.push_bind(terms.category_id.map(i64::from));
        }

        builder.push(" WHERE id = ");
        builder.push_bind(i64::from(id));
        builder.push(" AND updated_at = ");
        builder.push_bind(original_updated_at);
        builder.push(" RETURNING id");

        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        let matched = builder
            .build_query_scalar::<i64>()
            .fetch_optional(&mut *tx)
            .await
            .map_err(map_sqlx)?;
        let row_id = matched
            .ok_or_else(|| DomainError::Conflict("content update conflict, please retry".into()))?;

        if let Some(terms) = terms {
            replace_tags(&mut tx, row_id, &terms.tag_ids).await?;
        }

        let updated = reload(&mut tx, row_id).await?;
        tx.commit().await.map_err(map_sqlx)?;
        Ok(updated)
    }

    async fn delete(&self, id: ContentId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM content_items WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("content not found".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl ContentReadRepository for PostgresContentReadRepository {
    async fn find_by_id(&self, id: ContentId) -> DomainResult<Option<ContentItem>> {
        select_by_id(&self.pool, i64::from(id)).await
    }

    async fn find_by_slug(
        &self,
        kind: ContentKind,
        slug: &ContentSlug,
    ) -> DomainResult<Option<ContentItem>> {
        let row = sqlx::query_as::<_, ContentRow>(&format!(
            "SELECT {CONTENT_COLUMNS} FROM content_items c WHERE c.kind = $1 AND c.slug = $2"
        ))
        .bind(kind.as_str())
        .bind(slug.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(ContentItem::try_from).transpose()
    }

    async fn list_published(
        &self,
        kind: ContentKind,
        filter: ContentFilter,
    ) -> DomainResult<Vec<ContentItem>> {
        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new("SELECT ");
        builder.push(CONTENT_COLUMNS);
        builder.push(" FROM content_items c WHERE c.kind = ");
        builder.push_bind(kind.as_str());
        builder.push(" AND c.status = ");
        builder.push_bind(ContentStatus::Published.as_str());

        if let Some(owner_id) = filter.owner_id {
            builder.push(" AND c.owner_id = ");
            builder.push_bind(i64::from(owner_id));
        }

        if let Some(category_id) = filter.category_id {
            builder.push(" AND c.category_id = ");
            builder.push_bind(i64::from(category_id));
        }

        if let Some(tag_id) = filter.tag_id {
            builder.push(
                " AND EXISTS (SELECT 1 FROM content_tags t WHERE t.content_id = c.id AND t.term_id = ",
            );
            builder.push_bind(i64::from(tag_id));
            builder.push(")");
        }

        if let Some(search) = filter.search {
            let pattern = format!("%{}", like_prefix(&search));
            builder.push(" AND c.title ILIKE ");
            builder.push_bind(pattern);
        }

        builder.push(" ORDER BY c.published_at DESC, c.created_at DESC, c.id DESC");

        let rows = builder
            .build_query_as::<ContentRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter()
            .map(ContentItem::try_from)
            .collect::<Result<Vec<_>, _>>()
    }

    async fn slugs_with_prefix(
        &self,
        kind: ContentKind,
        prefix: &str,
    ) -> DomainResult<HashSet<String>> {
        let slugs = sqlx::query_scalar::<_, String>(
            "SELECT slug FROM content_items WHERE kind = $1 AND slug LIKE $2",
        )
        .bind(kind.as_str())
        .bind(like_prefix(prefix))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(slugs.into_iter().collect())
    }
}
