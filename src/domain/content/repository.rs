// src/domain/content/repository.rs
use crate::domain::content::entity::{ContentItem, ContentUpdate, NewContentItem};
use crate::domain::content::value_objects::{ContentId, ContentKind, ContentSlug, OwnerId};
use crate::domain::errors::DomainResult;
use crate::domain::taxonomy::TermId;
use async_trait::async_trait;
use std::collections::HashSet;

#[derive(Debug, Clone, Default)]
pub struct ContentFilter {
    pub search: Option<String>,
    pub owner_id: Option<OwnerId>,
    pub category_id: Option<TermId>,
    pub tag_id: Option<TermId>,
}

#[async_trait]
pub trait ContentWriteRepository: Send + Sync {
    /// Fails with `DomainError::Conflict` when `(kind, slug)` is already taken.
    async fn insert(&self, item: NewContentItem) -> DomainResult<ContentItem>;
    /// Fails with `DomainError::Conflict` when the row changed since it was read.
    async fn update(&self, update: ContentUpdate) -> DomainResult<ContentItem>;
    async fn delete(&self, id: ContentId) -> DomainResult<()>;
}

#[async_trait]
pub trait ContentReadRepository: Send + Sync {
    async fn find_by_id(&self, id: ContentId) -> DomainResult<Option<ContentItem>>;
    async fn find_by_slug(
        &self,
        kind: ContentKind,
        slug: &ContentSlug,
    ) -> DomainResult<Option<ContentItem>>;
    /// Published items of `kind`, newest publication first.
    async fn list_published(
        &self,
        kind: ContentKind,
        filter: ContentFilter,
    ) -> DomainResult<Vec<ContentItem>>;
    /// Every slug of `kind` that starts with `prefix`.
    async fn slugs_with_prefix(
        &self,
        kind: ContentKind,
        prefix: &str,
    ) -> DomainResult<HashSet<String>>;
}
