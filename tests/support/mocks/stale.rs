// tests/support/mocks/stale.rs
use super::content_repo::InMemoryContentRepo;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use publishing_core::domain::content::{
    ContentId, ContentItem, ContentUpdate, ContentWriteRepository, NewContentItem,
};
use publishing_core::domain::errors::DomainResult;
use std::sync::Arc;

/// Lets another writer commit between the service's load and its update.
///
/// Every update first moves the stored `updated_at` to `bumped_to`, so the
/// guarded write compares against a timestamp that is no longer current.
pub struct StaleContentWrite {
    inner: Arc<InMemoryContentRepo>,
    bumped_to: DateTime<Utc>,
}

impl StaleContentWrite {
    pub fn new(inner: Arc<InMemoryContentRepo>, bumped_to: DateTime<Utc>) -> Self {
        Self { inner, bumped_to }
    }
}

#[async_trait]
impl ContentWriteRepository for StaleContentWrite {
    async fn insert(&self, item: NewContentItem) -> DomainResult<ContentItem> {
        self.inner.insert(item).await
    }

    async fn update(&self, update: ContentUpdate) -> DomainResult<ContentItem> {
        self.inner.touch(update.id, self.bumped_to);
        self.inner.update(update).await
    }

    async fn delete(&self, id: ContentId) -> DomainResult<()> {
        self.inner.delete(id).await
    }
}
