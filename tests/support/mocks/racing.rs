// tests/support/mocks/racing.rs
use super::content_repo::InMemoryContentRepo;
use async_trait::async_trait;
use publishing_core::domain::content::{
    ContentId, ContentItem, ContentUpdate, ContentWriteRepository, NewContentItem,
};
use publishing_core::domain::errors::{DomainError, DomainResult};
use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};

/// Loses the first `losses` inserts to a competing writer.
///
/// Each lost insert stores a competitor item under the requested slug and
/// reports a conflict, as a concurrent request committing first would.
pub struct RacingContentWrite {
    inner: Arc<InMemoryContentRepo>,
    losses: AtomicU32,
    attempts: AtomicU32,
}

impl RacingContentWrite {
    pub fn new(inner: Arc<InMemoryContentRepo>, losses: u32) -> Self {
        Self {
            inner,
            losses: AtomicU32::new(losses),
            attempts: AtomicU32::new(0),
        }
    }

    pub fn attempts(&self) -> u32 {
        self.attempts.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ContentWriteRepository for RacingContentWrite {
    async fn insert(&self, item: NewContentItem) -> DomainResult<ContentItem> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        let lost = self
            .losses
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok();
        if lost {
            self.inner.insert(item).await?;
            return Err(DomainError::conflict("slug already exists"));
        }
        self.inner.insert(item).await
    }

    async fn update(&self, update: ContentUpdate) -> DomainResult<ContentItem> {
        self.inner.update(update).await
    }

    async fn delete(&self, id: ContentId) -> DomainResult<()> {
        self.inner.delete(id).await
    }
}
