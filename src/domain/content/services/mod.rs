// src/domain/content/services/mod.rs
use std::sync::Arc;

use crate::domain::content::repository::ContentReadRepository;
use crate::domain::content::value_objects::{ContentKind, ContentSlug, ContentTitle};
use crate::domain::errors::DomainResult;
use crate::domain::slug::{SlugCandidates, generate_slug};

/// Domain service responsible for proposing unique slugs for content items.
pub struct ContentSlugService {
    read_repo: Arc<dyn ContentReadRepository>,
}

impl ContentSlugService {
    pub fn new(read_repo: Arc<dyn ContentReadRepository>) -> Self {
        Self { read_repo }
    }

    /// Picks a slug that is free in the current snapshot of `kind`.
    ///
    /// The snapshot may be stale by the time the item is written; the store's
    /// unique constraint has the final word.
    pub async fn propose(
        &self,
        kind: ContentKind,
        title: &ContentTitle,
    ) -> DomainResult<ContentSlug> {
        let max_len = kind.max_slug_len();
        let candidates = SlugCandidates::new(title.as_str(), max_len);
        let taken = self
            .read_repo
            .slugs_with_prefix(kind, candidates.shared_prefix())
            .await?;

        let slug = generate_slug(title.as_str(), &taken, max_len);
        tracing::debug!(%kind, %slug, taken = taken.len(), "proposed slug");
        ContentSlug::new(slug)
    }
}
