// src/domain/taxonomy/services.rs
use std::sync::Arc;

use crate::domain::errors::DomainResult;
use crate::domain::slug::{SlugCandidates, generate_slug};
use crate::domain::taxonomy::repository::TermRepository;
use crate::domain::taxonomy::value_objects::{Taxonomy, TermName, TermSlug};

/// Proposes slugs for new terms, bounded by the taxonomy's slug limit.
pub struct TermSlugService {
    repo: Arc<dyn TermRepository>,
}

impl TermSlugService {
    pub fn new(repo: Arc<dyn TermRepository>) -> Self {
        Self { repo }
    }

    pub async fn propose(&self, taxonomy: Taxonomy, name: &TermName) -> DomainResult<TermSlug> {
        let max_len = taxonomy.max_slug_len();
        let candidates = SlugCandidates::new(name.as_str(), max_len);
        let taken = self
            .repo
            .slugs_with_prefix(taxonomy, candidates.shared_prefix())
            .await?;

        let slug = generate_slug(name.as_str(), &taken, max_len);
        tracing::debug!(%taxonomy, %slug, taken = taken.len(), "proposed term slug");
        TermSlug::new(slug)
    }
}
