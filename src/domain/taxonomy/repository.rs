// src/domain/taxonomy/repository.rs
use crate::domain::errors::DomainResult;
use crate::domain::taxonomy::entity::{NewTerm, Term};
use crate::domain::taxonomy::value_objects::{Taxonomy, TermId, TermSlug};
use async_trait::async_trait;
use std::collections::HashSet;

#[async_trait]
pub trait TermRepository: Send + Sync {
    /// Fails with `DomainError::Conflict` when `(taxonomy, slug)` is already taken.
    async fn insert(&self, term: NewTerm) -> DomainResult<Term>;
    /// Content filed under the term loses the reference.
    async fn delete(&self, id: TermId) -> DomainResult<()>;
    async fn find_by_id(&self, id: TermId) -> DomainResult<Option<Term>>;
    async fn find_by_slug(
        &self,
        taxonomy: Taxonomy,
        slug: &TermSlug,
    ) -> DomainResult<Option<Term>>;
    /// Terms of `taxonomy` ordered by name.
    async fn list(&self, taxonomy: Taxonomy) -> DomainResult<Vec<Term>>;
    async fn slugs_with_prefix(
        &self,
        taxonomy: Taxonomy,
        prefix: &str,
    ) -> DomainResult<HashSet<String>>;
}
