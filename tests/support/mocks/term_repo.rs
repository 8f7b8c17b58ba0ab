// tests/support/mocks/term_repo.rs
use super::content_repo::InMemoryContentRepo;
use async_trait::async_trait;
use publishing_core::domain::errors::{DomainError, DomainResult};
use publishing_core::domain::taxonomy::{
    NewTerm, Taxonomy, Term, TermId, TermRepository, TermSlug,
};
use std::collections::{BTreeMap, HashSet};
use std::sync::{Arc, Mutex};

/// Term store enforcing `(taxonomy, slug)` uniqueness. Deleting a term
/// detaches it from the content store.
pub struct InMemoryTermRepo {
    content: Arc<InMemoryContentRepo>,
    state: Mutex<(i64, BTreeMap<i64, Term>)>,
}

impl InMemoryTermRepo {
    pub fn new(content: Arc<InMemoryContentRepo>) -> Self {
        Self {
            content,
            state: Mutex::new((0, BTreeMap::new())),
        }
    }

    pub fn len(&self) -> usize {
        self.state.lock().unwrap().1.len()
    }
}

#[async_trait]
impl TermRepository for InMemoryTermRepo {
    async fn insert(&self, term: NewTerm) -> DomainResult<Term> {
        let mut state = self.state.lock().unwrap();
        if state
            .1
            .values()
            .any(|existing| existing.taxonomy == term.taxonomy && existing.slug == term.slug)
        {
            return Err(DomainError::conflict("term slug already exists"));
        }

        state.0 += 1;
        let created = Term {
            id: TermId(state.0),
            taxonomy: term.taxonomy,
            name: term.name,
            slug: term.slug,
            description: term.description,
            created_at: term.created_at,
        };
        state.1.insert(created.id.0, created.clone());
        Ok(created)
    }

    async fn delete(&self, id: TermId) -> DomainResult<()> {
        self.state
            .lock()
            .unwrap()
            .1
            .remove(&id.0)
            .ok_or_else(|| DomainError::not_found("term not found"))?;
        self.content.detach_term(id);
        Ok(())
    }

    async fn find_by_id(&self, id: TermId) -> DomainResult<Option<Term>> {
        Ok(self.state.lock().unwrap().1.get(&id.0).cloned())
    }

    async fn find_by_slug(
        &self,
        taxonomy: Taxonomy,
        slug: &TermSlug,
    ) -> DomainResult<Option<Term>> {
        Ok(self
            .state
            .lock()
            .unwrap()
            .1
            .values()
            .find(|term| term.taxonomy == taxonomy && &term.slug == slug)
            .cloned())
    }

    async fn list(&self, taxonomy: Taxonomy) -> DomainResult<Vec<Term>> {
        let mut terms: Vec<Term> = self
            .state
            .lock()
            .unwrap()
            .1
            .values()
            .filter(|term| term.taxonomy == taxonomy)
            .cloned()
            .collect();
        terms.sort_by(|a, b| {
            a.name
                .as_str()
                .cmp(b.name.as_str())
                .then(a.id.cmp(&b.id))
        });
        Ok(terms)
    }

    async fn slugs_with_prefix(
        &self,
        taxonomy: Taxonomy,
        prefix: &str,
    ) -> DomainResult<HashSet<String>> {
        Ok(self
            .state
            .lock()
            .unwrap()
            .1
            .values()
            .filter(|term| term.taxonomy == taxonomy && term.slug.as_str().starts_with(prefix))
            .map(|term| term.slug.as_str().to_string())
            .collect())
    }
}
