// src/domain/taxonomy/entity.rs
use crate::domain::taxonomy::value_objects::{Taxonomy, TermId, TermName, TermSlug};
use chrono::{DateTime, Utc};

/// A category or tag that content items can be filed under.
#[derive(Debug, Clone)]
pub struct Term {
    pub id: TermId,
    pub taxonomy: Taxonomy,
    pub name: TermName,
    pub slug: TermSlug,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewTerm {
    pub taxonomy: Taxonomy,
    pub name: TermName,
    pub slug: TermSlug,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

impl NewTerm {
    pub fn with_slug(mut self, slug: TermSlug) -> Self {
        self.slug = slug;
        self
    }
}
