// tests/support/mocks/content_repo.rs
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use publishing_core::domain::content::{
    ContentFilter, ContentId, ContentItem, ContentKind, ContentReadRepository, ContentSlug,
    ContentUpdate, ContentWriteRepository, NewContentItem,
};
use publishing_core::domain::errors::{DomainError, DomainResult};
use publishing_core::domain::taxonomy::TermId;
use std::collections::{BTreeMap, HashSet};
use std::sync::Mutex;

/// Content store enforcing `(kind, slug)` uniqueness and optimistic updates
/// the way the Postgres schema does.
#[derive(Default)]
pub struct InMemoryContentRepo {
    state: Mutex<ContentState>,
}

#[derive(Default)]
struct ContentState {
    last_id: i64,
    items: BTreeMap<i64, ContentItem>,
}

impl InMemoryContentRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: ContentId) -> Option<ContentItem> {
        self.state.lock().unwrap().items.get(&id.0).cloned()
    }

    pub fn len(&self) -> usize {
        self.state.lock().unwrap().items.len()
    }

    pub fn slugs(&self, kind: ContentKind) -> Vec<String> {
        self.state
            .lock()
            .unwrap()
            .items
            .values()
            .filter(|item| item.kind == kind)
            .map(|item| item.slug.as_str().to_string())
            .collect()
    }

    /// Moves the stored `updated_at`, as a concurrent writer committing first would.
    pub fn touch(&self, id: ContentId, at: DateTime<Utc>) {
        if let Some(item) = self.state.lock().unwrap().items.get_mut(&id.0) {
            item.updated_at = at;
        }
    }

    /// Drops every reference to a deleted term, like the schema's
    /// `ON DELETE SET NULL` / `CASCADE` rules.
    pub fn detach_term(&self, id: TermId) {
        for item in self.state.lock().unwrap().items.values_mut() {
            if item.terms.category_id == Some(id) {
                item.terms.category_id = None;
            }
            item.terms.tag_ids.retain(|tag| *tag != id);
        }
    }
}

#[async_trait]
impl ContentWriteRepository for InMemoryContentRepo {
    async fn insert(&self, item: NewContentItem) -> DomainResult<ContentItem> {
        let mut state = self.state.lock().unwrap();
        if state
            .items
            .values()
            .any(|existing| existing.kind == item.kind && existing.slug == item.slug)
        {
            return Err(DomainError::conflict("slug already exists"));
        }

        state.last_id += 1;
        let created = ContentItem {
            id: ContentId(state.last_id),
            kind: item.kind,
            title: item.title,
            slug: item.slug,
            body: item.body,
            status: item.status,
            published_at: item.published_at,
            owner_id: item.owner_id,
            terms: item.terms,
            created_at: item.created_at,
            updated_at: item.updated_at,
        };
        state.items.insert(created.id.0, created.clone());
        Ok(created)
    }

    async fn update(&self, update: ContentUpdate) -> DomainResult<ContentItem> {
        let mut state = self.state.lock().unwrap();
        let item = state
            .items
            .get_mut(&update.id.0)
            .filter(|item| item.updated_at == update.original_updated_at)
            .ok_or_else(|| DomainError::conflict("content update conflict, please retry"))?;

        if let Some(title) = update.title {
            item.title = title;
        }
        if let Some(body) = update.body {
            item.body = body;
        }
        if let Some(publish) = update.publish_state {
            item.status = publish.status;
            item.published_at = publish.published_at;
        }
        if let Some(terms) = update.terms {
            item.terms = terms;
        }
        item.updated_at = update.updated_at;
        Ok(item.clone())
    }

    async fn delete(&self, id: ContentId) -> DomainResult<()> {
        self.state
            .lock()
            .unwrap()
            .items
            .remove(&id.0)
            .map(|_| ())
            .ok_or_else(|| DomainError::not_found("content not found"))
    }
}

#[async_trait]
impl ContentReadRepository for InMemoryContentRepo {
    async fn find_by_id(&self, id: ContentId) -> DomainResult<Option<ContentItem>> {
        Ok(self.get(id))
    }

    async fn find_by_slug(
        &self,
        kind: ContentKind,
        slug: &ContentSlug,
    ) -> DomainResult<Option<ContentItem>> {
        Ok(self
            .state
            .lock()
            .unwrap()
            .items
            .values()
            .find(|item| item.kind == kind && &item.slug == slug)
            .cloned())
    }

    async fn list_published(
        &self,
        kind: ContentKind,
        filter: ContentFilter,
    ) -> DomainResult<Vec<ContentItem>> {
        let search = filter.search.map(|s| s.to_lowercase());
        let mut items: Vec<ContentItem> = self
            .state
            .lock()
            .unwrap()
            .items
            .values()
            .filter(|item| item.kind == kind && item.is_published())
            .filter(|item| filter.owner_id.is_none_or(|owner| item.owner_id == owner))
            .filter(|item| {
                filter
                    .category_id
                    .is_none_or(|category| item.terms.category_id == Some(category))
            })
            .filter(|item| filter.tag_id.is_none_or(|tag| item.terms.has_tag(tag)))
            .filter(|item| {
                search
                    .as_deref()
                    .is_none_or(|needle| item.title.as_str().to_lowercase().contains(needle))
            })
            .cloned()
            .collect();

        items.sort_by(|a, b| {
            b.published_at
                .cmp(&a.published_at)
                .then(b.created_at.cmp(&a.created_at))
                .then(b.id.0.cmp(&a.id.0))
        });
        Ok(items)
    }

    async fn slugs_with_prefix(
        &self,
        kind: ContentKind,
        prefix: &str,
    ) -> DomainResult<HashSet<String>> {
        Ok(self
            .state
            .lock()
            .unwrap()
            .items
            .values()
            .filter(|item| item.kind == kind && item.slug.as_str().starts_with(prefix))
            .map(|item| item.slug.as_str().to_string())
            .collect())
    }
}
