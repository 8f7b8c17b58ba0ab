// src/domain/content/entity.rs
use crate::domain::content::status::{ContentStatus, PublicationState};
use crate::domain::content::value_objects::{
    ContentBody, ContentId, ContentKind, ContentSlug, ContentTitle, OwnerId,
};
use crate::domain::taxonomy::TermId;
use chrono::{DateTime, Utc};

/// A post or a course.
#[derive(Debug, Clone)]
pub struct ContentItem {
    pub id: ContentId,
    pub kind: ContentKind,
    pub title: ContentTitle,
    pub slug: ContentSlug,
    pub body: ContentBody,
    pub status: ContentStatus,
    pub published_at: Option<DateTime<Utc>>,
    pub owner_id: OwnerId,
    pub terms: TermAssignment,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ContentItem {
    pub fn is_published(&self) -> bool {
        self.status == ContentStatus::Published
    }

    pub const fn publication(&self) -> PublicationState {
        PublicationState::new(self.status, self.published_at)
    }

    pub fn set_content(
        &mut self,
        title: Option<ContentTitle>,
        body: Option<ContentBody>,
        now: DateTime<Utc>,
    ) {
        if let Some(title) = title {
            self.title = title;
        }
        if let Some(body) = body {
            self.body = body;
        }
        self.updated_at = now;
    }
}

/// Category and tags an item is filed under.
///
/// Tag ids are kept sorted and free of duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TermAssignment {
    pub category_id: Option<TermId>,
    pub tag_ids: Vec<TermId>,
}

impl TermAssignment {
    pub fn new(category_id: Option<TermId>, mut tag_ids: Vec<TermId>) -> Self {
        tag_ids.sort_unstable();
        tag_ids.dedup();
        Self {
            category_id,
            tag_ids,
        }
    }

    pub fn has_tag(&self, tag_id: TermId) -> bool {
        self.tag_ids.binary_search(&tag_id).is_ok()
    }
}

/// Draft of an item that has not been stored yet.
///
/// The slug is filled in right before the insert, so it can be regenerated
/// when the store reports a collision.
#[derive(Debug, Clone)]
pub struct NewContentItem {
    pub kind: ContentKind,
    pub title: ContentTitle,
    pub slug: ContentSlug,
    pub body: ContentBody,
    pub status: ContentStatus,
    pub published_at: Option<DateTime<Utc>>,
    pub owner_id: OwnerId,
    pub terms: TermAssignment,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl NewContentItem {
    pub fn with_slug(mut self, slug: ContentSlug) -> Self {
        self.slug = slug;
        self
    }
}

#[derive(Debug, Clone)]
pub struct PublishStateUpdate {
    pub status: ContentStatus,
    pub published_at: Option<DateTime<Utc>>,
}

/// Partial update applied only if the row still carries `original_updated_at`.
#[derive(Debug, Clone)]
pub struct ContentUpdate {
    pub id: ContentId,
    pub title: Option<ContentTitle>,
    pub body: Option<ContentBody>,
    pub publish_state: Option<PublishStateUpdate>,
    /// Replaces the whole assignment when present.
    pub terms: Option<TermAssignment>,
    pub original_updated_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ContentUpdate {
    pub fn new(id: ContentId, original_updated_at: DateTime<Utc>) -> Self {
        Self {
            id,
            title: None,
            body: None,
            publish_state: None,
            terms: None,
            original_updated_at,
            updated_at: original_updated_at,
        }
    }

    pub fn with_title(mut self, title: ContentTitle) -> Self {
        self.title = Some(title);
        self
    }

    pub fn with_body(mut self, body: ContentBody) -> Self {
        self.body = Some(body);
        self
    }

    pub fn with_publish_state(
        mut self,
        status: ContentStatus,
        published_at: Option<DateTime<Utc>>,
    ) -> Self {
        self.publish_state = Some(PublishStateUpdate {
            status,
            published_at,
        });
        self
    }

    pub fn with_terms(mut self, terms: TermAssignment) -> Self {
        self.terms = Some(terms);
        self
    }

    pub fn set_updated_at(&mut self, updated_at: DateTime<Utc>) {
        self.updated_at = updated_at;
    }
}
