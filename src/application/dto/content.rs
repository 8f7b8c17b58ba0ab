use crate::domain::content::ContentItem;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ContentDto {
    pub id: i64,
    /// `post` or `course`.
    pub kind: String,
    pub title: String,
    pub slug: String,
    pub body: String,
    /// `draft`, `published` or `archived`.
    pub status: String,
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
    pub owner_id: i64,
    #[serde(default)]
    pub category_id: Option<i64>,
    /// Ascending tag ids; always empty for courses.
    #[serde(default)]
    pub tag_ids: Vec<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<ContentItem> for ContentDto {
    fn from(item: ContentItem) -> Self {
        Self {
            id: item.id.into(),
            kind: item.kind.as_str().to_string(),
            title: item.title.into_inner(),
            slug: item.slug.into_inner(),
            body: item.body.into_inner(),
            status: item.status.as_str().to_string(),
            published_at: item.published_at,
            owner_id: item.owner_id.into(),
            category_id: item.terms.category_id.map(i64::from),
            tag_ids: item.terms.tag_ids.into_iter().map(i64::from).collect(),
            created_at: item.created_at,
            updated_at: item.updated_at,
        }
    }
}
