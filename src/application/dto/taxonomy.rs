use crate::domain::taxonomy::Term;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TermDto {
    pub id: i64,
    /// `category`, `tag` or `course_category`.
    pub taxonomy: String,
    pub name: String,
    pub slug: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

impl From<Term> for TermDto {
    fn from(term: Term) -> Self {
        Self {
            id: term.id.into(),
            taxonomy: term.taxonomy.as_str().to_string(),
            name: term.name.into_inner(),
            slug: term.slug.into_inner(),
            description: term.description,
            created_at: term.created_at,
        }
    }
}
