use super::ContentQueryService;
use crate::{
    application::{
        dto::ContentDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::content::{ContentKind, ContentSlug},
};

pub struct GetContentBySlugQuery {
    pub kind: ContentKind,
    pub slug: String,
}

impl ContentQueryService {
    /// Only published items are visible through their public slug.
    pub async fn get_content_by_slug(
        &self,
        query: GetContentBySlugQuery,
    ) -> ApplicationResult<ContentDto> {
        let not_found = || ApplicationError::not_found(format!("{} not found", query.kind));

        let Ok(slug) = ContentSlug::new(query.slug.clone()) else {
            return Err(not_found());
        };

        self.read_repo
            .find_by_slug(query.kind, &slug)
            .await?
            .filter(|item| item.is_published())
            .map(Into::into)
            .ok_or_else(not_found)
    }
}
