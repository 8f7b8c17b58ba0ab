use super::ContentQueryService;
use crate::{
    application::{dto::ContentDto, error::ApplicationResult},
    domain::{
        content::{ContentFilter, ContentKind, OwnerId},
        taxonomy::TermId,
    },
};

pub struct ListContentQuery {
    pub kind: ContentKind,
    pub search: Option<String>,
    pub owner_id: Option<i64>,
    pub category_id: Option<i64>,
    pub tag_id: Option<i64>,
}

impl ContentQueryService {
    pub async fn list_published(
        &self,
        query: ListContentQuery,
    ) -> ApplicationResult<Vec<ContentDto>> {
        let search = query
            .search
            .map(|q| q.trim().to_string())
            .filter(|q| !q.is_empty());
        let owner_id = query.owner_id.map(OwnerId::new).transpose()?;
        let category_id = query.category_id.map(TermId::new).transpose()?;
        let tag_id = query.tag_id.map(TermId::new).transpose()?;

        let filter = ContentFilter {
            search,
            owner_id,
            category_id,
            tag_id,
        };
        let items = self.read_repo.list_published(query.kind, filter).await?;

        Ok(items.into_iter().map(Into::into).collect())
    }
}
