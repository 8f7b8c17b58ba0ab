use super::ContentQueryService;
use crate::{
    application::{
        dto::ContentDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::content::{ContentId, ContentKind},
};

pub struct GetContentByIdQuery {
    pub kind: ContentKind,
    pub id: i64,
}

impl ContentQueryService {
    /// Any status is returned; drafts are reachable by id for editing.
    pub async fn get_content_by_id(
        &self,
        query: GetContentByIdQuery,
    ) -> ApplicationResult<ContentDto> {
        let id = ContentId::new(query.id)?;
        self.read_repo
            .find_by_id(id)
            .await?
            .filter(|item| item.kind == query.kind)
            .map(Into::into)
            .ok_or_else(|| ApplicationError::not_found(format!("{} not found", query.kind)))
    }
}
