// src/application/commands/content/update.rs
use super::ContentCommandService;
use crate::{
    application::{dto::ContentDto, error::ApplicationResult},
    domain::content::{ContentBody, ContentKind, ContentTitle, ContentUpdate},
};

/// Edits title and/or body. The slug stays as it was assigned at creation.
pub struct UpdateContentCommand {
    pub kind: ContentKind,
    pub id: i64,
    pub title: Option<String>,
    pub body: Option<String>,
}

impl ContentCommandService {
    pub async fn update_content(
        &self,
        command: UpdateContentCommand,
    ) -> ApplicationResult<ContentDto> {
        let UpdateContentCommand {
            kind,
            id,
            title,
            body,
        } = command;

        let mut item = self.load(kind, id).await?;

        let title = title.map(|t| ContentTitle::new(kind, t)).transpose()?;
        let body = body.map(|b| ContentBody::new(kind, b)).transpose()?;
        if title.is_none() && body.is_none() {
            return Ok(item.into());
        }

        let mut update = ContentUpdate::new(item.id, item.updated_at);
        if let Some(title) = &title {
            update = update.with_title(title.clone());
        }
        if let Some(body) = &body {
            update = update.with_body(body.clone());
        }

        item.set_content(title, body, self.clock.now());
        update.set_updated_at(item.updated_at);

        let updated = self.write_repo.update(update).await?;
        tracing::info!(%kind, id = i64::from(updated.id), "content updated");
        Ok(updated.into())
    }
}
