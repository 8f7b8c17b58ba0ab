// src/application/commands/content/status.rs
use super::ContentCommandService;
use crate::{
    application::{dto::ContentDto, error::ApplicationResult},
    domain::content::{ContentKind, ContentStatus, ContentUpdate, apply_status},
};

pub struct SetContentStatusCommand {
    pub kind: ContentKind,
    pub id: i64,
    pub status: String,
}

impl ContentCommandService {
    pub async fn set_status(
        &self,
        command: SetContentStatusCommand,
    ) -> ApplicationResult<ContentDto> {
        let requested: ContentStatus = command.status.parse()?;
        let item = self.load(command.kind, command.id).await?;

        if item.status == requested {
            return Ok(item.into());
        }

        let now = self.clock.now();
        let original_updated_at = item.updated_at;
        let mut item = apply_status(item, requested, || now)?;
        item.updated_at = now;

        let mut update = ContentUpdate::new(item.id, original_updated_at)
            .with_publish_state(item.status, item.published_at);
        update.set_updated_at(item.updated_at);

        let updated = self.write_repo.update(update).await?;
        tracing::info!(
            kind = %updated.kind,
            id = i64::from(updated.id),
            status = %updated.status,
            "content status changed"
        );
        Ok(updated.into())
    }
}
