// src/application/commands/content/delete.rs
use super::ContentCommandService;
use crate::{
    application::{commands::reviews::refresh_rating, error::ApplicationResult},
    domain::{content::ContentKind, review::InstructorId},
};

pub struct DeleteContentCommand {
    pub kind: ContentKind,
    pub id: i64,
}

impl ContentCommandService {
    /// Deletes an item. Deleting a course drops its reviews, so the
    /// instructor's cached rating is rebuilt afterwards.
    pub async fn delete_content(&self, command: DeleteContentCommand) -> ApplicationResult<()> {
        let item = self.load(command.kind, command.id).await?;
        self.write_repo.delete(item.id).await?;
        tracing::info!(kind = %item.kind, id = i64::from(item.id), "content deleted");

        if item.kind == ContentKind::Course {
            refresh_rating(
                self.review_repo.as_ref(),
                self.instructor_repo.as_ref(),
                InstructorId::from(item.owner_id),
                self.clock.now(),
            )
            .await?;
        }
        Ok(())
    }
}
