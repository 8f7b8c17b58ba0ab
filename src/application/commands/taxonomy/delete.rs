// src/application/commands/taxonomy/delete.rs
use super::TaxonomyCommandService;
use crate::{application::error::ApplicationResult, domain::taxonomy::Taxonomy};

pub struct DeleteTermCommand {
    pub taxonomy: Taxonomy,
    pub id: i64,
}

impl TaxonomyCommandService {
    /// Deletes a term; items filed under it keep existing without it.
    pub async fn delete_term(&self, command: DeleteTermCommand) -> ApplicationResult<()> {
        let term = self.load(command.taxonomy, command.id).await?;
        self.repo.delete(term.id).await?;
        tracing::info!(taxonomy = %term.taxonomy, id = i64::from(term.id), "term deleted");
        Ok(())
    }
}
