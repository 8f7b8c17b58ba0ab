// src/application/commands/taxonomy/create.rs
use super::TaxonomyCommandService;
use crate::{
    application::{
        dto::TermDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::taxonomy::{NewTerm, Taxonomy, TermName},
};

pub struct CreateTermCommand {
    pub taxonomy: Taxonomy,
    pub name: String,
    pub description: String,
}

impl TaxonomyCommandService {
    /// Stores a term under a slug derived from its name, retrying on write-time
    /// slug collisions the same way content creation does.
    pub async fn create_term(&self, command: CreateTermCommand) -> ApplicationResult<TermDto> {
        let CreateTermCommand {
            taxonomy,
            name,
            description,
        } = command;

        let name = TermName::new(taxonomy, name)?;
        let slug = self.slug_service.propose(taxonomy, &name).await?;
        let mut pending = NewTerm {
            taxonomy,
            name,
            slug,
            description: description.trim().to_string(),
            created_at: self.clock.now(),
        };

        let mut attempt = 1;
        loop {
            match self.repo.insert(pending.clone()).await {
                Ok(created) => {
                    tracing::info!(
                        %taxonomy,
                        id = i64::from(created.id),
                        slug = %created.slug,
                        "term created"
                    );
                    return Ok(created.into());
                }
                Err(err) if err.is_conflict() && attempt < self.slug_attempts => {
                    tracing::warn!(
                        %taxonomy,
                        slug = %pending.slug,
                        attempt,
                        "term slug taken at write time, regenerating"
                    );
                    attempt += 1;
                    let slug = self.slug_service.propose(taxonomy, &pending.name).await?;
                    pending = pending.with_slug(slug);
                }
                Err(err) if err.is_conflict() => {
                    return Err(ApplicationError::conflict(format!(
                        "could not reserve a unique {} slug after {attempt} attempts",
                        taxonomy.label()
                    )));
                }
                Err(err) => return Err(err.into()),
            }
        }
    }
}
