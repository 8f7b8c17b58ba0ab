// src/application/commands/taxonomy/service.rs
use std::sync::Arc;

use crate::{
    application::{
        error::{ApplicationError, ApplicationResult},
        ports::time::Clock,
    },
    domain::taxonomy::{Taxonomy, Term, TermId, TermRepository, services::TermSlugService},
};

pub struct TaxonomyCommandService {
    pub(super) repo: Arc<dyn TermRepository>,
    pub(super) slug_service: Arc<TermSlugService>,
    pub(super) clock: Arc<dyn Clock>,
    pub(super) slug_attempts: u32,
}

impl TaxonomyCommandService {
    pub fn new(
        repo: Arc<dyn TermRepository>,
        slug_service: Arc<TermSlugService>,
        clock: Arc<dyn Clock>,
        slug_attempts: u32,
    ) -> Self {
        Self {
            repo,
            slug_service,
            clock,
            slug_attempts: slug_attempts.max(1),
        }
    }

    /// Loads a term, treating a term of another taxonomy as missing.
    pub(super) async fn load(&self, taxonomy: Taxonomy, id: i64) -> ApplicationResult<Term> {
        let id = TermId::new(id)?;
        self.repo
            .find_by_id(id)
            .await?
            .filter(|term| term.taxonomy == taxonomy)
            .ok_or_else(|| ApplicationError::not_found(format!("{} not found", taxonomy.label())))
    }
}
