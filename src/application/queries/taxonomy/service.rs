use std::sync::Arc;

use crate::{
    application::{
        dto::TermDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::taxonomy::{Taxonomy, TermRepository, TermSlug},
};

pub struct TaxonomyQueryService {
    repo: Arc<dyn TermRepository>,
}

impl TaxonomyQueryService {
    pub fn new(repo: Arc<dyn TermRepository>) -> Self {
        Self { repo }
    }

    pub async fn list_terms(&self, taxonomy: Taxonomy) -> ApplicationResult<Vec<TermDto>> {
        let terms = self.repo.list(taxonomy).await?;
        Ok(terms.into_iter().map(Into::into).collect())
    }

    pub async fn get_term_by_slug(
        &self,
        taxonomy: Taxonomy,
        slug: String,
    ) -> ApplicationResult<TermDto> {
        let not_found = || ApplicationError::not_found(format!("{} not found", taxonomy.label()));

        let Ok(slug) = TermSlug::new(slug) else {
            return Err(not_found());
        };

        self.repo
            .find_by_slug(taxonomy, &slug)
            .await?
            .map(Into::into)
            .ok_or_else(not_found)
    }
}
