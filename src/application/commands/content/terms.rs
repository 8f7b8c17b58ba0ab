// src/application/commands/content/terms.rs
use super::ContentCommandService;
use crate::{
    application::{
        dto::ContentDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        content::{ContentKind, ContentUpdate, TermAssignment},
        taxonomy::{Taxonomy, TermId},
    },
};

/// Replaces the category and tags of an item.
pub struct SetContentTermsCommand {
    pub kind: ContentKind,
    pub id: i64,
    pub category_id: Option<i64>,
    pub tag_ids: Vec<i64>,
}

impl ContentCommandService {
    pub async fn set_terms(
        &self,
        command: SetContentTermsCommand,
    ) -> ApplicationResult<ContentDto> {
        let SetContentTermsCommand {
            kind,
            id,
            category_id,
            tag_ids,
        } = command;

        let item = self.load(kind, id).await?;
        let terms = self.resolve_terms(kind, category_id, &tag_ids).await?;
        if item.terms == terms {
            return Ok(item.into());
        }

        let mut update = ContentUpdate::new(item.id, item.updated_at).with_terms(terms);
        update.set_updated_at(self.clock.now());

        let updated = self.write_repo.update(update).await?;
        tracing::info!(
            %kind,
            id = i64::from(updated.id),
            category_id = ?updated.terms.category_id.map(i64::from),
            tags = updated.terms.tag_ids.len(),
            "content terms replaced"
        );
        Ok(updated.into())
    }

    /// Checks that every referenced term exists in the vocabulary `kind` uses.
    pub(super) async fn resolve_terms(
        &self,
        kind: ContentKind,
        category_id: Option<i64>,
        tag_ids: &[i64],
    ) -> ApplicationResult<TermAssignment> {
        let category_id = match category_id {
            Some(id) => Some(self.expect_term(kind.category_taxonomy(), id).await?),
            None => None,
        };

        if !tag_ids.is_empty() && !kind.accepts_tags() {
            return Err(ApplicationError::validation(format!(
                "{kind} items cannot be tagged"
            )));
        }

        let mut tags = Vec::with_capacity(tag_ids.len());
        for &id in tag_ids {
            tags.push(self.expect_term(Taxonomy::Tag, id).await?);
        }

        Ok(TermAssignment::new(category_id, tags))
    }

    async fn expect_term(&self, taxonomy: Taxonomy, id: i64) -> ApplicationResult<TermId> {
        let id = TermId::new(id)?;
        match self.term_repo.find_by_id(id).await? {
            Some(term) if term.taxonomy == taxonomy => Ok(term.id),
            Some(term) => Err(ApplicationError::validation(format!(
                "term {} is a {}, expected a {}",
                id.0,
                term.taxonomy.label(),
                taxonomy.label()
            ))),
            None => Err(ApplicationError::not_found(format!(
                "{} not found",
                taxonomy.label()
            ))),
        }
    }
}
