// src/application/commands/content/service.rs
use std::sync::Arc;

use crate::{
    application::{
        error::{ApplicationError, ApplicationResult},
        ports::time::Clock,
    },
    domain::{
        content::{
            ContentId, ContentItem, ContentKind, ContentReadRepository, ContentWriteRepository,
            OwnerId, services::ContentSlugService,
        },
        review::{InstructorId, InstructorRepository, ReviewRepository},
        taxonomy::TermRepository,
    },
};

pub struct ContentCommandService {
    pub(super) write_repo: Arc<dyn ContentWriteRepository>,
    pub(super) read_repo: Arc<dyn ContentReadRepository>,
    pub(super) instructor_repo: Arc<dyn InstructorRepository>,
    pub(super) review_repo: Arc<dyn ReviewRepository>,
    pub(super) term_repo: Arc<dyn TermRepository>,
    pub(super) slug_service: Arc<ContentSlugService>,
    pub(super) clock: Arc<dyn Clock>,
    pub(super) slug_attempts: u32,
}

impl ContentCommandService {
    pub fn new(
        write_repo: Arc<dyn ContentWriteRepository>,
        read_repo: Arc<dyn ContentReadRepository>,
        instructor_repo: Arc<dyn InstructorRepository>,
        review_repo: Arc<dyn ReviewRepository>,
        term_repo: Arc<dyn TermRepository>,
        slug_service: Arc<ContentSlugService>,
        clock: Arc<dyn Clock>,
        slug_attempts: u32,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            instructor_repo,
            review_repo,
            term_repo,
            slug_service,
            clock,
            slug_attempts: slug_attempts.max(1),
        }
    }

    /// Loads an item, treating an item of another kind as missing.
    pub(super) async fn load(&self, kind: ContentKind, id: i64) -> ApplicationResult<ContentItem> {
        let id = ContentId::new(id)?;
        self.read_repo
            .find_by_id(id)
            .await?
            .filter(|item| item.kind == kind)
            .ok_or_else(|| ApplicationError::not_found(format!("{kind} not found")))
    }

    pub(super) async fn ensure_owner_exists(
        &self,
        kind: ContentKind,
        owner_id: OwnerId,
    ) -> ApplicationResult<()> {
        if kind != ContentKind::Course {
            return Ok(());
        }

        self.instructor_repo
            .find_by_id(InstructorId::from(owner_id))
            .await?
            .map(|_| ())
            .ok_or_else(|| ApplicationError::not_found("instructor not found"))
    }
}
