// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::{
            content::ContentCommandService, reviews::ReviewCommandService,
            taxonomy::TaxonomyCommandService,
        },
        ports::time::Clock,
        queries::{
            content::ContentQueryService, reviews::ReviewQueryService,
            taxonomy::TaxonomyQueryService,
        },
    },
    domain::{
        content::{ContentReadRepository, ContentWriteRepository, services::ContentSlugService},
        review::{InstructorRepository, ReviewRepository},
        taxonomy::{TermRepository, services::TermSlugService},
    },
};

pub struct ApplicationServices {
    pub content_commands: Arc<ContentCommandService>,
    pub content_queries: Arc<ContentQueryService>,
    pub review_commands: Arc<ReviewCommandService>,
    pub review_queries: Arc<ReviewQueryService>,
    pub taxonomy_commands: Arc<TaxonomyCommandService>,
    pub taxonomy_queries: Arc<TaxonomyQueryService>,
}

impl ApplicationServices {
    pub fn new(
        content_write_repo: Arc<dyn ContentWriteRepository>,
        content_read_repo: Arc<dyn ContentReadRepository>,
        review_repo: Arc<dyn ReviewRepository>,
        instructor_repo: Arc<dyn InstructorRepository>,
        term_repo: Arc<dyn TermRepository>,
        clock: Arc<dyn Clock>,
        slug_attempts: u32,
    ) -> Self {
        let slug_service = Arc::new(ContentSlugService::new(Arc::clone(&content_read_repo)));

        let content_commands = Arc::new(ContentCommandService::new(
            Arc::clone(&content_write_repo),
            Arc::clone(&content_read_repo),
            Arc::clone(&instructor_repo),
            Arc::clone(&review_repo),
            Arc::clone(&term_repo),
            Arc::clone(&slug_service),
            Arc::clone(&clock),
            slug_attempts,
        ));
        let content_queries = Arc::new(ContentQueryService::new(Arc::clone(&content_read_repo)));

        let review_commands = Arc::new(ReviewCommandService::new(
            Arc::clone(&review_repo),
            Arc::clone(&instructor_repo),
            Arc::clone(&content_read_repo),
            Arc::clone(&clock),
        ));
        let review_queries = Arc::new(ReviewQueryService::new(
            Arc::clone(&review_repo),
            Arc::clone(&instructor_repo),
            Arc::clone(&content_read_repo),
        ));

        let term_slug_service = Arc::new(TermSlugService::new(Arc::clone(&term_repo)));
        let taxonomy_commands = Arc::new(TaxonomyCommandService::new(
            Arc::clone(&term_repo),
            term_slug_service,
            Arc::clone(&clock),
            slug_attempts,
        ));
        let taxonomy_queries = Arc::new(TaxonomyQueryService::new(term_repo));

        Self {
            content_commands,
            content_queries,
            review_commands,
            review_queries,
            taxonomy_commands,
            taxonomy_queries,
        }
    }
}
