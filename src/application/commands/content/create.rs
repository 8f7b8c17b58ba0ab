// src/application/commands/content/create.rs
use super::ContentCommandService;
use crate::{
    application::{
        dto::ContentDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::content::{
        ContentBody, ContentKind, ContentStatus, ContentTitle, NewContentItem, OwnerId,
        PublicationState,
    },
};

pub struct CreateContentCommand {
    pub kind: ContentKind,
    pub title: String,
    pub body: String,
    pub owner_id: i64,
    pub status: Option<String>,
    pub category_id: Option<i64>,
    pub tag_ids: Vec<i64>,
}

impl CreateContentCommand {
    pub fn builder(kind: ContentKind) -> CreateContentCommandBuilder {
        CreateContentCommandBuilder {
            kind: Some(kind),
            ..CreateContentCommandBuilder::default()
        }
    }
}

#[derive(Default)]
pub struct CreateContentCommandBuilder {
    kind: Option<ContentKind>,
    title: Option<String>,
    body: Option<String>,
    owner_id: Option<i64>,
    status: Option<String>,
    category_id: Option<i64>,
    tag_ids: Vec<i64>,
}

impl CreateContentCommandBuilder {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn owner_id(mut self, owner_id: i64) -> Self {
        self.owner_id = Some(owner_id);
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    pub fn category_id(mut self, category_id: i64) -> Self {
        self.category_id = Some(category_id);
        self
    }

    pub fn tag_ids(mut self, tag_ids: impl IntoIterator<Item = i64>) -> Self {
        self.tag_ids = tag_ids.into_iter().collect();
        self
    }

    pub fn build(self) -> Result<CreateContentCommand, &'static str> {
        Ok(CreateContentCommand {
            kind: self.kind.ok_or("kind is required")?,
            title: self.title.ok_or("title is required")?,
            body: self.body.ok_or("body is required")?,
            owner_id: self.owner_id.ok_or("owner_id is required")?,
            status: self.status,
            category_id: self.category_id,
            tag_ids: self.tag_ids,
        })
    }
}

impl ContentCommandService {
    /// Creates a draft, applies the requested status and stores it under a
    /// fresh slug.
    ///
    /// A slug collision reported by the store triggers regeneration against a
    /// refreshed snapshot, at most `slug_attempts` times in total.
    pub async fn create_content(
        &self,
        command: CreateContentCommand,
    ) -> ApplicationResult<ContentDto> {
        let CreateContentCommand {
            kind,
            title,
            body,
            owner_id,
            status,
            category_id,
            tag_ids,
        } = command;

        let title = ContentTitle::new(kind, title)?;
        let body = ContentBody::new(kind, body)?;
        let owner_id = OwnerId::new(owner_id)?;
        let requested = status
            .as_deref()
            .map(str::parse::<ContentStatus>)
            .transpose()?;

        self.ensure_owner_exists(kind, owner_id).await?;
        let terms = self.resolve_terms(kind, category_id, &tag_ids).await?;

        let now = self.clock.now();
        let publication = match requested {
            Some(status) => PublicationState::default().transition(status, || now)?,
            None => PublicationState::default(),
        };

        let slug = self.slug_service.propose(kind, &title).await?;
        let mut pending = NewContentItem {
            kind,
            title,
            slug,
            body,
            status: publication.status,
            published_at: publication.published_at,
            owner_id,
            terms,
            created_at: now,
            updated_at: now,
        };

        let mut attempt = 1;
        loop {
            match self.write_repo.insert(pending.clone()).await {
                Ok(created) => {
                    tracing::info!(
                        %kind,
                        id = i64::from(created.id),
                        slug = %created.slug,
                        status = %created.status,
                        "content created"
                    );
                    return Ok(created.into());
                }
                Err(err) if err.is_conflict() && attempt < self.slug_attempts => {
                    tracing::warn!(
                        %kind,
                        slug = %pending.slug,
                        attempt,
                        "slug taken at write time, regenerating"
                    );
                    attempt += 1;
                    let slug = self.slug_service.propose(kind, &pending.title).await?;
                    pending = pending.with_slug(slug);
                }
                Err(err) if err.is_conflict() => {
                    tracing::error!(%kind, slug = %pending.slug, attempt, "slug retries exhausted");
                    return Err(ApplicationError::conflict(format!(
                        "could not reserve a unique slug after {attempt} attempts"
                    )));
                }
                Err(err) => return Err(err.into()),
            }
        }
    }
}
