// src/domain/content/status.rs
//! Publication lifecycle shared by posts and courses.

use crate::domain::content::entity::ContentItem;
use crate::domain::errors::{DomainError, DomainResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentStatus {
    #[default]
    Draft,
    Published,
    Archived,
}

impl ContentStatus {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Published => "published",
            Self::Archived => "archived",
        }
    }

    /// Whether the lifecycle defines a move from `self` to `next`.
    ///
    /// Staying in the same state is always allowed. Archived items stay
    /// archived, and a published item cannot go back to draft.
    pub const fn can_transition_to(self, next: Self) -> bool {
        matches!(
            (self, next),
            (Self::Draft, _)
                | (Self::Published, Self::Published | Self::Archived)
                | (Self::Archived, Self::Archived)
        )
    }
}

impl fmt::Display for ContentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContentStatus {
    type Err = DomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "draft" => Ok(Self::Draft),
            "published" => Ok(Self::Published),
            "archived" => Ok(Self::Archived),
            other => Err(DomainError::validation(format!("unknown status: {other}"))),
        }
    }
}

/// Status together with the first-publication timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PublicationState {
    pub status: ContentStatus,
    pub published_at: Option<DateTime<Utc>>,
}

impl PublicationState {
    pub const fn new(status: ContentStatus, published_at: Option<DateTime<Utc>>) -> Self {
        Self {
            status,
            published_at,
        }
    }

    /// Moves to `requested`, reading `clock` only when `published_at` gets assigned.
    pub fn transition<C>(self, requested: ContentStatus, clock: C) -> DomainResult<Self>
    where
        C: FnOnce() -> DateTime<Utc>,
    {
        if !self.status.can_transition_to(requested) {
            return Err(DomainError::validation(format!(
                "cannot change status from {} to {}",
                self.status, requested
            )));
        }

        let published_at = match (requested, self.published_at) {
            (ContentStatus::Published, None) => Some(clock()),
            (_, existing) => existing,
        };

        Ok(Self::new(requested, published_at))
    }
}

/// Moves `current` to `requested`.
///
/// `clock` is read only when the item enters `Published` without a
/// `published_at`; once set the timestamp is never replaced or cleared.
/// `updated_at` is left for the caller to maintain.
pub fn apply_status<C>(
    mut current: ContentItem,
    requested: ContentStatus,
    clock: C,
) -> DomainResult<ContentItem>
where
    C: FnOnce() -> DateTime<Utc>,
{
    let next = current.publication().transition(requested, clock)?;
    current.status = next.status;
    current.published_at = next.published_at;
    Ok(current)
}
