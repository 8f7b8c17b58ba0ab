// src/domain/content/value_objects.rs
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::slug::is_valid_slug;
use crate::domain::taxonomy::Taxonomy;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContentId(pub i64);

impl ContentId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::validation("content id must be positive"))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<ContentId> for i64 {
    fn from(value: ContentId) -> Self {
        value.0
    }
}

/// Author of a post or instructor of a course.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OwnerId(pub i64);

impl OwnerId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::validation("owner id must be positive"))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<OwnerId> for i64 {
    fn from(value: OwnerId) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    Post,
    Course,
}

impl ContentKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Post => "post",
            Self::Course => "course",
        }
    }

    /// Storage limit of the slug column for this kind.
    pub const fn max_slug_len(self) -> usize {
        match self {
            Self::Post => 300,
            Self::Course => 50,
        }
    }

    pub const fn min_title_len(self) -> usize {
        match self {
            Self::Post => 5,
            Self::Course => 10,
        }
    }

    pub const fn max_title_len(self) -> usize {
        match self {
            Self::Post => 250,
            Self::Course => 200,
        }
    }

    pub const fn min_body_len(self) -> usize {
        match self {
            Self::Post => 20,
            Self::Course => 50,
        }
    }

    /// Category vocabulary items of this kind are filed under.
    pub const fn category_taxonomy(self) -> Taxonomy {
        match self {
            Self::Post => Taxonomy::Category,
            Self::Course => Taxonomy::CourseCategory,
        }
    }

    pub const fn accepts_tags(self) -> bool {
        matches!(self, Self::Post)
    }

    const fn body_label(self) -> &'static str {
        match self {
            Self::Post => "content",
            Self::Course => "description",
        }
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContentKind {
    type Err = DomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "post" => Ok(Self::Post),
            "course" => Ok(Self::Course),
            other => Err(DomainError::validation(format!(
                "unknown content kind: {other}"
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentTitle(String);

impl ContentTitle {
    pub fn new(kind: ContentKind, value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        let length = value.trim().chars().count();
        if length < kind.min_title_len() {
            return Err(DomainError::validation(format!(
                "title must be at least {} characters",
                kind.min_title_len()
            )));
        }
        if value.chars().count() > kind.max_title_len() {
            return Err(DomainError::validation(format!(
                "title must be at most {} characters",
                kind.max_title_len()
            )));
        }
        Ok(Self(value))
    }

    /// Rehydrates a title that was validated before it was stored.
    pub fn from_stored(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::validation("title cannot be empty"));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ContentTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentBody(String);

impl ContentBody {
    pub fn new(kind: ContentKind, value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().chars().count() < kind.min_body_len() {
            return Err(DomainError::validation(format!(
                "{} must be at least {} characters",
                kind.body_label(),
                kind.min_body_len()
            )));
        }
        Ok(Self(value))
    }

    pub fn from_stored(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContentSlug(String);

impl ContentSlug {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.is_empty() {
            return Err(DomainError::validation("slug cannot be empty"));
        }
        if !is_valid_slug(&value) {
            return Err(DomainError::validation(
                "slug may only contain lowercase letters, digits and hyphens",
            ));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ContentSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
