// src/domain/taxonomy/value_objects.rs
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::slug::is_valid_slug;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TermId(pub i64);

impl TermId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::validation("term id must be positive"))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<TermId> for i64 {
    fn from(value: TermId) -> Self {
        value.0
    }
}

/// Vocabulary a term belongs to. Slugs are unique within one taxonomy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Taxonomy {
    /// Blog post categories.
    Category,
    /// Blog post tags.
    Tag,
    CourseCategory,
}

impl Taxonomy {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Category => "category",
            Self::Tag => "tag",
            Self::CourseCategory => "course_category",
        }
    }

    pub const fn max_slug_len(self) -> usize {
        match self {
            Self::Category => 120,
            Self::Tag => 60,
            Self::CourseCategory => 50,
        }
    }

    pub const fn max_name_len(self) -> usize {
        match self {
            Self::Category | Self::CourseCategory => 100,
            Self::Tag => 50,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Category => "category",
            Self::Tag => "tag",
            Self::CourseCategory => "course category",
        }
    }
}

impl fmt::Display for Taxonomy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Taxonomy {
    type Err = DomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "category" => Ok(Self::Category),
            "tag" => Ok(Self::Tag),
            "course_category" => Ok(Self::CourseCategory),
            other => Err(DomainError::validation(format!("unknown taxonomy: {other}"))),
        }
    }
}

/// Display name of a term, stored trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TermName(String);

impl TermName {
    pub fn new(taxonomy: Taxonomy, value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into().trim().to_string();
        if value.is_empty() {
            return Err(DomainError::validation(format!(
                "{} name cannot be empty",
                taxonomy.label()
            )));
        }
        if value.chars().count() > taxonomy.max_name_len() {
            return Err(DomainError::validation(format!(
                "{} name must be at most {} characters",
                taxonomy.label(),
                taxonomy.max_name_len()
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
pub struct TermSlug(String);

impl TermSlug {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
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

impl fmt::Display for TermSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_are_trimmed_and_bounded_per_taxonomy() {
        let name = TermName::new(Taxonomy::Tag, "  rust  ").unwrap();
        assert_eq!(name.as_str(), "rust");

        assert!(TermName::new(Taxonomy::Tag, "   ").is_err());
        assert!(TermName::new(Taxonomy::Tag, "x".repeat(51)).is_err());
        assert!(TermName::new(Taxonomy::Category, "x".repeat(100)).is_ok());
    }

    #[test]
    fn taxonomy_round_trips_through_str() {
        for taxonomy in [Taxonomy::Category, Taxonomy::Tag, Taxonomy::CourseCategory] {
            assert_eq!(taxonomy.as_str().parse::<Taxonomy>().unwrap(), taxonomy);
        }
        assert!("topic".parse::<Taxonomy>().is_err());
    }

    #[test]
    fn slug_limits_follow_the_taxonomy() {
        assert_eq!(Taxonomy::Category.max_slug_len(), 120);
        assert_eq!(Taxonomy::Tag.max_slug_len(), 60);
        assert_eq!(Taxonomy::CourseCategory.max_slug_len(), 50);
    }
}
