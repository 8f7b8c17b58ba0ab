// src/domain/review/value_objects.rs
use crate::domain::content::OwnerId;
use crate::domain::errors::{DomainError, DomainResult};
use rust_decimal::Decimal;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ReviewId(pub i64);

impl ReviewId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::validation("review id must be positive"))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<ReviewId> for i64 {
    fn from(value: ReviewId) -> Self {
        value.0
    }
}

/// The student who wrote a review.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RaterId(pub i64);

impl RaterId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::validation("rater id must be positive"))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<RaterId> for i64 {
    fn from(value: RaterId) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InstructorId(pub i64);

impl InstructorId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::validation("instructor id must be positive"))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<InstructorId> for i64 {
    fn from(value: InstructorId) -> Self {
        value.0
    }
}

/// A course's owner is its instructor.
impl From<OwnerId> for InstructorId {
    fn from(value: OwnerId) -> Self {
        Self(value.0)
    }
}

/// Star value of a single review, `0..=5`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ReviewValue(u8);

impl ReviewValue {
    pub const MAX: u8 = 5;

    pub fn new(value: i32) -> DomainResult<Self> {
        u8::try_from(value)
            .ok()
            .filter(|v| *v <= Self::MAX)
            .map(Self)
            .ok_or_else(|| DomainError::validation("rating must be between 0 and 5"))
    }

    pub const fn get(self) -> u8 {
        self.0
    }
}

impl From<ReviewValue> for i32 {
    fn from(value: ReviewValue) -> Self {
        Self::from(value.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewTitle(String);

impl ReviewTitle {
    const MIN_LEN: usize = 5;
    const MAX_LEN: usize = 200;

    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        let length = value.chars().count();
        if length < Self::MIN_LEN {
            return Err(DomainError::validation(
                "review title must be at least 5 characters",
            ));
        }
        if length > Self::MAX_LEN {
            return Err(DomainError::validation(
                "review title must be at most 200 characters",
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

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewComment(String);

impl ReviewComment {
    const MIN_LEN: usize = 20;

    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.chars().count() < Self::MIN_LEN {
            return Err(DomainError::validation(
                "review comment must be at least 20 characters",
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

/// Cached instructor rating with exactly two fractional digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Rating(Decimal);

impl Rating {
    pub const SCALE: u32 = 2;

    pub fn zero() -> Self {
        Self(Decimal::new(0, Self::SCALE))
    }

    /// Wraps a value already rounded to [`Self::SCALE`] digits.
    pub(crate) fn from_rounded(mut value: Decimal) -> Self {
        value.rescale(Self::SCALE);
        Self(value)
    }

    pub fn from_stored(value: Decimal) -> DomainResult<Self> {
        if value < Decimal::ZERO || value > Decimal::from(ReviewValue::MAX) {
            return Err(DomainError::validation(format!(
                "stored rating out of range: {value}"
            )));
        }
        if value.scale() > Self::SCALE {
            return Err(DomainError::validation(format!(
                "stored rating has more than two decimals: {value}"
            )));
        }
        Ok(Self::from_rounded(value))
    }

    pub const fn value(self) -> Decimal {
        self.0
    }
}

impl Default for Rating {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
