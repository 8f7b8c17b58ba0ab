// src/domain/slug.rs
//! Slug derivation for human-entered titles.
//!
//! A title is normalized with the `slug` crate, cut to the storage limit and,
//! when the result is already taken, suffixed with `-2`, `-3`, ... until a
//! free candidate turns up. The existing slugs are only ever checked for
//! membership, so the outcome does not depend on how the caller's snapshot
//! happens to be ordered.

use std::collections::HashSet;
use std::hash::BuildHasher;

/// Smallest storage limit honoured by the generator; shorter limits are raised to it.
pub const MIN_SLUG_LEN: usize = 8;

/// Largest numeric suffix a candidate may carry.
const MAX_SUFFIX: u64 = 9_999_999;

/// Length of `-9999999`, the longest suffix covered by [`SlugCandidates::shared_prefix`].
const MAX_SUFFIX_LEN: usize = 8;

const FALLBACK_BASE: &str = "untitled";

/// Membership view over a snapshot of slugs that are already taken.
pub trait SlugIndex {
    fn contains_slug(&self, slug: &str) -> bool;
}

impl<S: BuildHasher> SlugIndex for HashSet<String, S> {
    fn contains_slug(&self, slug: &str) -> bool {
        self.contains(slug)
    }
}

/// Lowercase, hyphen-separated ASCII form of `title`.
pub fn normalize(title: &str) -> String {
    slug::slugify(title)
}

/// Whether `value` is a non-empty run of lowercase ASCII letters, digits and hyphens.
pub fn is_valid_slug(value: &str) -> bool {
    !value.is_empty()
        && value
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-')
}

/// Cuts `value` to at most `max_len` bytes without leaving a trailing hyphen.
fn fit(value: &str, max_len: usize) -> &str {
    let mut end = value.len().min(max_len);
    while !value.is_char_boundary(end) {
        end -= 1;
    }
    value[..end].trim_end_matches('-')
}

/// Deterministic sequence of slug candidates for one title.
///
/// The first item is the truncated base; every following item is the base,
/// shortened as far as needed, followed by `-n` for `n = 2, 3, ...` up to
/// `-9999999`. No item is longer than the limit the sequence was built with.
#[derive(Debug, Clone)]
pub struct SlugCandidates {
    base: String,
    max_len: usize,
    next: u64,
}

impl SlugCandidates {
    pub fn new(title: &str, max_len: usize) -> Self {
        let max_len = max_len.max(MIN_SLUG_LEN);
        let normalized = normalize(title);
        let base = match fit(&normalized, max_len) {
            "" => FALLBACK_BASE.to_string(),
            fitted => fitted.to_string(),
        };

        Self {
            base,
            max_len,
            next: 1,
        }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    /// Prefix common to every candidate with a suffix of up to seven digits.
    ///
    /// Repositories use it to load the relevant slice of taken slugs instead
    /// of the whole table.
    pub fn shared_prefix(&self) -> &str {
        fit(&self.base, self.max_len - MAX_SUFFIX_LEN)
    }
}

impl Iterator for SlugCandidates {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        let n = self.next;
        if n > MAX_SUFFIX {
            return None;
        }
        self.next += 1;

        if n == 1 {
            return Some(self.base.clone());
        }

        let suffix = n.to_string();

        let head = fit(&self.base, self.max_len.saturating_sub(suffix.len() + 1));
        if head.is_empty() {
            Some(suffix)
        } else {
            Some(format!("{head}-{suffix}"))
        }
    }
}

/// Returns the first candidate for `title` that `existing` does not contain.
///
/// The result is never longer than `max_len` (raised to [`MIN_SLUG_LEN`]).
/// When every candidate up to `-9999999` is taken the unsuffixed base is
/// returned as is; the store's unique constraint then rejects it as a
/// conflict.
pub fn generate_slug<I>(title: &str, existing: &I, max_len: usize) -> String
where
    I: SlugIndex + ?Sized,
{
    let mut candidates = SlugCandidates::new(title, max_len);
    let base = candidates.base().to_string();
    candidates
        .find(|candidate| !existing.contains_slug(candidate))
        .unwrap_or(base)
}
