//! Slug and target validation rules, and random slug generation.
//!
//! These are pure functions with no I/O. [`crate::application::services::LinkService`]
//! applies them in a fixed order before any write reaches the store.

use rand::distr::{Alphanumeric, SampleString};

/// Maximum length of a caller-supplied slug, in characters.
pub const MAX_SLUG_LENGTH: usize = 50;

/// Maximum length of a target URL, in characters.
pub const MAX_TARGET_LENGTH: usize = 100;

/// Length of generated slugs.
pub const DEFAULT_SLUG_LENGTH: usize = 10;

/// Returns true if `slug` is non-empty and made only of ASCII letters, digits
/// and hyphens.
///
/// The whole string is checked, so `"ab/cd"` is rejected even though it starts
/// with valid characters.
pub fn is_valid_slug(slug: &str) -> bool {
    !slug.is_empty()
        && slug
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-')
}

/// Returns true if `url` looks like an http(s) URL.
///
/// The check is a heuristic: an `http://` or `https://` prefix followed by
/// something containing a dot. It does not parse hosts or paths and must not
/// be treated as a security boundary.
pub fn is_valid_url(url: &str) -> bool {
    let rest = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"));

    rest.is_some_and(|r| r.contains('.'))
}

/// Returns true if `target` is non-empty and at most [`MAX_TARGET_LENGTH`]
/// characters long.
pub fn is_valid_target_length(target: &str) -> bool {
    let len = target.chars().count();
    (1..=MAX_TARGET_LENGTH).contains(&len)
}

/// Generates a random slug of `length` characters from `[A-Za-z0-9]`.
///
/// Draws from the thread-local CSPRNG so slugs cannot be predicted and
/// squatted ahead of their owner.
pub fn generate_slug(length: usize) -> String {
    Alphanumeric.sample_string(&mut rand::rng(), length)
}
