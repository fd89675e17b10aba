//! Slug validation.
//!
//! Slugs arrive as URL path segments. Validation runs before any storage
//! access so a malformed identifier surfaces as a structured client error
//! instead of a database failure.

use thiserror::Error;

use crate::MAX_SLUG_LEN;

/// Why a slug was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SlugError {
    #[error("slug must not be empty")]
    Empty,

    #[error("slug exceeds {MAX_SLUG_LEN} bytes")]
    TooLong,

    #[error("slug contains invalid character {0:?}")]
    InvalidChar(char),
}

/// Validate a content slug: non-empty, at most [`MAX_SLUG_LEN`] bytes,
/// restricted to URL-safe unreserved characters.
pub fn validate_slug(slug: &str) -> Result<(), SlugError> {
    if slug.trim().is_empty() {
        return Err(SlugError::Empty);
    }
    if slug.len() > MAX_SLUG_LEN {
        return Err(SlugError::TooLong);
    }
    if let Some(c) = slug
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | '~')))
    {
        return Err(SlugError::InvalidChar(c));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_typical_slugs() {
        for slug in ["hello-world", "post_2024", "a", "v1.2.3", "UPPER-case"] {
            assert_eq!(validate_slug(slug), Ok(()), "expected {slug:?} to be valid");
        }
    }

    #[test]
    fn rejects_empty_and_whitespace() {
        assert_eq!(validate_slug(""), Err(SlugError::Empty));
        assert_eq!(validate_slug("   "), Err(SlugError::Empty));
    }

    #[test]
    fn rejects_overlong() {
        let slug = "a".repeat(MAX_SLUG_LEN + 1);
        assert_eq!(validate_slug(&slug), Err(SlugError::TooLong));
    }

    #[test]
    fn rejects_reserved_characters() {
        assert_eq!(validate_slug("a/b"), Err(SlugError::InvalidChar('/')));
        assert_eq!(validate_slug("a b"), Err(SlugError::InvalidChar(' ')));
        assert_eq!(validate_slug("a%20b"), Err(SlugError::InvalidChar('%')));
    }
}
