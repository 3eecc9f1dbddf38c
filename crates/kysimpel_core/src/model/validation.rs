//! Editor-side validation rules for notes and links.

use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fmt::{Display, Formatter};

static ABSOLUTE_URL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z][A-Za-z0-9+.\-]*://[^\s/?#]+[^\s]*$").expect("valid absolute url regex")
});

/// Sentinel stored in `FavoriteLink::url` when no address was given.
pub const NO_URL: &str = "-";

/// Rejected user input. Raised before persistence, never by it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Title is empty after trimming.
    EmptyTitle,
    /// No section carries a non-empty body.
    EmptyContent,
    /// Value is neither an absolute URL nor the `-` sentinel.
    InvalidUrl(String),
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "title must not be empty"),
            Self::EmptyContent => write!(f, "at least one section must have content"),
            Self::InvalidUrl(value) => write!(f, "invalid url: `{value}`"),
        }
    }
}

impl Error for ValidationError {}

/// Returns whether `value` looks like an absolute `scheme://host` URL.
pub fn is_valid_url(value: &str) -> bool {
    ABSOLUTE_URL_RE.is_match(value)
}

/// Normalizes user-entered link input.
///
/// Blank input and `-` both become the `-` sentinel; anything else must be an
/// absolute URL and is returned trimmed.
pub fn normalize_link_url(input: &str) -> Result<String, ValidationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() || trimmed == NO_URL {
        return Ok(NO_URL.to_string());
    }
    if !is_valid_url(trimmed) {
        return Err(ValidationError::InvalidUrl(trimmed.to_string()));
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::{is_valid_url, normalize_link_url, ValidationError, NO_URL};

    #[test]
    fn accepts_common_absolute_urls() {
        assert!(is_valid_url("https://classroom.google.com/c/abc"));
        assert!(is_valid_url("http://localhost:3000"));
        assert!(!is_valid_url("github.com/user"));
        assert!(!is_valid_url("https://"));
    }

    #[test]
    fn blank_and_dash_become_sentinel() {
        assert_eq!(normalize_link_url("  ").unwrap(), NO_URL);
        assert_eq!(normalize_link_url(" - ").unwrap(), NO_URL);
    }

    #[test]
    fn rejects_relative_input() {
        assert_eq!(
            normalize_link_url("youtube"),
            Err(ValidationError::InvalidUrl("youtube".to_string()))
        );
    }
}
