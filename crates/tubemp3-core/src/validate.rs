//! Link validation for submitted YouTube URLs.
//!
//! Validation happens entirely client-side; a rejected link never produces
//! a network request.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::error::ConvertError;

/// Accepted link shape: optional scheme, optional `www.`, a YouTube host,
/// then any non-empty path or query. Case-insensitive.
#[allow(clippy::expect_used)]
static LINK_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(https?://)?(www\.)?(youtube\.com|youtu\.be)/.+$")
        .expect("link pattern compiles")
});

/// Validate a raw pasted link.
///
/// Surrounding whitespace is trimmed before matching. Returns the trimmed
/// link on success.
///
/// # Errors
///
/// Returns [`ConvertError::InvalidLink`] when the trimmed input is empty or
/// does not match the accepted YouTube URL shape.
pub fn validate_link(raw: &str) -> Result<String, ConvertError> {
    let trimmed = raw.trim();

    if trimmed.is_empty() || !LINK_PATTERN.is_match(trimmed) {
        debug!(input = %trimmed, "rejected link");
        return Err(ConvertError::InvalidLink);
    }

    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_full_url() {
        let link = validate_link("https://www.youtube.com/watch?v=dQw4w9WgXcQ");
        assert_eq!(
            link.as_deref(),
            Ok("https://www.youtube.com/watch?v=dQw4w9WgXcQ")
        );
    }

    #[test]
    fn test_accepts_without_scheme() {
        assert!(validate_link("youtube.com/watch?v=abc").is_ok());
        assert!(validate_link("www.youtube.com/watch?v=abc").is_ok());
    }

    #[test]
    fn test_accepts_short_host_without_scheme() {
        assert!(validate_link("youtu.be/abc123").is_ok());
    }

    #[test]
    fn test_accepts_http_scheme_and_mixed_case() {
        assert!(validate_link("http://YouTube.com/watch?v=abc").is_ok());
    }

    #[test]
    fn test_rejects_empty_and_whitespace() {
        assert_eq!(validate_link(""), Err(ConvertError::InvalidLink));
        assert_eq!(validate_link("   "), Err(ConvertError::InvalidLink));
    }

    #[test]
    fn test_rejects_wrong_host() {
        assert_eq!(
            validate_link("https://example.com/watch?v=abc"),
            Err(ConvertError::InvalidLink)
        );
        assert_eq!(
            validate_link("https://vimeo.com/12345"),
            Err(ConvertError::InvalidLink)
        );
    }

    #[test]
    fn test_rejects_host_without_path() {
        assert_eq!(
            validate_link("https://youtube.com"),
            Err(ConvertError::InvalidLink)
        );
        assert_eq!(validate_link("youtu.be/"), Err(ConvertError::InvalidLink));
    }

    #[test]
    fn test_trims_surrounding_whitespace() {
        let link = validate_link("  youtu.be/abc123  ");
        assert_eq!(link.as_deref(), Ok("youtu.be/abc123"));
    }
}
