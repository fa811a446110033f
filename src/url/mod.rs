//! URL classification for html-insight
//!
//! This module decides whether a URL is absolute, extracts its normalized
//! domain, and compares two URLs for same-site membership.

mod domain;

use crate::UrlResult;

// Re-export main functions
pub use domain::domain_of;

/// Returns true if the URL carries a scheme
///
/// A relative reference such as `../home.html` is valid URI syntax and simply
/// yields `false`.
///
/// # Errors
///
/// * `UrlError::InvalidUrl` - the string cannot be parsed as a URI, or is a
///   relative reference with characters no URI may contain
///
/// # Examples
///
/// ```
/// use html_insight::url::is_absolute;
///
/// assert!(is_absolute("https://example.com/").unwrap());
/// assert!(!is_absolute("../home.html").unwrap());
/// ```
pub fn is_absolute(url: &str) -> UrlResult<bool> {
    Ok(domain::parse_reference(url)?.is_some())
}

/// Decides whether `candidate` belongs to the same site as `origin`
///
/// The origin must be absolute and both URLs must share a normalized domain
/// (see [`domain_of`]). When the origin is not absolute the candidate is never
/// examined, so a malformed candidate cannot fail the comparison.
///
/// The candidate is expected to be absolute already: links harvested from a
/// document are resolved against its base URL before they get here.
///
/// # Examples
///
/// ```
/// use html_insight::url::same_site;
///
/// assert!(same_site("https://www.example.com/", "https://example.com/about").unwrap());
/// assert!(!same_site("https://example.com/", "https://other.com/").unwrap());
/// assert!(!same_site("/relative", "https://example.com/").unwrap());
/// ```
pub fn same_site(origin: &str, candidate: &str) -> UrlResult<bool> {
    if !is_absolute(origin)? {
        return Ok(false);
    }
    Ok(domain_of(origin)? == domain_of(candidate)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::UrlError;

    #[test]
    fn test_is_absolute_relative_path() {
        assert!(!is_absolute("../home.html").unwrap());
    }

    #[test]
    fn test_is_absolute_root_relative() {
        assert!(!is_absolute("/about").unwrap());
    }

    #[test]
    fn test_is_absolute_with_scheme() {
        assert!(is_absolute("http://stackoverflow.com").unwrap());
        assert!(is_absolute("mailto:someone@example.com").unwrap());
    }

    #[test]
    fn test_is_absolute_invalid() {
        assert!(matches!(
            is_absolute("http://exa mple.com"),
            Err(UrlError::InvalidUrl(_))
        ));
    }

    #[test]
    fn test_is_absolute_relative_with_invalid_characters() {
        assert_eq!(
            is_absolute("a b%zz"),
            Err(UrlError::InvalidUrl("a b%zz".to_string()))
        );
    }

    #[test]
    fn test_same_site_www_prefix() {
        assert!(same_site("https://www.example.com/", "https://example.com/a").unwrap());
        assert!(same_site("https://example.com/", "http://www.example.com/b").unwrap());
    }

    #[test]
    fn test_same_site_different_domain() {
        assert!(!same_site("https://example.com/", "https://example.org/").unwrap());
    }

    #[test]
    fn test_same_site_subdomain_is_external() {
        assert!(!same_site("https://example.com/", "https://blog.example.com/").unwrap());
    }

    #[test]
    fn test_same_site_relative_origin_is_false() {
        assert!(!same_site("../home.html", "https://example.com/").unwrap());
    }

    #[test]
    fn test_same_site_relative_origin_skips_candidate() {
        // The candidate would fail on its own, but is never looked at
        assert!(!same_site("home.html", "mailto:someone@example.com").unwrap());
    }

    #[test]
    fn test_same_site_candidate_without_host_fails() {
        assert!(matches!(
            same_site("https://example.com/", "javascript:void(0)"),
            Err(UrlError::MissingHost(_))
        ));
    }

    #[test]
    fn test_same_site_invalid_origin_fails() {
        assert!(matches!(
            same_site("http://exa mple.com", "https://example.com/"),
            Err(UrlError::InvalidUrl(_))
        ));
    }
}
