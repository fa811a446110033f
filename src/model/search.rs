use crate::{ParserError, Result};
use serde::{Deserialize, Serialize};
use url::Url;

/// Schemes a caller may submit for inspection
const ALLOWED_SCHEMES: &[&str] = &["http", "https", "ftp"];

/// A request to inspect one page, as bound by the calling layer
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Search {
    pub url: String,
}

impl Search {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    /// Checks that the URL is well formed before the core is invoked
    ///
    /// The URL must parse, use one of `http`, `https` or `ftp`, and name a
    /// host.
    ///
    /// # Errors
    ///
    /// * `ParserError::IncorrectUrl` - the URL is rejected
    pub fn validate(&self) -> Result<()> {
        let parsed =
            Url::parse(&self.url).map_err(|_| ParserError::IncorrectUrl(self.url.clone()))?;

        if !ALLOWED_SCHEMES.contains(&parsed.scheme()) {
            return Err(ParserError::IncorrectUrl(self.url.clone()));
        }

        match parsed.host_str() {
            Some(host) if !host.is_empty() => Ok(()),
            _ => Err(ParserError::IncorrectUrl(self.url.clone())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_accepts_http_https_ftp() {
        assert!(Search::new("http://stackoverflow.com").validate().is_ok());
        assert!(Search::new("https://example.com/login?next=/").validate().is_ok());
        assert!(Search::new("ftp://files.example.com/readme").validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_relative() {
        let result = Search::new("../home.html").validate();
        assert!(matches!(result, Err(ParserError::IncorrectUrl(_))));
    }

    #[test]
    fn test_validate_rejects_other_schemes() {
        assert!(Search::new("javascript:alert(1)").validate().is_err());
        assert!(Search::new("mailto:someone@example.com").validate().is_err());
        assert!(Search::new("file:///etc/hosts").validate().is_err());
    }

    #[test]
    fn test_validate_rejects_empty() {
        assert!(Search::default().validate().is_err());
    }

    #[test]
    fn test_incorrect_url_message() {
        let err = Search::new("not a url").validate().unwrap_err();
        assert_eq!(err.to_string(), "Incorrect URL: not a url");
    }
}
