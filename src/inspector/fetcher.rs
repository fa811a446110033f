//! HTTP fetcher implementation
//!
//! This module retrieves the raw HTML of one page:
//! - Building the HTTP client with the configured user agent and timeout
//! - A single GET request, redirects followed, no retry
//! - Rejecting error statuses and content types that are not markup
//! - Classifying transport failures

use crate::config::FetcherConfig;
use crate::inspector::charset::decode_body;
use reqwest::{header::CONTENT_TYPE, redirect::Policy, Client, StatusCode};
use std::time::Duration;
use thiserror::Error;

/// Maximum number of redirects followed before giving up
const MAX_REDIRECTS: usize = 10;

/// Failure to retrieve a document
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("request failed: {0}")]
    Http(#[source] reqwest::Error),

    #[error("request timed out after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    #[error("HTTP status {status}")]
    Status { status: StatusCode },

    #[error("unsupported content type '{content_type}'")]
    UnsupportedContentType { content_type: String },

    #[error("response body is not valid {encoding}")]
    Decode { encoding: String },
}

/// A successfully retrieved page
#[derive(Debug, Clone)]
pub struct FetchedPage {
    /// Final URL after redirects
    pub location: String,
    /// HTTP status code
    pub status_code: u16,
    /// Content-Type header value, empty when the server sent none
    pub content_type: String,
    /// Decoded page body
    pub body: String,
}

/// Builds an HTTP client with proper configuration
///
/// # Example
///
/// ```
/// use html_insight::config::FetcherConfig;
/// use html_insight::inspector::build_http_client;
///
/// let client = build_http_client(&FetcherConfig::default()).unwrap();
/// ```
pub fn build_http_client(config: &FetcherConfig) -> Result<Client, FetchError> {
    Client::builder()
        .user_agent(config.user_agent.as_str())
        .timeout(Duration::from_millis(config.timeout_ms))
        .redirect(Policy::limited(MAX_REDIRECTS))
        .gzip(true)
        .brotli(true)
        .build()
        .map_err(FetchError::Client)
}

/// Fetches a URL and returns its decoded body
///
/// # Request Flow
///
/// 1. Send one GET request; redirects are followed by the client
/// 2. Reject non-success statuses
/// 3. Reject content types that are not text or XML based
/// 4. Decode the body according to its BOM, header charset or `<meta>`
///    declaration
///
/// The client timeout bounds the whole exchange, body included.
pub async fn fetch_url(
    client: &Client,
    url: &str,
    timeout_ms: u64,
) -> Result<FetchedPage, FetchError> {
    let classify = |e: reqwest::Error| {
        if e.is_timeout() {
            FetchError::Timeout { timeout_ms }
        } else {
            FetchError::Http(e)
        }
    };

    let response = client.get(url).send().await.map_err(classify)?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status { status });
    }

    let location = response.url().to_string();

    let content_type = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();

    if !is_supported_content_type(&content_type) {
        return Err(FetchError::UnsupportedContentType { content_type });
    }

    let bytes = response.bytes().await.map_err(classify)?;
    let body = decode_body(&bytes, &content_type)?;

    Ok(FetchedPage {
        location,
        status_code: status.as_u16(),
        content_type,
        body,
    })
}

/// Returns true if a Content-Type can be parsed as markup
///
/// Accepts `text/*`, `application/xml`, `application/xhtml+xml` and any other
/// `+xml` type. A missing header is accepted.
pub fn is_supported_content_type(content_type: &str) -> bool {
    let mime = content_type
        .split(';')
        .next()
        .unwrap_or("")
        .trim()
        .to_ascii_lowercase();

    mime.is_empty()
        || mime.starts_with("text/")
        || mime == "application/xml"
        || mime == "application/xhtml+xml"
        || mime.ends_with("+xml")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_http_client() {
        let client = build_http_client(&FetcherConfig::default());
        assert!(client.is_ok());
    }

    #[test]
    fn test_build_http_client_custom_agent() {
        let config = FetcherConfig {
            user_agent: "InsightBot/1.0".to_string(),
            timeout_ms: 250,
        };
        let client = build_http_client(&config).unwrap();
        assert!(format!("{:?}", client).contains("Client"));
    }

    #[test]
    fn test_supported_content_types() {
        assert!(is_supported_content_type("text/html"));
        assert!(is_supported_content_type("text/html; charset=UTF-8"));
        assert!(is_supported_content_type("TEXT/HTML"));
        assert!(is_supported_content_type("text/plain"));
        assert!(is_supported_content_type("application/xhtml+xml"));
        assert!(is_supported_content_type("application/xml"));
        assert!(is_supported_content_type("image/svg+xml"));
        assert!(is_supported_content_type(""));
    }

    #[test]
    fn test_unsupported_content_types() {
        assert!(!is_supported_content_type("application/json"));
        assert!(!is_supported_content_type("image/png"));
        assert!(!is_supported_content_type("application/pdf"));
    }

    #[test]
    fn test_error_messages() {
        let err = FetchError::Timeout { timeout_ms: 5000 };
        assert_eq!(err.to_string(), "request timed out after 5000ms");

        let err = FetchError::Status {
            status: StatusCode::NOT_FOUND,
        };
        assert_eq!(err.to_string(), "HTTP status 404 Not Found");

        let err = FetchError::Decode {
            encoding: "UTF-8".to_string(),
        };
        assert_eq!(err.to_string(), "response body is not valid UTF-8");
    }
}
