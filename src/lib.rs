//! html-insight: structured facts about a single web page
//!
//! This crate fetches one HTML document and reports its title, HTML version,
//! whether it looks like a login page, how its headings are distributed, and
//! every hypermedia reference it contains, grouped into internal and external
//! links relative to the requested URL.

pub mod config;
pub mod inspector;
pub mod model;
pub mod output;
pub mod url;

use thiserror::Error;

/// Main error type for html-insight operations
///
/// Every failure of the core surfaces as one of these variants. Callers that
/// only need a single "could not parse" classification can rely on the
/// `Display` message.
#[derive(Debug, Error)]
pub enum ParserError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Incorrect URL: {0}")]
    IncorrectUrl(String),

    #[error("{0}")]
    Client(#[source] inspector::FetchError),

    #[error("Could not retrieve document from {url}: {source}")]
    Fetch {
        url: String,
        source: inspector::FetchError,
    },

    #[error("Some hypermedia links could not be parsed. Link={link}: {source}")]
    LinkResolution { link: String, source: UrlError },

    #[error("Invalid selector '{selector}': {message}")]
    Selector { selector: String, message: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// URL-specific errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UrlError {
    #[error("Invalid URL '{0}'")]
    InvalidUrl(String),

    #[error("Missing host in URL '{0}'")]
    MissingHost(String),
}

/// Result type alias for html-insight operations
pub type Result<T> = std::result::Result<T, ParserError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Result type alias for URL operations
pub type UrlResult<T> = std::result::Result<T, UrlError>;

// Re-export commonly used types
pub use config::Config;
pub use inspector::Inspector;
pub use model::{HtmlVersion, HyperMediaLink, LinkGroup, LinkType, ParsedInfo, Search};
pub use crate::url::{domain_of, is_absolute, same_site};
