//! Page inspection
//!
//! This module contains the core logic, including:
//! - HTTP fetching of the requested page and charset decoding
//! - The parsed document model
//! - Metadata extraction (title, version, login heuristic, headings)
//! - Link harvesting and internal/external classification
//! - The orchestrator that composes them into a `ParsedInfo`

mod charset;
mod document;
mod fetcher;
mod links;
mod metadata;

pub use charset::decode_body;
pub use document::Document;
pub use fetcher::{build_http_client, fetch_url, is_supported_content_type, FetchError, FetchedPage};
pub use links::{classify_links, group_links, harvest_links, hyper_media_links, HarvestedLink, LinkHarvest};
pub use metadata::{classify_doctype, heading_levels, html_version, is_login_page, title};

use crate::config::Config;
use crate::model::ParsedInfo;
use crate::{ParserError, Result};
use reqwest::Client;

/// Fetches pages and extracts their facts
///
/// An `Inspector` holds an HTTP client and immutable configuration only, so
/// one instance can serve any number of concurrent requests.
#[derive(Debug, Clone)]
pub struct Inspector {
    client: Client,
    config: Config,
}

impl Inspector {
    /// Creates an inspector from configuration
    ///
    /// # Example
    ///
    /// ```no_run
    /// use html_insight::{Config, Inspector};
    ///
    /// # async fn example() -> html_insight::Result<()> {
    /// let inspector = Inspector::new(Config::default())?;
    /// let info = inspector.parse("https://example.com/").await?;
    /// println!("{} links", info.link_count());
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(config: Config) -> Result<Self> {
        let client = build_http_client(&config.fetcher).map_err(ParserError::Client)?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Fetches `url` and extracts everything from it
    ///
    /// # Sequence
    ///
    /// 1. Fetch the document (single attempt)
    /// 2. Parse it, located at the final URL after redirects
    /// 3. Extract title, version, login flag and headings
    /// 4. Harvest and classify links against `url` as given
    ///
    /// Any failure aborts the request; no partial result is returned.
    pub async fn parse(&self, url: &str) -> Result<ParsedInfo> {
        tracing::debug!("Fetching {}", url);

        let page = fetch_url(&self.client, url, self.config.fetcher.timeout_ms)
            .await
            .map_err(|source| {
                tracing::error!("Could not retrieve document from {}: {}", url, source);
                ParserError::Fetch {
                    url: url.to_string(),
                    source,
                }
            })?;

        tracing::debug!(
            "Fetched {} ({} bytes, status {}, final location {})",
            url,
            page.body.len(),
            page.status_code,
            page.location
        );

        self.inspect_html(url, &page.location, &page.body)
    }

    /// Extracts everything from already retrieved HTML
    ///
    /// `url` is the requested URL and the origin for link classification;
    /// `location` is where the document was actually found and serves as its
    /// base URL and for the login heuristic.
    pub fn inspect_html(&self, url: &str, location: &str, html: &str) -> Result<ParsedInfo> {
        let document = Document::parse(html, location);

        let page_title = title(&document)?;
        let version = html_version(&document);
        let login_page = is_login_page(&document)?;
        let headings = heading_levels(&document)?;
        let harvest = hyper_media_links(&document, url, self.config.links.on_error)?;

        tracing::info!(
            "Parsed {}: title={:?}, version={:?}, login={}, headings={}, unresolved links={}",
            url,
            page_title,
            version,
            login_page,
            headings.len(),
            harvest.unresolved.len()
        );

        Ok(
            ParsedInfo::new(url, page_title, version, login_page, headings, harvest.grouped)
                .with_unresolved_links(harvest.unresolved),
        )
    }
}
