use crate::model::link::{HyperMediaLink, LinkGroup, UnresolvedLink};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Heading tag name to number of occurrences
pub type HeadingLevels = BTreeMap<String, u64>;

/// Classified links keyed by group, each list in document traversal order
pub type GroupedLinks = BTreeMap<LinkGroup, Vec<HyperMediaLink>>;

/// HTML version detected from the document type declaration
///
/// Labels are part of the external format. New versions are added as new
/// variants; existing labels never change meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HtmlVersion {
    /// Doctype carrying a public identifier (HTML 4.01 and earlier, XHTML 1.x)
    Html4,
    /// Doctype without a public identifier (`<!DOCTYPE html>`)
    Html5,
}

impl HtmlVersion {
    /// Returns the display label of this version
    pub fn label(&self) -> &'static str {
        match self {
            Self::Html4 => "HTML4",
            Self::Html5 => "HTML5",
        }
    }
}

impl fmt::Display for HtmlVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Everything extracted from one fetched page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedInfo {
    url: String,
    page_title: String,
    version: String,
    login_page: bool,
    heading_levels: HeadingLevels,
    #[serde(rename = "groupedHypermediaLinks")]
    grouped_links: GroupedLinks,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    unresolved_links: Vec<UnresolvedLink>,
}

impl ParsedInfo {
    pub fn new(
        url: impl Into<String>,
        page_title: impl Into<String>,
        version: impl Into<String>,
        login_page: bool,
        heading_levels: HeadingLevels,
        grouped_links: GroupedLinks,
    ) -> Self {
        Self {
            url: url.into(),
            page_title: page_title.into(),
            version: version.into(),
            login_page,
            heading_levels,
            grouped_links,
            unresolved_links: Vec::new(),
        }
    }

    /// Attaches links that were set aside during harvesting
    pub fn with_unresolved_links(mut self, unresolved_links: Vec<UnresolvedLink>) -> Self {
        self.unresolved_links = unresolved_links;
        self
    }

    /// The URL as originally requested
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Page title, empty when the document declares none
    pub fn page_title(&self) -> &str {
        &self.page_title
    }

    /// Concatenated [`HtmlVersion`] labels, empty without a doctype
    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn is_login_page(&self) -> bool {
        self.login_page
    }

    pub fn heading_levels(&self) -> &HeadingLevels {
        &self.heading_levels
    }

    pub fn grouped_links(&self) -> &GroupedLinks {
        &self.grouped_links
    }

    /// Links in one group; empty when the group is absent
    pub fn links_in(&self, group: LinkGroup) -> &[HyperMediaLink] {
        self.grouped_links
            .get(&group)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn unresolved_links(&self) -> &[UnresolvedLink] {
        &self.unresolved_links
    }

    /// Total number of classified links across all groups
    pub fn link_count(&self) -> usize {
        self.grouped_links.values().map(Vec::len).sum()
    }
}
