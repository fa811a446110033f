//! Hypermedia link definitions
//!
//! A link record always carries its group: the group is a constructor
//! argument, so an unclassified record cannot be built.
use serde::{Deserialize, Serialize};
use std::fmt;

/// Where a link points relative to the page it was found on
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LinkGroup {
    /// Same normalized domain as the requested page
    Internal,
    /// Any other domain, or any link when the requested URL is relative
    External,
}

impl LinkGroup {
    /// Maps a same-site decision onto a group
    pub fn from_same_site(same_site: bool) -> Self {
        if same_site {
            Self::Internal
        } else {
            Self::External
        }
    }

    /// Returns the external name of this group
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Internal => "INTERNAL",
            Self::External => "EXTERNAL",
        }
    }
}

impl fmt::Display for LinkGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which element/attribute category a link was harvested from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LinkType {
    /// Any element carrying a `src` attribute
    Media,
    /// `<link href="...">`
    Import,
    /// `<a href="...">`
    Link,
}

impl LinkType {
    /// Returns the CSS selector that finds elements of this category
    pub fn selector(&self) -> &'static str {
        match self {
            Self::Media => "[src]",
            Self::Import => "link[href]",
            Self::Link => "a[href]",
        }
    }

    /// Returns the attribute holding the link URL
    pub fn attribute(&self) -> &'static str {
        match self {
            Self::Media => "src",
            Self::Import | Self::Link => "href",
        }
    }

    /// Returns the external name of this type
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Media => "MEDIA",
            Self::Import => "IMPORT",
            Self::Link => "LINK",
        }
    }
}

impl fmt::Display for LinkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A classified hypermedia reference
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HyperMediaLink {
    tag_name: String,
    url: String,
    link_type: LinkType,
    link_group: LinkGroup,
}

impl HyperMediaLink {
    pub fn new(
        tag_name: impl Into<String>,
        url: impl Into<String>,
        link_type: LinkType,
        link_group: LinkGroup,
    ) -> Self {
        Self {
            tag_name: tag_name.into(),
            url: url.into(),
            link_type,
            link_group,
        }
    }

    /// Tag name of the element the link came from
    pub fn tag_name(&self) -> &str {
        &self.tag_name
    }

    /// Absolute URL when resolution succeeded, otherwise the raw attribute
    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn link_type(&self) -> LinkType {
        self.link_type
    }

    pub fn link_group(&self) -> LinkGroup {
        self.link_group
    }
}

/// A harvested link whose URL could not be classified
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnresolvedLink {
    pub tag_name: String,
    pub url: String,
    pub link_type: LinkType,
    pub reason: String,
}
