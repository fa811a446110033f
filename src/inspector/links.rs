//! Hypermedia link harvesting and classification
//!
//! Links are collected from three element sets in a fixed order:
//! - `[src]` elements (media)
//! - `<link href>` elements (imports)
//! - `<a href>` elements (hyperlinks)
//!
//! Each link is then classified as internal or external relative to the
//! requested URL and grouped, preserving traversal order inside each group.

use crate::config::LinkErrorPolicy;
use crate::inspector::document::Document;
use crate::model::{GroupedLinks, HyperMediaLink, LinkGroup, LinkType, UnresolvedLink};
use crate::url::same_site;
use crate::{ParserError, Result};

/// Element categories in traversal order
const LINK_TYPES: [LinkType; 3] = [LinkType::Media, LinkType::Import, LinkType::Link];

/// A link found in the document, not yet classified
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HarvestedLink {
    pub tag_name: String,
    pub url: String,
    pub link_type: LinkType,
}

impl HarvestedLink {
    /// Attaches a group, producing the public link record
    pub fn into_classified(self, link_group: LinkGroup) -> HyperMediaLink {
        HyperMediaLink::new(self.tag_name, self.url, self.link_type, link_group)
    }
}

/// Outcome of classifying every harvested link
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkHarvest {
    /// Classified links grouped by `LinkGroup`; empty groups are absent
    pub grouped: GroupedLinks,
    /// Links set aside under `LinkErrorPolicy::Isolate`
    pub unresolved: Vec<UnresolvedLink>,
}

/// Collects every link of the document in traversal order
///
/// Media links come first, then imports, then hyperlinks; each set is in
/// document order. URLs are resolved against the document base URL, falling
/// back to the raw attribute text.
pub fn harvest_links(document: &Document) -> Result<Vec<HarvestedLink>> {
    let mut links = Vec::new();

    for link_type in LINK_TYPES {
        for element in document.select(link_type.selector())? {
            if let Some(url) = document.abs_attr(&element, link_type.attribute()) {
                links.push(HarvestedLink {
                    tag_name: element.value().name().to_string(),
                    url,
                    link_type,
                });
            }
        }
    }

    Ok(links)
}

/// Classifies harvested links relative to `origin` and groups them
///
/// # Errors
///
/// Under `LinkErrorPolicy::Strict`, the first link whose URL cannot be
/// classified aborts the whole batch with `ParserError::LinkResolution`.
/// Under `LinkErrorPolicy::Isolate` such links are returned in
/// `LinkHarvest::unresolved` instead.
pub fn classify_links(
    origin: &str,
    links: Vec<HarvestedLink>,
    policy: LinkErrorPolicy,
) -> Result<LinkHarvest> {
    let mut classified = Vec::with_capacity(links.len());
    let mut unresolved = Vec::new();

    for link in links {
        match same_site(origin, &link.url) {
            Ok(same) => classified.push(link.into_classified(LinkGroup::from_same_site(same))),
            Err(e) => match policy {
                LinkErrorPolicy::Strict => {
                    return Err(ParserError::LinkResolution {
                        link: link.url,
                        source: e,
                    });
                }
                LinkErrorPolicy::Isolate => {
                    tracing::warn!("Setting aside link {}: {}", link.url, e);
                    unresolved.push(UnresolvedLink {
                        tag_name: link.tag_name,
                        url: link.url,
                        link_type: link.link_type,
                        reason: e.to_string(),
                    });
                }
            },
        }
    }

    Ok(LinkHarvest {
        grouped: group_links(classified),
        unresolved,
    })
}

/// Groups links by `LinkGroup`, keeping their relative order
pub fn group_links(links: Vec<HyperMediaLink>) -> GroupedLinks {
    let mut grouped = GroupedLinks::new();
    for link in links {
        grouped.entry(link.link_group()).or_default().push(link);
    }
    grouped
}

/// Harvests, classifies and groups every hypermedia link of the document
pub fn hyper_media_links(
    document: &Document,
    origin: &str,
    policy: LinkErrorPolicy,
) -> Result<LinkHarvest> {
    let links = harvest_links(document)?;
    tracing::debug!("Harvested {} links from {}", links.len(), document.location());
    classify_links(origin, links, policy)
}
