//! Data model for html-insight
//!
//! # Components
//!
//! - `ParsedInfo`: The result record of one inspection
//! - `HyperMediaLink`: A classified link with its `LinkType` and `LinkGroup`
//! - `HtmlVersion`: Closed set of detectable HTML versions
//! - `Search`: The caller-supplied request

mod info;
mod link;
mod search;

// Re-export main types
pub use info::{GroupedLinks, HeadingLevels, HtmlVersion, ParsedInfo};
pub use link::{HyperMediaLink, LinkGroup, LinkType, UnresolvedLink};
pub use search::Search;
