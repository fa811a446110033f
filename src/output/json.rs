//! JSON encoding of inspection results
//!
//! The field names are the external format consumed by callers:
//! `url`, `pageTitle`, `version`, `loginPage`, `headingLevels` and
//! `groupedHypermediaLinks`.

use crate::model::ParsedInfo;
use crate::Result;

/// Serializes a result as pretty-printed JSON
pub fn to_json(info: &ParsedInfo) -> Result<String> {
    Ok(serde_json::to_string_pretty(info)?)
}

/// Deserializes a result from JSON
pub fn from_json(json: &str) -> Result<ParsedInfo> {
    Ok(serde_json::from_str(json)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{GroupedLinks, HeadingLevels, HyperMediaLink, LinkGroup, LinkType};
    use crate::ParserError;

    fn sample_info() -> ParsedInfo {
        let mut headings = HeadingLevels::new();
        headings.insert("h1".to_string(), 1);
        headings.insert("h3".to_string(), 4);

        let mut groups = GroupedLinks::new();
        groups.insert(
            LinkGroup::Internal,
            vec![
                HyperMediaLink::new(
                    "img",
                    "https://example.com/logo.png",
                    LinkType::Media,
                    LinkGroup::Internal,
                ),
                HyperMediaLink::new(
                    "a",
                    "https://example.com/about",
                    LinkType::Link,
                    LinkGroup::Internal,
                ),
            ],
        );
        groups.insert(
            LinkGroup::External,
            vec![HyperMediaLink::new(
                "link",
                "https://fonts.other.net/css",
                LinkType::Import,
                LinkGroup::External,
            )],
        );

        ParsedInfo::new(
            "https://example.com",
            "Example \"quoted\"",
            "HTML5",
            true,
            headings,
            groups,
        )
    }

    #[test]
    fn test_json_round_trip_preserves_values() {
        let info = sample_info();
        let json = to_json(&info).unwrap();
        assert_eq!(from_json(&json).unwrap(), info);
    }

    #[test]
    fn test_json_group_keys() {
        let json = to_json(&sample_info()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let groups = value["groupedHypermediaLinks"].as_object().unwrap();
        assert_eq!(groups.len(), 2);
        assert!(groups.contains_key("INTERNAL"));
        assert!(groups.contains_key("EXTERNAL"));
        assert_eq!(groups["INTERNAL"][1]["url"], "https://example.com/about");
    }

    #[test]
    fn test_from_json_external_document() {
        let json = r#"{
            "url": "http://stackoverflow.com",
            "pageTitle": "Stack Overflow",
            "version": "HTML5",
            "loginPage": false,
            "headingLevels": {"h1": 1},
            "groupedHypermediaLinks": {
                "EXTERNAL": [
                    {"tagName": "a", "url": "https://other.net/", "linkType": "LINK", "linkGroup": "EXTERNAL"}
                ]
            }
        }"#;
        let info = from_json(json).unwrap();
        assert_eq!(info.page_title(), "Stack Overflow");
        assert_eq!(info.links_in(LinkGroup::External)[0].link_type(), LinkType::Link);
        assert!(info.unresolved_links().is_empty());
    }

    #[test]
    fn test_from_json_invalid() {
        assert!(matches!(from_json("{\"url\": 1}"), Err(ParserError::Json(_))));
    }
}
