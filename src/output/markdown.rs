//! Markdown report generation
//!
//! This module renders a human-readable report of one inspection.

use crate::model::{LinkGroup, ParsedInfo};

/// Formats an inspection result as markdown
pub fn format_markdown_report(info: &ParsedInfo) -> String {
    let mut md = String::new();

    md.push_str("# Page Report\n\n");

    md.push_str("## Overview\n\n");
    md.push_str(&format!("- **URL**: {}\n", info.url()));
    md.push_str(&format!(
        "- **Title**: {}\n",
        or_none(info.page_title())
    ));
    md.push_str(&format!(
        "- **HTML Version**: {}\n",
        or_none(info.version())
    ));
    md.push_str(&format!(
        "- **Login Page**: {}\n",
        if info.is_login_page() { "yes" } else { "no" }
    ));
    md.push_str(&format!("- **Total Links**: {}\n\n", info.link_count()));

    md.push_str("## Headings\n\n");
    if info.heading_levels().is_empty() {
        md.push_str("No headings found.\n\n");
    } else {
        md.push_str("| Tag | Count |\n");
        md.push_str("|-----|-------|\n");
        for (tag, count) in info.heading_levels() {
            md.push_str(&format!("| {} | {} |\n", tag, count));
        }
        md.push('\n');
    }

    for group in [LinkGroup::Internal, LinkGroup::External] {
        let links = info.links_in(group);
        if links.is_empty() {
            continue;
        }

        let heading = match group {
            LinkGroup::Internal => "Internal Links",
            LinkGroup::External => "External Links",
        };
        md.push_str(&format!("## {} ({})\n\n", heading, links.len()));
        md.push_str("| Type | Tag | URL |\n");
        md.push_str("|------|-----|-----|\n");
        for link in links {
            md.push_str(&format!(
                "| {} | {} | {} |\n",
                link.link_type(),
                link.tag_name(),
                escape_cell(link.url())
            ));
        }
        md.push('\n');
    }

    if !info.unresolved_links().is_empty() {
        md.push_str(&format!(
            "## Unresolved Links ({})\n\n",
            info.unresolved_links().len()
        ));
        md.push_str("| Type | Tag | URL | Reason |\n");
        md.push_str("|------|-----|-----|--------|\n");
        for link in info.unresolved_links() {
            md.push_str(&format!(
                "| {} | {} | {} | {} |\n",
                link.link_type,
                link.tag_name,
                escape_cell(&link.url),
                escape_cell(&link.reason)
            ));
        }
        md.push('\n');
    }

    md
}

fn or_none(value: &str) -> &str {
    if value.is_empty() {
        "(none)"
    } else {
        value
    }
}

/// Escapes pipes so a value cannot break a table row
fn escape_cell(value: &str) -> String {
    value.replace('|', "\\|")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{GroupedLinks, HeadingLevels, HyperMediaLink, LinkType, UnresolvedLink};

    fn sample_info() -> ParsedInfo {
        let mut headings = HeadingLevels::new();
        headings.insert("h1".to_string(), 2);

        let mut groups = GroupedLinks::new();
        groups.insert(
            LinkGroup::External,
            vec![HyperMediaLink::new(
                "img",
                "https://cdn.other.net/a|b.png",
                LinkType::Media,
                LinkGroup::External,
            )],
        );

        ParsedInfo::new("https://example.com", "", "HTML5", true, headings, groups)
    }

    #[test]
    fn test_report_overview() {
        let md = format_markdown_report(&sample_info());
        assert!(md.starts_with("# Page Report"));
        assert!(md.contains("- **URL**: https://example.com\n"));
        assert!(md.contains("- **Title**: (none)\n"));
        assert!(md.contains("- **HTML Version**: HTML5\n"));
        assert!(md.contains("- **Login Page**: yes\n"));
        assert!(md.contains("- **Total Links**: 1\n"));
    }

    #[test]
    fn test_report_headings_table() {
        let md = format_markdown_report(&sample_info());
        assert!(md.contains("| h1 | 2 |"));
    }

    #[test]
    fn test_report_only_present_groups() {
        let md = format_markdown_report(&sample_info());
        assert!(md.contains("## External Links (1)"));
        assert!(!md.contains("## Internal Links"));
        assert!(md.contains("| MEDIA | img | https://cdn.other.net/a\\|b.png |"));
    }

    #[test]
    fn test_report_unresolved_section() {
        let info = sample_info().with_unresolved_links(vec![UnresolvedLink {
            tag_name: "a".to_string(),
            url: "mailto:someone@example.com".to_string(),
            link_type: LinkType::Link,
            reason: "Missing host".to_string(),
        }]);
        let md = format_markdown_report(&info);
        assert!(md.contains("## Unresolved Links (1)"));
        assert!(md.contains("| LINK | a | mailto:someone@example.com | Missing host |"));
    }

    #[test]
    fn test_report_without_headings() {
        let info = ParsedInfo::new(
            "https://example.com",
            "Empty",
            "",
            false,
            HeadingLevels::new(),
            GroupedLinks::new(),
        );
        let md = format_markdown_report(&info);
        assert!(md.contains("No headings found."));
        assert!(md.contains("- **HTML Version**: (none)\n"));
    }
}
