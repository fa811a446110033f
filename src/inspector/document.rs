//! Parsed document model
//!
//! Wraps a `scraper::Html` tree together with the location it was retrieved
//! from, and exposes what the extractors need: the root's child nodes, CSS
//! selection, and attribute values resolved against the document base URL.

use crate::{ParserError, Result};
use scraper::node::{Doctype, Node};
use scraper::{ElementRef, Html, Selector};
use url::Url;

/// An HTML document and the URL it was retrieved from
#[derive(Debug)]
pub struct Document {
    html: Html,
    location: String,
    base: Option<Url>,
}

impl Document {
    /// Parses HTML retrieved from `location`
    ///
    /// The base URL for attribute resolution is the first `<base href>` of
    /// the document resolved against the location, or the location itself.
    /// Parsing never fails: malformed markup is repaired by the HTML5 parser.
    ///
    /// # Example
    ///
    /// ```
    /// use html_insight::inspector::Document;
    ///
    /// let doc = Document::parse("<a href='/about'>About</a>", "https://example.com/");
    /// assert_eq!(doc.resolve("/about"), "https://example.com/about");
    /// ```
    pub fn parse(html: &str, location: &str) -> Self {
        let html = Html::parse_document(html);
        let base = resolve_base(&html, Url::parse(location).ok());

        Self {
            html,
            location: location.to_string(),
            base,
        }
    }

    /// The URL the document was retrieved from, after redirects
    pub fn location(&self) -> &str {
        &self.location
    }

    /// The URL relative references are resolved against
    pub fn base_url(&self) -> Option<&Url> {
        self.base.as_ref()
    }

    /// Direct children of the document root, in order
    pub fn child_nodes(&self) -> impl Iterator<Item = &Node> + '_ {
        self.html.tree.root().children().map(|child| child.value())
    }

    /// Document type declarations among the root's children
    pub fn doctypes(&self) -> impl Iterator<Item = &Doctype> + '_ {
        self.child_nodes().filter_map(|node| match node {
            Node::Doctype(doctype) => Some(doctype),
            _ => None,
        })
    }

    /// Selects elements matching a CSS selector, in document order
    pub fn select(&self, css: &str) -> Result<Vec<ElementRef<'_>>> {
        let selector = selector(css)?;
        Ok(self.html.select(&selector).collect())
    }

    /// Raw value of an attribute
    pub fn attr<'a>(&self, element: &ElementRef<'a>, name: &str) -> Option<&'a str> {
        element.value().attr(name)
    }

    /// Value of an attribute resolved to an absolute URL
    ///
    /// Falls back to the raw attribute text when it cannot be resolved.
    pub fn abs_attr(&self, element: &ElementRef<'_>, name: &str) -> Option<String> {
        self.attr(element, name).map(|raw| self.resolve(raw))
    }

    /// Resolves a reference against the base URL
    ///
    /// Returns the input unchanged when there is no usable base or the join
    /// fails.
    pub fn resolve(&self, reference: &str) -> String {
        self.base
            .as_ref()
            .and_then(|base| base.join(reference.trim()).ok())
            .map(|url| url.to_string())
            .unwrap_or_else(|| reference.to_string())
    }
}

/// Compiles a CSS selector
pub(crate) fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| ParserError::Selector {
        selector: css.to_string(),
        message: e.to_string(),
    })
}

/// Determines the base URL from the first `<base href>` and the location
fn resolve_base(html: &Html, location: Option<Url>) -> Option<Url> {
    let href = Selector::parse("base[href]")
        .ok()
        .and_then(|base_selector| {
            html.select(&base_selector)
                .next()
                .and_then(|element| element.value().attr("href"))
                .map(|href| href.trim().to_string())
        });

    match (href, location) {
        (Some(href), Some(location)) => location.join(&href).ok().or(Some(location)),
        (Some(href), None) => Url::parse(&href).ok(),
        (None, location) => location,
    }
}
