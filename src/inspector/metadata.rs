//! Page metadata extraction
//!
//! Pure functions over a parsed [`Document`]: title, HTML version, login-page
//! heuristic and heading histogram.

use crate::inspector::document::{selector, Document};
use crate::model::{HeadingLevels, HtmlVersion};
use crate::Result;
use scraper::node::{Doctype, Element};
use scraper::ElementRef;

const HEADINGS: &str = "h1, h2, h3, h4, h5, h6";

/// Substring of the location that marks a login page
const LOGIN_MARKER: &str = "login";

/// Substring of a form field name that marks a password field
const PASSWORD_MARKER: &str = "password";

/// Form controls that can carry a submitted value
const FORM_FIELDS: &str = "input, select, textarea";

/// Returns the document title with whitespace collapsed
///
/// The empty string is returned when there is no `<title>`.
pub fn title(document: &Document) -> Result<String> {
    let title = document
        .select("title")?
        .first()
        .map(|element| {
            element
                .text()
                .flat_map(str::split_whitespace)
                .collect::<Vec<_>>()
                .join(" ")
        })
        .unwrap_or_default();

    Ok(title)
}

/// Describes the HTML version declared by the document
///
/// Every doctype among the root's children contributes one label; labels are
/// concatenated without a separator. No doctype yields an empty string.
pub fn html_version(document: &Document) -> String {
    document
        .doctypes()
        .map(|doctype| classify_doctype(doctype).label())
        .collect()
}

/// Classifies a doctype by its public identifier
pub fn classify_doctype(doctype: &Doctype) -> HtmlVersion {
    if doctype.public_id().is_empty() {
        HtmlVersion::Html5
    } else {
        HtmlVersion::Html4
    }
}

/// Guesses whether the document is a login page
///
/// True when the location mentions `login`, or when some form would submit
/// a field whose name mentions `password`. This is a heuristic: a sign-in
/// page with neither marker is missed, and a password-change form on any
/// page is reported as a login page.
pub fn is_login_page(document: &Document) -> Result<bool> {
    if document.location().contains(LOGIN_MARKER) {
        return Ok(true);
    }

    let forms = document.select("form")?;
    if forms.is_empty() {
        return Ok(false);
    }

    let has_password = document
        .select(FORM_FIELDS)?
        .iter()
        .filter(|field| is_submittable(field))
        .filter(|field| {
            field
                .value()
                .attr("name")
                .map_or(false, |name| name.contains(PASSWORD_MARKER))
        })
        .any(|field| form_owner(field, &forms).is_some());

    Ok(has_password)
}

/// Returns true if a form control contributes to the form data set
fn is_submittable(field: &ElementRef<'_>) -> bool {
    let element: &Element = field.value();

    if element.attr("name").map_or(true, str::is_empty) || element.attr("disabled").is_some() {
        return false;
    }

    if element.name() != "input" {
        return true;
    }

    let kind = element.attr("type").unwrap_or("text").to_ascii_lowercase();
    match kind.as_str() {
        "button" | "image" => false,
        "checkbox" | "radio" => element.attr("checked").is_some(),
        _ => true,
    }
}

/// Finds the form a control is submitted with
///
/// A non-empty `form` attribute names the owner by id. Otherwise the owner
/// is the nearest enclosing `<form>`, or for a control inside a table, the
/// last `<form>` the parser left empty in that table before the control.
/// The HTML5 tree builder produces such empty forms for markup like
/// `<table><form><tr><td><input>`, while still submitting the inputs with
/// them.
fn form_owner<'a>(field: &ElementRef<'a>, forms: &[ElementRef<'a>]) -> Option<ElementRef<'a>> {
    if let Some(id) = field.value().attr("form").filter(|id| !id.is_empty()) {
        return forms
            .iter()
            .find(|form| form.value().id() == Some(id))
            .copied();
    }

    let mut tables = Vec::new();
    for ancestor in field.ancestors().filter_map(ElementRef::wrap) {
        match ancestor.value().name() {
            "form" => return Some(ancestor),
            "table" => tables.push(ancestor),
            _ => {}
        }
    }

    tables
        .iter()
        .find_map(|table| preceding_empty_form(table, field))
}

/// The last empty `<form>` inside `table` that precedes `field`
fn preceding_empty_form<'a>(
    table: &ElementRef<'a>,
    field: &ElementRef<'a>,
) -> Option<ElementRef<'a>> {
    let mut owner = None;
    for node in table.descendants() {
        if node.id() == field.id() {
            return owner;
        }
        if let Some(element) = ElementRef::wrap(node) {
            if element.value().name() == "form" && !element.has_children() {
                owner = Some(element);
            }
        }
    }
    None
}

/// Counts heading elements by tag name
///
/// Only tags that occur are present in the result.
pub fn heading_levels(document: &Document) -> Result<HeadingLevels> {
    let mut levels = HeadingLevels::new();
    for heading in document.select(HEADINGS)? {
        *levels.entry(heading.value().name().to_string()).or_insert(0) += 1;
    }
    Ok(levels)
}
