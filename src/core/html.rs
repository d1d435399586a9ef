// src/core/html.rs
//
// Thin helpers over `scraper`: parse, compile selectors with our error type,
// and fail loudly when a required element is not there.

use scraper::{ElementRef, Html, Selector};

use super::sanitize::normalize_ws;
use crate::error::{Result, ScrapeError};

pub fn parse(doc: &str) -> Html {
    Html::parse_document(doc)
}

pub fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| ScrapeError::InvalidSelector {
        selector: css.to_string(),
        message: e.to_string(),
    })
}

/// First element under `scope` matching `css`, or `RequiredElementMissing`.
pub fn find_tag<'a>(scope: ElementRef<'a>, css: &str) -> Result<ElementRef<'a>> {
    let sel = selector(css)?;
    scope.select(&sel).next().ok_or_else(|| ScrapeError::missing(css))
}

/// Same as `find_tag`, starting at the document root.
pub fn find_in_doc<'a>(doc: &'a Html, css: &str) -> Result<ElementRef<'a>> {
    find_tag(doc.root_element(), css)
}

pub fn select_all<'a>(scope: ElementRef<'a>, css: &str) -> Result<Vec<ElementRef<'a>>> {
    let sel = selector(css)?;
    Ok(scope.select(&sel).collect())
}

/// All text inside `el`, whitespace collapsed.
pub fn text_of(el: ElementRef<'_>) -> String {
    normalize_ws(&raw_text(el))
}

/// All text inside `el`, untouched.
pub fn raw_text(el: ElementRef<'_>) -> String {
    el.text().collect()
}

pub fn attr<'a>(el: ElementRef<'a>, name: &str) -> Result<&'a str> {
    el.value()
        .attr(name)
        .ok_or_else(|| ScrapeError::missing(format!("{}[{}]", el.value().name(), name)))
}

/// Next sibling *element* named `tag` (skips text/comment nodes).
pub fn next_sibling_named<'a>(el: ElementRef<'a>, tag: &str) -> Option<ElementRef<'a>> {
    el.next_siblings()
        .filter_map(ElementRef::wrap)
        .find(|sib| sib.value().name().eq_ignore_ascii_case(tag))
}
