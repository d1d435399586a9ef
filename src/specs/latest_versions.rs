// src/specs/latest_versions.rs
//! Scraping *spec* for the version list in the docs sidebar.
//!
//! `div.sphinxsidebarwrapper` holds several `<ul>`s; the one mentioning
//! “All versions” links every documented release as `Python 3.12 (stable)`.
//! Links whose text doesn't match that shape are kept with an empty status.

use std::sync::LazyLock;

use regex::Regex;
use url::Url;

use crate::core::html::{self, find_in_doc, raw_text, select_all, text_of};
use crate::core::net::{PageSource, join_url};
use crate::data::DataSet;
use crate::error::{Result, ScrapeError};

pub const HEADERS: [&str; 3] = ["Documentation link", "Version", "Status"];

static VERSION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Python (?P<version>\d\.\d+) \((?P<status>.*)\)").expect("version pattern")
});

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VersionRow {
    pub link: String,
    pub version: String,
    pub status: String,
}

/// Split `Python 3.13 (in development)` into version and status.
pub fn parse_version_text(text: &str) -> (String, String) {
    match VERSION_RE.captures(text) {
        Some(caps) => (caps["version"].to_string(), caps["status"].to_string()),
        None => (text.to_string(), String::new()),
    }
}

pub fn extract_versions(doc: &str, page_url: &Url) -> Result<Vec<VersionRow>> {
    let doc = html::parse(doc);
    let sidebar = find_in_doc(&doc, "div.sphinxsidebarwrapper")?;
    let list = select_all(sidebar, "ul")?
        .into_iter()
        .find(|ul| raw_text(*ul).contains("All versions"))
        .ok_or(ScrapeError::ListingNotFound("All versions"))?;

    select_all(list, "a[href]")?
        .into_iter()
        .map(|a| {
            let link = join_url(page_url, html::attr(a, "href")?)?;
            let (version, status) = parse_version_text(&text_of(a));
            Ok(VersionRow { link: link.into(), version, status })
        })
        .collect()
}

pub fn collect(source: &dyn PageSource, docs_url: &Url) -> Result<DataSet> {
    let rows = extract_versions(&source.fetch_page(docs_url)?, docs_url)?;
    let mut out = DataSet::with_headers(&HEADERS);
    for r in rows {
        out.push_row([r.link, r.version, r.status]);
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::net::parse_url;

    const SIDEBAR: &str = r#"
    <div class="sphinxsidebar"><div class="sphinxsidebarwrapper">
      <h3>Navigation</h3>
      <ul><li><a href="contents.html">Contents</a></li></ul>
      <h3>Docs by version</h3>
      <ul>
        <li><a href="https://docs.python.org/3.14/">Python 3.14 (in development)</a></li>
        <li><a href="https://docs.python.org/3.13/">Python 3.13 (stable)</a></li>
        <li><a href="https://docs.python.org/3.9/">Python 3.9 (security-fixes)</a></li>
        <li><a href="https://www.python.org/doc/versions/">All versions</a></li>
      </ul>
    </div></div>"#;

    #[test]
    fn versions_from_sidebar() {
        let base = parse_url("https://docs.python.org/3/").unwrap();
        let rows = extract_versions(SIDEBAR, &base).unwrap();
        assert_eq!(rows.len(), 4);
        assert_eq!(
            rows[1],
            VersionRow {
                link: "https://docs.python.org/3.13/".into(),
                version: "3.13".into(),
                status: "stable".into(),
            }
        );
        assert_eq!(rows[3].version, "All versions");
        assert_eq!(rows[3].status, "");
    }

    #[test]
    fn no_all_versions_list_aborts() {
        let base = parse_url("https://docs.python.org/3/").unwrap();
        let page = r#"<div class="sphinxsidebarwrapper"><ul><li><a href="x">x</a></li></ul></div>"#;
        let err = extract_versions(page, &base).unwrap_err();
        assert!(matches!(err, ScrapeError::ListingNotFound("All versions")));
    }

    #[test]
    fn version_text_variants() {
        assert_eq!(parse_version_text("Python 3.10 (security-fixes)"), ("3.10".into(), "security-fixes".into()));
        assert_eq!(parse_version_text("Python 2.7 (EOL)"), ("2.7".into(), "EOL".into()));
        assert_eq!(parse_version_text("Old docs"), ("Old docs".into(), String::new()));
    }
}
