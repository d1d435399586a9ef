// src/specs/pep.rs
//! Scraping *spec* for the PEP index (`https://peps.python.org/`).
//!
//! Index page:
//! - every `table.pep-zero-table` row is one PEP;
//! - the first `<abbr>` holds the type+status marker (`SF` = Standards track,
//!   Final). We keep everything after the type letter; no `<abbr>` means `""`;
//! - the first `<a href>` links to the PEP page. Rows without one (headers)
//!   are skipped.
//!
//! PEP page: the field list has `<dt>Status:</dt><dd><abbr>Final</abbr></dd>`.
//!
//! The same PEP may appear in several index tables; every row is visited.

use tracing::{debug, warn};
use url::Url;

use crate::core::html::{self, find_tag, next_sibling_named, select_all, text_of};
use crate::core::net::{PageSource, join_url};
use crate::error::{Result, ScrapeError};
use crate::progress::Progress;
use crate::status::{DeclaredCode, ScrapedEntry, StatusLabel};

const INDEX_TABLE: &str = "table.pep-zero-table";
const STATUS_FIELD: &str = "Status field (dt/dd)";

/// One row of the index: what the index claims, and where to check.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IndexRow {
    pub declared_code: DeclaredCode,
    pub link: Url,
}

pub fn extract_index_rows(doc: &str, page_url: &Url) -> Result<Vec<IndexRow>> {
    let doc = html::parse(doc);
    let tables = select_all(doc.root_element(), INDEX_TABLE)?;
    if tables.is_empty() {
        return Err(ScrapeError::ListingNotFound("PEP index tables"));
    }

    let mut out = Vec::new();
    for table in tables {
        for row in select_all(table, "tr")? {
            let Ok(a) = find_tag(row, "a[href]") else { continue };
            let link = join_url(page_url, html::attr(a, "href")?)?;

            let declared_code = match find_tag(row, "abbr") {
                Ok(abbr) => DeclaredCode::new(text_of(abbr).chars().skip(1).collect::<String>()),
                Err(_) => DeclaredCode::none(),
            };
            out.push(IndexRow { declared_code, link });
        }
    }
    Ok(out)
}

/// Status label from a single PEP page.
pub fn extract_observed_status(doc: &str) -> Result<StatusLabel> {
    let doc = html::parse(doc);
    for dt in select_all(doc.root_element(), "dt")? {
        if text_of(dt).trim_end_matches(':').trim() != "Status" {
            continue;
        }
        let Some(dd) = next_sibling_named(dt, "dd") else { break };
        let label = match find_tag(dd, "abbr") {
            Ok(abbr) => text_of(abbr),
            Err(_) => text_of(dd),
        };
        if !label.is_empty() {
            return Ok(StatusLabel::new(label));
        }
        break;
    }
    Err(ScrapeError::missing(STATUS_FIELD))
}

/// Crawl the index and every PEP page it links to.
///
/// Pages that fail to download are logged and skipped. A PEP page without a
/// status field aborts the crawl.
pub fn collect_entries(
    source: &dyn PageSource,
    index_url: &Url,
    progress: &mut dyn Progress,
) -> Result<Vec<ScrapedEntry>> {
    let index = source.fetch_page(index_url)?;
    let rows = extract_index_rows(&index, index_url)?;
    debug!(rows = rows.len(), "PEP index parsed");

    progress.begin(rows.len());
    let entries = visit_pages(source, rows, progress);
    progress.finish();
    entries
}

fn visit_pages(
    source: &dyn PageSource,
    rows: Vec<IndexRow>,
    progress: &mut dyn Progress,
) -> Result<Vec<ScrapedEntry>> {
    let mut entries = Vec::with_capacity(rows.len());
    for row in rows {
        let page = match source.fetch_page(&row.link) {
            Ok(page) => page,
            Err(e) if e.is_recoverable() => {
                warn!("{e}");
                progress.item_failed(row.link.as_str());
                continue;
            }
            Err(e) => return Err(e),
        };
        let observed_status = extract_observed_status(&page)?;
        progress.item_done(row.link.as_str());
        entries.push(ScrapedEntry {
            declared_code: row.declared_code,
            observed_status,
            source_link: row.link.into(),
        });
    }
    Ok(entries)
}
