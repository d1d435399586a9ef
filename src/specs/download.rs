// src/specs/download.rs
//! Scraping *spec* for `download.html`: locate the A4 PDF archive in the
//! main content table and save it under the downloads directory.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;
use url::Url;

use crate::core::html::{self, find_in_doc};
use crate::core::net::{PageSource, join_url};
use crate::core::sanitize::file_name_from_url;
use crate::error::{Result, ScrapeError};

const ARCHIVE_LINK: &str = r#"div[role="main"] table.docutils a[href*="pdf-a4.zip"]"#;

pub fn find_archive_link(doc: &str, page_url: &Url) -> Result<Url> {
    let doc = html::parse(doc);
    let a = find_in_doc(&doc, ARCHIVE_LINK)?;
    join_url(page_url, html::attr(a, "href")?)
}

/// Download the archive into `downloads_dir` (created if missing) and
/// return the saved path. An existing file with the same name is replaced.
pub fn fetch(source: &dyn PageSource, docs_url: &Url, downloads_dir: &Path) -> Result<PathBuf> {
    let page_url = join_url(docs_url, "download.html")?;
    let archive_url = find_archive_link(&source.fetch_page(&page_url)?, &page_url)?;
    let filename = file_name_from_url(archive_url.as_str())
        .ok_or_else(|| ScrapeError::missing("archive file name"))?;

    fs::create_dir_all(downloads_dir)?;
    let archive_path = downloads_dir.join(filename);
    let bytes = source.fetch_bytes(&archive_url)?;
    fs::write(&archive_path, &bytes)?;

    info!("Archive downloaded and saved: {}", archive_path.display());
    Ok(archive_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::net::parse_url;

    #[test]
    fn archive_link_in_main_table() {
        let page = r#"
        <div role="main">
          <table class="docutils align-default">
            <tr><td>PDF (US-Letter paper size)</td>
                <td><a href="archives/python-3.13-docs-pdf-letter.zip">Download</a></td></tr>
            <tr><td>PDF (A4 paper size)</td>
                <td><a href="archives/python-3.13-docs-pdf-a4.zip">Download</a></td></tr>
          </table>
        </div>"#;
        let base = parse_url("https://docs.python.org/3/download.html").unwrap();
        assert_eq!(
            find_archive_link(page, &base).unwrap().as_str(),
            "https://docs.python.org/3/archives/python-3.13-docs-pdf-a4.zip"
        );
    }

    #[test]
    fn link_outside_main_is_ignored() {
        let page = r#"<div class="footer"><table class="docutils"><a href="x-pdf-a4.zip">x</a></table></div>"#;
        let base = parse_url("https://docs.python.org/3/download.html").unwrap();
        assert!(matches!(
            find_archive_link(page, &base),
            Err(ScrapeError::RequiredElementMissing { .. })
        ));
    }
}
