// src/specs/whats_new.rs
//! Scraping *spec* for “What's New in Python” (`/3/whatsnew/`).
//!
//! The index lists one `li.toctree-l1` per release inside
//! `#what-s-new-in-python div.toctree-wrapper`. Each article has the title in
//! its `<h1>` and editors/authors in the first `<dl>`.

use tracing::warn;
use url::Url;

use crate::core::html::{self, find_in_doc, find_tag, raw_text, select_all, text_of};
use crate::core::net::{PageSource, join_url};
use crate::core::sanitize::flatten_lines;
use crate::data::DataSet;
use crate::error::{Result, ScrapeError};
use crate::progress::Progress;

pub const HEADERS: [&str; 3] = ["Article link", "Title", "Editor, author"];
const ARTICLE_ITEMS: &str = "#what-s-new-in-python div.toctree-wrapper li.toctree-l1";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Article {
    pub title: String,
    pub editors: String,
}

/// Article URLs from the index page, in page order.
pub fn extract_article_links(doc: &str, page_url: &Url) -> Result<Vec<Url>> {
    let doc = html::parse(doc);
    let items = select_all(doc.root_element(), ARTICLE_ITEMS)?;
    if items.is_empty() {
        return Err(ScrapeError::ListingNotFound("What's New toctree"));
    }
    items
        .into_iter()
        .map(|li| {
            let a = find_tag(li, "a")?;
            join_url(page_url, html::attr(a, "href")?)
        })
        .collect()
}

pub fn extract_article(doc: &str) -> Result<Article> {
    let doc = html::parse(doc);
    let title = text_of(find_in_doc(&doc, "h1")?);
    let editors = flatten_lines(&raw_text(find_in_doc(&doc, "dl")?)).trim().to_string();
    Ok(Article { title, editors })
}

pub fn collect(
    source: &dyn PageSource,
    docs_url: &Url,
    progress: &mut dyn Progress,
) -> Result<DataSet> {
    let index_url = join_url(docs_url, "whatsnew/")?;
    let links = extract_article_links(&source.fetch_page(&index_url)?, &index_url)?;

    progress.begin(links.len());
    let out = visit_articles(source, links, progress);
    progress.finish();
    out
}

fn visit_articles(source: &dyn PageSource, links: Vec<Url>, progress: &mut dyn Progress) -> Result<DataSet> {
    let mut out = DataSet::with_headers(&HEADERS);
    for link in links {
        let page = match source.fetch_page(&link) {
            Ok(page) => page,
            Err(e) if e.is_recoverable() => {
                warn!("{e}");
                progress.item_failed(link.as_str());
                continue;
            }
            Err(e) => return Err(e),
        };
        let article = extract_article(&page)?;
        progress.item_done(link.as_str());
        out.push_row([link.to_string(), article.title, article.editors]);
    }
    Ok(out)
}
