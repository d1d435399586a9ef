// tests/common/mod.rs
//
// Offline `PageSource` backed by saved HTML, plus a recording progress sink.
#![allow(dead_code)]

use std::collections::HashMap;
use std::path::Path;

use pydocs_scrape::core::PageSource;
use pydocs_scrape::progress::Progress;
use pydocs_scrape::{Result, ScrapeError};
use url::Url;

#[derive(Default)]
pub struct StaticPages {
    pages: HashMap<String, String>,
    files: HashMap<String, Vec<u8>>,
}

impl StaticPages {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(mut self, url: &str, body: impl Into<String>) -> Self {
        self.pages.insert(url.to_string(), body.into());
        self
    }

    pub fn fixture(self, url: &str, name: &str) -> Self {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures").join(name);
        let body = std::fs::read_to_string(&path)
            .unwrap_or_else(|e| panic!("read fixture {}: {e}", path.display()));
        self.page(url, body)
    }

    pub fn file(mut self, url: &str, bytes: &[u8]) -> Self {
        self.files.insert(url.to_string(), bytes.to_vec());
        self
    }
}

fn not_found(url: &Url) -> ScrapeError {
    ScrapeError::transport(
        url.as_str(),
        std::io::Error::new(std::io::ErrorKind::NotFound, "404 Not Found"),
    )
}

impl PageSource for StaticPages {
    fn fetch_page(&self, url: &Url) -> Result<String> {
        self.pages.get(url.as_str()).cloned().ok_or_else(|| not_found(url))
    }

    fn fetch_bytes(&self, url: &Url) -> Result<Vec<u8>> {
        self.files.get(url.as_str()).cloned().ok_or_else(|| not_found(url))
    }
}

#[derive(Debug, Default)]
pub struct RecordingProgress {
    pub total: Option<usize>,
    pub done: Vec<String>,
    pub failed: Vec<String>,
    pub finished: bool,
}

impl Progress for RecordingProgress {
    fn begin(&mut self, total: usize) {
        self.total = Some(total);
    }
    fn item_done(&mut self, url: &str) {
        self.done.push(url.to_string());
    }
    fn item_failed(&mut self, url: &str) {
        self.failed.push(url.to_string());
    }
    fn finish(&mut self) {
        self.finished = true;
    }
}

pub fn pep_page(status: &str) -> String {
    format!(
        r#"<html><body><article>
        <dl class="rfc2822 field-list simple">
          <dt class="field-odd">Author<span class="colon">:</span></dt>
          <dd class="field-odd">Someone</dd>
          <dt class="field-even">Status<span class="colon">:</span></dt>
          <dd class="field-even"><abbr title="{status}">{status}</abbr></dd>
          <dt class="field-odd">Type<span class="colon">:</span></dt>
          <dd class="field-odd"><abbr>Standards Track</abbr></dd>
        </dl></article></body></html>"#
    )
}
