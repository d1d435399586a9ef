// src/core/net.rs
//
// Page fetching. Specs talk to a `PageSource`, so they can run against the
// live site (`HttpClient`) or against saved HTML in tests.

use std::time::Duration;

use tracing::debug;
use url::Url;

use super::cache::PageCache;
use crate::config::consts::{REQUEST_TIMEOUT_SECS, USER_AGENT};
use crate::error::{Result, ScrapeError};

pub trait PageSource {
    /// Fetch a page as UTF-8 text.
    fn fetch_page(&self, url: &Url) -> Result<String>;

    /// Fetch raw bytes (archives). Never cached.
    fn fetch_bytes(&self, url: &Url) -> Result<Vec<u8>>;
}

/// Blocking HTTP client with an optional on-disk page cache.
pub struct HttpClient {
    client: reqwest::blocking::Client,
    cache: Option<PageCache>,
}

impl HttpClient {
    pub fn new(cache: Option<PageCache>) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| ScrapeError::transport("<client setup>", e))?;
        Ok(Self { client, cache })
    }

    fn get(&self, url: &Url) -> Result<reqwest::blocking::Response> {
        debug!(%url, "GET");
        self.client
            .get(url.clone())
            .send()
            .and_then(|r| r.error_for_status())
            .map_err(|e| ScrapeError::transport(url.as_str(), e))
    }
}

impl PageSource for HttpClient {
    fn fetch_page(&self, url: &Url) -> Result<String> {
        if let Some(body) = self.cache.as_ref().and_then(|c| c.get(url.as_str())) {
            return Ok(body);
        }

        let bytes = self
            .get(url)?
            .bytes()
            .map_err(|e| ScrapeError::transport(url.as_str(), e))?;
        // docs.python.org is UTF-8 regardless of what the headers say
        let body = String::from_utf8_lossy(&bytes).into_owned();

        if let Some(cache) = &self.cache {
            // best-effort; a failed write only costs a refetch next run
            if let Err(e) = cache.put(url.as_str(), &body) {
                debug!(%url, error = %e, "cache write failed");
            }
        }
        Ok(body)
    }

    fn fetch_bytes(&self, url: &Url) -> Result<Vec<u8>> {
        let bytes = self
            .get(url)?
            .bytes()
            .map_err(|e| ScrapeError::transport(url.as_str(), e))?;
        Ok(bytes.to_vec())
    }
}

/// Resolve `href` against `base` (relative links on the docs pages).
pub fn join_url(base: &Url, href: &str) -> Result<Url> {
    base.join(href).map_err(|source| ScrapeError::InvalidUrl { url: href.to_string(), source })
}

pub fn parse_url(url: &str) -> Result<Url> {
    Url::parse(url).map_err(|source| ScrapeError::InvalidUrl { url: url.to_string(), source })
}
