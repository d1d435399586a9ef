// src/error.rs
//
// One error type for the whole scraper.
//
// Per-page failures (`Transport`) are recoverable: the crawl logs them and
// moves on. Everything else means the page structure or the local setup is
// not what we expect, and the current mode stops.
//
// Status mismatches are NOT errors; see `status::reconcile::Discrepancy`.

use std::path::PathBuf;

use thiserror::Error;

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("failed to load page {url}: {source}")]
    Transport {
        url: String,
        #[source]
        source: BoxError,
    },

    #[error("required element not found: {selector}")]
    RequiredElementMissing { selector: String },

    #[error("listing not found: {0}")]
    ListingNotFound(&'static str),

    #[error("invalid selector `{selector}`: {message}")]
    InvalidSelector { selector: String, message: String },

    #[error("invalid url `{url}`: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("invalid policy table{}: {message}", path_suffix(.path))]
    Policy {
        path: Option<PathBuf>,
        message: String,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl ScrapeError {
    pub fn transport(url: impl Into<String>, source: impl Into<BoxError>) -> Self {
        ScrapeError::Transport { url: url.into(), source: source.into() }
    }

    pub fn missing(selector: impl Into<String>) -> Self {
        ScrapeError::RequiredElementMissing { selector: selector.into() }
    }

    /// True when the failure only affects one page and the crawl may continue.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, ScrapeError::Transport { .. })
    }
}

fn path_suffix(path: &Option<PathBuf>) -> String {
    match path {
        Some(p) => format!(" in {}", p.display()),
        None => String::new(),
    }
}

pub type Result<T, E = ScrapeError> = std::result::Result<T, E>;
