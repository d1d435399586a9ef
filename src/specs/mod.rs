// src/specs/mod.rs
//! # Scraping “specs” module
//!
//! One file per page family on docs.python.org / peps.python.org. Each spec
//! knows *where the data lives in the HTML* and how to pull it out; it does
//! not decide how results are shown or stored.
//!
//! ## Conventions
//! - Pure `extract_*` functions take the page text and the page URL (for
//!   resolving relative links) so they can be tested against saved HTML.
//! - `collect`/`fetch` functions drive a `PageSource` and a `Progress` sink.
//! - A missing *required* element is `ScrapeError::RequiredElementMissing`;
//!   a missing top-level listing is `ScrapeError::ListingNotFound`. Both stop
//!   the mode. A page that fails to download is logged and skipped.
//!
//! ## Current specs
//! - `whats_new` – “What's New” articles: link, title, editors.
//! - `latest_versions` – sidebar version list: link, version, status.
//! - `download` – A4 PDF archive link (and the download itself).
//! - `pep` – PEP index rows + per-PEP status, fed to `status::reconcile`.
pub mod download;
pub mod latest_versions;
pub mod pep;
pub mod whats_new;
