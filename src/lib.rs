// src/lib.rs
//! Scraper for docs.python.org and peps.python.org.
//!
//! Modes live in `specs`, PEP status reconciliation in `status`, and
//! `runner::run` ties a mode to a `PageSource`.

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod csv;
pub mod data;
pub mod error;
pub mod log;
pub mod output;
pub mod progress;
pub mod runner;
pub mod specs;
pub mod status;

pub use error::{Result, ScrapeError};
