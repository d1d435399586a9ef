// src/status/mod.rs
//! # PEP status reconciliation
//!
//! The index page declares a status code for every PEP; each PEP page shows
//! its actual status. This module checks the two against a `PolicyTable`,
//! counts the agreeing ones and reports the rest as `Discrepancy` values.
//!
//! ```text
//! specs::pep (scrape) → Vec<ScrapedEntry> → reconcile() → Reconciliation
//!                                                ↘ assemble_report() → Report
//! ```
//!
//! Everything here is pure: no I/O, no logging. The runner decides what to do
//! with discrepancies.
pub mod policy;
pub mod reconcile;
pub mod report;

pub use policy::{DeclaredCode, PolicyTable, StatusLabel};
pub use reconcile::{Discrepancy, DiscrepancyKind, Reconciliation, ScrapedEntry, StatusAggregate, reconcile};
pub use report::{Report, ReportOptions, RowOrder, TotalPolicy, assemble_report};
