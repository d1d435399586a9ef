// src/runner.rs
use tracing::{info, warn};

use crate::config::consts::{MAIN_DOC_URL, PEP_URL};
use crate::config::options::{Mode, RunOptions};
use crate::core::net::{PageSource, parse_url};
use crate::data::DataSet;
use crate::error::Result;
use crate::progress::{NullProgress, Progress};
use crate::specs;
use crate::status::{Discrepancy, PolicyTable, Report, assemble_report, reconcile};

/// Outcome of the PEP crawl.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PepSummary {
    pub report: Report,
    pub discrepancies: Vec<Discrepancy>,
}

/// Top-level runner: dispatch on mode. Returns the table to render, or
/// `None` for modes that only have side effects (download).
/// `progress` can be None (no UI updates) or Some(&mut impl Progress).
pub fn run(
    opts: &RunOptions,
    source: &dyn PageSource,
    progress: Option<&mut dyn Progress>,
) -> Result<Option<DataSet>> {
    let mut null = NullProgress;
    let progress: &mut dyn Progress = match progress {
        Some(p) => p,
        None => &mut null,
    };

    let docs_url = parse_url(MAIN_DOC_URL)?;
    match opts.mode {
        Mode::WhatsNew => specs::whats_new::collect(source, &docs_url, progress).map(Some),
        Mode::LatestVersions => specs::latest_versions::collect(source, &docs_url).map(Some),
        Mode::Download => {
            specs::download::fetch(source, &docs_url, &opts.downloads_dir())?;
            Ok(None)
        }
        Mode::Pep => {
            let policy = load_policy(opts)?;
            let summary = run_pep(source, &policy, opts, progress)?;
            Ok(Some(summary.report.to_dataset()))
        }
    }
}

pub fn load_policy(opts: &RunOptions) -> Result<PolicyTable> {
    match &opts.policy_path {
        Some(path) => {
            info!("Using policy table from {}", path.display());
            PolicyTable::load(path)
        }
        None => Ok(PolicyTable::pep_default()),
    }
}

/// Crawl the PEP index, reconcile statuses and build the report.
/// Each discrepancy is logged; none of them stops the run.
pub fn run_pep(
    source: &dyn PageSource,
    policy: &PolicyTable,
    opts: &RunOptions,
    progress: &mut dyn Progress,
) -> Result<PepSummary> {
    let index_url = parse_url(PEP_URL)?;
    let entries = specs::pep::collect_entries(source, &index_url, progress)?;

    let reconciliation = reconcile(policy, &entries);
    for d in &reconciliation.discrepancies {
        warn!("{d}");
    }
    if !reconciliation.discrepancies.is_empty() {
        info!(
            "{} of {} PEPs left out of the counts",
            reconciliation.discrepancies.len(),
            entries.len()
        );
    }

    let report = assemble_report(&reconciliation.aggregate, policy, &opts.report);
    Ok(PepSummary { report, discrepancies: reconciliation.discrepancies })
}
