// src/cli.rs
use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};
use tracing::{error, info};

use crate::config::options::{CacheOptions, Mode, OutputMode, RunOptions};
use crate::core::{HttpClient, PageCache};
use crate::progress::ConsoleProgress;
use crate::status::{ReportOptions, RowOrder, TotalPolicy};
use crate::{log, output, runner};

#[derive(Parser, Debug)]
#[command(name = "pydocs_scrape", version, about = "Python documentation and PEP scraper")]
pub struct Cli {
    /// What to scrape
    #[arg(value_enum)]
    pub mode: Mode,

    /// Clear the page cache before running
    #[arg(short, long)]
    pub clear_cache: bool,

    /// Skip the page cache entirely
    #[arg(long)]
    pub no_cache: bool,

    /// Extra output: aligned table or CSV file (default: plain lines)
    #[arg(short, long, value_enum)]
    pub output: Option<OutputMode>,

    /// pep: what the Total row counts
    #[arg(long, value_enum, default_value = "valid")]
    pub total: TotalPolicy,

    /// pep: row order of the status table
    #[arg(long, value_enum, default_value = "canonical")]
    pub order: RowOrder,

    /// pep: list statuses that never occurred with a count of 0
    #[arg(long)]
    pub include_zero: bool,

    /// pep: TOML file replacing the built-in status policy table
    #[arg(long, value_name = "FILE")]
    pub policy: Option<PathBuf>,

    /// Directory for logs, cache, downloads and results
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub dir: PathBuf,
}

impl Cli {
    pub fn into_options(self) -> RunOptions {
        RunOptions {
            mode: self.mode,
            output: self.output.unwrap_or_default(),
            report: ReportOptions {
                order: self.order,
                total: self.total,
                include_zero: self.include_zero,
            },
            policy_path: self.policy,
            cache: CacheOptions { enabled: !self.no_cache, clear: self.clear_cache },
            base_dir: self.dir,
        }
    }
}

pub fn run(cli: Cli) -> Result<()> {
    log::init(&cli.dir).wrap_err("could not set up logging")?;
    info!("Parser started");
    info!("Command line arguments: {cli:?}");

    let opts = cli.into_options();
    let result = run_mode(&opts);
    if let Err(e) = &result {
        error!("Parser failed: {e:#}");
    }
    info!("Parser finished");
    result
}

fn run_mode(opts: &RunOptions) -> Result<()> {
    let cache = opts.cache.enabled.then(|| PageCache::new(opts.cache_dir()));
    if opts.cache.clear {
        // clear even when --no-cache, so the flag always does what it says
        PageCache::new(opts.cache_dir()).clear().wrap_err("could not clear page cache")?;
        info!("Page cache cleared");
    }
    let client = HttpClient::new(cache)?;

    let mut progress = ConsoleProgress::new();
    let results = runner::run(opts, &client, Some(&mut progress))
        .wrap_err_with(|| format!("mode `{}` failed", opts.mode))?;

    if let Some(ds) = results {
        output::control_output(&ds, opts.mode, opts.output, &opts.results_dir())?;
    }
    Ok(())
}
