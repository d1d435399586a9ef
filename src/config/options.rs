// src/config/options.rs
use std::fmt;
use std::path::{Path, PathBuf};

use super::consts::*;
use crate::status::ReportOptions;

/// What to scrape.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum Mode {
    WhatsNew,
    LatestVersions,
    Download,
    Pep,
}

impl Mode {
    pub const ALL: [Mode; 4] = [Mode::WhatsNew, Mode::LatestVersions, Mode::Download, Mode::Pep];

    /// Name used on the command line and in result file names.
    pub fn name(&self) -> &'static str {
        match self {
            Mode::WhatsNew => "whats-new",
            Mode::LatestVersions => "latest-versions",
            Mode::Download => "download",
            Mode::Pep => "pep",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// How the resulting table is shown.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum OutputMode {
    /// One line per row, cells separated by spaces.
    #[default]
    #[cfg_attr(feature = "cli", value(skip))]
    Plain,
    /// Bordered, aligned console table.
    Pretty,
    /// CSV file under `results/`.
    File,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CacheOptions {
    pub enabled: bool,
    pub clear: bool,
}

impl Default for CacheOptions {
    fn default() -> Self {
        Self { enabled: true, clear: false }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunOptions {
    pub mode: Mode,
    pub output: OutputMode,
    pub report: ReportOptions,
    /// Custom policy table (TOML). `None` uses the built-in PEP table.
    pub policy_path: Option<PathBuf>,
    pub cache: CacheOptions,
    /// Root for `downloads/`, `results/` and the page cache.
    pub base_dir: PathBuf,
}

impl RunOptions {
    pub fn new(mode: Mode) -> Self {
        Self {
            mode,
            output: OutputMode::default(),
            report: ReportOptions::default(),
            policy_path: None,
            cache: CacheOptions::default(),
            base_dir: PathBuf::from("."),
        }
    }

    pub fn downloads_dir(&self) -> PathBuf {
        self.base_dir.join(DOWNLOADS_DIR)
    }

    pub fn results_dir(&self) -> PathBuf {
        self.base_dir.join(RESULTS_DIR)
    }

    pub fn cache_dir(&self) -> PathBuf {
        cache_dir_in(&self.base_dir)
    }
}

pub fn cache_dir_in(base: &Path) -> PathBuf {
    base.join(STORE_DIR).join(HTTP_CACHE_SUBDIR)
}
