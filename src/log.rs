// src/log.rs
//
// Logging setup: everything goes to `logs/parser.log` (elapsed-time stamps,
// no colour) and INFO+ is mirrored to stderr. `RUST_LOG` overrides the
// default `info` filter.

use std::fs::{self, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::fmt::time::Uptime;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

use crate::config::consts::{LOG_DIR, LOG_FILE};

pub fn log_path_in(base: &Path) -> PathBuf {
    base.join(LOG_DIR).join(LOG_FILE)
}

/// Install the global subscriber. Returns the log file path.
/// Calling it twice is harmless; the second call keeps the first subscriber.
pub fn init(base: &Path) -> io::Result<PathBuf> {
    let path = log_path_in(base);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    let file_layer = fmt::layer()
        .with_timer(Uptime::default())
        .with_ansi(false)
        .with_target(false)
        .with_writer(Mutex::new(file));

    let stderr_layer = fmt::layer()
        .without_time()
        .with_target(false)
        .with_writer(io::stderr);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .with(stderr_layer)
        .try_init();

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creates_log_dir() {
        let tmp = tempfile::tempdir().unwrap();
        let path = init(tmp.path()).unwrap();
        assert_eq!(path, tmp.path().join("logs").join("parser.log"));
        assert!(path.exists());
    }
}
