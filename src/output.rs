// src/output.rs
//
// Show a scraped `DataSet`: plain lines, a bordered table, or a CSV file
// under `results/` named `<mode>_<timestamp>.csv`.

use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use tracing::info;

use crate::config::consts::{DATETIME_FORMAT, RESULTS_DELIM};
use crate::config::options::{Mode, OutputMode};
use crate::csv::write_dataset;
use crate::data::DataSet;
use crate::error::Result;

/// Render according to `output`. Returns the file path in `File` mode.
pub fn control_output(
    ds: &DataSet,
    mode: Mode,
    output: OutputMode,
    results_dir: &Path,
) -> Result<Option<PathBuf>> {
    match output {
        OutputMode::Plain => {
            print!("{}", render_plain(ds));
            Ok(None)
        }
        OutputMode::Pretty => {
            print!("{}", render_pretty(ds));
            Ok(None)
        }
        OutputMode::File => write_file(ds, mode, results_dir, Local::now()).map(Some),
    }
}

pub fn render_plain(ds: &DataSet) -> String {
    let mut out = String::new();
    for row in ds.all_rows() {
        out.push_str(&row.join(" "));
        out.push('\n');
    }
    out
}

pub fn render_pretty(ds: &DataSet) -> String {
    let cols = ds.all_rows().map(<[String]>::len).max().unwrap_or(0);
    let mut widths = vec![0usize; cols];
    for row in ds.all_rows() {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    let border: String = {
        let mut s = String::from("+");
        for w in &widths {
            s.push_str(&"-".repeat(w + 2));
            s.push('+');
        }
        s.push('\n');
        s
    };

    let line = |row: &[String]| {
        let mut s = String::from("|");
        for (i, w) in widths.iter().enumerate() {
            let cell = row.get(i).map(String::as_str).unwrap_or("");
            let pad = w - cell.chars().count();
            s.push(' ');
            s.push_str(cell);
            s.push_str(&" ".repeat(pad + 1));
            s.push('|');
        }
        s.push('\n');
        s
    };

    let mut out = border.clone();
    out.push_str(&line(&ds.headers));
    out.push_str(&border);
    for row in &ds.rows {
        out.push_str(&line(row));
    }
    out.push_str(&border);
    out
}

pub fn result_file_name(mode: Mode, now: DateTime<Local>) -> String {
    format!("{}_{}.csv", mode.name(), now.format(DATETIME_FORMAT))
}

pub fn write_file(
    ds: &DataSet,
    mode: Mode,
    results_dir: &Path,
    now: DateTime<Local>,
) -> Result<PathBuf> {
    fs::create_dir_all(results_dir)?;
    let path = results_dir.join(result_file_name(mode, now));
    write_dataset(BufWriter::new(File::create(&path)?), ds, RESULTS_DELIM)?;
    info!("Results saved to {}", path.display());
    Ok(path)
}
