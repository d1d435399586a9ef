// src/csv.rs
use std::io::{self, Write};

use crate::data::DataSet;

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single CSV row to any writer. Fields are quoted only when needed.
pub fn write_row<W: Write, S: AsRef<str>>(mut w: W, row: &[S], sep: char) -> io::Result<()> {
    let mut first = true;
    for cell in row {
        let cell = cell.as_ref();
        if !first { write!(w, "{}", sep)?; } else { first = false; }
        if needs_quotes(cell, sep) {
            let escaped = cell.replace('"', "\"\"");
            write!(w, "\"{}\"", escaped)?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    writeln!(w)
}

/// Header row then data rows.
pub fn write_dataset<W: Write>(mut w: W, ds: &DataSet, sep: char) -> io::Result<()> {
    for row in ds.all_rows() {
        write_row(&mut w, row, sep)?;
    }
    w.flush()
}
