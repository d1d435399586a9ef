// src/data.rs
//
// Table produced by a scrape mode: one header row plus data rows.
// Rendering (console / file) lives in `output`.

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DataSet {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl DataSet {
    pub fn with_headers<S: AsRef<str>>(headers: &[S]) -> Self {
        Self {
            headers: headers.iter().map(|h| h.as_ref().to_string()).collect(),
            rows: Vec::new(),
        }
    }

    pub fn push_row<I, S>(&mut self, row: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rows.push(row.into_iter().map(Into::into).collect());
    }

    /// Header row first, then data rows.
    pub fn all_rows(&self) -> impl Iterator<Item = &[String]> {
        std::iter::once(self.headers.as_slice()).chain(self.rows.iter().map(Vec::as_slice))
    }
}
