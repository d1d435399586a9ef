// src/status/reconcile.rs
//! Check scraped (declared, observed) status pairs against a `PolicyTable`
//! and count the ones that agree.

use std::fmt;

use super::policy::{DeclaredCode, PolicyTable, StatusLabel};

/// One PEP as seen by the crawl.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScrapedEntry {
    pub declared_code: DeclaredCode,
    pub observed_status: StatusLabel,
    pub source_link: String,
}

impl ScrapedEntry {
    pub fn new(
        declared_code: impl Into<String>,
        observed_status: impl Into<String>,
        source_link: impl Into<String>,
    ) -> Self {
        Self {
            declared_code: DeclaredCode::new(declared_code),
            observed_status: StatusLabel::new(observed_status),
            source_link: source_link.into(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DiscrepancyKind {
    /// Observed label is not in the set allowed for the declared code.
    Mismatch,
    /// The policy table has no rule for the declared code.
    UnknownCode,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Discrepancy {
    pub source_link: String,
    pub declared_code: DeclaredCode,
    pub observed_status: StatusLabel,
    /// Empty for `UnknownCode`.
    pub expected_statuses: Vec<StatusLabel>,
    pub kind: DiscrepancyKind,
}

impl fmt::Display for Discrepancy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            DiscrepancyKind::Mismatch => {
                let expected: Vec<&str> = self.expected_statuses.iter().map(StatusLabel::as_str).collect();
                write!(
                    f,
                    "Mismatched statuses: {} status on page: {} expected: {}",
                    self.source_link,
                    self.observed_status,
                    expected.join(", ")
                )
            }
            DiscrepancyKind::UnknownCode => write!(
                f,
                "Unknown status code {}: {} status on page: {}",
                self.declared_code, self.source_link, self.observed_status
            ),
        }
    }
}

/// Per-label counts of accepted entries, in order of first acceptance.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StatusAggregate {
    counts: Vec<(StatusLabel, usize)>,
    rejected: usize,
}

impl StatusAggregate {
    pub fn new() -> Self {
        Self::default()
    }

    fn accept(&mut self, label: &StatusLabel) {
        match self.counts.iter_mut().find(|(l, _)| l == label) {
            Some((_, n)) => *n += 1,
            None => self.counts.push((label.clone(), 1)),
        }
    }

    pub fn get(&self, label: &str) -> usize {
        self.counts
            .iter()
            .find(|(l, _)| l.as_str() == label)
            .map_or(0, |(_, n)| *n)
    }

    /// `(label, count)` in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&StatusLabel, usize)> {
        self.counts.iter().map(|(l, n)| (l, *n))
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Number of accepted entries.
    pub fn valid(&self) -> usize {
        self.counts.iter().map(|(_, n)| n).sum()
    }

    /// Number of entries turned into discrepancies.
    pub fn rejected(&self) -> usize {
        self.rejected
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Reconciliation {
    pub aggregate: StatusAggregate,
    pub discrepancies: Vec<Discrepancy>,
}

/// Validate every entry and count the accepted ones. Never stops early:
/// a bad entry becomes a `Discrepancy` and is left out of the counts.
pub fn reconcile<'a, I>(policy: &PolicyTable, entries: I) -> Reconciliation
where
    I: IntoIterator<Item = &'a ScrapedEntry>,
{
    let mut out = Reconciliation::default();

    for entry in entries {
        let (expected, kind) = match policy.expected_statuses(&entry.declared_code) {
            Some(expected) if expected.contains(&entry.observed_status) => {
                out.aggregate.accept(&entry.observed_status);
                continue;
            }
            Some(expected) => (expected.to_vec(), DiscrepancyKind::Mismatch),
            None => (Vec::new(), DiscrepancyKind::UnknownCode),
        };
        out.aggregate.rejected += 1;
        out.discrepancies.push(Discrepancy {
            source_link: entry.source_link.clone(),
            declared_code: entry.declared_code.clone(),
            observed_status: entry.observed_status.clone(),
            expected_statuses: expected,
            kind,
        });
    }

    out
}
