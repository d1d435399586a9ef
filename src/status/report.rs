// src/status/report.rs
//! Turn a `StatusAggregate` into the rows shown to the user.

use super::policy::{PolicyTable, StatusLabel};
use super::reconcile::StatusAggregate;
use crate::data::DataSet;

pub const STATUS_HEADER: &str = "Status";
pub const COUNT_HEADER: &str = "Count";
pub const TOTAL_LABEL: &str = "Total";

/// Row order of the report body.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum RowOrder {
    /// Policy-table label order. Stable across runs.
    #[default]
    Canonical,
    /// Order in which labels were first accepted during the crawl.
    FirstSeen,
}

/// What the `Total` row counts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum TotalPolicy {
    /// Accepted entries only; equals the sum of the rows.
    #[default]
    #[cfg_attr(feature = "cli", value(name = "valid"))]
    ValidOnly,
    /// Every scraped entry, discrepancies included.
    #[cfg_attr(feature = "cli", value(name = "all"))]
    AllScraped,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReportOptions {
    pub order: RowOrder,
    pub total: TotalPolicy,
    /// Emit a zero row for every canonical label never seen.
    pub include_zero: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Report {
    pub rows: Vec<(StatusLabel, usize)>,
    pub total: usize,
}

impl Report {
    pub fn header() -> [&'static str; 2] {
        [STATUS_HEADER, COUNT_HEADER]
    }

    /// Body rows followed by the `Total` row.
    pub fn rows_with_total(&self) -> Vec<(&str, usize)> {
        self.rows
            .iter()
            .map(|(l, n)| (l.as_str(), *n))
            .chain(std::iter::once((TOTAL_LABEL, self.total)))
            .collect()
    }

    pub fn to_dataset(&self) -> DataSet {
        DataSet {
            headers: Report::header().iter().map(|h| h.to_string()).collect(),
            rows: self
                .rows_with_total()
                .into_iter()
                .map(|(l, n)| vec![l.to_string(), n.to_string()])
                .collect(),
        }
    }
}

pub fn assemble_report(
    aggregate: &StatusAggregate,
    policy: &PolicyTable,
    opts: &ReportOptions,
) -> Report {
    let mut rows: Vec<(StatusLabel, usize)> = Vec::with_capacity(aggregate.len());

    match opts.order {
        RowOrder::Canonical => {
            for label in policy.canonical_labels() {
                let n = aggregate.get(label.as_str());
                if n > 0 || opts.include_zero {
                    rows.push((label.clone(), n));
                }
            }
            // Only reachable with an aggregate built against another table.
            for (label, n) in aggregate.iter() {
                if !rows.iter().any(|(l, _)| l == label) {
                    rows.push((label.clone(), n));
                }
            }
        }
        RowOrder::FirstSeen => {
            rows.extend(aggregate.iter().map(|(l, n)| (l.clone(), n)));
            if opts.include_zero {
                for label in policy.canonical_labels() {
                    if aggregate.get(label.as_str()) == 0 {
                        rows.push((label.clone(), 0));
                    }
                }
            }
        }
    }

    let total = match opts.total {
        TotalPolicy::ValidOnly => aggregate.valid(),
        TotalPolicy::AllScraped => aggregate.valid() + aggregate.rejected(),
    };

    Report { rows, total }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::status::{ScrapedEntry, reconcile};

    fn small_table() -> PolicyTable {
        PolicyTable::from_rules([("A", vec!["Active", "Accepted"]), ("", vec!["Draft", "Active"])])
            .unwrap()
    }

    fn sample() -> Vec<ScrapedEntry> {
        vec![
            ScrapedEntry::new("A", "Active", "u1"),
            ScrapedEntry::new("A", "Rejected", "u2"),
            ScrapedEntry::new("", "Draft", "u3"),
        ]
    }

    #[test]
    fn canonical_rows_end_with_total() {
        let table = small_table();
        let r = reconcile(&table, &sample());
        let report = assemble_report(&r.aggregate, &table, &ReportOptions::default());
        assert_eq!(report.rows_with_total(), [("Active", 1), ("Draft", 1), ("Total", 2)]);
    }

    #[test]
    fn empty_aggregate_is_just_total() {
        let report = assemble_report(
            &StatusAggregate::new(),
            &PolicyTable::pep_default(),
            &ReportOptions::default(),
        );
        assert_eq!(report.rows_with_total(), [("Total", 0)]);
    }

    #[test]
    fn include_zero_lists_every_canonical_label() {
        let table = small_table();
        let r = reconcile(&table, &sample());
        let opts = ReportOptions { include_zero: true, ..Default::default() };
        let report = assemble_report(&r.aggregate, &table, &opts);
        assert_eq!(
            report.rows_with_total(),
            [("Active", 1), ("Accepted", 0), ("Draft", 1), ("Total", 2)]
        );
    }

    #[test]
    fn first_seen_order_follows_input() {
        let table = PolicyTable::pep_default();
        let entries = vec![
            ScrapedEntry::new("W", "Withdrawn", "a"),
            ScrapedEntry::new("F", "Final", "b"),
            ScrapedEntry::new("W", "Withdrawn", "c"),
        ];
        let r = reconcile(&table, &entries);
        let opts = ReportOptions { order: RowOrder::FirstSeen, ..Default::default() };
        let report = assemble_report(&r.aggregate, &table, &opts);
        assert_eq!(report.rows_with_total(), [("Withdrawn", 2), ("Final", 1), ("Total", 3)]);

        let canonical = assemble_report(&r.aggregate, &table, &ReportOptions::default());
        assert_eq!(canonical.rows_with_total(), [("Final", 1), ("Withdrawn", 2), ("Total", 3)]);
    }

    #[test]
    fn all_scraped_total_counts_discrepancies() {
        let table = small_table();
        let r = reconcile(&table, &sample());
        let opts = ReportOptions { total: TotalPolicy::AllScraped, ..Default::default() };
        let report = assemble_report(&r.aggregate, &table, &opts);
        assert_eq!(report.total, 3);
    }

    #[test]
    fn total_matches_row_sum_when_valid_only() {
        let table = PolicyTable::pep_default();
        let entries: Vec<ScrapedEntry> = ["Final", "Draft", "Active", "Final", "Rejected", "Bogus"]
            .iter()
            .enumerate()
            .map(|(i, s)| {
                let code = match *s {
                    "Final" => "F",
                    "Rejected" => "R",
                    _ => "",
                };
                ScrapedEntry::new(code, *s, format!("pep-{i}"))
            })
            .collect();
        let r = reconcile(&table, &entries);
        let report = assemble_report(&r.aggregate, &table, &ReportOptions::default());
        let sum: usize = report.rows.iter().map(|(_, n)| n).sum();
        assert_eq!(report.total, sum);
        assert_eq!(report.total, entries.len() - 1);
        assert_eq!(r.discrepancies.len(), 1);
    }

    #[test]
    fn dataset_has_header_then_rows() {
        let table = small_table();
        let r = reconcile(&table, &sample());
        let ds = assemble_report(&r.aggregate, &table, &ReportOptions::default()).to_dataset();
        assert_eq!(ds.headers, ["Status", "Count"]);
        assert_eq!(ds.rows.last().unwrap(), &vec!["Total".to_string(), "2".to_string()]);
    }
}
