// src/status/policy.rs
//! Which page statuses are acceptable for a given declared code.
//!
//! The PEP index marks every row with a short abbreviation (`SF`, `IA`, ...):
//! the first letter is the PEP type, the rest is the status code. The PEP
//! page itself carries the full status label. A table maps each code to the
//! labels a page may legitimately show. Rows without a marker use the
//! empty-string code.

use std::fmt;
use std::path::Path;

use serde::Deserialize;

use crate::error::{Result, ScrapeError};

/// Short status marker from the index table. Empty when the row had none.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DeclaredCode(String);

impl DeclaredCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }
    pub fn none() -> Self {
        Self(String::new())
    }
    pub fn as_str(&self) -> &str {
        &self.0
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for DeclaredCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.0)
    }
}

impl From<&str> for DeclaredCode {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Full status text as shown on a page (`Final`, `Draft`, ...).
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StatusLabel(String);

impl StatusLabel {
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StatusLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for StatusLabel {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct Rule {
    code: DeclaredCode,
    statuses: Vec<StatusLabel>,
}

/// Immutable code → acceptable-labels mapping. Rule order is kept; it defines
/// the canonical row order of reports.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PolicyTable {
    rules: Vec<Rule>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct PolicyFile {
    #[serde(rename = "rule", default)]
    rules: Vec<RuleEntry>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RuleEntry {
    #[serde(default)]
    code: String,
    statuses: Vec<String>,
}

impl PolicyTable {
    /// The table used for peps.python.org.
    pub fn pep_default() -> Self {
        let rules: [(&str, &[&str]); 8] = [
            ("A", &["Active", "Accepted"]),
            ("D", &["Deferred"]),
            ("F", &["Final"]),
            ("P", &["Provisional"]),
            ("R", &["Rejected"]),
            ("S", &["Superseded"]),
            ("W", &["Withdrawn"]),
            ("", &["Draft", "Active"]),
        ];
        Self {
            rules: rules
                .iter()
                .map(|(code, labels)| Rule {
                    code: DeclaredCode::from(*code),
                    statuses: labels.iter().copied().map(StatusLabel::from).collect(),
                })
                .collect(),
        }
    }

    /// Build from `(code, labels)` pairs. Every code needs at least one label
    /// and may appear only once; repeated labels within a code are dropped.
    pub fn from_rules<C, L, I>(rules: I) -> Result<Self>
    where
        C: Into<String>,
        L: Into<String>,
        I: IntoIterator<Item = (C, Vec<L>)>,
    {
        let mut out: Vec<Rule> = Vec::new();
        for (code, labels) in rules {
            let code = DeclaredCode::new(code);
            if out.iter().any(|r| r.code == code) {
                return Err(policy_err(format!("duplicate code {code}")));
            }
            let mut statuses: Vec<StatusLabel> = Vec::new();
            for label in labels {
                let label: String = label.into();
                let label = StatusLabel::new(label.trim());
                if label.as_str().is_empty() {
                    return Err(policy_err(format!("blank status label for code {code}")));
                }
                if !statuses.contains(&label) {
                    statuses.push(label);
                }
            }
            if statuses.is_empty() {
                return Err(policy_err(format!("empty status set for code {code}")));
            }
            out.push(Rule { code, statuses });
        }
        Ok(Self { rules: out })
    }

    /// Parse a TOML policy:
    ///
    /// ```toml
    /// [[rule]]
    /// code = "A"
    /// statuses = ["Active", "Accepted"]
    ///
    /// [[rule]]          # no code: rows without a marker
    /// statuses = ["Draft", "Active"]
    /// ```
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let file: PolicyFile = toml::from_str(text).map_err(|e| policy_err(e.to_string()))?;
        Self::from_rules(file.rules.into_iter().map(|r| (r.code, r.statuses)))
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text).map_err(|e| match e {
            ScrapeError::Policy { message, .. } => ScrapeError::Policy {
                path: Some(path.to_path_buf()),
                message,
            },
            other => other,
        })
    }

    /// Labels valid for `code`, or `None` if the table has no rule for it.
    /// A miss is an unknown policy, not an empty allowance.
    pub fn expected_statuses(&self, code: &DeclaredCode) -> Option<&[StatusLabel]> {
        self.rules
            .iter()
            .find(|r| &r.code == code)
            .map(|r| r.statuses.as_slice())
    }

    /// Every label in order of first appearance across rules.
    pub fn canonical_labels(&self) -> Vec<&StatusLabel> {
        let mut out: Vec<&StatusLabel> = Vec::new();
        for label in self.rules.iter().flat_map(|r| r.statuses.iter()) {
            if !out.contains(&label) {
                out.push(label);
            }
        }
        out
    }

    pub fn codes(&self) -> impl Iterator<Item = &DeclaredCode> {
        self.rules.iter().map(|r| &r.code)
    }
}

impl Default for PolicyTable {
    fn default() -> Self {
        Self::pep_default()
    }
}

fn policy_err(message: String) -> ScrapeError {
    ScrapeError::Policy { path: None, message }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(slice: Option<&[StatusLabel]>) -> Vec<&str> {
        slice.unwrap_or_default().iter().map(StatusLabel::as_str).collect()
    }

    #[test]
    fn pep_table_covers_empty_code() {
        let table = PolicyTable::pep_default();
        assert_eq!(labels(table.expected_statuses(&DeclaredCode::none())), ["Draft", "Active"]);
        assert_eq!(labels(table.expected_statuses(&"A".into())), ["Active", "Accepted"]);
        assert_eq!(table.codes().count(), 8);
    }

    #[test]
    fn unknown_code_is_a_miss() {
        let table = PolicyTable::pep_default();
        assert!(table.expected_statuses(&"Z".into()).is_none());
    }

    #[test]
    fn canonical_labels_are_deduplicated_in_rule_order() {
        let table = PolicyTable::pep_default();
        let got: Vec<&str> = table.canonical_labels().into_iter().map(StatusLabel::as_str).collect();
        assert_eq!(
            got,
            [
                "Active", "Accepted", "Deferred", "Final", "Provisional",
                "Rejected", "Superseded", "Withdrawn", "Draft",
            ]
        );
    }

    #[test]
    fn from_rules_rejects_empty_and_duplicate_codes() {
        let empty = PolicyTable::from_rules([("A", Vec::<&str>::new())]);
        assert!(matches!(empty, Err(ScrapeError::Policy { .. })));

        let dup = PolicyTable::from_rules([("A", vec!["Active"]), ("A", vec!["Accepted"])]);
        assert!(matches!(dup, Err(ScrapeError::Policy { .. })));
    }

    #[test]
    fn toml_policy_keeps_rule_order() {
        let table = PolicyTable::from_toml_str(
            r#"
            [[rule]]
            code = "F"
            statuses = ["Final"]

            [[rule]]
            statuses = ["Draft", "Draft", "Active"]
            "#,
        )
        .unwrap();
        assert_eq!(labels(table.expected_statuses(&DeclaredCode::none())), ["Draft", "Active"]);
        let codes: Vec<&str> = table.codes().map(DeclaredCode::as_str).collect();
        assert_eq!(codes, ["F", ""]);
    }

    #[test]
    fn toml_policy_rejects_unknown_keys() {
        let err = PolicyTable::from_toml_str("[[rule]]\ncode = \"A\"\nlabels = [\"Active\"]\n");
        assert!(err.is_err());
    }
}
