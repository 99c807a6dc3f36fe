use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::rule::RuleKind;

/// Verdicts of one evaluation: column, then rule kind, then pass/fail.
///
/// Serializes as `{column: {rule_kind: bool}}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QualityReport {
    columns: BTreeMap<String, BTreeMap<RuleKind, bool>>,
}

impl QualityReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make sure `column` has an entry, even if no verdict gets recorded.
    pub fn ensure_column(&mut self, column: &str) {
        if !self.columns.contains_key(column) {
            self.columns.insert(column.to_string(), BTreeMap::new());
        }
    }

    pub fn record(&mut self, column: &str, rule: RuleKind, passed: bool) {
        self.columns
            .entry(column.to_string())
            .or_default()
            .insert(rule, passed);
    }

    pub fn verdict(&self, column: &str, rule: RuleKind) -> Option<bool> {
        self.columns.get(column)?.get(&rule).copied()
    }

    pub fn column(&self, column: &str) -> Option<&BTreeMap<RuleKind, bool>> {
        self.columns.get(column)
    }

    pub fn columns(&self) -> impl Iterator<Item = (&str, &BTreeMap<RuleKind, bool>)> {
        self.columns
            .iter()
            .map(|(column, verdicts)| (column.as_str(), verdicts))
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn passed_count(&self) -> usize {
        self.verdicts().filter(|passed| *passed).count()
    }

    pub fn failed_count(&self) -> usize {
        self.verdicts().filter(|passed| !*passed).count()
    }

    pub fn all_passed(&self) -> bool {
        self.failed_count() == 0
    }

    fn verdicts(&self) -> impl Iterator<Item = bool> + '_ {
        self.columns
            .values()
            .flat_map(|verdicts| verdicts.values().copied())
    }
}
