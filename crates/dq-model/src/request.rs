use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::rule::RuleKind;

/// Rule kinds to evaluate, per column.
///
/// Requesting the same kind twice for a column has no additional effect. A
/// column may be present with no kinds at all.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RuleRequest {
    columns: BTreeMap<String, BTreeSet<RuleKind>>,
}

impl RuleRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a column without requesting any rule for it yet.
    pub fn add_column(&mut self, column: impl Into<String>) {
        self.columns.entry(column.into()).or_default();
    }

    pub fn add(&mut self, column: impl Into<String>, rule: RuleKind) {
        self.columns.entry(column.into()).or_default().insert(rule);
    }

    #[must_use]
    pub fn with(mut self, column: impl Into<String>, rules: &[RuleKind]) -> Self {
        let entry = self.columns.entry(column.into()).or_default();
        entry.extend(rules.iter().copied());
        self
    }

    /// Columns and their requested rules, ordered by column name.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &BTreeSet<RuleKind>)> {
        self.columns
            .iter()
            .map(|(column, rules)| (column.as_str(), rules))
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.columns.keys().map(String::as_str)
    }

    pub fn rules_for(&self, column: &str) -> Option<&BTreeSet<RuleKind>> {
        self.columns.get(column)
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Total number of (column, rule) pairs.
    pub fn rule_count(&self) -> usize {
        self.columns.values().map(BTreeSet::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}
