//! Turning raw rule names into a typed request.

use std::collections::BTreeSet;

use dq_model::{RuleKind, RuleRequest};
use tracing::debug;

/// A typed request plus the rule names that were not recognized.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedRequest {
    pub request: RuleRequest,
    pub unknown_rules: BTreeSet<String>,
}

/// Build a [`RuleRequest`] from `{column: [rule name]}` pairs.
///
/// Rule names are matched case-insensitively. Unrecognized names are
/// skipped, never an error; a column whose names were all skipped is still
/// part of the request with no rules.
pub fn parse_request<I, C, R, N>(raw: I) -> ParsedRequest
where
    I: IntoIterator<Item = (C, R)>,
    C: Into<String>,
    R: IntoIterator<Item = N>,
    N: AsRef<str>,
{
    let mut parsed = ParsedRequest::default();
    for (column, names) in raw {
        let column = column.into();
        parsed.request.add_column(column.clone());
        for name in names {
            let name = name.as_ref();
            match name.parse::<RuleKind>() {
                Ok(rule) => parsed.request.add(column.clone(), rule),
                Err(_) => {
                    debug!(column = %column, rule = name, "skipping unknown rule");
                    parsed.unknown_rules.insert(name.to_string());
                }
            }
        }
    }
    parsed
}
