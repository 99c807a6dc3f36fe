//! Reading rule requests and the evaluation time from command-line input.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result, bail};
use chrono::NaiveDateTime;
use dq_common::parse_timestamp;
use dq_validate::{ParsedRequest, parse_request};

/// Read a `{column: [rule name]}` JSON request file.
pub fn read_request_file(path: &Path) -> Result<ParsedRequest> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("read request file {}", path.display()))?;
    parse_request_json(&content).with_context(|| format!("parse request file {}", path.display()))
}

/// Parse a `{column: [rule name]}` JSON document.
pub fn parse_request_json(content: &str) -> Result<ParsedRequest> {
    let raw: BTreeMap<String, Vec<String>> =
        serde_json::from_str(content).context("expected an object of column to rule names")?;
    Ok(parse_request(raw))
}

/// Parse repeated `COLUMN=KIND[,KIND]...` arguments.
///
/// Arguments naming the same column are merged. An empty kind list registers
/// the column with no rules.
pub fn parse_rule_args<S: AsRef<str>>(args: &[S]) -> Result<ParsedRequest> {
    let mut raw: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for arg in args {
        let arg = arg.as_ref();
        let Some((column, kinds)) = arg.split_once('=') else {
            bail!("invalid rule '{arg}': expected COLUMN=KIND[,KIND]...");
        };
        let column = column.trim();
        if column.is_empty() {
            bail!("invalid rule '{arg}': column name is empty");
        }
        raw.entry(column.to_string()).or_default().extend(
            kinds
                .split(',')
                .map(str::trim)
                .filter(|kind| !kind.is_empty())
                .map(str::to_string),
        );
    }
    Ok(parse_request(raw))
}

/// Parse the `--now` value.
pub fn parse_now(value: &str) -> Result<NaiveDateTime> {
    match parse_timestamp(value) {
        Some(now) => Ok(now),
        None => bail!(
            "invalid time '{value}': expected RFC 3339, YYYY-MM-DDTHH:MM:SS or YYYY-MM-DD"
        ),
    }
}
