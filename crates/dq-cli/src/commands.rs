use std::fs;

use anyhow::{Context, Result};
use dq_cli::request::{parse_now, parse_rule_args, read_request_file};
use dq_ingest::{CsvHeaders, IngestOptions, load_dataset};
use dq_model::{ColumnSource, Dataset};
use dq_validate::{EvaluationContext, evaluate};
use tracing::warn;

use crate::cli::{CheckArgs, ColumnsArgs, DatasetArgs, ReportFormatArg};
use crate::summary::{columns_table, report_footer, report_table, rules_table};
use crate::types::{CheckResult, ColumnSummary};

fn load(args: &DatasetArgs) -> Result<(Dataset, CsvHeaders)> {
    let options = IngestOptions::default().with_header_rows(usize::from(args.header_rows));
    load_dataset(&args.data, &options)
        .with_context(|| format!("load dataset {}", args.data.display()))
}

pub fn run_check(args: &CheckArgs) -> Result<CheckResult> {
    let parsed = match &args.request {
        Some(path) => read_request_file(path)?,
        None => parse_rule_args(&args.rules)?,
    };
    for name in &parsed.unknown_rules {
        warn!(rule = %name, "skipping unknown rule name");
    }

    let ctx = match &args.now {
        Some(value) => EvaluationContext::at(parse_now(value)?),
        None => EvaluationContext::current(),
    };

    let (dataset, _) = load(&args.dataset)?;
    let report = evaluate(&dataset, &parsed.request, &ctx)?;

    let rendered = match args.format {
        ReportFormatArg::Json => {
            serde_json::to_string_pretty(&report).context("serialize report")?
        }
        ReportFormatArg::Table => format!(
            "{}\n{}",
            report_table(&report),
            report_footer(&report, dataset.height())
        ),
    };
    match &args.output {
        Some(path) => fs::write(path, format!("{rendered}\n"))
            .with_context(|| format!("write report {}", path.display()))?,
        None => println!("{rendered}"),
    }

    Ok(CheckResult {
        report,
        rows: dataset.height(),
    })
}

pub fn run_columns(args: &ColumnsArgs) -> Result<()> {
    let (dataset, headers) = load(&args.dataset)?;
    let mut summaries = Vec::with_capacity(dataset.width());
    for spec in dataset.columns() {
        let values = dataset.values_of(&spec.name)?;
        summaries.push(ColumnSummary {
            name: spec.name.clone(),
            label: headers.label_for(&spec.name).map(str::to_string),
            column_type: spec.column_type,
            non_null: values.iter().filter(|value| !value.is_null()).count(),
            rows: values.len(),
        });
    }
    println!("{}", columns_table(&summaries));
    Ok(())
}

pub fn run_rules() {
    println!("{}", rules_table());
}
