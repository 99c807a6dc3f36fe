//! Evaluation of a rule request against a column source.

use dq_model::{ColumnSource, ModelError, QualityReport, Result, RuleRequest};
use tracing::{debug, info, info_span, warn};

use crate::checks;
use crate::context::EvaluationContext;

/// Evaluate every requested rule and collect the verdicts.
///
/// All requested columns are checked for existence before any rule runs, so
/// an unknown column fails the whole call and no partial report is produced.
/// Columns requested without any rule appear in the report with no verdicts.
///
/// The source is only read; evaluating the same request twice against the
/// same source and context yields the same report.
pub fn evaluate<S>(
    source: &S,
    request: &RuleRequest,
    ctx: &EvaluationContext,
) -> Result<QualityReport>
where
    S: ColumnSource + ?Sized,
{
    let span = info_span!(
        "evaluate",
        columns = request.column_count(),
        rules = request.rule_count()
    );
    let _guard = span.enter();

    if let Some(missing) = request.columns().find(|column| !source.has_column(column)) {
        warn!(column = missing, "requested column not in dataset");
        return Err(ModelError::unknown_column(missing));
    }

    let mut report = QualityReport::new();
    for (column, rules) in request.iter() {
        report.ensure_column(column);
        if rules.is_empty() {
            continue;
        }

        let values = source.values_of(column)?;
        for &rule in rules {
            let passed = checks::run(rule, source, column, &values, ctx)?;
            debug!(column, rule = %rule, passed, "rule evaluated");
            report.record(column, rule, passed);
        }
    }

    info!(
        passed = report.passed_count(),
        failed = report.failed_count(),
        "evaluation complete"
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use dq_model::{CellValue, ColumnSpec, ColumnType, Dataset, RuleKind};

    fn dataset() -> Dataset {
        let mut dataset = Dataset::new(vec![
            ColumnSpec::new("id", ColumnType::Numeric),
            ColumnSpec::new("name", ColumnType::Text),
        ])
        .unwrap();
        dataset
            .push_row(vec![CellValue::Integer(1), CellValue::text("Ada")])
            .unwrap();
        dataset
            .push_row(vec![CellValue::Integer(2), CellValue::Null])
            .unwrap();
        dataset
    }

    #[test]
    fn test_only_requested_rules_run() {
        let request = RuleRequest::new().with("name", &[RuleKind::Completeness]);
        let report = evaluate(&dataset(), &request, &EvaluationContext::current()).unwrap();

        assert_eq!(report.verdict("name", RuleKind::Completeness), Some(false));
        assert_eq!(report.verdict("name", RuleKind::Relevance), None);
        assert!(report.column("id").is_none());
    }

    #[test]
    fn test_unknown_column_aborts() {
        let request = RuleRequest::new()
            .with("id", &[RuleKind::Reliability])
            .with("missing", &[RuleKind::Relevance]);
        let result = evaluate(&dataset(), &request, &EvaluationContext::current());

        assert_eq!(result, Err(ModelError::unknown_column("missing")));
    }

    #[test]
    fn test_unknown_column_without_rules_aborts() {
        let mut request = RuleRequest::new();
        request.add_column("missing");
        let result = evaluate(&dataset(), &request, &EvaluationContext::current());

        assert!(matches!(result, Err(ModelError::UnknownColumn { .. })));
    }

    #[test]
    fn test_empty_request_gives_empty_report() {
        let report =
            evaluate(&dataset(), &RuleRequest::new(), &EvaluationContext::current()).unwrap();
        assert!(report.is_empty());
    }
}
