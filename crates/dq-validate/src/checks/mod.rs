//! Quality predicates, one module per rule kind.

pub mod accuracy;
pub mod completeness;
pub mod relevance;
pub mod reliability;
pub mod timeliness;

use dq_model::{CellValue, ColumnSource, Result, RuleKind};

use crate::context::EvaluationContext;

/// Run one rule against the values of `column`.
///
/// The declared type is only looked up for timeliness.
pub(crate) fn run<S>(
    rule: RuleKind,
    source: &S,
    column: &str,
    values: &[CellValue],
    ctx: &EvaluationContext,
) -> Result<bool>
where
    S: ColumnSource + ?Sized,
{
    let passed = match rule {
        RuleKind::Accuracy => accuracy::check(values),
        RuleKind::Completeness => completeness::check(values),
        RuleKind::Reliability => reliability::check(values),
        RuleKind::Relevance => relevance::check(values),
        RuleKind::Timeliness => {
            timeliness::check(values, source.declared_type(column)?, ctx.now())
        }
    };
    Ok(passed)
}
