//! Rule engine for column-level data quality checks.
//!
//! A [`RuleRequest`](dq_model::RuleRequest) names, per column, which of the
//! five rule kinds to run. [`evaluate`] runs exactly those rules against a
//! [`ColumnSource`](dq_model::ColumnSource) and returns a
//! [`QualityReport`](dq_model::QualityReport) of pass/fail verdicts.
//!
//! | Rule | Passes when |
//! |------|-------------|
//! | accuracy | every non-null value is numeric |
//! | completeness | no value is null |
//! | reliability | no two values are equal |
//! | relevance | at least one value is non-null |
//! | timeliness | the column is a timestamp column and every value is within the last 365 days |

pub mod checks;
mod context;
mod engine;
mod request;

pub use checks::timeliness::TIMELINESS_WINDOW_DAYS;
pub use context::EvaluationContext;
pub use engine::evaluate;
pub use request::{ParsedRequest, parse_request};
