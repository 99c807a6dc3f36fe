//! Wire format of reports produced from CSV input.

use std::io::Write;

use chrono::NaiveDate;
use dq_cli::request::parse_rule_args;
use dq_ingest::{IngestOptions, load_dataset};
use dq_validate::{EvaluationContext, evaluate};
use tempfile::NamedTempFile;

fn write_csv(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{content}").unwrap();
    file
}

fn ctx() -> EvaluationContext {
    EvaluationContext::at(
        NaiveDate::from_ymd_opt(2024, 6, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap(),
    )
}

#[test]
fn test_report_json() {
    let file = write_csv(
        "id,age,signup_date,notes\n\
         1,30,2024-05-01,a\n\
         2,25,2024-05-20,b\n\
         2,N/A,2023-01-15,\n\
         3,,2024-05-31,c\n",
    );
    let (dataset, _) = load_dataset(file.path(), &IngestOptions::default()).unwrap();
    let parsed = parse_rule_args(&[
        "age=accuracy,completeness,reliability,relevance",
        "id=reliability",
        "signup_date=timeliness",
        "notes=bogus",
    ])
    .unwrap();

    let report = evaluate(&dataset, &parsed.request, &ctx()).unwrap();
    let json = serde_json::to_string_pretty(&report).unwrap();

    insta::assert_snapshot!(json, @r#"
    {
      "age": {
        "accuracy": false,
        "completeness": false,
        "reliability": true,
        "relevance": true
      },
      "id": {
        "reliability": false
      },
      "notes": {},
      "signup_date": {
        "timeliness": false
      }
    }
    "#);
}

#[test]
fn test_recent_dates_are_timely() {
    let file = write_csv("signup_date\n2024-05-01\n2024-05-31T08:15:00\n");
    let (dataset, _) = load_dataset(file.path(), &IngestOptions::default()).unwrap();
    let parsed = parse_rule_args(&["signup_date=timeliness"]).unwrap();

    let report = evaluate(&dataset, &parsed.request, &ctx()).unwrap();
    let json = serde_json::to_string(&report).unwrap();

    assert_eq!(json, r#"{"signup_date":{"timeliness":true}}"#);
}

#[test]
fn test_unknown_column_fails_without_report() {
    let file = write_csv("id\n1\n");
    let (dataset, _) = load_dataset(file.path(), &IngestOptions::default()).unwrap();
    let parsed = parse_rule_args(&["id=reliability", "salary=accuracy"]).unwrap();

    let err = evaluate(&dataset, &parsed.request, &ctx()).unwrap_err();
    assert_eq!(err.to_string(), "unknown column: 'salary'");
}

#[test]
fn test_whitespace_is_part_of_the_value() {
    let file = write_csv("name,code\nx,a\n x,   \n");
    let (dataset, _) = load_dataset(file.path(), &IngestOptions::default()).unwrap();
    let parsed = parse_rule_args(&["name=reliability", "code=completeness"]).unwrap();

    let report = evaluate(&dataset, &parsed.request, &ctx()).unwrap();
    let json = serde_json::to_string(&report).unwrap();

    assert_eq!(
        json,
        r#"{"code":{"completeness":true},"name":{"reliability":true}}"#
    );
}
