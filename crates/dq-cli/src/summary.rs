use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use dq_model::{ColumnType, QualityReport, RuleKind};

use crate::types::ColumnSummary;

/// One row per column, one column per rule kind; rules that were not
/// requested are shown as `-`.
pub fn report_table(report: &QualityReport) -> Table {
    let mut table = Table::new();
    let mut header = vec![header_cell("Column")];
    header.extend(RuleKind::ALL.iter().map(|rule| header_cell(rule.as_str())));
    table.set_header(header);
    apply_table_style(&mut table);
    for index in 1..=RuleKind::ALL.len() {
        align_column(&mut table, index, CellAlignment::Center);
    }

    for (column, verdicts) in report.columns() {
        let mut row = vec![Cell::new(column).add_attribute(Attribute::Bold)];
        row.extend(
            RuleKind::ALL
                .iter()
                .map(|rule| verdict_cell(verdicts.get(rule).copied())),
        );
        table.add_row(row);
    }
    table
}

pub fn report_footer(report: &QualityReport, rows: usize) -> String {
    format!(
        "{} columns, {rows} rows: {} passed, {} failed",
        report.columns().count(),
        report.passed_count(),
        report.failed_count()
    )
}

pub fn columns_table(summaries: &[ColumnSummary]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Column"),
        header_cell("Label"),
        header_cell("Type"),
        header_cell("Non-null"),
        header_cell("Rows"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 3, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Right);

    for summary in summaries {
        let non_null = if summary.non_null == 0 && summary.rows > 0 {
            Cell::new(summary.non_null).fg(Color::Yellow)
        } else {
            Cell::new(summary.non_null)
        };
        table.add_row(vec![
            Cell::new(&summary.name).add_attribute(Attribute::Bold),
            summary
                .label
                .as_deref()
                .map_or_else(|| dim_cell("-"), Cell::new),
            type_cell(summary.column_type),
            non_null,
            Cell::new(summary.rows),
        ]);
    }
    table
}

pub fn rules_table() -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Rule"), header_cell("Passes when")]);
    apply_table_style(&mut table);
    for rule in RuleKind::ALL {
        table.add_row(vec![
            Cell::new(rule.as_str()).add_attribute(Attribute::Bold),
            Cell::new(rule.description()),
        ]);
    }
    table
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn verdict_cell(verdict: Option<bool>) -> Cell {
    match verdict {
        Some(true) => Cell::new("pass").fg(Color::Green),
        Some(false) => Cell::new("fail")
            .fg(Color::Red)
            .add_attribute(Attribute::Bold),
        None => dim_cell("-"),
    }
}

fn type_cell(column_type: ColumnType) -> Cell {
    match column_type {
        ColumnType::Unknown => dim_cell(column_type),
        _ => Cell::new(column_type),
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
