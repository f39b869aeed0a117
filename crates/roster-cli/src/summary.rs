use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ColumnConstraint, ContentArrangement, Table, Width,
};

use roster_cli::pipeline::RosterResult;
use roster_model::{Finding, FindingKind, Record, ValidationReport};

pub fn print_summary(result: &RosterResult) {
    let report = &result.report;
    println!("Roster: {}", result.file.display());
    if report.dropped_rows > 0 {
        println!(
            "Records: {} ({} short lines ignored)",
            report.records, report.dropped_rows
        );
    } else {
        println!("Records: {}", report.records);
    }

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Row"),
        header_cell("Email"),
        header_cell("Full Name"),
        header_cell("Role"),
        header_cell("Reports To"),
        header_cell("Status"),
    ]);
    apply_roster_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for (position, record) in result.records.iter().enumerate() {
        table.add_row(vec![
            dim_cell(position + 2),
            Cell::new(&record.email),
            Cell::new(&record.full_name),
            role_cell(record),
            reports_to_cell(&record.reports_to),
            status_cell(report, &record.email),
        ]);
    }
    println!("{table}");

    if report.is_valid() {
        println!("No issues found");
        return;
    }
    print_findings_table(&report.findings);
    print_totals(report);
}

fn print_findings_table(findings: &[Finding]) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Row"),
        header_cell("Kind"),
        header_cell("Email"),
        header_cell("Full Name"),
        header_cell("Detail"),
    ]);
    apply_findings_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for finding in findings {
        table.add_row(vec![
            Cell::new(finding.row_index),
            kind_cell(finding.kind),
            Cell::new(&finding.email),
            Cell::new(&finding.full_name),
            Cell::new(&finding.detail),
        ]);
    }
    println!();
    println!("Findings:");
    println!("{table}");
}

fn print_totals(report: &ValidationReport) {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Kind"), header_cell("Count")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for kind in FindingKind::ALL {
        let count = report.count(kind);
        if count > 0 {
            table.add_row(vec![kind_cell(kind), count_cell(count)]);
        }
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        count_cell(report.findings.len()).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");
}

/// Distinct finding labels for a row, in first-seen order.
fn status_labels(report: &ValidationReport, email: &str) -> Vec<&'static str> {
    let mut labels = Vec::new();
    for finding in report.findings_for(email) {
        let label = finding.kind.label();
        if !labels.contains(&label) {
            labels.push(label);
        }
    }
    labels
}

fn status_cell(report: &ValidationReport, email: &str) -> Cell {
    let labels = status_labels(report, email);
    if labels.is_empty() {
        Cell::new("✓")
            .fg(Color::Green)
            .add_attribute(Attribute::Bold)
    } else {
        Cell::new(labels.join("\n")).fg(Color::Red)
    }
}

fn role_cell(record: &Record) -> Cell {
    match record.role() {
        Some(_) => Cell::new(&record.role),
        None => Cell::new(&record.role).fg(Color::Yellow),
    }
}

fn reports_to_cell(reports_to: &str) -> Cell {
    if reports_to.is_empty() {
        dim_cell("-")
    } else {
        Cell::new(reports_to)
    }
}

fn kind_cell(kind: FindingKind) -> Cell {
    let color = match kind {
        FindingKind::DuplicateEmail | FindingKind::UnknownRole => Color::Yellow,
        _ => Color::Red,
    };
    Cell::new(kind.label()).fg(color)
}

fn count_cell(count: usize) -> Cell {
    if count > 0 {
        Cell::new(count).fg(Color::Red).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_roster_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(160);
    if table.column_count() >= 6 {
        table.set_constraints(vec![
            ColumnConstraint::LowerBoundary(Width::Fixed(5)),
            ColumnConstraint::UpperBoundary(Width::Percentage(25)),
            ColumnConstraint::UpperBoundary(Width::Percentage(20)),
            ColumnConstraint::UpperBoundary(Width::Fixed(10)),
            ColumnConstraint::UpperBoundary(Width::Percentage(30)),
            ColumnConstraint::LowerBoundary(Width::Fixed(8)),
        ]);
    }
}

fn apply_findings_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(180);
    if table.column_count() >= 5 {
        table.set_constraints(vec![
            ColumnConstraint::LowerBoundary(Width::Fixed(5)),
            ColumnConstraint::UpperBoundary(Width::Fixed(22)),
            ColumnConstraint::UpperBoundary(Width::Percentage(20)),
            ColumnConstraint::UpperBoundary(Width::Percentage(15)),
            ColumnConstraint::UpperBoundary(Width::Percentage(50)),
        ]);
    }
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

pub fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
