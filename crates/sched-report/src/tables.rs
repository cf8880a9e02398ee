//! comfy-table rendering of coverage matrices and gap lists.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use sched_model::{CoverageMatrix, DayType, Gap, ValidationReport};

fn header_cell(text: &str) -> Cell {
    Cell::new(text).add_attribute(Attribute::Bold)
}

fn apply_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn status_cell(both: bool) -> Cell {
    if both {
        Cell::new("ok").fg(Color::Green)
    } else {
        Cell::new("gap").fg(Color::Red).add_attribute(Attribute::Bold)
    }
}

/// Per-subject coverage: sheet counts for each day type and a status.
pub fn coverage_table(matrix: &CoverageMatrix, subject_heading: &str) -> Table {
    let mut table = Table::new();
    apply_style(&mut table);
    table.set_header(vec![
        header_cell(subject_heading),
        header_cell("Weekday sheets"),
        header_cell("Weekend sheets"),
        header_cell("Status"),
    ]);
    for index in [1, 2] {
        if let Some(column) = table.column_mut(index) {
            column.set_cell_alignment(CellAlignment::Right);
        }
    }
    for (subject, sets) in &matrix.subjects {
        table.add_row(vec![
            Cell::new(subject),
            Cell::new(sets.weekday.len()),
            Cell::new(sets.weekend.len()),
            status_cell(sets.has_both()),
        ]);
    }
    table
}

/// The gap list as a table, one row per (subject, missing day type).
pub fn gap_table(gaps: &[Gap]) -> Table {
    let mut table = Table::new();
    apply_style(&mut table);
    table.set_header(vec![header_cell("Subject"), header_cell("Missing")]);
    for gap in gaps {
        let missing = match gap.missing {
            DayType::Weekday => "WEEKDAY coverage",
            DayType::Weekend => "WEEKEND coverage",
            DayType::Unknown => "UNKNOWN coverage",
        };
        table.add_row(vec![
            Cell::new(&gap.subject),
            Cell::new(missing).fg(Color::Red),
        ]);
    }
    table
}

/// One-line verdict for the end of a run.
pub fn verdict_line(report: &ValidationReport) -> String {
    if report.passed() {
        format!(
            "PASS: all {} study types have weekday and weekend coverage",
            report.subject_count
        )
    } else {
        format!(
            "FAIL: {} coverage gap(s) across {} study types",
            report.gaps.len(),
            report.subject_count
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sched_model::ValidationReport;

    #[test]
    fn verdict_lines() {
        let pass = ValidationReport {
            subject_count: 4,
            ..ValidationReport::default()
        };
        assert_eq!(
            verdict_line(&pass),
            "PASS: all 4 study types have weekday and weekend coverage"
        );
        let fail = ValidationReport {
            gaps: vec![Gap::new("CPMC CT Neuro", DayType::Weekend)],
            subject_count: 4,
            ..ValidationReport::default()
        };
        assert_eq!(verdict_line(&fail), "FAIL: 1 coverage gap(s) across 4 study types");
    }

    #[test]
    fn coverage_table_has_one_row_per_subject() {
        let mut matrix = CoverageMatrix::default();
        matrix
            .entry("CPMC CT Neuro")
            .weekday
            .insert("Weekday 5-6 PM Neuro".to_string());
        let table = coverage_table(&matrix, "Study type");
        let rendered = table.to_string();
        assert!(rendered.contains("CPMC CT Neuro"));
        assert!(rendered.contains("gap"));
    }
}
