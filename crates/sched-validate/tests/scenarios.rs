//! End-to-end scenarios over aggregate + analyze.

use sched_core::{aggregate, rollup, total_markers};
use sched_model::{DayType, Gap, SheetGrid};
use sched_validate::analyze;

fn sheet(name: &str, marks: &[(&str, &str)]) -> SheetGrid {
    let mut sheet = SheetGrid::new(name);
    for (study_type, position) in marks {
        sheet.mark(study_type, position);
    }
    sheet
}

#[test]
fn single_weekday_sheet_reports_a_weekend_gap() {
    let sheets = vec![sheet("Weekday 5-6 PM Neuro", &[("CPMC CT Neuro", "NEURO1")])];
    let matrix = aggregate(&sheets);

    let sets = matrix.get("CPMC CT Neuro").expect("subject");
    assert_eq!(
        sets.weekday.iter().collect::<Vec<_>>(),
        vec!["Weekday 5-6 PM Neuro"]
    );
    assert!(sets.weekend.is_empty());

    let report = analyze(&matrix, total_markers(&sheets));
    assert_eq!(report.gaps, vec![Gap::new("CPMC CT Neuro", DayType::Weekend)]);
}

#[test]
fn weekday_and_weekend_sheets_close_the_gap() {
    let sheets = vec![
        sheet("Weekday Overnight", &[("Allen MR Body", "BODY1")]),
        sheet("Weekend Overnight", &[("Allen MR Body", "BODY1")]),
    ];
    let matrix = aggregate(&sheets);
    let report = analyze(&matrix, total_markers(&sheets));
    assert!(report.passed());
    assert!(matrix.get("Allen MR Body").expect("subject").has_both());
}

#[test]
fn category_rollup_shares_the_gap_shape() {
    let sheets = vec![
        sheet("Weekday Early", &[("CPMC CT Neuro", "NEURO1")]),
        sheet("Weekend Early", &[("CHONY CT Neuro", "NEURO1")]),
        sheet("Weekday Late", &[("Allen MR Body", "BODY1")]),
    ];
    let matrix = aggregate(&sheets);

    // Individually, both CT Neuro study types have one-sided coverage.
    let study_report = analyze(&matrix, total_markers(&sheets));
    assert_eq!(study_report.gaps.len(), 3);

    // Rolled up, CT Neuro as a category is covered on both day types.
    let categories = rollup(&matrix);
    let category_report = analyze(&categories, total_markers(&sheets));
    assert_eq!(
        category_report.gaps,
        vec![Gap::new("MRI Body", DayType::Weekend)]
    );
}
