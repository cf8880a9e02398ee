//! Gap analysis: which subjects lack weekday or weekend coverage.
//!
//! Gaps are findings, not errors. The analyzer always returns a full
//! report; whether a non-empty gap list fails the process is a caller
//! policy, not decided here.

use tracing::{info, warn};

use sched_model::{CoverageMatrix, DayType, Gap, ValidationReport};

/// Scan a coverage matrix and report every (subject, missing day type)
/// pair, plus summary counts. Never fails; the gap list is ordered by
/// subject label, weekday before weekend.
pub fn analyze(matrix: &CoverageMatrix, marker_count: u64) -> ValidationReport {
    let mut gaps = Vec::new();
    for (subject, sets) in &matrix.subjects {
        if sets.weekday.is_empty() {
            gaps.push(Gap::new(subject.clone(), DayType::Weekday));
        }
        if sets.weekend.is_empty() {
            gaps.push(Gap::new(subject.clone(), DayType::Weekend));
        }
    }
    let report = ValidationReport {
        gaps,
        subject_count: matrix.len(),
        sheet_count: matrix.sheet_names().len(),
        marker_count,
    };
    if report.passed() {
        info!(subjects = report.subject_count, "validation passed");
    } else {
        warn!(
            subjects = report.subject_count,
            gaps = report.gaps.len(),
            "validation found coverage gaps"
        );
    }
    report
}
