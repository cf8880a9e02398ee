//! Folding per-sheet coverage into global matrices.

use tracing::info;

use sched_model::{CoverageMatrix, SheetGrid};

use crate::category::category_for;
use crate::classify::day_type;

/// Fold every sheet's coverage into a study-type matrix.
///
/// A study type accumulates a sheet into its weekday or weekend set
/// whenever at least one of its cells in that sheet marks coverage.
/// The fold is commutative and idempotent over sheet order.
pub fn aggregate(sheets: &[SheetGrid]) -> CoverageMatrix {
    let mut matrix = CoverageMatrix::default();
    for sheet in sheets {
        let day = day_type(&sheet.name);
        for (study_type, positions) in &sheet.studies {
            if positions.is_empty() {
                continue;
            }
            if let Some(set) = matrix.entry(study_type).for_day(day) {
                set.insert(sheet.name.clone());
            }
        }
    }
    info!(
        study_types = matrix.len(),
        sheets = matrix.sheet_names().len(),
        "aggregated coverage"
    );
    matrix
}

/// Roll the study-type matrix up into categories, with the same
/// two-set-per-day-type shape.
pub fn rollup(matrix: &CoverageMatrix) -> CoverageMatrix {
    let mut categories = CoverageMatrix::default();
    for (study_type, sets) in &matrix.subjects {
        let entry = categories.entry(category_for(study_type));
        entry.weekday.extend(sets.weekday.iter().cloned());
        entry.weekend.extend(sets.weekend.iter().cloned());
    }
    categories
}

/// Raw covering-cell count across sheets, for summary reporting.
pub fn total_markers(sheets: &[SheetGrid]) -> u64 {
    sheets.iter().map(|sheet| sheet.marker_count).sum()
}
