//! Coverage-grid semantics over raw tables.
//!
//! A coverage grid lays out study types as rows and shift positions as
//! columns; a cell marks coverage when its text case-folds to one of
//! the accepted markers.

use tracing::debug;

use sched_model::{Result, SheetGrid, is_coverage_marker};

use crate::document::{RawTable, parse_tables};

/// Parse the document entry into coverage-grid sheets.
///
/// Sheets with no rows at all are skipped. The first row of each sheet
/// is its header; rows whose study-type cell (column 0) is empty are
/// blank separators and contribute nothing.
pub fn parse_grid(content: &[u8]) -> Result<Vec<SheetGrid>> {
    let tables = parse_tables(content)?;
    debug!(sheets = tables.len(), "found sheets");
    Ok(tables.into_iter().filter_map(build_sheet).collect())
}

fn build_sheet(table: RawTable) -> Option<SheetGrid> {
    let mut rows = table.rows.into_iter();
    let header = rows.next()?;
    let mut sheet = SheetGrid::new(table.name);
    sheet.positions = header;
    for row in rows {
        let Some(study_type) = row.first().filter(|label| !label.is_empty()) else {
            continue;
        };
        for (index, value) in row.iter().enumerate().skip(1) {
            if !is_coverage_marker(value) {
                continue;
            }
            // Column count mismatch is tolerated: a data row longer
            // than the header resolves to a synthetic placeholder.
            let position = sheet
                .positions
                .get(index)
                .cloned()
                .unwrap_or_else(|| format!("Column{index}"));
            sheet.mark(study_type, &position);
        }
    }
    debug!(
        sheet = %sheet.name,
        study_types = sheet.studies.len(),
        markers = sheet.marker_count,
        "parsed sheet"
    );
    Some(sheet)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(name: &str, rows: &[&[&str]]) -> RawTable {
        RawTable {
            name: name.to_string(),
            rows: rows
                .iter()
                .map(|row| row.iter().map(|cell| (*cell).to_string()).collect())
                .collect(),
        }
    }

    #[test]
    fn header_row_becomes_positions() {
        let sheet = build_sheet(table(
            "Weekday 5-6 PM Neuro",
            &[&["Study", "NEURO1"], &["CPMC CT Neuro", "x"]],
        ))
        .expect("sheet");
        assert_eq!(sheet.positions, vec!["Study", "NEURO1"]);
        assert_eq!(sheet.studies["CPMC CT Neuro"].iter().next().unwrap(), "NEURO1");
    }

    #[test]
    fn zero_row_sheet_is_skipped() {
        assert!(build_sheet(table("Empty", &[])).is_none());
    }

    #[test]
    fn empty_study_type_rows_are_skipped() {
        let sheet = build_sheet(table(
            "Weekday Overnight",
            &[&["Study", "BODY1"], &["", "x"], &["Allen MR Body", "x"]],
        ))
        .expect("sheet");
        assert_eq!(sheet.studies.len(), 1);
        assert_eq!(sheet.marker_count, 1);
    }

    #[test]
    fn data_row_longer_than_header_gets_synthetic_position() {
        let sheet = build_sheet(table(
            "Weekday Overnight",
            &[&["Study", "BODY1"], &["Allen MR Body", "", "x"]],
        ))
        .expect("sheet");
        assert!(sheet.studies["Allen MR Body"].contains("Column2"));
    }

    #[test]
    fn repeated_study_type_rows_union_positions() {
        let sheet = build_sheet(table(
            "Weekday Overnight",
            &[
                &["Study", "BODY1", "BODY2"],
                &["Allen MR Body", "x", ""],
                &["Allen MR Body", "", "x"],
            ],
        ))
        .expect("sheet");
        let positions = &sheet.studies["Allen MR Body"];
        assert!(positions.contains("BODY1") && positions.contains("BODY2"));
    }

    #[test]
    fn non_marker_text_is_not_coverage() {
        let sheet = build_sheet(table(
            "Weekday Overnight",
            &[&["Study", "BODY1", "BODY2"], &["Allen MR Body", "no", "2"]],
        ))
        .expect("sheet");
        assert!(sheet.studies.is_empty());
    }
}
