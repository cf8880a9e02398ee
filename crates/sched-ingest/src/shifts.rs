//! Shift-list parsing: header-keyed rows instead of a coverage grid.
//!
//! Some schedule exports carry one assignment per row with columns like
//! date, position, and staff member. Day type comes from the sheet name
//! when it is explicit, else from the row's date.
//!
//! This module is a parse-only library entry point for that row-per-shift
//! layout. The CLI pipeline validates coverage grids; callers working with
//! shift-style exports build their own aggregation over [`Shift`] records.

use chrono::{Datelike, NaiveDate};
use tracing::debug;

use sched_model::{DayType, Result, Shift};

use crate::document::parse_tables;

/// Date formats tried in order when a sheet name carries no explicit
/// weekday/weekend tag.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%m/%d/%Y", "%d/%m/%Y"];

/// Parse the document entry into shift records.
///
/// The first row of each sheet names its columns (case-folded). Rows
/// with no date and no staff member are separators and are dropped.
pub fn parse_shift_list(content: &[u8]) -> Result<Vec<Shift>> {
    let tables = parse_tables(content)?;
    let mut shifts = Vec::new();
    for table in tables {
        let mut rows = table.rows.into_iter();
        let Some(header) = rows.next() else {
            continue;
        };
        let headers: Vec<String> = header.iter().map(|cell| cell.to_lowercase()).collect();
        let before = shifts.len();
        for row in rows {
            if row.iter().all(String::is_empty) {
                continue;
            }
            let shift = build_shift(&table.name, &headers, &row);
            if shift.has_data() {
                shifts.push(shift);
            }
        }
        debug!(sheet = %table.name, shifts = shifts.len() - before, "parsed shift list");
    }
    Ok(shifts)
}

fn build_shift(sheet_name: &str, headers: &[String], row: &[String]) -> Shift {
    let field = |name: &str| -> String {
        headers
            .iter()
            .position(|header| header == name)
            .and_then(|index| row.get(index))
            .cloned()
            .unwrap_or_default()
    };
    let mut shift = Shift {
        sheet_name: sheet_name.to_string(),
        date: field("date"),
        shift: field("shift"),
        position: field("position"),
        location: field("location"),
        staff_member: field("staff_member"),
        specialty_constraint: field("specialty_constraint"),
        study_type: field("study_type"),
        required_qualification: field("required_qualification"),
        day_type: DayType::Unknown,
    };
    shift.day_type = infer_day_type(sheet_name, &shift.date);
    if shift.study_type.is_empty() {
        shift.study_type = study_type_from_sheet(sheet_name);
    }
    shift
}

/// Explicit sheet-name tags win; otherwise the date decides, and when
/// no format parses the day type stays unknown.
pub fn infer_day_type(sheet_name: &str, date: &str) -> DayType {
    let lower = sheet_name.to_lowercase();
    if lower.contains("weekend") {
        return DayType::Weekend;
    }
    if lower.contains("weekday") {
        return DayType::Weekday;
    }
    for format in DATE_FORMATS {
        if let Ok(parsed) = NaiveDate::parse_from_str(date, format) {
            return if parsed.weekday().number_from_monday() >= 6 {
                DayType::Weekend
            } else {
                DayType::Weekday
            };
        }
    }
    DayType::Unknown
}

fn study_type_from_sheet(sheet_name: &str) -> String {
    let lower = sheet_name.to_lowercase();
    if lower.contains("body") {
        "Body".to_string()
    } else if lower.contains("neuro") {
        "Neuro".to_string()
    } else {
        "General".to_string()
    }
}
