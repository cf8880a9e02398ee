//! Hour-by-hour view: what is active during a time period.

use std::collections::{BTreeMap, BTreeSet};

use sched_core::{Specialty, TimeRangeRule, classify_sheet};
use sched_model::{DayType, SheetGrid};

/// One sheet viewed as a staffed time period.
#[derive(Debug)]
pub struct PeriodView {
    pub sheet_name: String,
    pub day_type: DayType,
    pub time_range: Option<&'static TimeRangeRule>,
    pub specialty: Option<Specialty>,
    /// Shift position -> study types it covers in this period.
    pub assignments: BTreeMap<String, BTreeSet<String>>,
}

impl PeriodView {
    pub fn time_range_label(&self) -> &'static str {
        self.time_range.map_or("Unknown", |rule| rule.label)
    }

    pub fn covers_hour(&self, hour: u8) -> bool {
        self.time_range.is_some_and(|rule| rule.covers_hour(hour))
    }

    pub fn study_types(&self) -> BTreeSet<&str> {
        self.assignments
            .values()
            .flat_map(|studies| studies.iter().map(String::as_str))
            .collect()
    }
}

/// Build period views from parsed sheets, inverting each sheet's
/// study -> positions map into position -> studies.
pub fn period_views(sheets: &[SheetGrid]) -> Vec<PeriodView> {
    sheets
        .iter()
        .map(|sheet| {
            let profile = classify_sheet(&sheet.name);
            let mut assignments: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
            for (study_type, positions) in &sheet.studies {
                for position in positions {
                    assignments
                        .entry(position.clone())
                        .or_default()
                        .insert(study_type.clone());
                }
            }
            PeriodView {
                sheet_name: sheet.name.clone(),
                day_type: profile.day_type,
                time_range: profile.time_range,
                specialty: profile.specialty,
                assignments,
            }
        })
        .collect()
}

/// Periods active at `hour` on the given day type.
pub fn at_hour(periods: &[PeriodView], hour: u8, day_type: DayType) -> Vec<&PeriodView> {
    periods
        .iter()
        .filter(|period| period.day_type == day_type && period.covers_hour(hour))
        .collect()
}

/// Format an hour of day the way schedulers read it.
pub fn hour_label(hour: u8) -> String {
    match hour {
        0 => "Midnight (12:00 AM)".to_string(),
        h if h < 12 => format!("{h}:00 AM"),
        12 => "Noon (12:00 PM)".to_string(),
        h => format!("{}:00 PM", h - 12),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sheet(name: &str, marks: &[(&str, &str)]) -> SheetGrid {
        let mut sheet = SheetGrid::new(name);
        for (study_type, position) in marks {
            sheet.mark(study_type, position);
        }
        sheet
    }

    #[test]
    fn assignments_invert_the_study_map() {
        let periods = period_views(&[sheet(
            "Weekday 5-6 PM Neuro",
            &[("CPMC CT Neuro", "NEURO1"), ("CHONY CT Neuro", "NEURO1")],
        )]);
        let assignments = &periods[0].assignments["NEURO1"];
        assert_eq!(assignments.len(), 2);
        assert_eq!(periods[0].time_range_label(), "5-6 PM");
        assert_eq!(periods[0].day_type, DayType::Weekday);
    }

    #[test]
    fn hour_filter_respects_day_type_and_range() {
        let periods = period_views(&[
            sheet("Weekday 5-6 PM Neuro", &[("CPMC CT Neuro", "NEURO1")]),
            sheet("Weekend 10 PM to Midnight", &[("Allen MR Body", "BODY1")]),
        ]);
        assert_eq!(at_hour(&periods, 17, DayType::Weekday).len(), 1);
        assert!(at_hour(&periods, 17, DayType::Weekend).is_empty());
        assert_eq!(at_hour(&periods, 23, DayType::Weekend).len(), 1);
    }

    #[test]
    fn unclassified_periods_cover_no_hours() {
        let periods = period_views(&[sheet("Weekend Overnight", &[("Allen MR Body", "BODY1")])]);
        assert_eq!(periods[0].time_range_label(), "Unknown");
        assert!(!periods[0].covers_hour(2));
    }

    #[test]
    fn hour_labels() {
        assert_eq!(hour_label(0), "Midnight (12:00 AM)");
        assert_eq!(hour_label(9), "9:00 AM");
        assert_eq!(hour_label(12), "Noon (12:00 PM)");
        assert_eq!(hour_label(17), "5:00 PM");
    }
}
