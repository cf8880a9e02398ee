//! Sheet-name classification: day type, time range, and specialty.
//!
//! All of this is pure and total; every sheet name classifies to
//! something, and nothing here can fail.

use std::fmt;

use serde::Serialize;

use sched_model::DayType;

/// A fixed time-range rule: matches when every needle appears in the
/// lower-cased sheet name. Rules are evaluated top to bottom and the
/// first match wins, so more specific phrasings must come first.
#[derive(Debug)]
pub struct TimeRangeRule {
    needles: &'static [&'static str],
    pub label: &'static str,
    pub start_hour: u8,
    pub end_hour: u8,
}

impl TimeRangeRule {
    fn matches(&self, lower_name: &str) -> bool {
        self.needles.iter().all(|needle| lower_name.contains(needle))
    }

    /// True when `hour` falls inside this range (half-open).
    pub fn covers_hour(&self, hour: u8) -> bool {
        self.start_hour <= hour && hour < self.end_hour
    }
}

pub const TIME_RANGE_RULES: &[TimeRangeRule] = &[
    TimeRangeRule {
        needles: &["5", "6", "pm"],
        label: "5-6 PM",
        start_hour: 17,
        end_hour: 18,
    },
    TimeRangeRule {
        needles: &["6", "12", "am"],
        label: "6 PM to Midnight",
        start_hour: 18,
        end_hour: 24,
    },
    TimeRangeRule {
        needles: &["5", "12", "am"],
        label: "5 PM to Midnight",
        start_hour: 17,
        end_hour: 24,
    },
    TimeRangeRule {
        needles: &["10", "midnight"],
        label: "10 PM to Midnight",
        start_hour: 22,
        end_hour: 24,
    },
    TimeRangeRule {
        needles: &["12am", "1am"],
        label: "Midnight to 1 AM",
        start_hour: 0,
        end_hour: 1,
    },
    TimeRangeRule {
        needles: &["1", "8", "am"],
        label: "1 AM to 8 AM",
        start_hour: 1,
        end_hour: 8,
    },
];

/// Body-region specialty hinted by a sheet name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Specialty {
    Body,
    Neuro,
}

impl fmt::Display for Specialty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Body => write!(f, "Body"),
            Self::Neuro => write!(f, "Neuro"),
        }
    }
}

/// Everything derived from one sheet name. Computed once per sheet and
/// never re-derived per row.
#[derive(Debug)]
pub struct SheetProfile {
    pub day_type: DayType,
    pub time_range: Option<&'static TimeRangeRule>,
    pub specialty: Option<Specialty>,
}

/// Weekend iff the name contains "weekend" (any case); the grid parser
/// has no unknown day type.
pub fn day_type(sheet_name: &str) -> DayType {
    if sheet_name.to_lowercase().contains("weekend") {
        DayType::Weekend
    } else {
        DayType::Weekday
    }
}

/// First matching time-range rule, or `None`; call sites render the
/// sentinel ("Unknown" or "extended hours") themselves.
pub fn time_range(sheet_name: &str) -> Option<&'static TimeRangeRule> {
    let lower = sheet_name.to_lowercase();
    TIME_RANGE_RULES.iter().find(|rule| rule.matches(&lower))
}

pub fn specialty(sheet_name: &str) -> Option<Specialty> {
    let lower = sheet_name.to_lowercase();
    if lower.contains("body") {
        Some(Specialty::Body)
    } else if lower.contains("neuro") {
        Some(Specialty::Neuro)
    } else {
        None
    }
}

pub fn classify_sheet(sheet_name: &str) -> SheetProfile {
    SheetProfile {
        day_type: day_type(sheet_name),
        time_range: time_range(sheet_name),
        specialty: specialty(sheet_name),
    }
}
