use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use serde::{Deserialize, Serialize};

/// Day classification derived once per sheet from its name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DayType {
    Weekday,
    Weekend,
    Unknown,
}

impl Default for DayType {
    fn default() -> Self {
        Self::Unknown
    }
}

impl fmt::Display for DayType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Weekday => "Weekday",
            Self::Weekend => "Weekend",
            Self::Unknown => "Unknown",
        };
        write!(f, "{label}")
    }
}

/// Returns true when a cell's text marks coverage.
///
/// The value is compared after case-folding; the extractor has already
/// trimmed surrounding whitespace.
pub fn is_coverage_marker(value: &str) -> bool {
    matches!(value.to_lowercase().as_str(), "x" | "yes" | "1")
}

/// One sheet of the source document after grid parsing.
///
/// `positions` is the header row in column order; index 0 is the
/// study-type column and is not a shift position. `studies` maps each
/// study-type label to the set of shift positions marked as covered.
/// Rows repeating a label within the sheet accumulate into one set.
#[derive(Debug, Clone, Default)]
pub struct SheetGrid {
    pub name: String,
    pub positions: Vec<String>,
    pub studies: BTreeMap<String, BTreeSet<String>>,
    /// Raw count of covering cells seen while parsing, before any
    /// duplicate-row union.
    pub marker_count: u64,
}

impl SheetGrid {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Record coverage for a study type at a shift position.
    pub fn mark(&mut self, study_type: &str, position: &str) {
        self.studies
            .entry(study_type.to_string())
            .or_default()
            .insert(position.to_string());
        self.marker_count += 1;
    }

    pub fn is_empty(&self) -> bool {
        self.studies.is_empty()
    }
}

/// Which sheets cover a subject, split by day type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaySets {
    pub weekday: BTreeSet<String>,
    pub weekend: BTreeSet<String>,
}

impl DaySets {
    /// The set for a given day type. `Unknown` sheets are not tracked.
    pub fn for_day(&mut self, day_type: DayType) -> Option<&mut BTreeSet<String>> {
        match day_type {
            DayType::Weekday => Some(&mut self.weekday),
            DayType::Weekend => Some(&mut self.weekend),
            DayType::Unknown => None,
        }
    }

    pub fn has_both(&self) -> bool {
        !self.weekday.is_empty() && !self.weekend.is_empty()
    }
}

/// Study type -> per-day-type covering sheets.
///
/// Identity is the study-type label string; the same label in different
/// sheets denotes the same study type. `BTreeMap`/`BTreeSet` keep the
/// structure independent of sheet visit order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoverageMatrix {
    pub subjects: BTreeMap<String, DaySets>,
}

impl CoverageMatrix {
    /// Get-or-create the entry for a subject label.
    pub fn entry(&mut self, subject: &str) -> &mut DaySets {
        self.subjects.entry(subject.to_string()).or_default()
    }

    pub fn get(&self, subject: &str) -> Option<&DaySets> {
        self.subjects.get(subject)
    }

    pub fn len(&self) -> usize {
        self.subjects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subjects.is_empty()
    }

    /// Distinct sheet names appearing in any set.
    pub fn sheet_names(&self) -> BTreeSet<&str> {
        self.subjects
            .values()
            .flat_map(|sets| {
                sets.weekday
                    .iter()
                    .chain(sets.weekend.iter())
                    .map(String::as_str)
            })
            .collect()
    }
}
