use serde::{Deserialize, Serialize};

use crate::coverage::DayType;

/// A subject (study type or category) missing coverage for one day type.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Gap {
    pub subject: String,
    pub missing: DayType,
}

impl Gap {
    pub fn new(subject: impl Into<String>, missing: DayType) -> Self {
        Self {
            subject: subject.into(),
            missing,
        }
    }
}

/// Outcome of gap analysis over one coverage matrix.
///
/// Gaps are data, not errors: a run that finds gaps still completed
/// successfully at the parsing and aggregation level.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ValidationReport {
    /// Every gap found, ordered by subject label then day type.
    pub gaps: Vec<Gap>,
    /// Distinct subjects examined.
    pub subject_count: usize,
    /// Distinct sheets contributing coverage.
    pub sheet_count: usize,
    /// Total covering cells seen while parsing.
    pub marker_count: u64,
}

impl ValidationReport {
    pub fn passed(&self) -> bool {
        self.gaps.is_empty()
    }
}
