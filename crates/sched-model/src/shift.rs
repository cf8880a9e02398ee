use serde::{Deserialize, Serialize};

use crate::coverage::DayType;

/// One row of a shift-list sheet, keyed by its header columns.
///
/// Unlike the coverage grid, shift-list sheets carry one assignment per
/// row; the day type is inferred once at construction from the sheet
/// name or, failing that, the row's date.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Shift {
    pub sheet_name: String,
    pub date: String,
    pub shift: String,
    pub position: String,
    pub location: String,
    pub staff_member: String,
    pub specialty_constraint: String,
    pub study_type: String,
    pub required_qualification: String,
    pub day_type: DayType,
}

impl Shift {
    /// A row counts as a shift only when it has at least a date or a
    /// staff member; anything else is a separator or annotation row.
    pub fn has_data(&self) -> bool {
        !self.date.is_empty() || !self.staff_member.is_empty()
    }
}
