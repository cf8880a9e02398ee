pub mod aggregate;
pub mod category;
pub mod classify;

pub use aggregate::{aggregate, rollup, total_markers};
pub use category::{OTHER_CATEGORY, category_for};
pub use classify::{
    SheetProfile, Specialty, TIME_RANGE_RULES, TimeRangeRule, classify_sheet, day_type, specialty,
    time_range,
};
