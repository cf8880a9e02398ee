pub mod coverage;
pub mod error;
pub mod report;
pub mod shift;

pub use coverage::{CoverageMatrix, DaySets, DayType, SheetGrid, is_coverage_marker};
pub use error::{Result, ScheduleError};
pub use report::{Gap, ValidationReport};
pub use shift::Shift;
