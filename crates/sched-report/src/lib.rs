//! Presentation adapters over the core's final, fully-aggregated
//! structures. Everything here is read-only over its inputs.

pub mod descriptions;
pub mod hours;
pub mod tables;

pub use descriptions::{DescriptionFormat, describe, parse_study_type};
pub use hours::{PeriodView, at_hour, hour_label, period_views};
pub use tables::{coverage_table, gap_table, verdict_line};
