pub mod container;
pub mod document;
pub mod grid;
pub mod shifts;

pub use container::read_content;
pub use document::{RawTable, parse_tables};
pub use grid::parse_grid;
pub use shifts::{infer_day_type, parse_shift_list};
