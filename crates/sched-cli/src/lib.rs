//! CLI library components for the schedule coverage validator.

pub mod logging;
pub mod pipeline;
