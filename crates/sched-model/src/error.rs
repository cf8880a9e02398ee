use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScheduleError {
    /// The input is not a valid compressed container, or the expected
    /// `content.xml` entry is missing.
    #[error("container error: {0}")]
    Container(String),
    /// The document entry is not well-formed markup, or the expected
    /// body/spreadsheet structure is absent.
    #[error("format error: {0}")]
    Format(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ScheduleError>;
