use std::fmt;

/// Result type for cyclecal-types operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the types layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Month or day outside calendar bounds
    InvalidDate {
        year: i32,
        month: u32,
        day: Option<u32>,
    },

    /// Month navigation only moves one step at a time
    InvalidDelta(i32),

    /// Text could not be parsed as a date
    Parse(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidDate {
                year,
                month,
                day: Some(day),
            } => write!(f, "Invalid date: {}-{:02}-{:02}", year, month, day),
            Error::InvalidDate {
                year,
                month,
                day: None,
            } => write!(f, "Invalid month: {}-{:02}", year, month),
            Error::InvalidDelta(delta) => {
                write!(f, "Invalid month delta: {} (expected -1 or +1)", delta)
            }
            Error::Parse(msg) => write!(f, "Parse error: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

