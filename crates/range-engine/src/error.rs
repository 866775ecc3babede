//! Error types for range-engine input parsing.
//!
//! Range computations themselves never fail: absent input yields an empty
//! result. These errors only surface when a caller-supplied string cannot
//! be read as a year, month, week, view type or zone name.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RangeError {
    #[error("Invalid year: {0}")]
    InvalidYear(String),

    #[error("Invalid month: {0}")]
    InvalidMonth(String),

    #[error("Invalid week: {0}")]
    InvalidWeek(String),

    #[error("Unknown view type: {0}")]
    UnknownViewType(String),

    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),
}

pub type Result<T> = std::result::Result<T, RangeError>;
