use chrono::NaiveDate;
use thiserror::Error;

/// Errors raised while admitting caller input. All of them short-circuit
/// before any calculation runs.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContractError {
    #[error("invalid calendar date {year:04}-{month:02}-{day:02}")]
    InvalidCalendarDate { year: i32, month: u32, day: u32 },
    #[error("{field} {value} is outside the supported range {min}..={max}")]
    OutOfSupportedRange {
        field: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },
    #[error("numerology needs a name containing at least one letter")]
    EmptyName,
    #[error("expected a YYYY-MM-DD date, got {value:?}")]
    InvalidDateFormat { value: String },
    #[error("expected a HH:MM birth time, got {value:?}")]
    InvalidTimeFormat { value: String },
    #[error("range end {end} is before start {start}")]
    InvalidDateRange { start: NaiveDate, end: NaiveDate },
}
