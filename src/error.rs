/// Error type for constructing, parsing, and converting dates.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateError {
    /// Year outside the supported range of the calendar.
    #[error("Invalid year: {year} (must be {min}-{max})")]
    InvalidYear { year: i32, min: i32, max: i32 },

    /// Month outside 1-12.
    #[error("Invalid month: {0} (must be 1-12)")]
    InvalidMonth(u8),

    /// Day outside the month's valid range.
    #[error("Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { year: i32, month: u8, day: u8 },

    /// Valid calendar date whose counterpart lies outside the supported Gregorian years.
    #[error("Date {year}-{month:02}-{day:02} is outside the supported range")]
    OutOfRange { year: i32, month: u8, day: u8 },

    /// Malformed date string.
    #[error("Invalid date format: {0}")]
    InvalidFormat(String),

    #[error("Empty date string")]
    EmptyInput,
}
