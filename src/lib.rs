//! Conversion between the Gregorian and Jalali (Solar Hijri) calendars.
//!
//! The crate is pure integer arithmetic: no clock, no time zones, no I/O.
//! Callers hand in plain dates and get plain values back.
//!
//! ```
//! use jalali_date::{GregorianDate, MonthNames, gregorian_month_to_jalali_months};
//!
//! let nowruz = GregorianDate::new(2024, 3, 20)?;
//! let jalali = nowruz.to_jalali();
//! assert_eq!(jalali.to_string(), "1403-01-01");
//! assert_eq!(jalali.week_of_year(), 1);
//! assert_eq!(jalali.to_gregorian(), nowruz);
//!
//! let names = MonthNames::english();
//! let overlap = gregorian_month_to_jalali_months(nowruz, &names);
//! assert_eq!(overlap.left().name(), "Esfand");
//! assert_eq!(overlap.right().name(), "Farvardin");
//! # Ok::<(), jalali_date::DateError>(())
//! ```
//!
//! Supported dates run from Gregorian 0001-01-01 to 9999-12-31 and the
//! matching span of Jalali dates, [`JalaliDate::MIN`] to [`JalaliDate::MAX`].
//! Jalali leap years follow the 33-year arithmetic cycle, which tracks the
//! astronomical calendar closely for recent centuries but is not an
//! observation-based table.

mod consts;
mod convert;
mod error;
mod gregorian;
mod jalali;
mod month;
mod prelude;
mod types;

#[cfg(test)]
mod test_utils;

pub use consts::*;
pub use convert::{gregorian_to_jalali, jalali_date_to_gregorian, jalali_to_gregorian};
pub use error::DateError;
pub use gregorian::GregorianDate;
pub use jalali::JalaliDate;
pub use month::{
    gregorian_month_to_jalali_months, gregorian_month_to_jalali_months_default, JalaliMonth,
    MonthNames, MonthOverlap,
};
pub use types::{
    gregorian_days_in_month, is_gregorian_leap_year, is_jalali_leap_year, jalali_days_in_month,
    Month,
};

/// Week number of a Jalali date within its year; see [`JalaliDate::week_of_year`].
pub fn jalali_week_number(date: JalaliDate) -> u8 {
    date.week_of_year()
}

/// Splits `YYYY-MM-DD` into numeric components without range checks.
/// A leading `-` marks a year before the calendar's epoch.
pub(crate) fn parse_ymd(s: &str) -> Result<(i32, u8, u8), DateError> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err(DateError::EmptyInput);
    }

    let (negative, unsigned) = match trimmed.strip_prefix(DATE_SEPARATOR) {
        Some(rest) => (true, rest),
        None => (false, trimmed),
    };

    let parts: Vec<&str> = unsigned.split(DATE_SEPARATOR).collect();
    let [year, month, day] = parts.as_slice() else {
        return Err(DateError::InvalidFormat(trimmed.to_owned()));
    };

    // Each field is bare ASCII digits; `from_str` alone would let a `+` sign through
    if [year, month, day].iter().any(|part| !part.bytes().all(|b| b.is_ascii_digit())) {
        return Err(DateError::InvalidFormat(trimmed.to_owned()));
    }

    let invalid = |_| DateError::InvalidFormat(trimmed.to_owned());
    let year = year.parse::<i32>().map_err(invalid)?;
    let month = month.parse::<u8>().map_err(invalid)?;
    let day = day.parse::<u8>().map_err(invalid)?;

    match (negative, year) {
        (true, 0) => Err(DateError::InvalidFormat(trimmed.to_owned())),
        (true, year) => Ok((-year, month, day)),
        (false, year) => Ok((year, month, day)),
    }
}
