use crate::consts::{
    JALALI_DAYS_IN_MONTH, JALALI_MAX_MONTH_DAY, JALALI_MIN_MONTH_DAY, MAX_JALALI_YEAR, MIN_DAY,
    MIN_JALALI_YEAR,
};
use crate::prelude::*;
use crate::types::{is_jalali_leap_year, jalali_days_in_month};
use crate::{parse_ymd, DateError, Month};
use std::str::FromStr;

/// Days in a week, for week-of-year numbering
const DAYS_PER_WEEK: u16 = 7;

/// A validated Jalali (Solar Hijri) calendar date.
///
/// Months 1-6 have 31 days, months 7-11 have 30, and Esfand (12) has 29
/// or 30 depending on the year's leap status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:04}-{:02}-{:02}", year, "month.get()", day)]
pub struct JalaliDate {
    year:  i32,
    month: Month,
    day:   u8,
}

impl JalaliDate {
    /// Earliest supported date, Gregorian 0001-01-01
    pub const MIN: Self = Self {
        year:  MIN_JALALI_YEAR,
        month: Month::from_index(JALALI_MIN_MONTH_DAY.0 - 1),
        day:   JALALI_MIN_MONTH_DAY.1,
    };

    /// Latest supported date, Gregorian 9999-12-31
    pub const MAX: Self = Self {
        year:  MAX_JALALI_YEAR,
        month: Month::from_index(JALALI_MAX_MONTH_DAY.0 - 1),
        day:   JALALI_MAX_MONTH_DAY.1,
    };

    /// Creates a date, checking the year range, month, and the day against the month length.
    ///
    /// # Errors
    /// Returns `DateError::InvalidYear`, `DateError::InvalidMonth`, or
    /// `DateError::InvalidDay` for out-of-range components, and
    /// `DateError::OutOfRange` for a valid date outside `MIN..=MAX`.
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, DateError> {
        if !(MIN_JALALI_YEAR..=MAX_JALALI_YEAR).contains(&year) {
            tracing::debug!(year, month, day, "rejected jalali year");
            return Err(DateError::InvalidYear {
                year,
                min: MIN_JALALI_YEAR,
                max: MAX_JALALI_YEAR,
            });
        }
        let month_typed = Month::new(month).inspect_err(|_| {
            tracing::debug!(year, month, day, "rejected jalali month");
        })?;
        if !(MIN_DAY..=jalali_days_in_month(year, month_typed)).contains(&day) {
            tracing::debug!(year, month, day, "rejected jalali day");
            return Err(DateError::InvalidDay { year, month, day });
        }
        let ymd = (year, month, day);
        if ymd < Self::MIN.to_ymd() || ymd > Self::MAX.to_ymd() {
            tracing::debug!(year, month, day, "jalali date outside gregorian range");
            return Err(DateError::OutOfRange { year, month, day });
        }
        Ok(Self {
            year,
            month: month_typed,
            day,
        })
    }

    /// Builds a date whose components are already known to be valid.
    pub(crate) const fn from_parts(year: i32, month: Month, day: u8) -> Self {
        Self { year, month, day }
    }

    pub const fn year(&self) -> i32 {
        self.year
    }

    pub const fn month(&self) -> Month {
        self.month
    }

    pub const fn day(&self) -> u8 {
        self.day
    }

    pub const fn is_leap_year(&self) -> bool {
        is_jalali_leap_year(self.year)
    }

    /// Number of days in this date's month (29-31)
    pub const fn days_in_month(&self) -> u8 {
        jalali_days_in_month(self.year, self.month)
    }

    /// The last day of this date's month, Esfand 30 in leap years
    pub const fn last_day_of_month(&self) -> Self {
        Self::from_parts(self.year, self.month, self.days_in_month())
    }

    /// 1-based day within the Jalali year (1-366)
    pub fn day_of_year(&self) -> u16 {
        let before: u16 = JALALI_DAYS_IN_MONTH[..self.month.index()]
            .iter()
            .map(|&d| u16::from(d))
            .sum();
        before + u16::from(self.day)
    }

    /// 1-based week number within the Jalali year.
    ///
    /// Week 1 is the first seven days of Farvardin regardless of weekday.
    /// The count runs off a fixed month-length table with a 29-day Esfand,
    /// so Esfand 29 and 30 both land in week 53.
    pub fn week_of_year(&self) -> u8 {
        let week = (self.day_of_year() + DAYS_PER_WEEK - 1) / DAYS_PER_WEEK;
        // day_of_year <= 366, so week <= 53
        u8::try_from(week).unwrap_or(u8::MAX)
    }

    /// Returns `(year, month, day)` as plain integers
    pub const fn to_ymd(&self) -> (i32, u8, u8) {
        (self.year, self.month.get(), self.day)
    }
}

impl TryFrom<(i32, u8, u8)> for JalaliDate {
    type Error = DateError;

    fn try_from(value: (i32, u8, u8)) -> Result<Self, Self::Error> {
        Self::new(value.0, value.1, value.2)
    }
}

impl FromStr for JalaliDate {
    type Err = DateError;

    /// Parses `YYYY-MM-DD`, with an optional leading `-` on the year
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (year, month, day) = parse_ymd(s)?;
        Self::new(year, month, day)
    }
}

impl serde::Serialize for JalaliDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for JalaliDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
