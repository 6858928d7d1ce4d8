use crate::consts::{
    FIRST_MONTH, GREGORIAN_DAYS_IN_MONTH, MAX_GREGORIAN_YEAR, MAX_MONTH, MIN_DAY, MIN_GREGORIAN_YEAR,
};
use crate::prelude::*;
use crate::types::{gregorian_days_in_month, is_gregorian_leap_year};
use crate::{parse_ymd, DateError, Month};
use std::str::FromStr;

/// A validated proleptic-Gregorian calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:04}-{:02}-{:02}", year, "month.get()", day)]
pub struct GregorianDate {
    year:  i32,
    month: Month,
    day:   u8,
}

impl GregorianDate {
    /// Earliest supported date
    pub const MIN: Self =
        Self::from_parts(MIN_GREGORIAN_YEAR, Month::from_index(FIRST_MONTH - 1), MIN_DAY);

    /// Latest supported date
    pub const MAX: Self = Self::from_parts(
        MAX_GREGORIAN_YEAR,
        Month::from_index(MAX_MONTH - 1),
        GREGORIAN_DAYS_IN_MONTH[MAX_MONTH as usize],
    );

    /// Creates a date, checking the year range, month, and the day against the month length.
    ///
    /// # Errors
    /// Returns `DateError::InvalidYear`, `DateError::InvalidMonth`, or
    /// `DateError::InvalidDay` for out-of-range components.
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, DateError> {
        if !(MIN_GREGORIAN_YEAR..=MAX_GREGORIAN_YEAR).contains(&year) {
            tracing::debug!(year, month, day, "rejected gregorian year");
            return Err(DateError::InvalidYear {
                year,
                min: MIN_GREGORIAN_YEAR,
                max: MAX_GREGORIAN_YEAR,
            });
        }
        let month_typed = Month::new(month).inspect_err(|_| {
            tracing::debug!(year, month, day, "rejected gregorian month");
        })?;
        if !(MIN_DAY..=gregorian_days_in_month(year, month_typed)).contains(&day) {
            tracing::debug!(year, month, day, "rejected gregorian day");
            return Err(DateError::InvalidDay { year, month, day });
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
        is_gregorian_leap_year(self.year)
    }

    /// Number of days in this date's month (28-31)
    pub const fn days_in_month(&self) -> u8 {
        gregorian_days_in_month(self.year, self.month)
    }

    /// The 1st of this date's month
    pub const fn first_day_of_month(&self) -> Self {
        Self::from_parts(self.year, self.month, MIN_DAY)
    }

    /// The last calendar day of this date's month
    pub const fn last_day_of_month(&self) -> Self {
        Self::from_parts(self.year, self.month, self.days_in_month())
    }

    /// Returns `(year, month, day)` as plain integers
    pub const fn to_ymd(&self) -> (i32, u8, u8) {
        (self.year, self.month.get(), self.day)
    }
}

impl TryFrom<(i32, u8, u8)> for GregorianDate {
    type Error = DateError;

    fn try_from(value: (i32, u8, u8)) -> Result<Self, Self::Error> {
        Self::new(value.0, value.1, value.2)
    }
}

impl FromStr for GregorianDate {
    type Err = DateError;

    /// Parses `YYYY-MM-DD`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (year, month, day) = parse_ymd(s)?;
        Self::new(year, month, day)
    }
}

impl serde::Serialize for GregorianDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for GregorianDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
