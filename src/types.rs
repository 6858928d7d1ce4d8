use crate::consts::{
    CENTURY_CYCLE, DAYS_PER_LEAP_YEAR, DAYS_PER_YEAR, ESFAND, ESFAND_DAYS_LEAP, FEBRUARY,
    FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE, GREGORIAN_DAYS_IN_MONTH, JALALI_ANCHOR_YEAR,
    JALALI_CYCLE_YEARS, JALALI_DAYS_IN_MONTH, JALALI_LEAPS_PER_CYCLE, LEAP_YEAR_CYCLE,
    MAX_MONTH,
};
use crate::DateError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU8;

/// A month value guaranteed to be in the range `1..=MAX_MONTH` (1..=12)
/// Uses `NonZeroU8` internally, so 0 is not a valid month.
/// The same type indexes Gregorian and Jalali months.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Month(NonZeroU8);

impl Month {
    /// Creates a new Month, validating that it's non-zero and <= `MAX_MONTH`
    ///
    /// # Errors
    /// Returns `DateError::InvalidMonth` if the value is 0 or > `MAX_MONTH`.
    pub fn new(value: u8) -> Result<Self, DateError> {
        let non_zero = NonZeroU8::new(value).ok_or(DateError::InvalidMonth(value))?;
        if value > MAX_MONTH {
            return Err(DateError::InvalidMonth(value));
        }
        Ok(Self(non_zero))
    }

    /// Returns the month value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }

    /// Month from its zero-based position; callers guarantee `index < MAX_MONTH`
    #[inline]
    pub(crate) const fn from_index(index: u8) -> Self {
        debug_assert!(index < MAX_MONTH);
        Self(NonZeroU8::MIN.saturating_add(index))
    }

    /// Zero-based position of the month, for table lookups
    #[inline]
    pub(crate) const fn index(self) -> usize {
        (self.0.get() - 1) as usize
    }
}

impl TryFrom<u8> for Month {
    type Error = DateError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.0.get()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// Helper functions

/// Whether `year` has a 29 February in the proleptic Gregorian calendar.
pub const fn is_gregorian_leap_year(year: i32) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

/// Length of a Gregorian month in `year` (28-31).
pub const fn gregorian_days_in_month(year: i32, month: Month) -> u8 {
    if month.get() == FEBRUARY && is_gregorian_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        GREGORIAN_DAYS_IN_MONTH[month.get() as usize]
    }
}

/// Days from Jalali 979-01-01 to the first day of `year`, in `i64` so every
/// `i32` year and its successor fit.
///
/// Counts whole 33-year cycles (8 leap years each) and then the leap years
/// already passed inside the current cycle. Negative before the anchor.
#[allow(clippy::cast_lossless)]
const fn jalali_days_before(year: i64) -> i64 {
    let jy = year - JALALI_ANCHOR_YEAR as i64;
    let cycle = JALALI_CYCLE_YEARS as i64;
    DAYS_PER_YEAR as i64 * jy
        + jy.div_euclid(cycle) * JALALI_LEAPS_PER_CYCLE as i64
        + (jy.rem_euclid(cycle) + 3) / 4
}

/// `jalali_days_before` for years inside `MIN_JALALI_YEAR..=MAX_JALALI_YEAR`,
/// where the count fits in `i32`.
#[allow(clippy::cast_lossless, clippy::cast_possible_truncation)]
pub(crate) const fn jalali_days_before_year(year: i32) -> i32 {
    jalali_days_before(year as i64) as i32
}

/// Whether the Jalali year has a 30-day Esfand under the 33-year arithmetic cycle.
///
/// Accepts any `i32`; years outside the supported date range follow the same cycle.
#[allow(clippy::cast_lossless)]
pub const fn is_jalali_leap_year(year: i32) -> bool {
    let year = year as i64;
    jalali_days_before(year + 1) - jalali_days_before(year) == DAYS_PER_LEAP_YEAR as i64
}

/// Length of a Jalali month in `year` (29-31).
pub const fn jalali_days_in_month(year: i32, month: Month) -> u8 {
    if month.get() == ESFAND && is_jalali_leap_year(year) {
        ESFAND_DAYS_LEAP
    } else {
        JALALI_DAYS_IN_MONTH[month.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_new_valid() {
        for m in 1..=12 {
            assert!(Month::new(m).is_ok(), "Month {m} should be valid");
        }
    }

    #[test]
    fn test_month_new_invalid() {
        assert!(matches!(Month::new(0), Err(DateError::InvalidMonth(0))));
        assert!(matches!(Month::new(13), Err(DateError::InvalidMonth(13))));
        assert!(matches!(Month::new(255), Err(DateError::InvalidMonth(255))));
    }

    #[test]
    fn test_month_conversions() {
        let month: Month = 8.try_into().unwrap();
        assert_eq!(month.get(), 8);
        assert_eq!(month.index(), 7);
        assert_eq!(Month::from_index(7), month);
        assert_eq!(month.to_string(), "8");

        let value: u8 = month.into();
        assert_eq!(value, 8);

        let result: Result<Month, _> = 0.try_into();
        assert!(result.is_err());
    }

    #[test]
    fn test_month_serde() {
        let month = Month::new(8).unwrap();
        let json = serde_json::to_string(&month).unwrap();
        assert_eq!(json, "8");

        let parsed: Month = serde_json::from_str(&json).unwrap();
        assert_eq!(month, parsed);

        assert!(serde_json::from_str::<Month>("13").is_err());
    }

    #[test]
    fn test_is_gregorian_leap_year_cases() {
        struct TestCase {
            year:        i32,
            is_leap:     bool,
            description: &'static str,
        }

        let cases = [
            TestCase {
                year:        2024,
                is_leap:     true,
                description: "divisible by 4",
            },
            TestCase {
                year:        2023,
                is_leap:     false,
                description: "not divisible by 4",
            },
            TestCase {
                year:        1900,
                is_leap:     false,
                description: "century not divisible by 400",
            },
            TestCase {
                year:        2100,
                is_leap:     false,
                description: "century not divisible by 400",
            },
            TestCase {
                year:        1600,
                is_leap:     true,
                description: "divisible by 400",
            },
            TestCase {
                year:        2000,
                is_leap:     true,
                description: "divisible by 400",
            },
        ];

        for case in &cases {
            assert_eq!(
                is_gregorian_leap_year(case.year),
                case.is_leap,
                "Year {} ({})",
                case.year,
                case.description
            );
        }
    }

    #[test]
    fn test_is_jalali_leap_year() {
        let leap_years: Vec<i32> = (1390..=1410).filter(|&y| is_jalali_leap_year(y)).collect();
        assert_eq!(leap_years, vec![1391, 1395, 1399, 1403, 1408]);
    }

    #[test]
    fn test_jalali_leap_years_per_cycle() {
        // Any 33 consecutive years contain exactly 8 leap years
        for start in [-620, 0, 979, 1343, 1400, 9000] {
            let leaps = (start..start + 33).filter(|&y| is_jalali_leap_year(y)).count();
            assert_eq!(leaps, 8, "cycle starting at {start}");
        }
    }

    #[test]
    fn test_jalali_days_before_year_anchor() {
        assert_eq!(jalali_days_before_year(979), 0);
        assert_eq!(jalali_days_before_year(980), 366);
        assert_eq!(jalali_days_before_year(978), -365);
    }

    #[test]
    fn test_jalali_leap_year_extreme_years() {
        struct TestCase {
            year:    i32,
            is_leap: bool,
        }

        let cases = [
            TestCase {
                year:    1403 + 33 * 65_000_000,
                is_leap: true,
            },
            TestCase {
                year:    1402 + 33 * 65_000_000,
                is_leap: false,
            },
            TestCase {
                year:    1403 - 33 * 65_000_000,
                is_leap: true,
            },
            TestCase {
                year:    1402 - 33 * 65_000_000,
                is_leap: false,
            },
        ];

        for case in &cases {
            assert_eq!(is_jalali_leap_year(case.year), case.is_leap, "year {}", case.year);
        }

        // No overflow at the ends of i32
        for year in [6_000_000, i32::MAX, i32::MIN, i32::MAX - 1, i32::MIN + 1] {
            let days = jalali_days_in_month(year, Month::new(12).unwrap());
            assert!(days == 29 || days == 30, "year {year}");
        }
    }

    #[test]
    fn test_gregorian_days_in_month() {
        let expected = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
        for (i, &days) in expected.iter().enumerate() {
            let month = Month::new(i as u8 + 1).unwrap();
            assert_eq!(gregorian_days_in_month(2023, month), days);
        }
        assert_eq!(gregorian_days_in_month(2024, Month::new(2).unwrap()), 29);
        assert_eq!(gregorian_days_in_month(1900, Month::new(2).unwrap()), 28);
    }

    #[test]
    fn test_jalali_days_in_month() {
        for m in 1..=6 {
            assert_eq!(jalali_days_in_month(1402, Month::new(m).unwrap()), 31);
        }
        for m in 7..=11 {
            assert_eq!(jalali_days_in_month(1402, Month::new(m).unwrap()), 30);
        }
        assert_eq!(jalali_days_in_month(1402, Month::new(12).unwrap()), 29);
        assert_eq!(jalali_days_in_month(1403, Month::new(12).unwrap()), 30);
    }
}
