//! Arithmetic conversion between the Gregorian and Jalali calendars.
//!
//! Both directions count days from a shared anchor: Jalali 979-01-01, which
//! is Gregorian 1600-03-20. Every quotient and remainder uses floor
//! (Euclidean) division so dates before the anchor follow the same formulas
//! as dates after it.

use crate::consts::{
    ANCHOR_DAY_OFFSET, CENTURY_CYCLE, DAYS_PER_COMMON_CENTURY, DAYS_PER_FOUR_YEARS,
    DAYS_PER_GREGORIAN_CYCLE, DAYS_PER_JALALI_CYCLE, DAYS_PER_LEAP_CENTURY, DAYS_PER_LEAP_YEAR,
    DAYS_PER_YEAR, FEBRUARY, GREGORIAN_ANCHOR_YEAR, GREGORIAN_CYCLE, GREGORIAN_DAYS_BEFORE_MONTH,
    GREGORIAN_DAYS_IN_MONTH, JALALI_ANCHOR_YEAR, JALALI_CYCLE_YEARS, JALALI_DAYS_IN_MONTH,
    JALALI_FIRST_HALF_DAYS, JALALI_NEW_YEAR_OFFSET, LEAP_YEAR_CYCLE,
};
use crate::types::jalali_days_before_year;
use crate::{DateError, GregorianDate, JalaliDate, Month};

/// Days in each of the first six Jalali months
const LONG_MONTH_DAYS: i32 = 31;
/// Days in months 7-11 (and a leap Esfand)
const SHORT_MONTH_DAYS: i32 = 30;

/// Converts a Gregorian date to its Jalali counterpart.
pub fn gregorian_to_jalali(date: GregorianDate) -> JalaliDate {
    let (gy, gm, gd) = date.to_ymd();
    let base = gy - GREGORIAN_ANCHOR_YEAR;
    // Leap days count from March, so a date past February sees this year's leap day
    let leap_base = if gm > FEBRUARY { base + 1 } else { base };

    let mut days = DAYS_PER_YEAR * base
        + (leap_base + LEAP_YEAR_CYCLE - 1).div_euclid(LEAP_YEAR_CYCLE)
        - (leap_base + CENTURY_CYCLE - 1).div_euclid(CENTURY_CYCLE)
        + (leap_base + GREGORIAN_CYCLE - 1).div_euclid(GREGORIAN_CYCLE)
        - JALALI_NEW_YEAR_OFFSET
        + i32::from(gd)
        + GREGORIAN_DAYS_BEFORE_MONTH[date.month().index()];

    let mut year = JALALI_ANCHOR_YEAR + JALALI_CYCLE_YEARS * days.div_euclid(DAYS_PER_JALALI_CYCLE);
    days = days.rem_euclid(DAYS_PER_JALALI_CYCLE);

    year += LEAP_YEAR_CYCLE * (days / DAYS_PER_FOUR_YEARS);
    days %= DAYS_PER_FOUR_YEARS;

    if days > DAYS_PER_YEAR {
        year += (days - 1) / DAYS_PER_YEAR;
        days = (days - 1) % DAYS_PER_YEAR;
    }

    let (month, day) = jalali_month_day(days);
    JalaliDate::from_parts(year, month, day)
}

/// Splits a 0-based day of the Jalali year into month and day of month.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn jalali_month_day(days: i32) -> (Month, u8) {
    debug_assert!((0..DAYS_PER_LEAP_YEAR).contains(&days));
    // 0 <= days < 366, so every quotient and remainder below fits in u8
    if days < JALALI_FIRST_HALF_DAYS {
        (
            Month::from_index((days / LONG_MONTH_DAYS) as u8),
            (days % LONG_MONTH_DAYS) as u8 + 1,
        )
    } else {
        let rest = days - JALALI_FIRST_HALF_DAYS;
        (
            Month::from_index(6 + (rest / SHORT_MONTH_DAYS) as u8),
            (rest % SHORT_MONTH_DAYS) as u8 + 1,
        )
    }
}

/// Converts a Jalali date to its Gregorian counterpart.
///
/// The century correction must run before the four-year correction: a
/// century that does not start on a leap year is one day shorter, and
/// undoing that day afterwards would shift dates near 1700, 1800, 1900,
/// 2100, ... by a year.
pub fn jalali_date_to_gregorian(date: JalaliDate) -> GregorianDate {
    let days_before_month: i32 = JALALI_DAYS_IN_MONTH[..date.month().index()]
        .iter()
        .map(|&d| i32::from(d))
        .sum();
    let jalali_day_no =
        jalali_days_before_year(date.year()) + days_before_month + i32::from(date.day()) - 1;

    let mut days = jalali_day_no + ANCHOR_DAY_OFFSET;

    let mut year = GREGORIAN_ANCHOR_YEAR + GREGORIAN_CYCLE * days.div_euclid(DAYS_PER_GREGORIAN_CYCLE);
    days = days.rem_euclid(DAYS_PER_GREGORIAN_CYCLE);

    let mut leap = true;
    if days >= DAYS_PER_LEAP_CENTURY {
        days -= 1;
        year += CENTURY_CYCLE * (days / DAYS_PER_COMMON_CENTURY);
        days %= DAYS_PER_COMMON_CENTURY;

        if days >= DAYS_PER_YEAR {
            days += 1;
        } else {
            leap = false;
        }
    }

    year += LEAP_YEAR_CYCLE * (days / DAYS_PER_FOUR_YEARS);
    days %= DAYS_PER_FOUR_YEARS;

    if days >= DAYS_PER_LEAP_YEAR {
        leap = false;
        days -= 1;
        year += days / DAYS_PER_YEAR;
        days %= DAYS_PER_YEAR;
    }

    let (month, day) = gregorian_month_day(days, leap);
    GregorianDate::from_parts(year, month, day)
}

/// Walks the Gregorian month table until the remaining day count fits in a month.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn gregorian_month_day(mut days: i32, leap: bool) -> (Month, u8) {
    // January through November; whatever remains falls in December
    for (index, &length) in GREGORIAN_DAYS_IN_MONTH[1..12].iter().enumerate() {
        let length = i32::from(length) + i32::from(leap && index == 1);
        if days < length {
            return (Month::from_index(index as u8), days as u8 + 1);
        }
        days -= length;
    }
    debug_assert!(days < 31);
    (Month::from_index(11), days as u8 + 1)
}

/// Converts raw Jalali components to a Gregorian date.
///
/// # Errors
/// Returns the same errors as [`JalaliDate::new`]; out-of-range components
/// are rejected rather than wrapped into a neighbouring month or year.
pub fn jalali_to_gregorian(year: i32, month: u8, day: u8) -> Result<GregorianDate, DateError> {
    Ok(jalali_date_to_gregorian(JalaliDate::new(year, month, day)?))
}

impl GregorianDate {
    pub fn to_jalali(&self) -> JalaliDate {
        gregorian_to_jalali(*self)
    }
}

impl JalaliDate {
    pub fn to_gregorian(&self) -> GregorianDate {
        jalali_date_to_gregorian(*self)
    }
}

impl From<GregorianDate> for JalaliDate {
    fn from(date: GregorianDate) -> Self {
        gregorian_to_jalali(date)
    }
}

impl From<JalaliDate> for GregorianDate {
    fn from(date: JalaliDate) -> Self {
        jalali_date_to_gregorian(date)
    }
}
