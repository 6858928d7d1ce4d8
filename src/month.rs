use crate::consts::{JALALI_MONTHS_EN, JALALI_MONTHS_FA};
use crate::prelude::*;
use crate::{GregorianDate, JalaliDate, Month};
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

static DEFAULT_NAMES: LazyLock<MonthNames> = LazyLock::new(MonthNames::english);

/// Display names for the twelve Jalali months, indexed by month number.
///
/// Deserializes from a list of exactly twelve strings, so a table can be
/// loaded from a configuration file.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MonthNames([String; 12]);

impl MonthNames {
    pub const fn new(names: [String; 12]) -> Self {
        Self(names)
    }

    /// Farvardin, Ordibehesht, ... Esfand
    pub fn english() -> Self {
        Self(JALALI_MONTHS_EN.map(str::to_owned))
    }

    /// فروردین, اردیبهشت, ... اسفند
    pub fn persian() -> Self {
        Self(JALALI_MONTHS_FA.map(str::to_owned))
    }

    pub fn name(&self, month: Month) -> &str {
        &self.0[month.index()]
    }
}

impl Default for MonthNames {
    fn default() -> Self {
        Self::english()
    }
}

impl From<[&str; 12]> for MonthNames {
    fn from(names: [&str; 12]) -> Self {
        Self(names.map(str::to_owned))
    }
}

/// A Jalali month of a specific year, labelled from a [`MonthNames`] table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display)]
#[display(fmt = "{name} {year}")]
pub struct JalaliMonth<'a> {
    year:  i32,
    month: Month,
    name:  &'a str,
}

impl<'a> JalaliMonth<'a> {
    /// The month containing `date`
    pub fn of(date: JalaliDate, names: &'a MonthNames) -> Self {
        Self {
            year:  date.year(),
            month: date.month(),
            name:  names.name(date.month()),
        }
    }

    pub const fn year(&self) -> i32 {
        self.year
    }

    pub const fn month(&self) -> Month {
        self.month
    }

    pub const fn name(&self) -> &'a str {
        self.name
    }
}

/// The Jalali month(s) a Gregorian month intersects.
///
/// `left` holds the 1st of the Gregorian month and `right` its last day, so
/// `right` never precedes `left`. When both fall in one Jalali month the two
/// fields hold the same value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct MonthOverlap<'a> {
    left:  JalaliMonth<'a>,
    right: JalaliMonth<'a>,
}

impl<'a> MonthOverlap<'a> {
    pub(crate) fn from_months(left: JalaliMonth<'a>, right: JalaliMonth<'a>) -> Self {
        debug_assert!((left.year, left.month) <= (right.year, right.month));
        if left == right {
            Self { left, right: left }
        } else {
            Self { left, right }
        }
    }

    /// Jalali month of the first day of the Gregorian month
    pub const fn left(&self) -> JalaliMonth<'a> {
        self.left
    }

    /// Jalali month of the last day of the Gregorian month
    pub const fn right(&self) -> JalaliMonth<'a> {
        self.right
    }

    /// Whether the Gregorian month lies inside a single Jalali month
    pub fn is_single_month(&self) -> bool {
        self.left == self.right
    }
}

/// Resolves the Jalali month(s) spanned by the Gregorian month of `date`.
///
/// Only the year and month of `date` are used.
pub fn gregorian_month_to_jalali_months(date: GregorianDate, names: &MonthNames) -> MonthOverlap<'_> {
    let left = JalaliMonth::of(date.first_day_of_month().to_jalali(), names);
    let right = JalaliMonth::of(date.last_day_of_month().to_jalali(), names);
    tracing::trace!(
        year = date.year(),
        month = date.month().get(),
        %left,
        %right,
        "resolved jalali months for gregorian month"
    );
    MonthOverlap::from_months(left, right)
}

/// [`gregorian_month_to_jalali_months`] labelled with the English transliterated names.
pub fn gregorian_month_to_jalali_months_default(date: GregorianDate) -> MonthOverlap<'static> {
    gregorian_month_to_jalali_months(date, &DEFAULT_NAMES)
}
