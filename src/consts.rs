/// Minimum supported Gregorian year (inclusive)
pub const MIN_GREGORIAN_YEAR: i32 = 1;
/// Maximum supported Gregorian year (inclusive)
pub const MAX_GREGORIAN_YEAR: i32 = 9999;

/// Minimum supported Jalali year (inclusive).
/// Only its days from `JALALI_MIN_MONTH_DAY` onward are representable.
pub const MIN_JALALI_YEAR: i32 = -621;
/// Maximum supported Jalali year (inclusive).
/// Only its days up to `JALALI_MAX_MONTH_DAY` are representable.
pub const MAX_JALALI_YEAR: i32 = 9378;
/// Month and day of the earliest Jalali date, Gregorian 0001-01-01
pub const JALALI_MIN_MONTH_DAY: (u8, u8) = (10, 11);
/// Month and day of the latest Jalali date, Gregorian 9999-12-31
pub const JALALI_MAX_MONTH_DAY: (u8, u8) = (10, 10);

/// Maximum valid month (December / Esfand)
pub const MAX_MONTH: u8 = 12;

/// First day of month, used for lower bounds
pub const MIN_DAY: u8 = 1;

/// Month number for January / Farvardin
pub const FIRST_MONTH: u8 = 1;
/// Month number for February
pub const FEBRUARY: u8 = 2;
/// Month number for Esfand, the only Jalali month whose length depends on the year
pub const ESFAND: u8 = 12;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;
/// Days in Esfand for leap years
pub const ESFAND_DAYS_LEAP: u8 = 30;

/// Maximum days in each Gregorian month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const GREGORIAN_DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_gregorian_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Days in each Jalali month for a common year (0-indexed).
/// Esfand shows 29 days; leap years add one.
pub const JALALI_DAYS_IN_MONTH: [u8; 12] = [31, 31, 31, 31, 31, 31, 30, 30, 30, 30, 30, 29];

/// Days elapsed in a common Gregorian year before the first of each month (0-indexed)
pub(crate) const GREGORIAN_DAYS_BEFORE_MONTH: [i32; 12] =
    [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: i32 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: i32 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: i32 = 400;

/// Days in 400 Gregorian years
pub(crate) const DAYS_PER_GREGORIAN_CYCLE: i32 = 146_097;
/// Days in a Gregorian century whose first year is a leap year
pub(crate) const DAYS_PER_LEAP_CENTURY: i32 = 36_525;
/// Days in a Gregorian century whose first year is common
pub(crate) const DAYS_PER_COMMON_CENTURY: i32 = 36_524;
/// Days in four years, one of which is leap
pub(crate) const DAYS_PER_FOUR_YEARS: i32 = 1_461;
/// Days in a common year
pub(crate) const DAYS_PER_YEAR: i32 = 365;
/// Days in a leap year
pub(crate) const DAYS_PER_LEAP_YEAR: i32 = 366;

/// Years in the Jalali arithmetic leap cycle
pub(crate) const JALALI_CYCLE_YEARS: i32 = 33;
/// Days in one 33-year Jalali cycle (8 leap years)
pub(crate) const DAYS_PER_JALALI_CYCLE: i32 = 12_053;
/// Leap years in one 33-year Jalali cycle
pub(crate) const JALALI_LEAPS_PER_CYCLE: i32 = 8;
/// Days in the first six (31-day) Jalali months
pub(crate) const JALALI_FIRST_HALF_DAYS: i32 = 186;

/// Gregorian anchor year for the day-count arithmetic
pub(crate) const GREGORIAN_ANCHOR_YEAR: i32 = 1600;
/// Jalali year that begins in the Gregorian anchor year
pub(crate) const JALALI_ANCHOR_YEAR: i32 = 979;
/// Days from Gregorian 1600-01-01 to Jalali 979-01-01 (1600-03-20)
pub(crate) const ANCHOR_DAY_OFFSET: i32 = 79;
/// Day of year of Jalali 979-01-01 within Gregorian 1600
pub(crate) const JALALI_NEW_YEAR_OFFSET: i32 = 80;

/// Date component separator (ISO 8601 format)
pub const DATE_SEPARATOR: char = '-';

/// Jalali month names transliterated into English
pub const JALALI_MONTHS_EN: [&str; 12] = [
    "Farvardin",
    "Ordibehesht",
    "Khordad",
    "Tir",
    "Mordad",
    "Shahrivar",
    "Mehr",
    "Aban",
    "Azar",
    "Dey",
    "Bahman",
    "Esfand",
];

/// Jalali month names in Persian script
pub const JALALI_MONTHS_FA: [&str; 12] = [
    "فروردین",
    "اردیبهشت",
    "خرداد",
    "تیر",
    "مرداد",
    "شهریور",
    "مهر",
    "آبان",
    "آذر",
    "دی",
    "بهمن",
    "اسفند",
];
