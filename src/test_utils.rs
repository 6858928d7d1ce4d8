//! Shorthand constructors for tests.

use crate::{GregorianDate, JalaliDate};

pub fn greg(year: i32, month: u8, day: u8) -> GregorianDate {
    GregorianDate::new(year, month, day).expect("valid gregorian date in test")
}

pub fn jal(year: i32, month: u8, day: u8) -> JalaliDate {
    JalaliDate::new(year, month, day).expect("valid jalali date in test")
}
