// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Julian/Gregorian calendar classification.
//!
//! The Gregorian reform made 1582-10-15 follow 1582-10-04 directly.  Every
//! date up to the 4th is counted on the (proleptic) Julian calendar, every
//! date from the 15th on the Gregorian one, and the ten days in between do
//! not exist:
//!
//! ```text
//!  ... 1582-10-04 │ 1582-10-05 ... 1582-10-14 │ 1582-10-15 ...
//!      Julian     │          invalid          │   Gregorian
//! ```
//!
//! All predicates compare `(year, month, day)` lexicographically; `day` may
//! carry a time-of-day fraction, so `4.99` is still Julian and `14.999` is
//! still in the gap.  Months are plain numbers here: month `0` is used as a
//! reference point that precedes every month of a year.

/// First day removed by the reform: 1582-10-05.
pub const LAST_JULIAN_CUTOFF: (i32, u32, f64) = (1582, 10, 5.0);

/// First day of the Gregorian calendar: 1582-10-15.
pub const FIRST_GREGORIAN_DAY: (i32, u32, f64) = (1582, 10, 15.0);

/// `true` if `year` has a February 29th.
///
/// Years on the Gregorian calendar follow the 400-year rule for centurial
/// years; everything up to and including 1582 follows the plain Julian
/// 4-year rule.
pub fn is_leap_year(year: i32) -> bool {
    let centurial = year % 100 == 0;
    if centurial && is_gregorian(year, 0, 0.0) {
        return year % 400 == 0;
    }
    year % 4 == 0
}

/// `true` if the date is strictly earlier than 1582-10-15.
pub fn before_first_gregorian_day(year: i32, month: u32, day: f64) -> bool {
    let (y, m, d) = FIRST_GREGORIAN_DAY;
    year < y || (year == y && month < m) || (year == y && month == m && day < d)
}

/// `true` if the date is 1582-10-05 or later.
pub fn after_last_julian_day(year: i32, month: u32, day: f64) -> bool {
    let (y, m, d) = LAST_JULIAN_CUTOFF;
    year > y || (year == y && month > m) || (year == y && month == m && day >= d)
}

/// `false` exactly for the ten days 1582-10-05..=1582-10-14.
pub fn is_valid_gregorian_date(year: i32, month: u32, day: f64) -> bool {
    !(after_last_julian_day(year, month, day) && before_first_gregorian_day(year, month, day))
}

/// `true` for valid dates from 1582-10-15 onward.
pub fn is_gregorian(year: i32, month: u32, day: f64) -> bool {
    is_valid_gregorian_date(year, month, day) && after_last_julian_day(year, month, day)
}

/// `true` for valid dates up to 1582-10-04.
pub fn is_julian(year: i32, month: u32, day: f64) -> bool {
    is_valid_gregorian_date(year, month, day) && before_first_gregorian_day(year, month, day)
}
