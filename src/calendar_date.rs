// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Calendar dates with a fractional day.
//!
//! A [`CalendarDate`] is a `(year, month, day)` triple where `year` uses
//! astronomical numbering (year 0 = 1 BCE) and `day` may carry the time of
//! day as a fraction (`26.4` is the 26th at 09:36).  Dates up to 1582-10-04
//! are on the proleptic Julian calendar, dates from 1582-10-15 on the
//! Gregorian calendar; the ten days in between cannot be constructed.

use chrono::{Datelike, Timelike};

use crate::calendar;
use crate::error::CalendarError;
use crate::month::{Month, Weekday};
use crate::JulianDay;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An immutable calendar date.
///
/// Month and day magnitudes are not range checked beyond the reform gap:
/// `day = 0.0` is the last instant of the previous month and `day = 32.0`
/// runs into the next one, and both convert to Julian Days accordingly.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "CalendarDateFields"))]
pub struct CalendarDate {
    year: i32,
    month: Month,
    day: f64,
}

impl CalendarDate {
    /// Create a date, rejecting the days removed by the Gregorian reform.
    ///
    /// # Errors
    /// Returns [`CalendarError::InvalidDate`] for 1582-10-05 up to (but not
    /// including) 1582-10-15.
    pub fn new(year: i32, month: Month, day: f64) -> Result<Self, CalendarError> {
        if !calendar::is_valid_gregorian_date(year, month.number(), day) {
            tracing::debug!(year, month = month.number(), day, "rejected date in reform gap");
            return Err(CalendarError::InvalidDate {
                year,
                month: month.number(),
                day,
            });
        }
        Ok(Self { year, month, day })
    }

    /// Date for the `day_of_year`-th day of `year`, January 1st being day 1.
    ///
    /// # Errors
    /// Returns [`CalendarError::InvalidMonth`] when `day_of_year` runs past
    /// the end of the year, and [`CalendarError::InvalidDate`] when it lands
    /// in the 1582 reform gap.
    pub fn from_day_of_year(year: i32, day_of_year: i32) -> Result<Self, CalendarError> {
        let k = day_of_year_constant(year);
        let doy = i64::from(day_of_year);
        let month = if doy < 32 {
            1
        } else {
            (9.0 * (k + doy) as f64 / 275.0 + 0.98).floor() as i64
        };
        let day = doy - (275 * month).div_euclid(9) + k * (month + 9).div_euclid(12) + 30;
        Self::new(year, Month::try_from(month)?, day as f64)
    }

    /// Date from the calendar fields of a wall-clock timestamp.
    ///
    /// Hours, minutes and seconds become the fractional part of the day.
    /// Works with any `chrono` date-time type (`NaiveDateTime`,
    /// `DateTime<Tz>`); the timestamp's own fields are read as they are, with
    /// no time-zone conversion.
    ///
    /// # Errors
    /// Returns [`CalendarError::InvalidDate`] for timestamps in the reform gap
    /// (chrono counts proleptic Gregorian days there).
    pub fn from_timestamp<T>(timestamp: &T) -> Result<Self, CalendarError>
    where
        T: Datelike + Timelike,
    {
        let day = f64::from(timestamp.day())
            + f64::from(timestamp.hour()) / 24.0
            + f64::from(timestamp.minute()) / 1_440.0
            + f64::from(timestamp.second()) / 86_400.0;
        Self::new(timestamp.year(), Month::try_from(timestamp.month())?, day)
    }

    /// Decode a Julian Day; see [`JulianDay::to_calendar_date`].
    ///
    /// # Errors
    /// Returns [`CalendarError::NegativeJulianDay`] for `jd < 0`.
    #[inline]
    pub fn from_julian_day(jd: JulianDay) -> Result<Self, CalendarError> {
        jd.to_calendar_date()
    }

    /// Astronomical year.
    #[inline]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Month of the year.
    #[inline]
    pub const fn month(&self) -> Month {
        self.month
    }

    /// Day of month, including the time-of-day fraction.
    #[inline]
    pub const fn day(&self) -> f64 {
        self.day
    }

    /// `true` if this date's year has a February 29th.
    #[inline]
    pub fn is_leap_year(&self) -> bool {
        calendar::is_leap_year(self.year)
    }

    /// `true` up to and including 1582-10-04.
    #[inline]
    pub fn is_julian(&self) -> bool {
        calendar::is_julian(self.year, self.month.number(), self.day)
    }

    /// `true` from 1582-10-15 onward.
    #[inline]
    pub fn is_gregorian(&self) -> bool {
        calendar::is_gregorian(self.year, self.month.number(), self.day)
    }

    /// Ordinal day within the year, January 1st being 1.
    ///
    /// The time-of-day fraction is dropped.
    pub fn day_of_year(&self) -> i32 {
        let k = day_of_year_constant(self.year);
        let m = i64::from(self.month.number());
        let doy = (275 * m).div_euclid(9) - k * (m + 9).div_euclid(12) + self.day.floor() as i64 - 30;
        doy as i32
    }

    /// Day of the week, via the Julian Day of this date.
    #[inline]
    pub fn week_day(&self) -> Weekday {
        self.to_julian_day().week_day()
    }

    /// Julian Day of this date; see [`JulianDay::from_calendar_date`].
    #[inline]
    pub fn to_julian_day(&self) -> JulianDay {
        JulianDay::from_calendar_date(self)
    }
}

/// `1` for leap years, `2` otherwise; folds February's length into the
/// day-of-year formulas.
#[inline]
fn day_of_year_constant(year: i32) -> i64 {
    if calendar::is_leap_year(year) {
        1
    } else {
        2
    }
}

impl From<CalendarDate> for JulianDay {
    #[inline]
    fn from(date: CalendarDate) -> Self {
        date.to_julian_day()
    }
}

impl TryFrom<JulianDay> for CalendarDate {
    type Error = CalendarError;

    #[inline]
    fn try_from(jd: JulianDay) -> Result<Self, Self::Error> {
        jd.to_calendar_date()
    }
}

// ── Serde ─────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct CalendarDateFields {
    year: i32,
    month: Month,
    day: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<CalendarDateFields> for CalendarDate {
    type Error = CalendarError;

    fn try_from(fields: CalendarDateFields) -> Result<Self, Self::Error> {
        Self::new(fields.year, fields.month, fields.day)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(year: i32, month: Month, day: f64) -> CalendarDate {
        CalendarDate::new(year, month, day).unwrap()
    }

    #[test]
    fn gap_dates_cannot_be_constructed() {
        for day in 5..=14 {
            let err = CalendarDate::new(1582, Month::October, f64::from(day)).unwrap_err();
            assert!(matches!(err, CalendarError::InvalidDate { .. }), "day {day}");
        }
        assert!(CalendarDate::new(1582, Month::October, 14.999).is_err());
    }

    #[test]
    fn dates_around_the_gap_are_accepted() {
        for day in [4.0, 4.99, 15.0, 16.0] {
            assert!(CalendarDate::new(1582, Month::October, day).is_ok(), "day {day}");
        }
        assert!(CalendarDate::new(1581, Month::October, 10.0).is_ok());
        assert!(CalendarDate::new(1583, Month::October, 10.0).is_ok());
    }

    #[test]
    fn day_of_year_both_directions() {
        let d = date(1978, Month::November, 14.0);
        assert_eq!(d.day_of_year(), 318);
        assert_eq!(CalendarDate::from_day_of_year(1978, 318).unwrap(), d);

        let d = date(1988, Month::April, 22.0);
        assert_eq!(d.day_of_year(), 113);
        assert_eq!(CalendarDate::from_day_of_year(1988, 113).unwrap(), d);
    }

    #[test]
    fn day_of_year_ignores_time_of_day() {
        assert_eq!(date(1988, Month::April, 22.75).day_of_year(), 113);
    }

    #[test]
    fn day_of_year_year_ends() {
        assert_eq!(date(2000, Month::December, 31.0).day_of_year(), 366);
        assert_eq!(date(1900, Month::December, 31.0).day_of_year(), 365);
        assert_eq!(date(1500, Month::December, 31.0).day_of_year(), 366);
        assert_eq!(
            CalendarDate::from_day_of_year(2000, 366).unwrap(),
            date(2000, Month::December, 31.0)
        );
        assert_eq!(
            CalendarDate::from_day_of_year(2001, 1).unwrap(),
            date(2001, Month::January, 1.0)
        );
        assert_eq!(
            CalendarDate::from_day_of_year(2001, 60).unwrap(),
            date(2001, Month::March, 1.0)
        );
    }

    #[test]
    fn from_day_of_year_every_day_of_a_leap_year() {
        for doy in 1..=366 {
            let d = CalendarDate::from_day_of_year(2024, doy).unwrap();
            assert_eq!(d.day_of_year(), doy);
        }
    }

    #[test]
    fn from_day_of_year_past_year_end() {
        assert!(matches!(
            CalendarDate::from_day_of_year(2023, 400),
            Err(CalendarError::InvalidMonth { .. })
        ));
    }

    #[test]
    fn from_timestamp_keeps_time_of_day() {
        let ts = NaiveDate::from_ymd_opt(1977, 4, 26)
            .unwrap()
            .and_hms_opt(9, 36, 0)
            .unwrap();
        let d = CalendarDate::from_timestamp(&ts).unwrap();
        assert_eq!(d.year(), 1977);
        assert_eq!(d.month(), Month::April);
        assert!((d.day() - 26.4).abs() < 1e-9);
    }

    #[test]
    fn from_timestamp_seconds_fraction() {
        let ts = NaiveDate::from_ymd_opt(2000, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 30)
            .unwrap();
        let d = CalendarDate::from_timestamp(&ts).unwrap();
        assert!((d.day() - (1.0 + 30.0 / 86_400.0)).abs() < 1e-12);
    }

    #[test]
    fn from_timestamp_in_gap_is_rejected() {
        let ts = NaiveDate::from_ymd_opt(1582, 10, 10)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        assert!(CalendarDate::from_timestamp(&ts).is_err());
    }

    #[test]
    fn classification_shortcuts() {
        let julian = date(1582, Month::October, 4.0);
        let gregorian = date(1582, Month::October, 15.0);
        assert!(julian.is_julian() && !julian.is_gregorian());
        assert!(gregorian.is_gregorian() && !gregorian.is_julian());
        assert!(date(2000, Month::March, 1.0).is_leap_year());
    }

    #[test]
    fn week_day_via_julian_day() {
        assert_eq!(date(1954, Month::June, 30.0).week_day(), Weekday::Wednesday);
        assert_eq!(date(1582, Month::October, 4.0).week_day(), Weekday::Thursday);
        assert_eq!(date(1582, Month::October, 15.0).week_day(), Weekday::Friday);
    }

    #[test]
    fn ordering_is_chronological() {
        assert!(date(1582, Month::October, 4.0) < date(1582, Month::October, 15.0));
        assert!(date(1999, Month::December, 31.9) < date(2000, Month::January, 1.0));
    }
}
