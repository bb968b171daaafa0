// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Julian Day (`Time<JD>`) calendar conversions.
//!
//! Forward and inverse algorithms from Meeus, *Astronomical Algorithms*
//! (2nd ed. 1998), ch. 7.  The forward direction picks Julian or Gregorian
//! arithmetic from the date; the inverse picks it from the day count, with
//! JD 2 299 160.5 (1582-10-15 00:00) as the switch-over.

use chrono::{Datelike, Timelike};
use qtty::Days;

use super::instant::Time;
use super::scales::{JD, MJD};
use crate::calendar;
use crate::calendar_date::CalendarDate;
use crate::error::CalendarError;
use crate::month::{Month, Weekday};

/// Integer day count at and after which the inverse uses Gregorian rules.
const GREGORIAN_DAY_NUMBER: f64 = 2_299_161.0;

impl Time<JD> {
    /// J2000.0 epoch: 2000-01-01T12:00:00 (JD 2 451 545.0).
    pub const J2000: Self = Self::new(2_451_545.0);

    /// 1582-10-15T00:00:00, the first instant of the Gregorian calendar.
    pub const GREGORIAN_REFORM: Self = Self::new(2_299_160.5);

    /// Julian Day of a `(year, month, day)` triple.
    ///
    /// # Errors
    /// Returns [`CalendarError::InvalidDate`] for days removed by the 1582
    /// reform.
    pub fn from_ymd(year: i32, month: Month, day: f64) -> Result<Self, CalendarError> {
        CalendarDate::new(year, month, day).map(|date| Self::from_calendar_date(&date))
    }

    /// Julian Day of a calendar date.
    pub fn from_calendar_date(date: &CalendarDate) -> Self {
        let month = date.month().number();
        let julian = calendar::is_julian(date.year(), month, date.day());
        Self::new(meeus_day_count(date.year(), month, date.day(), julian))
    }

    /// The instant just before `year` begins: January 0.0 of that year.
    pub fn from_year(year: i32) -> Self {
        let julian = calendar::is_julian(year, Month::January.number(), 0.0);
        Self::new(meeus_day_count(year, Month::January.number(), 0.0, julian))
    }

    /// Julian Day of a wall-clock timestamp's calendar fields.
    ///
    /// # Errors
    /// See [`CalendarDate::from_timestamp`].
    pub fn from_timestamp<T>(timestamp: &T) -> Result<Self, CalendarError>
    where
        T: Datelike + Timelike,
    {
        CalendarDate::from_timestamp(timestamp).map(|date| Self::from_calendar_date(&date))
    }

    /// Decode into a calendar date.
    ///
    /// Day counts before the reform decode onto the Julian calendar, the rest
    /// onto the Gregorian one.
    ///
    /// # Errors
    /// Returns [`CalendarError::NegativeJulianDay`] for values below zero,
    /// where the algorithm is undefined, and
    /// [`CalendarError::JulianDayOutOfRange`] for non-finite values or years
    /// that do not fit in an `i32`.
    pub fn to_calendar_date(&self) -> Result<CalendarDate, CalendarError> {
        let value = self.value();
        if value < 0.0 {
            tracing::debug!(value, "rejected negative Julian Day");
            return Err(CalendarError::NegativeJulianDay { value });
        }
        if !value.is_finite() {
            tracing::debug!(value, "rejected non-finite Julian Day");
            return Err(CalendarError::JulianDayOutOfRange { value });
        }

        let jd = value + 0.5;
        let z = jd.floor();
        let f = jd - z;
        let a = if z >= GREGORIAN_DAY_NUMBER {
            let alpha = ((z - 1_867_216.25) / 36_524.25).floor();
            z + 1.0 + alpha - (alpha / 4.0).floor()
        } else {
            z
        };

        let b = a + 1524.0;
        let c = ((b - 122.1) / 365.25).floor();
        let d = (365.25 * c).floor();
        let e = ((b - d) / 30.6001).floor();

        let day = b - d - (30.6001 * e).floor() + f;
        let month = if e < 14.0 { e - 1.0 } else { e - 13.0 };
        let year = if month > 2.0 { c - 4716.0 } else { c - 4715.0 };

        if !(f64::from(i32::MIN)..=f64::from(i32::MAX)).contains(&year) {
            tracing::debug!(value, year, "decoded year does not fit in i32");
            return Err(CalendarError::JulianDayOutOfRange { value });
        }

        CalendarDate::new(year as i32, Month::try_from(month as i64)?, day)
    }

    /// Day of the week.
    ///
    /// The day count is floored before reducing modulo 7, so any instant
    /// between two midnights maps to the same weekday.
    pub fn week_day(&self) -> Weekday {
        Weekday::from_index((self.value() + 1.5).floor() as i64)
    }

    /// Modified Julian Day value, `JD − 2 400 000.5`.
    #[inline]
    pub fn modified(&self) -> f64 {
        self.to_mjd().value()
    }

    /// Convenience: MJD instant corresponding to this JD.
    #[inline]
    pub fn to_mjd(&self) -> Time<MJD> {
        self.to::<MJD>()
    }

    /// Days elapsed since J2000.0.
    #[inline]
    pub fn days_since_j2000(&self) -> Days {
        *self - Self::J2000
    }
}

/// Meeus' forward formula.  January and February count as months 13 and 14
/// of the previous year so that the leap day falls at the end of the cycle.
fn meeus_day_count(year: i32, month: u32, day: f64, julian: bool) -> f64 {
    let (year, month) = if month > 2 {
        (f64::from(year), f64::from(month))
    } else {
        (f64::from(year) - 1.0, f64::from(month) + 12.0)
    };

    let gregorian_correction = if julian {
        0.0
    } else {
        let a = (year / 100.0).floor();
        2.0 - a + (a / 4.0).floor()
    };

    (365.25 * (year + 4716.0)).floor() + (30.6001 * (month + 1.0)).floor() + day
        + gregorian_correction
        - 1524.5
}
