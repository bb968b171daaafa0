// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Scale-tagged day counts.
//!
//! [`Time<S>`] wraps one [`Days`] quantity.  The marker `S: TimeScale` says
//! which epoch the count starts from, so a Julian Day and a Modified Julian
//! Day cannot be mixed up even though both are a single `f64`.
//!
//! Calendar-aware methods (decoding to a date, weekday) are only defined on
//! the Julian Day axis, in `julian_day.rs`.

use chrono::{DateTime, Utc};
use qtty::*;
use std::marker::PhantomData;
use std::ops::{Add, Sub};

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// 1970-01-01T00:00:00Z on the Julian Day axis.
const UNIX_EPOCH_JD: Days = Days::new(2_440_587.5);

/// An epoch for a continuous day count.
///
/// Every scale is a fixed offset from the Julian Day axis, so both
/// conversions are a single addition or subtraction.
pub trait TimeScale: Copy + Clone + std::fmt::Debug + PartialEq + PartialOrd + 'static {
    /// Prefix printed by `Display`.
    const LABEL: &'static str;

    /// Native count → Julian Day.
    fn to_jd(value: Days) -> Days;

    /// Julian Day → native count.
    fn from_jd(jd: Days) -> Days;
}

/// A day count on scale `S`.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct Time<S: TimeScale> {
    quantity: Days,
    _scale: PhantomData<S>,
}

impl<S: TimeScale> Time<S> {
    /// Wrap a raw count of days since the scale's epoch.
    #[inline]
    pub const fn new(value: f64) -> Self {
        Self::from_days(Days::new(value))
    }

    #[inline]
    pub const fn from_days(days: Days) -> Self {
        Self {
            quantity: days,
            _scale: PhantomData,
        }
    }

    #[inline]
    pub const fn quantity(&self) -> Days {
        self.quantity
    }

    /// Raw count as `f64`.
    #[inline]
    pub const fn value(&self) -> f64 {
        self.quantity.value()
    }

    /// The same instant as an absolute Julian Day.
    #[inline]
    pub fn julian_day(&self) -> Days {
        S::to_jd(self.quantity)
    }

    #[inline]
    pub fn from_julian_day(jd: Days) -> Self {
        Self::from_days(S::from_jd(jd))
    }

    /// Re-express this instant on scale `T`.
    #[inline]
    pub fn to<T: TimeScale>(&self) -> Time<T> {
        Time::<T>::from_julian_day(self.julian_day())
    }

    /// The UTC wall-clock instant with this day count.
    ///
    /// UTC is taken to tick uniformly from the Unix epoch: no ΔT, no leap
    /// seconds.  chrono counts proleptic Gregorian days, so instants before
    /// 1582-10-15 come back with Gregorian fields, not the Julian fields
    /// [`CalendarDate`](crate::CalendarDate) would give.
    ///
    /// `None` when the count is not finite or lies outside chrono's range.
    pub fn to_utc(&self) -> Option<DateTime<Utc>> {
        let seconds = (self.julian_day() - UNIX_EPOCH_JD).to::<Second>().value();
        if !seconds.is_finite() {
            return None;
        }
        let whole = seconds.floor();
        let nanos = ((seconds - whole) * 1e9) as u32;
        DateTime::<Utc>::from_timestamp(whole as i64, nanos.min(999_999_999))
    }

    /// Day count of a UTC wall-clock instant; inverse of [`Time::to_utc`].
    pub fn from_utc(datetime: DateTime<Utc>) -> Self {
        let seconds = Seconds::new(datetime.timestamp() as f64)
            + Seconds::new(f64::from(datetime.timestamp_subsec_nanos()) / 1e9);
        Self::from_julian_day(UNIX_EPOCH_JD + seconds.to::<Day>())
    }
}

impl<S: TimeScale> std::fmt::Display for Time<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", S::LABEL, self.quantity)
    }
}

#[cfg(feature = "serde")]
impl<S: TimeScale> Serialize for Time<S> {
    fn serialize<Ser>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error>
    where
        Ser: Serializer,
    {
        serializer.serialize_f64(self.value())
    }
}

#[cfg(feature = "serde")]
impl<'de, S: TimeScale> Deserialize<'de> for Time<S> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        f64::deserialize(deserializer).map(Self::new)
    }
}

impl<S: TimeScale> Add<Days> for Time<S> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Days) -> Self::Output {
        Self::from_days(self.quantity + rhs)
    }
}

impl<S: TimeScale> Sub<Days> for Time<S> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Days) -> Self::Output {
        Self::from_days(self.quantity - rhs)
    }
}

/// Elapsed days between two instants on the same scale.
impl<S: TimeScale> Sub for Time<S> {
    type Output = Days;
    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        self.quantity - rhs.quantity
    }
}
