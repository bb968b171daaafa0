// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Calendar Module
//!
//! Conversions between calendar dates and the continuous Julian Day count,
//! across the 1582 Julian→Gregorian reform.
//!
//! # Core types
//!
//! - [`CalendarDate`] — `(year, month, fractional day)`; dates up to
//!   1582-10-04 are Julian, dates from 1582-10-15 Gregorian, and the ten days
//!   in between cannot be constructed.
//! - [`JulianDay`] — type alias for `Time<JD>`, days since -4712-01-01 12:00.
//! - [`ModifiedJulianDay`] — type alias for `Time<MJD>`, `JD − 2 400 000.5`.
//! - [`Month`] / [`Weekday`] — closed enumerations.
//! - [`CalendarError`] — rejected constructions and conversions.
//!
//! The free functions in [`calendar`] classify raw `(year, month, day)`
//! triples without constructing anything.
//!
//! ```rust
//! use meeus_calendar::{CalendarDate, JulianDay, Month, Weekday};
//!
//! let date = CalendarDate::new(1957, Month::October, 4.81)?;
//! let jd = date.to_julian_day();
//! assert!((jd.value() - 2_436_116.31).abs() < 1e-6);
//! assert_eq!(jd.week_day(), Weekday::Friday);
//!
//! let back = jd.to_calendar_date()?;
//! assert_eq!((back.year(), back.month()), (1957, Month::October));
//! # Ok::<(), meeus_calendar::CalendarError>(())
//! ```

pub mod calendar;
mod calendar_date;
mod error;
pub(crate) mod instant;
mod julian_day;
mod month;
pub(crate) mod scales;

// ── Re-exports ────────────────────────────────────────────────────────────

pub use calendar_date::CalendarDate;
pub use error::CalendarError;
pub use instant::{Time, TimeScale};
pub use month::{Month, Weekday};
pub use scales::{JD, MJD};

/// Julian Day — continuous count of days since -4712-01-01 12:00 (Julian).
///
/// This is a type alias for [`Time<JD>`].
pub type JulianDay = Time<JD>;

/// Modified Julian Day — `JD − 2 400 000.5`, starting at midnight.
///
/// This is a type alias for [`Time<MJD>`].
pub type ModifiedJulianDay = Time<MJD>;
