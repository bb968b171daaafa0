// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Error types for calendar and Julian Day conversions.

/// Error type for all fallible operations in this crate.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum CalendarError {
    /// The date falls in 1582-10-05..=1582-10-14, which the Gregorian reform
    /// removed from the calendar.
    #[error("{year}-{month:02}-{day} lies in the 1582 Gregorian reform gap")]
    InvalidDate {
        /// Astronomical year.
        year: i32,
        /// Month number (1..=12).
        month: u32,
        /// Fractional day of month.
        day: f64,
    },

    /// Domain error: the inverse Meeus algorithm is undefined for negative
    /// Julian Days.
    #[error("cannot convert negative Julian Day {value} to a calendar date")]
    NegativeJulianDay {
        /// The rejected Julian Day value.
        value: f64,
    },

    /// The Julian Day is not finite, or decodes to a year outside `i32`.
    #[error("Julian Day {value} is outside the representable calendar range")]
    JulianDayOutOfRange {
        /// The rejected Julian Day value.
        value: f64,
    },

    /// A month number outside 1..=12.
    #[error("month must be in 1..=12, got {value}")]
    InvalidMonth {
        /// The rejected month number.
        value: i64,
    },
}
