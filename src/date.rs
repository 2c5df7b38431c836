// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Calendar dates and Julian Day conversion.
//!
//! [`CalendarDate`] is a plain (year, month, day) triple.  Day-shift
//! arithmetic is delegated to [`chrono`]'s proleptic-Gregorian
//! `NaiveDate`, while [`julian_day`] implements the classical conversion
//! from *Jean Meeus — Astronomical Algorithms (2nd ed. 1998)*, ch. 7,
//! including the exact Julian/Gregorian cutover at
//! [1582-10-15](GREGORIAN_START): earlier dates are interpreted with
//! Julian-calendar leap rules, later ones with Gregorian rules.

use chrono::{Datelike, NaiveDate};
use qtty::{Days, Hours};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// J2000.0 epoch: 2000-01-01T12:00:00 TD (JD 2 451 545.0).
pub const J2000_JD: Days = Days::new(2_451_545.0);

/// One Julian century expressed in days.
pub const JULIAN_CENTURY: Days = Days::new(36_525.0);

/// First day of the Gregorian calendar reform.
///
/// Thursday 1582-10-04 (Julian) was followed by Friday 1582-10-15
/// (Gregorian).  [`julian_day`] switches leap rules at this date.
pub const GREGORIAN_START: CalendarDate = CalendarDate::new(1582, 10, 15);

/// A calendar date: (year, month, day) with no time-of-day component.
///
/// Comparison is chronological (the derived lexicographic order over the
/// field order is exactly date order).
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CalendarDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl CalendarDate {
    /// Create a date from its components.  No validation is performed here;
    /// nonsensical dates surface as panics in [`CalendarDate::add_days`].
    #[inline]
    pub const fn new(year: i32, month: u32, day: u32) -> Self {
        Self { year, month, day }
    }

    /// Shift this date by `n` days (negative values go backwards).
    ///
    /// Uses chrono's proleptic-Gregorian arithmetic, matching the behavior
    /// expected by the interpolating positioner (±1-day sample shifts).
    ///
    /// # Panics
    ///
    /// Panics if the date does not exist in the proleptic Gregorian
    /// calendar or the shift overflows chrono's representable range.
    pub fn add_days(self, n: i64) -> Self {
        let shifted = self.to_naive_date() + chrono::Duration::days(n);
        Self::from(shifted)
    }

    /// Ordinal day within the year (1-based; Jan 1 is 1).
    pub fn day_of_year(self) -> u32 {
        self.to_naive_date().ordinal()
    }

    /// The equivalent `chrono::NaiveDate` (proleptic Gregorian).
    ///
    /// # Panics
    ///
    /// Panics if the (year, month, day) triple is not a valid
    /// proleptic-Gregorian date.
    pub fn to_naive_date(self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day)
            .unwrap_or_else(|| panic!("invalid calendar date {self}"))
    }
}

impl From<NaiveDate> for CalendarDate {
    #[inline]
    fn from(d: NaiveDate) -> Self {
        Self::new(d.year(), d.month(), d.day())
    }
}

impl std::fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// Julian Day of `date` at the given fractional hour of day.
///
/// Meeus ch. 7, eq. 7.1.  Valid for any date with `year ≥ −4712`; dates
/// before [`GREGORIAN_START`] use Julian-calendar leap rules.
pub fn julian_day(date: CalendarDate, hours: Hours) -> Days {
    let mut y = date.year;
    let mut m = date.month as i32;
    if m <= 2 {
        y -= 1;
        m += 12;
    }
    let b = if date >= GREGORIAN_START {
        let a = y.div_euclid(100);
        2 - a + a / 4
    } else {
        0
    };
    let day_frac = date.day as f64 + hours.value() / 24.0;
    let jd_int = (365.25 * (y + 4716) as f64) as i64 + (30.6001 * (m + 1) as f64) as i64 + b as i64;
    Days::new(jd_int as f64 + day_frac - 1524.5)
}
