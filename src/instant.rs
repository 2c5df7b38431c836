// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Generic time-scale parameterised wall-clock instant.
//!
//! [`Moment<S>`] is the core type of the time layer.  It stores a
//! [`CalendarDate`] plus a fractional hour of day in [`Hours`]; the
//! *meaning* of the pair is determined by the compile-time marker
//! `S: TimeScale`.  Accessors, Julian Day conversion, display, and
//! serialisation are implemented generically — no code duplication.
//!
//! Scale-crossing conversions only make sense for a particular marker and
//! are placed in inherent `impl` blocks gated on the concrete type:
//! [`UniversalTime::to_dynamical`] and [`DynamicalTime::to_universal`].
//! Both apply the ΔT(date) offset from [`crate::delta_t`] and, when the
//! shifted hour leaves `[0, 24)`, roll the calendar date by exactly one
//! day and wrap the hour back into range.

use crate::date::{julian_day, CalendarDate, J2000_JD, JULIAN_CENTURY};
use crate::delta_t::delta_t;
use crate::scales::{Td, TimeScale, Ut};
use chrono::{DateTime, Datelike, Timelike, Utc};
use qtty::{Centuries, Days, Hour, Hours, Simplify};
use std::marker::PhantomData;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Universal Time — a [`Moment`] on the Earth-rotation scale.
pub type UniversalTime = Moment<Ut>;

/// Dynamical Time — a [`Moment`] on the uniform ephemeris scale.
pub type DynamicalTime = Moment<Td>;

/// A wall-clock instant on time scale `S`: calendar date plus fractional
/// hour of day.
///
/// The hour field is normally in `[0, 24)` but may leave that range
/// transiently during arithmetic; the scale conversions re-normalize it.
/// The struct is `Copy` and carries no identity — value types throughout,
/// safe to share across threads read-only.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct Moment<S: TimeScale> {
    date: CalendarDate,
    hours: Hours,
    _scale: PhantomData<S>,
}

impl<S: TimeScale> Moment<S> {
    /// Create from a date and a raw fractional hour of day.
    #[inline]
    pub const fn new(date: CalendarDate, hours: f64) -> Self {
        Self {
            date,
            hours: Hours::new(hours),
            _scale: PhantomData,
        }
    }

    /// Create from a date and an [`Hours`] quantity.
    #[inline]
    pub const fn from_hours(date: CalendarDate, hours: Hours) -> Self {
        Self {
            date,
            hours,
            _scale: PhantomData,
        }
    }

    /// The calendar date.
    #[inline]
    pub const fn date(&self) -> CalendarDate {
        self.date
    }

    /// Fractional hour of day.
    #[inline]
    pub const fn hours(&self) -> Hours {
        self.hours
    }

    /// Julian Day of this instant (on its own scale's axis).
    #[inline]
    pub fn julian_day(&self) -> Days {
        julian_day(self.date, self.hours)
    }

    /// Julian centuries since J2000.0 (used by nutation, sidereal time,
    /// and the solar series).
    #[inline]
    pub fn julian_centuries(&self) -> Centuries {
        Centuries::new(
            ((self.julian_day() - J2000_JD) / JULIAN_CENTURY)
                .simplify()
                .value(),
        )
    }
}

/// Wrap an hour offset into `[0, 24)`, rolling the date by at most one day.
///
/// ΔT is under two hours for the whole supported span, so a single ±1-day
/// roll is always sufficient.
#[inline]
fn carry(date: CalendarDate, hours: Hours) -> (CalendarDate, Hours) {
    if hours < Hours::new(0.0) {
        (date.add_days(-1), hours + Hours::new(24.0))
    } else if hours >= Hours::new(24.0) {
        (date.add_days(1), hours - Hours::new(24.0))
    } else {
        (date, hours)
    }
}

impl UniversalTime {
    /// Convert to Dynamical Time: `TD = UT + ΔT(date)`.
    ///
    /// Rolls the calendar date forward by one day and wraps the hour into
    /// `[0, 24)` when the offset crosses midnight.
    pub fn to_dynamical(&self) -> DynamicalTime {
        let (date, hours) = carry(self.date, self.hours + delta_t(self.date).to::<Hour>());
        DynamicalTime::from_hours(date, hours)
    }

    /// Build an instant from a `chrono::DateTime<Utc>` timestamp
    /// (interpreted as Universal Time ≈ UT1).
    pub fn from_utc(t: DateTime<Utc>) -> Self {
        let s = t.second() as f64 + t.nanosecond() as f64 / 1e9;
        let m = t.minute() as f64 + s / 60.0;
        let hours = t.hour() as f64 + m / 60.0;
        Self::new(CalendarDate::new(t.year(), t.month(), t.day()), hours)
    }

    /// Convert to a `chrono::DateTime<Utc>`.
    ///
    /// Returns `None` if the instant falls outside chrono's representable
    /// range.
    pub fn to_utc(&self) -> Option<DateTime<Utc>> {
        let midnight = self.date.to_naive_date().and_hms_opt(0, 0, 0)?;
        let nanos = (self.hours.value() * 3_600e9).round() as i64;
        let stamp = midnight.checked_add_signed(chrono::Duration::nanoseconds(nanos))?;
        Some(DateTime::from_naive_utc_and_offset(stamp, Utc))
    }
}

impl DynamicalTime {
    /// Convert to Universal Time: `UT = TD − ΔT(date)`.
    ///
    /// Rolls the calendar date backward by one day and wraps the hour into
    /// `[0, 24)` when the offset crosses midnight.
    pub fn to_universal(&self) -> UniversalTime {
        let (date, hours) = carry(self.date, self.hours - delta_t(self.date).to::<Hour>());
        UniversalTime::from_hours(date, hours)
    }
}

// ── Display ───────────────────────────────────────────────────────────────

/// Fractional hours of day rendered as `HH:MM:SS.s`.
///
/// Thin formatting wrapper used by [`Moment`]'s `Display` impl and handy
/// in test output.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct TimeOfDay(pub f64);

impl std::fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (h, hf) = (self.0.trunc(), self.0.fract());
        let (m, mf) = ((hf * 60.0).trunc(), (hf * 60.0).fract());
        let (s, sf) = ((mf * 60.0).trunc(), (mf * 60.0).fract());
        write!(
            f,
            "{:02}:{:02}:{:02}.{:01}",
            h as i64,
            m as i64,
            s as i64,
            (sf * 10.0) as i64
        )
    }
}

impl<S: TimeScale> std::fmt::Display for Moment<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {}", S::LABEL, self.date, TimeOfDay(self.hours.value()))
    }
}

// ── Serde ─────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
#[derive(Serialize, Deserialize)]
struct MomentRepr {
    date: CalendarDate,
    hours: f64,
}

#[cfg(feature = "serde")]
impl<S: TimeScale> Serialize for Moment<S> {
    fn serialize<Ser>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error>
    where
        Ser: Serializer,
    {
        MomentRepr {
            date: self.date,
            hours: self.hours.value(),
        }
        .serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, S: TimeScale> Deserialize<'de> for Moment<S> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let repr = MomentRepr::deserialize(deserializer)?;
        Ok(Self::new(repr.date, repr.hours))
    }
}
