// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Coordinate types, the positioner capability, and the interpolating
//! adapter.
//!
//! # Longitude sign convention
//!
//! [`EarthPosition::longitude`] is **positive east** of Greenwich at the
//! API boundary (the everyday convention: Boston is ≈ −71°).  The
//! classical hour-angle and sidereal-time formulas measure longitude
//! positive *west*, so every formula in this crate negates the stored
//! longitude internally.  Getting this sign wrong does not crash — it
//! silently produces plausible-looking geometry for a mirrored observer —
//! so all internal uses go through the negation in exactly one place per
//! formula.

use crate::date::CalendarDate;
use crate::instant::DynamicalTime;
use crate::interpolate::interpolate3;
use qtty::{Degree, Degrees, Radians};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// Inverse trig helpers returning degrees; qtty only wraps the forward
// direction.
#[inline]
pub(crate) fn asin(x: f64) -> Degrees {
    Radians::new(x.asin()).to::<Degree>()
}

#[inline]
pub(crate) fn acos(x: f64) -> Degrees {
    Radians::new(x.acos()).to::<Degree>()
}

#[inline]
pub(crate) fn atan2(y: f64, x: f64) -> Degrees {
    Radians::new(y.atan2(x)).to::<Degree>()
}

/// Right ascension / declination pair — the canonical representation a
/// [`Positioner`] produces.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EquatorialPosition {
    pub right_ascension: Degrees,
    pub declination: Degrees,
}

/// Observer location on Earth.  Longitude is positive east (see the
/// module docs for the sign convention used internally).
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EarthPosition {
    pub latitude: Degrees,
    pub longitude: Degrees,
}

/// Azimuth / altitude pair.  Azimuth is measured westward from south
/// (the Meeus convention, not the navigator's north-based one).
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HorizontalPosition {
    pub azimuth: Degrees,
    pub altitude: Degrees,
}

impl EquatorialPosition {
    #[inline]
    pub const fn new(right_ascension: Degrees, declination: Degrees) -> Self {
        Self {
            right_ascension,
            declination,
        }
    }

    /// Horizontal coordinates for an observer, given the apparent sidereal
    /// time at Greenwich `theta0` (Meeus eq. 13.5/13.6).
    pub fn to_horizontal(&self, theta0: Degrees, observer: &EarthPosition) -> HorizontalPosition {
        let phi = observer.latitude;
        let west_long = -observer.longitude;
        let hour_angle = theta0 - west_long - self.right_ascension;
        let azimuth = atan2(
            hour_angle.sin(),
            hour_angle.cos() * phi.sin() - self.declination.tan() * phi.cos(),
        );
        let altitude = asin(
            phi.sin() * self.declination.sin()
                + phi.cos() * self.declination.cos() * hour_angle.cos(),
        );
        HorizontalPosition { azimuth, altitude }
    }

    /// Altitude of the body as it crosses the local meridian.
    pub fn transit_altitude(&self, latitude: Degrees) -> Degrees {
        asin(latitude.sin() * self.declination.sin() + latitude.cos() * self.declination.cos())
    }

    /// Hour angle at which the body reaches `altitude` for an observer at
    /// `latitude`, or `None` if it never does (circumpolar or always
    /// below that altitude) — the expected, recoverable outcome at polar
    /// latitudes.
    pub fn hour_angle_at_altitude(&self, altitude: Degrees, latitude: Degrees) -> Option<Degrees> {
        let cos_h = (altitude.sin() - latitude.sin() * self.declination.sin())
            / (latitude.cos() * self.declination.cos());
        if !(-1.0..=1.0).contains(&cos_h) {
            return None;
        }
        Some(acos(cos_h))
    }
}

impl EarthPosition {
    #[inline]
    pub const fn new(latitude: Degrees, longitude: Degrees) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl HorizontalPosition {
    #[inline]
    pub const fn new(azimuth: Degrees, altitude: Degrees) -> Self {
        Self { azimuth, altitude }
    }

    /// Inverse of [`EquatorialPosition::to_horizontal`].
    pub fn to_equatorial(&self, theta0: Degrees, observer: &EarthPosition) -> EquatorialPosition {
        let phi = observer.latitude;
        let west_long = -observer.longitude;
        let hour_angle = atan2(
            self.azimuth.sin(),
            self.azimuth.cos() * phi.sin() + self.altitude.tan() * phi.cos(),
        );
        let declination = asin(
            phi.sin() * self.altitude.sin()
                - phi.cos() * self.altitude.cos() * self.azimuth.cos(),
        );
        let right_ascension = theta0 - west_long - hour_angle;
        EquatorialPosition {
            right_ascension,
            declination,
        }
    }
}

/// Capability of yielding an equatorial position for an arbitrary instant
/// on the Dynamical Time scale.
///
/// Implementations are total: any instant handed in produces a position,
/// and out-of-range inputs are a caller error, never a runtime failure.
pub trait Positioner {
    fn position(&self, t: DynamicalTime) -> EquatorialPosition;
}

/// Capability of yielding an equatorial position at **0h TD** of a given
/// calendar date (a daily-sampled ephemeris).
///
/// Lift to the continuous [`Positioner`] capability with
/// [`InterpolatedPositioner`].
pub trait DailyPositioner {
    fn position(&self, date: CalendarDate) -> EquatorialPosition;
}

/// Adapter turning a [`DailyPositioner`] into a full [`Positioner`] via
/// three-point quadratic interpolation across consecutive days.
///
/// Right ascension and declination are interpolated independently with
/// `n = hours/24`.  The three daily samples must form a continuous
/// branch: a body whose right ascension wraps across 0°/360° inside the
/// sample window must be unwrapped by the daily provider first, or the
/// interpolated value jumps spuriously.
#[derive(Debug, Copy, Clone)]
pub struct InterpolatedPositioner<P: DailyPositioner> {
    daily: P,
}

impl<P: DailyPositioner> InterpolatedPositioner<P> {
    #[inline]
    pub const fn new(daily: P) -> Self {
        Self { daily }
    }
}

impl<P: DailyPositioner> Positioner for InterpolatedPositioner<P> {
    fn position(&self, t: DynamicalTime) -> EquatorialPosition {
        let p1 = self.daily.position(t.date().add_days(-1));
        let p2 = self.daily.position(t.date());
        let p3 = self.daily.position(t.date().add_days(1));
        let n = t.hours().value() / 24.0;
        EquatorialPosition {
            right_ascension: Degrees::new(interpolate3(
                p1.right_ascension.value(),
                p2.right_ascension.value(),
                p3.right_ascension.value(),
                n,
            )),
            declination: Degrees::new(interpolate3(
                p1.declination.value(),
                p2.declination.value(),
                p3.declination.value(),
                n,
            )),
        }
    }
}
