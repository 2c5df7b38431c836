// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Rising, transit, and setting times of celestial bodies.
//!
//! This crate computes apparent positions and sub-minute-accurate event
//! times (risings, meridian transits, settings) for an observer at a
//! given location, using the classical geometric formulas from *Jean
//! Meeus — Astronomical Algorithms (2nd ed. 1998)*.  It targets
//! planetarium software, prayer-time calculators, and similar scheduling
//! tools — ephemeris-grade, not JPL-grade.
//!
//! # Core types
//!
//! - [`Moment<S>`] — wall-clock instant (date + fractional hours)
//!   parameterised by a [`TimeScale`] marker.
//! - [`UniversalTime`] / [`DynamicalTime`] — aliases for `Moment<Ut>` and
//!   `Moment<Td>`; conversion between them applies the modeled ΔT offset.
//! - [`CalendarDate`] — (year, month, day) with the 1582-10-15
//!   Julian/Gregorian cutover honored by [`julian_day`].
//! - [`Positioner`] / [`DailyPositioner`] — the capability of producing an
//!   [`EquatorialPosition`] for an instant (resp. for 0h TD of a date),
//!   bridged by [`InterpolatedPositioner`].
//! - [`solve`], [`rising`], [`setting`], [`transit`] — the iterative
//!   event solver.
//!
//! All types are `Copy` value types and all functions are pure: solver
//! calls for different (date, body, observer) tuples are independent and
//! trivially parallelizable by the caller.
//!
//! # Quick example
//!
//! Sunrise in Cambridge, MA on 2012-12-04:
//!
//! ```rust
//! use qtty::{Arcminutes, Degree, Degrees};
//! use riseset::{rising, CalendarDate, EarthPosition, Sun};
//!
//! let observer = EarthPosition::new(Degrees::new(42.36462), Degrees::new(-71.11518));
//! let date = CalendarDate::new(2012, 12, 4);
//! let horizon = Arcminutes::new(-50.0).to::<Degree>();
//! let sunrise = rising(&Sun, horizon, observer, date).unwrap();
//! println!("sunrise at {sunrise}");
//! ```
//!
//! # Angles and units
//!
//! Angular and time quantities are [`qtty`] types ([`qtty::Degrees`],
//! [`qtty::Hours`], …).  Normalization is always an explicit operation
//! (`wrap_pos()`, `wrap_signed_lo()`), never implicit: raw angle
//! differences such as hour angles stay signed and unwrapped until a
//! formula asks otherwise.
//!
//! # Time scales and ΔT
//!
//! Event times are reported in **Universal Time**; positioners and the
//! nutation/obliquity series are evaluated on the **Dynamical Time**
//! axis.  The secular offset ΔT = TD − UT is the piecewise model behind
//! [`delta_t()`], applied by [`UniversalTime::to_dynamical`] and
//! [`DynamicalTime::to_universal`].

mod date;
mod delta_t;
mod events;
mod instant;
mod interpolate;
mod nutation;
mod position;
mod scales;
mod sidereal;
mod sun;

// ── Re-exports ────────────────────────────────────────────────────────────

pub use date::{julian_day, CalendarDate, GREGORIAN_START, J2000_JD, JULIAN_CENTURY};
pub use delta_t::delta_t;
pub use events::{
    rising, setting, solve, transit, Event, EventError, EventResult, SolverConfig,
};
pub use instant::{DynamicalTime, Moment, TimeOfDay, UniversalTime};
pub use interpolate::interpolate3;
pub use nutation::{
    mean_obliquity, nutation_in_longitude, nutation_in_obliquity, true_obliquity,
};
pub use position::{
    DailyPositioner, EarthPosition, EquatorialPosition, HorizontalPosition,
    InterpolatedPositioner, Positioner,
};
pub use scales::{Td, TimeScale, Ut};
pub use sidereal::{apparent_sidereal_time, mean_sidereal_time};
pub use sun::{sun_position, Sun};
