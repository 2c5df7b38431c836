// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! # ΔT (Delta T) — UT↔TD Correction Layer
//!
//! This module implements the piecewise polynomial model for **ΔT = TD − UT**
//! from Chapter 10 of *Jean Meeus — Astronomical Algorithms (2nd ed. 1998)*.
//!
//! ## Integration with Time Scales
//!
//! The correction is applied by the [`Moment`](crate::Moment) conversions:
//! [`UniversalTime::to_dynamical`](crate::UniversalTime::to_dynamical) adds
//! ΔT(date), [`DynamicalTime::to_universal`](crate::DynamicalTime::to_universal)
//! subtracts it, both rolling the calendar date when the shift crosses
//! midnight.  External callers rarely need this module directly.
//!
//! ## Valid Time Range
//!
//! The model covers the historically fitted span **1900–1997** (a degree-9
//! polynomial in Julian centuries since 1900 Jan 0) and the years **2000
//! onward** (a quadratic extrapolation with a cubic-tail correction below
//! 2100).  Requesting ΔT for any other year is a programming error — there
//! is no historical model — and panics rather than returning a silently
//! wrong value.

use crate::date::CalendarDate;
use chrono::NaiveDate;
use qtty::Seconds;

/// Degree-9 fit to the 1900–1997 span, highest-order coefficient first,
/// in seconds per power of Julian centuries since 1900 Jan 0.
#[rustfmt::skip]
const FITTED_COEFFS: [f64; 10] = [
     58_353.42, -232_424.66,  372_919.88, -303_191.19, 124_906.15,
    -18_756.33,   -2_637.80,      815.20,      87.24,      -2.44,
];

/// **Years 1900–1997**
/// Polynomial in t = (days since 1900 Jan 0)/36525, Horner evaluated.
#[inline]
fn delta_t_fitted(date: CalendarDate) -> Seconds {
    // "1900 January 0" is 1899-12-31 in civil reckoning.
    let epoch = NaiveDate::from_ymd_opt(1899, 12, 31).expect("fixed epoch");
    let days = (date.to_naive_date() - epoch).num_days() as f64;
    let t = days / 36_525.0;
    Seconds::new(FITTED_COEFFS.iter().fold(0.0, |acc, &c| acc * t + c))
}

/// **Years ≥ 2000**
/// Quadratic extrapolation, with a cubic-tail correction below 2100.
#[inline]
fn delta_t_extrapolated(year: i32) -> Seconds {
    let t = (year - 2000) as f64 / 100.0;
    let mut dt = 102.0 + 102.0 * t + 25.3 * t * t;
    if year < 2100 {
        dt += 0.37 * (year - 2100) as f64;
    }
    Seconds::new(dt)
}

/// Returns **ΔT = TD − UT** in seconds for the given calendar date.
///
/// # Panics
///
/// Panics for years outside the supported branches (before 1900, or
/// 1998–1999): the model has no data there and a silently wrong offset
/// would corrupt every downstream event time.
pub fn delta_t(date: CalendarDate) -> Seconds {
    match date.year {
        1900..=1997 => delta_t_fitted(date),
        y if y >= 2000 => delta_t_extrapolated(y),
        y => panic!("delta_t: no ΔT model for year {y}"),
    }
}
