// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Three-point quadratic interpolation (Meeus ch. 3).
//!
//! The standard technique for slowly varying ephemeris quantities sampled
//! at daily intervals.  Exact for samples lying on a quadratic curve.

/// Interpolate between three equally spaced samples.
///
/// `n` is the fractional abscissa measured from the *middle* sample in
/// units of the sample spacing, so `n ∈ [-1, 1]`.  With `a = y2 − y1`,
/// `b = y3 − y2`, `c = b − a`, the result is `y2 + n(a + b + nc)/2`
/// (Meeus eq. 3.3).
///
/// The samples must form a continuous branch: interpolating across an
/// angular discontinuity (e.g. right ascension wrapping at 0°/360°)
/// produces a large spurious jump.  Unwrapping is the caller's job.
///
/// # Panics
///
/// Panics if `n` lies outside `[-1, 1]` — the middle sample no longer
/// brackets the requested abscissa, so the caller's assumptions are
/// already broken.
pub fn interpolate3(y1: f64, y2: f64, y3: f64, n: f64) -> f64 {
    assert!(
        (-1.0..=1.0).contains(&n),
        "interpolate3: fraction {n} outside [-1, 1]"
    );
    let a = y2 - y1;
    let b = y3 - y2;
    let c = b - a;
    y2 + n * (a + b + n * c) / 2.0
}
