// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Low-accuracy apparent solar position (Meeus ch. 25).
//!
//! Accurate to ≈0.01°, which keeps sun-based event times (sunrise,
//! sunset, twilight) well inside the solver's one-minute budget.

use crate::instant::DynamicalTime;
use crate::nutation::true_obliquity;
use crate::position::{asin, atan2, EquatorialPosition, Positioner};
use qtty::Degrees;

/// Apparent equatorial position of the Sun at `t`.
pub fn sun_position(t: DynamicalTime) -> EquatorialPosition {
    let tc = t.julian_centuries().value();

    // Geometric mean longitude and mean anomaly.
    let l0 = Degrees::new(280.46646 + tc * (36_000.76983 + tc * 0.000_3032)).wrap_pos();
    let m = Degrees::new(357.52911 + tc * (35_999.05029 - tc * 0.000_1537)).wrap_pos();

    // Equation of the center.
    let c = Degrees::new(
        (1.914_602 - tc * (0.004_817 + tc * 0.000_014)) * m.sin()
            + (0.019_993 - tc * 0.000_101) * (m * 2.0).sin()
            + 0.000_289 * (m * 3.0).sin(),
    );

    // Apparent longitude, corrected for nutation and aberration.
    let true_longitude = l0 + c;
    let omega = Degrees::new(125.04 - 1_934.136 * tc);
    let lambda = true_longitude - Degrees::new(0.005_69 + 0.004_78 * omega.sin());

    let eps = true_obliquity(t);
    EquatorialPosition {
        right_ascension: atan2(eps.cos() * lambda.sin(), lambda.cos()),
        declination: asin(eps.sin() * lambda.sin()),
    }
}

/// The Sun as a continuously sampled [`Positioner`].
///
/// The low-order series is cheap enough to evaluate directly at every
/// refinement step, so no daily-sampling/interpolation detour is needed.
#[derive(Debug, Copy, Clone, Default)]
pub struct Sun;

impl Positioner for Sun {
    fn position(&self, t: DynamicalTime) -> EquatorialPosition {
        sun_position(t)
    }
}
