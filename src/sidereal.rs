// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Sidereal time at Greenwich (Meeus ch. 12).
//!
//! Mean sidereal time is a polynomial in Julian centuries since J2000.0;
//! apparent sidereal time adds the equation of the equinoxes
//! (Δψ · cos ε) from the nutation series.

use crate::instant::UniversalTime;
use crate::nutation::{nutation_in_longitude, true_obliquity};
use qtty::Degrees;

/// Mean sidereal time at Greenwich, as an angle in `[0°, 360°)`.
///
/// Meeus eq. 12.4, evaluated from the Julian Day of `t` and of `t`
/// truncated to 0h (the century term uses the 0h epoch).
pub fn mean_sidereal_time(t: UniversalTime) -> Degrees {
    let t0 = UniversalTime::new(t.date(), 0.0);
    let tc = t0.julian_centuries().value();
    let jd = t.julian_day().value();
    Degrees::new(
        280.460_618_37
            + 360.985_647_366_29 * (jd - 2_451_545.0)
            + tc * tc * (0.000_387_933 - tc / 38_710_000.0),
    )
    .wrap_pos()
}

/// Apparent sidereal time at Greenwich, as an angle in `[0°, 360°)`.
///
/// Mean sidereal time plus `Δψ · cos ε` evaluated at the Dynamical-Time
/// equivalent of `t`.  Mixing a UT-based mean sidereal time with TD-based
/// nutation terms is intentional (Meeus does the same): the error it
/// introduces is far below the accuracy budget of the event solver.
pub fn apparent_sidereal_time(t: UniversalTime) -> Degrees {
    let td = t.to_dynamical();
    let correction = Degrees::new(nutation_in_longitude(td).value() * true_obliquity(td).cos());
    (mean_sidereal_time(t) + correction).wrap_pos()
}
