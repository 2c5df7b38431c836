// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Nutation and obliquity series (Meeus ch. 22).
//!
//! Truncated IAU 1980 theory: the eleven leading periodic terms, which is
//! ample for the sub-minute accuracy budget of the event solver.  All
//! functions are total, deterministic functions of [`DynamicalTime`].

use crate::instant::DynamicalTime;
use qtty::{Arcseconds, Degree, Degrees};

/// One row of the IAU 1980 series: multiples of the five fundamental
/// arguments, then sine (Δψ) and cosine (Δε) coefficients with their
/// secular rates, in units of 0.0001″.
struct NutationTerm {
    d: f64,
    m: f64,
    mp: f64,
    f: f64,
    om: f64,
    sin_c: f64,
    sin_t: f64,
    cos_c: f64,
    cos_t: f64,
}

#[rustfmt::skip]
const TERMS: [NutationTerm; 11] = [
    NutationTerm { d:  0.0, m:  0.0, mp: 0.0, f: 0.0, om: 1.0, sin_c: -171_996.0, sin_t: -174.2, cos_c: 92_025.0, cos_t:  8.9 },
    NutationTerm { d: -2.0, m:  0.0, mp: 0.0, f: 2.0, om: 2.0, sin_c:  -13_187.0, sin_t:   -1.6, cos_c:  5_736.0, cos_t: -3.1 },
    NutationTerm { d:  0.0, m:  0.0, mp: 0.0, f: 2.0, om: 2.0, sin_c:   -2_274.0, sin_t:   -0.2, cos_c:    977.0, cos_t: -0.5 },
    NutationTerm { d:  0.0, m:  0.0, mp: 0.0, f: 0.0, om: 2.0, sin_c:    2_062.0, sin_t:    0.2, cos_c:   -895.0, cos_t:  0.5 },
    NutationTerm { d:  0.0, m:  1.0, mp: 0.0, f: 0.0, om: 0.0, sin_c:    1_426.0, sin_t:   -3.4, cos_c:     54.0, cos_t: -0.1 },
    NutationTerm { d:  0.0, m:  0.0, mp: 1.0, f: 0.0, om: 0.0, sin_c:      712.0, sin_t:    0.1, cos_c:     -7.0, cos_t:  0.0 },
    NutationTerm { d: -2.0, m:  1.0, mp: 0.0, f: 2.0, om: 2.0, sin_c:     -517.0, sin_t:    1.2, cos_c:    224.0, cos_t: -0.6 },
    NutationTerm { d:  0.0, m:  0.0, mp: 0.0, f: 2.0, om: 1.0, sin_c:     -386.0, sin_t:   -0.4, cos_c:    200.0, cos_t:  0.0 },
    NutationTerm { d:  0.0, m:  0.0, mp: 1.0, f: 2.0, om: 2.0, sin_c:     -301.0, sin_t:    0.0, cos_c:    129.0, cos_t: -0.1 },
    NutationTerm { d: -2.0, m: -1.0, mp: 0.0, f: 2.0, om: 2.0, sin_c:      217.0, sin_t:   -0.5, cos_c:    -95.0, cos_t:  0.3 },
    NutationTerm { d: -2.0, m:  0.0, mp: 1.0, f: 0.0, om: 0.0, sin_c:     -158.0, sin_t:    0.0, cos_c:      0.0, cos_t:  0.0 },
];

/// The five fundamental arguments in degrees: mean elongation of the Moon
/// from the Sun, mean anomaly of the Sun, mean anomaly of the Moon, the
/// Moon's argument of latitude, and the longitude of the ascending node
/// of the Moon's mean orbit (Meeus p. 144).
fn fundamental_arguments(t: f64) -> (f64, f64, f64, f64, f64) {
    let d = 297.85036 + t * (445_267.111480 + t * (-0.0019142 + t / 189_474.0));
    let m = 357.52772 + t * (35_999.050340 - t * (0.0001603 + t / 300_000.0));
    let mp = 134.96298 + t * (477_198.867398 + t * (0.0086972 + t / 56_250.0));
    let f = 93.27191 + t * (483_202.017538 + t * (-0.0036825 + t / 327_270.0));
    let om = 125.04452 + t * (-1_934.136261 + t * (0.0020708 + t / 450_000.0));
    (d, m, mp, f, om)
}

/// Nutation in longitude Δψ.
pub fn nutation_in_longitude(t: DynamicalTime) -> Degrees {
    let tc = t.julian_centuries().value();
    let (d, m, mp, f, om) = fundamental_arguments(tc);
    let mut dpsi = 0.0;
    for term in &TERMS {
        let arg = d * term.d + m * term.m + mp * term.mp + f * term.f + om * term.om;
        dpsi += (term.sin_c + term.sin_t * tc) * Degrees::new(arg).sin();
    }
    Arcseconds::new(dpsi / 10_000.0).to::<Degree>()
}

/// Nutation in obliquity Δε.
pub fn nutation_in_obliquity(t: DynamicalTime) -> Degrees {
    let tc = t.julian_centuries().value();
    let (d, m, mp, f, om) = fundamental_arguments(tc);
    let mut deps = 0.0;
    for term in &TERMS {
        let arg = d * term.d + m * term.m + mp * term.mp + f * term.f + om * term.om;
        deps += (term.cos_c + term.cos_t * tc) * Degrees::new(arg).cos();
    }
    Arcseconds::new(deps / 10_000.0).to::<Degree>()
}

/// Mean obliquity of the ecliptic ε₀ (Meeus eq. 22.2).
pub fn mean_obliquity(t: DynamicalTime) -> Degrees {
    let tc = t.julian_centuries().value();
    let secs = 21.448 - tc * (46.8150 + tc * (0.00059 - tc * 0.001813));
    Degrees::new(23.0 + (26.0 + secs / 60.0) / 60.0)
}

/// True obliquity ε = ε₀ + Δε.
pub fn true_obliquity(t: DynamicalTime) -> Degrees {
    mean_obliquity(t) + nutation_in_obliquity(t)
}
