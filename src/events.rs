// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Rising / transit / setting solver (Meeus ch. 15).
//!
//! Given a [`Positioner`], a reference altitude, an observer location,
//! and a calendar date, [`solve`] finds the Universal Time at which the
//! body rises through, transits at, or sets through that altitude.
//!
//! The search seeds a day-fraction estimate `m` from the apparent
//! sidereal time at 0h and the hour angle at the reference altitude,
//! then refines it with a Newton-style fixed point: each pass re-samples
//! the positioner at `UT(date, 24m)`, recomputes the local hour angle
//! and altitude, and applies the correction `Δm` until it drops below
//! the convergence tolerance (default 10⁻⁵ days ≈ 0.86 s).
//!
//! Two failure modes are surfaced as values, never as panics:
//! [`EventError::DoesNotOccur`] when the body never crosses the
//! reference altitude on that date (circumpolar or always below — a
//! normal outcome at high latitudes), and [`EventError::DidNotConverge`]
//! when the refinement exceeds its iteration cap or its denominator
//! degenerates (`sin H ≈ 0`, body skimming the altitude circle).

use crate::date::CalendarDate;
use crate::instant::{DynamicalTime, UniversalTime};
use crate::position::{acos, asin, EarthPosition, Positioner};
use crate::sidereal::apparent_sidereal_time;
use qtty::{Days, Degrees};
use thiserror::Error;

/// Sidereal day rate: degrees of sidereal rotation per solar day fraction.
const SIDEREAL_RATE: f64 = 360.985_647;

/// Kind of event to solve for.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Event {
    Rising,
    Setting,
    Transit,
}

/// Convergence knobs for [`solve`].
///
/// The defaults reproduce the reference behavior: tolerance of 10⁻⁵ days
/// (≈0.86 s) with a 20-iteration cap.  The cap exists because a
/// near-zero `sin H` denominator can make the sequence converge
/// arbitrarily slowly or diverge; exceeding it is reported as
/// [`EventError::DidNotConverge`] rather than looping forever.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SolverConfig {
    /// Stop once `|Δm|` falls below this day fraction.
    pub tolerance: Days,
    /// Give up after this many refinement passes.
    pub max_iterations: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            tolerance: Days::new(1e-5),
            max_iterations: 20,
        }
    }
}

/// Failure modes of the event solver.
#[derive(Debug, Error, Copy, Clone, PartialEq, Eq)]
pub enum EventError {
    /// The body never crosses the reference altitude on the queried date
    /// at this latitude (circumpolar or always below the horizon).
    /// Expected at polar latitudes; callers should branch on it.
    #[error("body never crosses the reference altitude on this date (circumpolar or always below)")]
    DoesNotOccur,

    /// The refinement loop exceeded its iteration cap, or its denominator
    /// degenerated.  The returned estimate would be stale, so none is.
    #[error("refinement did not converge within {limit} iterations")]
    DidNotConverge { limit: usize },
}

pub type EventResult<T> = Result<T, EventError>;

/// Universal Time of the requested event on `date`.
///
/// `h0` is the reference altitude: 0° for a geometric transit, a small
/// negative angle for risings/settings (−0.5667° accounts for standard
/// refraction; −0.8333° additionally for the solar semidiameter).  For
/// [`Event::Transit`] the altitude only participates in the feasibility
/// check, not in the refinement.
///
/// The result always carries the queried calendar date: the day-fraction
/// estimate may wrap past midnight during iteration, but the event is
/// reported on the date it was asked for, with the hour field possibly
/// outside `[0, 24)` by the wrapped amount.
pub fn solve<P: Positioner + ?Sized>(
    positioner: &P,
    h0: Degrees,
    observer: EarthPosition,
    date: CalendarDate,
    event: Event,
    config: &SolverConfig,
) -> EventResult<UniversalTime> {
    let seed = positioner.position(DynamicalTime::new(date, 0.0));
    let phi = observer.latitude;
    let west_long = -observer.longitude;

    let cos_h0 =
        (h0.sin() - phi.sin() * seed.declination.sin()) / (phi.cos() * seed.declination.cos());
    if !(-1.0..=1.0).contains(&cos_h0) {
        return Err(EventError::DoesNotOccur);
    }
    let h0_angle = acos(cos_h0);

    let theta0 = apparent_sidereal_time(UniversalTime::new(date, 0.0));

    // Transit estimate as a day fraction, shifted by ±H0 for rising/setting.
    let m0 = (seed.right_ascension + west_long - theta0).value() / 360.0;
    let mut m = match event {
        Event::Rising => m0 - h0_angle.value() / 360.0,
        Event::Setting => m0 + h0_angle.value() / 360.0,
        Event::Transit => m0,
    };
    if m < 0.0 {
        m += 1.0;
    }
    if m >= 1.0 {
        m -= 1.0;
    }

    for _ in 0..config.max_iterations {
        let theta = (theta0 + Degrees::new(SIDEREAL_RATE * m)).wrap_pos();
        let pos = positioner.position(UniversalTime::new(date, 24.0 * m).to_dynamical());
        let (alpha, delta) = (pos.right_ascension, pos.declination);
        let hour_angle = (theta - west_long - alpha).wrap_signed_lo();

        let dm = match event {
            Event::Transit => -hour_angle.value() / 360.0,
            Event::Rising | Event::Setting => {
                let altitude = asin(
                    phi.sin() * delta.sin() + phi.cos() * delta.cos() * hour_angle.cos(),
                );
                let denom = 360.0 * delta.cos() * phi.cos() * hour_angle.sin();
                if denom.abs() < 1e-12 {
                    return Err(EventError::DidNotConverge {
                        limit: config.max_iterations,
                    });
                }
                (altitude - h0).value() / denom
            }
        };
        m += dm;
        if dm.abs() < config.tolerance.value() {
            return Ok(UniversalTime::new(date, 24.0 * m));
        }
    }
    Err(EventError::DidNotConverge {
        limit: config.max_iterations,
    })
}

/// Rising through altitude `h0`, with the default solver configuration.
pub fn rising<P: Positioner + ?Sized>(
    positioner: &P,
    h0: Degrees,
    observer: EarthPosition,
    date: CalendarDate,
) -> EventResult<UniversalTime> {
    solve(positioner, h0, observer, date, Event::Rising, &SolverConfig::default())
}

/// Setting through altitude `h0`, with the default solver configuration.
pub fn setting<P: Positioner + ?Sized>(
    positioner: &P,
    h0: Degrees,
    observer: EarthPosition,
    date: CalendarDate,
) -> EventResult<UniversalTime> {
    solve(positioner, h0, observer, date, Event::Setting, &SolverConfig::default())
}

/// Meridian transit, with the default solver configuration.
pub fn transit<P: Positioner + ?Sized>(
    positioner: &P,
    observer: EarthPosition,
    date: CalendarDate,
) -> EventResult<UniversalTime> {
    solve(
        positioner,
        Degrees::new(0.0),
        observer,
        date,
        Event::Transit,
        &SolverConfig::default(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::{DailyPositioner, EquatorialPosition, InterpolatedPositioner};

    /// Daily ephemeris of Venus for Meeus example 15.a (1988 March 20,
    /// Boston).
    struct Venus;

    impl DailyPositioner for Venus {
        fn position(&self, d: CalendarDate) -> EquatorialPosition {
            let (ra, decl) = match (d.year, d.month, d.day) {
                (1988, 3, 19) => (40.68021, 18.04761),
                (1988, 3, 20) => (41.73129, 18.44092),
                (1988, 3, 21) => (42.78204, 18.82742),
                _ => panic!("no ephemeris sample for {d}"),
            };
            EquatorialPosition::new(Degrees::new(ra), Degrees::new(decl))
        }
    }

    fn boston() -> EarthPosition {
        EarthPosition::new(
            Degrees::from_dms(42, 20, 0.0),
            -Degrees::from_dms(71, 5, 0.0),
        )
    }

    const VENUS_DATE: CalendarDate = CalendarDate::new(1988, 3, 20);
    const HORIZON: Degrees = Degrees::new(-0.5667);

    fn assert_event_hours(got: UniversalTime, want_hours: f64) {
        assert_eq!(got.date(), VENUS_DATE, "event reported on wrong date: {got}");
        let err_minutes = (got.hours().value() - want_hours).abs() * 60.0;
        assert!(err_minutes < 1.0, "got {got}, want {want_hours} h");
    }

    #[test]
    fn venus_rising() {
        let venus = InterpolatedPositioner::new(Venus);
        let got = rising(&venus, HORIZON, boston(), VENUS_DATE).expect("rising");
        assert_event_hours(got, 12.0 + 25.0 / 60.0);
    }

    #[test]
    fn venus_setting() {
        let venus = InterpolatedPositioner::new(Venus);
        let got = setting(&venus, HORIZON, boston(), VENUS_DATE).expect("setting");
        assert_event_hours(got, 2.0 + 55.0 / 60.0);
    }

    #[test]
    fn venus_transit() {
        let venus = InterpolatedPositioner::new(Venus);
        let got = transit(&venus, boston(), VENUS_DATE).expect("transit");
        assert_event_hours(got, 19.0 + 41.0 / 60.0);
    }

    #[test]
    fn transit_converges_on_meridian() {
        // At convergence the local hour angle must be ≈ 0.
        let venus = InterpolatedPositioner::new(Venus);
        let got = transit(&venus, boston(), VENUS_DATE).expect("transit");
        let theta = apparent_sidereal_time(got);
        let pos = venus.position(got.to_dynamical());
        let west_long = -boston().longitude;
        let hour_angle = (theta - west_long - pos.right_ascension).wrap_signed_lo();
        assert!(
            hour_angle.abs() < Degrees::new(0.01),
            "H = {hour_angle} at convergence"
        );
    }

    #[test]
    fn circumpolar_body_does_not_occur() {
        // δ ≈ +18° never dips below the horizon at 89°N: no rising, no
        // setting, and the feasibility check fires before any refinement.
        let venus = InterpolatedPositioner::new(Venus);
        let polar = EarthPosition::new(Degrees::new(89.0), Degrees::new(0.0));
        assert_eq!(
            rising(&venus, HORIZON, polar, VENUS_DATE),
            Err(EventError::DoesNotOccur)
        );
        assert_eq!(
            setting(&venus, HORIZON, polar, VENUS_DATE),
            Err(EventError::DoesNotOccur)
        );
    }

    #[test]
    fn unreachable_altitude_does_not_occur() {
        // Asking for a rising through +89° altitude from Boston.
        let venus = InterpolatedPositioner::new(Venus);
        assert_eq!(
            rising(&venus, Degrees::new(89.0), boston(), VENUS_DATE),
            Err(EventError::DoesNotOccur)
        );
    }

    #[test]
    fn tight_tolerance_still_converges() {
        let venus = InterpolatedPositioner::new(Venus);
        let config = SolverConfig {
            tolerance: Days::new(1e-8),
            max_iterations: 30,
        };
        let got = solve(&venus, HORIZON, boston(), VENUS_DATE, Event::Rising, &config)
            .expect("rising");
        assert_event_hours(got, 12.0 + 25.0 / 60.0);
    }

    #[test]
    fn zero_iteration_budget_reports_non_convergence() {
        let venus = InterpolatedPositioner::new(Venus);
        let config = SolverConfig {
            tolerance: Days::new(1e-5),
            max_iterations: 0,
        };
        assert_eq!(
            solve(&venus, HORIZON, boston(), VENUS_DATE, Event::Transit, &config),
            Err(EventError::DidNotConverge { limit: 0 })
        );
    }
}
