// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Time-scale marker types.
//!
//! Each zero-sized type identifies one of the two wall-clock time scales
//! used by the event solver:
//!
//! | Marker | Scale |
//! |--------|-------|
//! | [`Ut`] | Universal Time (Earth rotation) |
//! | [`Td`] | Dynamical Time (uniform ephemeris axis) |
//!
//! The two scales differ by the secular offset **ΔT = TD − UT** modeled in
//! [`crate::delta_t`]; conversion between them lives on
//! [`Moment`](crate::Moment) (`to_dynamical` / `to_universal`).

/// Marker trait for time scales.
///
/// A time scale only carries a human-readable label here; the scale
/// semantics (how instants convert between scales) are implemented on the
/// concrete [`Moment`](crate::Moment) instants, because the UT↔TD offset
/// depends on the calendar date, not on a constant epoch shift.
pub trait TimeScale: Copy + Clone + std::fmt::Debug + PartialEq + 'static {
    /// Display label used by [`Moment`](crate::Moment) formatting.
    const LABEL: &'static str;
}

/// Universal Time — the civil time scale tied to Earth's rotation.
///
/// Event times (risings, transits, settings) are reported on this scale.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Ut;

impl TimeScale for Ut {
    const LABEL: &'static str = "UT";
}

/// Dynamical Time — the uniform time axis of ephemeris formulas.
///
/// Positioners, nutation, and obliquity series are all evaluated on this
/// scale.  `TD = UT + ΔT`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Td;

impl TimeScale for Td {
    const LABEL: &'static str = "TD";
}
