// Copyright 2025 the Glissade Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=glissade_scale --heading-base-level=0

//! Glissade Scale: headless tick-unit and fill-interval primitives.
//!
//! A slider's scale is the strip of tick marks ("units") alongside the
//! track, optionally showing values, plus the filled portion of the track
//! connecting handles to each other or to the ends. This crate computes
//! both without knowing anything about rendering:
//!
//! - [`ScaleSpec::units`] generates the tick values between the bounds at
//!   `step` spacing, with the end of the range always included, and decides
//!   which units carry a value label.
//! - [`ScaleSpec::fraction`] places a value as a `0..1` fraction of the
//!   bounds, for hosts that position units by percentage.
//! - [`fill_intervals`] returns the value-space intervals a connector bar
//!   should cover for a given [`FillKind`] and set of handle positions.
//!
//! Hosts render each [`Unit`] at `fraction(unit.value)` along the track and
//! draw fills over the returned intervals, converted to device coordinates
//! by `glissade_track`.
//!
//! ## Minimal example
//!
//! ```rust
//! use glissade_scale::{FillKind, ScaleSpec, fill_intervals};
//!
//! let spec = ScaleSpec {
//!     bounds: 0.0..100.0,
//!     step: 25.0,
//!     with_value: true,
//!     show_value_each: 2,
//! };
//!
//! // Ticks at 0, 25, 50, 75, 100; labels on every other one plus the last.
//! let units = spec.units();
//! assert_eq!(units.len(), 5);
//! assert!(units[0].labeled);
//! assert!(!units[1].labeled);
//! assert!(units[4].labeled);
//!
//! // A two-handle slider fills the stretch between its handles.
//! let fills = fill_intervals(FillKind::InnerRange, &[20.0, 60.0], 0.0..100.0);
//! assert_eq!(fills, [20.0..60.0]);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use alloc::vec;
use alloc::vec::Vec;
use core::ops::Range;

/// Describes a scale strip: value bounds, tick spacing, and label cadence.
#[derive(Clone, Debug, PartialEq)]
pub struct ScaleSpec {
    /// Value bounds of the slider, `min..max`.
    pub bounds: Range<f64>,
    /// Spacing between tick units. Zero or negative yields endpoint ticks
    /// only.
    pub step: f64,
    /// Whether any unit carries a value label.
    pub with_value: bool,
    /// Label every n-th unit, counted from the first. `0` is treated as
    /// every unit. The last unit is always labeled so the range's end is
    /// never silent.
    pub show_value_each: usize,
}

/// A single tick mark on the scale.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Unit {
    /// The value this unit marks.
    pub value: f64,
    /// Whether the unit shows its value.
    pub labeled: bool,
}

impl ScaleSpec {
    /// Generates the scale's units in ascending value order.
    ///
    /// Units sit at `min, min + step, …`; the upper bound is appended when
    /// the last step lands short of it, so the range's end always has a
    /// tick. Empty or inverted bounds yield no units.
    #[must_use]
    pub fn units(&self) -> Vec<Unit> {
        let len = self.bounds.end - self.bounds.start;
        if len <= 0.0 {
            return Vec::new();
        }

        let mut values: Vec<f64> = Vec::new();
        if self.step <= 0.0 {
            values.push(self.bounds.start);
            values.push(self.bounds.end);
        } else {
            let count = libm::floor(len / self.step);
            #[expect(
                clippy::cast_possible_truncation,
                reason = "non-negative whole-step count; bounds and step are finite"
            )]
            let count = count as usize;
            for i in 0..=count {
                values.push(self.bounds.start + i as f64 * self.step);
            }
            // Close the strip at the upper bound unless the last step
            // already landed there (modulo float fuzz).
            let last = values[values.len() - 1];
            if self.bounds.end - last > self.step * 1e-6 {
                values.push(self.bounds.end);
            }
        }

        let each = self.show_value_each.max(1);
        let last = values.len() - 1;
        values
            .iter()
            .enumerate()
            .map(|(i, &value)| Unit {
                value,
                labeled: self.with_value && (i % each == 0 || i == last),
            })
            .collect()
    }

    /// Places a value as a fraction of the bounds, `0.0` at `min` and `1.0`
    /// at `max`.
    ///
    /// The result is not clamped; values outside the bounds map outside
    /// `0..1`. Empty or inverted bounds yield `0.0`.
    #[must_use]
    pub fn fraction(&self, value: f64) -> f64 {
        let len = self.bounds.end - self.bounds.start;
        if len <= 0.0 {
            return 0.0;
        }
        (value - self.bounds.start) / len
    }
}

/// Which stretch of the track the connector bar fills.
///
/// Mirrors the scale types a host can render: a bare handle, a fill from
/// either end, the stretch between a pair, or everything outside it.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum FillKind {
    /// No connector; handles stand alone.
    #[default]
    Single,
    /// Fill from the lower bound to the first handle.
    FromStart,
    /// Fill from the last handle to the upper bound.
    ToEnd,
    /// Fill between the first and last handle.
    InnerRange,
    /// Fill outside the handles: both end stretches.
    OuterRange,
}

/// Returns the value-space intervals the connector bar covers.
///
/// `currents` is the slider's handle positions in adjacency order. An empty
/// set yields no intervals for every kind; [`FillKind::InnerRange`] needs at
/// least two handles.
#[must_use]
pub fn fill_intervals(kind: FillKind, currents: &[f64], bounds: Range<f64>) -> Vec<Range<f64>> {
    let (Some(&first), Some(&last)) = (currents.first(), currents.last()) else {
        return Vec::new();
    };

    match kind {
        FillKind::Single => Vec::new(),
        FillKind::FromStart => vec![bounds.start..first],
        FillKind::ToEnd => vec![last..bounds.end],
        FillKind::InnerRange => {
            if currents.len() < 2 {
                Vec::new()
            } else {
                vec![first..last]
            }
        }
        FillKind::OuterRange => vec![bounds.start..first, last..bounds.end],
    }
}
