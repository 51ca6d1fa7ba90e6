// Copyright 2025 the Glissade Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::ops::Range;

use kurbo::Point;

/// Axis a track runs along, in device coordinates.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Values increase rightward along device x.
    #[default]
    Horizontal,
    /// Values increase upward along device y. Device y grows downward, so
    /// the value axis is inverted: `min` sits at the span's end.
    Vertical,
}

/// Maps slider values to positions along a track segment in device space.
///
/// A `Track` pairs a view span (the track's extent in device units, typically
/// pixels) with value bounds (`min..max`) and an [`Orientation`]. It converts
/// in both directions without clamping; candidate values produced from
/// pointer input are expected to go through a correcting model, which owns
/// clamping.
#[derive(Clone, Debug, PartialEq)]
pub struct Track {
    view_span: Range<f64>,
    bounds: Range<f64>,
    orientation: Orientation,
}

impl Track {
    /// Creates a track over the given view span and value bounds.
    ///
    /// - `view_span` is expressed in view/device units (typically pixels).
    /// - `bounds` is the slider's value range, `min..max`.
    #[must_use]
    pub fn new(view_span: Range<f64>, bounds: Range<f64>, orientation: Orientation) -> Self {
        Self {
            view_span,
            bounds,
            orientation,
        }
    }

    /// Returns the current view span in device coordinates.
    #[must_use]
    pub fn view_span(&self) -> Range<f64> {
        self.view_span.clone()
    }

    /// Sets the view span in device coordinates.
    pub fn set_view_span(&mut self, span: Range<f64>) {
        self.view_span = span;
    }

    /// Returns the current value bounds.
    #[must_use]
    pub fn bounds(&self) -> Range<f64> {
        self.bounds.clone()
    }

    /// Sets the value bounds.
    pub fn set_bounds(&mut self, bounds: Range<f64>) {
        self.bounds = bounds;
    }

    /// Returns the track's orientation.
    #[must_use]
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Sets the track's orientation.
    pub fn set_orientation(&mut self, orientation: Orientation) {
        self.orientation = orientation;
    }

    /// Converts a value into a device coordinate along the track axis.
    ///
    /// Degenerate spans (empty view span or value bounds) map every value to
    /// the view span's start rather than dividing by zero.
    #[must_use]
    pub fn value_to_view(&self, value: f64) -> f64 {
        let view_len = self.view_len();
        let bounds_len = self.bounds_len();
        if view_len <= 0.0 || bounds_len <= 0.0 {
            return self.view_span.start;
        }

        let fraction = (value - self.bounds.start) / bounds_len;
        match self.orientation {
            Orientation::Horizontal => self.view_span.start + fraction * view_len,
            Orientation::Vertical => self.view_span.end - fraction * view_len,
        }
    }

    /// Converts a device coordinate along the track axis into a value.
    ///
    /// The result is not clamped; coordinates outside the view span map to
    /// values outside the bounds. Degenerate spans yield the lower bound.
    #[must_use]
    pub fn view_to_value(&self, coord: f64) -> f64 {
        let view_len = self.view_len();
        let bounds_len = self.bounds_len();
        if view_len <= 0.0 || bounds_len <= 0.0 {
            return self.bounds.start;
        }

        let fraction = match self.orientation {
            Orientation::Horizontal => (coord - self.view_span.start) / view_len,
            Orientation::Vertical => (self.view_span.end - coord) / view_len,
        };
        self.bounds.start + fraction * bounds_len
    }

    /// Extracts the track-axis coordinate from a pointer position.
    #[must_use]
    pub fn coord_of(&self, point: Point) -> f64 {
        match self.orientation {
            Orientation::Horizontal => point.x,
            Orientation::Vertical => point.y,
        }
    }

    /// Converts a pointer position into a value.
    ///
    /// Shorthand for [`Track::view_to_value`] over [`Track::coord_of`];
    /// useful for track and scale clicks.
    #[must_use]
    pub fn value_at(&self, point: Point) -> f64 {
        self.view_to_value(self.coord_of(point))
    }

    /// Returns the value-units-per-device-unit ratio.
    ///
    /// Zero for degenerate spans.
    #[must_use]
    pub fn units_per_pixel(&self) -> f64 {
        let view_len = self.view_len();
        if view_len <= 0.0 {
            return 0.0;
        }
        self.bounds_len() / view_len
    }

    /// Converts a device-space movement delta into a value delta.
    ///
    /// The sign is corrected for orientation, so dragging toward larger
    /// values always yields a positive delta.
    #[must_use]
    pub fn value_delta(&self, view_delta: f64) -> f64 {
        let delta = view_delta * self.units_per_pixel();
        match self.orientation {
            Orientation::Horizontal => delta,
            Orientation::Vertical => -delta,
        }
    }

    fn view_len(&self) -> f64 {
        self.view_span.end - self.view_span.start
    }

    fn bounds_len(&self) -> f64 {
        self.bounds.end - self.bounds.start
    }
}

/// Returns the index of the handle closest to `value`.
///
/// Equidistant candidates resolve to the lower index. Returns `None` when
/// `currents` is empty. This is how a click on the track or scale picks which
/// handle to move before requesting a model update.
#[must_use]
pub fn nearest_index(currents: &[f64], value: f64) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (index, &current) in currents.iter().enumerate() {
        let distance = if current > value {
            current - value
        } else {
            value - current
        };
        match best {
            Some((_, nearest)) if distance >= nearest => {}
            _ => best = Some((index, distance)),
        }
    }
    best.map(|(index, _)| index)
}
