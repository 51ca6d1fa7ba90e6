// Copyright 2025 the Glissade Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag state helper: track which handle is held and fold pointer movement
//! into coordinate deltas.
//!
//! ## Usage
//!
//! 1) Start a drag by calling [`HandleDrag::start`] with the grabbed handle's
//!    index and the pointer's track-axis coordinate.
//! 2) On each move event, call [`HandleDrag::update`] to get the movement
//!    delta since the last update.
//! 3) Optionally call [`HandleDrag::total_offset`] to get the cumulative
//!    offset from the start coordinate.
//! 4) End the drag with [`HandleDrag::end`] to reset state.
//!
//! Deltas are in device units along the track axis; convert them to value
//! deltas with [`Track::value_delta`](crate::Track::value_delta) before
//! requesting a model update.
//!
//! ## Minimal example
//!
//! ```
//! use glissade_track::HandleDrag;
//!
//! let mut drag = HandleDrag::default();
//!
//! // Grab handle 1 at coordinate 140.
//! drag.start(1, 140.0);
//! assert!(drag.is_dragging());
//! assert_eq!(drag.active_index(), Some(1));
//!
//! // Pointer moves to 155 - delta is 15.
//! let delta = drag.update(155.0).unwrap();
//! assert_eq!(delta, 15.0);
//!
//! // Total offset from the start coordinate is also 15.
//! let total = drag.total_offset(155.0).unwrap();
//! assert_eq!(total, 15.0);
//! ```

/// Tracks drag state for one handle across move events.
#[derive(Debug, Clone, Default, Copy, PartialEq)]
pub struct HandleDrag {
    /// Index of the handle being dragged.
    pub index: Option<usize>,
    /// Track-axis coordinate where the drag started.
    pub start_coord: Option<f64>,
    /// Last recorded track-axis coordinate during the drag.
    pub last_coord: Option<f64>,
}

impl HandleDrag {
    /// Start tracking a drag of the handle at `index` from the given coordinate.
    pub fn start(&mut self, index: usize, coord: f64) {
        self.index = Some(index);
        self.start_coord = Some(coord);
        self.last_coord = Some(coord);
    }

    /// Update the drag with a new coordinate, returning the movement delta
    /// since the last update.
    pub fn update(&mut self, coord: f64) -> Option<f64> {
        if self.index.is_some() {
            if let Some(last_coord) = self.last_coord {
                let delta = coord - last_coord;
                self.last_coord = Some(coord);
                Some(delta)
            } else {
                self.last_coord = Some(coord);
                None
            }
        } else {
            None
        }
    }

    /// Get total offset from the drag start coordinate.
    #[must_use]
    pub fn total_offset(&self, current_coord: f64) -> Option<f64> {
        if self.index.is_some() {
            self.start_coord.map(|start| current_coord - start)
        } else {
            None
        }
    }

    /// Returns the index of the handle being dragged, if any.
    #[must_use]
    pub fn active_index(&self) -> Option<usize> {
        self.index
    }

    /// End the current drag and reset state.
    pub fn end(&mut self) {
        self.index = None;
        self.start_coord = None;
        self.last_coord = None;
    }

    /// Returns `true` while a drag is active.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.index.is_some()
    }
}
