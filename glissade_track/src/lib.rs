// Copyright 2025 the Glissade Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=glissade_track --heading-base-level=0

//! Glissade Track: headless track geometry and drag state for sliders.
//!
//! This crate turns pointer input into candidate slider values. It provides:
//!
//! - [`Track`]: a mapping between a track segment in device coordinates and
//!   the slider's value bounds, aware of [`Orientation`] (vertical tracks
//!   read bottom-up).
//! - [`HandleDrag`]: per-gesture bookkeeping — which handle is held, where
//!   the drag started, and the movement delta per move event.
//! - [`nearest_index`]: which handle a click on the track or scale should
//!   move.
//!
//! The crate performs no clamping and no snapping: conversions are exact and
//! unclamped, and the resulting candidate values are expected to be fed to a
//! correcting model (`glissade_model`), which owns step, margin, and bounds
//! rules. It also owns no event loop; hosts call in from their own pointer
//! handlers.
//!
//! ## Drag flow
//!
//! ```rust
//! use glissade_track::{HandleDrag, Orientation, Track, nearest_index};
//! use kurbo::Point;
//!
//! let track = Track::new(0.0..400.0, 0.0..100.0, Orientation::Horizontal);
//! let currents = [20.0, 60.0];
//! let mut drag = HandleDrag::default();
//!
//! // Pointer down at x = 250: value 62.5, handle 1 is closest.
//! let down = Point::new(250.0, 12.0);
//! let grabbed = nearest_index(&currents, track.value_at(down)).unwrap();
//! drag.start(grabbed, track.coord_of(down));
//!
//! // Pointer moves 30 px right: +7.5 value units for handle 1.
//! let moved = Point::new(280.0, 14.0);
//! let view_delta = drag.update(track.coord_of(moved)).unwrap();
//! let candidate = currents[grabbed] + track.value_delta(view_delta);
//! assert_eq!(candidate, 67.5);
//!
//! // The host now calls `model.request_update([20.0, candidate])` and
//! // redraws from the model's notification.
//! drag.end();
//! ```
//!
//! ## Click flow
//!
//! A click on the track maps straight to a value; [`nearest_index`] decides
//! which handle moves there:
//!
//! ```rust
//! use glissade_track::{Orientation, Track, nearest_index};
//! use kurbo::Point;
//!
//! let track = Track::new(0.0..400.0, 0.0..100.0, Orientation::Horizontal);
//! let currents = [20.0, 60.0];
//!
//! let clicked = track.value_at(Point::new(100.0, 0.0));
//! assert_eq!(clicked, 25.0);
//! assert_eq!(nearest_index(&currents, clicked), Some(0));
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod drag;
mod track;

pub use drag::HandleDrag;
pub use track::{Orientation, Track, nearest_index};
