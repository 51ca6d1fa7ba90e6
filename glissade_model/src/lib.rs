// Copyright 2025 the Glissade Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=glissade_model --heading-base-level=0

//! Glissade Model: validated range props and position correction for sliders.
//!
//! This crate is the headless heart of a range slider. [`SliderModel`] owns:
//!
//! - A validated [`SliderProps`] configuration: `min`/`max` bounds, a snap
//!   `step`, and a `margin` (the minimum separation between adjacent
//!   handles).
//! - The **currents**: the ordered handle positions. Index order is the
//!   adjacency order; the model trusts the caller's ordering and never
//!   sorts.
//! - A single-slot listener notified after every corrected update.
//!
//! The model knows nothing about pixels, pointers, or rendering. Hosts
//! convert user input into candidate positions (see `glissade_track`), feed
//! them to [`SliderModel::request_update`], and redraw from the listener
//! notification.
//!
//! ## Correction pipeline
//!
//! [`SliderModel::request_update`] runs each *changed* position through
//! three corrections in strict order:
//!
//! 1. **Step**: snap to the nearest multiple of `step` (a step of `0.0`
//!    disables snapping).
//! 2. **Margin**: clamp against the stored neighbors at the adjacent
//!    indices; the previous neighbor takes priority when both would clamp.
//! 3. **Ends**: clamp into `[min, max]`. This runs last and always wins,
//!    so a corrected set is in bounds even when the margin cannot be
//!    honored near the ends.
//!
//! Positions equal to their stored value skip the pipeline entirely, so
//! values the user did not move are never re-snapped.
//!
//! ## Minimal example
//!
//! ```rust
//! use glissade_model::{SliderModel, SliderProps, Update};
//!
//! let mut model = SliderModel::new();
//! model.set_props(SliderProps {
//!     min: 0.0,
//!     max: 100.0,
//!     step: 5.0,
//!     margin: 10.0,
//! })?;
//! model.set_currents([20.0, 60.0]);
//!
//! // A drag lands index 1 on 47.3: snapped to 45, margin and bounds hold.
//! model.request_update([20.0, 47.3]);
//! assert_eq!(model.currents(), &[20.0, 45.0]);
//!
//! // Listeners observe the corrected set.
//! model.set_listener(|update| {
//!     let Update::CurrentsUpdated(currents) = update;
//!     println!("currents now {currents:?}");
//! });
//! model.request_update([20.0, 52.0]);
//! # Ok::<(), glissade_model::PropsError>(())
//! ```
//!
//! ## Validation
//!
//! [`SliderModel::set_props`] rejects inconsistent configurations with a
//! [`PropsError`] before any state changes: `min` must be non-negative,
//! `max` positive and above `min`, and `step`/`margin` non-negative and no
//! larger than `max - min`.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

#[cfg(test)]
extern crate std;

mod model;
mod props;

pub use model::{Listener, SliderModel, Update};
pub use props::{PropsError, SliderProps};
