// Copyright 2025 the Glissade Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The slider model: stored currents, the correction pipeline, and the
//! update listener.

use alloc::boxed::Box;
use core::fmt;

use smallvec::SmallVec;

use crate::props::{PropsError, SliderProps};

/// Inline capacity covers the common single-handle and range (two-handle)
/// sliders without a heap allocation.
type Currents = SmallVec<[f64; 2]>;

/// Notification delivered to the model's listener.
///
/// The payload borrows from the model, so listeners that need to keep the
/// values around must copy them out.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Update<'a> {
    /// The stored currents were replaced by the given corrected set.
    CurrentsUpdated(&'a [f64]),
}

/// Single-slot callback invoked after every [`SliderModel::request_update`].
pub type Listener = Box<dyn FnMut(Update<'_>)>;

/// A slider position model.
///
/// The model owns a validated [`SliderProps`] configuration, an ordered set
/// of handle positions ("currents"), and an optional listener. Index order of
/// the currents is the adjacency order used by margin correction; the model
/// never sorts them.
///
/// [`SliderModel::request_update`] is the only mutation path that corrects
/// positions. [`SliderModel::set_currents`] replaces them verbatim, for
/// initial assignment or restoring persisted state.
pub struct SliderModel {
    props: SliderProps,
    currents: Currents,
    listener: Option<Listener>,
}

impl SliderModel {
    /// Creates a model with default props, a single centered handle, and no
    /// listener.
    #[must_use]
    pub fn new() -> Self {
        Self {
            props: SliderProps::default(),
            currents: Currents::from_slice(&[5.0]),
            listener: None,
        }
    }

    /// Returns the current props.
    #[must_use]
    pub fn props(&self) -> SliderProps {
        self.props
    }

    /// Returns the stored currents in adjacency order.
    #[must_use]
    pub fn currents(&self) -> &[f64] {
        &self.currents
    }

    /// Replaces the props after validating them.
    ///
    /// On failure the previous props remain in effect and no other state is
    /// touched.
    pub fn set_props(&mut self, props: SliderProps) -> Result<(), PropsError> {
        props.validate()?;
        self.props = props;
        Ok(())
    }

    /// Replaces the stored currents verbatim, without correction.
    ///
    /// No listener notification is emitted. Use this for initial assignment
    /// or for restoring externally persisted positions; interactive updates
    /// go through [`SliderModel::request_update`].
    pub fn set_currents<I>(&mut self, currents: I)
    where
        I: IntoIterator<Item = f64>,
    {
        self.currents = currents.into_iter().collect();
    }

    /// Replaces the update listener.
    ///
    /// The model holds at most one listener; setting a new one drops the
    /// previous sink.
    pub fn set_listener<F>(&mut self, listener: F)
    where
        F: FnMut(Update<'_>) + 'static,
    {
        self.listener = Some(Box::new(listener));
    }

    /// Removes the update listener, if any.
    pub fn clear_listener(&mut self) {
        self.listener = None;
    }

    /// Corrects `new_currents`, stores the result, and notifies the listener.
    ///
    /// Each position that differs from the stored value at its index is run
    /// through the pipeline in strict order: snap to `step`, clamp to the
    /// `margin` against the stored neighbors, then clamp into `[min, max]`.
    /// Positions equal to their stored value pass through untouched. The
    /// corrected set is installed atomically and the listener is invoked
    /// synchronously, once, with [`Update::CurrentsUpdated`].
    ///
    /// Given valid props this cannot fail: the final bounds clamp is
    /// authoritative, so the stored result is always in range.
    pub fn request_update<I>(&mut self, new_currents: I)
    where
        I: IntoIterator<Item = f64>,
    {
        self.currents = self.correct_currents(new_currents);
        if let Some(listener) = self.listener.as_mut() {
            listener(Update::CurrentsUpdated(&self.currents));
        }
    }

    fn correct_currents<I>(&self, new_currents: I) -> Currents
    where
        I: IntoIterator<Item = f64>,
    {
        new_currents
            .into_iter()
            .enumerate()
            .map(|(index, value)| {
                // Indices beyond the stored set never compare equal, so a
                // growing update corrects every new position.
                if self.currents.get(index) == Some(&value) {
                    value
                } else {
                    let stepped = self.correct_to_step(value);
                    let spaced = self.correct_to_margin(index, stepped);
                    self.correct_to_ends(spaced)
                }
            })
            .collect()
    }

    fn correct_to_step(&self, value: f64) -> f64 {
        let step = self.props.step;
        // A step of zero means "no quantization"; the division below would
        // otherwise have to special-case it anyway.
        if step == 0.0 {
            value
        } else {
            libm::round(value / step) * step
        }
    }

    /// Enforces the margin against the neighbors at `index - 1` and
    /// `index + 1`, both read from the currents as stored before this update.
    ///
    /// At most one clamp applies; the previous neighbor wins when both
    /// conditions hold.
    fn correct_to_margin(&self, index: usize, value: f64) -> f64 {
        let margin = self.props.margin;
        let prev = index
            .checked_sub(1)
            .and_then(|i| self.currents.get(i))
            .copied();
        let next = self.currents.get(index + 1).copied();

        if let Some(prev) = prev
            && value - prev < margin
        {
            prev + margin
        } else if let Some(next) = next
            && next - value < margin
        {
            next - margin
        } else {
            value
        }
    }

    fn correct_to_ends(&self, value: f64) -> f64 {
        let SliderProps { min, max, .. } = self.props;
        if value < min {
            min
        } else if value > max {
            max
        } else {
            value
        }
    }
}

impl Default for SliderModel {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for SliderModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SliderModel")
            .field("props", &self.props)
            .field("currents", &self.currents)
            .field("listener", &self.listener.as_ref().map(|_| ".."))
            .finish()
    }
}
