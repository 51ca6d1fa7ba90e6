// Copyright 2025 the Glissade Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `glissade_model` crate.
//!
//! These exercise the correction pipeline end to end — step, margin, and
//! bounds interacting across whole updates — plus the validation gate and
//! the listener contract. Single-correction behavior is covered by the unit
//! tests next to the implementation.

use std::cell::RefCell;
use std::rc::Rc;

use glissade_model::{PropsError, SliderModel, SliderProps, Update};

const EPSILON: f64 = 1e-9;

fn model_with(props: SliderProps, currents: &[f64]) -> SliderModel {
    let mut model = SliderModel::new();
    model.set_props(props).unwrap();
    model.set_currents(currents.iter().copied());
    model
}

#[test]
fn rejects_invalid_props_and_keeps_previous_configuration() {
    let valid = SliderProps {
        min: 0.0,
        max: 100.0,
        step: 1.0,
        margin: 1.0,
    };
    let mut model = model_with(valid, &[10.0]);

    let result = model.set_props(SliderProps {
        min: -1.0,
        max: 10.0,
        step: 1.0,
        margin: 1.0,
    });

    assert_eq!(result, Err(PropsError::NegativeMin));
    assert_eq!(model.props(), valid);

    // The model still corrects against the surviving configuration.
    model.request_update([12.4]);
    assert_eq!(model.currents(), &[12.0]);
}

#[test]
fn each_validation_rule_rejects() {
    let mut model = SliderModel::new();
    let cases = [
        (-1.0, 10.0, 1.0, 1.0, PropsError::NegativeMin),
        (0.0, -5.0, 1.0, 1.0, PropsError::NonPositiveMax),
        (10.0, 5.0, 1.0, 1.0, PropsError::MaxNotAboveMin),
        (0.0, 10.0, 20.0, 1.0, PropsError::StepExceedsRange),
        (0.0, 10.0, -1.0, 1.0, PropsError::NegativeStep),
        (0.0, 10.0, 1.0, 20.0, PropsError::MarginExceedsRange),
        (0.0, 10.0, 1.0, -1.0, PropsError::NegativeMargin),
    ];

    for (min, max, step, margin, expected) in cases {
        let result = model.set_props(SliderProps {
            min,
            max,
            step,
            margin,
        });
        assert_eq!(
            result,
            Err(expected),
            "props ({min}, {max}, {step}, {margin})"
        );
    }
}

#[test]
fn tie_break_prefers_the_previous_neighbor() {
    // Stored [20, 30], margin 10. Moving index 0 to 25 has no previous
    // neighbor, and the next neighbor pulls it back to 30 - 10 = 20.
    let mut model = model_with(
        SliderProps {
            min: 0.0,
            max: 100.0,
            step: 1.0,
            margin: 10.0,
        },
        &[20.0, 30.0],
    );

    model.request_update([25.0, 30.0]);
    assert_eq!(model.currents(), &[20.0, 30.0]);
}

#[test]
fn unchanged_positions_pass_through_without_resnapping() {
    let mut model = model_with(
        SliderProps {
            min: 0.0,
            max: 100.0,
            step: 5.0,
            margin: 2.0,
        },
        &[10.0, 50.0],
    );

    model.request_update([10.0, 55.0]);
    assert_eq!(model.currents(), &[10.0, 55.0]);
}

#[test]
fn corrected_positions_stay_in_bounds_and_on_step() {
    // Bounds and margin are step multiples here, so every correction —
    // snap, neighbor clamp, end clamp — lands on a step multiple.
    let props = SliderProps {
        min: 0.0,
        max: 99.0,
        step: 3.0,
        margin: 6.0,
    };
    let mut model = model_with(props, &[9.0, 39.0, 69.0]);

    let candidates = [
        [12.2, 38.9, 71.4],
        [-50.0, 41.0, 260.0],
        [10.0, 10.5, 11.0],
        [97.0, 98.0, 99.0],
    ];

    for candidate in candidates {
        model.request_update(candidate);

        for &p in model.currents() {
            assert!(
                (props.min..=props.max).contains(&p),
                "position {p} out of bounds for input {candidate:?}"
            );

            let snapped = (p / props.step).round() * props.step;
            assert!(
                (p - snapped).abs() < EPSILON,
                "position {p} off step for input {candidate:?}"
            );
        }
    }
}

#[test]
fn single_handle_moves_keep_the_margin_or_hit_an_end() {
    // When one index moves against a margin-consistent stored set, every
    // adjacent gap in the result holds the margin unless the bounds clamp
    // overrode it at an end.
    let props = SliderProps {
        min: 0.0,
        max: 100.0,
        step: 1.0,
        margin: 8.0,
    };
    let baseline = [10.0, 50.0, 90.0];
    let mut model = model_with(props, &baseline);

    for index in 0..baseline.len() {
        for delta in [-200.0, -45.0, -8.5, -3.0, 3.0, 8.5, 45.0, 200.0] {
            model.set_currents(baseline);

            let mut candidate = baseline;
            candidate[index] += delta;
            model.request_update(candidate);

            let corrected: Vec<f64> = model.currents().to_vec();
            for pair in corrected.windows(2) {
                let held = pair[1] - pair[0] >= props.margin - EPSILON;
                let clamped = corrected
                    .iter()
                    .any(|&p| p == props.min || p == props.max);
                assert!(
                    held || clamped,
                    "margin broken without end clamp: {corrected:?} \
                     (index {index}, delta {delta})"
                );
            }
        }
    }
}

#[test]
fn correction_is_a_fixed_point() {
    let mut model = model_with(
        SliderProps {
            min: 0.0,
            max: 100.0,
            step: 4.0,
            margin: 6.0,
        },
        &[20.0, 50.0, 80.0],
    );

    model.request_update([21.0, 49.0, 83.0]);
    let first: Vec<f64> = model.currents().to_vec();

    model.request_update(first.iter().copied());
    assert_eq!(model.currents(), first.as_slice());

    model.request_update(first.iter().copied());
    assert_eq!(model.currents(), first.as_slice());
}

#[test]
fn listener_is_notified_once_per_update_with_the_stored_set() {
    let mut model = model_with(
        SliderProps {
            min: 0.0,
            max: 100.0,
            step: 5.0,
            margin: 0.0,
        },
        &[50.0],
    );

    let notifications: Rc<RefCell<Vec<Vec<f64>>>> = Rc::default();
    let sink = Rc::clone(&notifications);
    model.set_listener(move |update| {
        let Update::CurrentsUpdated(currents) = update;
        sink.borrow_mut().push(currents.to_vec());
    });

    model.request_update([52.0]);
    model.request_update([67.0]);

    let seen = notifications.borrow();
    assert_eq!(seen.len(), 2);
    assert_eq!(seen[0], [50.0]);
    assert_eq!(seen[1], [65.0]);
    assert_eq!(seen[1], model.currents());
}

#[test]
fn replacing_the_listener_drops_the_previous_sink() {
    let mut model = SliderModel::new();

    let first_calls = Rc::new(RefCell::new(0_u32));
    let first_sink = Rc::clone(&first_calls);
    model.set_listener(move |_| *first_sink.borrow_mut() += 1);

    let second_calls = Rc::new(RefCell::new(0_u32));
    let second_sink = Rc::clone(&second_calls);
    model.set_listener(move |_| *second_sink.borrow_mut() += 1);

    model.request_update([6.0]);

    assert_eq!(*first_calls.borrow(), 0);
    assert_eq!(*second_calls.borrow(), 1);
}
