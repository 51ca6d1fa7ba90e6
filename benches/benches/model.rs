// Copyright 2025 the Glissade Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use glissade_model::{SliderModel, SliderProps};

fn bench_request_update(c: &mut Criterion) {
    let mut group = c.benchmark_group("model/request_update");

    // Correction cost is per changed index; unchanged indices short-circuit.
    for handles in [1_usize, 2, 8, 64] {
        let stored: Vec<f64> = (0..handles).map(|i| i as f64 * 10.0).collect();
        let moved: Vec<f64> = stored.iter().map(|c| c + 3.3).collect();
        group.throughput(Throughput::Elements(handles as u64));

        group.bench_with_input(
            BenchmarkId::new("all_changed", handles),
            &moved,
            |b, moved| {
                b.iter_batched(
                    || {
                        let mut model = SliderModel::new();
                        model
                            .set_props(SliderProps {
                                min: 0.0,
                                max: 1_000.0,
                                step: 0.5,
                                margin: 5.0,
                            })
                            .unwrap();
                        model.set_currents(stored.iter().copied());
                        model
                    },
                    |mut model| {
                        model.request_update(moved.iter().copied());
                        black_box(model);
                    },
                    BatchSize::SmallInput,
                );
            },
        );

        group.bench_with_input(
            BenchmarkId::new("none_changed", handles),
            &stored,
            |b, stored| {
                b.iter_batched(
                    || {
                        let mut model = SliderModel::new();
                        model
                            .set_props(SliderProps {
                                min: 0.0,
                                max: 1_000.0,
                                step: 0.5,
                                margin: 5.0,
                            })
                            .unwrap();
                        model.set_currents(stored.iter().copied());
                        model
                    },
                    |mut model| {
                        model.request_update(stored.iter().copied());
                        black_box(model);
                    },
                    BatchSize::SmallInput,
                );
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_request_update);
criterion_main!(benches);
