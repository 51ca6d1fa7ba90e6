// Copyright 2025 the Glissade Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use glissade_scale::ScaleSpec;

fn bench_units(c: &mut Criterion) {
    let mut group = c.benchmark_group("scale/units");

    for ticks in [10_usize, 100, 1_000] {
        let spec = ScaleSpec {
            bounds: 0.0..ticks as f64,
            step: 1.0,
            with_value: true,
            show_value_each: 5,
        };
        group.throughput(Throughput::Elements(ticks as u64));

        group.bench_with_input(BenchmarkId::from_parameter(ticks), &spec, |b, spec| {
            b.iter(|| black_box(spec.units()));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_units);
criterion_main!(benches);
