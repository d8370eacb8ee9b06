//! Microbenchmarks for sequence generation and offset mapping.

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use wheelpick_core::{WheelGeometry, generate, repeat_count};

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");

    group.bench_function("hours_circular", |b| {
        let repeat = repeat_count(24, true);
        b.iter(|| generate(black_box(24), 1, true, repeat, true, 1));
    });

    group.bench_function("minutes_bounded", |b| {
        b.iter(|| generate(black_box(60), 1, true, 1, false, 2));
    });

    group.finish();
}

fn bench_value_at_offset(c: &mut Criterion) {
    let geometry = WheelGeometry {
        interval: 1,
        number_of_items: 60,
        pad_with_n_items: 1,
        repeat_count: repeat_count(60, true),
        circular: true,
    };

    c.bench_function("value_at_offset_sweep", |b| {
        b.iter(|| {
            let mut acc = 0i64;
            for step in 0..180 {
                let sample = geometry.value_at_offset(black_box(step as f32 * 50.0), 50.0);
                acc += sample.value;
            }
            acc
        });
    });
}

criterion_group!(benches, bench_generate, bench_value_at_offset);
criterion_main!(benches);
