//! Performance measurement for complete maze generation runs

// Criterion macros generate undocumented functions
#![allow(missing_docs)]

use criterion::{Criterion, criterion_group, criterion_main};
use mazecarve::MazeGenerator;
use std::hint::black_box;

/// Measures a full 32x32 run, 2047 steps from construction to completion
fn bench_generate_32x32(c: &mut Criterion) {
    c.bench_function("generate_32x32", |b| {
        b.iter(|| {
            let Ok(mut generator) = MazeGenerator::new(32, 32, Some(12345)) else {
                return;
            };
            generator.generate();
            black_box(generator.steps_taken());
        });
    });
}

/// Measures stepping with a snapshot taken per step, the animation workload
fn bench_step_and_snapshot_16x16(c: &mut Criterion) {
    c.bench_function("step_and_snapshot_16x16", |b| {
        b.iter(|| {
            let Ok(mut generator) = MazeGenerator::new(16, 16, Some(12345)) else {
                return;
            };
            while !generator.is_complete() {
                generator.step();
                black_box(generator.snapshot().current_index);
            }
        });
    });
}

criterion_group!(benches, bench_generate_32x32, bench_step_and_snapshot_16x16);
criterion_main!(benches);
