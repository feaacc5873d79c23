//! Driver throughput: full unattended runs at zero delay.
//!
//! Run with:
//! `cargo bench -p sortvis-core --bench driver_tick`

use std::hint::black_box;
use std::time::Duration;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use sortvis_core::{Algorithm, AnimationDriver, Dataset, DriverConfig, Frame, RecordingCanvas};

fn bars(_: &mut Frame) {}

fn bench_full_runs(c: &mut Criterion) {
    let data = Dataset::new((0..50).rev().collect());
    let cfg = DriverConfig {
        delay_ms: 0,
        max_ticks_per_update: 256,
    };
    let mut group = c.benchmark_group("driver/full_run_50");

    for algo in Algorithm::ALL {
        group.bench_function(BenchmarkId::new("algorithm", algo.id()), |b| {
            b.iter(|| {
                let mut driver = AnimationDriver::new(data.clone(), cfg.clone());
                let mut canvas = RecordingCanvas::new();
                driver.sort(|values| algo.producer(values));
                while !driver.phase().is_complete() {
                    driver.update(Duration::from_millis(16), &mut canvas, bars);
                    // frames are only kept per update in a real host
                    canvas.clear();
                }
                black_box(driver.array());
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_full_runs);
criterion_main!(benches);
