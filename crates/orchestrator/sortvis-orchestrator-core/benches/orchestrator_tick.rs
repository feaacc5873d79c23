//! Orchestrator update loop at 60 Hz frame times.
//!
//! Run with:
//! `cargo bench -p sortvis-orchestrator-core --bench orchestrator_tick`

use std::hint::black_box;
use std::time::Duration;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use sortvis_core::RecordingCanvas;
use sortvis_orchestrator::{Intent, Orchestrator, OrchestratorConfig, RecordingControls};

const FRAME: Duration = Duration::from_millis(16);

fn bench_modes(c: &mut Criterion) {
    let mut group = c.benchmark_group("orchestrator/full_run");
    for mode in ["basic", "quick", "merge", "heap"] {
        group.bench_function(BenchmarkId::new("mode", mode), |b| {
            b.iter(|| {
                let cfg = OrchestratorConfig {
                    seed: Some(9),
                    default_data_size: 40,
                    initial_mode: mode.to_string(),
                    ..OrchestratorConfig::default()
                };
                let Ok(mut orch) =
                    Orchestrator::new(cfg, RecordingCanvas::new(), RecordingControls::new())
                else {
                    return;
                };
                orch.dispatch(Intent::SpeedChange { ms: 10 });
                orch.dispatch(Intent::Start);
                while orch.status() != "Sort complete!" {
                    orch.update(FRAME);
                    orch.canvas_mut().clear();
                }
                black_box(orch.values());
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_modes);
criterion_main!(benches);
