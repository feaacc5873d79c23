//! Run one sort without a window and print every frame as text bars.
//!
//! `RUST_LOG=debug cargo run -p sortvis-orchestrator-core --example headless_sort -- heap 42`

use std::time::Duration;

use anyhow::{Context, Result};
use sortvis_core::{Canvas, Frame, HighlightRole};
use sortvis_orchestrator::{ControlPanel, Intent, Orchestrator, OrchestratorConfig};
use tracing_subscriber::EnvFilter;

struct TextCanvas {
    frames: usize,
}

impl Canvas for TextCanvas {
    fn draw(&mut self, frame: &Frame) {
        self.frames += 1;
        println!("-- frame {} ({}, {:?})", self.frames, frame.phase.name(), frame.layout);
        for (index, value) in frame.values.iter().enumerate() {
            let marker = frame
                .highlights
                .iter()
                .find(|h| h.index == index)
                .map(|h| match h.role {
                    HighlightRole::Compare => '?',
                    HighlightRole::Swap => '<',
                    HighlightRole::Write => '=',
                    HighlightRole::Pivot => 'p',
                    HighlightRole::Sorted => '*',
                })
                .unwrap_or(' ');
            let bar = "#".repeat((*value).max(0) as usize / 4);
            println!("{marker} {value:>4} {bar}");
        }
    }

    fn draw_placeholder(&mut self, message: &str) {
        println!("[{message}]");
    }
}

struct PrintControls;

impl ControlPanel for PrintControls {
    fn set_running_state(&mut self, running: bool) {
        println!("(controls: running = {running})");
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut args = std::env::args().skip(1);
    let mode = args.next().unwrap_or_else(|| "basic".to_string());
    let seed = args
        .next()
        .map(|s| s.parse::<u64>())
        .transpose()
        .context("seed must be an unsigned integer")?;

    let cfg = OrchestratorConfig {
        initial_mode: mode,
        seed,
        ..OrchestratorConfig::default()
    };
    let mut orch = Orchestrator::new(cfg, TextCanvas { frames: 0 }, PrintControls)
        .context("failed to build orchestrator")?;
    println!("{}", orch.status());

    orch.dispatch(Intent::Start);
    println!("{}", orch.status());
    while orch.status() != "Sort complete!" {
        orch.update(Duration::from_millis(orch.delay_ms()));
    }
    println!("{}", orch.status());
    Ok(())
}
